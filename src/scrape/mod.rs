// src/scrape/mod.rs
mod listing;
mod majors;
mod profile;
mod scrape;

pub use listing::{AdvisorRecord, ListingBundle};
pub use listing::{derive_page_url, extract_listing, parse_page_count, split_title};
pub use majors::{MajorLink, extract_majors};
pub use profile::extract_info;
pub use scrape::{CrawlSummary, crawl};
