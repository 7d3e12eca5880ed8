// src/scrape/scrape.rs
use std::error::Error;

use log::warn;
use scraper::Html;

use crate::{
    config::options::Params,
    core::net::Fetch,
    file,
    progress::Progress,
};

use super::listing::{self, AdvisorRecord};
use super::{majors, profile};

/// What one full run did. Skips are per the failure ladder: a dead
/// index aborts, a dead category landing page drops the major, a dead
/// listing page drops just that page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CrawlSummary {
    pub majors_seen: usize,
    pub majors_skipped: usize,
    pub pages_fetched: usize,
    pub pages_skipped: usize,
    pub records_written: usize,
}

/// Run the whole crawl: index → majors → pages → records.
/// Strictly sequential, one request at a time, append after every
/// page so a late failure cannot take earlier pages with it.
pub fn crawl(
    fetch: &dyn Fetch,
    params: &Params,
    mut progress: Option<&mut dyn Progress>,
) -> Result<CrawlSummary, Box<dyn Error>> {
    let body = fetch
        .get(&params.index_url)
        .map_err(|e| format!("index page fetch failed: {e}"))?;
    let doc = Html::parse_document(&body);
    let majors = majors::extract_majors(&doc, &params.base_origin);

    let mut summary = CrawlSummary {
        majors_seen: majors.len(),
        ..CrawlSummary::default()
    };

    if let Some(p) = progress.as_deref_mut() {
        p.begin(majors.len());
        if majors.is_empty() {
            p.log("No majors on the index page; nothing to crawl");
        }
    }

    for major in &majors {
        let pages = match read_page_count(fetch, &major.url) {
            Ok(n) => n,
            Err(e) => {
                warn!("{}: {e}; skipping major", major.name);
                summary.majors_skipped += 1;
                continue;
            }
        };

        if let Some(p) = progress.as_deref_mut() {
            p.major_started(&major.name, pages);
        }

        for page in 1..=pages {
            let url = listing::derive_page_url(&major.url, page);
            let body = match fetch.get(&url) {
                Ok(b) => b,
                Err(e) => {
                    warn!("{} page {page}: {e}; skipping page", major.name);
                    summary.pages_skipped += 1;
                    continue;
                }
            };
            summary.pages_fetched += 1;

            let doc = Html::parse_document(&body);
            let bundle = listing::extract_listing(&doc, &major.name, &params.base_origin);
            file::append_records(&params.out, &bundle.records)?;
            summary.records_written += bundle.records.len();

            if params.profiles {
                save_profiles(fetch, params, &bundle.records);
            }

            if let Some(p) = progress.as_deref_mut() {
                p.page_done(&major.name, page, bundle.items);
            }
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }

    Ok(summary)
}

/// Fetch a category's landing page and read its page count.
/// Any failure here (fetch, missing pager, bad count) costs the major.
fn read_page_count(fetch: &dyn Fetch, major_url: &str) -> Result<u32, Box<dyn Error>> {
    let body = fetch.get(major_url)?;
    let doc = Html::parse_document(&body);
    let text = listing::pager_text(&doc).ok_or("pager text not found")?;
    listing::parse_page_count(&text)
}

/// Visit each advisor's profile page and append the biography to the
/// companion info file. Purely additive: every failure is logged and
/// skipped so enrichment can never cost a record.
fn save_profiles(fetch: &dyn Fetch, params: &Params, records: &[AdvisorRecord]) {
    for rec in records {
        let body = match fetch.get(&rec.url) {
            Ok(b) => b,
            Err(e) => {
                warn!("profile fetch failed for {}: {e}", rec.name);
                continue;
            }
        };
        let doc = Html::parse_document(&body);
        let info = profile::extract_info(&doc);
        if info.is_empty() {
            warn!("no biography found for {}", rec.name);
            continue;
        }
        if let Err(e) = file::append_info(&params.info_path(), rec, &info) {
            warn!("info write failed for {}: {e}", rec.name);
        }
    }
}
