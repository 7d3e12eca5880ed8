// src/scrape/listing.rs

use std::error::Error;

use scraper::{Html, Selector};

use crate::core::html::{first_child_anchor, first_text};

/// One advisor row, ready for export.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdvisorRecord {
    pub major: String,
    pub subject: String,
    pub name: String,
    pub url: String,
}

/// Everything taken from one listing page.
pub struct ListingBundle {
    /// List items seen, advisors and section headings alike.
    /// Reported per page; only a subset becomes records.
    pub items: usize,
    pub records: Vec<AdvisorRecord>,
}

// Pager text markers, e.g. "共562条记录 共29页" → 29 pages.
const PAGE_COUNT_OPEN: char = '共';
const PAGE_COUNT_CLOSE: char = '页';

/// Listing titles fuse subject and advisor name, e.g. "中医内科学—张三".
const TITLE_DELIM: char = '—';

/// List items of a category's content pane.
const LIST_ITEMS: &str = "div.mBd > ul > li";
/// The pager's current-page chip; its text carries the page count.
const PAGER_DISABLED: &str = "div.pager > span.disabled";

/* ---------- page accounting ---------- */

/// Text of the pager chip on a category's landing page, if present.
pub fn pager_text(doc: &Html) -> Option<String> {
    let sel = Selector::parse(PAGER_DISABLED).unwrap();
    let el = doc.select(&sel).next()?;
    first_text(el).map(|t| s!(t))
}

/// Read the total page count out of the pager text.
/// The count sits between the last `共` and the first `页` after it.
/// Both markers are required, so garbled pager text can never turn
/// into a plausible-looking page count.
pub fn parse_page_count(text: &str) -> Result<u32, Box<dyn Error>> {
    let tail = match text.rfind(PAGE_COUNT_OPEN) {
        Some(i) => &text[i + PAGE_COUNT_OPEN.len_utf8()..],
        None => return Err(format!("no '{PAGE_COUNT_OPEN}' in pager text: {text:?}").into()),
    };
    let digits = match tail.find(PAGE_COUNT_CLOSE) {
        Some(i) => &tail[..i],
        None => return Err(format!("no '{PAGE_COUNT_CLOSE}' in pager text: {text:?}").into()),
    };
    Ok(digits.trim().parse()?)
}

/// Page n of a category, by suffix substitution:
/// ".../Index.aspx" + 3 → ".../Index_3.aspx".
/// Only a trailing ".aspx" is rewritten; anything else passes through
/// untouched, which turns every page of that category into the same URL.
pub fn derive_page_url(major_url: &str, page: u32) -> String {
    match major_url.strip_suffix(".aspx") {
        Some(stem) => format!("{stem}_{page}.aspx"),
        None => s!(major_url),
    }
}

/* ---------- extraction ---------- */

/// "中医内科学—张三" → ("中医内科学", "张三").
/// Subject is everything before the first delimiter, name everything
/// after the last. Without a delimiter both halves are the whole title.
pub fn split_title(title: &str) -> (String, String) {
    let subject = title.split(TITLE_DELIM).next().unwrap_or(title);
    let name = title.rsplit(TITLE_DELIM).next().unwrap_or(title);
    (s!(subject), s!(name))
}

/// Absolute URL from a site-relative href, by plain concatenation.
/// No normalization: a doubled slash stays doubled.
pub(crate) fn resolve_href(base: &str, href: &str) -> String {
    format!("{base}{href}")
}

/// Pull advisor entries out of one listing page.
/// Pure tree walk; the caller decides where records go.
pub fn extract_listing(doc: &Html, major: &str, base: &str) -> ListingBundle {
    let sel = Selector::parse(LIST_ITEMS).unwrap();
    let mut items = 0usize;
    let mut records = Vec::new();

    for li in doc.select(&sel) {
        items += 1;

        // Section headings carry no anchor; they are not advisors.
        let Some(a) = first_child_anchor(li) else { continue };
        let Some(href) = a.value().attr("href") else { continue };
        let Some(title) = first_text(a) else { continue };

        let (subject, name) = split_title(title);
        records.push(AdvisorRecord {
            major: s!(major),
            subject,
            name,
            url: resolve_href(base, href),
        });
    }

    ListingBundle { items, records }
}
