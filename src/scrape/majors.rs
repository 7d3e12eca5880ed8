// src/scrape/majors.rs

use scraper::{Html, Selector};

use super::listing::resolve_href;
use crate::core::html::first_text;

/// One major category from the index side menu.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MajorLink {
    pub name: String,
    pub url: String,
}

/// Anchors of the index page's side menu, one per major.
const MENU_ANCHORS: &str = "#sideMenu > div > ul > li > a";

/// Ordered major list from the index page. A missing menu, or a menu
/// whose anchors lack text or href, just yields fewer entries; an
/// empty list means there is nothing to crawl, which is not an error.
pub fn extract_majors(doc: &Html, base: &str) -> Vec<MajorLink> {
    let sel = Selector::parse(MENU_ANCHORS).unwrap();
    let mut majors = Vec::new();

    for a in doc.select(&sel) {
        let Some(name) = first_text(a) else { continue };
        let Some(href) = a.value().attr("href") else { continue };
        majors.push(MajorLink {
            name: s!(name),
            url: resolve_href(base, href),
        });
    }
    majors
}

#[cfg(test)]
mod tests {
    use super::*;

    const INDEX: &str = r#"
        <div id="sideMenu"><div><ul>
            <li><a href="/List_81/Index.aspx">中医学</a></li>
            <li><a href="/List_82/Index.aspx">中药学</a></li>
            <li><a>无链接</a></li>
        </ul></div></div>"#;

    #[test]
    fn majors_come_from_side_menu_in_order() {
        let doc = Html::parse_document(INDEX);
        let majors = extract_majors(&doc, "https://h");
        assert_eq!(majors.len(), 2);
        assert_eq!(majors[0].name, "中医学");
        assert_eq!(majors[0].url, "https://h/List_81/Index.aspx");
        assert_eq!(majors[1].name, "中药学");
    }

    #[test]
    fn missing_menu_yields_no_majors() {
        let doc = Html::parse_document("<div id='content'>nothing here</div>");
        assert!(extract_majors(&doc, "https://h").is_empty());
    }

    #[test]
    fn nested_anchors_are_not_menu_entries() {
        // The menu selector wants direct anchors; a wrapped one is skipped.
        let doc = Html::parse_document(
            r#"<div id="sideMenu"><div><ul>
                <li><span><a href="/x">埋得太深</a></span></li>
            </ul></div></div>"#,
        );
        assert!(extract_majors(&doc, "https://h").is_empty());
    }
}
