// src/scrape/profile.rs

use scraper::{Html, Selector};

use crate::core::html::direct_text;

/// Biography fragments on an advisor's profile page. The site splits
/// one paragraph of prose across many nested spans.
const INFO_SPANS: &str = "#fontzoom > p > span > span";

/// All biography text from a profile page, fragments joined with no
/// separator. Empty string when the container is absent.
pub fn extract_info(doc: &Html) -> String {
    let sel = Selector::parse(INFO_SPANS).unwrap();
    let mut info = s!();
    for span in doc.select(&sel) {
        for t in direct_text(span) {
            info.push_str(t);
        }
    }
    info
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragments_join_without_separator() {
        let doc = Html::parse_document(
            r#"<div id="fontzoom">
                <p><span><span>王强，男，</span></span></p>
                <p><span><span>教授，博士生导师。</span></span></p>
            </div>"#,
        );
        assert_eq!(extract_info(&doc), "王强，男，教授，博士生导师。");
    }

    #[test]
    fn missing_container_gives_empty_info() {
        let doc = Html::parse_document("<div id='other'><p>text</p></div>");
        assert_eq!(extract_info(&doc), "");
    }
}
