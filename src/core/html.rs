// src/core/html.rs

// Small helpers over the `scraper` DOM. CSS selectors can't ask for
// "direct child text node", which the site's markup makes us care
// about: list items nest anchors, and anchors may nest spans whose
// text is NOT the title.

use scraper::ElementRef;

/// Direct text children of `el`, in document order.
/// Text inside nested elements does not count.
pub fn direct_text<'a>(el: ElementRef<'a>) -> impl Iterator<Item = &'a str> {
    el.children().filter_map(|n| n.value().as_text().map(|t| &**t))
}

/// First direct text child of `el`, if any.
pub fn first_text(el: ElementRef<'_>) -> Option<&str> {
    direct_text(el).next()
}

/// First direct `<a>` child of `el`, if any.
pub fn first_child_anchor<'a>(el: ElementRef<'a>) -> Option<ElementRef<'a>> {
    el.children()
        .filter_map(ElementRef::wrap)
        .find(|c| c.value().name() == "a")
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::{Html, Selector};

    fn first_li(doc: &Html) -> ElementRef<'_> {
        let sel = Selector::parse("li").unwrap();
        doc.select(&sel).next().unwrap()
    }

    #[test]
    fn first_text_skips_nested_elements() {
        let doc = Html::parse_fragment("<li><b>bold</b>plain</li>");
        assert_eq!(first_text(first_li(&doc)), Some("plain"));
    }

    #[test]
    fn first_child_anchor_ignores_deeper_anchors() {
        let doc = Html::parse_fragment(r#"<li><span><a href="/x">deep</a></span></li>"#);
        assert!(first_child_anchor(first_li(&doc)).is_none());

        let doc = Html::parse_fragment(r#"<li><a href="/y">direct</a></li>"#);
        let a = first_child_anchor(first_li(&doc)).unwrap();
        assert_eq!(a.value().attr("href"), Some("/y"));
    }
}
