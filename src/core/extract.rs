// src/core/extract.rs

// Tolerant field extraction over a parsed document. Absence of a node is
// normal on this page, not an error: callers supply the default.

use scraper::{ElementRef, Selector};

use super::sanitize::normalize_ws;

/// Parse a selector literal. Only called on compile-time constants, so a
/// parse failure is a typo in this crate, not a runtime condition.
pub fn sel(css: &str) -> Selector {
    Selector::parse(css).expect("selector literal")
}

/// Lookup-or-default: run `lookup`, fall back to `default` on a miss.
pub fn field_or<T>(default: T, lookup: impl FnOnce() -> Option<T>) -> T {
    lookup().unwrap_or(default)
}

/// First descendant of `scope` matching `selector`, if any.
pub fn first<'a>(scope: ElementRef<'a>, selector: &Selector) -> Option<ElementRef<'a>> {
    scope.select(selector).next()
}

/// Whitespace-squeezed text of the first match under `scope`.
pub fn text_of(scope: ElementRef<'_>, selector: &Selector) -> Option<String> {
    first(scope, selector).map(collect_text)
}

/// All text under `el`, entities already decoded by the parser.
pub fn collect_text(el: ElementRef<'_>) -> String {
    normalize_ws(&el.text().collect::<String>())
}

pub fn has_class(el: ElementRef<'_>, class: &str) -> bool {
    el.value().classes().any(|c| c == class)
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    #[test]
    fn field_or_uses_default_on_miss() {
        assert_eq!(field_or(s!("N/A"), || None), "N/A");
        assert_eq!(field_or(s!("N/A"), || Some(s!("x"))), "x");
    }

    #[test]
    fn text_of_squeezes_whitespace() {
        let doc = Html::parse_fragment("<div><span class=\"a\"> hello\n  world </span></div>");
        let root = doc.root_element();
        assert_eq!(text_of(root, &sel("span.a")), Some(s!("hello world")));
        assert_eq!(text_of(root, &sel("span.b")), None);
    }

    #[test]
    fn has_class_matches_whole_tokens() {
        let doc = Html::parse_fragment("<p class=\"w_1jp4 big\"></p>");
        let p = first(doc.root_element(), &sel("p")).unwrap();
        assert!(has_class(p, "w_1jp4"));
        assert!(!has_class(p, "w_1"));
    }
}
