// src/specs/reviews.rs
//! Scraping spec for the product-review page.
//!
//! The page renders each customer review as a `div` block; the first block
//! carries a different class list than the rest (`mt3-l` vs `mt4-l`), so
//! collection is "first block, then the others" in document order.
//!
//! Every field lookup is tolerant: a missing sub-element yields the field's
//! default, never an error. A fully empty block still produces a complete
//! eight-field record.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use crate::core::extract::{collect_text, field_or, first, has_class, sel, text_of};
use crate::core::sanitize::strip_parens;

/// CSV column order. Fixed; every record fills all eight.
pub const FIELDS: [&str; 8] = [
    "rating",
    "date",
    "reviewer",
    "title",
    "content",
    "verified_purchase",
    "color",
    "helpful_votes",
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Review {
    /// Count of filled star icons, 0..=5 on this page.
    pub rating: u8,
    pub date: String,
    pub reviewer: String,
    pub title: String,
    pub content: String,
    pub verified_purchase: bool,
    pub color: String,
    /// Kept as the page's numeric string, parens stripped.
    pub helpful_votes: String,
}

impl Default for Review {
    fn default() -> Self {
        Self {
            rating: 0,
            date: s!("N/A"),
            reviewer: s!("Anonymous"),
            title: s!(),
            content: s!(),
            verified_purchase: false,
            color: s!(),
            helpful_votes: s!("0"),
        }
    }
}

impl Review {
    /// One CSV row, in `FIELDS` order.
    pub fn row(&self) -> Vec<String> {
        vec![
            self.rating.to_string(),
            self.date.clone(),
            self.reviewer.clone(),
            self.title.clone(),
            self.content.clone(),
            self.verified_purchase.to_string(),
            self.color.clone(),
            self.helpful_votes.clone(),
        ]
    }
}

/// Class marking a star icon as filled; its siblings carry `w_eDrS` (empty).
const STAR_FILLED: &str = "w_1jp4";

struct Selectors {
    first_block: Selector,
    other_blocks: Selector,
    rating_box: Selector,
    star: Selector,
    date_main: Selector,
    date_box: Selector,
    date_inner: Selector,
    reviewer: Selector,
    title: Selector,
    content: Selector,
    verified: Selector,
    color_box: Selector,
    color_row: Selector,
    vote_button: Selector,
    vote_count: Selector,
}

static SEL: LazyLock<Selectors> = LazyLock::new(|| Selectors {
    first_block: sel("div.overflow-visible.b--none.mt3-l.ma0.dark-gray"),
    other_blocks: sel("div.overflow-visible.b--none.mt4-l.ma0.dark-gray"),
    rating_box: sel("div.w_ExHd"),
    star: sel("svg.w_D5ag, svg.w_6H0I"),
    date_main: sel("div.f7.gray.flex.flex-auto.flex-none-l.tr.tl-l.justify-end.justify-start-l"),
    date_box: sel("div.flex.justify-between.items-center.self-stretch.self-start-m"),
    date_inner: sel("div.f7.gray"),
    reviewer: sel("span.f7.b.mv0"),
    title: sel("h3.w_kV33.w_Sl3f.w_mvVb.f5.b"),
    content: sel("span.tl-m.db-m"),
    verified: sel("span.b.f7.dark-gray"),
    color_box: sel("div.flex.f7.items-start.content-start.self-stretch.flex-wrap.mt1"),
    color_row: sel("div.flex"),
    vote_button: sel("button.flex.items-center.sans-serif.ph2.b--none.bg-transparent.pointer"),
    vote_count: sel("span.ml1.f7.dark-gray"),
});

/// Extract every review on the page: first-selector block (if present),
/// then the remaining blocks in document order.
pub fn extract(doc: &Html) -> Vec<Review> {
    let first_block = doc.select(&SEL.first_block).next();
    first_block
        .into_iter()
        .chain(doc.select(&SEL.other_blocks))
        .map(extract_one)
        .collect()
}

fn extract_one(section: ElementRef<'_>) -> Review {
    Review {
        rating: rating(section),
        date: date(section),
        reviewer: field_or(s!("Anonymous"), || text_of(section, &SEL.reviewer)),
        title: field_or(s!(), || text_of(section, &SEL.title)),
        content: field_or(s!(), || text_of(section, &SEL.content)),
        verified_purchase: verified(section),
        color: field_or(s!(), || color(section)),
        helpful_votes: field_or(s!("0"), || helpful_votes(section)),
    }
}

/// Filled stars under the rating box. No box → 0; the page never renders
/// more than five icons, so no extra clamp.
fn rating(section: ElementRef<'_>) -> u8 {
    let Some(rating_box) = first(section, &SEL.rating_box) else {
        return 0;
    };
    rating_box
        .select(&SEL.star)
        .filter(|star| has_class(*star, STAR_FILLED))
        .count() as u8
}

/// Primary date node first, then the variant nested under the header row.
fn date(section: ElementRef<'_>) -> String {
    if let Some(text) = text_of(section, &SEL.date_main) {
        return text;
    }
    field_or(s!("N/A"), || {
        first(section, &SEL.date_box).and_then(|row| text_of(row, &SEL.date_inner))
    })
}

fn verified(section: ElementRef<'_>) -> bool {
    first(section, &SEL.verified)
        .map(|el| collect_text(el).contains("Verified Purchase"))
        .unwrap_or(false)
}

/// "Color: Navy Blue" → "Navy Blue". Only the labeled variant row counts.
fn color(section: ElementRef<'_>) -> Option<String> {
    let row = first(section, &SEL.color_box)?;
    let label = first(row, &SEL.color_row)?;
    let text = collect_text(label);
    if !text.contains("Color") {
        return None;
    }
    let (_, value) = text.split_once(':')?;
    Some(value.trim().to_string())
}

/// The thumbs-up button carries the count span; the value comes wrapped in
/// parens. Thumbs-down buttons share the class list, so match on the icon.
fn helpful_votes(section: ElementRef<'_>) -> Option<String> {
    section
        .select(&SEL.vote_button)
        .find(|button| button.html().contains("thumbsUp"))
        .and_then(|button| text_of(button, &SEL.vote_count))
        .map(|count| strip_parens(&count))
}
