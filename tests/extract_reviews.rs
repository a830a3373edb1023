// tests/extract_reviews.rs
use scraper::Html;

use wm_scrape::specs::reviews::{self, Review};

const PAGE: &str = include_str!("fixtures/review_page.html");

fn parse_fixture() -> Vec<Review> {
    reviews::extract(&Html::parse_document(PAGE))
}

#[test]
fn finds_every_block_on_the_page() {
    let reviews = parse_fixture();
    assert_eq!(reviews.len(), 3);
}

#[test]
fn filled_star_count_is_the_rating() {
    let reviews = parse_fixture();
    assert_eq!(reviews[0].rating, 4); // 4 filled + 1 empty
    assert_eq!(reviews[1].rating, 3); // 3 filled + 2 empty
    assert_eq!(reviews[2].rating, 0); // no rating box at all
}

#[test]
fn date_prefers_primary_node_then_nested_fallback() {
    let reviews = parse_fixture();
    assert_eq!(reviews[0].date, "July 14, 2025"); // primary selector
    assert_eq!(reviews[1].date, "June 2, 2025"); // nested under the header row
    assert_eq!(reviews[2].date, "N/A");
}

#[test]
fn missing_reviewer_defaults_to_anonymous() {
    let reviews = parse_fixture();
    assert_eq!(reviews[0].reviewer, "Maria");
    assert_eq!(reviews[1].reviewer, "Anonymous");
}

#[test]
fn title_and_content_default_to_empty() {
    let reviews = parse_fixture();
    assert_eq!(reviews[0].title, "Boils fast, lid sticks");
    assert_eq!(reviews[1].title, "");
    assert_eq!(reviews[1].content, "Decent for the price.");
    assert_eq!(reviews[2].content, "");
}

#[test]
fn verified_needs_the_literal_badge_text() {
    let reviews = parse_fixture();
    assert!(reviews[0].verified_purchase);
    // Same span class, different text: not a purchase badge.
    assert!(!reviews[1].verified_purchase);
}

#[test]
fn color_comes_from_the_labeled_variant_row() {
    let reviews = parse_fixture();
    assert_eq!(reviews[0].color, "");
    assert_eq!(reviews[1].color, "Navy Blue");
}

#[test]
fn helpful_votes_only_from_the_thumbs_up_button() {
    let reviews = parse_fixture();
    // The downvote button with (99) shares the class list; only the
    // thumbs-up count survives, parens stripped.
    assert_eq!(reviews[0].helpful_votes, "3");
    assert_eq!(reviews[1].helpful_votes, "0");
}

#[test]
fn every_record_fills_all_eight_fields() {
    for review in parse_fixture() {
        let row = review.row();
        assert_eq!(row.len(), reviews::FIELDS.len());
    }
}

#[test]
fn first_selector_block_precedes_the_rest() {
    // The specially-rendered first review sorts ahead of the shared-class
    // blocks even when it sits later in the document.
    let html = "\
        <div class=\"overflow-visible b--none mt4-l ma0 dark-gray\">\
          <span class=\"f7 b mv0\">Second</span>\
        </div>\
        <div class=\"overflow-visible b--none mt3-l ma0 dark-gray\">\
          <span class=\"f7 b mv0\">First</span>\
        </div>";
    let reviews = reviews::extract(&Html::parse_document(html));
    assert_eq!(reviews.len(), 2);
    assert_eq!(reviews[0].reviewer, "First");
    assert_eq!(reviews[1].reviewer, "Second");
}

#[test]
fn page_without_review_blocks_yields_nothing() {
    let html = "<html><body><div class=\"f7\">no reviews yet</div></body></html>";
    let reviews = reviews::extract(&Html::parse_document(html));
    assert!(reviews.is_empty());
}
