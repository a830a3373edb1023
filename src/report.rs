// src/report.rs

// Human-readable console summary of a harvest. Pure string building so the
// format is testable; the binary prints the result.

use std::fmt::Write;

use crate::specs::reviews::Review;

pub fn print_summary(reviews: &[Review]) {
    print!("{}", render_summary(reviews));
}

/// Field-by-field listing, star glyphs for ratings. Empty title/color lines
/// are omitted, matching what a reader actually wants to scan.
pub fn render_summary(reviews: &[Review]) -> String {
    let mut out = s!();

    let _ = writeln!(out, "\nProduct Reviews (Total: {} reviews):", reviews.len());
    let _ = writeln!(out, "{}", "-".repeat(50));

    for (i, review) in reviews.iter().enumerate() {
        let _ = writeln!(out, "\nReview #{}", i + 1);
        let _ = writeln!(out, "{}", "-".repeat(20));
        let _ = writeln!(out, "Rating: {}", "★".repeat(review.rating as usize));
        let _ = writeln!(out, "Date: {}", review.date);
        let _ = writeln!(out, "Reviewer: {}", review.reviewer);
        if !review.title.is_empty() {
            let _ = writeln!(out, "Title: {}", review.title);
        }
        let _ = writeln!(out, "Content: {}", review.content);
        let _ = writeln!(
            out,
            "Verified Purchase: {}",
            if review.verified_purchase { "Yes" } else { "No" }
        );
        if !review.color.is_empty() {
            let _ = writeln!(out, "Color: {}", review.color);
        }
        let _ = writeln!(out, "Helpful Votes: {}", review.helpful_votes);
    }

    out
}
