// src/file.rs

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::Local;
use rand::Rng;

use crate::csv::reviews_to_string;
use crate::specs::reviews::Review;

/// Dump one page's raw HTML under `dir`. The 4-digit tag keeps concurrent
/// runs of the tool from clobbering each other's dumps.
pub fn write_page_dump(dir: &Path, page: u32, html: &str) -> io::Result<PathBuf> {
    let tag: u32 = rand::thread_rng().gen_range(1000..=9999);
    let path = dir.join(format!("walmart-review-page{page}-{tag}.html"));
    fs::write(&path, html)?;
    Ok(path)
}

/// Write the combined review CSV, named after the product and the wall
/// clock so successive harvests never overwrite one another.
pub fn write_review_csv(dir: &Path, product: &str, reviews: &[Review]) -> io::Result<PathBuf> {
    let stamp = Local::now().format("%Y%m%d_%H%M%S");
    let path = dir.join(format!("walmart_reviews_{product}_{stamp}.csv"));
    fs::write(&path, reviews_to_string(reviews))?;
    Ok(path)
}
