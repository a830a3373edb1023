// src/harvest.rs

// Drives the review extraction across pages: fetch rendered HTML, dump it,
// extract, accumulate, export. Strictly sequential; a fetch failure on any
// page aborts the whole harvest.

use std::path::PathBuf;

use scraper::Html;
use thiserror::Error;

use crate::config::consts::{REVIEW_BASE_URL, REVIEW_ENTRY_POINT};
use crate::config::options::HarvestOptions;
use crate::core::net::{FetchError, RenderClient};
use crate::file;
use crate::progress::Progress;
use crate::specs::reviews::{self, Review};
use crate::{logd, loge, logf};

#[derive(Debug, Error)]
pub enum HarvestError {
    #[error("page {page}: {source}")]
    Fetch { page: u32, source: FetchError },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// One page's worth of work: where to fetch it from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub url: String,
}

/// Bounded lazy sequence of page requests, ascending. Restartable from any
/// page index: pass `first > 1` to resume a partial harvest.
pub fn page_requests(
    product: &str,
    first: u32,
    last: u32,
) -> impl Iterator<Item = PageRequest> + '_ {
    (first..=last).map(move |page| PageRequest { page, url: review_url(product, page) })
}

/// Base review URL for page 1; `&page=N` appended past that.
pub fn review_url(product: &str, page: u32) -> String {
    let base = format!("{REVIEW_BASE_URL}/{product}?entryPoint={REVIEW_ENTRY_POINT}");
    if page > 1 { format!("{base}&page={page}") } else { base }
}

/// What a finished harvest produced.
pub struct HarvestReport {
    pub reviews: Vec<Review>,
    pub csv_path: PathBuf,
}

/// Fetch every page in `opts`, extract its reviews in page order, then
/// write the combined CSV. Pages contribute whatever their markup yields;
/// a block with missing sub-elements still lands as a defaulted record.
pub fn run(
    opts: &HarvestOptions,
    client: &RenderClient,
    mut progress: Option<&mut dyn Progress>,
) -> Result<HarvestReport, HarvestError> {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(opts.page_total());
        p.log("Fetching review pages...");
    }

    let mut reviews: Vec<Review> = Vec::new();
    for req in page_requests(&opts.product, opts.first_page, opts.last_page) {
        let html = match client.render_html(&req.url) {
            Ok(html) => html,
            Err(source) => {
                loge!("page {}: fetch failed: {source}", req.page);
                return Err(HarvestError::Fetch { page: req.page, source });
            }
        };

        let dump = file::write_page_dump(&opts.out_dir, req.page, &html)?;
        logf!("page {} saved to {}", req.page, dump.display());
        if let Some(p) = progress.as_deref_mut() {
            p.log(&format!("HTML content saved to {}", dump.display()));
        }

        let doc = Html::parse_document(&html);
        let page_reviews = reviews::extract(&doc);
        logd!("page {}: {} reviews", req.page, page_reviews.len());
        reviews.extend(page_reviews);

        if let Some(p) = progress.as_deref_mut() {
            p.page_done(req.page);
        }
    }

    let csv_path = file::write_review_csv(&opts.out_dir, &opts.product, &reviews)?;
    logf!("{} reviews exported to {}", reviews.len(), csv_path.display());

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    Ok(HarvestReport { reviews, csv_path })
}
