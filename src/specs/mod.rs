// src/specs/mod.rs
//! # Scraping “specs” module
//!
//! Page/endpoint-specific extraction lives here. Each spec encodes *where
//! the ground truth lives in the markup or payload* and *how to pull it out
//! tolerantly*.
//!
//! - **`reviews`**: the product-review page. Locate review blocks (the
//!   first one renders under its own class list), extract the eight fixed
//!   fields, default anything absent.
//! - **`rank`**: the sales-rank JSON endpoint. One GET, tagged outcome.
//!
//! Specs do not decide *when* to fetch, where output files go, or how the
//! console report looks; that's `harvest`, `file`, and `report`.
//!
//! Testing notes: specs are testable offline against captured fixtures
//! (saved HTML / canned JSON bodies).

pub mod rank;
pub mod reviews;
