// src/bin/harvest.rs
use color_eyre::eyre::Result;

use wm_scrape::config::options::HarvestOptions;
use wm_scrape::core::net::RenderClient;
use wm_scrape::progress::ConsoleProgress;
use wm_scrape::{harvest, report};

fn main() -> Result<()> {
    color_eyre::install()?;

    let opts = HarvestOptions::default();
    let client = RenderClient::from_env()?;

    let mut progress = ConsoleProgress::new();
    let out = harvest::run(&opts, &client, Some(&mut progress))?;

    println!("\nReviews have been saved to {}", out.csv_path.display());
    report::print_summary(&out.reviews);
    Ok(())
}
