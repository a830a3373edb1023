// src/bin/rank.rs
use color_eyre::eyre::Result;

use wm_scrape::config::options::RankOptions;
use wm_scrape::specs::rank::{self, RankOutcome};

fn main() -> Result<()> {
    color_eyre::install()?;

    match rank::fetch(&RankOptions::default()) {
        RankOutcome::Success(_) => {}
        RankOutcome::Failure(err) => {
            // Same uniform record whether the API said no or the wire did.
            eprintln!("{}", err.to_record());
        }
    }
    Ok(())
}
