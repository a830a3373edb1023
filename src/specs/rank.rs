// src/specs/rank.rs
//! Scraping spec for the sales-rank endpoint.
//!
//! One GET with fixed query parameters against a JSON API. The outcome is
//! total: callers branch on `RankOutcome` instead of sniffing a `code` key
//! out of a mapping. The legacy `{code, message, data: null}` record shape
//! is still available for output via [`ApiError::to_record`].

use serde_json::{Value, json};

use crate::config::consts::RANK_URL;
use crate::config::options::RankOptions;
use crate::core::net::{self, FetchError};

/// Uniform failure record: non-200 status keeps its code and body, every
/// other fault maps to code 500 with the error's display form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiError {
    pub code: u16,
    pub message: String,
}

impl ApiError {
    pub fn to_record(&self) -> Value {
        json!({ "code": self.code, "message": self.message, "data": null })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum RankOutcome {
    /// Parsed body, returned unchanged.
    Success(Value),
    Failure(ApiError),
}

/// Fetch the rank listing. Never returns `Err`: every failure comes back
/// as a `Failure` variant. No retries, single attempt.
pub fn fetch(opts: &RankOptions) -> RankOutcome {
    let outcome = match try_fetch(opts) {
        Ok((status, body)) => interpret(status, body),
        Err(e) => RankOutcome::Failure(ApiError { code: 500, message: e.to_string() }),
    };
    if let RankOutcome::Success(body) = &outcome {
        print_diagnostics(body);
    }
    outcome
}

/// Map a raw status/body pair onto the outcome contract.
pub fn interpret(status: u16, body: String) -> RankOutcome {
    if status != 200 {
        return RankOutcome::Failure(ApiError { code: status, message: body });
    }
    match serde_json::from_str::<Value>(&body) {
        Ok(parsed) => RankOutcome::Success(parsed),
        Err(e) => RankOutcome::Failure(ApiError { code: 500, message: e.to_string() }),
    }
}

fn try_fetch(opts: &RankOptions) -> Result<(u16, String), FetchError> {
    let client = net::client()?;
    let resp = client.get(RANK_URL).query(&opts.query()).send()?;
    let status = resp.status().as_u16();
    let body = resp.text()?;
    Ok((status, body))
}

/// Operator-facing peek at the payload. Not part of the returned value.
fn print_diagnostics(body: &Value) {
    let data = &body["data"];
    println!("page_info {}", data["paging"]);
    println!("page_list {}", data["list"]);
    if data.get("paging").is_some() {
        println!("paging key present");
    } else {
        println!("paging key missing");
    }
}
