use gloo_net::http::Request;
use serde_json::Value;
use thiserror::Error;

use crate::model::{offerings_from_records, Skip};

pub const API_BASE: &str = "https://app.wewantwaste.co.uk/api";

/// Shown in the banner whenever loading falls back to the built-in list.
pub const LOAD_ERROR_MESSAGE: &str = "Unable to load skip options. Please try again.";

/// Where the customer is hiring. Fixed for this step of the wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkipQuery {
    pub postcode: &'static str,
    pub area: &'static str,
}

pub const DEFAULT_QUERY: SkipQuery = SkipQuery {
    postcode: "NR32",
    area: "Lowestoft",
};

impl SkipQuery {
    pub fn url(&self, base: &str) -> String {
        format!(
            "{}/skips/by-location?postcode={}&area={}",
            base.trim_end_matches('/'),
            self.postcode,
            self.area
        )
    }
}

pub fn default_skips_url() -> String {
    DEFAULT_QUERY.url(API_BASE)
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("network error: {0}")]
    Network(#[from] gloo_net::Error),
    #[error("HTTP {0}")]
    Status(u16),
    #[error("invalid skip list: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Parses a response body. Anything other than a JSON array is rejected.
pub fn parse_skips(body: &str) -> Result<Vec<Skip>, LoadError> {
    let records: Vec<Value> = serde_json::from_str(body)?;
    Ok(offerings_from_records(&records))
}

pub async fn fetch_skips(url: &str) -> Result<Vec<Skip>, LoadError> {
    let resp = Request::get(url).send().await?;
    if !resp.ok() {
        return Err(LoadError::Status(resp.status()));
    }
    let body = resp.text().await?;
    parse_skips(&body)
}
