//! Security profile fetching from Yahoo Finance.
//!
//! Pulls market capitalization, display name, and quote currency from the
//! quoteSummary endpoint (`modules=price`). All three fields are optional in
//! the payload; a security without a reported figure yields `None` rather
//! than an error.

use crate::error::{DataError, Result};
use serde::Deserialize;

/// Yahoo quoteSummary base URL.
const QUOTE_SUMMARY_URL: &str = "https://query2.finance.yahoo.com/v10/finance/quoteSummary";

/// User agent for quoteSummary requests.
const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7)";

/// Profile fields used for evaluation and presentation.
#[derive(Debug, Clone, PartialEq)]
pub struct SecurityProfile {
    /// Ticker symbol the profile was fetched for.
    pub symbol: String,
    /// Display name of the security.
    pub long_name: Option<String>,
    /// Quote currency.
    pub currency: Option<String>,
    /// Total market capitalization.
    pub market_cap: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct QuoteSummaryEnvelope {
    #[serde(rename = "quoteSummary")]
    quote_summary: QuoteSummaryBody,
}

#[derive(Debug, Deserialize)]
struct QuoteSummaryBody {
    result: Option<Vec<QuoteSummaryResult>>,
}

#[derive(Debug, Deserialize)]
struct QuoteSummaryResult {
    price: Option<PriceModule>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PriceModule {
    market_cap: Option<RawNumber>,
    long_name: Option<String>,
    currency: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawNumber {
    raw: Option<f64>,
}

/// Yahoo Finance security profile provider.
#[derive(Debug)]
pub struct YahooProfileProvider {
    client: reqwest::Client,
}

impl YahooProfileProvider {
    /// Create a new Yahoo Finance profile provider.
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent(USER_AGENT)
                .build()
                .expect("Failed to create HTTP client"),
        }
    }

    /// Fetch the profile for a single symbol.
    pub async fn fetch_profile(&self, symbol: &str) -> Result<SecurityProfile> {
        if symbol.is_empty() {
            return Err(DataError::InvalidSymbol("Empty symbol".to_string()));
        }

        let url = format!("{QUOTE_SUMMARY_URL}/{symbol}?modules=price");
        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(DataError::YahooApi(format!(
                "quoteSummary returned HTTP {} for {symbol}",
                response.status()
            )));
        }

        let body = response.text().await?;
        let envelope: QuoteSummaryEnvelope = serde_json::from_str(&body)?;

        parse_profile(symbol, envelope)
    }
}

impl Default for YahooProfileProvider {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_profile(symbol: &str, envelope: QuoteSummaryEnvelope) -> Result<SecurityProfile> {
    let price = envelope
        .quote_summary
        .result
        .and_then(|results| results.into_iter().next())
        .and_then(|result| result.price)
        .ok_or_else(|| DataError::MissingData {
            symbol: symbol.to_string(),
            reason: "quoteSummary returned no price module".to_string(),
        })?;

    Ok(SecurityProfile {
        symbol: symbol.to_string(),
        long_name: price.long_name,
        currency: price.currency,
        market_cap: price.market_cap.and_then(|m| m.raw),
    })
}
