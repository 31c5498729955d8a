//! Daily quote history fetching from Yahoo Finance.

use crate::error::{DataError, Result};
use crate::snapshot::DailyBar;
use chrono::{DateTime, Utc};
use yahoo_finance_api as yahoo;

/// Yahoo Finance quote history provider.
pub struct YahooQuoteProvider {
    provider: yahoo::YahooConnector,
}

impl std::fmt::Debug for YahooQuoteProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("YahooQuoteProvider").finish_non_exhaustive()
    }
}

impl YahooQuoteProvider {
    /// Create a new Yahoo Finance quote provider.
    pub fn new() -> Self {
        Self {
            provider: yahoo::YahooConnector::new().expect("Failed to create Yahoo connector"),
        }
    }

    /// Fetch daily close/volume bars for a single symbol, oldest first.
    ///
    /// # Arguments
    /// * `symbol` - The ticker symbol (e.g., "BREN.JK")
    /// * `start` - Start date for the data
    /// * `end` - End date for the data
    ///
    /// An empty series is not an error here: the snapshot degrades
    /// downstream instead of failing the fetch.
    pub async fn fetch_daily_history(
        &self,
        symbol: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<DailyBar>> {
        // Validate date range
        if start > end {
            return Err(DataError::InvalidDateRange {
                start: start.to_rfc3339(),
                end: end.to_rfc3339(),
            });
        }

        // Validate symbol
        if symbol.is_empty() {
            return Err(DataError::InvalidSymbol("Empty symbol".to_string()));
        }

        // Convert chrono DateTime to time::OffsetDateTime
        let start_time = time::OffsetDateTime::from_unix_timestamp(start.timestamp())
            .map_err(|e| DataError::TimeConversion(e.to_string()))?;
        let end_time = time::OffsetDateTime::from_unix_timestamp(end.timestamp())
            .map_err(|e| DataError::TimeConversion(e.to_string()))?;

        // Fetch data from Yahoo Finance
        let response = self
            .provider
            .get_quote_history(symbol, start_time, end_time)
            .await?;

        let quotes = response
            .quotes()
            .map_err(|e| DataError::YahooApi(e.to_string()))?;

        let mut bars = Vec::with_capacity(quotes.len());
        for quote in &quotes {
            let timestamp = i64::try_from(quote.timestamp)
                .map_err(|e| DataError::TimeConversion(e.to_string()))?;
            let date = DateTime::<Utc>::from_timestamp(timestamp, 0)
                .ok_or_else(|| {
                    DataError::TimeConversion(format!("Out-of-range timestamp {timestamp}"))
                })?
                .date_naive();

            bars.push(DailyBar {
                date,
                close: quote.close,
                volume: quote.volume,
            });
        }

        Ok(bars)
    }
}

impl Default for YahooQuoteProvider {
    fn default() -> Self {
        Self::new()
    }
}
