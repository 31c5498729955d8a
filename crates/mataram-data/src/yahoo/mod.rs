//! Yahoo Finance data providers.

pub mod profile;
pub mod quotes;

pub use profile::{SecurityProfile, YahooProfileProvider};
pub use quotes::YahooQuoteProvider;

use crate::error::{DataError, Result};
use crate::snapshot::MarketSnapshot;
use chrono::{Duration, Utc};

/// Assembles a full [`MarketSnapshot`] from the quote and profile providers.
///
/// This is the single entry point the CLI uses: one call, one security, one
/// snapshot covering the trailing window.
#[derive(Debug, Default)]
pub struct YahooSnapshotProvider {
    quotes: YahooQuoteProvider,
    profile: YahooProfileProvider,
}

impl YahooSnapshotProvider {
    /// Create a new snapshot provider.
    pub fn new() -> Self {
        Self {
            quotes: YahooQuoteProvider::new(),
            profile: YahooProfileProvider::new(),
        }
    }

    /// Fetch a snapshot for `symbol` covering the trailing `period_days`.
    ///
    /// Fails on unresolvable symbols or transport errors; an empty history
    /// or an absent market cap is carried in the snapshot instead.
    pub async fn fetch_snapshot(&self, symbol: &str, period_days: u32) -> Result<MarketSnapshot> {
        if symbol.is_empty() {
            return Err(DataError::InvalidSymbol("Empty symbol".to_string()));
        }

        let end = Utc::now();
        let start = end - Duration::days(i64::from(period_days));

        let history = self.quotes.fetch_daily_history(symbol, start, end).await?;
        let profile = self.profile.fetch_profile(symbol).await?;

        Ok(MarketSnapshot {
            symbol: symbol.to_string(),
            long_name: profile.long_name,
            currency: profile.currency,
            market_cap: profile.market_cap,
            history,
        })
    }
}
