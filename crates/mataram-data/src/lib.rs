#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod error;
pub mod snapshot;
pub mod yahoo;

pub use error::{DataError, Result};
pub use snapshot::{DailyBar, MarketSnapshot};
pub use yahoo::YahooSnapshotProvider;

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
