#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod eligibility;
pub mod report;

// Re-export the data layer for downstream callers
pub use mataram_data as data;

pub use eligibility::{
    CriterionStatus, EligibilityCriteria, EligibilityError, EligibilityEvaluator,
    EvaluationResult, FreeFloat,
};
pub use report::{EligibilityReport, ReportError};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
