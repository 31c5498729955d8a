//! Index inclusion eligibility screening.
//!
//! Three independent criteria are checked against fixed thresholds: total
//! market capitalization, free-float-adjusted market capitalization, and the
//! annual traded value ratio (ATVR). A security is eligible only when all
//! three pass.

pub mod criteria;
pub mod evaluator;
pub mod free_float;

pub use criteria::EligibilityCriteria;
pub use evaluator::{CriterionStatus, EligibilityEvaluator, EvaluationResult};
pub use free_float::FreeFloat;

use thiserror::Error;

/// Errors from constructing evaluator inputs.
///
/// Evaluation itself never fails; only input validation does.
#[derive(Debug, Error, PartialEq)]
pub enum EligibilityError {
    /// Free-float percentage outside [0, 100] or not a finite number
    #[error("free-float percentage must be a finite value in [0, 100], got {0}")]
    FreeFloatOutOfRange(f64),
}
