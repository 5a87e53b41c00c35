//! Calculation modules for the ROI estimator.
//!
//! This module provides the savings calculation and the reach comparison,
//! plus the rounding helpers they share.

pub mod common;
pub mod reach;
pub mod savings;

pub use reach::{ReachComparison, ReachDelta};
pub use savings::{SavingsCalculator, WEEKS_PER_MONTH};
