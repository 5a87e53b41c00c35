pub mod calculations;
pub mod display;
pub mod error;
pub mod models;
pub mod policy;
pub mod state;

pub use calculations::{ReachComparison, ReachDelta, SavingsCalculator, WEEKS_PER_MONTH};
pub use display::{DisplayMetrics, NOT_AVAILABLE, ReachDisplay, format_currency};
pub use error::{EstimatorError, InvalidInput, InvalidPolicy};
pub use models::*;
pub use policy::{HoursRounding, SavingsPolicy, TierAddon};
pub use state::{DerivedMetrics, EstimatorState, InputChange};
