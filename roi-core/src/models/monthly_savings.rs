use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::EmployeeTier;

/// Result of a savings calculation.
///
/// `hours` and `cost` are the figures shown to the visitor and forwarded
/// with a lead; the other fields are kept for display and diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlySavings {
    /// Monthly hours saved across all managers, after any configured rounding.
    pub hours: Decimal,

    /// Monthly cost saved: `hours × hourly_cost`.
    pub cost: Decimal,

    /// Weekly hours per manager once the tier addon is applied.
    pub effective_weekly_hours: Decimal,

    /// Addon contributed by the organization size tier.
    pub tier_addon: Decimal,

    pub tier: EmployeeTier,
}
