use roi_core::EmployeeTier;
use rust_decimal::Decimal;
use thiserror::Error;

/// Error returned when a string cannot be parsed as a [`Decimal`].
#[derive(Debug, Error)]
#[error("invalid decimal '{input}': {source}")]
pub struct ParseDecimalError {
    input: String,
    #[source]
    source: rust_decimal::Error,
}

/// Normalizes input for decimal parsing: trims whitespace, removes commas
/// (thousands separator) and a leading dollar sign.
fn normalize_decimal_input(s: &str) -> String {
    let trimmed = s.trim();
    trimmed
        .strip_prefix('$')
        .unwrap_or(trimmed)
        .replace(',', "")
}

/// Parses a slider or form value into a [`Decimal`].
///
/// Handles comma as thousands separator (e.g. `"1,234.56"`) and a leading
/// `$`. Empty or whitespace-only input is treated as 0.
pub fn parse_decimal(s: &str) -> Result<Decimal, ParseDecimalError> {
    let normalized = normalize_decimal_input(s);
    if normalized.is_empty() {
        return Ok(Decimal::ZERO);
    }
    normalized.parse().map_err(|e| {
        tracing::debug!(input = %s, "invalid decimal: {}", e);
        ParseDecimalError {
            input: s.to_string(),
            source: e,
        }
    })
}

#[derive(Debug, Error)]
#[error("invalid employee tier '{0}': expected 1-5 or one of <100, 100-500, 500-1K, 1K-5K, 5K+")]
pub struct ParseTierError(String);

/// Parses the employee-count selector as either its ordinal (`"3"`) or its
/// label (`"500-1K"`).
///
/// Ordinals are not range-checked here; the estimator reports out-of-range
/// tiers itself.
pub fn parse_tier(s: &str) -> Result<u8, ParseTierError> {
    let trimmed = s.trim();
    if let Ok(ordinal) = trimmed.parse::<u8>() {
        return Ok(ordinal);
    }
    EmployeeTier::parse_label(trimmed)
        .map(|tier| tier.ordinal())
        .ok_or_else(|| ParseTierError(s.to_string()))
}
