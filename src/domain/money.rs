//! Monetary types for price and volume representation.

use rust_decimal::Decimal;

/// Price represented as a Decimal for precision.
///
/// Prediction-market outcome prices live in `[0, 1]` (a share pays out $1).
pub type Price = Decimal;

/// Volume represented as a Decimal for precision.
pub type Volume = Decimal;
