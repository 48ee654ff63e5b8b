//! Domain validation errors for core domain types.
//!
//! These errors are returned by `try_new` constructors that validate
//! inputs against domain invariants.

use thiserror::Error;

/// Errors that occur when domain invariants are violated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Sizes must be positive for a level to carry liquidity.
    #[error("size must be positive, got {size}")]
    NonPositiveSize {
        /// The invalid size that was provided.
        size: rust_decimal::Decimal,
    },

    /// Outcome prices are probabilities and must lie in `[0, 1]`.
    #[error("price must be within [0, 1], got {price}")]
    PriceOutOfRange {
        /// The invalid price that was provided.
        price: rust_decimal::Decimal,
    },
}
