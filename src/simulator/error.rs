//! Simulation error taxonomy.
//!
//! Every failure mode is a typed variant so the request-handling layer can
//! map each kind to a fixed user-facing status. All variants are
//! deterministic for a given `(request, book)` pair and never worth
//! retrying inside the simulator.

use thiserror::Error;

use crate::domain::{Price, Side, TokenId, Volume};

/// Errors produced while validating or simulating a trade.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SimulationError {
    /// Order size must be strictly positive.
    #[error("order size must be positive, got {size}")]
    InvalidSize {
        /// The rejected size.
        size: Volume,
    },

    /// A limit order was submitted without a limit price.
    #[error("limit orders require a limit price")]
    MissingLimitPrice,

    /// The limit price is outside the valid outcome-price range.
    #[error("limit price must be within [0, 1], got {price}")]
    InvalidPrice {
        /// The rejected limit price.
        price: Price,
    },

    /// The book collaborator has no snapshot for the token.
    #[error("no order book snapshot for token {token_id}")]
    BookNotFound {
        /// Token the caller asked to simulate against.
        token_id: TokenId,
    },

    /// The raw book side the order would consume is empty.
    #[error("no resting liquidity for {side} orders")]
    NoLiquidityForSide {
        /// Side of the rejected order.
        side: Side,
    },

    /// The book has depth, but none satisfies the limit constraint.
    #[error("no liquidity at or better than limit price {limit_price}")]
    NoLiquidityAtLimit {
        /// The limit price that filtered out every level.
        limit_price: Price,
    },
}
