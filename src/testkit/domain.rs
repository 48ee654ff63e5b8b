//! Builders for domain primitives used across tests.
//!
//! Concise factory functions for [`TokenId`], [`PriceLevel`], and
//! [`OrderBook`] so tests focus on assertions rather than construction
//! boilerplate.

use rust_decimal::Decimal;

use crate::domain::{OrderBook, PriceLevel, TokenId};

/// Create a [`TokenId`] from a string.
pub fn token(id: &str) -> TokenId {
    TokenId::from(id)
}

/// Create a [`PriceLevel`] from a `(price, size)` pair.
pub fn level(price: Decimal, size: Decimal) -> PriceLevel {
    PriceLevel::new(price, size)
}

/// Create an [`OrderBook`] for token `tok` from `(price, size)` pairs.
pub fn book(bids: &[(Decimal, Decimal)], asks: &[(Decimal, Decimal)]) -> OrderBook {
    book_for("tok", bids, asks)
}

/// Create an [`OrderBook`] for a named token from `(price, size)` pairs.
pub fn book_for(id: &str, bids: &[(Decimal, Decimal)], asks: &[(Decimal, Decimal)]) -> OrderBook {
    OrderBook::with_levels(
        token(id),
        bids.iter().map(|&(p, s)| level(p, s)).collect(),
        asks.iter().map(|&(p, s)| level(p, s)).collect(),
    )
}
