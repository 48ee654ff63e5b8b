//! Order book types.

use rust_decimal::Decimal;

use super::error::DomainError;
use super::ids::TokenId;
use super::money::{Price, Volume};

/// A single price level in the order book
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceLevel {
    price: Price,
    size: Volume,
}

impl PriceLevel {
    /// Create a new price level
    #[must_use]
    pub const fn new(price: Price, size: Volume) -> Self {
        Self { price, size }
    }

    /// Create a price level, validating domain invariants.
    ///
    /// Used at the snapshot boundary where the upstream feed is untrusted;
    /// rejects non-positive sizes and prices outside `[0, 1]`.
    pub fn try_new(price: Price, size: Volume) -> Result<Self, DomainError> {
        if size <= Decimal::ZERO {
            return Err(DomainError::NonPositiveSize { size });
        }
        if price < Decimal::ZERO || price > Decimal::ONE {
            return Err(DomainError::PriceOutOfRange { price });
        }
        Ok(Self { price, size })
    }

    /// Get the price
    #[must_use]
    pub const fn price(&self) -> Price {
        self.price
    }

    /// Get the size/volume
    #[must_use]
    pub const fn size(&self) -> Volume {
        self.size
    }

    /// Notional cost of taking the whole level.
    #[must_use]
    pub fn cost(&self) -> Decimal {
        self.price * self.size
    }
}

/// Order book snapshot for a single token.
///
/// Bids are quoted highest-first and asks lowest-first by convention, but
/// the ordering of incoming levels is not trusted; consumers that rely on
/// price priority must sort (the simulator does).
#[derive(Debug, Clone)]
pub struct OrderBook {
    token_id: TokenId,
    bids: Vec<PriceLevel>,
    asks: Vec<PriceLevel>,
}

impl OrderBook {
    /// Create a new empty order book
    #[must_use]
    pub const fn new(token_id: TokenId) -> Self {
        Self {
            token_id,
            bids: Vec::new(),
            asks: Vec::new(),
        }
    }

    /// Create an order book with initial levels
    #[must_use]
    pub const fn with_levels(
        token_id: TokenId,
        bids: Vec<PriceLevel>,
        asks: Vec<PriceLevel>,
    ) -> Self {
        Self {
            token_id,
            bids,
            asks,
        }
    }

    /// Get the token ID
    #[must_use]
    pub const fn token_id(&self) -> &TokenId {
        &self.token_id
    }

    /// Get all bid levels
    #[must_use]
    pub fn bids(&self) -> &[PriceLevel] {
        &self.bids
    }

    /// Get all ask levels
    #[must_use]
    pub fn asks(&self) -> &[PriceLevel] {
        &self.asks
    }

    /// Best bid price (highest buy), scanning because order is untrusted.
    #[must_use]
    pub fn best_bid(&self) -> Option<Price> {
        self.bids.iter().map(PriceLevel::price).max()
    }

    /// Best ask price (lowest sell), scanning because order is untrusted.
    #[must_use]
    pub fn best_ask(&self) -> Option<Price> {
        self.asks.iter().map(PriceLevel::price).min()
    }

    /// Midpoint of best bid and best ask, if both sides are quoted.
    #[must_use]
    pub fn mid_price(&self) -> Option<Price> {
        let bid = self.best_bid()?;
        let ask = self.best_ask()?;
        Some((bid + ask) / Decimal::TWO)
    }

    /// Total resting size on the bid side.
    #[must_use]
    pub fn bid_depth(&self) -> Volume {
        self.bids.iter().map(PriceLevel::size).sum()
    }

    /// Total resting size on the ask side.
    #[must_use]
    pub fn ask_depth(&self) -> Volume {
        self.asks.iter().map(PriceLevel::size).sum()
    }
}
