//! Wire-shape adapter for upstream book snapshots.
//!
//! Upstream feeds deliver books as plain JSON:
//! `{ "bids": [{"price": 0.45, "size": 100}], "asks": [...] }`.
//! Levels that violate domain invariants (non-positive size, price outside
//! `[0, 1]`) are dropped at this boundary with a warning rather than
//! poisoning the domain book.

use serde::Deserialize;
use tracing::warn;

use crate::domain::{OrderBook, Price, PriceLevel, TokenId, Volume};

/// A raw order book snapshot as delivered by the upstream collaborator.
#[derive(Debug, Clone, Deserialize)]
pub struct BookSnapshot {
    #[serde(default)]
    pub bids: Vec<SnapshotLevel>,
    #[serde(default)]
    pub asks: Vec<SnapshotLevel>,
}

/// One raw price level on the wire.
#[derive(Debug, Clone, Deserialize)]
pub struct SnapshotLevel {
    pub price: Price,
    pub size: Volume,
}

impl BookSnapshot {
    /// Parse a snapshot from its JSON wire form.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Convert into a domain book, dropping invalid levels.
    #[must_use]
    pub fn into_order_book(self, token_id: TokenId) -> OrderBook {
        let bids = convert_side(&token_id, "bid", self.bids);
        let asks = convert_side(&token_id, "ask", self.asks);
        OrderBook::with_levels(token_id, bids, asks)
    }
}

fn convert_side(token_id: &TokenId, side: &str, levels: Vec<SnapshotLevel>) -> Vec<PriceLevel> {
    levels
        .into_iter()
        .filter_map(|level| match PriceLevel::try_new(level.price, level.size) {
            Ok(level) => Some(level),
            Err(err) => {
                warn!(token_id = %token_id, side, error = %err, "dropping invalid snapshot level");
                None
            }
        })
        .collect()
}
