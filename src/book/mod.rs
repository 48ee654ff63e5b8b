//! Order-book collaborator seam.
//!
//! The simulator never fetches anything itself; it consumes a complete,
//! consistent snapshot supplied by a book source. This module defines the
//! seam ([`BookSource`]), a TTL'd in-memory cache implementing it, and the
//! wire-shape adapter for untyped upstream snapshots.

mod cache;
mod snapshot;

pub use cache::OrderBookCache;
pub use snapshot::{BookSnapshot, SnapshotLevel};

use crate::domain::{OrderBook, TokenId};

/// Supplies order-book snapshots to the simulator.
///
/// Implementations must return a complete snapshot or `None`; the service
/// layer maps `None` to a book-not-found error. How the snapshot is
/// obtained (HTTP fetch, cache, fixture) is the implementation's concern.
pub trait BookSource: Send + Sync {
    /// Get a snapshot of the book for `token_id`, if one is available.
    fn book(&self, token_id: &TokenId) -> Option<OrderBook>;
}
