//! Thread-safe, TTL'd order book cache.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use parking_lot::RwLock;

use crate::domain::{OrderBook, TokenId};

use super::BookSource;

struct Entry {
    book: OrderBook,
    stored_at: Instant,
}

/// Thread-safe cache of order book snapshots with per-entry expiry.
///
/// Explicitly constructed and shared via `Arc` by callers; there is no
/// module-level singleton. A TTL of zero disables expiry.
pub struct OrderBookCache {
    books: RwLock<HashMap<TokenId, Entry>>,
    ttl: Duration,
}

impl OrderBookCache {
    /// Create a cache whose entries expire after `ttl`.
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self {
            books: RwLock::new(HashMap::new()),
            ttl,
        }
    }

    /// Create a cache whose entries never expire.
    #[must_use]
    pub fn unbounded() -> Self {
        Self::new(Duration::ZERO)
    }

    /// Insert or replace the snapshot for the book's token.
    pub fn insert(&self, book: OrderBook) {
        let token_id = book.token_id().clone();
        self.books.write().insert(
            token_id,
            Entry {
                book,
                stored_at: Instant::now(),
            },
        );
    }

    /// Drop every cached snapshot. Reset hook for tests and operator
    /// tooling; never called on the hot path.
    pub fn clear(&self) {
        self.books.write().clear();
    }

    /// Number of snapshots in the cache, including expired ones not yet
    /// dropped.
    #[must_use]
    pub fn len(&self) -> usize {
        self.books.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn is_fresh(&self, entry: &Entry) -> bool {
        self.ttl.is_zero() || entry.stored_at.elapsed() < self.ttl
    }
}

impl BookSource for OrderBookCache {
    fn book(&self, token_id: &TokenId) -> Option<OrderBook> {
        let books = self.books.read();
        let entry = books.get(token_id)?;
        if self.is_fresh(entry) {
            Some(entry.book.clone())
        } else {
            None
        }
    }
}
