//! Simulation service: resolves snapshots and runs the simulator.
//!
//! The request-handling layer talks to this type. It owns nothing but a
//! handle to a [`BookSource`]; a missing or expired snapshot becomes
//! [`SimulationError::BookNotFound`], every other outcome comes straight
//! from the core pipeline.

use std::sync::Arc;

use crate::book::BookSource;
use crate::simulator::{simulate, SimulationError, SimulationRequest, SimulationResult};

/// Stateless facade over the book source and the core simulator.
pub struct SimulatorService {
    books: Arc<dyn BookSource>,
}

impl SimulatorService {
    /// Create a service backed by the given book source.
    #[must_use]
    pub fn new(books: Arc<dyn BookSource>) -> Self {
        Self { books }
    }

    /// Simulate the request against the current snapshot for its token.
    pub fn simulate(
        &self,
        request: &SimulationRequest,
    ) -> Result<SimulationResult, SimulationError> {
        let book = self
            .books
            .book(&request.token_id)
            .ok_or_else(|| SimulationError::BookNotFound {
                token_id: request.token_id.clone(),
            })?;
        simulate(request, &book)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::book::OrderBookCache;
    use crate::domain::{OrderBook, PriceLevel, Side, TokenId};
    use rust_decimal_macros::dec;

    fn service_with_book() -> SimulatorService {
        let cache = OrderBookCache::unbounded();
        cache.insert(OrderBook::with_levels(
            TokenId::from("tok"),
            vec![PriceLevel::new(dec!(0.45), dec!(10))],
            vec![PriceLevel::new(dec!(0.50), dec!(10))],
        ));
        SimulatorService::new(Arc::new(cache))
    }

    #[test]
    fn simulates_against_cached_snapshot() {
        let service = service_with_book();
        let request = SimulationRequest::market("tok", Side::Buy, dec!(5));

        let result = service.simulate(&request).unwrap();
        assert_eq!(result.average_price, dec!(0.50));
    }

    #[test]
    fn missing_snapshot_is_book_not_found() {
        let service = service_with_book();
        let request = SimulationRequest::market("unknown", Side::Buy, dec!(5));

        assert_eq!(
            service.simulate(&request),
            Err(SimulationError::BookNotFound {
                token_id: TokenId::from("unknown"),
            })
        );
    }

    #[test]
    fn validation_errors_pass_through() {
        let service = service_with_book();
        let request = SimulationRequest::market("tok", Side::Buy, dec!(0));

        assert_eq!(
            service.simulate(&request),
            Err(SimulationError::InvalidSize { size: dec!(0) })
        );
    }
}
