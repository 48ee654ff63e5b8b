//! Pre-trade execution simulation.
//!
//! Given a snapshot of a two-sided order book and a desired trade,
//! [`simulate`] computes what would happen if the trade executed
//! immediately: the fills it would consume, the resulting average price,
//! price impact, slippage versus mid-price, and how much of the available
//! depth it uses.
//!
//! The pipeline is three internally ordered stages: validation (reject
//! malformed requests before touching the book), the book walker (greedy
//! consumption of resting liquidity, best price first), and the metrics
//! calculator. Each invocation is a pure function of its inputs; nothing
//! is mutated and nothing persists across calls, so concurrent
//! simulations need no coordination.
//!
//! # Example
//!
//! ```
//! use fillcast::domain::{OrderBook, PriceLevel, Side, TokenId};
//! use fillcast::simulator::{simulate, SimulationRequest};
//! use rust_decimal_macros::dec;
//!
//! let book = OrderBook::with_levels(
//!     TokenId::from("tok"),
//!     vec![],
//!     vec![
//!         PriceLevel::new(dec!(0.50), dec!(5)),
//!         PriceLevel::new(dec!(0.60), dec!(10)),
//!     ],
//! );
//! let request = SimulationRequest::market("tok", Side::Buy, dec!(10));
//!
//! let result = simulate(&request, &book).unwrap();
//! assert_eq!(result.average_price, dec!(0.55));
//! ```

mod error;
mod metrics;
mod request;
mod result;
mod walker;

pub use error::SimulationError;
pub use request::{SimulationRequest, ValidatedOrder};
pub use result::{Fill, SimulationResult};

use tracing::debug;

use crate::domain::OrderBook;

/// Simulate executing `request` against an immutable book snapshot.
///
/// Read-only estimation: no state is mutated and no order is placed. All
/// errors are deterministic for a given `(request, book)` pair.
pub fn simulate(
    request: &SimulationRequest,
    book: &OrderBook,
) -> Result<SimulationResult, SimulationError> {
    let order = request.validate()?;
    let walk = walker::walk_book(&order, book)?;
    let result = metrics::build_result(&order, book, walk);

    debug!(
        token_id = %request.token_id,
        side = %result.side,
        size = %result.size,
        fills = result.fills.len(),
        depth_used = %result.depth_used,
        "simulation complete"
    );

    Ok(result)
}
