//! Simulation output types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::{OrderType, Price, Side, Volume};

/// One consumed slice of book depth, in walk order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fill {
    /// Price of the level this slice came from.
    pub price: Price,
    /// Size consumed at this level.
    pub size: Volume,
    /// `price * size`.
    pub cost: Decimal,
    /// Running total size across the fill sequence so far.
    pub cumulative_size: Volume,
    /// Running total cost across the fill sequence so far.
    pub cumulative_cost: Decimal,
}

/// What would happen if the requested trade executed right now.
///
/// Serialized as camelCase JSON by the request-handling layer. The fill
/// sequence always sums to the requested size; when the book is too
/// shallow the shortfall is padded at the worst observed price, so
/// `fills` must not be read as a guarantee that the liquidity exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationResult {
    pub side: Side,
    pub size: Volume,
    pub order_type: OrderType,
    /// Size-weighted average execution price (same as `average_price`,
    /// kept as a separate field for the dashboard contract).
    pub expected_price: Price,
    /// Best quote on the consumed side before any limit filtering.
    pub best_case_price: Price,
    /// Price of the last (worst) fill.
    pub worst_case_price: Price,
    /// Relative cost of walking past the best quote; never negative.
    pub price_impact: Decimal,
    /// Relative deviation of the average price from the mid; never negative.
    pub slippage: Decimal,
    pub total_cost: Decimal,
    pub average_price: Price,
    pub fills: Vec<Fill>,
    /// Fraction of eligible resting depth the order consumes, capped at 1.
    pub depth_used: Decimal,
    /// Total eligible resting size before consumption.
    pub liquidity_available: Volume,
}
