//! Metrics derived from a completed book walk.
//!
//! This stage is total: given a non-empty fill sequence it always produces
//! a result, guarding every ratio against a zero denominator.

use rust_decimal::Decimal;

use crate::domain::{OrderBook, Side};

use super::request::ValidatedOrder;
use super::result::SimulationResult;
use super::walker::WalkOutcome;

/// Derive the full simulation result from the walker's output.
pub(crate) fn build_result(
    order: &ValidatedOrder,
    book: &OrderBook,
    walk: WalkOutcome,
) -> SimulationResult {
    let total_cost: Decimal = walk.fills.iter().map(|fill| fill.cost).sum();
    // Size is validated positive before the walk.
    let average_price = total_cost / order.size;

    // Best of the consumed side before any limit filtering; the walker has
    // already rejected empty sides, so the fallback never fires in practice.
    let best_case_price = match order.side {
        Side::Buy => book.best_ask(),
        Side::Sell => book.best_bid(),
    }
    .unwrap_or(Decimal::ZERO);

    let worst_case_price = walk
        .fills
        .last()
        .map(|fill| fill.price)
        .unwrap_or(Decimal::ZERO);

    // Impact measures cost relative to the best quote, never a benefit.
    let price_impact = if best_case_price > Decimal::ZERO {
        let drift = match order.side {
            Side::Buy => average_price - best_case_price,
            Side::Sell => best_case_price - average_price,
        };
        (drift / best_case_price).max(Decimal::ZERO)
    } else {
        Decimal::ZERO
    };

    let mid_price = book.mid_price().unwrap_or(Decimal::ZERO);
    let slippage = if mid_price > Decimal::ZERO {
        ((average_price - mid_price) / mid_price).abs()
    } else {
        Decimal::ZERO
    };

    // Caps at 100% even when the padding fill "used" more depth than the
    // snapshot actually held.
    let depth_used = if walk.liquidity_available > Decimal::ZERO {
        (order.size / walk.liquidity_available).min(Decimal::ONE)
    } else {
        Decimal::ONE
    };

    SimulationResult {
        side: order.side,
        size: order.size,
        order_type: order.order_type,
        expected_price: average_price,
        best_case_price,
        worst_case_price,
        price_impact,
        slippage,
        total_cost,
        average_price,
        fills: walk.fills,
        depth_used,
        liquidity_available: walk.liquidity_available,
    }
}
