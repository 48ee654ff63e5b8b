//! Builders for simulation requests used across tests.

use rust_decimal::Decimal;

use crate::domain::Side;
use crate::simulator::SimulationRequest;

/// Buy market order for token `tok`.
pub fn buy_market(size: Decimal) -> SimulationRequest {
    SimulationRequest::market("tok", Side::Buy, size)
}

/// Sell market order for token `tok`.
pub fn sell_market(size: Decimal) -> SimulationRequest {
    SimulationRequest::market("tok", Side::Sell, size)
}

/// Buy limit order for token `tok`.
pub fn buy_limit(size: Decimal, limit: Decimal) -> SimulationRequest {
    SimulationRequest::limit("tok", Side::Buy, size, limit)
}

/// Sell limit order for token `tok`.
pub fn sell_limit(size: Decimal, limit: Decimal) -> SimulationRequest {
    SimulationRequest::limit("tok", Side::Sell, size, limit)
}
