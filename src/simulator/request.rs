//! Simulation request types and input validation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::{OrderType, Price, Side, TokenId, Volume};

use super::error::SimulationError;

/// A desired trade to simulate against a book snapshot.
///
/// Mirrors the dashboard's wire shape (camelCase JSON). `limit_price` is
/// optional on the wire and only meaningful for limit orders; validation
/// enforces the pairing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationRequest {
    /// Token whose book the trade would execute against.
    pub token_id: TokenId,
    /// Buy consumes asks, sell consumes bids.
    pub side: Side,
    /// Desired trade size in shares.
    pub size: Volume,
    /// Market or limit.
    pub order_type: OrderType,
    /// Price bound, required iff `order_type` is `Limit`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit_price: Option<Price>,
}

impl SimulationRequest {
    /// Build a market-order request.
    #[must_use]
    pub fn market(token_id: impl Into<TokenId>, side: Side, size: Volume) -> Self {
        Self {
            token_id: token_id.into(),
            side,
            size,
            order_type: OrderType::Market,
            limit_price: None,
        }
    }

    /// Build a limit-order request.
    #[must_use]
    pub fn limit(token_id: impl Into<TokenId>, side: Side, size: Volume, limit_price: Price) -> Self {
        Self {
            token_id: token_id.into(),
            side,
            size,
            order_type: OrderType::Limit,
            limit_price: Some(limit_price),
        }
    }

    /// Validate the request before any book access.
    ///
    /// Checks run in a fixed order so a malformed request always maps to
    /// the same error: size first, then the limit-price contract.
    pub fn validate(&self) -> Result<ValidatedOrder, SimulationError> {
        if self.size <= Decimal::ZERO {
            return Err(SimulationError::InvalidSize { size: self.size });
        }

        let limit = match self.order_type {
            OrderType::Market => None,
            OrderType::Limit => {
                let price = self
                    .limit_price
                    .ok_or(SimulationError::MissingLimitPrice)?;
                if price < Decimal::ZERO || price > Decimal::ONE {
                    return Err(SimulationError::InvalidPrice { price });
                }
                Some(price)
            }
        };

        Ok(ValidatedOrder {
            side: self.side,
            size: self.size,
            order_type: self.order_type,
            limit,
        })
    }
}

/// A request that has passed validation.
///
/// `limit` is `Some` exactly when the order is a limit order, so the walker
/// never needs to re-check the pairing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatedOrder {
    pub side: Side,
    pub size: Volume,
    pub order_type: OrderType,
    pub limit: Option<Price>,
}
