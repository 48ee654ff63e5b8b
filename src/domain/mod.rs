//! Exchange-agnostic domain types.

mod ids;
mod money;
mod order;
mod orderbook;

pub mod error;

pub use error::DomainError;
pub use ids::TokenId;
pub use money::{Price, Volume};
pub use order::{OrderType, Side};
pub use orderbook::{OrderBook, PriceLevel};
