//! Fillcast - pre-trade execution simulation for prediction-market books.
//!
//! Given a snapshot of a two-sided order book and a desired trade, the
//! simulator computes what would happen if the trade executed immediately:
//! the fills it would consume, the resulting average price, price impact,
//! slippage versus mid-price, and how much of the available depth it uses.
//! It is read-only estimation; no order is ever placed and no state is
//! mutated.
//!
//! # Modules
//!
//! - [`domain`] - Exchange-agnostic types: order books, price levels, sides
//! - [`simulator`] - The core pipeline: validation, book walk, metrics
//! - [`book`] - Book source seam: TTL cache and snapshot wire adapter
//! - [`service`] - Facade used by the request-handling layer
//! - [`config`] - Configuration loading from TOML with logging setup
//! - [`error`] - Error types for the crate
//! - [`cli`] - Command-line interface
//!
//! # Example
//!
//! ```
//! use fillcast::domain::{OrderBook, PriceLevel, Side, TokenId};
//! use fillcast::simulator::{simulate, SimulationRequest};
//! use rust_decimal_macros::dec;
//!
//! let book = OrderBook::with_levels(
//!     TokenId::from("seriesA-winner-yes"),
//!     vec![PriceLevel::new(dec!(0.48), dec!(120))],
//!     vec![
//!         PriceLevel::new(dec!(0.52), dec!(80)),
//!         PriceLevel::new(dec!(0.55), dec!(200)),
//!     ],
//! );
//!
//! let request = SimulationRequest::market("seriesA-winner-yes", Side::Buy, dec!(100));
//! let result = simulate(&request, &book).unwrap();
//!
//! assert_eq!(result.fills.len(), 2);
//! assert!(result.price_impact > dec!(0));
//! ```

pub mod book;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod service;
pub mod simulator;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
