//! `fillcast depth` - operator smoke view of a snapshot.

use crate::book::BookSnapshot;
use crate::domain::TokenId;
use crate::error::Result;

use super::{output, DepthArgs};

pub fn run(args: &DepthArgs) -> Result<()> {
    let json = std::fs::read_to_string(&args.book)?;
    let token_id = TokenId::from(args.token_id.as_str());
    let book = BookSnapshot::from_json(&json)?.into_order_book(token_id);

    output::section(&format!("Book {}", book.token_id()));
    output::key_value("bid levels", book.bids().len());
    output::key_value("bid depth", book.bid_depth());
    output::key_value("ask levels", book.asks().len());
    output::key_value("ask depth", book.ask_depth());

    match book.best_bid() {
        Some(bid) => output::key_value("best bid", bid),
        None => output::warn("no bids"),
    }
    match book.best_ask() {
        Some(ask) => output::key_value("best ask", ask),
        None => output::warn("no asks"),
    }
    if let Some(mid) = book.mid_price() {
        output::key_value("mid price", mid);
    }

    Ok(())
}
