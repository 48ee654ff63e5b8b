//! `fillcast simulate` - run the execution simulator on a snapshot file.

use std::sync::Arc;

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::book::{BookSnapshot, OrderBookCache};
use crate::config::Config;
use crate::domain::TokenId;
use crate::error::Result;
use crate::service::SimulatorService;
use crate::simulator::{SimulationRequest, SimulationResult};

use super::{output, SimulateArgs};

pub fn run(args: &SimulateArgs, config: &Config) -> Result<()> {
    let json = std::fs::read_to_string(&args.book)?;
    let token_id = TokenId::from(args.token_id.as_str());
    let book = BookSnapshot::from_json(&json)?.into_order_book(token_id.clone());

    // Same wiring the dashboard backend uses: snapshot goes through the
    // cache seam, the service resolves it back out.
    let cache = OrderBookCache::new(config.book.ttl());
    cache.insert(book);
    let service = SimulatorService::new(Arc::new(cache));

    let request = match args.limit_price {
        Some(limit) => {
            SimulationRequest::limit(token_id, args.side.into(), args.size, limit)
        }
        None => SimulationRequest::market(token_id, args.side.into(), args.size),
    };

    let result = service.simulate(&request)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        render(&result);
    }
    Ok(())
}

#[derive(Tabled)]
struct FillRow {
    #[tabled(rename = "price")]
    price: String,
    #[tabled(rename = "size")]
    size: String,
    #[tabled(rename = "cost")]
    cost: String,
    #[tabled(rename = "cum. size")]
    cumulative_size: String,
    #[tabled(rename = "cum. cost")]
    cumulative_cost: String,
}

fn render(result: &SimulationResult) {
    output::section(&format!(
        "{} {} @ {}",
        result.side, result.size, result.order_type
    ));

    let rows: Vec<FillRow> = result
        .fills
        .iter()
        .map(|fill| FillRow {
            price: fill.price.to_string(),
            size: fill.size.to_string(),
            cost: fill.cost.round_dp(6).to_string(),
            cumulative_size: fill.cumulative_size.to_string(),
            cumulative_cost: fill.cumulative_cost.round_dp(6).to_string(),
        })
        .collect();
    println!("{}", Table::new(rows).with(Style::sharp()));

    output::section("Result");
    output::key_value("average price", result.average_price.round_dp(6));
    output::key_value("best case", result.best_case_price);
    output::key_value("worst case", result.worst_case_price);
    output::key_value("total cost", result.total_cost.round_dp(6));
    output::key_value("price impact", format_pct(result.price_impact));
    output::key_value("slippage", format_pct(result.slippage));
    output::key_value("depth used", format_pct(result.depth_used));
    output::key_value("liquidity", result.liquidity_available);

    if result.depth_used == rust_decimal::Decimal::ONE {
        output::warn("order exceeds observed depth; shortfall priced at the worst level");
    }
}

fn format_pct(ratio: rust_decimal::Decimal) -> String {
    format!("{}%", (ratio * rust_decimal::Decimal::ONE_HUNDRED).round_dp(2))
}
