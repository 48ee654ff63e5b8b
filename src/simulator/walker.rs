//! Book walker: greedy consumption of resting liquidity, best price first.

use rust_decimal::Decimal;

use crate::domain::{OrderBook, Price, PriceLevel, Side, Volume};

use super::error::SimulationError;
use super::request::ValidatedOrder;
use super::result::Fill;

/// Raw outcome of a book walk, before metrics are derived.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct WalkOutcome {
    /// Ordered fill sequence; sizes always sum to the requested size.
    pub fills: Vec<Fill>,
    /// Total eligible resting size before consumption, excluding any
    /// synthetic padding.
    pub liquidity_available: Volume,
}

/// Walk the book and produce the fills a validated order would consume.
///
/// The candidate side is re-sorted by price priority before walking; the
/// snapshot may come from an untyped upstream source and an unsorted book
/// would silently corrupt fill prices.
pub(crate) fn walk_book(
    order: &ValidatedOrder,
    book: &OrderBook,
) -> Result<WalkOutcome, SimulationError> {
    let mut levels: Vec<PriceLevel> = match order.side {
        Side::Buy => book.asks().to_vec(),
        Side::Sell => book.bids().to_vec(),
    };

    if levels.is_empty() {
        return Err(SimulationError::NoLiquidityForSide { side: order.side });
    }

    match order.side {
        Side::Buy => levels.sort_by(|a, b| a.price().cmp(&b.price())),
        Side::Sell => levels.sort_by(|a, b| b.price().cmp(&a.price())),
    }

    if let Some(limit) = order.limit {
        levels.retain(|level| match order.side {
            Side::Buy => level.price() <= limit,
            Side::Sell => level.price() >= limit,
        });
        if levels.is_empty() {
            return Err(SimulationError::NoLiquidityAtLimit { limit_price: limit });
        }
    }

    let liquidity_available: Volume = levels.iter().map(PriceLevel::size).sum();

    let mut fills = Vec::new();
    let mut remaining = order.size;
    let mut cumulative_size = Decimal::ZERO;
    let mut cumulative_cost = Decimal::ZERO;

    for level in &levels {
        if remaining <= Decimal::ZERO {
            break;
        }
        let size = remaining.min(level.size());
        remaining -= size;
        push_fill(
            &mut fills,
            &mut cumulative_size,
            &mut cumulative_cost,
            level.price(),
            size,
        );
    }

    // Insufficient depth: pad the shortfall at the worst eligible price so
    // the fill sequence always sums to the requested size. Callers must not
    // read the padding fill as real liquidity beyond the snapshot.
    if remaining > Decimal::ZERO {
        let worst_price = fills
            .last()
            .map(|fill| fill.price)
            .or_else(|| levels.last().map(PriceLevel::price))
            .unwrap_or(Decimal::ZERO);
        push_fill(
            &mut fills,
            &mut cumulative_size,
            &mut cumulative_cost,
            worst_price,
            remaining,
        );
    }

    Ok(WalkOutcome {
        fills,
        liquidity_available,
    })
}

fn push_fill(
    fills: &mut Vec<Fill>,
    cumulative_size: &mut Volume,
    cumulative_cost: &mut Decimal,
    price: Price,
    size: Volume,
) {
    let cost = price * size;
    *cumulative_size += size;
    *cumulative_cost += cost;
    fills.push(Fill {
        price,
        size,
        cost,
        cumulative_size: *cumulative_size,
        cumulative_cost: *cumulative_cost,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{OrderType, TokenId};
    use rust_decimal_macros::dec;

    fn order(side: Side, size: Volume, limit: Option<Price>) -> ValidatedOrder {
        ValidatedOrder {
            side,
            size,
            order_type: if limit.is_some() {
                OrderType::Limit
            } else {
                OrderType::Market
            },
            limit,
        }
    }

    fn book(bids: Vec<(Decimal, Decimal)>, asks: Vec<(Decimal, Decimal)>) -> OrderBook {
        OrderBook::with_levels(
            TokenId::from("tok"),
            bids.into_iter()
                .map(|(p, s)| PriceLevel::new(p, s))
                .collect(),
            asks.into_iter()
                .map(|(p, s)| PriceLevel::new(p, s))
                .collect(),
        )
    }

    #[test]
    fn buy_walks_asks_cheapest_first() {
        let book = book(vec![], vec![(dec!(0.50), dec!(5)), (dec!(0.60), dec!(10))]);
        let walk = walk_book(&order(Side::Buy, dec!(10), None), &book).unwrap();

        assert_eq!(walk.fills.len(), 2);
        assert_eq!(walk.fills[0].price, dec!(0.50));
        assert_eq!(walk.fills[0].size, dec!(5));
        assert_eq!(walk.fills[1].price, dec!(0.60));
        assert_eq!(walk.fills[1].size, dec!(5));
        assert_eq!(walk.liquidity_available, dec!(15));
    }

    #[test]
    fn sell_walks_bids_highest_first() {
        let book = book(vec![(dec!(0.60), dec!(6)), (dec!(0.70), dec!(4))], vec![]);
        let walk = walk_book(&order(Side::Sell, dec!(8), None), &book).unwrap();

        assert_eq!(walk.fills[0].price, dec!(0.70));
        assert_eq!(walk.fills[0].size, dec!(4));
        assert_eq!(walk.fills[1].price, dec!(0.60));
        assert_eq!(walk.fills[1].size, dec!(4));
    }

    #[test]
    fn unsorted_input_matches_sorted_input() {
        let sorted = book(vec![], vec![(dec!(0.40), dec!(3)), (dec!(0.50), dec!(3))]);
        let shuffled = book(vec![], vec![(dec!(0.50), dec!(3)), (dec!(0.40), dec!(3))]);
        let order = order(Side::Buy, dec!(5), None);

        let a = walk_book(&order, &sorted).unwrap();
        let b = walk_book(&order, &shuffled).unwrap();
        assert_eq!(a.fills, b.fills);
    }

    #[test]
    fn exact_single_level_produces_one_fill() {
        let book = book(vec![], vec![(dec!(0.50), dec!(10))]);
        let walk = walk_book(&order(Side::Buy, dec!(10), None), &book).unwrap();

        assert_eq!(walk.fills.len(), 1);
        assert_eq!(walk.fills[0].size, dec!(10));
        assert_eq!(walk.fills[0].cumulative_size, dec!(10));
    }

    #[test]
    fn empty_side_is_an_error() {
        let book = book(vec![(dec!(0.50), dec!(10))], vec![]);
        assert_eq!(
            walk_book(&order(Side::Buy, dec!(5), None), &book),
            Err(SimulationError::NoLiquidityForSide { side: Side::Buy })
        );
    }

    #[test]
    fn limit_filtering_can_empty_the_side() {
        let asks_only = book(vec![], vec![(dec!(0.60), dec!(5)), (dec!(0.70), dec!(5))]);
        assert_eq!(
            walk_book(&order(Side::Buy, dec!(5), Some(dec!(0.55))), &asks_only),
            Err(SimulationError::NoLiquidityAtLimit {
                limit_price: dec!(0.55)
            })
        );

        let bids_only = book(vec![(dec!(0.40), dec!(5)), (dec!(0.45), dec!(5))], vec![]);
        assert_eq!(
            walk_book(&order(Side::Sell, dec!(5), Some(dec!(0.50))), &bids_only),
            Err(SimulationError::NoLiquidityAtLimit {
                limit_price: dec!(0.50)
            })
        );
    }

    #[test]
    fn limit_excludes_worse_levels_from_liquidity() {
        let book = book(
            vec![],
            vec![(dec!(0.50), dec!(5)), (dec!(0.60), dec!(10))],
        );
        let walk = walk_book(&order(Side::Buy, dec!(3), Some(dec!(0.55))), &book).unwrap();

        assert_eq!(walk.liquidity_available, dec!(5));
        assert_eq!(walk.fills.len(), 1);
        assert_eq!(walk.fills[0].price, dec!(0.50));
    }

    #[test]
    fn shortfall_is_padded_at_worst_eligible_price() {
        let book = book(vec![], vec![(dec!(0.50), dec!(4)), (dec!(0.60), dec!(6))]);
        let walk = walk_book(&order(Side::Buy, dec!(20), None), &book).unwrap();

        let total: Decimal = walk.fills.iter().map(|f| f.size).sum();
        assert_eq!(total, dec!(20));

        let padding = walk.fills.last().unwrap();
        assert_eq!(padding.price, dec!(0.60));
        assert_eq!(padding.size, dec!(10));
        assert_eq!(walk.liquidity_available, dec!(10));
    }

    #[test]
    fn cumulative_totals_are_running_sums() {
        let book = book(vec![], vec![(dec!(0.50), dec!(5)), (dec!(0.60), dec!(10))]);
        let walk = walk_book(&order(Side::Buy, dec!(10), None), &book).unwrap();

        assert_eq!(walk.fills[0].cumulative_size, dec!(5));
        assert_eq!(walk.fills[0].cumulative_cost, dec!(2.50));
        assert_eq!(walk.fills[1].cumulative_size, dec!(10));
        assert_eq!(walk.fills[1].cumulative_cost, dec!(5.50));
    }
}
