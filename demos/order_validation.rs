//! Order validation pipeline built from outcome combinators.
//!
//! Run with `RUST_LOG=info cargo run --example order_validation` to see the
//! diagnostic lines emitted by the `log*` taps.

use log::Level;
use probable::core::{Outcome, State};
use probable::failure;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq)]
struct Order {
    id: u32,
    quantity: u32,
    unit_price_cents: u64,
}

#[derive(Debug, Error)]
#[error("malformed order line '{0}'")]
struct MalformedLine(String);

fn parse_order(line: &str) -> Result<Order, MalformedLine> {
    let malformed = || MalformedLine(line.to_string());
    let mut fields = line.split(',').map(str::trim);
    let mut next_number = || {
        fields
            .next()
            .and_then(|field| field.parse::<u64>().ok())
            .ok_or_else(malformed)
    };

    let id = next_number()?;
    let quantity = next_number()?;
    let unit_price_cents = next_number()?;

    Ok(Order {
        id: u32::try_from(id).map_err(|_| malformed())?,
        quantity: u32::try_from(quantity).map_err(|_| malformed())?,
        unit_price_cents,
    })
}

fn reserve_stock(order: Order) -> Outcome<Order> {
    const IN_STOCK: u32 = 50;
    if order.quantity > IN_STOCK {
        return failure!("order {} asks for {} units, only {} in stock", order.id, order.quantity, IN_STOCK);
    }
    Outcome::value(order)
}

fn process(line: &str) -> Outcome<u64> {
    Outcome::of_fallible(|| parse_order(line))
        .log_at(Level::Debug)
        .flat_map(|order| Outcome::of_predicate(|order: &Order| order.quantity > 0, order))
        .flat_map(reserve_stock)
        .map(|order| u64::from(order.quantity) * order.unit_price_cents)
        .log_message("order total")
}

fn main() {
    env_logger::init();

    let lines = ["1, 3, 1250", "2, 0, 990", "3, 80, 100", "four, 1, 1"];

    for line in lines {
        let total = process(line);
        match total.state() {
            State::Value => log::info!("'{}' -> total {} cents", line, total),
            State::Empty => log::warn!("'{}' -> nothing to charge ({})", line, total.message()),
            State::Failure => log::error!("'{}' -> rejected: {}", line, total.message()),
        }
    }
}
