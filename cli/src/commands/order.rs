use colored::*;
use solid_common::config::Config;
use solid_common::models::order::{Item, Order};
use solid_core::adapters::stub::{DryRun, Unimplemented};
use solid_core::orders::OrderService;

use crate::terminal::{colors, print};

pub async fn order(customer: String, items: Vec<Item>, cfg: &Config) -> anyhow::Result<()> {
    let order = Order::new(customer, items);

    // Wiring
    let service = if cfg.dry_run {
        OrderService::new(Box::new(DryRun), Box::new(DryRun))
    } else {
        OrderService::new(Box::new(Unimplemented), Box::new(Unimplemented))
    };

    if cfg.quiet < 2 {
        print_order(&order);
    }

    let total: f64 = service.place_order(&order).await?;

    print::result(&summary(&order.customer, total), cfg.quiet);
    Ok(())
}

fn print_order(order: &Order) {
    let total: ColoredString = print::number(order.total_price()).bold();
    let details: Vec<(&str, ColoredString)> = order
        .items
        .iter()
        .map(|item| (item.name.as_str(), print::number(item.price)))
        .chain(std::iter::once(("Total", total)))
        .collect();
    print::tree(0, &order.customer, &details);
}

fn summary(customer: &str, total: f64) -> String {
    format!(
        "Order for {} placed: {}",
        customer.color(colors::PRIMARY),
        print::number(total).bold()
    )
}
