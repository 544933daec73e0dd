use solid_common::error::SolidError;
use solid_common::models::order::{Item, Order};
use solid_core::adapters::stub::{DryRun, Unimplemented};
use solid_core::orders::OrderService;

use crate::fakes::{CallLog, Fake};

fn sample_order() -> Order {
    Order::new(
        "alice",
        vec![Item::new("book", 12.5), Item::new("pen", 1.25)],
    )
}

#[tokio::test]
async fn pays_before_shipping_and_returns_total() {
    let log = CallLog::default();
    let service = OrderService::new(Fake::ok(&log), Fake::ok(&log));

    let total = service.place_order(&sample_order()).await;

    assert_eq!(total, Ok(13.75));
    assert_eq!(log.calls(), vec!["pay alice 13.75", "ship alice x2"]);
}

#[tokio::test]
async fn failed_payment_is_never_shipped() {
    let log = CallLog::default();
    let service = OrderService::new(
        Fake::failing(&log, SolidError::NotImplemented("payment processing")),
        Fake::ok(&log),
    );

    let result = service.place_order(&sample_order()).await;

    assert_eq!(result, Err(SolidError::NotImplemented("payment processing")));
    assert_eq!(log.calls(), vec!["pay alice 13.75"]);
}

#[tokio::test]
async fn unimplemented_collaborators_surface_not_implemented() {
    let service = OrderService::new(Box::new(Unimplemented), Box::new(Unimplemented));

    let result = service.place_order(&sample_order()).await;

    assert!(matches!(result, Err(SolidError::NotImplemented(_))));
}

#[tokio::test]
async fn dry_run_places_empty_orders_for_free() {
    let service = OrderService::new(Box::new(DryRun), Box::new(DryRun));

    let total = service.place_order(&Order::new("bob", Vec::new())).await;

    assert_eq!(total, Ok(0.0));
}
