//! # Order Placement Service
//!
//! Takes an [`Order`] through payment and then shipping.

use solid_common::error::SolidError;
use solid_common::models::order::Order;
use solid_common::ports::payment::PaymentProcessor;
use solid_common::ports::shipping::ShippingService;
use tracing::info;

/// Application Service for placing orders.
///
/// Orchestrates the process by:
/// 1. charging the customer through the [`PaymentProcessor`] port.
/// 2. handing the paid order to the [`ShippingService`] port.
pub struct OrderService {
    payment: Box<dyn PaymentProcessor>,
    shipping: Box<dyn ShippingService>,
}

impl OrderService {
    pub fn new(payment: Box<dyn PaymentProcessor>, shipping: Box<dyn ShippingService>) -> Self {
        Self { payment, shipping }
    }

    /// Places `order` and returns its total price.
    ///
    /// An order is never shipped unless its payment went through.
    pub async fn place_order(&self, order: &Order) -> Result<f64, SolidError> {
        let total = order.total_price();

        self.payment.process_payment(order).await?;
        info!("Payment of {total:.2} processed for {}", order.customer);

        self.shipping.ship_order(order).await?;
        info!("{} items shipped to {}", order.items.len(), order.customer);

        Ok(total)
    }
}
