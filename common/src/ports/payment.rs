use async_trait::async_trait;

use crate::error::Result;
use crate::models::order::Order;

/// Charges the customer for an order.
#[async_trait]
pub trait PaymentProcessor: Send + Sync {
    async fn process_payment(&self, order: &Order) -> Result<()>;
}
