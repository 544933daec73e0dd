use async_trait::async_trait;

use crate::error::Result;
use crate::models::order::Order;

/// Delivers the goods of a paid order.
#[async_trait]
pub trait ShippingService: Send + Sync {
    async fn ship_order(&self, order: &Order) -> Result<()>;
}
