use async_trait::async_trait;
use solid_common::error::{Result, SolidError};
use solid_common::models::order::Order;
use solid_common::ports::email::EmailService;
use solid_common::ports::payment::PaymentProcessor;
use solid_common::ports::shipping::ShippingService;
use tracing::{info, warn};

/// Collaborator with no integration behind it. Every call is rejected.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unimplemented;

#[async_trait]
impl PaymentProcessor for Unimplemented {
    async fn process_payment(&self, _order: &Order) -> Result<()> {
        Err(SolidError::NotImplemented("payment processing"))
    }
}

#[async_trait]
impl ShippingService for Unimplemented {
    async fn ship_order(&self, _order: &Order) -> Result<()> {
        Err(SolidError::NotImplemented("order shipping"))
    }
}

#[async_trait]
impl EmailService for Unimplemented {
    async fn send_email(&self, _recipient: &str, _subject: &str, _body: &str) -> Result<()> {
        Err(SolidError::NotImplemented("email delivery"))
    }
}

/// Collaborator that only reports what it would have done.
#[derive(Debug, Clone, Copy, Default)]
pub struct DryRun;

#[async_trait]
impl PaymentProcessor for DryRun {
    async fn process_payment(&self, order: &Order) -> Result<()> {
        if order.is_empty() {
            warn!("Charging {} for an empty order", order.customer);
        }
        info!("[dry-run] would charge {} {:.2}", order.customer, order.total_price());
        Ok(())
    }
}

#[async_trait]
impl ShippingService for DryRun {
    async fn ship_order(&self, order: &Order) -> Result<()> {
        info!("[dry-run] would ship {} items to {}", order.items.len(), order.customer);
        Ok(())
    }
}

#[async_trait]
impl EmailService for DryRun {
    async fn send_email(&self, recipient: &str, subject: &str, body: &str) -> Result<()> {
        info!(
            "[dry-run] would email {recipient} '{subject}' ({} bytes)",
            body.len()
        );
        Ok(())
    }
}
