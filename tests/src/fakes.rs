use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use solid_common::error::{Result, SolidError};
use solid_common::models::order::Order;
use solid_common::ports::email::EmailService;
use solid_common::ports::logging::LoggingService;
use solid_common::ports::payment::PaymentProcessor;
use solid_common::ports::shipping::ShippingService;

/// Shared, ordered record of every call made to the fakes.
#[derive(Clone, Default)]
pub struct CallLog(Arc<Mutex<Vec<String>>>);

impl CallLog {
    pub fn push(&self, call: String) {
        self.0.lock().unwrap().push(call);
    }

    pub fn calls(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }
}

/// Records each call and optionally fails it.
pub struct Fake {
    log: CallLog,
    fail_with: Option<SolidError>,
}

impl Fake {
    pub fn ok(log: &CallLog) -> Box<Self> {
        Box::new(Self {
            log: log.clone(),
            fail_with: None,
        })
    }

    pub fn failing(log: &CallLog, err: SolidError) -> Box<Self> {
        Box::new(Self {
            log: log.clone(),
            fail_with: Some(err),
        })
    }

    fn record(&self, call: String) -> Result<()> {
        self.log.push(call);
        match &self.fail_with {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl PaymentProcessor for Fake {
    async fn process_payment(&self, order: &Order) -> Result<()> {
        self.record(format!("pay {} {:.2}", order.customer, order.total_price()))
    }
}

#[async_trait]
impl ShippingService for Fake {
    async fn ship_order(&self, order: &Order) -> Result<()> {
        self.record(format!("ship {} x{}", order.customer, order.items.len()))
    }
}

#[async_trait]
impl EmailService for Fake {
    async fn send_email(&self, recipient: &str, subject: &str, body: &str) -> Result<()> {
        self.record(format!("email {recipient} | {subject} | {body}"))
    }
}

#[async_trait]
impl LoggingService for Fake {
    async fn log_message(&self, message: &str) -> Result<()> {
        self.record(format!("log {message}"))
    }
}
