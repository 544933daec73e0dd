//! # Notification Service
//!
//! Sends an email and records the fact through a separate logging port.

use solid_common::error::SolidError;
use solid_common::ports::email::EmailService;
use solid_common::ports::logging::LoggingService;
use tracing::info;

pub struct NotificationService {
    email: Box<dyn EmailService>,
    logger: Box<dyn LoggingService>,
}

impl NotificationService {
    pub fn new(email: Box<dyn EmailService>, logger: Box<dyn LoggingService>) -> Self {
        Self { email, logger }
    }

    /// Emails `recipient`, then logs `Sent email to <recipient> with subject <subject>`.
    ///
    /// Nothing is logged when sending fails.
    pub async fn notify(&self, recipient: &str, subject: &str, body: &str) -> Result<(), SolidError> {
        self.email.send_email(recipient, subject, body).await?;
        info!("Email '{subject}' sent to {recipient}");

        self.logger
            .log_message(&sent_message(recipient, subject))
            .await?;
        info!("Notification to {recipient} recorded");

        Ok(())
    }
}

/// Audit message recorded after every successful send.
fn sent_message(recipient: &str, subject: &str) -> String {
    format!("Sent email to {recipient} with subject {subject}")
}
