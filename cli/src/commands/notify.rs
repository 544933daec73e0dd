use solid_common::config::Config;
use solid_common::ports::email::EmailService;
use solid_core::adapters::stub::{DryRun, Unimplemented};
use solid_core::adapters::tracing_logger::TracingLogger;
use solid_core::notifications::NotificationService;

use crate::terminal::print::{self, KEY_WIDTH};

pub async fn notify(recipient: &str, subject: &str, body: &str, cfg: &Config) -> anyhow::Result<()> {
    // Wiring
    let email: Box<dyn EmailService> = if cfg.dry_run {
        Box::new(DryRun)
    } else {
        Box::new(Unimplemented)
    };
    let service = NotificationService::new(email, Box::new(TracingLogger));

    if cfg.quiet < 2 {
        KEY_WIDTH.set("Recipient".len());
        print::key_value("Recipient", recipient);
        print::key_value("Subject", subject);
        print::key_value("Body", body);
    }

    service.notify(recipient, subject, body).await?;

    print::result(&format!("Notified {recipient}"), cfg.quiet);
    Ok(())
}
