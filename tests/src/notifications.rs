use solid_common::error::SolidError;
use solid_core::adapters::stub::{DryRun, Unimplemented};
use solid_core::adapters::tracing_logger::TracingLogger;
use solid_core::notifications::NotificationService;

use crate::fakes::{CallLog, Fake};

#[tokio::test]
async fn emails_then_logs_the_subject() {
    let log = CallLog::default();
    let service = NotificationService::new(Fake::ok(&log), Fake::ok(&log));

    service
        .notify("user@example.com", "Subject", "Body")
        .await
        .expect("notification should succeed");

    assert_eq!(
        log.calls(),
        vec![
            "email user@example.com | Subject | Body",
            "log Sent email to user@example.com with subject Subject",
        ]
    );
}

#[tokio::test]
async fn failed_email_is_not_logged() {
    let log = CallLog::default();
    let service = NotificationService::new(
        Fake::failing(&log, SolidError::NotImplemented("email delivery")),
        Fake::ok(&log),
    );

    let result = service.notify("user@example.com", "Subject", "Body").await;

    assert_eq!(result, Err(SolidError::NotImplemented("email delivery")));
    assert_eq!(log.calls(), vec!["email user@example.com | Subject | Body"]);
}

#[tokio::test]
async fn logger_failure_is_reported() {
    let log = CallLog::default();
    let service = NotificationService::new(
        Fake::ok(&log),
        Fake::failing(&log, SolidError::InvalidInput("log sink closed".into())),
    );

    let result = service.notify("a@b.c", "hi", "").await;

    assert!(matches!(result, Err(SolidError::InvalidInput(_))));
    assert_eq!(log.calls().len(), 2);
}

#[tokio::test]
async fn shipped_adapters() {
    let unimplemented = NotificationService::new(Box::new(Unimplemented), Box::new(TracingLogger));
    assert_eq!(
        unimplemented.notify("a@b.c", "hi", "body").await,
        Err(SolidError::NotImplemented("email delivery"))
    );

    let dry_run = NotificationService::new(Box::new(DryRun), Box::new(TracingLogger));
    assert_eq!(dry_run.notify("a@b.c", "hi", "body").await, Ok(()));
}
