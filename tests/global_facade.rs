//! Process-wide facade lifecycle
//!
//! Kept to a single test in its own binary: the steps depend on the global
//! state left behind by the previous one.

use service_logger::core::{global, LogLevel};
use service_logger::facade::{DEFAULT_ENV, DEFAULT_SERVICE, MODULE_KEY};
use service_logger::{FieldValue, LoggerError, ServiceIdentity};

#[test]
fn test_process_wide_lifecycle() {
    // Nothing installed yet
    assert!(service_logger::identity().is_none());
    assert!(service_logger::sync().is_ok());
    assert!(!global::is_installed());
    assert_eq!(global::global().level(), None);

    // First module logger installs the defaults, ignoring LOG_LEVEL
    std::env::set_var("LOG_LEVEL", "error");
    let http = service_logger::module_logger("http");
    assert_eq!(http.level(), Some(LogLevel::Info));
    assert_eq!(
        http.fields().get("service"),
        Some(&FieldValue::from(DEFAULT_SERVICE))
    );
    assert_eq!(http.fields().get("env"), Some(&FieldValue::from(DEFAULT_ENV)));
    assert_eq!(http.fields().get(MODULE_KEY), Some(&FieldValue::from("http")));
    assert_eq!(service_logger::identity(), Some(ServiceIdentity::default()));

    // The engine's ambient logger follows the facade, without service/env
    assert!(global::is_installed());
    assert_eq!(global::global().level(), Some(LogLevel::Info));
    assert!(global::global().fields().is_empty());

    // Explicit init: LOG_LEVEL applies when the argument is blank
    service_logger::init("  ", "orders-api", "prod").expect("Failed to init");
    assert_eq!(global::global().level(), Some(LogLevel::Error));
    let identity = service_logger::identity().expect("identity after init");
    assert_eq!(identity.service, "orders-api");
    assert_eq!(identity.env, "prod");

    // A bad level leaves everything as it was
    let err = service_logger::init("noisy", "other", "stage").unwrap_err();
    assert!(matches!(err, LoggerError::InvalidLevel { .. }));
    assert_eq!(service_logger::identity(), Some(identity));

    // Loggers handed out earlier keep their own configuration
    assert_eq!(http.level(), Some(LogLevel::Info));
    let db = service_logger::module_logger("db");
    assert_eq!(db.level(), Some(LogLevel::Error));
    assert_eq!(db.fields().get("service"), Some(&FieldValue::from("orders-api")));

    std::env::remove_var("LOG_LEVEL");
    assert!(service_logger::sync().is_ok());
}
