use super::*;

#[test]
fn test_default_filter_scopes_our_crates() {
    let filter = default_filter(LogLevel::Debug);
    assert_eq!(filter, "iconmatch_lib=debug,iconmatch=debug,warn");
    assert!(EnvFilter::try_new(&filter).is_ok());
}

#[test]
fn test_default_filter_every_level_parses() {
    for verbosity in 0..=4 {
        let filter = default_filter(LogLevel::from_verbosity(verbosity));
        assert!(EnvFilter::try_new(&filter).is_ok(), "bad filter {}", filter);
    }
}

#[test]
fn test_logger_global_consistency() {
    // Other tests may or may not have initialized the logger
    assert_eq!(Logger::is_initialized(), Logger::global().is_some());
}

#[test]
fn test_log_macros_work_without_logger() {
    // Falls back to plain tracing when no global logger exists
    crate::log_info!("info without logger");
    crate::log_info!("info with context", LogContext::with_progress("batch", 3));
}
