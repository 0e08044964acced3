use super::*;

// =============================================================================
// VALUE ENUM PARSING
// =============================================================================

macro_rules! test_enum_completeness {
    ($enum_type:ty, $test_name:ident) => {
        #[test]
        fn $test_name() {
            for variant in <$enum_type>::value_variants() {
                let possible_value = variant
                    .to_possible_value()
                    .expect("PossibleValue should exist for all variants");
                let parsed: $enum_type = possible_value
                    .get_name()
                    .parse()
                    .expect("primary name should parse");
                assert_eq!(parsed, *variant, "Round-trip should preserve variant");
            }
        }
    };
}

macro_rules! test_fromstr_aliases {
    ($enum_type:ty, $test_name:ident, $expected_mappings:expr) => {
        #[test]
        fn $test_name() {
            let mappings: &[(&str, $enum_type)] = &$expected_mappings;

            for (input, expected) in mappings {
                let parsed: Result<$enum_type, _> = input.parse();
                assert_eq!(
                    parsed.ok(),
                    Some(*expected),
                    "Wrong variant for input '{}'",
                    input
                );
            }
        }
    };
}

test_enum_completeness!(LogLevel, test_log_level_completeness);
test_enum_completeness!(LogFormat, test_log_format_completeness);
test_enum_completeness!(LogOutput, test_log_output_completeness);
test_enum_completeness!(
    TerminalCapsDetectIntent,
    test_tty_caps_detect_intent_completeness
);

test_fromstr_aliases!(
    LogLevel,
    test_log_level_aliases,
    [
        ("error", LogLevel::Error),
        ("err", LogLevel::Error),
        ("warn", LogLevel::Warning),
        ("WARNING", LogLevel::Warning),
        ("info", LogLevel::Info),
        ("debug", LogLevel::Debug),
        ("trace", LogLevel::Trace),
        ("verbose", LogLevel::Trace),
    ]
);

test_fromstr_aliases!(
    LogFormat,
    test_log_format_aliases,
    [
        ("text", LogFormat::Text),
        ("plain", LogFormat::Text),
        ("json", LogFormat::Json),
        ("Pretty", LogFormat::Pretty),
    ]
);

test_fromstr_aliases!(
    TerminalCapsDetectIntent,
    test_tty_caps_detect_intent_aliases,
    [
        ("auto", TerminalCapsDetectIntent::Auto),
        ("detect", TerminalCapsDetectIntent::Auto),
        ("always", TerminalCapsDetectIntent::Always),
        ("on", TerminalCapsDetectIntent::Always),
        ("never", TerminalCapsDetectIntent::Never),
        ("off", TerminalCapsDetectIntent::Never),
    ]
);

#[test]
fn test_unknown_value_reports_parse_error() {
    let err = "sideways".parse::<LogOutput>().unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { ref value, .. } if value == "sideways"));
    assert!(err.to_string().contains("invalid log output stream"));
}

// =============================================================================
// LOG LEVEL BEHAVIOR
// =============================================================================

#[test]
fn test_log_level_from_verbosity_boundary_conditions() {
    assert_eq!(LogLevel::from_verbosity(0), LogLevel::Error);
    assert_eq!(LogLevel::from_verbosity(1), LogLevel::Warning);
    assert_eq!(LogLevel::from_verbosity(2), LogLevel::Info);
    assert_eq!(LogLevel::from_verbosity(3), LogLevel::Debug);
    assert_eq!(LogLevel::from_verbosity(4), LogLevel::Trace);
    assert_eq!(LogLevel::from_verbosity(u8::MAX), LogLevel::Trace);
}

#[test]
fn test_filter_strings() {
    assert_eq!(LogLevel::Warning.as_filter_str(), "warn");
    assert_eq!(LogLevel::Trace.as_filter_str(), "trace");
}

#[test]
fn test_explicit_color_intent_ignores_stream() {
    assert!(TerminalCapsDetectIntent::Always.enables_color(LogOutput::Stdout));
    assert!(!TerminalCapsDetectIntent::Never.enables_color(LogOutput::Stderr));
}

#[test]
fn test_log_context_progress() {
    let context = LogContext::with_progress("batch", 61);
    assert_eq!(context.operation, "batch");
    assert_eq!(context.total_items, Some(61));
}

#[test]
fn test_config_error_display() {
    let error = ConfigError::AlreadyInitialized;
    assert_eq!(error.to_string(), "Global configuration already initialized");

    let error = ConfigError::UnsupportedLanguage {
        language: "xx".to_string(),
        known: "he, en".to_string(),
    };
    assert_eq!(error.to_string(), "Unsupported language 'xx' (known: he, en)");
}
