//! Logging initialization as an embedding node would perform it.

#[cfg(test)]
mod tests {
    use plasma_telemetry::{init_telemetry, TelemetryConfig, TelemetryError};

    #[test]
    fn test_subscriber_installs_once() {
        let config = TelemetryConfig::from_lookup(|key| match key {
            "PC_CONSOLE_OUTPUT" => Some("false".to_string()),
            "PC_LOG_LEVEL" => Some("debug".to_string()),
            _ => None,
        });
        assert!(!config.console_output);

        // Whichever call installs first, a second install must fail
        let _ = init_telemetry(&config);
        assert!(matches!(init_telemetry(&config), Err(TelemetryError::Init(_))));
    }

    #[test]
    fn test_bad_filter_rejected_before_install() {
        let config = TelemetryConfig {
            log_level: "pc_04_spend_handler=loud".to_string(),
            ..TelemetryConfig::default()
        };
        assert!(matches!(init_telemetry(&config), Err(TelemetryError::Filter(_))));
    }
}
