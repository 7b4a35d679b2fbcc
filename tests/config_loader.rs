use circle_ussd::config::{Config, ConfigError, DisplayConfig, SessionConfig};
use std::fs;
use tempfile::TempDir;

fn write_config(content: &str) -> (TempDir, std::path::PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, content).expect("Failed to write config");
    (temp_dir, path)
}

#[test]
fn test_config_default_values() {
    let config = Config::default();
    assert_eq!(config.session.service_code, "*384*855#");
    assert_eq!(config.session.operator, "Safaricom");
    assert!(config.session.exit_notice.starts_with("Thank you for using TheCircle USSD!"));
    assert!(config.display.show_icons);
    assert!(config.display.show_breadcrumb);
    assert_eq!(config.display.tick_rate_ms, 250);
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_path_ends_with_expected() {
    let path = Config::config_path();
    assert!(path.ends_with("circle-ussd/config.toml"));
}

#[test]
fn test_missing_file_yields_defaults() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config = Config::load_from(&temp_dir.path().join("absent.toml")).expect("defaults");
    assert_eq!(config, Config::default());
}

#[test]
fn test_partial_file_fills_defaults() {
    let (_dir, path) = write_config(
        r#"
[session]
operator = "Airtel"

[display]
show_icons = false
"#,
    );
    let config = Config::load_from(&path).expect("valid config");
    assert_eq!(config.session.operator, "Airtel");
    assert_eq!(config.session.service_code, "*384*855#");
    assert!(!config.display.show_icons);
    assert!(config.display.show_breadcrumb);
}

#[test]
fn test_empty_file_is_default() {
    let (_dir, path) = write_config("");
    let config = Config::load_from(&path).expect("valid config");
    assert_eq!(config, Config::default());
}

#[test]
fn test_parse_error_names_path() {
    let (_dir, path) = write_config("[session\noperator = ");
    let err = Config::load_from(&path).unwrap_err();
    match &err {
        ConfigError::ParseError { path: err_path, .. } => assert_eq!(err_path, &path),
        other => panic!("Expected ParseError, got {other:?}"),
    }
    assert!(err.to_string().contains("Failed to parse config file"));
}

#[test]
fn test_validation_rejects_bad_service_code() {
    let (_dir, path) = write_config(
        r#"
[session]
service_code = "384855"
"#,
    );
    match Config::load_from(&path).unwrap_err() {
        ConfigError::ValidationError { message } => {
            assert!(message.contains("must start with '*' and end with '#'"));
        }
        other => panic!("Expected ValidationError, got {other:?}"),
    }
}

#[test]
fn test_validation_rejects_blank_operator() {
    let config = Config {
        session: SessionConfig {
            operator: "   ".to_string(),
            ..SessionConfig::default()
        },
        display: DisplayConfig::default(),
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValidationError { .. })
    ));
}

#[test]
fn test_validation_rejects_zero_tick_rate() {
    let config = Config {
        session: SessionConfig::default(),
        display: DisplayConfig {
            tick_rate_ms: 0,
            ..DisplayConfig::default()
        },
    };
    match config.validate().unwrap_err() {
        ConfigError::ValidationError { message } => assert!(message.contains("tick_rate_ms")),
        other => panic!("Expected ValidationError, got {other:?}"),
    }
}

#[test]
fn test_config_roundtrips_through_toml() {
    let mut config = Config::default();
    config.session.service_code = "*123#".to_string();
    let text = toml::to_string(&config).expect("serialize");
    let (_dir, path) = write_config(&text);
    assert_eq!(Config::load_from(&path).expect("reload"), config);
}
