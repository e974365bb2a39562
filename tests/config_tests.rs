//! Tests for loading configuration files

use std::io::Write;
use taskboard::core::error::{ConfigError, TaskboardError};
use taskboard::prelude::*;
use tempfile::NamedTempFile;

fn write_config(yaml: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(yaml.as_bytes()).expect("write config");
    file
}

#[test]
fn test_load_from_file() {
    let file = write_config(
        r#"
server:
  bind: "0.0.0.0:9000"
listing:
  page_size: 8
  simulated_latency_ms: 150
"#,
    );

    let config = AppConfig::from_yaml_file(file.path()).unwrap();

    assert_eq!(config.server.bind, "0.0.0.0:9000");
    assert!(config.server.cors_permissive);
    assert_eq!(config.listing.page_size().get(), 8);
    assert_eq!(config.listing.max_page_size, 100);
    assert_eq!(config.listing.simulated_latency_ms, 150);
}

#[test]
fn test_empty_file_yields_defaults() {
    let file = write_config("{}\n");

    let config = AppConfig::from_yaml_file(file.path()).unwrap();

    assert_eq!(config, AppConfig::default_config());
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.yaml");

    let err = AppConfig::from_yaml_file(&path).unwrap_err();

    assert!(matches!(
        err,
        TaskboardError::Config(ConfigError::FileNotFound { .. })
    ));
}

#[test]
fn test_parse_error_names_file() {
    let file = write_config("listing:\n  page_size: many\n");

    let err = AppConfig::from_yaml_file(file.path()).unwrap_err();

    match err {
        TaskboardError::Config(ConfigError::ParseError { file: Some(name), .. }) => {
            assert_eq!(name, file.path().display().to_string());
        }
        other => panic!("expected parse error, got {:?}", other),
    }
}

#[test]
fn test_out_of_range_page_size_in_file() {
    let file = write_config("listing:\n  page_size: 500\n  max_page_size: 100\n");

    let err = AppConfig::from_yaml_file(file.path()).unwrap_err();

    assert_eq!(err.error_code(), "CONFIG_ERROR");
    assert!(err.to_string().contains("listing.page_size"));
}

#[tokio::test]
async fn test_loaded_config_drives_server() {
    let file = write_config("listing:\n  page_size: 2\n");
    let config = AppConfig::from_yaml_file(file.path()).unwrap();

    let app = ServerBuilder::new().with_config(config).build().unwrap();
    let server = axum_test::TestServer::try_new(app).unwrap();

    let body: serde_json::Value = server.get("/properties").await.json();
    assert_eq!(body["data"].as_array().map(Vec::len), Some(2));
    assert_eq!(body["pagination"]["totalPages"], 5);
}
