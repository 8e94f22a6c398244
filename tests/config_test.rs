// tests/config_test.rs
use lae_automator::config::{load_config, LOCAL_CONFIG_FILE};
use serial_test::serial;
use std::env;
use std::fs;
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

#[test]
fn test_load_from_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    let toml_content = r#"
[versions."39"]
old_core_version = "3.9.2"
new_core_version = "3.9.3"
old_lae_version = "19.0.2"
new_lae_version = "19.0.3"

[versions."311"]
old_core_version = "3.11.4"
old_lae_version = "20.1.0"
"#;
    temp_file.write_all(toml_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let config = load_config(Some(temp_file.path().to_str().unwrap())).unwrap();
    assert_eq!(config.versions.majors(), vec!["39", "311"]);

    let line = config.versions.get("311").unwrap().resolve("311").unwrap();
    assert_eq!(line.new_core_version(), "3.11.5");
    assert_eq!(line.new_lae_version(), "20.1.1");
}

#[test]
fn test_missing_custom_file_is_config_error() {
    let err = load_config(Some("/nonexistent/lae-automator.toml")).unwrap_err();
    assert!(err.to_string().starts_with("Configuration error"));
}

#[test]
fn test_malformed_file_is_rejected() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"[versions.39\nold = ").unwrap();
    temp_file.flush().unwrap();

    assert!(load_config(Some(temp_file.path().to_str().unwrap())).is_err());
}

#[test]
#[serial]
fn test_local_file_is_found_in_working_directory() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join(LOCAL_CONFIG_FILE),
        "[versions.\"39\"]\nold_core_version = \"3.9.2\"\nold_lae_version = \"19.0.2\"\n",
    )
    .unwrap();

    let original_dir = env::current_dir().unwrap();
    env::set_current_dir(temp_dir.path()).unwrap();
    let result = load_config(None);
    env::set_current_dir(original_dir).unwrap();

    let config = result.unwrap();
    assert_eq!(config.versions.majors(), vec!["39"]);
}
