use clap::Parser;
use log_scanner::cli::Cli;
use log_scanner::config::{
    APP_DIR_NAME, ConfigError, ScanConfig, ScanProfile, default_log_directory, load_config,
    load_config_from_path, resolve_directory,
};
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

fn cli(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("log-scanner").chain(args.iter().copied()))
        .expect("valid args")
}

#[test]
fn test_resolve_directory_prefers_override() {
    let dir = PathBuf::from("/srv/game/logs");
    assert_eq!(resolve_directory(Some(dir.clone())), dir);
}

#[test]
fn test_resolve_directory_falls_back_to_platform_default() {
    let dir = resolve_directory(None);
    assert_eq!(dir, default_log_directory());
    assert!(dir.ends_with(APP_DIR_NAME));
}

#[test]
fn test_load_config_without_path_is_empty_profile() {
    let profile = load_config(None).expect("no file needed");
    let config = ScanConfig::resolve(&cli(&[]), &profile);
    assert_eq!(config, ScanConfig::default());
}

#[test]
fn test_profile_values_fill_unset_flags() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("scan.toml");
    fs::write(
        &path,
        r#"
[scan]
lvl = "error"
dir = "/var/log/vcmi"
file = "client_log.txt"
filter = ""
"#,
    )
    .expect("write profile");

    let profile = load_config_from_path(&path).expect("profile should parse");
    let config = ScanConfig::resolve(&cli(&[]), &profile);

    assert_eq!(config.level, "error");
    assert_eq!(config.directory, PathBuf::from("/var/log/vcmi"));
    assert_eq!(config.filename, "client_log.txt");
    assert_eq!(config.text, None);
    assert_eq!(config.filter.as_deref(), Some(""));
}

#[test]
fn test_flags_override_profile() {
    let profile: ScanProfile = toml::from_str(
        r#"
[scan]
lvl = "error"
text = "hero"
filter = "AI"
"#,
    )
    .expect("profile should parse");

    let config = ScanConfig::resolve(
        &cli(&["--lvl", "debug", "--filter", "", "--dir", "/tmp"]),
        &profile,
    );

    assert_eq!(config.level, "debug");
    assert_eq!(config.text.as_deref(), Some("hero"));
    assert_eq!(config.filter.as_deref(), Some(""));
    assert_eq!(config.directory, PathBuf::from("/tmp"));
    assert_eq!(config.filename, "server_log.txt");
}

#[test]
fn test_missing_profile_is_read_error() {
    let dir = tempdir().expect("temp dir");
    let err = load_config_from_path(&dir.path().join("missing.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }));
}

#[test]
fn test_malformed_profile_is_parse_error() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("bad.toml");
    fs::write(&path, "[scan]\nlvl = \n").expect("write profile");

    let err = load_config_from_path(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains("bad.toml"));
}
