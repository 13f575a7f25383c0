use assert_matches::assert_matches;
use camino::Utf8PathBuf;

use team_seqreport::config::{Config, ConfigLoader, ConfigOverrides, DEFAULT_CONTACT_EMAIL};
use team_seqreport::error::ConfigError;

#[test]
fn resolve_reads_json_file() {
    let temp = tempfile::tempdir().unwrap();
    let path = Utf8PathBuf::from_path_buf(temp.path().join("team-report.json")).unwrap();
    std::fs::write(
        path.as_std_path(),
        r#"{"contact_email": "lab@example.org", "preview_len": 30, "base_url": "http://localhost:8080/"}"#,
    )
    .unwrap();

    let resolved = ConfigLoader::resolve(Some(path.as_path()), ConfigOverrides::default()).unwrap();
    assert_eq!(resolved.contact_email, "lab@example.org");
    assert_eq!(resolved.preview_len, 30);
    assert_eq!(resolved.base_url, "http://localhost:8080");
}

#[test]
fn explicit_missing_file_is_error() {
    let temp = tempfile::tempdir().unwrap();
    let path = Utf8PathBuf::from_path_buf(temp.path().join("nope.json")).unwrap();
    let err = ConfigLoader::resolve(Some(path.as_path()), ConfigOverrides::default()).unwrap_err();
    assert_matches!(err, ConfigError::Read(_));
}

#[test]
fn malformed_json_is_error() {
    let temp = tempfile::tempdir().unwrap();
    let path = Utf8PathBuf::from_path_buf(temp.path().join("bad.json")).unwrap();
    std::fs::write(path.as_std_path(), "{ not json").unwrap();
    let err = ConfigLoader::resolve(Some(path.as_path()), ConfigOverrides::default()).unwrap_err();
    assert_matches!(err, ConfigError::Parse(_));
}

#[test]
fn zero_preview_is_rejected() {
    let overrides = ConfigOverrides {
        contact_email: None,
        preview_len: Some(0),
    };
    let err = ConfigLoader::resolve_config(Config::default(), overrides, None).unwrap_err();
    assert_matches!(err, ConfigError::Invalid(_));
}

#[test]
fn blank_email_is_rejected() {
    let overrides = ConfigOverrides {
        contact_email: Some("   ".to_string()),
        preview_len: None,
    };
    let err = ConfigLoader::resolve_config(Config::default(), overrides, None).unwrap_err();
    assert_matches!(err, ConfigError::Invalid(_));
}

#[test]
fn env_api_key_fills_gap() {
    let resolved = ConfigLoader::resolve_config(
        Config::default(),
        ConfigOverrides::default(),
        Some(" abc123 ".to_string()),
    )
    .unwrap();
    assert_eq!(resolved.api_key.as_deref(), Some("abc123"));
    assert_eq!(resolved.contact_email, DEFAULT_CONTACT_EMAIL);
}
