mod common;

use std::io::Write;

use common::*;
use elab_scope::{ConfigError, Environment, OptionValue, ScopeError, Session, SessionConfig};

const CONFIG: &str = r#"
auto_open = ["Nat", "List"]

[options]
"pp.all" = true
maxRecDepth = 512
"trace.profiler.output" = "out.json"
"#;

#[test]
fn parses_options_and_auto_open() {
    let config = SessionConfig::from_toml_str(CONFIG).expect("valid config");
    assert_eq!(config.auto_open, ["Nat", "List"]);
    assert_eq!(config.options.get("pp.all"), Some(&OptionValue::Bool(true)));
    assert_eq!(config.options.get("maxRecDepth"), Some(&OptionValue::Nat(512)));
    assert_eq!(
        config.options.get("trace.profiler.output"),
        Some(&OptionValue::Str("out.json".to_string()))
    );
}

#[test]
fn empty_config_is_default() {
    let config = SessionConfig::from_toml_str("").expect("empty config");
    assert_eq!(config, SessionConfig::default());
}

#[test]
fn session_starts_with_config_applied() {
    init_logging();
    let config = SessionConfig::from_toml_str(CONFIG).expect("valid config");
    let env = Environment::with_decls(["Nat.succ", "List.cons"]);
    let session = Session::with_config(env, &config).expect("namespaces exist");

    assert_eq!(resolve(&session, "succ"), Ok(name("Nat.succ")));
    assert_eq!(resolve(&session, "cons"), Ok(name("List.cons")));
    assert_eq!(
        session.scopes().top().option("maxRecDepth"),
        Some(&OptionValue::Nat(512))
    );
}

#[test]
fn auto_open_of_a_missing_namespace_fails() {
    let config = SessionConfig {
        auto_open: vec!["Missing".to_string()],
        ..SessionConfig::default()
    };
    let err = Session::with_config(Environment::new(), &config).unwrap_err();
    assert!(matches!(err, ScopeError::UnknownNamespace { .. }));
}

#[test]
fn loads_from_a_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(CONFIG.as_bytes()).expect("write config");
    let config = SessionConfig::from_path(file.path()).expect("readable config");
    assert_eq!(config.auto_open.len(), 2);
}

#[test]
fn reports_unreadable_and_malformed_files() {
    let dir = tempfile::tempdir().expect("temp dir");
    let missing = dir.path().join("session.toml");
    assert!(matches!(
        SessionConfig::from_path(&missing),
        Err(ConfigError::Read { .. })
    ));

    assert!(matches!(
        SessionConfig::from_toml_str("auto_open = 3"),
        Err(ConfigError::Parse(_))
    ));
}
