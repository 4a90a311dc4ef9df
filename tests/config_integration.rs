use ilmai::chat::{DEFAULT_GREETING, Mode};
use ilmai::config::AppConfig;
use ilmai::ui::Theme;
use serial_test::serial;
use std::env;
use std::fs;
use std::io::Write;

// Helper to clear environment variables that might interfere with tests
fn clear_env_vars() {
    unsafe {
        env::remove_var("ILMAI_SERVER__PORT");
        env::remove_var("ILMAI_UI__DEFAULT_MODE");
        env::remove_var("ILMAI_REPLY__BASE_URL");
        env::remove_var("CONFIG_FILE");
        env::remove_var("HOST");
        env::remove_var("PORT");
        env::remove_var("REPLY_URL");
    }
}

fn load(args: &[&str]) -> Result<AppConfig, config::ConfigError> {
    AppConfig::load_from_args(std::iter::once("ilmai").chain(args.iter().copied()))
}

fn temp_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".yaml")
        .tempfile()
        .expect("Failed to create temp config");
    file.write_all(contents.as_bytes())
        .expect("Failed to write temp config");
    file
}

#[test]
#[serial]
fn test_default_config() {
    clear_env_vars();

    let config = load(&[]).expect("Failed to load config");
    assert_eq!(config.server.port, 3000);
    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.static_dir, "static");
    assert_eq!(config.reply.base_url, "http://127.0.0.1:5000");
    assert_eq!(config.ui.default_mode, Mode::Pro);
    assert_eq!(config.ui.default_theme, Theme::Dark);
    assert_eq!(config.ui.greeting.as_deref(), Some(DEFAULT_GREETING));
    assert_eq!(config.ui.session_timeout().as_secs(), 1800);
}

#[test]
#[serial]
fn test_env_override() {
    clear_env_vars();
    unsafe {
        env::set_var("ILMAI_SERVER__PORT", "9090");
        env::set_var("ILMAI_UI__DEFAULT_MODE", "scholar");
    }

    let config = load(&[]).expect("Failed to load config");
    assert_eq!(config.server.port, 9090);
    assert_eq!(config.ui.default_mode, Mode::Scholar);

    clear_env_vars();
}

#[test]
#[serial]
fn test_file_load() {
    clear_env_vars();

    let file = temp_config(
        r#"
server:
  port: 7070
ui:
  default_mode: "IlmAI Fast"
  default_theme: light
  greeting: ""
    "#,
    );

    // Tell AppConfig to use this file via Env Var
    unsafe {
        env::set_var("CONFIG_FILE", file.path());
    }

    let config = load(&[]).expect("Failed to load config from file");
    assert_eq!(config.server.port, 7070);
    assert_eq!(config.ui.default_mode, Mode::Fast);
    assert_eq!(config.ui.default_theme, Theme::Light);
    assert_eq!(config.ui.session_defaults().greeting, None);

    clear_env_vars();
}

#[test]
#[serial]
fn test_missing_explicit_file_is_an_error() {
    clear_env_vars();

    assert!(load(&["--config", "does-not-exist.yaml"]).is_err());
}

#[test]
#[serial]
fn test_cli_overrides_env_and_file() {
    clear_env_vars();

    let file = temp_config("server:\n  port: 7070\n");
    unsafe {
        env::set_var("ILMAI_SERVER__PORT", "9090");
    }

    let path = file.path().to_string_lossy().into_owned();
    let config = load(&[
        "--config",
        &path,
        "--port",
        "4000",
        "--host",
        "0.0.0.0",
        "--reply-url",
        "http://reply.internal:8080",
    ])
    .expect("Failed to load config");

    assert_eq!(config.server.port, 4000);
    assert_eq!(config.server.bind_address(), "0.0.0.0:4000");
    assert_eq!(config.reply.base_url, "http://reply.internal:8080");

    clear_env_vars();
}

#[test]
#[serial]
fn test_invalid_values_are_rejected() {
    clear_env_vars();

    unsafe {
        env::set_var("ILMAI_UI__DEFAULT_MODE", "Imam Mode");
    }
    assert!(load(&[]).is_err());
    clear_env_vars();

    assert!(load(&["--reply-url", "not a url"]).is_err());
}

#[test]
#[serial]
fn test_cwd_config_fallback() {
    clear_env_vars();

    // Create ./config.yaml
    let cwd_path = "config.yaml";
    fs::write(cwd_path, "server:\n  port: 6060\n").expect("Failed to write ./config.yaml");

    // No env var, no CLI: ./config.yaml is picked up
    let config = load(&[]);

    fs::remove_file(cwd_path).unwrap();

    assert_eq!(config.expect("Failed to load config").server.port, 6060);
}
