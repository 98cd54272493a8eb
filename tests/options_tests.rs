use std::collections::HashMap;
use std::time::Duration;

use fonparam_mcp::client::{ApiError, FonParamClient};
use fonparam_mcp::config::{Config, ConfigError, BASE_URL_VAR, PROXY_VAR, TIMEOUT_VAR};
use fonparam_mcp::options::{ClientOptions, DEFAULT_BASE_URL};

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key: &str| vars.get(key).cloned()
}

#[test]
fn test_client_options_builder() {
    let options = ClientOptions::new()
        .with_base_url("http://localhost:8080")
        .with_timeout(Duration::from_secs(5))
        .with_proxy("http://proxy.example.com".to_string());

    assert_eq!(options.base_url, "http://localhost:8080");
    assert_eq!(options.timeout, Duration::from_secs(5));
    assert_eq!(options.proxy, Some("http://proxy.example.com".to_string()));
}

#[test]
fn test_client_options_defaults() {
    let options = ClientOptions::default();

    assert_eq!(options.base_url, DEFAULT_BASE_URL);
    assert_eq!(options.timeout, Duration::from_secs(30));
    assert_eq!(options.proxy, None);
}

#[test]
fn test_config_defaults_without_environment() {
    let config = Config::from_lookup(lookup(&[])).unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.base_url, "https://api.fonparam.com");
    assert_eq!(config.proxy, None);
}

#[test]
fn test_config_overrides() {
    let config = Config::from_lookup(lookup(&[
        (BASE_URL_VAR, "http://localhost:3000/"),
        (TIMEOUT_VAR, "10"),
    ]))
    .unwrap();

    assert_eq!(config.base_url, "http://localhost:3000");
    assert_eq!(config.timeout, Duration::from_secs(10));

    let options = config.client_options();
    assert_eq!(options.base_url, "http://localhost:3000");
    assert_eq!(options.timeout, Duration::from_secs(10));
}

#[test]
fn test_config_rejects_bad_timeout() {
    for value in ["0", "soon", "-5"] {
        let err = Config::from_lookup(lookup(&[(TIMEOUT_VAR, value)])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidTimeout { .. }), "{value}");
    }
}

#[test]
fn test_config_proxy_reaches_client_options() {
    let config = Config::from_lookup(lookup(&[(PROXY_VAR, " http://127.0.0.1:3128 ")])).unwrap();
    assert_eq!(config.proxy.as_deref(), Some("http://127.0.0.1:3128"));

    let options = config.client_options();
    assert_eq!(options.proxy.as_deref(), Some("http://127.0.0.1:3128"));
    assert!(FonParamClient::new(options).is_ok());

    let blank = Config::from_lookup(lookup(&[(PROXY_VAR, "  ")])).unwrap();
    assert_eq!(blank.client_options().proxy, None);
}

#[test]
fn test_invalid_proxy_fails_client_construction() {
    let options = ClientOptions::new().with_proxy("not a proxy url".to_string());
    let err = FonParamClient::new(options).unwrap_err();
    assert!(matches!(err, ApiError::Request(_)));
}
