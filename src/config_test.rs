use std::collections::HashMap;

use super::*;

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = vars.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_when_unset() {
    let cfg = HostConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg, HostConfig { port: DEFAULT_PORT, api_base_url: DEFAULT_API_BASE_URL.to_owned() });
}

#[test]
fn parses_port_and_trims_base_url() {
    let cfg =
        HostConfig::from_lookup(lookup(&[("PORT", "8081"), ("ADMIN_API_BASE_URL", " https://api.example.test/ ")]))
            .unwrap();
    assert_eq!(cfg.port, 8081);
    assert_eq!(cfg.api_base_url, "https://api.example.test");
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let cfg = HostConfig::from_lookup(lookup(&[("PORT", "  "), ("ADMIN_API_BASE_URL", "/")])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.api_base_url, DEFAULT_API_BASE_URL);
}

#[test]
fn invalid_port_errors() {
    let err = HostConfig::from_lookup(lookup(&[("PORT", "70000")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPort(ref raw) if raw == "70000"));
    assert_eq!(err.to_string(), "invalid PORT '70000'");
}

#[test]
fn from_env_reads_process_environment() {
    // Sole env-mutating test in this crate.
    unsafe {
        std::env::set_var("PORT", "4100");
        std::env::set_var("ADMIN_API_BASE_URL", "http://backend.internal:9000/");
    }
    let cfg = HostConfig::from_env().unwrap();
    unsafe {
        std::env::remove_var("PORT");
        std::env::remove_var("ADMIN_API_BASE_URL");
    }
    assert_eq!(cfg.port, 4100);
    assert_eq!(cfg.api_base_url, "http://backend.internal:9000");
}
