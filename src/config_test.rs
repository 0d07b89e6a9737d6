use super::*;
use std::collections::HashMap;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn empty_environment_gives_defaults() {
    let cfg = AppConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(cfg, AppConfig::default());
    assert_eq!(cfg.port, 3000);
    assert_eq!(cfg.bind_addr.to_string(), "0.0.0.0");
    assert!(!cfg.cookie_secure);
    assert_eq!(cfg.session_idle_ttl, Duration::from_secs(3600));
    assert_eq!(cfg.session_sweep_interval, Duration::from_secs(60));
}

#[test]
fn overrides_are_parsed() {
    let cfg = AppConfig::from_lookup(lookup_from(&[
        ("BIND_ADDR", "127.0.0.1"),
        ("PORT", " 8080 "),
        ("COOKIE_SECURE", "Yes"),
        ("SESSION_IDLE_TTL_SECS", "90"),
        ("SESSION_SWEEP_INTERVAL_SECS", "5"),
    ]))
    .unwrap();
    assert_eq!(cfg.bind_addr.to_string(), "127.0.0.1");
    assert_eq!(cfg.port, 8080);
    assert!(cfg.cookie_secure);
    assert_eq!(cfg.session_idle_ttl, Duration::from_secs(90));
    assert_eq!(cfg.session_sweep_interval, Duration::from_secs(5));
}

#[test]
fn invalid_port_is_an_error() {
    let err = AppConfig::from_lookup(lookup_from(&[("PORT", "eighty")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidValue { key: "PORT", value: "eighty".into() });
}

#[test]
fn invalid_cookie_flag_is_an_error() {
    let err = AppConfig::from_lookup(lookup_from(&[("COOKIE_SECURE", "maybe")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidValue { key: "COOKIE_SECURE", value: "maybe".into() });
}

#[test]
fn zero_sweep_interval_is_rejected() {
    let err = AppConfig::from_lookup(lookup_from(&[("SESSION_SWEEP_INTERVAL_SECS", "0")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { key: "SESSION_SWEEP_INTERVAL_SECS", .. }));
}

#[test]
fn parse_bool_variants() {
    for raw in ["1", "true", "YES", " on "] {
        assert_eq!(parse_bool(raw), Some(true), "expected true for {raw:?}");
    }
    for raw in ["0", "False", "no", "OFF"] {
        assert_eq!(parse_bool(raw), Some(false), "expected false for {raw:?}");
    }
    assert_eq!(parse_bool("2"), None);
}
