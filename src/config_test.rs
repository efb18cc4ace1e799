use super::*;

/// # Safety
/// Only `from_env_reads_overrides_and_defaults` touches these variables.
unsafe fn clear_portal_env() {
    unsafe {
        std::env::remove_var("PORT");
        std::env::remove_var("PORTAL_API_ORIGIN");
        std::env::remove_var("PORTAL_BACKEND_ORIGIN");
        std::env::remove_var("COOKIE_SECURE");
    }
}

#[test]
fn from_env_reads_overrides_and_defaults() {
    unsafe { clear_portal_env() };
    assert_eq!(PortalConfig::from_env().unwrap(), PortalConfig::default());
    assert_eq!(PortalConfig::default().api_origin, "http://localhost:3000");

    unsafe { std::env::set_var("PORT", "8080") };
    let cfg = PortalConfig::from_env().unwrap();
    assert_eq!(cfg.api_origin, "http://localhost:8080");

    unsafe {
        std::env::set_var("PORT", "8080");
        std::env::set_var("PORTAL_API_ORIGIN", "http://127.0.0.1:8080/");
        std::env::set_var("PORTAL_BACKEND_ORIGIN", "https://backend.test");
        std::env::set_var("COOKIE_SECURE", "yes");
    }
    let cfg = PortalConfig::from_env().unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.api_origin, "http://127.0.0.1:8080");
    assert_eq!(cfg.backend_origin, "https://backend.test");
    assert!(cfg.cookie_secure);

    unsafe { std::env::set_var("PORT", "not-a-port") };
    assert_eq!(
        PortalConfig::from_env(),
        Err(ConfigError::Invalid { key: "PORT", value: "not-a-port".into() })
    );

    unsafe { clear_portal_env() };
}

#[test]
fn parse_bool_accepts_common_spellings() {
    for raw in ["1", "true", "YES", " on "] {
        assert_eq!(parse_bool(raw), Some(true), "expected true for {raw:?}");
    }
    for raw in ["0", "False", "no", "off"] {
        assert_eq!(parse_bool(raw), Some(false), "expected false for {raw:?}");
    }
    assert_eq!(parse_bool("maybe"), None);
    assert_eq!(parse_bool(""), None);
}

#[test]
fn parse_origin_defaults_when_unset() {
    assert_eq!(parse_origin("K", None, DEFAULT_BACKEND_ORIGIN).unwrap(), "http://localhost:4000");
}

#[test]
fn parse_origin_trims_trailing_slashes() {
    assert_eq!(
        parse_origin("K", Some("http://localhost:4000//".into()), DEFAULT_BACKEND_ORIGIN).unwrap(),
        "http://localhost:4000"
    );
}

#[test]
fn parse_origin_rejects_missing_scheme() {
    let err = parse_origin("PORTAL_API_ORIGIN", Some("localhost:3000".into()), "http://localhost:3000").unwrap_err();
    assert_eq!(err, ConfigError::Invalid { key: "PORTAL_API_ORIGIN", value: "localhost:3000".into() });
}
