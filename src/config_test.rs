use super::*;

/// # Safety
/// Tests must run with `--test-threads=1` to avoid env races.
unsafe fn clear_server_env() {
    unsafe {
        std::env::remove_var("PORT");
        std::env::remove_var("BIND_HOST");
    }
}

#[test]
fn from_env_uses_defaults_then_overrides() {
    unsafe { clear_server_env() };

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.bind_host, DEFAULT_BIND_HOST);
    assert_eq!(cfg.addr(), "0.0.0.0:3000");

    unsafe {
        std::env::set_var("PORT", "8080");
        std::env::set_var("BIND_HOST", "127.0.0.1");
    }

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg, ServerConfig { bind_host: "127.0.0.1".into(), port: 8080 });
    assert_eq!(cfg.addr(), "127.0.0.1:8080");

    unsafe { clear_server_env() };
}

#[test]
fn parse_port_rejects_garbage_and_zero() {
    assert_eq!(parse_port(Some("abc")), Err(ConfigError::InvalidPort("abc".into())));
    assert_eq!(parse_port(Some("0")), Err(ConfigError::InvalidPort("0".into())));
    assert_eq!(parse_port(Some("70000")), Err(ConfigError::InvalidPort("70000".into())));
    assert_eq!(parse_port(Some(" 4000 ")), Ok(4000));
    assert_eq!(parse_port(None), Ok(DEFAULT_PORT));
}

#[test]
fn parse_bind_host_rejects_blank() {
    assert_eq!(parse_bind_host(Some("   ")), Err(ConfigError::EmptyBindHost));
    assert_eq!(parse_bind_host(Some("localhost")), Ok("localhost".to_owned()));
    assert_eq!(parse_bind_host(None), Ok(DEFAULT_BIND_HOST.to_owned()));
}
