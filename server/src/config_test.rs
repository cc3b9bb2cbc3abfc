use std::sync::{Mutex, MutexGuard};

use super::*;

static ENV_LOCK: Mutex<()> = Mutex::new(());

fn env_guard() -> MutexGuard<'static, ()> {
    ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
}

/// # Safety
/// Callers must hold [`env_guard`].
unsafe fn clear_server_env() {
    unsafe {
        std::env::remove_var("PORT");
        std::env::remove_var("GENERATOR_BASE_URL");
        std::env::remove_var("GENERATOR_REQUEST_TIMEOUT_SECS");
        std::env::remove_var("GENERATOR_CONNECT_TIMEOUT_SECS");
    }
}

#[test]
fn from_env_uses_defaults() {
    let _guard = env_guard();
    unsafe { clear_server_env() };

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.generator_base_url, None);
    assert_eq!(
        cfg.timeouts,
        GeneratorTimeouts {
            request_secs: DEFAULT_GENERATOR_REQUEST_TIMEOUT_SECS,
            connect_secs: DEFAULT_GENERATOR_CONNECT_TIMEOUT_SECS,
        }
    );
}

#[test]
fn from_env_parses_overrides() {
    let _guard = env_guard();
    unsafe {
        clear_server_env();
        std::env::set_var("PORT", "8080");
        std::env::set_var("GENERATOR_BASE_URL", " https://gen.example.test/ ");
        std::env::set_var("GENERATOR_REQUEST_TIMEOUT_SECS", "42");
        std::env::set_var("GENERATOR_CONNECT_TIMEOUT_SECS", "7");
    }

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.generator_base_url.as_deref(), Some("https://gen.example.test"));
    assert_eq!(cfg.timeouts, GeneratorTimeouts { request_secs: 42, connect_secs: 7 });
    assert_eq!(cfg.timeouts.request(), Duration::from_secs(42));

    unsafe { clear_server_env() };
}

#[test]
fn from_env_rejects_bad_port() {
    let _guard = env_guard();
    unsafe {
        clear_server_env();
        std::env::set_var("PORT", "not-a-port");
    }

    let err = ServerConfig::from_env().unwrap_err();
    assert_eq!(err, ConfigError::Invalid { var: "PORT", value: "not-a-port".into() });

    unsafe { clear_server_env() };
}

#[test]
fn blank_base_url_disables_generator_and_bad_timeouts_fall_back() {
    let _guard = env_guard();
    unsafe {
        clear_server_env();
        std::env::set_var("GENERATOR_BASE_URL", "   ");
        std::env::set_var("GENERATOR_REQUEST_TIMEOUT_SECS", "soon");
    }

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.generator_base_url, None);
    assert_eq!(cfg.timeouts.request_secs, DEFAULT_GENERATOR_REQUEST_TIMEOUT_SECS);

    unsafe { clear_server_env() };
}
