use super::Config;

use std::fs;

#[test]
fn yaml_config_fills_missing_sections_with_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("conf.yaml");
    fs::write(
        &path,
        "system_config:\n  port: 8080\nclient_config:\n  server_url: http://translator.test\n",
    )
    .expect("write config");

    let config = Config::load(path.to_str().expect("utf8 path")).expect("load");
    assert_eq!(config.system_config.port, 8080);
    assert_eq!(config.system_config.static_dir, "static");
    assert_eq!(config.client_config.server_url, "http://translator.test");
    assert_eq!(config.client_config.success_notice_ms, 3000);
    assert_eq!(config.client_config.error_notice_ms, 4000);
    assert_eq!(config.translate_config.target_lang, "kn");
    assert_eq!(config.tts_config.max_chunk_chars, 100);
}

#[tokio::test]
async fn jsonld_config_ignores_context_and_substitutes_env_vars() {
    std::env::set_var("KANNADA_TRANSLATOR_TEST_PORT_HOST", "127.0.0.1");
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("conf.jsonld");
    fs::write(
        &path,
        r#"{
            "@context": {"@vocab": "https://example.org/config#"},
            "system_config": {"host": "${KANNADA_TRANSLATOR_TEST_PORT_HOST}", "port": 6001},
            "translate_config": {"source_lang": "en", "target_lang": "kn"}
        }"#,
    )
    .expect("write config");

    let config = Config::load(path.to_str().expect("utf8 path")).expect("load");
    assert!(config.context.is_some());
    assert_eq!(config.system_config.host, "127.0.0.1");
    assert_eq!(
        config.system_config.bind_addr().await.expect("bind addr"),
        "127.0.0.1:6001".parse().expect("addr")
    );
}

#[tokio::test]
async fn host_names_resolve_instead_of_binding_everywhere() {
    let system = crate::config_manager::SystemConfig {
        host: "localhost".to_string(),
        port: 6002,
        ..Default::default()
    };
    let addr = system.bind_addr().await.expect("resolve localhost");
    assert!(addr.ip().is_loopback());
    assert!(!addr.ip().is_unspecified());
    assert_eq!(addr.port(), 6002);
}

#[tokio::test]
async fn unresolvable_host_is_an_error() {
    let system = crate::config_manager::SystemConfig {
        host: "not a host name".to_string(),
        ..Default::default()
    };
    assert!(system.bind_addr().await.is_err());
}

#[test]
fn unknown_env_vars_are_left_verbatim() {
    let out = crate::config_manager::utils::substitute_env_vars(
        "url: ${KANNADA_TRANSLATOR_SURELY_UNSET_VAR}",
    )
    .expect("substitute");
    assert_eq!(out, "url: ${KANNADA_TRANSLATOR_SURELY_UNSET_VAR}");
}

#[test]
fn missing_explicit_config_is_an_error() {
    let err = Config::discover(Some("/definitely/not/here/conf.yaml")).expect_err("should fail");
    assert!(err.to_string().contains("not found"));
}

#[test]
fn defaults_use_fixed_speech_parameters() {
    let config = Config::default();
    assert_eq!(config.client_config.speech_rate, 0.9);
    assert_eq!(config.client_config.speech_pitch, 1.0);
    assert_eq!(config.client_config.speech_volume, 1.0);
    assert!(config.client_config.request_timeout().is_none());
}
