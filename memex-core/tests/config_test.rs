use memex_core::config::*;
use memex_core::errors::ConfigError;
use memex_core::MemexError;

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = MemexConfig::from_toml("").unwrap();

    // Retrieval defaults
    assert_eq!(config.retrieval.default_limit, 20);
    assert_eq!(config.retrieval.max_limit, 100);

    // Traversal defaults
    assert_eq!(config.traversal.default_depth, 1);
    assert_eq!(config.traversal.max_results, 100);
    assert!(!config.expansion.enabled);

    // Feedback defaults
    assert!(config.feedback.enabled);
    assert!(config.feedback.batch_load);

    // Cross-encoder defaults
    assert!(!config.cross_encoder.enabled);
    assert_eq!(config.cross_encoder.top_k, 15);
    assert_eq!(config.cross_encoder.alpha, 0.6);
    assert_eq!(config.cross_encoder.temperature, 0.1);
    assert_eq!(config.cross_encoder.timeout_ms, 30_000);
    assert_eq!(config.cross_encoder.concurrency, 5);

    // LLM defaults
    assert_eq!(config.llm.api_key_env, "MEMEX_LLM_API_KEY");
    assert!(config.llm.reasoning_effort.is_none());

    // Observability defaults
    assert_eq!(config.observability.log_level, "info");
}

#[test]
fn config_loads_partial_toml_with_overrides() {
    let toml = r#"
[cross_encoder]
enabled = true
top_k = 8
alpha = 0.75

[llm]
base_url = "https://llm.internal/v1"
reasoning_effort = "low"
"#;
    let config = MemexConfig::from_toml(toml).unwrap();
    assert!(config.cross_encoder.enabled);
    assert_eq!(config.cross_encoder.top_k, 8);
    assert_eq!(config.cross_encoder.alpha, 0.75);
    // Non-overridden fields keep defaults
    assert_eq!(config.cross_encoder.concurrency, 5);
    assert_eq!(config.llm.base_url, "https://llm.internal/v1");
    assert_eq!(config.llm.reasoning_effort.as_deref(), Some("low"));
}

#[test]
fn config_rejects_alpha_out_of_range() {
    let err = MemexConfig::from_toml("[cross_encoder]\nalpha = 1.5\n").unwrap_err();
    assert!(matches!(err, MemexError::Config(ConfigError::Invalid { .. })));
    assert!(err.to_string().contains("cross_encoder.alpha"));
}

#[test]
fn config_rejects_zero_concurrency() {
    let err = MemexConfig::from_toml("[cross_encoder]\nconcurrency = 0\n").unwrap_err();
    assert!(err.is_fatal());
}

#[test]
fn config_rejects_default_limit_above_max() {
    let toml = "[retrieval]\ndefault_limit = 50\nmax_limit = 10\n";
    assert!(MemexConfig::from_toml(toml).is_err());
}

#[test]
fn config_rejects_zero_traversal_max_results() {
    let err = MemexConfig::from_toml("[traversal]\nmax_results = 0\n").unwrap_err();
    assert!(err.to_string().contains("traversal.max_results"));
}

#[test]
fn config_reports_malformed_toml_as_parse_error() {
    let err = MemexConfig::from_toml("[cross_encoder\n").unwrap_err();
    assert!(matches!(err, MemexError::Config(ConfigError::Parse { .. })));
}

#[test]
fn config_from_missing_file_is_io_error() {
    let err = MemexConfig::from_file("/definitely/not/here/memex.toml").unwrap_err();
    assert!(matches!(err, MemexError::Config(ConfigError::Io { .. })));
}
