//! Tests for SearchForge configuration.

use super::*;

#[test]
fn test_toml_parsing() {
    let toml = r#"
        environment_mode = "reproducible"
        random_seed = 42

        [search]
        trivial_path = "empty"
        expansion_limit = 10000

        [local_search]
        step_count_limit = 250

        [rrt]
        max_iterations = 80
    "#;

    let config = SearchForgeConfig::from_toml_str(toml).unwrap();
    assert_eq!(config.environment_mode, EnvironmentMode::Reproducible);
    assert_eq!(config.random_seed, Some(42));
    assert_eq!(config.search.trivial_path, TrivialPathPolicy::Empty);
    assert_eq!(config.search.expansion_limit, Some(10000));
    assert_eq!(config.local_search.step_count_limit, 250);
    assert_eq!(config.rrt.max_iterations, 80);
    assert!(config.validate().is_ok());
}

#[test]
fn test_yaml_parsing() {
    let yaml = r#"
        environment_mode: reproducible
        random_seed: 42
        search:
          trivial_path: single_state
        local_search:
          step_count_limit: 300
    "#;

    let config = SearchForgeConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(config.environment_mode, EnvironmentMode::Reproducible);
    assert_eq!(config.random_seed, Some(42));
    assert_eq!(config.search.trivial_path, TrivialPathPolicy::SingleState);
    assert_eq!(config.local_search.step_count_limit, 300);
}

#[test]
fn test_empty_toml_uses_defaults() {
    let config = SearchForgeConfig::from_toml_str("").unwrap();
    assert_eq!(config, SearchForgeConfig::default());
    assert_eq!(config.local_search.step_count_limit, DEFAULT_STEP_COUNT_LIMIT);
    assert_eq!(config.rrt.max_iterations, DEFAULT_RRT_MAX_ITERATIONS);
    assert_eq!(config.search.trivial_path, TrivialPathPolicy::SingleState);
    assert_eq!(config.search.expansion_limit, None);
}

#[test]
fn test_builder() {
    let config = SearchForgeConfig::new()
        .with_random_seed(123)
        .with_step_count_limit(50)
        .with_trivial_path(TrivialPathPolicy::Empty)
        .with_expansion_limit(99)
        .with_rrt_max_iterations(10);

    assert_eq!(config.random_seed, Some(123));
    assert_eq!(config.local_search.step_count_limit, 50);
    assert_eq!(config.search.trivial_path, TrivialPathPolicy::Empty);
    assert_eq!(config.search.expansion_limit, Some(99));
    assert_eq!(config.rrt.max_iterations, 10);
}

#[test]
fn test_validate_rejects_zero_limits() {
    let config = SearchForgeConfig::new().with_step_count_limit(0);
    assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

    let config = SearchForgeConfig::new().with_expansion_limit(0);
    assert!(config.validate().is_err());

    let config = SearchForgeConfig::new().with_rrt_max_iterations(0);
    assert!(config.validate().is_err());
}

#[test]
fn test_reproducible_requires_seed() {
    let config = SearchForgeConfig::new().with_environment_mode(EnvironmentMode::Reproducible);
    assert!(config.validate().is_err());
    assert!(config.with_random_seed(1).validate().is_ok());
}

#[test]
fn test_unknown_policy_is_rejected() {
    let toml = r#"
        [search]
        trivial_path = "sometimes"
    "#;
    assert!(matches!(
        SearchForgeConfig::from_toml_str(toml),
        Err(ConfigError::Toml(_))
    ));
}

#[test]
fn test_missing_file_is_io_error() {
    let result = SearchForgeConfig::load("/definitely/not/here/searchforge.toml");
    assert!(matches!(result, Err(ConfigError::Io(_))));
}

#[test]
fn test_config_error_converts() {
    let err: SearchForgeError = ConfigError::Invalid("bad".to_string()).into();
    assert!(matches!(err, SearchForgeError::Config(_)));
}
