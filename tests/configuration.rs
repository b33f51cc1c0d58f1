//! Tests for configuration system

use alimento::config::Config;

#[test]
fn test_config_loads_defaults() {
    // Test that default config can be loaded
    let config = Config::load(None).expect("Failed to load config");

    // Verify default values
    assert_eq!(config.storage.dir, ".alimento");
    assert_eq!(config.observability.log_level, "info");
}

#[test]
fn test_default_config_validates() {
    let config = Config::load(None).expect("Failed to load config");

    config.validate().expect("default config is valid");
}
