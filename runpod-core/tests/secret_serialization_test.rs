//! Test that SecretString serialization preserves values for persistence

use runpod_core::config::SecretString;
use runpod_core::RunPodConfig;

#[test]
fn test_config_json_roundtrip_keeps_key() {
    let config = RunPodConfig::new("abc123xyz", "rp_secret_key_123");

    let json = serde_json::to_string(&config).unwrap();
    assert!(json.contains("rp_secret_key_123"));
    assert!(!json.contains("[REDACTED]"));

    let deserialized: RunPodConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(deserialized, config);
    assert_eq!(deserialized.api_key.expose_secret(), "rp_secret_key_123");

    // Debug output is still redacted
    let debug_output = format!("{:?}", deserialized);
    assert!(!debug_output.contains("rp_secret_key_123"));
}

#[test]
fn test_yaml_serialization_roundtrip() {
    let secret = SecretString::new("my-api-key-value");

    let yaml = serde_yaml::to_string(&secret).unwrap();
    assert!(yaml.contains("my-api-key-value"));

    let deserialized: SecretString = serde_yaml::from_str(&yaml).unwrap();
    assert_eq!(deserialized.expose_secret(), "my-api-key-value");
    assert_eq!(format!("{}", deserialized), "[REDACTED]");
}
