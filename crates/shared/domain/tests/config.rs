use bkit_domain::config::{BkitConfig, OutputConfig, ValidationConfig};
use bkit_domain::limits::Limits;
use serde_json::json;

#[test]
fn config_defaults_are_sane() {
    let validation = ValidationConfig::default();
    assert!(validation.enabled);
    assert_eq!(validation.limits, Limits::default());

    assert!(OutputConfig::default().pretty);
}

#[test]
fn limits_follow_documented_values() {
    let limits = Limits::default();
    assert_eq!(limits.action_id, 255);
    assert_eq!(limits.actions_elements, 5);
    assert_eq!(limits.radio_options, 10);
    assert_eq!(limits.input_length, 3000);
    assert_eq!(limits.confirm_title, 100);
    assert_eq!(limits.confirm_text, 300);
    assert_eq!(limits.confirm_button, 30);
    assert_eq!(limits.placeholder, 150);
    assert_eq!(limits.message_blocks, 50);
    assert_eq!(limits.modal_blocks, 100);
}

#[test]
fn partial_config_keeps_defaults() {
    let raw = json!({
        "validation": { "limits": { "actions_elements": 25 } },
        "output": { "pretty": false }
    });

    let cfg: BkitConfig = serde_json::from_value(raw).expect("config deserialize");
    assert!(cfg.validation.enabled);
    assert_eq!(cfg.validation.limits.actions_elements, 25);
    assert_eq!(cfg.validation.limits.radio_options, 10);
    assert!(!cfg.output.pretty);
}

#[test]
fn validation_can_be_disabled() {
    let cfg: BkitConfig =
        serde_json::from_value(json!({ "validation": { "enabled": false } })).expect("deserialize");
    assert!(!cfg.validation.enabled);
    assert_eq!(cfg.validation.limits, Limits::default());
}
