use super::*;
use crate::value::config::ConfigValue;
use crate::value::typed::{Position, TypedValue};

fn project_json() -> &'static str {
    r#"
[
  {
    "id": "e0",
    "name": "fuzz-flare",
    "config": {
      "center": { "__kind": "position", "x": 540, "y": 960 },
      "layerOpacity": 0.7
    },
    "secondaryEffects": [
      { "id": "e0-glow", "name": "glow", "config": { "strength": 2 } }
    ],
    "keyframeEffects": [
      { "id": "e0-k1", "name": "blur", "config": {} }
    ]
  }
]
"#
}

#[test]
fn effect_list_json_roundtrip() {
    let effects = effects_from_json(project_json()).unwrap();
    assert_eq!(effects.len(), 1);
    assert_eq!(effects[0].tree_len(), 3);
    assert_eq!(
        effects[0].config.get("center"),
        Some(&ConfigValue::Typed(TypedValue::Position(Position::new(
            540.0, 960.0
        ))))
    );

    let s = serde_json::to_string(&effects).unwrap();
    let back: Vec<Effect> = serde_json::from_str(&s).unwrap();
    assert_eq!(back, effects);
}

#[test]
fn missing_config_defaults_to_empty() {
    let e: Effect = serde_json::from_str(r#"{ "id": "a", "name": "b" }"#).unwrap();
    assert!(e.config.is_empty());
    assert!(e.secondary_effects.is_empty());
}

#[test]
fn validate_rejects_blank_nested_name() {
    let mut e = Effect::new("root", "glow", EffectConfig::new());
    e.keyframe_effects
        .push(Effect::new("k", " ", EffectConfig::new()));
    assert!(e.validate().is_err());
}

#[test]
fn tagged_config_is_rejected() {
    let s = r#"[{ "id": "a", "name": "b", "config": { "__type": "Range" } }]"#;
    assert!(effects_from_json(s).is_err());
}

#[test]
fn uninterpreted_properties_survive_roundtrip() {
    let s = r#"{ "id": "a", "name": "n", "visible": false, "className": "Foo", "config": {} }"#;
    let e: Effect = serde_json::from_str(s).unwrap();
    assert_eq!(e.extra.get("visible"), Some(&serde_json::Value::Bool(false)));
    assert_eq!(e.extra.get("className").and_then(|v| v.as_str()), Some("Foo"));

    let back = serde_json::to_value(&e).unwrap();
    assert_eq!(back["visible"], serde_json::json!(false));
    assert_eq!(back["className"], serde_json::json!("Foo"));
    assert!(back.get("extra").is_none());
}
