use super::*;

#[test]
fn humanize_splits_common_spellings() {
    assert_eq!(humanize("layerOpacity"), "Layer Opacity");
    assert_eq!(humanize("stroke_width"), "Stroke Width");
    assert_eq!(humanize("inner-radius"), "Inner Radius");
    assert_eq!(humanize("center"), "Center");
    assert_eq!(humanize("ring2Color"), "Ring2 Color");
    assert_eq!(humanize("RGB"), "RGB");
    assert_eq!(humanize(""), "");
}

#[test]
fn empty_constraints_are_omitted() {
    let field = FieldSchema {
        name: "label".to_owned(),
        label: "Label".to_owned(),
        kind: FieldKind::Text,
        constraints: Constraints::default(),
        default_value: ConfigValue::from("hi"),
    };
    let v = serde_json::to_value(&field).unwrap();
    assert!(v.get("constraints").is_none());
    assert_eq!(v["kind"]["type"], "text");
    assert_eq!(v["defaultValue"], "hi");
}

#[test]
fn numeric_constraints_serialize_camel_case() {
    let c = Constraints {
        read_only: true,
        ..Constraints::numeric(0.0, 1.0, 0.01)
    };
    let v = serde_json::to_value(&c).unwrap();
    assert_eq!(v["max"], 1.0);
    assert_eq!(v["readOnly"], true);
    assert!(v.get("options").is_none());
}

#[test]
fn opaque_kind_carries_runtime_kind() {
    let v = serde_json::to_value(FieldKind::Opaque {
        runtime_kind: "object".to_owned(),
    })
    .unwrap();
    assert_eq!(v["type"], "opaque");
    assert_eq!(v["runtime_kind"], "object");
}
