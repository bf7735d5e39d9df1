use super::*;
use crate::value::typed::{ArcDirection, Point, Range};
use crate::value::wire::from_wire;
use serde_json::json;

fn fhd_to_hd() -> ScaleFactors {
    ScaleFactors::between(1920.0, 1080.0, 1280.0, 720.0)
}

fn landscape_to_portrait() -> ScaleFactors {
    ScaleFactors::between(1920.0, 1080.0, 1080.0, 1920.0)
}

fn position(v: &ConfigValue) -> Position {
    match v.as_typed() {
        Some(TypedValue::Position(p)) => *p,
        other => panic!("expected position, got {other:?}"),
    }
}

fn arc(v: &ConfigValue) -> ArcPath {
    match v.as_typed() {
        Some(TypedValue::ArcPath(a)) => *a,
        other => panic!("expected arc path, got {other:?}"),
    }
}

#[test]
fn position_scales_per_axis() {
    let cfg = EffectConfig::new().with("center", Position::new(960.0, 540.0));
    let out = scale_config(&cfg, fhd_to_hd(), ScaleOpts::default());
    assert_eq!(position(out.get("center").unwrap()), Position::new(640.0, 360.0));

    let out = scale_config(&cfg, landscape_to_portrait(), ScaleOpts::default());
    assert_eq!(position(out.get("center").unwrap()), Position::new(540.0, 960.0));
}

#[test]
fn point_and_scalars_are_untouched() {
    let cfg = EffectConfig::new()
        .with("offset", Point::new(960.0, 540.0))
        .with("range", Range::new(0.0, 10.0))
        .with("count", 3_i64)
        .with("label", "glow");
    let out = scale_config(&cfg, fhd_to_hd(), ScaleOpts::default());
    assert_eq!(out, cfg);
}

#[test]
fn arc_path_uniform_change_scales_radius_by_that_factor() {
    let a = ArcPath {
        center: Position::new(960.0, 540.0),
        radius: 300.0,
        start_angle: 10.0,
        end_angle: 200.0,
        direction: ArcDirection::Reverse,
    };
    let out = scale_value(&ConfigValue::from(a), fhd_to_hd(), ScaleOpts::default());
    let b = arc(&out);
    assert_eq!(b.center, Position::new(640.0, 360.0));
    assert!((b.radius - 200.0).abs() < 1e-9);
    assert_eq!(b.start_angle, 10.0);
    assert_eq!(b.end_angle, 200.0);
    assert_eq!(b.direction, ArcDirection::Reverse);
}

#[test]
fn arc_path_non_uniform_radius_policies() {
    let a = ArcPath {
        radius: 100.0,
        ..ArcPath::default()
    };
    let f = landscape_to_portrait();

    let mean = arc(&scale_value(&ConfigValue::from(a), f, ScaleOpts::default()));
    assert!((mean.radius - 100.0).abs() < 1e-9);

    let shorter = ScaleOpts {
        radius: RadiusPolicy::ShorterAxis,
    };
    let s = arc(&scale_value(&ConfigValue::from(a), f, shorter));
    assert!((s.radius - 56.25).abs() < 1e-9);

    let longer = ScaleOpts {
        radius: RadiusPolicy::LongerAxis,
    };
    let l = arc(&scale_value(&ConfigValue::from(a), f, longer));
    assert!((l.radius - 100.0 * 1920.0 / 1080.0).abs() < 1e-9);
}

#[test]
fn radius_factor_is_exact_for_uniform_changes() {
    let f = ScaleFactors::between(1000.0, 500.0, 2000.0, 1000.0);
    for policy in [
        RadiusPolicy::GeometricMean,
        RadiusPolicy::ShorterAxis,
        RadiusPolicy::LongerAxis,
    ] {
        assert_eq!(policy.factor(f), 2.0);
    }
}

#[test]
fn recurses_through_arrays_objects_and_opaque_values() {
    let nested = EffectConfig::new().with("anchor", Position::new(192.0, 108.0));
    let opaque = TypedValue::Opaque(Opaque {
        tag: "Spline".to_owned(),
        props: EffectConfig::new().with("origin", Position::new(1920.0, 0.0)),
    });
    let cfg = EffectConfig::new()
        .with(
            "points",
            ConfigValue::Array(vec![Position::new(0.0, 1080.0).into(), 5_i64.into()]),
        )
        .with("group", nested)
        .with("spline", opaque);
    let out = scale_config(&cfg, fhd_to_hd(), ScaleOpts::default());

    let ConfigValue::Array(points) = out.get("points").unwrap() else {
        panic!("points should stay an array");
    };
    assert_eq!(position(&points[0]), Position::new(0.0, 720.0));
    assert_eq!(points[1].as_f64(), Some(5.0));

    let group = out.get("group").and_then(ConfigValue::as_object).unwrap();
    assert_eq!(position(group.get("anchor").unwrap()), Position::new(128.0, 72.0));

    let Some(TypedValue::Opaque(o)) = out.get("spline").and_then(ConfigValue::as_typed) else {
        panic!("spline should stay opaque");
    };
    assert_eq!(o.tag, "Spline");
    assert_eq!(position(o.props.get("origin").unwrap()), Position::new(1280.0, 0.0));
}

#[test]
fn nested_effects_are_scaled_and_input_is_untouched() {
    let child = Effect::new(
        "child",
        "Child",
        EffectConfig::new().with("center", Position::new(1920.0, 1080.0)),
    );
    let mut parent = Effect::new(
        "parent",
        "Parent",
        EffectConfig::new().with("center", Position::new(960.0, 540.0)),
    );
    parent.secondary_effects.push(child.clone());
    parent.keyframe_effects.push(child);
    let input = vec![parent];

    let out = scale_effects(&input, 1920.0, 1080.0, 1280.0, 720.0);
    assert_eq!(out.len(), 1);
    assert_eq!(
        position(out[0].config.get("center").unwrap()),
        Position::new(640.0, 360.0)
    );
    for nested in [&out[0].secondary_effects[0], &out[0].keyframe_effects[0]] {
        assert_eq!(
            position(nested.config.get("center").unwrap()),
            Position::new(1280.0, 720.0)
        );
    }
    assert_eq!(
        position(input[0].config.get("center").unwrap()),
        Position::new(960.0, 540.0)
    );
}

#[test]
fn uninterpreted_effect_properties_survive_scaling() {
    let mut child = Effect::new("child", "Child", EffectConfig::new());
    child.extra.insert("visible".to_owned(), json!(true));
    let mut parent = Effect::new(
        "parent",
        "Parent",
        EffectConfig::new().with("center", Position::new(960.0, 540.0)),
    );
    parent.extra.insert("visible".to_owned(), json!(false));
    parent.extra.insert("className".to_owned(), json!("Foo"));
    parent.secondary_effects.push(child);

    let out = scale_effects(&[parent.clone()], 1920.0, 1080.0, 1280.0, 720.0);
    assert_eq!(out[0].extra, parent.extra);
    assert_eq!(out[0].secondary_effects[0].extra.get("visible"), Some(&json!(true)));
}

#[test]
fn identity_is_a_plain_copy() {
    let input = vec![Effect::new(
        "e",
        "E",
        EffectConfig::new()
            .with("center", Position::new(0.1, 0.2))
            .with("arc", ArcPath::default()),
    )];
    assert_eq!(scale_effects(&input, 1920.0, 1080.0, 1920.0, 1080.0), input);
}

#[test]
#[should_panic(expected = "old canvas dimensions must be positive")]
fn zero_old_dimension_panics() {
    let _ = scale_effects(&[], 0.0, 1080.0, 1280.0, 720.0);
}

#[test]
fn wire_scaling_uses_kind_channel_only() {
    let payload = json!({
        "center": { "__kind": "position", "x": 960, "y": 540 },
        "offset": { "__type": "Point", "x": 960, "y": 540 },
        "untagged": { "x": 960, "y": 540 },
        "arc": {
            "__kind": "arc-path",
            "center": { "x": 1920, "y": 1080 },
            "radius": 300,
            "startAngle": 0,
            "endAngle": 90,
            "direction": -1
        },
        "count": 3
    });
    let out = scale_wire(&payload, fhd_to_hd(), ScaleOpts::default());

    assert_eq!(out["center"]["__kind"], json!("position"));
    assert_eq!(out["center"]["x"].as_f64(), Some(640.0));
    assert_eq!(out["center"]["y"].as_f64(), Some(360.0));
    assert_eq!(out["offset"], payload["offset"]);
    assert_eq!(out["untagged"], payload["untagged"]);
    assert_eq!(out["arc"]["center"]["x"].as_f64(), Some(1280.0));
    assert!((out["arc"]["radius"].as_f64().unwrap() - 200.0).abs() < 1e-9);
    assert_eq!(out["arc"]["direction"], json!(-1));
    assert_eq!(out["count"], json!(3));
}

#[test]
fn wire_and_typed_scaling_agree_on_defaulted_arcs() {
    for payload in [
        json!({ "__kind": "arc-path", "center": { "__kind": "position", "x": 960, "y": 540 } }),
        json!({ "__kind": "arc-path", "radius": "wide", "startAngle": 45 }),
        json!({ "__kind": "arc-path", "center": { "x": 10, "y": 20 }, "radius": 300 }),
    ] {
        let wire = from_wire(&scale_wire(&payload, fhd_to_hd(), ScaleOpts::default()));
        let typed = scale_value(&from_wire(&payload), fhd_to_hd(), ScaleOpts::default());
        assert_eq!(wire, typed, "{payload}");
    }

    let out = scale_wire(
        &json!({ "__kind": "arc-path" }),
        fhd_to_hd(),
        ScaleOpts::default(),
    );
    assert!((out["radius"].as_f64().unwrap() - 100.0 * 2.0 / 3.0).abs() < 1e-9);
}

#[test]
fn wire_identity_is_unchanged() {
    let payload = json!([{ "__kind": "position", "x": 1, "y": 2 }]);
    let c = CanvasDimensions::new(640, 480);
    let out = scale_wire(
        &payload,
        ScaleFactors::from_canvases(c, c),
        ScaleOpts::default(),
    );
    assert_eq!(out, payload);
}
