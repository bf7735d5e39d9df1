//! Tag-preserving conversion between the JSON wire form and [`ConfigValue`].
//!
//! Decoding is total: every JSON value maps to some [`ConfigValue`]. Missing fields of known
//! tags are filled with their defaults, unknown tags are kept as [`Opaque`] values, and the
//! only hard failure is malformed JSON text ([`from_json_str`]).

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

use crate::foundation::error::{FxError, FxResult};
use crate::value::config::{Callable, ConfigValue, EffectConfig};
use crate::value::typed::{
    ArcDirection, ArcPath, ColorSelection, ColorSelectionType, DEFAULT_COLOR_VALUE,
    DynamicRange, KIND_KEY, NON_DATA_KEY, Opaque, PercentageOfSide, PercentageRange, Point,
    Position, Range, Side, TYPE_KEY, TypedValue, kind, tag,
};

/// Decode a wire payload.
pub fn from_wire(payload: &Value) -> ConfigValue {
    match payload {
        Value::Null => ConfigValue::Null,
        Value::Bool(b) => ConfigValue::Bool(*b),
        Value::Number(n) => ConfigValue::Number(n.clone()),
        Value::String(s) => ConfigValue::String(s.clone()),
        Value::Array(items) => ConfigValue::Array(items.iter().map(from_wire).collect()),
        Value::Object(map) => object_from_wire(map),
    }
}

/// Parse JSON text and decode it.
///
/// Fails only when the text is not valid JSON.
pub fn from_json_str(s: &str) -> FxResult<ConfigValue> {
    let v: Value = serde_json::from_str(s)?;
    Ok(from_wire(&v))
}

/// Decode a wire payload that must be an untagged object (a whole effect configuration).
pub fn config_from_wire(payload: &Value) -> FxResult<EffectConfig> {
    match from_wire(payload) {
        ConfigValue::Object(cfg) => Ok(cfg),
        other => Err(FxError::validation(format!(
            "effect config must be an untagged JSON object, got {}",
            other.runtime_kind()
        ))),
    }
}

fn object_from_wire(map: &Map<String, Value>) -> ConfigValue {
    // Geometry channel first: it is authoritative for scalable values.
    match map.get(KIND_KEY).and_then(Value::as_str) {
        Some(kind::POSITION) => return TypedValue::Position(position_from(map)).into(),
        Some(kind::ARC_PATH) => return TypedValue::ArcPath(arc_path_from(map)).into(),
        _ => {}
    }

    let Some(type_tag) = map.get(TYPE_KEY).and_then(Value::as_str) else {
        return ConfigValue::Object(untagged_from(map));
    };

    let typed = match type_tag {
        tag::RANGE => TypedValue::Range(range_from(map)),
        tag::DYNAMIC_RANGE => TypedValue::DynamicRange(DynamicRange {
            bottom: map.get("bottom").map(range_from_value).unwrap_or_default(),
            top: map.get("top").map(range_from_value).unwrap_or_default(),
        }),
        tag::POINT => TypedValue::Point(Point::new(num(map, "x", 0.0), num(map, "y", 0.0))),
        tag::PERCENTAGE_SHORTEST_SIDE => {
            TypedValue::PercentageOfSide(PercentageOfSide::shortest(num(map, "percent", 0.5)))
        }
        tag::PERCENTAGE_LONGEST_SIDE => {
            TypedValue::PercentageOfSide(PercentageOfSide::longest(num(map, "percent", 0.5)))
        }
        tag::PERCENTAGE_RANGE => TypedValue::PercentageRange(percentage_range_from(map)),
        tag::COLOR_SELECTION => TypedValue::ColorSelection(color_selection_from(map)),
        tag::FUNCTION => {
            return ConfigValue::Callable(Callable {
                name: map.get("name").and_then(Value::as_str).map(str::to_owned),
            });
        }
        other => {
            tracing::warn!(tag = other, "unknown type tag, preserving value as opaque");
            TypedValue::Opaque(Opaque {
                tag: other.to_owned(),
                props: map
                    .iter()
                    .filter(|(k, _)| k.as_str() != TYPE_KEY)
                    .map(|(k, v)| (k.clone(), from_wire(v)))
                    .collect(),
            })
        }
    };
    typed.into()
}

fn untagged_from(map: &Map<String, Value>) -> EffectConfig {
    map.iter().map(|(k, v)| (k.clone(), from_wire(v))).collect()
}

fn num(map: &Map<String, Value>, key: &str, default: f64) -> f64 {
    map.get(key).and_then(Value::as_f64).unwrap_or(default)
}

fn range_from(map: &Map<String, Value>) -> Range {
    Range::new(num(map, "lower", 0.0), num(map, "upper", 1.0))
}

fn range_from_value(v: &Value) -> Range {
    v.as_object().map(range_from).unwrap_or_default()
}

fn position_from(map: &Map<String, Value>) -> Position {
    Position::new(num(map, "x", 0.0), num(map, "y", 0.0))
}

fn arc_path_from(map: &Map<String, Value>) -> ArcPath {
    let defaults = ArcPath::default();
    let center = match map.get("center").map(from_wire) {
        Some(ConfigValue::Typed(TypedValue::Position(p))) => p,
        Some(ConfigValue::Typed(TypedValue::Point(p))) => p.into(),
        Some(ConfigValue::Object(o)) => Position::new(
            o.get("x").and_then(ConfigValue::as_f64).unwrap_or(0.0),
            o.get("y").and_then(ConfigValue::as_f64).unwrap_or(0.0),
        ),
        _ => defaults.center,
    };
    ArcPath {
        center,
        radius: num(map, "radius", defaults.radius),
        start_angle: num(map, "startAngle", defaults.start_angle),
        end_angle: num(map, "endAngle", defaults.end_angle),
        direction: map
            .get("direction")
            .and_then(Value::as_f64)
            .map_or(defaults.direction, ArcDirection::from_f64),
    }
}

/// `true` when a wire object is flagged as having carried non-data bounds.
pub(crate) fn has_non_data_flag(map: &Map<String, Value>) -> bool {
    map.get(NON_DATA_KEY).and_then(Value::as_bool) == Some(true)
}

fn percentage_range_from(map: &Map<String, Value>) -> PercentageRange {
    if has_non_data_flag(map) {
        tracing::warn!("percentage range bounds were not transferable, using safe defaults");
        return PercentageRange::safe_default();
    }
    let lower = map.get("lower").and_then(percentage_from_value);
    let upper = map.get("upper").and_then(percentage_from_value);
    match (lower, upper) {
        (Some(lower), Some(upper)) => PercentageRange { lower, upper },
        _ => {
            tracing::warn!("percentage range is missing a bound, using safe defaults");
            PercentageRange::safe_default()
        }
    }
}

fn percentage_from_value(v: &Value) -> Option<PercentageOfSide> {
    match from_wire(v) {
        ConfigValue::Typed(TypedValue::PercentageOfSide(p)) => Some(p),
        // Untagged `{ percent, side }`, as produced by some older presets.
        ConfigValue::Object(o) => {
            let percent = o.get("percent").and_then(ConfigValue::as_f64)?;
            let side = match o.get("side").and_then(ConfigValue::as_str)? {
                "shortest" => Side::Shortest,
                "longest" => Side::Longest,
                _ => return None,
            };
            Some(PercentageOfSide { percent, side })
        }
        _ => None,
    }
}

fn color_selection_from(map: &Map<String, Value>) -> ColorSelection {
    let selection_type = match map.get("selectionType").and_then(Value::as_str) {
        None => ColorSelectionType::Single,
        Some(s) => ColorSelectionType::parse(s).unwrap_or_else(|| {
            tracing::warn!(selection_type = s, "unknown color selection type, preserving it");
            ColorSelectionType::Other(s.to_owned())
        }),
    };
    let color_value = match map.get("colorValue") {
        None => Some(DEFAULT_COLOR_VALUE.to_owned()),
        Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(_) => Some(DEFAULT_COLOR_VALUE.to_owned()),
    };
    ColorSelection {
        selection_type,
        color_value,
    }
}

/// Encode a value using the same tag vocabulary [`from_wire`] understands.
pub fn to_wire(value: &ConfigValue) -> Value {
    match value {
        ConfigValue::Null => Value::Null,
        ConfigValue::Bool(b) => Value::Bool(*b),
        ConfigValue::Number(n) => Value::Number(n.clone()),
        ConfigValue::String(s) => Value::String(s.clone()),
        ConfigValue::Array(items) => Value::Array(items.iter().map(to_wire).collect()),
        ConfigValue::Object(cfg) => Value::Object(config_to_map(cfg)),
        ConfigValue::Typed(t) => typed_to_wire(t),
        ConfigValue::Callable(c) => match &c.name {
            Some(name) => json!({ TYPE_KEY: tag::FUNCTION, "name": name }),
            None => json!({ TYPE_KEY: tag::FUNCTION }),
        },
    }
}

/// Encode a whole effect configuration as a JSON object.
pub fn config_to_wire(cfg: &EffectConfig) -> Value {
    Value::Object(config_to_map(cfg))
}

fn config_to_map(cfg: &EffectConfig) -> Map<String, Value> {
    cfg.iter().map(|(k, v)| (k.to_owned(), to_wire(v))).collect()
}

fn range_to_wire(r: Range) -> Value {
    json!({ TYPE_KEY: tag::RANGE, "lower": r.lower, "upper": r.upper })
}

fn percentage_to_wire(p: PercentageOfSide) -> Value {
    json!({ TYPE_KEY: p.tag(), "percent": p.percent })
}

fn position_to_wire(p: Position) -> Value {
    json!({ KIND_KEY: kind::POSITION, "x": p.x, "y": p.y })
}

/// Encode a typed value.
pub fn typed_to_wire(value: &TypedValue) -> Value {
    match value {
        TypedValue::Range(r) => range_to_wire(*r),
        TypedValue::DynamicRange(d) => json!({
            TYPE_KEY: tag::DYNAMIC_RANGE,
            "bottom": range_to_wire(d.bottom),
            "top": range_to_wire(d.top),
        }),
        TypedValue::Point(p) => json!({ TYPE_KEY: tag::POINT, "x": p.x, "y": p.y }),
        TypedValue::Position(p) => position_to_wire(*p),
        TypedValue::PercentageOfSide(p) => percentage_to_wire(*p),
        TypedValue::PercentageRange(r) => json!({
            TYPE_KEY: tag::PERCENTAGE_RANGE,
            "lower": percentage_to_wire(r.lower),
            "upper": percentage_to_wire(r.upper),
        }),
        TypedValue::ColorSelection(c) => json!({
            TYPE_KEY: tag::COLOR_SELECTION,
            "selectionType": c.selection_type.as_str(),
            "colorValue": c.color_value,
        }),
        TypedValue::ArcPath(a) => json!({
            KIND_KEY: kind::ARC_PATH,
            "center": position_to_wire(a.center),
            "radius": a.radius,
            "startAngle": a.start_angle,
            "endAngle": a.end_angle,
            "direction": a.direction.signum(),
        }),
        TypedValue::Opaque(o) => {
            let mut map = Map::new();
            map.insert(TYPE_KEY.to_owned(), Value::String(o.tag.clone()));
            map.extend(config_to_map(&o.props));
            Value::Object(map)
        }
    }
}

impl Serialize for ConfigValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        to_wire(self).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ConfigValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let v = Value::deserialize(deserializer)?;
        Ok(from_wire(&v))
    }
}

impl Serialize for EffectConfig {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        config_to_wire(self).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for EffectConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let v = Value::deserialize(deserializer)?;
        config_from_wire(&v).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/value/wire.rs"]
mod tests;
