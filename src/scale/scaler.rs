//! Canvas-relative geometry rescaling.
//!
//! Only [`Position`] values and the centre/radius of [`ArcPath`] values move. Everything
//! else, bare [`crate::Point`] included, is copied unchanged. Walks recurse through arrays,
//! untagged objects, opaque tagged values and nested secondary/keyframe effects.

use serde_json::{Map, Value};

use crate::effect::model::Effect;
use crate::foundation::core::{CanvasDimensions, ScaleFactors};
use crate::value::config::{ConfigValue, EffectConfig};
use crate::value::typed::{ArcPath, KIND_KEY, Opaque, Position, TypedValue, kind};

/// How an arc radius follows a non-uniform canvas change.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RadiusPolicy {
    /// `sqrt(sx * sy)`; preserves the arc's area scale.
    #[default]
    GeometricMean,
    /// Follows the axis that shrank most (or grew least).
    ShorterAxis,
    /// Follows the axis that shrank least (or grew most).
    LongerAxis,
}

impl RadiusPolicy {
    /// The single factor applied to radii. Uniform changes return that factor exactly.
    pub fn factor(self, f: ScaleFactors) -> f64 {
        let (sx, sy) = (f.x(), f.y());
        if sx == sy {
            return sx;
        }
        match self {
            Self::GeometricMean => (sx * sy).sqrt(),
            Self::ShorterAxis => sx.min(sy),
            Self::LongerAxis => sx.max(sy),
        }
    }
}

/// Scaling options.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScaleOpts {
    /// Arc radius policy.
    pub radius: RadiusPolicy,
}

/// Rescale every effect's geometry from an `old_w`x`old_h` canvas to `new_w`x`new_h`.
///
/// Returns a new collection; the input is left untouched. When old and new sizes are equal
/// the result is a plain copy of the input.
///
/// # Panics
///
/// Panics when an old dimension is not positive (see [`ScaleFactors::between`]).
pub fn scale_effects(
    effects: &[Effect],
    old_w: f64,
    old_h: f64,
    new_w: f64,
    new_h: f64,
) -> Vec<Effect> {
    scale_effects_with(
        effects,
        ScaleFactors::between(old_w, old_h, new_w, new_h),
        ScaleOpts::default(),
    )
}

/// [`scale_effects`] between two catalog-resolved canvases.
pub fn scale_effects_between(
    effects: &[Effect],
    old: CanvasDimensions,
    new: CanvasDimensions,
) -> Vec<Effect> {
    scale_effects_with(
        effects,
        ScaleFactors::from_canvases(old, new),
        ScaleOpts::default(),
    )
}

/// [`scale_effects`] with explicit factors and options.
#[tracing::instrument(skip(effects), fields(effects = effects.len()))]
pub fn scale_effects_with(
    effects: &[Effect],
    factors: ScaleFactors,
    opts: ScaleOpts,
) -> Vec<Effect> {
    if factors.is_identity() {
        return effects.to_vec();
    }
    let scaler = Scaler::new(factors, opts);
    effects.iter().map(|e| scaler.effect(e)).collect()
}

/// Rescale the geometry inside one configuration.
pub fn scale_config(cfg: &EffectConfig, factors: ScaleFactors, opts: ScaleOpts) -> EffectConfig {
    if factors.is_identity() {
        return cfg.clone();
    }
    Scaler::new(factors, opts).config(cfg)
}

/// Rescale the geometry inside one value.
pub fn scale_value(value: &ConfigValue, factors: ScaleFactors, opts: ScaleOpts) -> ConfigValue {
    if factors.is_identity() {
        return value.clone();
    }
    Scaler::new(factors, opts).value(value)
}

#[derive(Clone, Copy)]
struct Scaler {
    factors: ScaleFactors,
    radius: f64,
}

impl Scaler {
    fn new(factors: ScaleFactors, opts: ScaleOpts) -> Self {
        Self {
            factors,
            radius: opts.radius.factor(factors),
        }
    }

    fn effect(&self, effect: &Effect) -> Effect {
        Effect {
            id: effect.id.clone(),
            name: effect.name.clone(),
            config: self.config(&effect.config),
            secondary_effects: effect
                .secondary_effects
                .iter()
                .map(|e| self.effect(e))
                .collect(),
            keyframe_effects: effect
                .keyframe_effects
                .iter()
                .map(|e| self.effect(e))
                .collect(),
            extra: effect.extra.clone(),
        }
    }

    fn config(&self, cfg: &EffectConfig) -> EffectConfig {
        cfg.map_values(|v| self.value(v))
    }

    fn value(&self, value: &ConfigValue) -> ConfigValue {
        match value {
            ConfigValue::Typed(t) => ConfigValue::Typed(self.typed(t)),
            ConfigValue::Array(items) => {
                ConfigValue::Array(items.iter().map(|v| self.value(v)).collect())
            }
            ConfigValue::Object(o) => ConfigValue::Object(self.config(o)),
            ConfigValue::Null
            | ConfigValue::Bool(_)
            | ConfigValue::Number(_)
            | ConfigValue::String(_)
            | ConfigValue::Callable(_) => value.clone(),
        }
    }

    fn typed(&self, value: &TypedValue) -> TypedValue {
        match value {
            TypedValue::Position(p) => TypedValue::Position(self.position(*p)),
            TypedValue::ArcPath(a) => TypedValue::ArcPath(ArcPath {
                center: self.position(a.center),
                radius: a.radius * self.radius,
                ..*a
            }),
            TypedValue::Opaque(o) => TypedValue::Opaque(Opaque {
                tag: o.tag.clone(),
                props: self.config(&o.props),
            }),
            TypedValue::Range(_)
            | TypedValue::DynamicRange(_)
            | TypedValue::Point(_)
            | TypedValue::PercentageOfSide(_)
            | TypedValue::PercentageRange(_)
            | TypedValue::ColorSelection(_) => value.clone(),
        }
    }

    fn position(&self, p: Position) -> Position {
        Position::from_kurbo(self.factors.apply(p.to_kurbo()))
    }
}

/// Rescale geometry directly on wire JSON.
///
/// Geometry is recognised only through the [`KIND_KEY`] channel, so this works on payloads
/// (persisted projects, authority responses) without decoding the rest of the tag
/// vocabulary. Integer spellings elsewhere in the document are preserved.
pub fn scale_wire(value: &Value, factors: ScaleFactors, opts: ScaleOpts) -> Value {
    if factors.is_identity() {
        return value.clone();
    }
    WireScaler(Scaler::new(factors, opts)).value(value)
}

struct WireScaler(Scaler);

impl WireScaler {
    fn value(&self, value: &Value) -> Value {
        match value {
            Value::Array(items) => Value::Array(items.iter().map(|v| self.value(v)).collect()),
            Value::Object(map) => Value::Object(self.object(map)),
            _ => value.clone(),
        }
    }

    fn object(&self, map: &Map<String, Value>) -> Map<String, Value> {
        match map.get(KIND_KEY).and_then(Value::as_str) {
            Some(kind::POSITION) => self.scale_xy(map),
            Some(kind::ARC_PATH) => {
                let mut out = self.children(map);
                if let Some(Value::Object(center)) = map.get("center") {
                    // Centres are positions even when their own tag is missing.
                    out.insert("center".to_owned(), Value::Object(self.scale_xy(center)));
                }
                // A missing radius decodes to the default, so that is what gets scaled.
                let r = map
                    .get("radius")
                    .and_then(Value::as_f64)
                    .unwrap_or(ArcPath::default().radius);
                out.insert("radius".to_owned(), number(r * self.0.radius));
                out
            }
            _ => self.children(map),
        }
    }

    fn children(&self, map: &Map<String, Value>) -> Map<String, Value> {
        map.iter()
            .map(|(k, v)| (k.clone(), self.value(v)))
            .collect()
    }

    fn scale_xy(&self, map: &Map<String, Value>) -> Map<String, Value> {
        let mut out = map.clone();
        let x = map.get("x").and_then(Value::as_f64).unwrap_or(0.0);
        let y = map.get("y").and_then(Value::as_f64).unwrap_or(0.0);
        let p = self.0.factors.apply(kurbo::Point::new(x, y));
        out.insert("x".to_owned(), number(p.x));
        out.insert("y".to_owned(), number(p.y));
        out
    }
}

fn number(v: f64) -> Value {
    serde_json::Number::from_f64(v).map_or(Value::Null, Value::Number)
}

#[cfg(test)]
#[path = "../../tests/unit/scale/scaler.rs"]
mod tests;
