//! Default instance -> field schema.
//!
//! Classification is a priority-ordered decision list evaluated per property. Every
//! non-metadata property yields exactly one field: anything no rule recognises ends up as an
//! opaque field rather than being dropped.

use std::collections::BTreeMap;

use crate::schema::field::{Constraints, FieldKind, FieldSchema, humanize};
use crate::value::config::{ConfigValue, EffectConfig};
use crate::value::typed::{PercentageRange, TypedValue, is_metadata_name};

/// Keys every timeline step object carries.
const TIMELINE_STEP_KEYS: [&str; 5] = ["minPercentage", "maxPercentage", "max", "times", "type"];

/// Schema synthesis options.
#[derive(Clone, Debug, Default)]
pub struct SchemaOpts {
    /// Per-property constraints for number fields, keyed by property name. Replaces the
    /// name-based bounds heuristic for that property.
    pub constraint_overrides: BTreeMap<String, Constraints>,
}

/// Synthesize the field schema of a default instance with default options.
pub fn synthesize(instance: &EffectConfig) -> Vec<FieldSchema> {
    synthesize_with(instance, &SchemaOpts::default())
}

/// Synthesize the field schema of a default instance.
///
/// Emits one field per property in property order, skipping only reserved metadata names.
pub fn synthesize_with(instance: &EffectConfig, opts: &SchemaOpts) -> Vec<FieldSchema> {
    let fields: Vec<FieldSchema> = instance
        .iter()
        .filter(|(name, _)| !is_metadata_name(name))
        .map(|(name, value)| classify(name, value, opts))
        .collect();
    tracing::debug!(
        properties = instance.len(),
        fields = fields.len(),
        "synthesized effect schema"
    );
    fields
}

fn field(
    name: &str,
    label: String,
    kind: FieldKind,
    constraints: Constraints,
    default_value: ConfigValue,
) -> FieldSchema {
    FieldSchema {
        name: name.to_owned(),
        label,
        kind,
        constraints,
        default_value,
    }
}

fn classify(name: &str, value: &ConfigValue, opts: &SchemaOpts) -> FieldSchema {
    let label = humanize(name);
    let lower = name.to_ascii_lowercase();

    if is_color_name(&lower) {
        return field(
            name,
            label,
            FieldKind::ColorPicker,
            Constraints::default(),
            value.clone(),
        );
    }

    match value {
        ConfigValue::Callable(_) => field(
            name,
            format!("{label} (Function)"),
            FieldKind::ReadOnly,
            Constraints::read_only(),
            value.clone(),
        ),
        ConfigValue::Null => field(
            name,
            format!("{label} (Not Set)"),
            FieldKind::ReadOnly,
            Constraints::read_only(),
            ConfigValue::Null,
        ),
        ConfigValue::Array(items) => classify_array(name, label, &lower, items, value),
        ConfigValue::Bool(_) => field(
            name,
            label,
            FieldKind::Toggle,
            Constraints::default(),
            value.clone(),
        ),
        ConfigValue::Number(_) => field(
            name,
            label,
            FieldKind::Number,
            number_constraints(name, &lower, opts),
            value.clone(),
        ),
        ConfigValue::String(_) => field(
            name,
            label,
            FieldKind::Text,
            Constraints::default(),
            value.clone(),
        ),
        ConfigValue::Typed(t) => classify_typed(name, label, t),
        ConfigValue::Object(obj) => classify_shape(name, label, &lower, obj, value),
    }
}

/// `color`/`colour` names, and names ending in either, excluding `...mode`/`...type`/`...style`.
fn is_color_name(lower: &str) -> bool {
    let colorish = lower.ends_with("color") || lower.ends_with("colour");
    let qualifier = ["mode", "type", "style"].iter().any(|s| lower.ends_with(s));
    colorish && !qualifier
}

fn classify_array(
    name: &str,
    label: String,
    lower: &str,
    items: &[ConfigValue],
    value: &ConfigValue,
) -> FieldSchema {
    let (kind, constraints) = if is_timeline(items) {
        (FieldKind::MultistepTimeline, Constraints::default())
    } else if lower.contains("algorithm") || lower.contains("findvalue") {
        (FieldKind::AlgorithmList, Constraints::default())
    } else if lower.contains("strategy") && items.iter().all(|v| v.as_str().is_some()) {
        let options = items
            .iter()
            .filter_map(ConfigValue::as_str)
            .map(str::to_owned)
            .collect();
        (FieldKind::MultiSelect, Constraints::options(options))
    } else if lower.contains("sparsity") || lower.contains("factor") {
        let options = divisors_of_360().map(|d| d.to_string()).collect();
        (FieldKind::SparsityFactor, Constraints::options(options))
    } else {
        (FieldKind::Json, Constraints::default())
    };
    field(name, label, kind, constraints, value.clone())
}

fn is_timeline(items: &[ConfigValue]) -> bool {
    !items.is_empty()
        && items.iter().all(|item| {
            item.as_object()
                .is_some_and(|o| TIMELINE_STEP_KEYS.iter().all(|k| o.contains(k)))
        })
}

fn divisors_of_360() -> impl Iterator<Item = u32> {
    (1..=360u32).filter(|d| 360 % d == 0)
}

fn number_constraints(name: &str, lower: &str, opts: &SchemaOpts) -> Constraints {
    if let Some(c) = opts.constraint_overrides.get(name) {
        return c.clone();
    }
    if lower.contains("stroke") || lower.contains("thickness") {
        Constraints::numeric(0.0, 20.0, 1.0)
    } else if lower.contains("opacity") {
        Constraints::numeric(0.0, 1.0, 0.01)
    } else {
        // Generous fallback, not a domain limit.
        Constraints::numeric(0.0, 100.0, 1.0)
    }
}

fn classify_typed(name: &str, label: String, value: &TypedValue) -> FieldSchema {
    let default_value = ConfigValue::Typed(value.clone());
    let kind = match value {
        TypedValue::Range(_) => FieldKind::Range,
        TypedValue::DynamicRange(_) => FieldKind::DynamicRange,
        TypedValue::Point(_) => FieldKind::Point,
        TypedValue::Position(_) => FieldKind::Position,
        TypedValue::PercentageOfSide(_) => FieldKind::Percentage,
        TypedValue::PercentageRange(r) => {
            let r = if is_data_range(r) {
                *r
            } else {
                tracing::warn!(
                    field = name,
                    "percentage range default is not data, using safe defaults"
                );
                PercentageRange::safe_default()
            };
            return field(
                name,
                label,
                FieldKind::PercentageRange,
                Constraints::default(),
                ConfigValue::Typed(TypedValue::PercentageRange(r)),
            );
        }
        TypedValue::ColorSelection(_) => FieldKind::ColorPicker,
        TypedValue::ArcPath(_) => FieldKind::ArcPath,
        TypedValue::Opaque(o) => {
            return field(
                name,
                format!("{label} ({})", o.tag),
                FieldKind::Opaque {
                    runtime_kind: o.tag.clone(),
                },
                Constraints::default(),
                default_value,
            );
        }
    };
    field(name, label, kind, Constraints::default(), default_value)
}

/// In-memory counterpart of the wire non-data flag: bounds that are not finite numbers.
fn is_data_range(r: &PercentageRange) -> bool {
    r.lower.percent.is_finite() && r.upper.percent.is_finite()
}

fn classify_shape(
    name: &str,
    label: String,
    lower: &str,
    obj: &EffectConfig,
    value: &ConfigValue,
) -> FieldSchema {
    let numeric = |k: &str| obj.get(k).and_then(ConfigValue::as_f64).is_some();
    let kind = if numeric("x") && numeric("y") {
        if ["center", "position", "point"].iter().any(|s| lower.contains(s)) {
            FieldKind::Position
        } else {
            FieldKind::Point
        }
    } else if obj.contains("lower") && obj.contains("upper") {
        FieldKind::Range
    } else if obj.contains("bottom") && obj.contains("top") {
        FieldKind::DynamicRange
    } else {
        return field(
            name,
            format!("{label} (object)"),
            FieldKind::Opaque {
                runtime_kind: value.runtime_kind().to_owned(),
            },
            Constraints::default(),
            value.clone(),
        );
    };
    field(name, label, kind, Constraints::default(), value.clone())
}

#[cfg(test)]
#[path = "../../tests/unit/schema/synth.rs"]
mod tests;
