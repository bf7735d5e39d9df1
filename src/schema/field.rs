use crate::value::config::ConfigValue;

/// Widget-agnostic classification of one configuration property.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum FieldKind {
    /// Colour picker.
    ColorPicker,
    /// Displayed but not editable (callables, unset values).
    ReadOnly,
    /// List of timeline steps (`minPercentage`, `maxPercentage`, `max`, `times`, `type`).
    MultistepTimeline,
    /// List of value-finding algorithms.
    AlgorithmList,
    /// Choice of any subset of [`Constraints::options`].
    MultiSelect,
    /// Divisors of 360 used to thin out angular sampling.
    SparsityFactor,
    /// Raw structured data edited as JSON.
    Json,
    /// Boolean toggle.
    Toggle,
    /// Number with [`Constraints`] bounds.
    Number,
    /// Free text.
    Text,
    /// [`crate::Range`].
    Range,
    /// [`crate::DynamicRange`].
    DynamicRange,
    /// [`crate::PercentageOfSide`].
    Percentage,
    /// [`crate::PercentageRange`].
    PercentageRange,
    /// [`crate::Point`].
    Point,
    /// [`crate::Position`].
    Position,
    /// [`crate::ArcPath`].
    ArcPath,
    /// Value the synthesizer has no dedicated widget for.
    Opaque {
        /// Runtime kind of the value (`object`, a preserved tag, ...).
        runtime_kind: String,
    },
}

/// Editing constraints attached to a field. Empty constraints are omitted on the wire.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Constraints {
    /// Inclusive lower bound for numeric input.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    /// Inclusive upper bound for numeric input.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    /// Increment for numeric input.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step: Option<f64>,
    /// Allowed choices for selection fields.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
    /// The field is displayed only.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub read_only: bool,
}

impl Constraints {
    /// Numeric bounds with a step.
    pub fn numeric(min: f64, max: f64, step: f64) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
            step: Some(step),
            ..Self::default()
        }
    }

    /// Selection choices.
    pub fn options(options: Vec<String>) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Display-only.
    pub fn read_only() -> Self {
        Self {
            read_only: true,
            ..Self::default()
        }
    }

    /// `true` when no constraint is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Description of one editable property of an effect configuration.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldSchema {
    /// Property name as it appears in the configuration.
    pub name: String,
    /// Human-readable label.
    pub label: String,
    /// Field classification.
    pub kind: FieldKind,
    /// Editing constraints.
    #[serde(skip_serializing_if = "Constraints::is_empty")]
    pub constraints: Constraints,
    /// Value from the default instance (possibly substituted, see the synthesizer).
    pub default_value: ConfigValue,
}

/// Turn a camelCase / snake_case / kebab-case property name into a title-cased label.
///
/// `layerOpacity` becomes `Layer Opacity`, `stroke_width` becomes `Stroke Width`.
pub fn humanize(name: &str) -> String {
    let mut words: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut prev_lower_or_digit = false;
    for c in name.chars() {
        if c == '_' || c == '-' || c.is_whitespace() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            prev_lower_or_digit = false;
            continue;
        }
        if c.is_uppercase() && prev_lower_or_digit && !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
        prev_lower_or_digit = c.is_lowercase() || c.is_ascii_digit();
        current.push(c);
    }
    if !current.is_empty() {
        words.push(current);
    }

    words
        .iter()
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
#[path = "../../tests/unit/schema/field.rs"]
mod tests;
