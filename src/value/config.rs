use crate::value::typed::{self, TypedValue};

/// A callable that was present in the authority's instance but could not cross the
/// boundary as data. Only its name (when known) survives.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Callable {
    /// Function name reported by the authority, if any.
    pub name: Option<String>,
}

/// Any value that can appear inside an effect configuration.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigValue {
    /// JSON `null` (or an undefined value on the authority side).
    Null,
    /// Boolean.
    Bool(bool),
    /// Number; integer and float spellings are preserved.
    Number(serde_json::Number),
    /// String.
    String(String),
    /// Array of values.
    Array(Vec<ConfigValue>),
    /// Object without a discriminator.
    Object(EffectConfig),
    /// Object carrying a recognised (or preserved unknown) discriminator.
    Typed(TypedValue),
    /// Leaked callable.
    Callable(Callable),
}

impl ConfigValue {
    /// Build a number from an `f64`; non-finite inputs become [`ConfigValue::Null`].
    pub fn number(v: f64) -> Self {
        serde_json::Number::from_f64(v).map_or(Self::Null, Self::Number)
    }

    /// Numeric content, if this is a number.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => n.as_f64(),
            _ => None,
        }
    }

    /// String content, if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Untagged object content, if this is an untagged object.
    pub fn as_object(&self) -> Option<&EffectConfig> {
        match self {
            Self::Object(o) => Some(o),
            _ => None,
        }
    }

    /// Typed content, if this is a tagged value.
    pub fn as_typed(&self) -> Option<&TypedValue> {
        match self {
            Self::Typed(t) => Some(t),
            _ => None,
        }
    }

    /// `true` for [`ConfigValue::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Short description of the runtime kind, used in labels and diagnostics.
    pub fn runtime_kind(&self) -> &str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "boolean",
            Self::Number(_) => "number",
            Self::String(_) => "string",
            Self::Array(_) => "array",
            Self::Object(_) => "object",
            Self::Typed(t) => t.tag(),
            Self::Callable(_) => "function",
        }
    }
}

impl From<TypedValue> for ConfigValue {
    fn from(v: TypedValue) -> Self {
        Self::Typed(v)
    }
}

macro_rules! typed_into_config_value {
    ($($ty:ident),* $(,)?) => {
        $(
            impl From<typed::$ty> for TypedValue {
                fn from(v: typed::$ty) -> Self {
                    Self::$ty(v)
                }
            }

            impl From<typed::$ty> for ConfigValue {
                fn from(v: typed::$ty) -> Self {
                    Self::Typed(TypedValue::$ty(v))
                }
            }
        )*
    };
}

typed_into_config_value!(
    Range,
    DynamicRange,
    Point,
    Position,
    PercentageOfSide,
    PercentageRange,
    ColorSelection,
    ArcPath,
    Opaque,
);

impl From<Callable> for ConfigValue {
    fn from(v: Callable) -> Self {
        Self::Callable(v)
    }
}

impl From<bool> for ConfigValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<f64> for ConfigValue {
    fn from(v: f64) -> Self {
        Self::number(v)
    }
}

impl From<i64> for ConfigValue {
    fn from(v: i64) -> Self {
        Self::Number(v.into())
    }
}

impl From<&str> for ConfigValue {
    fn from(v: &str) -> Self {
        Self::String(v.to_owned())
    }
}

impl From<String> for ConfigValue {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<EffectConfig> for ConfigValue {
    fn from(v: EffectConfig) -> Self {
        Self::Object(v)
    }
}

/// Insertion-ordered property map of one effect's configuration.
///
/// Order matters: schema fields are emitted in property order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EffectConfig {
    entries: Vec<(String, ConfigValue)>,
}

impl EffectConfig {
    /// Empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of properties.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` when there are no properties.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up a property.
    pub fn get(&self, name: &str) -> Option<&ConfigValue> {
        self.entries.iter().find(|(k, _)| k == name).map(|(_, v)| v)
    }

    /// `true` when the property exists.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Set a property, keeping its original position when it already exists.
    ///
    /// Returns the previous value, if any.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        value: impl Into<ConfigValue>,
    ) -> Option<ConfigValue> {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == name) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((name, value));
                None
            }
        }
    }

    /// Builder-style [`EffectConfig::insert`].
    pub fn with(mut self, name: impl Into<String>, value: impl Into<ConfigValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Iterate properties in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ConfigValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Property names in order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Rebuild the map with every value passed through `f`, keeping names and order.
    pub fn map_values(&self, mut f: impl FnMut(&ConfigValue) -> ConfigValue) -> Self {
        self.entries
            .iter()
            .map(|(k, v)| (k.clone(), f(v)))
            .collect()
    }
}

impl FromIterator<(String, ConfigValue)> for EffectConfig {
    fn from_iter<I: IntoIterator<Item = (String, ConfigValue)>>(iter: I) -> Self {
        let mut cfg = Self::new();
        for (k, v) in iter {
            cfg.insert(k, v);
        }
        cfg
    }
}

impl IntoIterator for EffectConfig {
    type Item = (String, ConfigValue);
    type IntoIter = std::vec::IntoIter<(String, ConfigValue)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/value/config.rs"]
mod tests;
