use crate::foundation::error::{FxError, FxResult};
use crate::value::config::EffectConfig;

/// One entry of a project's effect list.
///
/// Secondary and keyframe effects are full effects of their own and carry their own
/// configurations; they are nested here the way the generation engine expects them.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Effect {
    /// Stable identifier of this entry within the project.
    pub id: String,
    /// Registry name of the effect (the configuration authority's effect identifier).
    pub name: String,
    /// The effect's configuration.
    #[serde(default)]
    pub config: EffectConfig,
    /// Effects applied on top of this one's output.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub secondary_effects: Vec<Effect>,
    /// Effects triggered at specific frames.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keyframe_effects: Vec<Effect>,
    /// Properties of the entry this model does not interpret (`visible`, `className`, ...),
    /// kept verbatim.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Effect {
    /// Effect without nested sub-effects.
    pub fn new(id: impl Into<String>, name: impl Into<String>, config: EffectConfig) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            config,
            secondary_effects: Vec::new(),
            keyframe_effects: Vec::new(),
            extra: serde_json::Map::new(),
        }
    }

    /// Number of effects in this tree, including `self`.
    pub fn tree_len(&self) -> usize {
        1 + self
            .secondary_effects
            .iter()
            .chain(&self.keyframe_effects)
            .map(Effect::tree_len)
            .sum::<usize>()
    }

    /// Check identifiers on this effect and every nested effect.
    pub fn validate(&self) -> FxResult<()> {
        if self.id.trim().is_empty() {
            return Err(FxError::validation("effect id must be non-empty"));
        }
        if self.name.trim().is_empty() {
            return Err(FxError::validation(format!(
                "effect '{}' must name a registered effect",
                self.id
            )));
        }
        for sub in self.secondary_effects.iter().chain(&self.keyframe_effects) {
            sub.validate()?;
        }
        Ok(())
    }
}

/// Parse a project's effect list from JSON text.
pub fn effects_from_json(s: &str) -> FxResult<Vec<Effect>> {
    let effects: Vec<Effect> = serde_json::from_str(s)?;
    for effect in &effects {
        effect.validate()?;
    }
    Ok(effects)
}

#[cfg(test)]
#[path = "../../tests/unit/effect/model.rs"]
mod tests;
