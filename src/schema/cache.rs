//! Memoized default instances and schemas, keyed by effect identifier.
//!
//! Entries never expire on their own. Callers must invoke [`SchemaCache::clear_cache`]
//! whenever the effect catalog changes (plugin installed, removed or reloaded), otherwise
//! schemas of effects whose shape changed go stale.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, TryLockError};

use serde_json::Value;

use crate::foundation::core::CanvasDimensions;
use crate::foundation::error::{FxError, FxResult};
use crate::schema::field::FieldSchema;
use crate::schema::synth::{SchemaOpts, synthesize_with};
use crate::value::config::EffectConfig;
use crate::value::wire::config_from_wire;

/// Port to the process that owns effect definitions.
pub trait ConfigAuthority {
    /// Produce a fresh default configuration for `effect_id`, serialized with the wire tag
    /// vocabulary, for an effect rendered on `canvas`.
    fn default_config(&self, effect_id: &str, canvas: CanvasDimensions) -> FxResult<Value>;
}

impl<A: ConfigAuthority + ?Sized> ConfigAuthority for &A {
    fn default_config(&self, effect_id: &str, canvas: CanvasDimensions) -> FxResult<Value> {
        (**self).default_config(effect_id, canvas)
    }
}

/// Authority backed by a fixed table of serialized defaults.
#[derive(Clone, Debug, Default)]
pub struct InMemoryAuthority {
    defaults: HashMap<String, Value>,
}

impl InMemoryAuthority {
    /// Empty authority.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) the serialized default for an effect.
    pub fn register(&mut self, effect_id: impl Into<String>, default_config: Value) {
        self.defaults.insert(effect_id.into(), default_config);
    }

    /// Remove an effect. Returns `true` when it was registered.
    pub fn unregister(&mut self, effect_id: &str) -> bool {
        self.defaults.remove(effect_id).is_some()
    }
}

impl ConfigAuthority for InMemoryAuthority {
    fn default_config(&self, effect_id: &str, _canvas: CanvasDimensions) -> FxResult<Value> {
        self.defaults
            .get(effect_id)
            .cloned()
            .ok_or_else(|| FxError::authority(effect_id, "effect is not registered"))
    }
}

/// A default instance together with its synthesized schema.
#[derive(Clone, Debug, PartialEq)]
pub struct CachedSchema {
    /// Effect identifier the entry was fetched for.
    pub effect_id: String,
    /// Decoded default configuration.
    pub default_instance: EffectConfig,
    /// Fields synthesized from `default_instance`.
    pub fields: Vec<FieldSchema>,
}

/// Per-identifier slot. Its lock is held for the whole fetch, so concurrent callers for the
/// same identifier queue behind one outstanding authority request.
type Slot = Arc<Mutex<Option<Arc<CachedSchema>>>>;

/// Memoizing front of a [`ConfigAuthority`].
pub struct SchemaCache<A> {
    authority: A,
    opts: SchemaOpts,
    entries: Mutex<HashMap<String, Slot>>,
}

impl<A: ConfigAuthority> SchemaCache<A> {
    /// Cache with default synthesis options.
    pub fn new(authority: A) -> Self {
        Self::with_opts(authority, SchemaOpts::default())
    }

    /// Cache with explicit synthesis options.
    pub fn with_opts(authority: A, opts: SchemaOpts) -> Self {
        Self {
            authority,
            opts,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// The wrapped authority.
    pub fn authority(&self) -> &A {
        &self.authority
    }

    /// Default instance and schema for `effect_id`, fetched at most once per identifier
    /// until the cache is cleared.
    ///
    /// Concurrent callers for the same identifier wait for the outstanding request instead of
    /// issuing their own. Authority failures are returned and not cached; the next waiter
    /// retries.
    #[tracing::instrument(skip(self, canvas))]
    pub fn schema_for(
        &self,
        effect_id: &str,
        canvas: CanvasDimensions,
    ) -> FxResult<Arc<CachedSchema>> {
        let slot = Arc::clone(self.lock().entry(effect_id.to_owned()).or_default());
        let mut filled = slot.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(hit) = filled.as_ref() {
            tracing::debug!("schema cache hit");
            return Ok(Arc::clone(hit));
        }

        tracing::debug!("schema cache miss, fetching default instance");
        let fresh = Arc::new(self.fetch(effect_id, canvas)?);
        *filled = Some(Arc::clone(&fresh));
        Ok(fresh)
    }

    fn fetch(&self, effect_id: &str, canvas: CanvasDimensions) -> FxResult<CachedSchema> {
        let payload = self.authority.default_config(effect_id, canvas)?;
        let default_instance = config_from_wire(&payload)
            .map_err(|e| FxError::authority(effect_id, e.to_string()))?;
        let fields = synthesize_with(&default_instance, &self.opts);
        Ok(CachedSchema {
            effect_id: effect_id.to_owned(),
            default_instance,
            fields,
        })
    }

    /// Fresh copy of the cached default instance for `effect_id`.
    pub fn default_instance(
        &self,
        effect_id: &str,
        canvas: CanvasDimensions,
    ) -> FxResult<EffectConfig> {
        Ok(self.schema_for(effect_id, canvas)?.default_instance.clone())
    }

    /// Drop every cached entry. Fetches already in flight complete for their callers but
    /// are not kept.
    pub fn clear_cache(&self) {
        let mut entries = self.lock();
        tracing::debug!(entries = entries.len(), "clearing schema cache");
        entries.clear();
    }

    /// Drop the entry of one effect. Returns `true` when a cached entry was removed.
    pub fn invalidate(&self, effect_id: &str) -> bool {
        self.lock().remove(effect_id).is_some_and(|slot| is_filled(&slot))
    }

    /// Number of cached entries. Fetches still in flight are not counted.
    pub fn len(&self) -> usize {
        self.lock().values().filter(|slot| is_filled(slot)).count()
    }

    /// `true` when nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, Slot>> {
        // Slots are only ever added or removed whole, so a poisoned map is still consistent.
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn is_filled(slot: &Slot) -> bool {
    match slot.try_lock() {
        Ok(filled) => filled.is_some(),
        Err(TryLockError::Poisoned(poisoned)) => poisoned.into_inner().is_some(),
        Err(TryLockError::WouldBlock) => false,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/schema/cache.rs"]
mod tests;
