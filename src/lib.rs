//! fxconfig is the effect-configuration data model of a generative-art authoring tool.
//!
//! Effects are defined by an external configuration authority that hands out default
//! instances as JSON. This crate turns those payloads into typed values and editable field
//! schemas, and keeps canvas-relative geometry correct when a project changes resolution:
//!
//! - Decode and encode tagged values ([`from_wire`], [`to_wire`])
//! - Derive editor field descriptors from a default instance ([`synthesize`], [`SchemaCache`])
//! - Look up canvas sizes by named profile ([`get_dimensions`], [`parse_alias`])
//! - Rescale positions and arcs between canvas sizes ([`scale_effects`], [`scale_wire`])
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod effect;
mod foundation;
mod resolution;
mod scale;
mod schema;
mod value;

pub use crate::foundation::core::{CanvasDimensions, ScaleFactors};
pub use crate::foundation::error::{FxError, FxResult};

pub use crate::value::config::{Callable, ConfigValue, EffectConfig};
pub use crate::value::typed::{
    ArcDirection, ArcPath, ColorSelection, ColorSelectionType, DEFAULT_COLOR_VALUE,
    DynamicRange, KIND_KEY, METADATA_PREFIX, NON_DATA_KEY, Opaque, PercentageOfSide,
    PercentageRange, Point, Position, Range, Side, TYPE_KEY, TagChannel, TypedValue,
    is_metadata_name, kind, tag,
};
pub use crate::value::wire::{
    config_from_wire, config_to_wire, from_json_str, from_wire, to_wire, typed_to_wire,
};

pub use crate::effect::model::{Effect, effects_from_json};

pub use crate::schema::cache::{CachedSchema, ConfigAuthority, InMemoryAuthority, SchemaCache};
pub use crate::schema::field::{Constraints, FieldKind, FieldSchema, humanize};
pub use crate::schema::synth::{SchemaOpts, synthesize, synthesize_with};

pub use crate::resolution::catalog::{ResolutionProfile, get_dimensions, profile, profiles};
pub use crate::resolution::lookup::{
    closest_profile, display_label, parse_alias, resolve_dimensions,
};

pub use crate::scale::scaler::{
    RadiusPolicy, ScaleOpts, scale_config, scale_effects, scale_effects_between,
    scale_effects_with, scale_value, scale_wire,
};
