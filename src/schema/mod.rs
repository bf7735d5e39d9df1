//! Editable field schemas derived from default instances.

pub(crate) mod cache;
pub(crate) mod field;
pub(crate) mod synth;
