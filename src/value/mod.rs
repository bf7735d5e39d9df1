//! Configuration values and their wire encoding.

pub(crate) mod config;
pub(crate) mod typed;
pub(crate) mod wire;
