//! Catalog of Parakeet speech recognition models and the rules for
//! selecting one from a caller-supplied name.

pub mod catalog;
pub mod config;
pub mod logging;
pub mod params;

pub use catalog::{DEFAULT_MODEL, ModelEntry, ModelRegistry, Quantization, lookup, resolve};
