//! Catalog of supported speech recognition models.
//!
//! The catalog is a compile-time table of Parakeet TDT variants. Callers
//! either look a name up exactly or resolve it, in which case unknown names
//! fall back to the default entry.

use anyhow::{Result, bail, ensure};
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Name of the entry used when a requested model is not in the catalog.
pub const DEFAULT_MODEL: &str = "parakeet-tdt-0.6b-v3";

/// Weight precision of a model variant.
///
/// Full precision (FP32) models carry no quantization and are represented
/// as `None` wherever an `Option<Quantization>` appears.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Quantization {
    Int8,
    Fp16,
}

impl Quantization {
    pub fn as_str(&self) -> &'static str {
        match self {
            Quantization::Int8 => "int8",
            Quantization::Fp16 => "fp16",
        }
    }

    /// Label for an optional quantization, `"none"` for full precision.
    pub fn label(quantization: Option<Quantization>) -> &'static str {
        quantization.map_or("none", |q| q.as_str())
    }
}

impl fmt::Display for Quantization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Quantization {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "int8" => Ok(Quantization::Int8),
            "fp16" => Ok(Quantization::Fp16),
            other => bail!("Unknown quantization: {other}"),
        }
    }
}

/// A single catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ModelEntry {
    /// Catalog key, as requested by callers.
    pub name: &'static str,
    /// Identifier of the model artifact (Hugging Face repo or onnx-asr alias).
    pub backing_id: &'static str,
    /// Weight precision, `None` for full precision.
    pub quantization: Option<Quantization>,
    /// Human readable label.
    pub description: &'static str,
}

static PARAKEET_TDT_V3_INT8: ModelEntry = ModelEntry {
    name: DEFAULT_MODEL,
    backing_id: "nemo-parakeet-tdt-0.6b-v3",
    quantization: Some(Quantization::Int8),
    description: "INT8 (fastest)",
};

static PARAKEET_TDT_V3_FP32: ModelEntry = ModelEntry {
    name: "istupakov/parakeet-tdt-0.6b-v3-onnx",
    backing_id: "istupakov/parakeet-tdt-0.6b-v3-onnx",
    quantization: None,
    description: "FP32",
};

static PARAKEET_TDT_FP16: ModelEntry = ModelEntry {
    name: "grikdotnet/parakeet-tdt-0.6b-fp16",
    backing_id: "grikdotnet/parakeet-tdt-0.6b-fp16",
    quantization: Some(Quantization::Fp16),
    description: "FP16",
};

static CATALOG: [&ModelEntry; 3] = [
    &PARAKEET_TDT_V3_INT8,
    &PARAKEET_TDT_V3_FP32,
    &PARAKEET_TDT_FP16,
];

/// The built-in model registry.
pub static REGISTRY: ModelRegistry = ModelRegistry {
    entries: &CATALOG,
    default: &PARAKEET_TDT_V3_INT8,
};

/// Read-only table of model entries with a designated default.
#[derive(Debug)]
pub struct ModelRegistry {
    entries: &'static [&'static ModelEntry],
    default: &'static ModelEntry,
}

impl ModelRegistry {
    /// The process-wide catalog.
    pub fn builtin() -> &'static ModelRegistry {
        &REGISTRY
    }

    /// Exact lookup by name.
    pub fn lookup(&self, name: &str) -> Option<&'static ModelEntry> {
        self.entries.iter().copied().find(|entry| entry.name == name)
    }

    /// Resolve a requested name, falling back to the default entry.
    pub fn resolve(&self, requested: &str) -> &'static ModelEntry {
        match self.lookup(requested) {
            Some(entry) => entry,
            None => {
                debug!(
                    requested = requested,
                    fallback = self.default.name,
                    "Unknown model requested, using default"
                );
                self.default
            }
        }
    }

    pub fn default_entry(&self) -> &'static ModelEntry {
        self.default
    }

    pub fn contains(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    /// All entries in catalog order.
    pub fn entries(&self) -> impl Iterator<Item = &'static ModelEntry> + '_ {
        self.entries.iter().copied()
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries().map(|entry| entry.name)
    }

    /// Check the table invariants: unique non-empty names, populated
    /// fields, and a default that is one of the entries.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for entry in self.entries() {
            ensure!(!entry.name.is_empty(), "Model entry with empty name");
            ensure!(
                seen.insert(entry.name),
                "Duplicate model entry: {}",
                entry.name
            );
            ensure!(
                !entry.backing_id.is_empty(),
                "Model {} has an empty backing id",
                entry.name
            );
            ensure!(
                !entry.description.is_empty(),
                "Model {} has an empty description",
                entry.name
            );
        }

        ensure!(
            self.lookup(self.default.name) == Some(self.default),
            "Default model {} is not in the catalog",
            self.default.name
        );

        Ok(())
    }
}

/// Exact lookup in the built-in catalog.
pub fn lookup(name: &str) -> Option<&'static ModelEntry> {
    REGISTRY.lookup(name)
}

/// Resolve against the built-in catalog, falling back to [`DEFAULT_MODEL`].
pub fn resolve(requested: &str) -> &'static ModelEntry {
    REGISTRY.resolve(requested)
}

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;
