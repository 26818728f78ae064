//! OpenAI-compatible transcription request parameters.
//!
//! Mirrors the form fields of `POST /v1/audio/transcriptions` with defaults
//! that select the Parakeet catalog rather than `whisper-1`.

use crate::catalog::{self, DEFAULT_MODEL, ModelEntry};
use anyhow::{Result, ensure};
use serde::{Deserialize, Serialize};

/// Output format requested by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ResponseFormat {
    #[default]
    Json,
    Text,
    VerboseJson,
    Srt,
    Vtt,
}

/// Transcription request parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranscriptionParams {
    /// Requested model name; anything outside the catalog resolves to the default.
    pub model: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
    pub response_format: ResponseFormat,
    pub temperature: f32,
}

impl Default for TranscriptionParams {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            language: None,
            prompt: None,
            response_format: ResponseFormat::default(),
            temperature: 0.0,
        }
    }
}

impl TranscriptionParams {
    /// Catalog entry that will serve this request.
    pub fn model_entry(&self) -> &'static ModelEntry {
        catalog::resolve(&self.model)
    }

    /// True when `model` named a catalog entry and no fallback applies.
    pub fn is_exact_model(&self) -> bool {
        catalog::lookup(&self.model).is_some()
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(
            (0.0..=1.0).contains(&self.temperature),
            "temperature must be between 0 and 1, got {}",
            self.temperature
        );
        Ok(())
    }
}

#[cfg(test)]
#[path = "params_test.rs"]
mod tests;
