//! Shared utilities for parakeet-models.

pub mod dirs;
