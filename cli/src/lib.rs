//! `pmctl` - inspect the Parakeet model catalog and see how model names resolve.

pub mod render;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use parakeet_registry::config::Config;
use parakeet_registry::params::TranscriptionParams;
use parakeet_registry::{ModelRegistry, Quantization};
use tracing::{debug, info};

use crate::render::Resolution;

#[derive(Parser, Debug)]
#[command(name = "pmctl")]
#[command(about = "Parakeet model catalog - list and resolve speech recognition models")]
#[command(version)]
pub struct Cli {
    /// Print JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Config file to use instead of ~/.config/parakeet-models/config.toml
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List catalog models
    List {
        /// Only show models with this quantization: int8, fp16 or none
        #[arg(long, value_parser = parse_quantization_filter)]
        quantization: Option<QuantizationFilter>,
    },
    /// Show a catalog model by exact name
    Show { name: String },
    /// Resolve a model name, falling back to the default model
    Resolve {
        /// Name to resolve (defaults to the configured model)
        name: Option<String>,
    },
    /// Resolve the model for OpenAI-style transcription parameters given as JSON
    Request { params: String },
    /// Verify catalog invariants
    Check,
}

/// Quantization filter where `None` selects full precision models.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuantizationFilter(pub Option<Quantization>);

fn parse_quantization_filter(value: &str) -> Result<QuantizationFilter, String> {
    if value == "none" {
        return Ok(QuantizationFilter(None));
    }
    value
        .parse::<Quantization>()
        .map(|q| QuantizationFilter(Some(q)))
        .map_err(|e| e.to_string())
}

/// Load the config from an explicit path, or from the default location.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

/// Entry point for the `pmctl` binary.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;
    parakeet_registry::logging::init_logging(config.logging.level)?;

    let output = execute(&cli, &config)?;
    print!("{output}");
    Ok(())
}

/// Run a parsed command and return what it prints.
pub fn execute(cli: &Cli, config: &Config) -> Result<String> {
    let registry = ModelRegistry::builtin();
    debug!(command = ?cli.command, "Executing command");

    match &cli.command {
        Commands::List { quantization } => {
            let entries = registry
                .entries()
                .filter(|entry| quantization.is_none_or(|f| f.0 == entry.quantization));
            if cli.json {
                render::list_json(entries, registry.default_entry())
                    .map(|json| json + "\n")
                    .context("Failed to serialize model list")
            } else {
                Ok(render::list_text(entries, registry.default_entry()))
            }
        }
        Commands::Show { name } => {
            let entry = registry
                .lookup(name)
                .with_context(|| format!("Unknown model: {name}"))?;
            if cli.json {
                to_json(entry)
            } else {
                Ok(render::entry_text(entry))
            }
        }
        Commands::Resolve { name } => {
            let requested = name.as_deref().unwrap_or(&config.model.name);
            let resolution = Resolution::new(requested, registry.resolve(requested));
            render_resolution(cli, &resolution)
        }
        Commands::Request { params } => {
            let params: TranscriptionParams = serde_json::from_str(params)
                .context("Failed to parse transcription parameters as JSON")?;
            params.validate()?;
            let resolution = Resolution::new(&params.model, params.model_entry());
            render_resolution(cli, &resolution)
        }
        Commands::Check => {
            registry.validate().context("Model catalog is invalid")?;
            let count = registry.entries().count();
            info!(models = count, "Catalog invariants hold");
            Ok(format!(
                "catalog ok: {count} models, default {}\n",
                registry.default_entry().name
            ))
        }
    }
}

fn render_resolution(cli: &Cli, resolution: &Resolution) -> Result<String> {
    if resolution.fallback {
        info!(
            requested = %resolution.requested,
            model = resolution.model.name,
            "Requested model not in catalog, using default"
        );
    }
    if cli.json {
        to_json(resolution)
    } else {
        Ok(render::resolution_text(resolution))
    }
}

fn to_json(value: &impl serde::Serialize) -> Result<String> {
    serde_json::to_string_pretty(value)
        .map(|json| json + "\n")
        .context("Failed to serialize output as JSON")
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
