//! Command-line argument parsing for the replay tool
//!
//! Supports:
//! - Starting from a layout file or a built-in demo layout
//! - Replaying a recorded script of messages
//! - Printing the resulting layout as JSON or YAML

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, ValueEnum};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::GridConfig;
use crate::messages::Msg;
use crate::model::{Demo, Layout};

/// Replay drag gestures against a grid layout
#[derive(Parser, Debug)]
#[command(
    name = "gridock",
    version,
    about = "Replay drag gestures against a grid layout"
)]
pub struct CliArgs {
    /// Grid config file (defaults to ~/.config/gridock/config.yaml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Initial layout file (.json, .yaml or .yml)
    #[arg(long, value_name = "PATH", conflicts_with = "demo")]
    pub layout: Option<PathBuf>,

    /// Built-in layout to start from when no layout file is given
    #[arg(long, value_enum)]
    pub demo: Option<DemoArg>,

    /// Script of messages to replay (.json, .yaml or .yml)
    #[arg(long, value_name = "PATH")]
    pub script: Option<PathBuf>,

    /// Output format for the final layout
    #[arg(long, value_enum, default_value_t = Format::Json)]
    pub format: Format,

    /// Log rejected messages and continue instead of stopping
    #[arg(long)]
    pub keep_going: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DemoArg {
    TwoWindows,
    PriceLadders,
    Dense,
}

impl From<DemoArg> for Demo {
    fn from(arg: DemoArg) -> Self {
        match arg {
            DemoArg::TwoWindows => Demo::TwoWindows,
            DemoArg::PriceLadders => Demo::PriceLadders,
            DemoArg::Dense => Demo::Dense,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Json,
    Yaml,
}

impl Format {
    /// Pick a format from a file extension, JSON unless it says YAML
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml" | "yml") => Format::Yaml,
            _ => Format::Json,
        }
    }

    pub fn render<T: Serialize>(self, value: &T) -> anyhow::Result<String> {
        Ok(match self {
            Format::Json => serde_json::to_string_pretty(value)?,
            Format::Yaml => serde_yaml::to_string(value)?,
        })
    }
}

/// Where the session's layout comes from
#[derive(Debug, Clone)]
pub enum StartLayout {
    File(PathBuf),
    Demo(Demo),
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct ReplayConfig {
    pub grid: GridConfig,
    pub start: StartLayout,
    pub script: Option<PathBuf>,
    pub format: Format,
    pub keep_going: bool,
}

impl CliArgs {
    /// Convert parsed CLI args into replay configuration
    ///
    /// An explicit `--config` must load; the default location falls back to
    /// built-in values.
    pub fn into_config(self) -> anyhow::Result<ReplayConfig> {
        let grid = match &self.config {
            Some(path) => GridConfig::load_from(path)?,
            None => GridConfig::load(),
        };

        let start = match (self.layout, self.demo) {
            (Some(path), _) => StartLayout::File(path),
            (None, Some(demo)) => StartLayout::Demo(demo.into()),
            (None, None) => StartLayout::Demo(Demo::default()),
        };

        Ok(ReplayConfig {
            grid,
            start,
            script: self.script,
            format: self.format,
            keep_going: self.keep_going,
        })
    }
}

/// Read a JSON or YAML document, chosen by extension
pub fn read_document<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let value = match Format::from_path(path) {
        Format::Yaml => serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?,
        Format::Json => serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?,
    };
    Ok(value)
}

pub fn read_layout(path: &Path) -> anyhow::Result<Layout> {
    read_document(path)
}

pub fn read_script(path: &Path) -> anyhow::Result<Vec<Msg>> {
    read_document(path)
}
