//! Grid configuration persistence
//!
//! Stores grid dimensions in `~/.config/gridock/config.yaml`

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::view::geometry::GridMetrics;

/// Grid configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Number of rows in the grid
    #[serde(default = "default_cells")]
    pub rows: i32,
    /// Number of columns in the grid
    #[serde(default = "default_cells")]
    pub cols: i32,
    /// Side length of one cell in pixels
    #[serde(default = "default_cell_size")]
    pub cell_size: f64,
    /// Space between cells and around the grid edge, in pixels
    #[serde(default = "default_gap_size")]
    pub gap_size: f64,
}

fn default_cells() -> i32 {
    32
}

fn default_cell_size() -> f64 {
    100.0
}

fn default_gap_size() -> f64 {
    4.0
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rows: default_cells(),
            cols: default_cells(),
            cell_size: default_cell_size(),
            gap_size: default_gap_size(),
        }
    }
}

impl GridConfig {
    /// Cells per side of the (square) clamping grid
    pub fn grid_size(&self) -> i32 {
        self.rows.max(self.cols)
    }

    pub fn metrics(&self) -> GridMetrics {
        GridMetrics::new(self.cell_size, self.gap_size, self.grid_size())
    }

    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => {
                tracing::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("{:#}, using defaults", e);
                Self::default()
            }
        }
    }

    /// Load config from an explicit path
    ///
    /// Non-positive dimensions are rejected so the grid is never degenerate.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        let config: GridConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config at {}", path.display()))?;
        config
            .check()
            .with_context(|| format!("Invalid config at {}", path.display()))?;
        Ok(config)
    }

    fn check(&self) -> anyhow::Result<()> {
        if self.rows < 1 || self.cols < 1 {
            anyhow::bail!("grid must be at least 1x1, got {}x{}", self.cols, self.rows);
        }
        if self.cell_size <= 0.0 || self.gap_size < 0.0 {
            anyhow::bail!(
                "cell_size must be positive and gap_size non-negative, got {} and {}",
                self.cell_size,
                self.gap_size
            );
        }
        Ok(())
    }

    /// Save config to an explicit path
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let content = serde_yaml::to_string(self).context("Failed to serialize config")?;

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_size_is_larger_side() {
        let config = GridConfig {
            rows: 10,
            cols: 24,
            ..GridConfig::default()
        };
        assert_eq!(config.grid_size(), 24);
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let config: GridConfig = serde_yaml::from_str("rows: 12\n").unwrap();
        assert_eq!(config.rows, 12);
        assert_eq!(config.cols, 32);
        assert_eq!(config.cell_size, 100.0);
        assert_eq!(config.gap_size, 4.0);
    }

    #[test]
    fn test_metrics_carry_grid_size() {
        let metrics = GridConfig::default().metrics();
        assert_eq!(metrics.grid_size, 32);
        assert_eq!(metrics.pitch(), 104.0);
    }
}
