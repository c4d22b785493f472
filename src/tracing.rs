//! Debug tracing infrastructure for development diagnostics
//!
//! Provides structured logging with scoped filtering for debugging drag
//! gestures and layout transitions.
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=layout=debug,drag=trace` - scoped filtering
//! - `RUST_LOG=gridock::update=debug` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/gridock/logs/gridock.log` with daily rotation.
//! File logging uses debug level by default for more verbose troubleshooting.

use std::collections::BTreeMap;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::model::{AppModel, CellRect, ModuleId, Window, WindowId};

/// Initialize tracing subscriber with console and file logging
///
/// Console output respects RUST_LOG env var (default `warn`). File logging
/// writes to `~/.config/gridock/logs/gridock.log` with daily rotation.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Console goes to stderr so replay output on stdout stays parseable
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    // File layer - always debug level for troubleshooting
    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender =
                tracing_appender::rolling::daily(logs_dir, crate::config_paths::LOG_FILE_PREFIX);
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {:#}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight snapshot of the visible layout for diffing
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutSnapshot {
    pub windows: BTreeMap<WindowId, WindowInfo>,
    pub transient: Option<WindowId>,
    pub dragging: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WindowInfo {
    pub rect: CellRect,
    pub modules: Vec<ModuleId>,
    pub acting: Option<ModuleId>,
}

impl WindowInfo {
    fn from_window(window: &Window) -> Self {
        Self {
            rect: window.rect(),
            modules: window.module_ids(),
            acting: window.acting_module_id,
        }
    }
}

impl LayoutSnapshot {
    /// Snapshot what a renderer would currently draw (preview while dragging)
    pub fn from_model(model: &AppModel) -> Self {
        let preview = model.session.active().map(|drag| &drag.preview);
        let windows = match preview {
            Some(preview) => preview
                .windows()
                .map(|view| (view.window.id, WindowInfo::from_window(view.window)))
                .collect(),
            None => model
                .layout
                .windows
                .iter()
                .map(|w| (w.id, WindowInfo::from_window(w)))
                .collect(),
        };
        Self {
            windows,
            transient: preview.and_then(|p| p.transient.as_ref().map(|w| w.id)),
            dragging: preview.is_some(),
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &LayoutSnapshot) -> Option<String> {
        let mut changes = Vec::new();

        if self.dragging != other.dragging {
            changes.push(if other.dragging {
                "drag started".to_string()
            } else {
                "drag finished".to_string()
            });
        }

        for id in self.windows.keys() {
            if !other.windows.contains_key(id) {
                changes.push(format!("{} removed", id));
            }
        }

        for (id, after) in &other.windows {
            let Some(before) = self.windows.get(id) else {
                changes.push(format!("{} added at ({},{})", id, after.rect.col, after.rect.row));
                continue;
            };
            if before.rect != after.rect {
                changes.push(format!(
                    "{}: ({},{} {}x{}) → ({},{} {}x{})",
                    id,
                    before.rect.col,
                    before.rect.row,
                    before.rect.width,
                    before.rect.height,
                    after.rect.col,
                    after.rect.row,
                    after.rect.width,
                    after.rect.height
                ));
            }
            if before.modules != after.modules {
                changes.push(format!(
                    "{}: tabs {:?} → {:?}",
                    id, before.modules, after.modules
                ));
            }
            if before.acting != after.acting {
                changes.push(format!(
                    "{}: acting {:?} → {:?}",
                    id, before.acting, after.acting
                ));
            }
        }

        if self.transient != other.transient {
            changes.push(format!(
                "transient {:?} → {:?}",
                self.transient, other.transient
            ));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}
