//! gridock - Elm-style grid docking engine
//!
//! This crate provides the core types and logic for a tiling layout of tabbed
//! windows on a square cell grid: dragging tabs between windows, extracting
//! them into new windows, merging, moving and resizing windows.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod error;
pub mod messages;
pub mod model;
pub mod tracing;
pub mod update;
pub mod view;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::GridConfig;
pub use error::{LayoutError, LayoutResult};
pub use messages::Msg;
pub use model::AppModel;
