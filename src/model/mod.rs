//! Application model - the complete state of the docking grid
//!
//! This module contains all the state types following the Elm Architecture pattern.

pub mod drag;
pub mod ids;
pub mod layout;
pub mod samples;
pub mod session;

pub use drag::{DragItem, DragKind, DragKinds, DragUpdate, DropHit, DropTarget};
pub use ids::{IdSource, ModuleId, SequentialIds, WindowId};
pub use layout::{CellRect, Layout, Module, ModuleKind, Window};
pub use samples::Demo;
pub use session::{ActiveDrag, DragSession, PreviewLayout, WindowView};

use crate::config::GridConfig;
use crate::error::LayoutResult;
use crate::view::geometry::GridMetrics;

/// The complete application model
#[derive(Debug, Clone)]
pub struct AppModel {
    /// The committed layout
    pub layout: Layout,
    /// The gesture in progress, if any
    pub session: DragSession,
    /// Grid dimensions
    pub config: GridConfig,
    /// Id generator for windows created during gestures
    pub ids: SequentialIds,
}

impl AppModel {
    /// Create a model around an initial layout supplied by the host
    ///
    /// The layout is validated against the configured grid first.
    pub fn new(layout: Layout, config: GridConfig) -> LayoutResult<Self> {
        layout.validate(config.grid_size())?;
        let ids = SequentialIds::after(&layout);
        Ok(Self {
            layout,
            session: DragSession::Idle,
            config,
            ids,
        })
    }

    /// Create a model from one of the built-in layouts
    pub fn with_demo(demo: Demo, config: GridConfig) -> Self {
        let mut ids = SequentialIds::new();
        let layout = demo.build(&mut ids);
        Self {
            layout,
            session: DragSession::Idle,
            config,
            ids,
        }
    }

    #[inline]
    pub fn grid_size(&self) -> i32 {
        self.config.grid_size()
    }

    #[inline]
    pub fn metrics(&self) -> GridMetrics {
        self.config.metrics()
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_active()
    }

    /// The gesture preview, while a drag is running
    pub fn preview(&self) -> Option<&PreviewLayout> {
        self.session.active().map(|drag| &drag.preview)
    }

    /// What a renderer should draw right now: the preview while dragging,
    /// otherwise the committed layout
    pub fn visible_windows(&self) -> Vec<WindowView<'_>> {
        match self.preview() {
            Some(preview) => preview.windows().collect(),
            None => self
                .layout
                .windows
                .iter()
                .map(|window| WindowView {
                    window,
                    is_transient: false,
                })
                .collect(),
        }
    }
}
