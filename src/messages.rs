//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types. Messages deserialize
//! from JSON or YAML so gestures can be recorded and replayed.

use serde::{Deserialize, Serialize};

use crate::model::{CellRect, DragItem, DragUpdate, Module, ModuleId, WindowId};

/// Direct user actions on the committed layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum LayoutMsg {
    /// Click on a tab
    SelectTab {
        window_id: WindowId,
        module_id: ModuleId,
    },
    /// Close a single tab; an emptied window stays on the grid
    CloseTab {
        window_id: WindowId,
        module_id: ModuleId,
    },
    /// Close a window and every tab in it
    CloseWindow { window_id: WindowId },
    /// Title-bar close button
    CloseActing { window_id: WindowId },
    /// Set a window's size directly, in cells
    ResizeWindow {
        window_id: WindowId,
        width: i32,
        height: i32,
    },
    /// Open a new window
    AddWindow {
        rect: CellRect,
        #[serde(default)]
        modules: Vec<Module>,
    },
    /// Append a tab to an existing window
    AddModule { window_id: WindowId, module: Module },
    /// Detach a tab without closing its window
    RemoveModule {
        window_id: WindowId,
        module_id: ModuleId,
    },
}

/// Pointer events of a drag gesture
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DragMsg {
    /// The pointer library activated a drag
    Begin { item: DragItem },
    /// The pointer moved
    Over(DragUpdate),
    /// The pointer was released
    End(DragUpdate),
    /// The gesture was aborted (Escape, lost capture)
    Cancel,
}

/// Top-level message type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Msg {
    /// Lifecycle operations on the committed layout
    Layout(LayoutMsg),
    /// Drag gesture events
    Drag(DragMsg),
}

// Convenience constructors for common messages
impl Msg {
    pub fn select_tab(window_id: WindowId, module_id: ModuleId) -> Self {
        Msg::Layout(LayoutMsg::SelectTab {
            window_id,
            module_id,
        })
    }

    pub fn close_tab(window_id: WindowId, module_id: ModuleId) -> Self {
        Msg::Layout(LayoutMsg::CloseTab {
            window_id,
            module_id,
        })
    }

    pub fn close_window(window_id: WindowId) -> Self {
        Msg::Layout(LayoutMsg::CloseWindow { window_id })
    }

    pub fn begin_drag(item: DragItem) -> Self {
        Msg::Drag(DragMsg::Begin { item })
    }

    pub fn drag_over(update: DragUpdate) -> Self {
        Msg::Drag(DragMsg::Over(update))
    }

    pub fn drag_end(update: DragUpdate) -> Self {
        Msg::Drag(DragMsg::End(update))
    }

    /// Whether this message fires at pointer-move frequency
    pub fn is_noisy(&self) -> bool {
        matches!(self, Msg::Drag(DragMsg::Over(_)))
    }
}
