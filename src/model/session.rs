//! Drag session state - the preview overlay that lives only while a gesture runs
//!
//! The committed [`Layout`] never holds a half-finished gesture. While a tab is
//! being dragged out of its window, the window it would land in is kept beside
//! the layout as the *transient* window of a [`PreviewLayout`]. Ending the
//! gesture either materializes the preview into a new committed layout or
//! throws it away.

use super::drag::DragItem;
use super::ids::{ModuleId, WindowId};
use super::layout::{Layout, Module, Window};

// ============================================================================
// Preview layout
// ============================================================================

/// A layout plus at most one window that exists only for the current gesture
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PreviewLayout {
    pub layout: Layout,
    /// Window created by dragging a tab onto the grid, not yet committed
    pub transient: Option<Window>,
}

/// A window as seen by a renderer during a gesture
#[derive(Debug, Clone, Copy)]
pub struct WindowView<'a> {
    pub window: &'a Window,
    pub is_transient: bool,
}

impl PreviewLayout {
    pub fn new(layout: Layout) -> Self {
        Self {
            layout,
            transient: None,
        }
    }

    /// Committed windows in render order, then the transient window
    pub fn windows(&self) -> impl Iterator<Item = WindowView<'_>> {
        self.layout
            .windows
            .iter()
            .map(|window| WindowView {
                window,
                is_transient: false,
            })
            .chain(self.transient.iter().map(|window| WindowView {
                window,
                is_transient: true,
            }))
    }

    pub fn window(&self, window_id: WindowId) -> Option<&Window> {
        self.layout
            .window(window_id)
            .or_else(|| self.transient.as_ref().filter(|w| w.id == window_id))
    }

    pub(crate) fn window_mut(&mut self, window_id: WindowId) -> Option<&mut Window> {
        if let Some(window) = self.layout.window_mut(window_id) {
            return Some(window);
        }
        self.transient.as_mut().filter(|w| w.id == window_id)
    }

    pub fn is_transient(&self, window_id: WindowId) -> bool {
        self.transient.as_ref().is_some_and(|w| w.id == window_id)
    }

    /// The window (committed or transient) that owns `module_id`
    pub fn module_owner(&self, module_id: ModuleId) -> Option<&Window> {
        self.layout
            .module_owner(module_id)
            .or_else(|| {
                self.transient
                    .as_ref()
                    .filter(|w| w.contains_module(module_id))
            })
    }

    /// Pull a module out of whichever window owns it
    ///
    /// A window left without tabs is removed, transient or not.
    pub(crate) fn detach_module(&mut self, module_id: ModuleId) -> Option<Module> {
        if self
            .transient
            .as_ref()
            .is_some_and(|w| w.contains_module(module_id))
        {
            let mut window = self.transient.take()?;
            let module = window.take_module(module_id);
            if !window.modules.is_empty() {
                self.transient = Some(window);
            }
            return module;
        }

        let index = self
            .layout
            .windows
            .iter()
            .position(|w| w.contains_module(module_id))?;
        let module = self.layout.windows[index].take_module(module_id);
        if self.layout.windows[index].modules.is_empty() {
            self.layout.windows.remove(index);
        }
        module
    }

    /// Turn the preview into a committed layout. The transient window, if
    /// any, becomes a permanent window appended last.
    pub fn materialize(self) -> Layout {
        let mut layout = self.layout;
        layout.windows.extend(self.transient);
        layout
    }
}

impl From<Layout> for PreviewLayout {
    fn from(layout: Layout) -> Self {
        PreviewLayout::new(layout)
    }
}

// ============================================================================
// Session
// ============================================================================

/// A gesture between activation and drop
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveDrag {
    pub item: DragItem,
    /// Number of drag-over events seen so far
    pub updates: u32,
    pub preview: PreviewLayout,
}

/// Whether a gesture is running
#[derive(Debug, Clone, Default, PartialEq)]
pub enum DragSession {
    #[default]
    Idle,
    Active(ActiveDrag),
}

impl DragSession {
    pub fn is_active(&self) -> bool {
        matches!(self, DragSession::Active(_))
    }

    pub fn active(&self) -> Option<&ActiveDrag> {
        match self {
            DragSession::Active(drag) => Some(drag),
            DragSession::Idle => None,
        }
    }

    pub fn active_mut(&mut self) -> Option<&mut ActiveDrag> {
        match self {
            DragSession::Active(drag) => Some(drag),
            DragSession::Idle => None,
        }
    }

    /// End the session, handing back the gesture if there was one
    pub fn take(&mut self) -> Option<ActiveDrag> {
        match std::mem::take(self) {
            DragSession::Active(drag) => Some(drag),
            DragSession::Idle => None,
        }
    }
}
