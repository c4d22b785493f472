//! Layout state - windows on the grid and the modules (tabs) they own
//!
//! A [`Layout`] is an ordered list of [`Window`]s. Every mutator here is
//! copy-on-write: it borrows the current layout and returns the next one, so a
//! half-applied change is never observable. The update layer swaps the result
//! into the model in one assignment.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::ids::{IdSource, ModuleId, WindowId};
use crate::error::{LayoutError, LayoutResult};

// ============================================================================
// Modules
// ============================================================================

/// Which external renderer draws a module's content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ModuleKind {
    Greeting,
    Button,
    PriceLadder,
}

/// A single tab's content unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Module {
    pub id: ModuleId,
    #[serde(rename = "type")]
    pub kind: ModuleKind,
    pub title: String,
    /// Opaque properties handed to the renderer untouched
    #[serde(default)]
    pub props: serde_json::Map<String, serde_json::Value>,
}

impl Module {
    pub fn new(id: ModuleId, kind: ModuleKind, title: impl Into<String>) -> Self {
        Self {
            id,
            kind,
            title: title.into(),
            props: serde_json::Map::new(),
        }
    }

    pub fn with_prop(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.props.insert(key.into(), value.into());
        self
    }
}

// ============================================================================
// Cell geometry
// ============================================================================

/// A rectangle measured in grid cells, top-left corner 1-based
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellRect {
    pub col: i32,
    pub row: i32,
    pub width: i32,
    pub height: i32,
}

impl CellRect {
    pub fn new(col: i32, row: i32, width: i32, height: i32) -> Self {
        Self {
            col,
            row,
            width,
            height,
        }
    }

    /// Last column covered by this rect (inclusive)
    #[inline]
    pub fn last_col(&self) -> i32 {
        self.col + self.width - 1
    }

    /// Last row covered by this rect (inclusive)
    #[inline]
    pub fn last_row(&self) -> i32 {
        self.row + self.height - 1
    }

    /// Whether the rect lies on a `grid_size` grid
    ///
    /// Rows may sit at 0: move snapping lets a window touch the row above the
    /// grid while columns are kept at 1 or more.
    pub fn fits(&self, grid_size: i32) -> bool {
        self.col >= 1
            && self.row >= 0
            && self.last_col() <= grid_size
            && self.last_row() <= grid_size
    }
}

// ============================================================================
// Windows
// ============================================================================

/// A tile on the grid holding an ordered set of tabs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Window {
    pub id: WindowId,
    pub col: i32,
    pub row: i32,
    pub width: i32,
    pub height: i32,
    /// Tab order; insertion order is significant
    #[serde(default)]
    pub modules: Vec<Module>,
    /// The currently selected tab
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acting_module_id: Option<ModuleId>,
}

impl Window {
    /// Create a window whose first module (if any) is the acting one
    pub fn new(
        id: WindowId,
        col: i32,
        row: i32,
        width: i32,
        height: i32,
        modules: Vec<Module>,
    ) -> Self {
        let acting_module_id = modules.first().map(|m| m.id);
        Self {
            id,
            col,
            row,
            width,
            height,
            modules,
            acting_module_id,
        }
    }

    /// Create a window covering `rect`
    pub fn at(id: WindowId, rect: CellRect, modules: Vec<Module>) -> Self {
        Self::new(id, rect.col, rect.row, rect.width, rect.height, modules)
    }

    pub fn rect(&self) -> CellRect {
        CellRect::new(self.col, self.row, self.width, self.height)
    }

    pub fn contains_module(&self, module_id: ModuleId) -> bool {
        self.modules.iter().any(|m| m.id == module_id)
    }

    pub fn module_index(&self, module_id: ModuleId) -> Option<usize> {
        self.modules.iter().position(|m| m.id == module_id)
    }

    /// Get the currently selected module
    pub fn acting_module(&self) -> Option<&Module> {
        let id = self.acting_module_id?;
        self.modules.iter().find(|m| m.id == id)
    }

    pub fn module_ids(&self) -> Vec<ModuleId> {
        self.modules.iter().map(|m| m.id).collect()
    }

    /// Detach a module. If it was acting, the first remaining tab takes over.
    pub fn take_module(&mut self, module_id: ModuleId) -> Option<Module> {
        let index = self.module_index(module_id)?;
        let module = self.modules.remove(index);
        if self.acting_module_id == Some(module_id) {
            self.acting_module_id = self.modules.first().map(|m| m.id);
        }
        Some(module)
    }

    /// Append a module as the last tab
    pub fn push_module(&mut self, module: Module) {
        self.modules.push(module);
    }

    /// Select `module_id` if nothing is selected yet
    pub fn act_if_unset(&mut self, module_id: ModuleId) {
        if self.acting_module_id.is_none() {
            self.acting_module_id = Some(module_id);
        }
    }
}

// ============================================================================
// Layout
// ============================================================================

/// The full set of windows, in render order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Layout {
    pub windows: Vec<Window>,
}

impl Layout {
    pub fn new(windows: Vec<Window>) -> Self {
        Self { windows }
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn window(&self, window_id: WindowId) -> Option<&Window> {
        self.windows.iter().find(|w| w.id == window_id)
    }

    pub(crate) fn window_mut(&mut self, window_id: WindowId) -> Option<&mut Window> {
        self.windows.iter_mut().find(|w| w.id == window_id)
    }

    pub fn window_ids(&self) -> Vec<WindowId> {
        self.windows.iter().map(|w| w.id).collect()
    }

    /// Find a module anywhere in the layout
    pub fn find_module(&self, module_id: ModuleId) -> Option<&Module> {
        self.windows
            .iter()
            .flat_map(|w| w.modules.iter())
            .find(|m| m.id == module_id)
    }

    /// Find the window that owns a module
    pub fn module_owner(&self, module_id: ModuleId) -> Option<&Window> {
        self.windows.iter().find(|w| w.contains_module(module_id))
    }

    pub fn module_count(&self) -> usize {
        self.windows.iter().map(|w| w.modules.len()).sum()
    }

    /// Apply `f` to one window of a copy of this layout. Missing windows are a no-op.
    fn with_window(&self, window_id: WindowId, f: impl FnOnce(&mut Window)) -> Layout {
        let mut next = self.clone();
        if let Some(window) = next.window_mut(window_id) {
            f(window);
        }
        next
    }

    // === Lifecycle operations ===

    /// Make `module_id` the visible tab of `window_id`
    ///
    /// No-op when the window does not exist or does not own the module.
    pub fn select_tab(&self, window_id: WindowId, module_id: ModuleId) -> Layout {
        self.with_window(window_id, |window| {
            if window.contains_module(module_id) {
                window.acting_module_id = Some(module_id);
            }
        })
    }

    /// Close a tab. The window is kept even when it ends up empty.
    pub fn close_tab(&self, window_id: WindowId, module_id: ModuleId) -> Layout {
        self.with_window(window_id, |window| {
            window.take_module(module_id);
        })
    }

    /// Remove a window together with all of its modules
    pub fn close_window(&self, window_id: WindowId) -> Layout {
        Layout {
            windows: self
                .windows
                .iter()
                .filter(|w| w.id != window_id)
                .cloned()
                .collect(),
        }
    }

    /// Title-bar close button: closes the acting tab, or the whole window when
    /// it holds a single tab (or none).
    pub fn close_acting(&self, window_id: WindowId) -> Layout {
        match self.window(window_id) {
            Some(window) if window.modules.len() > 1 => match window.acting_module_id {
                Some(acting) => self.close_tab(window_id, acting),
                None => self.clone(),
            },
            Some(_) => self.close_window(window_id),
            None => self.clone(),
        }
    }

    /// Set a window's size directly (callers pass already-snapped values)
    ///
    /// Sizes that would push the window past the grid edge are rejected.
    pub fn resize_window(
        &self,
        window_id: WindowId,
        width: i32,
        height: i32,
        grid_size: i32,
    ) -> LayoutResult<Layout> {
        if width < 1 || height < 1 {
            return Err(LayoutError::InvalidSize {
                window: window_id,
                width,
                height,
            });
        }
        if let Some(window) = self.window(window_id) {
            if !CellRect::new(window.col, window.row, width, height).fits(grid_size) {
                return Err(LayoutError::OutOfBounds {
                    window: window_id,
                    grid_size,
                });
            }
        }
        Ok(self.with_window(window_id, |window| {
            window.width = width;
            window.height = height;
        }))
    }

    /// Add a new window at `rect` holding `modules`
    pub fn add_window(
        &self,
        ids: &mut impl IdSource,
        rect: CellRect,
        modules: Vec<Module>,
        grid_size: i32,
    ) -> LayoutResult<(Layout, WindowId)> {
        if rect.width < 1 || rect.height < 1 {
            return Err(LayoutError::InvalidSize {
                window: WindowId(0),
                width: rect.width,
                height: rect.height,
            });
        }
        if !rect.fits(grid_size) {
            return Err(LayoutError::OutOfBounds {
                window: WindowId(0),
                grid_size,
            });
        }
        let mut seen = HashSet::new();
        for module in &modules {
            if self.find_module(module.id).is_some() || !seen.insert(module.id) {
                return Err(LayoutError::DuplicateModule(module.id));
            }
        }
        let window_id = ids.next_window_id();
        let mut next = self.clone();
        next.windows.push(Window::at(window_id, rect, modules));
        Ok((next, window_id))
    }

    /// Append a module as the last tab of a window
    pub fn add_module(&self, window_id: WindowId, module: Module) -> LayoutResult<Layout> {
        if self.find_module(module.id).is_some() {
            return Err(LayoutError::DuplicateModule(module.id));
        }
        let mut next = self.clone();
        let window = next
            .window_mut(window_id)
            .ok_or(LayoutError::WindowNotFound(window_id))?;
        let module_id = module.id;
        window.push_module(module);
        window.act_if_unset(module_id);
        Ok(next)
    }

    /// Detach a module from its window and hand it back
    ///
    /// Unlike drag transitions, an emptied window is left in place.
    pub fn remove_module(
        &self,
        window_id: WindowId,
        module_id: ModuleId,
    ) -> LayoutResult<(Layout, Module)> {
        let mut next = self.clone();
        let window = next
            .window_mut(window_id)
            .ok_or(LayoutError::WindowNotFound(window_id))?;
        let module = window
            .take_module(module_id)
            .ok_or(LayoutError::ModuleNotFound(module_id))?;
        Ok((next, module))
    }

    // === Invariants ===

    /// Check every committed-layout invariant against a `grid_size` grid
    pub fn validate(&self, grid_size: i32) -> LayoutResult<()> {
        let mut window_ids = HashSet::new();
        let mut module_ids = HashSet::new();

        for window in &self.windows {
            if !window_ids.insert(window.id) {
                return Err(LayoutError::DuplicateWindow(window.id));
            }
            if window.width < 1 || window.height < 1 {
                return Err(LayoutError::InvalidSize {
                    window: window.id,
                    width: window.width,
                    height: window.height,
                });
            }
            if !window.rect().fits(grid_size) {
                return Err(LayoutError::OutOfBounds {
                    window: window.id,
                    grid_size,
                });
            }
            for module in &window.modules {
                if !module_ids.insert(module.id) {
                    return Err(LayoutError::DuplicateModule(module.id));
                }
            }
            if let Some(acting) = window.acting_module_id {
                if !window.contains_module(acting) {
                    return Err(LayoutError::DanglingActingModule {
                        window: window.id,
                        module: acting,
                    });
                }
            }
        }
        Ok(())
    }

    /// Panic with context if an invariant is broken (debug builds only)
    #[cfg(debug_assertions)]
    pub fn assert_invariants_with_context(&self, grid_size: i32, context: &str) {
        if let Err(e) = self.validate(grid_size) {
            panic!("Layout invariant violated after {}: {}", context, e);
        }
    }

    /// No-op in release builds
    #[cfg(not(debug_assertions))]
    #[inline]
    pub fn assert_invariants_with_context(&self, _grid_size: i32, _context: &str) {}
}
