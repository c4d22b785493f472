//! Identifiers for windows and modules, and the id generators that mint them
//!
//! Ids are plain integers wrapped in newtypes. Generation is injected through
//! [`IdSource`] so that tests and hosts control uniqueness within a session
//! instead of relying on a process-wide counter.

use serde::{Deserialize, Serialize};

/// Unique identifier for a window (a tile on the grid)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WindowId(pub u64);

/// Unique identifier for a module (a tab's content unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModuleId(pub u64);

impl std::fmt::Display for WindowId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "w{}", self.0)
    }
}

impl std::fmt::Display for ModuleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "m{}", self.0)
    }
}

/// Source of fresh ids for windows and modules
pub trait IdSource {
    fn next_window_id(&mut self) -> WindowId;
    fn next_module_id(&mut self) -> ModuleId;
}

/// Monotonic counter shared by windows and modules
///
/// Windows and modules draw from the same sequence, so a window and a module
/// never share a raw value. This keeps logs unambiguous.
#[derive(Debug, Clone)]
pub struct SequentialIds {
    next: u64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Start counting at `next`
    pub fn starting_at(next: u64) -> Self {
        Self { next: next.max(1) }
    }

    /// Continue after the highest id already present in `layout`
    pub fn after(layout: &super::Layout) -> Self {
        let highest = layout
            .windows
            .iter()
            .flat_map(|w| std::iter::once(w.id.0).chain(w.modules.iter().map(|m| m.id.0)))
            .max()
            .unwrap_or(0);
        Self::starting_at(highest + 1)
    }

    fn bump(&mut self) -> u64 {
        let id = self.next;
        self.next += 1;
        id
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new()
    }
}

impl IdSource for SequentialIds {
    fn next_window_id(&mut self) -> WindowId {
        WindowId(self.bump())
    }

    fn next_module_id(&mut self) -> ModuleId {
        ModuleId(self.bump())
    }
}
