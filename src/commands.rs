//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.
//! The core performs no I/O, so the only effect is telling the host renderer
//! what to repaint.

use crate::model::WindowId;

// ============================================================================
// Damage Tracking
// ============================================================================

/// What a renderer needs to repaint
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Damage {
    /// No redraw needed (default state for accumulation)
    #[default]
    None,
    /// Redraw everything (always safe fallback)
    Full,
    /// Redraw specific windows only
    Windows(Vec<WindowId>),
}

impl Damage {
    /// Merge another damage into this one
    ///
    /// If either damage is Full, the result is Full.
    /// If either damage is None, the other takes precedence.
    /// Otherwise, windows are combined with deduplication.
    pub fn merge(&mut self, other: Damage) {
        match (&mut *self, other) {
            (Damage::None, other) => *self = other,
            (_, Damage::None) => {}
            (Damage::Full, _) => {}
            (this, Damage::Full) => *this = Damage::Full,
            (Damage::Windows(mine), Damage::Windows(theirs)) => {
                for id in theirs {
                    if !mine.contains(&id) {
                        mine.push(id);
                    }
                }
            }
        }
    }
}

// ============================================================================
// Commands
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Request a full redraw (window set or order changed)
    Redraw,
    /// Request a redraw of specific windows (contents changed in place)
    RedrawWindows(Vec<WindowId>),
}

impl Cmd {
    /// Redraw a single window
    pub fn redraw_window(window_id: WindowId) -> Self {
        Cmd::RedrawWindows(vec![window_id])
    }

    /// Check if this command requires a redraw
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::None => false,
            Cmd::Redraw => true,
            Cmd::RedrawWindows(windows) => !windows.is_empty(),
        }
    }

    /// Get the damage for this command
    pub fn damage(&self) -> Damage {
        match self {
            Cmd::None => Damage::None,
            Cmd::Redraw => Damage::Full,
            Cmd::RedrawWindows(windows) if windows.is_empty() => Damage::None,
            Cmd::RedrawWindows(windows) => Damage::Windows(windows.clone()),
        }
    }
}

// Allow converting Option<Cmd> to Cmd
impl From<Option<Cmd>> for Cmd {
    fn from(opt: Option<Cmd>) -> Self {
        opt.unwrap_or(Cmd::None)
    }
}
