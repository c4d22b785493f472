//! Error types for layout operations
//!
//! Only invariant violations surface as errors. Ineligible drop targets are
//! silent no-ops and out-of-bounds geometry is clamped before it is applied.

use thiserror::Error;

use crate::model::{ModuleId, WindowId};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("window {0} not found")]
    WindowNotFound(WindowId),

    #[error("module {0} is not owned by any window")]
    ModuleNotFound(ModuleId),

    #[error("drop target window {0} not found")]
    TargetWindowNotFound(WindowId),

    #[error("window id {0} is used more than once")]
    DuplicateWindow(WindowId),

    #[error("module id {0} is used more than once")]
    DuplicateModule(ModuleId),

    #[error("window {window} has invalid size {width}x{height}")]
    InvalidSize {
        window: WindowId,
        width: i32,
        height: i32,
    },

    #[error("window {window} lies outside the {grid_size}x{grid_size} grid")]
    OutOfBounds { window: WindowId, grid_size: i32 },

    #[error("window {window} acts on {module}, which is not one of its tabs")]
    DanglingActingModule { window: WindowId, module: ModuleId },

    #[error("no drag gesture is active")]
    NoActiveGesture,

    #[error("a drag gesture is already active")]
    GestureInProgress,
}

pub type LayoutResult<T> = Result<T, LayoutError>;
