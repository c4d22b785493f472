//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

pub mod drag;
pub mod layout;
pub mod transition;

use crate::commands::Cmd;
use crate::error::LayoutResult;
use crate::messages::Msg;
use crate::model::AppModel;

#[cfg(debug_assertions)]
use crate::tracing::LayoutSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use drag::update_drag;
pub use layout::update_layout;
pub use transition::{drag_end, drag_over, DragOutcome};

/// Main update function - dispatches to sub-handlers
///
/// On error the committed layout is left exactly as it was. A failed drop
/// still ends its gesture. In debug builds this wraps with tracing
/// instrumentation; in release builds it's a direct dispatch.
#[inline]
pub fn update(model: &mut AppModel, msg: Msg) -> LayoutResult<Option<Cmd>> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

/// Inner update logic (no tracing)
fn update_inner(model: &mut AppModel, msg: Msg) -> LayoutResult<Option<Cmd>> {
    let result = match msg {
        Msg::Layout(m) => layout::update_layout(model, m),
        Msg::Drag(m) => drag::update_drag(model, m),
    };

    if let Err(ref e) = result {
        tracing::error!(target: "layout", error = %e, "update rejected");
    }
    result
}

/// Traced update wrapper (debug builds only)
///
/// Captures before/after layout state and logs diffs for debugging.
/// Pointer-move messages are only logged when they change something.
#[cfg(debug_assertions)]
fn update_traced(model: &mut AppModel, msg: Msg) -> LayoutResult<Option<Cmd>> {
    let is_noisy = msg.is_noisy();

    let msg_name = msg_type_name(&msg);
    let _span = if is_noisy {
        None
    } else {
        Some(span!(Level::DEBUG, "update", msg = %msg_name).entered())
    };

    let before = LayoutSnapshot::from_model(model);

    if !is_noisy {
        debug!(target: "message", msg = %msg_name, "processing");
    }

    let result = update_inner(model, msg);

    let after = LayoutSnapshot::from_model(model);
    if let Some(diff) = before.diff(&after) {
        debug!(target: "layout", msg = %msg_name, %diff, "state changed");
    }

    let grid_size = model.grid_size();
    model
        .layout
        .assert_invariants_with_context(grid_size, &msg_name);
    if let Some(preview) = model.preview() {
        preview
            .layout
            .assert_invariants_with_context(grid_size, &msg_name);
    }

    result
}

/// Get a display name for a message type
///
/// Uses Debug formatting to include variant names and arguments, cut short
/// for messages that carry module payloads.
#[cfg(debug_assertions)]
fn msg_type_name(msg: &Msg) -> String {
    let full = match msg {
        Msg::Layout(m) => format!("Layout::{:?}", m),
        Msg::Drag(m) => format!("Drag::{:?}", m),
    };
    match full.char_indices().nth(120) {
        Some((cut, _)) => format!("{}…", &full[..cut]),
        None => full,
    }
}
