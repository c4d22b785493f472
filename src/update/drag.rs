//! Drag session controller
//!
//! Owns the gesture lifecycle: `Idle → Active → (Over)* → End | Cancel → Idle`.
//! While a gesture runs the committed layout is left alone and all movement
//! happens in the session's preview. Only a successful drop replaces it.

use tracing::{debug, warn};

use crate::commands::Cmd;
use crate::error::{LayoutError, LayoutResult};
use crate::messages::DragMsg;
use crate::model::{ActiveDrag, AppModel, DragItem, DragSession, DragUpdate, PreviewLayout};

use super::transition::{drag_end, drag_over, DragOutcome};

/// Handle drag messages
pub fn update_drag(model: &mut AppModel, msg: DragMsg) -> LayoutResult<Option<Cmd>> {
    match msg {
        DragMsg::Begin { item } => begin(model, item),
        DragMsg::Over(update) => over(model, &update),
        DragMsg::End(update) => end(model, &update),
        DragMsg::Cancel => Ok(cancel(model)),
    }
}

/// Start a gesture on `item`
///
/// The dragged tab or window must exist in the committed layout.
pub fn begin(model: &mut AppModel, item: DragItem) -> LayoutResult<Option<Cmd>> {
    if model.session.is_active() {
        return Err(LayoutError::GestureInProgress);
    }
    match item {
        DragItem::Module { module_id, .. } => {
            model
                .layout
                .module_owner(module_id)
                .ok_or(LayoutError::ModuleNotFound(module_id))?;
        }
        DragItem::Window { window_id, .. } | DragItem::WindowResizer { window_id, .. } => {
            model
                .layout
                .window(window_id)
                .ok_or(LayoutError::WindowNotFound(window_id))?;
        }
    }

    debug!(target: "drag", ?item, "drag started");
    model.session = DragSession::Active(ActiveDrag {
        item,
        updates: 0,
        preview: PreviewLayout::new(model.layout.clone()),
    });
    Ok(None)
}

/// Advance the preview for one pointer move
pub fn over(model: &mut AppModel, update: &DragUpdate) -> LayoutResult<Option<Cmd>> {
    let AppModel { session, ids, .. } = model;
    let drag = session.active_mut().ok_or(LayoutError::NoActiveGesture)?;

    let next = drag_over(&drag.preview, &drag.item, update, ids)?;
    drag.updates += 1;
    if next == drag.preview {
        return Ok(None);
    }
    drag.preview = next;
    Ok(Some(Cmd::Redraw))
}

/// Drop the item and commit the result
///
/// An ignored drop, or a failed one, restores the layout from before the
/// gesture. Either way the session ends.
pub fn end(model: &mut AppModel, update: &DragUpdate) -> LayoutResult<Option<Cmd>> {
    let drag = model.session.take().ok_or(LayoutError::NoActiveGesture)?;
    let metrics = model.metrics();

    match drag_end(&drag.preview, &drag.item, update, &metrics)? {
        DragOutcome::Committed(layout) => {
            debug!(target: "drag", kind = ?drag.item.kind(), updates = drag.updates, "drop committed");
            model.layout = layout;
        }
        DragOutcome::Ignored => {
            if drag.preview.layout != model.layout || drag.preview.transient.is_some() {
                warn!(target: "drag", kind = ?drag.item.kind(), "drop ignored, preview discarded");
            }
        }
    }
    Ok(Some(Cmd::Redraw))
}

/// Abandon the gesture, discarding the preview
pub fn cancel(model: &mut AppModel) -> Option<Cmd> {
    let drag = model.session.take()?;
    debug!(target: "drag", kind = ?drag.item.kind(), updates = drag.updates, "drag cancelled");
    Some(Cmd::Redraw)
}
