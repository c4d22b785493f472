//! Drag transition engine
//!
//! Pure functions from `(preview, item, update)` to the next preview or the
//! committed layout. Nothing here touches the model; [`super::drag`] owns the
//! session and swaps results in.
//!
//! Drag-over only ever moves tabs between containers. Geometry changes (move,
//! resize, merge) are applied once, at drag-end, from the gesture's total
//! pixel delta.

use tracing::debug;

use crate::error::{LayoutError, LayoutResult};
use crate::model::{
    DragItem, DragUpdate, DropTarget, IdSource, ModuleId, PreviewLayout, Window, WindowId,
};
use crate::view::geometry::{moved, resized, snap_move, snap_resize, GridMetrics, PixelDelta};

/// Result of dropping an item
#[derive(Debug, Clone, PartialEq)]
pub enum DragOutcome {
    /// The drop produced a new committed layout
    Committed(crate::model::Layout),
    /// The drop was not accepted; the committed layout stays as it was
    Ignored,
}

// ============================================================================
// Drag-over
// ============================================================================

/// Live preview step for one pointer update
///
/// Only tab drags change the preview. A tab over a different window moves into
/// it; a tab over the grid moves into a fresh transient window placed where
/// its current owner sits. Windows emptied along the way are dropped.
pub fn drag_over(
    preview: &PreviewLayout,
    item: &DragItem,
    update: &DragUpdate,
    ids: &mut impl IdSource,
) -> LayoutResult<PreviewLayout> {
    let Some(target) = update.eligible_target(item.kind()) else {
        return Ok(preview.clone());
    };

    match item {
        DragItem::Module {
            module_id,
            geometry,
        } => {
            let owner = owner_of(preview, *module_id)?;
            match target.owner() {
                Some(target_window) if target_window != owner => {
                    move_module_to_window(preview, *module_id, target_window)
                }
                Some(_) => Ok(preview.clone()),
                None => {
                    // Already alone in its own transient window
                    if preview.is_transient(owner)
                        && preview.window(owner).is_some_and(|w| w.modules.len() == 1)
                    {
                        return Ok(preview.clone());
                    }
                    // The owner's rect is the tab's last-known geometry
                    let rect = preview.window(owner).map_or(*geometry, Window::rect);
                    let mut next = preview.clone();
                    let module = next
                        .detach_module(*module_id)
                        .ok_or(LayoutError::ModuleNotFound(*module_id))?;
                    let window = Window::at(ids.next_window_id(), rect, vec![module]);
                    debug!(target: "drag", module = %module_id, window = %window.id, "extracted tab");
                    next.transient = Some(window);
                    Ok(next)
                }
            }
        }
        DragItem::Window { .. } | DragItem::WindowResizer { .. } => Ok(preview.clone()),
    }
}

fn owner_of(preview: &PreviewLayout, module_id: ModuleId) -> LayoutResult<WindowId> {
    preview
        .module_owner(module_id)
        .map(|w| w.id)
        .ok_or(LayoutError::ModuleNotFound(module_id))
}

/// Move a tab to the end of another window's strip
fn move_module_to_window(
    preview: &PreviewLayout,
    module_id: ModuleId,
    target: WindowId,
) -> LayoutResult<PreviewLayout> {
    if preview.window(target).is_none() {
        return Err(LayoutError::TargetWindowNotFound(target));
    }
    let mut next = preview.clone();
    let module = next
        .detach_module(module_id)
        .ok_or(LayoutError::ModuleNotFound(module_id))?;
    // The target cannot be the window just pruned: that window owned the tab
    let window = next
        .window_mut(target)
        .ok_or(LayoutError::TargetWindowNotFound(target))?;
    window.push_module(module);
    debug!(target: "drag", module = %module_id, window = %target, "moved tab");
    Ok(next)
}

// ============================================================================
// Drag-end
// ============================================================================

/// Commit step for the final pointer update
///
/// Returns [`DragOutcome::Ignored`] when nothing eligible is under the pointer.
/// Any transient window left in the preview is materialized.
pub fn drag_end(
    preview: &PreviewLayout,
    item: &DragItem,
    update: &DragUpdate,
    metrics: &GridMetrics,
) -> LayoutResult<DragOutcome> {
    let Some(target) = update.eligible_target(item.kind()) else {
        debug!(target: "drag", kind = ?item.kind(), "drop ignored: no eligible target");
        return Ok(DragOutcome::Ignored);
    };

    let next = match item {
        DragItem::Module { module_id, .. } => match target {
            DropTarget::Grid => drop_module_on_grid(preview, *module_id, update.delta, metrics)?,
            _ => drop_module_on_strip(preview, *module_id, &target)?,
        },
        DragItem::Window { window_id, .. } => match target.owner() {
            None => move_window(preview, *window_id, update.delta, metrics)?,
            Some(target_window) if target_window == *window_id => {
                return Ok(DragOutcome::Ignored);
            }
            Some(target_window) => merge_windows(preview, *window_id, target_window)?,
        },
        DragItem::WindowResizer { window_id, .. } => {
            resize_window(preview, *window_id, update.delta, metrics)?
        }
    };

    Ok(DragOutcome::Committed(next.materialize()))
}

/// Shift the tab's window by the snapped delta
fn drop_module_on_grid(
    preview: &PreviewLayout,
    module_id: ModuleId,
    delta: PixelDelta,
    metrics: &GridMetrics,
) -> LayoutResult<PreviewLayout> {
    let owner = owner_of(preview, module_id)?;
    let mut next = preview.clone();
    let window = next
        .window_mut(owner)
        .ok_or(LayoutError::WindowNotFound(owner))?;
    let snapped = snap_move(window.rect(), delta, metrics.cell_size, metrics.grid_size);
    let rect = moved(window.rect(), snapped);
    window.col = rect.col;
    window.row = rect.row;
    window.act_if_unset(module_id);
    debug!(target: "drag", module = %module_id, window = %owner, col = rect.col, row = rect.row, "placed tab window");
    Ok(next)
}

/// Reorder the tab within the target strip, moving it there first if needed
fn drop_module_on_strip(
    preview: &PreviewLayout,
    module_id: ModuleId,
    target: &DropTarget,
) -> LayoutResult<PreviewLayout> {
    let Some(target_window) = target.owner() else {
        return Ok(preview.clone());
    };
    let mut next = if owner_of(preview, module_id)? == target_window {
        preview.clone()
    } else {
        move_module_to_window(preview, module_id, target_window)?
    };

    let window = next
        .window_mut(target_window)
        .ok_or(LayoutError::TargetWindowNotFound(target_window))?;
    let from = window
        .module_index(module_id)
        .ok_or(LayoutError::ModuleNotFound(module_id))?;
    let to = target
        .module_id()
        .and_then(|id| window.module_index(id))
        .unwrap_or(window.modules.len().saturating_sub(1));
    move_item(&mut window.modules, from, to);
    window.act_if_unset(module_id);
    debug!(target: "drag", module = %module_id, window = %target_window, from, to, "reordered tab");
    Ok(next)
}

/// Move the element at `from` so it ends up at index `to`
fn move_item<T>(items: &mut Vec<T>, from: usize, to: usize) {
    if from == to {
        return;
    }
    let item = items.remove(from);
    items.insert(to.min(items.len()), item);
}

fn move_window(
    preview: &PreviewLayout,
    window_id: WindowId,
    delta: PixelDelta,
    metrics: &GridMetrics,
) -> LayoutResult<PreviewLayout> {
    let mut next = preview.clone();
    let window = next
        .window_mut(window_id)
        .ok_or(LayoutError::WindowNotFound(window_id))?;
    let snapped = snap_move(window.rect(), delta, metrics.cell_size, metrics.grid_size);
    let rect = moved(window.rect(), snapped);
    window.col = rect.col;
    window.row = rect.row;
    debug!(target: "drag", window = %window_id, col = rect.col, row = rect.row, "moved window");
    Ok(next)
}

/// Fold the dragged window's tabs into the target, then drop the dragged window
///
/// The target keeps its own acting tab. If it had none it takes the dragged
/// window's, or its first tab when neither had one.
fn merge_windows(
    preview: &PreviewLayout,
    dragged: WindowId,
    target: WindowId,
) -> LayoutResult<PreviewLayout> {
    if preview.window(target).is_none() {
        return Err(LayoutError::TargetWindowNotFound(target));
    }
    let mut next = preview.clone();
    let index = next
        .layout
        .windows
        .iter()
        .position(|w| w.id == dragged)
        .ok_or(LayoutError::WindowNotFound(dragged))?;
    let source = next.layout.windows.remove(index);

    let window = next
        .window_mut(target)
        .ok_or(LayoutError::TargetWindowNotFound(target))?;
    window.modules.extend(source.modules);
    if window.acting_module_id.is_none() {
        window.acting_module_id = source
            .acting_module_id
            .or_else(|| window.modules.first().map(|m| m.id));
    }
    debug!(target: "drag", from = %dragged, into = %target, tabs = window.modules.len(), "merged windows");
    Ok(next)
}

fn resize_window(
    preview: &PreviewLayout,
    window_id: WindowId,
    delta: PixelDelta,
    metrics: &GridMetrics,
) -> LayoutResult<PreviewLayout> {
    let mut next = preview.clone();
    let window = next
        .window_mut(window_id)
        .ok_or(LayoutError::WindowNotFound(window_id))?;
    let snapped = snap_resize(window.rect(), delta, metrics.cell_size, metrics.grid_size);
    let rect = resized(window.rect(), snapped);
    window.width = rect.width;
    window.height = rect.height;
    debug!(target: "drag", window = %window_id, width = rect.width, height = rect.height, "resized window");
    Ok(next)
}
