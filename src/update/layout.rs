//! Layout message handlers (tabs, windows, sizes)

use tracing::debug;

use crate::commands::Cmd;
use crate::error::{LayoutError, LayoutResult};
use crate::messages::LayoutMsg;
use crate::model::AppModel;

/// Handle lifecycle messages against the committed layout
///
/// Refused while a drag is running: the preview was forked from the committed
/// layout and would silently overwrite the change on drop.
pub fn update_layout(model: &mut AppModel, msg: LayoutMsg) -> LayoutResult<Option<Cmd>> {
    if model.session.is_active() {
        return Err(LayoutError::GestureInProgress);
    }

    let grid_size = model.grid_size();
    let layout = &model.layout;
    match msg {
        LayoutMsg::SelectTab {
            window_id,
            module_id,
        } => {
            let next = layout.select_tab(window_id, module_id);
            Ok(commit_in_place(model, next, window_id))
        }

        LayoutMsg::CloseTab {
            window_id,
            module_id,
        } => {
            let next = layout.close_tab(window_id, module_id);
            Ok(commit_in_place(model, next, window_id))
        }

        LayoutMsg::CloseWindow { window_id } => {
            let next = layout.close_window(window_id);
            Ok(commit(model, next))
        }

        LayoutMsg::CloseActing { window_id } => {
            let next = layout.close_acting(window_id);
            Ok(commit(model, next))
        }

        LayoutMsg::ResizeWindow {
            window_id,
            width,
            height,
        } => {
            let next = layout.resize_window(window_id, width, height, grid_size)?;
            Ok(commit_in_place(model, next, window_id))
        }

        LayoutMsg::AddWindow { rect, modules } => {
            let (next, window_id) = layout.add_window(&mut model.ids, rect, modules, grid_size)?;
            debug!(target: "layout", window = %window_id, "window added");
            Ok(commit(model, next))
        }

        LayoutMsg::AddModule { window_id, module } => {
            let next = layout.add_module(window_id, module)?;
            Ok(commit_in_place(model, next, window_id))
        }

        LayoutMsg::RemoveModule {
            window_id,
            module_id,
        } => {
            let (next, module) = layout.remove_module(window_id, module_id)?;
            debug!(target: "layout", module = %module.id, title = %module.title, "module removed");
            Ok(commit_in_place(model, next, window_id))
        }
    }
}

/// Swap in a layout whose window set may have changed
fn commit(model: &mut AppModel, next: crate::model::Layout) -> Option<Cmd> {
    if next == model.layout {
        return None;
    }
    model.layout = next;
    Some(Cmd::Redraw)
}

/// Swap in a layout where only `window_id` changed
fn commit_in_place(
    model: &mut AppModel,
    next: crate::model::Layout,
    window_id: crate::model::WindowId,
) -> Option<Cmd> {
    if next == model.layout {
        return None;
    }
    model.layout = next;
    Some(Cmd::redraw_window(window_id))
}
