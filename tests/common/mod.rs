//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use gridock::commands::Cmd;
use gridock::config::GridConfig;
use gridock::error::LayoutResult;
use gridock::messages::Msg;
use gridock::model::{
    AppModel, CellRect, DragItem, DragUpdate, DropTarget, Layout, Module, ModuleId, ModuleKind,
    Window, WindowId,
};
use gridock::update::update;
use gridock::view::geometry::PixelDelta;

pub const A: WindowId = WindowId(1);
pub const B: WindowId = WindowId(2);
pub const M1: ModuleId = ModuleId(11);
pub const M2: ModuleId = ModuleId(12);
pub const M3: ModuleId = ModuleId(21);

/// Pixels per cell in every fixture
pub const CELL: f64 = 100.0;

pub fn module(id: ModuleId, title: &str) -> Module {
    Module::new(id, ModuleKind::Greeting, title).with_prop("text", "Hello world!")
}

/// A at (1,1) 2×3 holding [m1, m2]; B at (3,1) 2×3 holding [m3]
pub fn scenario_layout() -> Layout {
    Layout::new(vec![
        Window::new(A, 1, 1, 2, 3, vec![module(M1, "m1"), module(M2, "m2")]),
        Window::new(B, 3, 1, 2, 3, vec![module(M3, "m3")]),
    ])
}

/// Model around [`scenario_layout`] on the default 32×32 grid
pub fn scenario_model() -> AppModel {
    AppModel::new(scenario_layout(), GridConfig::default()).expect("fixture layout is valid")
}

pub fn model_with(layout: Layout) -> AppModel {
    AppModel::new(layout, GridConfig::default()).expect("fixture layout is valid")
}

/// Pixel delta for a whole number of cells
pub fn cells(cols: i32, rows: i32) -> PixelDelta {
    PixelDelta::new(cols as f64 * CELL, rows as f64 * CELL)
}

// ============================================================================
// Drag items and updates
// ============================================================================

/// Grab a tab; its geometry is the owning window's rect
pub fn tab_item(model: &AppModel, module_id: ModuleId) -> DragItem {
    let owner = model
        .layout
        .module_owner(module_id)
        .expect("module is in the layout");
    DragItem::Module {
        module_id,
        geometry: owner.rect(),
    }
}

pub fn window_item(model: &AppModel, window_id: WindowId) -> DragItem {
    DragItem::Window {
        window_id,
        geometry: window_rect(model, window_id),
    }
}

pub fn resizer_item(model: &AppModel, window_id: WindowId) -> DragItem {
    DragItem::WindowResizer {
        window_id,
        geometry: window_rect(model, window_id),
    }
}

fn window_rect(model: &AppModel, window_id: WindowId) -> CellRect {
    model
        .layout
        .window(window_id)
        .expect("window is in the layout")
        .rect()
}

pub fn over_grid(delta: PixelDelta) -> DragUpdate {
    DragUpdate::over(DropTarget::Grid, delta)
}

pub fn over_window(window_id: WindowId) -> DragUpdate {
    DragUpdate::over(DropTarget::Window { window_id }, PixelDelta::ZERO)
}

pub fn over_title_bar(window_id: WindowId) -> DragUpdate {
    DragUpdate::over(DropTarget::TitleBar { window_id }, PixelDelta::ZERO)
}

pub fn over_tab(window_id: WindowId, module_id: ModuleId) -> DragUpdate {
    DragUpdate::over(
        DropTarget::Tab {
            window_id,
            module_id,
        },
        PixelDelta::ZERO,
    )
}

// ============================================================================
// Gesture helpers
// ============================================================================

/// Run a whole gesture through `update`: begin, every drag-over, then drop
pub fn drag(
    model: &mut AppModel,
    item: DragItem,
    overs: &[DragUpdate],
    end: DragUpdate,
) -> LayoutResult<Option<Cmd>> {
    update(model, Msg::begin_drag(item))?;
    for over in overs {
        update(model, Msg::drag_over(*over))?;
    }
    update(model, Msg::drag_end(end))
}

pub fn modules_of(model: &AppModel, window_id: WindowId) -> Vec<ModuleId> {
    model
        .layout
        .window(window_id)
        .map(|w| w.module_ids())
        .unwrap_or_default()
}

/// Assert every committed-layout invariant holds
pub fn assert_valid(model: &AppModel) {
    if let Err(e) = model.layout.validate(model.grid_size()) {
        panic!("invalid layout: {}\n{:#?}", e, model.layout);
    }
}
