//! Shared helpers for benchmarks

use gridock::config::GridConfig;
use gridock::model::samples::price_ladders;
use gridock::model::{AppModel, DragItem, SequentialIds};

/// Create an AppModel holding `windows` price-ladder windows
///
/// The grid grows with the window count so every ladder stays in bounds.
#[allow(dead_code)]
pub fn make_model(windows: usize) -> AppModel {
    let mut ids = SequentialIds::new();
    let layout = price_ladders(&mut ids, windows);
    let rows_needed = 3 * (windows.saturating_sub(1) / 32 + 1) as i32;
    let config = GridConfig {
        rows: rows_needed.max(32),
        cols: 32,
        ..GridConfig::default()
    };
    AppModel::new(layout, config).expect("price ladders fit the grid")
}

/// Grab the first tab of the window at `index`
#[allow(dead_code)]
pub fn tab_of(model: &AppModel, index: usize) -> DragItem {
    let window = &model.layout.windows[index];
    DragItem::Module {
        module_id: window.modules[0].id,
        geometry: window.rect(),
    }
}

/// Grab the window at `index` by its title bar
#[allow(dead_code)]
pub fn window_of(model: &AppModel, index: usize) -> DragItem {
    let window = &model.layout.windows[index];
    DragItem::Window {
        window_id: window.id,
        geometry: window.rect(),
    }
}
