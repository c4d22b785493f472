//! Benchmarks for drag transitions on large layouts
//!
//! Run with: cargo bench transitions

mod support;
use support::{make_model, tab_of, window_of};

use gridock::messages::{DragMsg, Msg};
use gridock::model::{DragUpdate, DropTarget, PreviewLayout};
use gridock::update::{drag_end, drag_over, update};
use gridock::view::geometry::PixelDelta;

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

// ============================================================================
// Pure transition steps
// ============================================================================

#[divan::bench(args = [10, 100, 1000])]
fn drag_over_other_window(bencher: divan::Bencher, windows: usize) {
    let mut model = make_model(windows);
    let item = tab_of(&model, 0);
    let target = model.layout.windows[windows - 1].id;
    let preview = PreviewLayout::new(model.layout.clone());
    let over = DragUpdate::over(DropTarget::Window { window_id: target }, PixelDelta::ZERO);

    bencher.bench_local(|| {
        divan::black_box(drag_over(&preview, &item, &over, &mut model.ids).unwrap());
    });
}

#[divan::bench(args = [10, 100, 1000])]
fn drag_over_grid_extracts(bencher: divan::Bencher, windows: usize) {
    let mut model = make_model(windows);
    let item = tab_of(&model, windows / 2);
    let preview = PreviewLayout::new(model.layout.clone());
    let over = DragUpdate::over(DropTarget::Grid, PixelDelta::new(250.0, 120.0));

    bencher.bench_local(|| {
        divan::black_box(drag_over(&preview, &item, &over, &mut model.ids).unwrap());
    });
}

#[divan::bench(args = [10, 100, 1000])]
fn drag_end_window_move(bencher: divan::Bencher, windows: usize) {
    let model = make_model(windows);
    let item = window_of(&model, 0);
    let preview = PreviewLayout::new(model.layout.clone());
    let end = DragUpdate::over(DropTarget::Grid, PixelDelta::new(730.0, 410.0));
    let metrics = model.metrics();

    bencher.bench_local(|| {
        divan::black_box(drag_end(&preview, &item, &end, &metrics).unwrap());
    });
}

#[divan::bench(args = [10, 100, 1000])]
fn drag_end_merge(bencher: divan::Bencher, windows: usize) {
    let model = make_model(windows);
    let item = window_of(&model, 0);
    let target = model.layout.windows[1].id;
    let preview = PreviewLayout::new(model.layout.clone());
    let end = DragUpdate::over(DropTarget::Window { window_id: target }, PixelDelta::ZERO);
    let metrics = model.metrics();

    bencher.bench_local(|| {
        divan::black_box(drag_end(&preview, &item, &end, &metrics).unwrap());
    });
}

// ============================================================================
// Full gestures through update
// ============================================================================

#[divan::bench(args = [10, 100, 1000])]
fn gesture_extract_and_drop(bencher: divan::Bencher, windows: usize) {
    bencher
        .with_inputs(|| make_model(windows))
        .bench_local_values(|mut model| {
            let item = tab_of(&model, 0);
            update(&mut model, Msg::begin_drag(item)).unwrap();
            for step in 1..=20 {
                let delta = PixelDelta::new(step as f64 * 25.0, step as f64 * 10.0);
                let over = DragUpdate::over(DropTarget::Grid, delta);
                update(&mut model, Msg::drag_over(over)).unwrap();
            }
            let end = DragUpdate::over(DropTarget::Grid, PixelDelta::new(500.0, 200.0));
            update(&mut model, Msg::drag_end(end)).unwrap();
            divan::black_box(model)
        });
}

#[divan::bench(args = [10, 100, 1000])]
fn gesture_cancelled(bencher: divan::Bencher, windows: usize) {
    bencher
        .with_inputs(|| make_model(windows))
        .bench_local_values(|mut model| {
            let item = tab_of(&model, 0);
            update(&mut model, Msg::begin_drag(item)).unwrap();
            let over = DragUpdate::over(DropTarget::Grid, PixelDelta::new(300.0, 0.0));
            update(&mut model, Msg::drag_over(over)).unwrap();
            update(&mut model, Msg::Drag(DragMsg::Cancel)).unwrap();
            divan::black_box(model)
        });
}

#[divan::bench(args = [10, 100, 1000])]
fn validate_layout(bencher: divan::Bencher, windows: usize) {
    let model = make_model(windows);
    let grid_size = model.grid_size();

    bencher.bench_local(|| {
        divan::black_box(model.layout.validate(grid_size).is_ok());
    });
}
