//! Grid geometry: snapping pixel deltas to cells, and the pixel math shared
//! between drag previews and drop-zone registration
//!
//! All functions here are pure (no I/O, no side effects). Repeated calls with
//! the same inputs within a frame must give the same answer, since previews
//! are recomputed on every pointer move.

use serde::{Deserialize, Serialize};

use crate::model::{CellRect, DragKind};

// ============================================================================
// Pixel and cell primitives
// ============================================================================

/// A pointer offset in pixels, accumulated since the gesture started
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PixelDelta {
    pub x: f64,
    pub y: f64,
}

impl PixelDelta {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub const ZERO: PixelDelta = PixelDelta { x: 0.0, y: 0.0 };
}

/// A position in screen pixels
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An offset measured in whole grid cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CellDelta {
    pub cols: i32,
    pub rows: i32,
}

impl CellDelta {
    pub fn new(cols: i32, rows: i32) -> Self {
        Self { cols, rows }
    }
}

/// Rectangle in screen pixels
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Half-open containment: the right and bottom edges are outside
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x < self.x + self.width && p.y >= self.y && p.y < self.y + self.height
    }

    pub fn area(&self) -> f64 {
        self.width.max(0.0) * self.height.max(0.0)
    }

    /// Overlapping part of two rects, or `None` when they are disjoint
    pub fn intersect(&self, other: &Rect) -> Option<Rect> {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = (self.x + self.width).min(other.x + other.width);
        let bottom = (self.y + self.height).min(other.y + other.height);
        if right <= x || bottom <= y {
            return None;
        }
        Some(Rect::new(x, y, right - x, bottom - y))
    }
}

/// Pixel dimensions of the grid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridMetrics {
    pub cell_size: f64,
    pub gap_size: f64,
    /// Cells per side; the grid is always square
    pub grid_size: i32,
}

impl GridMetrics {
    pub fn new(cell_size: f64, gap_size: f64, grid_size: i32) -> Self {
        Self {
            cell_size,
            gap_size,
            grid_size,
        }
    }

    /// Distance between the top-left corners of two adjacent cells
    #[inline]
    pub fn pitch(&self) -> f64 {
        self.cell_size + self.gap_size
    }

    /// Width and height of the whole grid including the outer padding
    pub fn extent_px(&self) -> f64 {
        self.grid_size as f64 * self.pitch() + self.gap_size
    }

    /// Pixel rect of a cell rect, relative to the grid's top-left corner
    pub fn cell_rect_px(&self, rect: CellRect) -> Rect {
        let (width, height) = preview_size(rect, self.cell_size, self.gap_size);
        Rect::new(
            (rect.col - 1) as f64 * self.pitch() + self.gap_size,
            (rect.row - 1) as f64 * self.pitch() + self.gap_size,
            width,
            height,
        )
    }
}

// ============================================================================
// Snapping
// ============================================================================

/// Round a pixel distance to whole cells, halves toward positive infinity
#[inline]
fn round_cells(px: f64, cell_size: f64) -> i32 {
    (px / cell_size + 0.5).floor() as i32
}

/// Clamp that tolerates `min > max` by letting the upper bound win
#[inline]
fn clamp(value: i32, min: i32, max: i32) -> i32 {
    value.max(min).min(max)
}

/// Snap a move gesture to whole cells, keeping the window on the grid
///
/// Columns are bounded so the window stays at column 1 or more. Rows are
/// bounded by `-row`, which lets the window reach row 0.
pub fn snap_move(dragged: CellRect, delta: PixelDelta, cell_size: f64, grid_size: i32) -> CellDelta {
    let cols = round_cells(delta.x, cell_size);
    let rows = round_cells(delta.y, cell_size);

    CellDelta {
        cols: clamp(
            cols,
            1 - dragged.col,
            grid_size - dragged.col - dragged.width + 1,
        ),
        rows: clamp(
            rows,
            -dragged.row,
            grid_size - dragged.row - dragged.height + 1,
        ),
    }
}

/// Snap a resize gesture to whole cells
///
/// The result never shrinks the window below one cell and never pushes its
/// far edge past the grid.
pub fn snap_resize(dragged: CellRect, delta: PixelDelta, cell_size: f64, grid_size: i32) -> CellDelta {
    let cols = round_cells(delta.x, cell_size);
    let rows = round_cells(delta.y, cell_size);

    CellDelta {
        cols: clamp(
            cols,
            1 - dragged.width,
            grid_size - dragged.col - dragged.width + 1,
        ),
        rows: clamp(
            rows,
            1 - dragged.height,
            grid_size - dragged.row - dragged.height + 1,
        ),
    }
}

/// Apply a move delta to a rect
pub fn moved(rect: CellRect, delta: CellDelta) -> CellRect {
    CellRect::new(rect.col + delta.cols, rect.row + delta.rows, rect.width, rect.height)
}

/// Apply a resize delta to a rect
pub fn resized(rect: CellRect, delta: CellDelta) -> CellRect {
    CellRect::new(rect.col, rect.row, rect.width + delta.cols, rect.height + delta.rows)
}

// ============================================================================
// Preview geometry
// ============================================================================

/// Transform applied to the element under the pointer while dragging
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragTransform {
    /// Follow the pointer freely
    Pixels(PixelDelta),
    /// Snap to whole cells
    Cells(CellDelta),
}

/// Resize handles snap to cells; every other drag follows the pointer
pub fn resize_transform(
    kind: DragKind,
    dragged: CellRect,
    delta: PixelDelta,
    cell_size: f64,
    grid_size: i32,
) -> DragTransform {
    match kind {
        DragKind::WindowResizer => {
            DragTransform::Cells(snap_resize(dragged, delta, cell_size, grid_size))
        }
        DragKind::Module | DragKind::Window => DragTransform::Pixels(delta),
    }
}

/// Pixel size of a `width × height` cell block including inner gaps
pub fn preview_size(rect: CellRect, cell_size: f64, gap_size: f64) -> (f64, f64) {
    (
        rect.width as f64 * cell_size + (rect.width - 1) as f64 * gap_size,
        rect.height as f64 * cell_size + (rect.height - 1) as f64 * gap_size,
    )
}

/// Where the snapped ghost of a moving window is drawn, in screen pixels
///
/// `grid_origin` is the grid's offset on screen minus its scroll position.
pub fn snapping_preview_origin(
    dragged: CellRect,
    snapped: CellDelta,
    metrics: &GridMetrics,
    grid_origin: Point,
) -> Point {
    Point::new(
        grid_origin.x
            + (dragged.col + snapped.cols - 1) as f64 * metrics.pitch()
            + metrics.gap_size,
        grid_origin.y
            + (dragged.row + snapped.rows - 1) as f64 * metrics.pitch()
            + metrics.gap_size,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn a() -> CellRect {
        CellRect::new(1, 1, 2, 3)
    }

    #[test]
    fn test_round_cells_halves_go_up() {
        assert_eq!(round_cells(50.0, 100.0), 1);
        assert_eq!(round_cells(-50.0, 100.0), 0);
        assert_eq!(round_cells(-51.0, 100.0), -1);
        assert_eq!(round_cells(149.0, 100.0), 1);
    }

    #[test]
    fn test_clamp_lets_upper_bound_win() {
        assert_eq!(clamp(5, 3, 1), 1);
    }

    #[test]
    fn test_snap_move_column_floor_is_one() {
        let rect = CellRect::new(3, 3, 2, 2);
        let d = snap_move(rect, PixelDelta::new(-1000.0, 0.0), 100.0, 32);
        assert_eq!(rect.col + d.cols, 1);
    }

    #[test]
    fn test_snap_move_row_floor_is_zero() {
        let rect = CellRect::new(3, 3, 2, 2);
        let d = snap_move(rect, PixelDelta::new(0.0, -1000.0), 100.0, 32);
        assert_eq!(rect.row + d.rows, 0);
    }

    #[test]
    fn test_snap_move_far_edges() {
        let d = snap_move(a(), PixelDelta::new(1e6, 1e6), 100.0, 32);
        assert_eq!(a().col + d.cols + a().width - 1, 32);
        assert_eq!(a().row + d.rows + a().height - 1, 32);
    }

    #[test]
    fn test_snap_resize_keeps_one_cell() {
        let d = snap_resize(a(), PixelDelta::new(-1e6, -1e6), 100.0, 32);
        assert_eq!(resized(a(), d), CellRect::new(1, 1, 1, 1));
    }

    #[test]
    fn test_resize_transform_passes_through_for_moves() {
        let delta = PixelDelta::new(37.0, -12.0);
        assert_eq!(
            resize_transform(DragKind::Window, a(), delta, 100.0, 32),
            DragTransform::Pixels(delta)
        );
        assert_eq!(
            resize_transform(DragKind::WindowResizer, a(), PixelDelta::new(140.0, 60.0), 100.0, 32),
            DragTransform::Cells(CellDelta::new(1, 1))
        );
    }

    #[test]
    fn test_preview_size_includes_inner_gaps() {
        assert_eq!(preview_size(a(), 100.0, 4.0), (204.0, 308.0));
    }

    #[test]
    fn test_snapping_preview_origin() {
        let metrics = GridMetrics::new(100.0, 4.0, 32);
        let origin = snapping_preview_origin(
            a(),
            CellDelta::new(2, 1),
            &metrics,
            Point::new(200.0, 64.0),
        );
        assert_eq!(origin, Point::new(200.0 + 2.0 * 104.0 + 4.0, 64.0 + 104.0 + 4.0));
    }

    #[test]
    fn test_rect_intersect() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert_eq!(
            r.intersect(&Rect::new(5.0, 5.0, 10.0, 10.0)),
            Some(Rect::new(5.0, 5.0, 5.0, 5.0))
        );
        assert_eq!(r.intersect(&Rect::new(10.0, 0.0, 5.0, 5.0)), None);
    }

    #[test]
    fn test_cell_rect_px() {
        let metrics = GridMetrics::new(100.0, 4.0, 32);
        assert_eq!(
            metrics.cell_rect_px(CellRect::new(2, 1, 1, 1)),
            Rect::new(108.0, 4.0, 100.0, 100.0)
        );
        assert_eq!(metrics.extent_px(), 32.0 * 104.0 + 4.0);
    }
}
