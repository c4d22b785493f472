//! View module - the pixel side of the grid
//!
//! Snapping math, drop-zone registration and drop-target resolution. Nothing
//! here draws; a host renderer feeds pointer positions in and reads zones and
//! preview rects out.

pub mod geometry;
pub mod zones;

pub use geometry::{
    preview_size, resize_transform, snap_move, snap_resize, snapping_preview_origin, CellDelta,
    DragTransform, GridMetrics, PixelDelta, Point, Rect,
};
pub use hit_test::{hit_test_zones, resolve_drop_target, zones_under, DropZone};
pub use zones::{
    floating_preview, shows_snapping_preview, snapping_preview, zones_for_layout, ChromeMetrics,
    FloatingPreview,
};
