//! Drop-zone registration and drag-preview decisions
//!
//! A renderer draws each window as a body with a title bar on top. The title
//! bar holds a grip on the left, a close button on the right and the tab strip
//! in between. [`zones_for_layout`] turns that chrome into the [`DropZone`]s the
//! hit tester consumes, topmost first.

use crate::model::{DragItem, DragKind, DropTarget, PreviewLayout, WindowView};

use super::geometry::{
    preview_size, snap_move, snapping_preview_origin, GridMetrics, PixelDelta, Point, Rect,
};
use super::hit_test::DropZone;

/// Pixel sizes of the window chrome
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChromeMetrics {
    pub title_bar_height: f64,
    pub grip_width: f64,
    pub close_width: f64,
    pub tab_width: f64,
}

impl Default for ChromeMetrics {
    fn default() -> Self {
        Self {
            title_bar_height: 24.0,
            grip_width: 24.0,
            close_width: 24.0,
            tab_width: 96.0,
        }
    }
}

impl ChromeMetrics {
    /// The tab strip inside a window's pixel rect
    pub fn tab_strip(&self, window: Rect) -> Rect {
        Rect::new(
            window.x + self.grip_width,
            window.y,
            (window.width - self.grip_width - self.close_width).max(0.0),
            self.title_bar_height.min(window.height),
        )
    }
}

fn offset(rect: Rect, origin: Point) -> Rect {
    Rect::new(rect.x + origin.x, rect.y + origin.y, rect.width, rect.height)
}

fn clip_to(zone: DropZone, clip: Option<Rect>) -> DropZone {
    match clip {
        Some(clip) => zone.clipped(clip),
        None => zone,
    }
}

/// Derive the drop zones for the windows a renderer is drawing
///
/// `origin` is the grid's on-screen offset minus its scroll position and
/// `viewport` the visible part of the scrolling grid container. Windows later
/// in render order sit on top. Tabs scrolled out of the strip are clipped.
pub fn zones_for_layout<'a>(
    windows: impl IntoIterator<Item = WindowView<'a>>,
    metrics: &GridMetrics,
    chrome: &ChromeMetrics,
    origin: Point,
    viewport: Option<Rect>,
) -> Vec<DropZone> {
    let windows: Vec<WindowView<'a>> = windows.into_iter().collect();
    let mut zones = Vec::with_capacity(windows.len() * 4 + 1);

    for view in windows.iter().rev() {
        let window = view.window;
        let body = offset(metrics.cell_rect_px(window.rect()), origin);
        let strip = chrome.tab_strip(body);
        // Fully scrolled-out strips get an empty clip, hiding every tab
        let strip_clip = match viewport {
            Some(viewport) => strip
                .intersect(&viewport)
                .unwrap_or(Rect::new(strip.x, strip.y, 0.0, 0.0)),
            None => strip,
        };

        for (index, module) in window.modules.iter().enumerate() {
            let tab = Rect::new(
                strip.x + index as f64 * chrome.tab_width,
                strip.y,
                chrome.tab_width,
                strip.height,
            );
            zones.push(
                DropZone::standard(
                    DropTarget::Tab {
                        window_id: window.id,
                        module_id: module.id,
                    },
                    tab,
                )
                .clipped(strip_clip),
            );
        }

        zones.push(clip_to(
            DropZone::standard(
                DropTarget::TitleBar {
                    window_id: window.id,
                },
                strip,
            ),
            viewport,
        ));
        zones.push(clip_to(
            DropZone::standard(
                DropTarget::Window {
                    window_id: window.id,
                },
                body,
            ),
            viewport,
        ));
    }

    let extent = metrics.extent_px();
    zones.push(clip_to(
        DropZone::standard(
            DropTarget::Grid,
            Rect::new(origin.x, origin.y, extent, extent),
        ),
        viewport,
    ));
    zones
}

// ============================================================================
// Previews
// ============================================================================

/// Whether the snapped ghost is drawn: moving a window or tab over the grid
pub fn shows_snapping_preview(kind: DragKind, over: Option<&DropTarget>) -> bool {
    matches!(kind, DragKind::Window | DragKind::Module) && over.is_some_and(DropTarget::is_grid)
}

/// Screen rect of the snapped ghost, if one is shown
pub fn snapping_preview(
    item: &DragItem,
    over: Option<&DropTarget>,
    delta: PixelDelta,
    metrics: &GridMetrics,
    origin: Point,
) -> Option<Rect> {
    if !shows_snapping_preview(item.kind(), over) {
        return None;
    }
    let dragged = item.geometry();
    let snapped = snap_move(dragged, delta, metrics.cell_size, metrics.grid_size);
    let at = snapping_preview_origin(dragged, snapped, metrics, origin);
    let (width, height) = preview_size(dragged, metrics.cell_size, metrics.gap_size);
    Some(Rect::new(at.x, at.y, width, height))
}

/// The ghost that follows the pointer
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FloatingPreview {
    /// A window-sized ghost
    Window { width: f64, height: f64 },
    /// A tab-sized ghost
    Tab { width: f64, height: f64 },
}

/// Which floating ghost, if any, follows the pointer
///
/// Window drags always show one. Tab drags show one only once the tab is over
/// a container other than the one that currently holds it.
pub fn floating_preview(
    item: &DragItem,
    over: Option<&DropTarget>,
    preview: &PreviewLayout,
    metrics: &GridMetrics,
    chrome: &ChromeMetrics,
) -> Option<FloatingPreview> {
    match item {
        DragItem::Window { geometry, .. } => {
            let (width, height) = preview_size(*geometry, metrics.cell_size, metrics.gap_size);
            Some(FloatingPreview::Window { width, height })
        }
        DragItem::Module { module_id, .. } => {
            let active_container = preview.module_owner(*module_id).map(|w| w.id);
            let over_container = over.and_then(DropTarget::owner);
            (active_container != over_container).then_some(FloatingPreview::Tab {
                width: chrome.tab_width,
                height: chrome.title_bar_height,
            })
        }
        DragItem::WindowResizer { .. } => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CellRect, Layout, Module, ModuleId, ModuleKind, Window, WindowId};
    use crate::view::hit_test::resolve_drop_target;

    fn layout() -> Layout {
        Layout::new(vec![
            Window::new(
                WindowId(1),
                1,
                1,
                2,
                3,
                vec![
                    Module::new(ModuleId(10), ModuleKind::Greeting, "a"),
                    Module::new(ModuleId(11), ModuleKind::Button, "b"),
                ],
            ),
            Window::new(
                WindowId(2),
                3,
                1,
                3,
                2,
                vec![Module::new(ModuleId(20), ModuleKind::Greeting, "c")],
            ),
        ])
    }

    fn zones(layout: &Layout) -> Vec<DropZone> {
        let preview = PreviewLayout::new(layout.clone());
        zones_for_layout(
            preview.windows(),
            &GridMetrics::new(100.0, 4.0, 32),
            &ChromeMetrics::default(),
            Point::new(0.0, 0.0),
            None,
        )
    }

    #[test]
    fn test_zone_count_and_order() {
        let zones = zones(&layout());
        // 3 tabs + 2 title bars + 2 bodies + grid
        assert_eq!(zones.len(), 8);
        assert_eq!(
            zones[0].target,
            DropTarget::Tab {
                window_id: WindowId(2),
                module_id: ModuleId(20)
            }
        );
        assert_eq!(zones.last().map(|z| z.target), Some(DropTarget::Grid));
    }

    #[test]
    fn test_pointer_on_second_tab_resolves_to_it() {
        let zones = zones(&layout());
        let item = DragItem::Module {
            module_id: ModuleId(20),
            geometry: CellRect::new(3, 1, 3, 2),
        };
        // Window 1 body starts at x=4; strip starts after the 24px grip
        let hit = resolve_drop_target(Point::new(4.0 + 24.0 + 96.0 + 10.0, 10.0), &zones, &item);
        assert_eq!(
            hit.map(|h| h.target),
            Some(DropTarget::Tab {
                window_id: WindowId(1),
                module_id: ModuleId(11)
            })
        );
    }

    #[test]
    fn test_snapping_preview_only_over_grid() {
        let item = DragItem::Window {
            window_id: WindowId(1),
            geometry: CellRect::new(1, 1, 2, 3),
        };
        let metrics = GridMetrics::new(100.0, 4.0, 32);
        let over_window = DropTarget::Window {
            window_id: WindowId(2),
        };
        assert!(snapping_preview(
            &item,
            Some(&over_window),
            PixelDelta::ZERO,
            &metrics,
            Point::default()
        )
        .is_none());

        let rect = snapping_preview(
            &item,
            Some(&DropTarget::Grid),
            PixelDelta::new(210.0, 0.0),
            &metrics,
            Point::default(),
        )
        .unwrap();
        assert_eq!(rect, Rect::new(2.0 * 104.0 + 4.0, 4.0, 204.0, 308.0));
    }

    #[test]
    fn test_floating_tab_hidden_over_own_window() {
        let preview = PreviewLayout::new(layout());
        let item = DragItem::Module {
            module_id: ModuleId(10),
            geometry: CellRect::new(1, 1, 2, 3),
        };
        let metrics = GridMetrics::new(100.0, 4.0, 32);
        let chrome = ChromeMetrics::default();
        let own = DropTarget::TitleBar {
            window_id: WindowId(1),
        };
        assert_eq!(
            floating_preview(&item, Some(&own), &preview, &metrics, &chrome),
            None
        );
        assert!(floating_preview(&item, Some(&DropTarget::Grid), &preview, &metrics, &chrome).is_some());
    }
}
