//! Built-in demo layouts
//!
//! Useful as replay starting points and as realistic bench fixtures.

use super::ids::IdSource;
use super::layout::{CellRect, Layout, Module, ModuleKind, Window};

/// Which built-in layout to start from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Demo {
    /// Two side-by-side windows with two tabs each
    #[default]
    TwoWindows,
    /// 100 price-ladder windows in 2×3 blocks
    PriceLadders,
    /// 100 single-cell windows packed twelve to a row
    Dense,
}

impl Demo {
    pub fn build(self, ids: &mut impl IdSource) -> Layout {
        match self {
            Demo::TwoWindows => two_windows(ids),
            Demo::PriceLadders => price_ladders(ids, 100),
            Demo::Dense => dense(ids, 100),
        }
    }
}

fn module(ids: &mut impl IdSource, kind: ModuleKind, title: &str) -> Module {
    Module::new(ids.next_module_id(), kind, title).with_prop("text", "Hello world!")
}

fn window(ids: &mut impl IdSource, rect: CellRect, tabs: &[(ModuleKind, &str)]) -> Window {
    let id = ids.next_window_id();
    let modules = tabs
        .iter()
        .map(|(kind, title)| module(ids, *kind, title))
        .collect();
    Window::at(id, rect, modules)
}

/// A 2×3 window at (1,1) and a 3×2 window at (3,1)
pub fn two_windows(ids: &mut impl IdSource) -> Layout {
    Layout::new(vec![
        window(
            ids,
            CellRect::new(1, 1, 2, 3),
            &[
                (ModuleKind::Greeting, "BTC-USD"),
                (ModuleKind::Button, "ETH-BTC"),
            ],
        ),
        window(
            ids,
            CellRect::new(3, 1, 3, 2),
            &[
                (ModuleKind::Greeting, "testing again"),
                (ModuleKind::Button, "BTC/SEK and a long title"),
            ],
        ),
    ])
}

/// `count` 2×3 price-ladder windows tiled across a 32-column grid
pub fn price_ladders(ids: &mut impl IdSource, count: usize) -> Layout {
    let windows = (0..count as i32)
        .map(|i| {
            window(
                ids,
                CellRect::new(1 + (2 * i) % 32, 1 + 3 * (i / 32), 2, 3),
                &[
                    (ModuleKind::PriceLadder, "BTC/SEK"),
                    (ModuleKind::PriceLadder, "ETH/SEK"),
                ],
            )
        })
        .collect();
    Layout::new(windows)
}

/// `count` 1×1 windows, twelve per row
pub fn dense(ids: &mut impl IdSource, count: usize) -> Layout {
    let windows = (0..count as i32)
        .map(|i| {
            window(
                ids,
                CellRect::new(1 + i % 12, 1 + i / 12, 1, 1),
                &[
                    (ModuleKind::Greeting, "testing again"),
                    (ModuleKind::Button, "BTC/SEK and a long title"),
                ],
            )
        })
        .collect();
    Layout::new(windows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SequentialIds;

    #[test]
    fn test_demo_layouts_are_valid() {
        for demo in [Demo::TwoWindows, Demo::PriceLadders, Demo::Dense] {
            let layout = demo.build(&mut SequentialIds::new());
            assert!(layout.validate(32).is_ok(), "{:?}", demo);
        }
    }

    #[test]
    fn test_price_ladder_placement() {
        let layout = price_ladders(&mut SequentialIds::new(), 100);
        assert_eq!(layout.len(), 100);
        assert_eq!(layout.windows[16].rect(), CellRect::new(1, 1, 2, 3));
        assert_eq!(layout.windows[32].rect(), CellRect::new(1, 4, 2, 3));
        assert_eq!(layout.windows[99].rect(), CellRect::new(7, 10, 2, 3));
    }

    #[test]
    fn test_dense_placement() {
        let layout = dense(&mut SequentialIds::new(), 100);
        assert_eq!(layout.windows[13].rect(), CellRect::new(2, 2, 1, 1));
        assert_eq!(layout.module_count(), 200);
    }
}
