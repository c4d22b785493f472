//! Drag vocabulary - what is being dragged, what it is over, and how far it moved
//!
//! Each gesture carries a [`DragItem`] fixed at activation. Every pointer
//! update then delivers a [`DragUpdate`]: the resolved drop target (if any)
//! and the accumulated pixel delta.

use serde::{Deserialize, Serialize};

use super::ids::{ModuleId, WindowId};
use super::layout::CellRect;
use crate::view::geometry::PixelDelta;

// ============================================================================
// Draggable kinds
// ============================================================================

/// The three mutually exclusive kinds of drag gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DragKind {
    /// A tab
    Module,
    /// A whole window, grabbed by its title grip
    Window,
    /// A window's resize handle
    WindowResizer,
}

impl DragKind {
    fn bit(self) -> u8 {
        match self {
            DragKind::Module => 0b001,
            DragKind::Window => 0b010,
            DragKind::WindowResizer => 0b100,
        }
    }
}

/// Set of draggable kinds a drop zone accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Vec<DragKind>", into = "Vec<DragKind>")]
pub struct DragKinds(u8);

impl DragKinds {
    pub const NONE: DragKinds = DragKinds(0);
    pub const ALL: DragKinds = DragKinds(0b111);

    pub fn of(kinds: &[DragKind]) -> Self {
        kinds.iter().fold(Self::NONE, |set, kind| set.with(*kind))
    }

    pub fn with(self, kind: DragKind) -> Self {
        DragKinds(self.0 | kind.bit())
    }

    pub fn contains(self, kind: DragKind) -> bool {
        self.0 & kind.bit() != 0
    }

    pub fn kinds(self) -> Vec<DragKind> {
        [DragKind::Module, DragKind::Window, DragKind::WindowResizer]
            .into_iter()
            .filter(|k| self.contains(*k))
            .collect()
    }
}

impl From<Vec<DragKind>> for DragKinds {
    fn from(kinds: Vec<DragKind>) -> Self {
        DragKinds::of(&kinds)
    }
}

impl From<DragKinds> for Vec<DragKind> {
    fn from(set: DragKinds) -> Self {
        set.kinds()
    }
}

// ============================================================================
// Drag items
// ============================================================================

/// The thing under the pointer for the lifetime of one gesture
///
/// `geometry` is the rect of the window the item was grabbed from. A tab
/// extracted after changing windows takes its current owner's rect instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DragItem {
    Module {
        module_id: ModuleId,
        geometry: CellRect,
    },
    Window {
        window_id: WindowId,
        geometry: CellRect,
    },
    WindowResizer {
        window_id: WindowId,
        geometry: CellRect,
    },
}

impl DragItem {
    pub fn kind(&self) -> DragKind {
        match self {
            DragItem::Module { .. } => DragKind::Module,
            DragItem::Window { .. } => DragKind::Window,
            DragItem::WindowResizer { .. } => DragKind::WindowResizer,
        }
    }

    pub fn geometry(&self) -> CellRect {
        match self {
            DragItem::Module { geometry, .. }
            | DragItem::Window { geometry, .. }
            | DragItem::WindowResizer { geometry, .. } => *geometry,
        }
    }

    /// Whether `target` is the zone of the dragged element itself
    pub fn is_own_zone(&self, target: &DropTarget) -> bool {
        match (self, target) {
            (DragItem::Module { module_id, .. }, DropTarget::Tab { module_id: tab, .. }) => {
                module_id == tab
            }
            (
                DragItem::Window { window_id, .. } | DragItem::WindowResizer { window_id, .. },
                DropTarget::Window { window_id: zone } | DropTarget::TitleBar { window_id: zone },
            ) => window_id == zone,
            _ => false,
        }
    }
}

// ============================================================================
// Drop targets
// ============================================================================

/// A hit-testable region: the grid background, a window, its title bar, or a tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "zone", rename_all = "snake_case")]
pub enum DropTarget {
    Grid,
    Window { window_id: WindowId },
    TitleBar { window_id: WindowId },
    Tab { window_id: WindowId, module_id: ModuleId },
}

impl DropTarget {
    pub fn is_grid(&self) -> bool {
        matches!(self, DropTarget::Grid)
    }

    /// The window this zone belongs to, if any
    pub fn owner(&self) -> Option<WindowId> {
        match self {
            DropTarget::Grid => None,
            DropTarget::Window { window_id }
            | DropTarget::TitleBar { window_id }
            | DropTarget::Tab { window_id, .. } => Some(*window_id),
        }
    }

    /// The tab this zone sits on, if any
    pub fn module_id(&self) -> Option<ModuleId> {
        match self {
            DropTarget::Tab { module_id, .. } => Some(*module_id),
            _ => None,
        }
    }

    /// Kinds accepted by this zone in the standard window chrome
    ///
    /// The grid and window bodies take everything. Title bars and tabs only
    /// take tabs and resize handles, so a window cannot be merged by dropping
    /// it on another window's tab strip.
    pub fn default_supports(&self) -> DragKinds {
        match self {
            DropTarget::Grid | DropTarget::Window { .. } => DragKinds::ALL,
            DropTarget::TitleBar { .. } | DropTarget::Tab { .. } => {
                DragKinds::of(&[DragKind::Module, DragKind::WindowResizer])
            }
        }
    }
}

/// A resolved drop target together with the kinds it accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "DropHitRepr", into = "DropHitRepr")]
pub struct DropHit {
    pub target: DropTarget,
    pub supports: DragKinds,
}

impl DropHit {
    pub fn new(target: DropTarget, supports: DragKinds) -> Self {
        Self { target, supports }
    }

    /// A hit on `target` using the standard chrome's supports set
    pub fn standard(target: DropTarget) -> Self {
        Self::new(target, target.default_supports())
    }

    pub fn accepts(&self, kind: DragKind) -> bool {
        self.supports.contains(kind)
    }
}

/// Wire form: the target flattened, `supports` optional
#[derive(Serialize, Deserialize)]
struct DropHitRepr {
    #[serde(flatten)]
    target: DropTarget,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    supports: Option<DragKinds>,
}

impl From<DropHitRepr> for DropHit {
    fn from(repr: DropHitRepr) -> Self {
        let supports = repr
            .supports
            .unwrap_or_else(|| repr.target.default_supports());
        DropHit::new(repr.target, supports)
    }
}

impl From<DropHit> for DropHitRepr {
    fn from(hit: DropHit) -> Self {
        DropHitRepr {
            target: hit.target,
            supports: Some(hit.supports),
        }
    }
}

// ============================================================================
// Drag updates
// ============================================================================

/// One drag-over or drag-end event
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DragUpdate {
    /// Zone under the pointer, or `None` when over nothing
    #[serde(default)]
    pub target: Option<DropHit>,
    /// Pointer movement since the gesture started
    #[serde(default)]
    pub delta: PixelDelta,
}

impl DragUpdate {
    pub fn new(target: Option<DropHit>, delta: PixelDelta) -> Self {
        Self { target, delta }
    }

    pub fn over(target: DropTarget, delta: PixelDelta) -> Self {
        Self::new(Some(DropHit::standard(target)), delta)
    }

    pub fn nowhere(delta: PixelDelta) -> Self {
        Self::new(None, delta)
    }

    /// The target, if it accepts `kind`
    pub fn eligible_target(&self, kind: DragKind) -> Option<DropTarget> {
        self.target
            .filter(|hit| hit.accepts(kind))
            .map(|hit| hit.target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drag_kinds_membership() {
        let set = DragKinds::of(&[DragKind::Module, DragKind::WindowResizer]);
        assert!(set.contains(DragKind::Module));
        assert!(!set.contains(DragKind::Window));
        assert!(DragKinds::ALL.contains(DragKind::Window));
        assert!(!DragKinds::NONE.contains(DragKind::Module));
    }

    #[test]
    fn test_own_zone_for_module_is_its_tab() {
        let item = DragItem::Module {
            module_id: ModuleId(3),
            geometry: CellRect::new(1, 1, 1, 1),
        };
        assert!(item.is_own_zone(&DropTarget::Tab {
            window_id: WindowId(1),
            module_id: ModuleId(3)
        }));
        assert!(!item.is_own_zone(&DropTarget::Window {
            window_id: WindowId(1)
        }));
    }

    #[test]
    fn test_own_zone_for_window_covers_body_and_title_bar() {
        let item = DragItem::Window {
            window_id: WindowId(1),
            geometry: CellRect::new(1, 1, 1, 1),
        };
        assert!(item.is_own_zone(&DropTarget::Window {
            window_id: WindowId(1)
        }));
        assert!(item.is_own_zone(&DropTarget::TitleBar {
            window_id: WindowId(1)
        }));
        assert!(!item.is_own_zone(&DropTarget::Grid));
    }

    #[test]
    fn test_title_bar_rejects_window_drags() {
        let hit = DropHit::standard(DropTarget::TitleBar {
            window_id: WindowId(2),
        });
        let update = DragUpdate::new(Some(hit), PixelDelta::ZERO);
        assert_eq!(update.eligible_target(DragKind::Window), None);
        assert!(update.eligible_target(DragKind::Module).is_some());
    }

    #[test]
    fn test_drop_hit_wire_form_defaults_supports() {
        let hit: DropHit = serde_json::from_str(r#"{"zone":"title_bar","window_id":4}"#).unwrap();
        assert_eq!(hit.target, DropTarget::TitleBar { window_id: WindowId(4) });
        assert!(!hit.accepts(DragKind::Window));

        let hit: DropHit =
            serde_json::from_str(r#"{"zone":"grid","supports":["module"]}"#).unwrap();
        assert!(hit.accepts(DragKind::Module));
        assert!(!hit.accepts(DragKind::WindowResizer));
    }
}
