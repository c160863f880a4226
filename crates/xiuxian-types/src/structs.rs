//! Core entity structs shared across the workspace.
//!
//! Everything here is plain data: the progression store owns the only
//! mutable instances, and presentation collaborators receive clones via
//! snapshots and broadcasts. `Decimal` fields cross to TypeScript as
//! strings to preserve exactness.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::{ActivationOrder, InteractionMode, NodeCategory, Realm, VisualKind};
use crate::ids::{NodeId, PathId};

// ---------------------------------------------------------------------------
// Layout entities
// ---------------------------------------------------------------------------

/// A point in scene space.
///
/// Planar realms put their charts in the x/y plane with `z == 0`; the
/// jindan lattice and the huashen ring use all three components.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Position {
    /// Horizontal component.
    pub x: f64,
    /// Vertical component.
    pub y: f64,
    /// Depth component (0 for planar realms).
    pub z: f64,
}

impl Position {
    /// Create a position from all three components.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Create a planar position with `z == 0`.
    pub const fn planar(x: f64, y: f64) -> Self {
        Self { x, y, z: 0.0 }
    }
}

/// An activatable acupoint node within a realm.
///
/// `activated` flips from `false` to `true` at most once per lifetime; it
/// only reverts when the realm is reset or re-instantiated from the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct AcupointNode {
    /// Catalog key, unique within the realm.
    pub id: NodeId,
    /// Display name (the catalog carries the traditional names).
    pub name: String,
    /// Scene-space position.
    pub position: Position,
    /// Render size multiplier.
    #[ts(as = "String")]
    pub size: Decimal,
    /// Node kind, used by scenes for sizing and coloring.
    pub category: NodeCategory,
    /// Whether the node has been activated.
    pub activated: bool,
}

/// A named ordered traversal of acupoint nodes.
///
/// `progress` is derived from node activation, never set independently:
/// it is `(highest activation-order index among the path's activated
/// members + 1) / sequence length`, clamped to 1. `activated` becomes true
/// as soon as any member node activates. Paths may overlap: several paths
/// can reference the same node id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct MeridianPath {
    /// Catalog key, unique within the realm.
    pub id: PathId,
    /// Ordered node-id sequence, length at least 1.
    pub nodes: Vec<NodeId>,
    /// Whether any node on the path has been activated.
    pub activated: bool,
    /// Derived completion fraction in [0, 1].
    #[ts(as = "String")]
    pub progress: Decimal,
}

/// A freshly-instantiated node/path layout for one realm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct RealmLayout {
    /// Nodes in declaration order (the order autoplay follows).
    pub nodes: Vec<AcupointNode>,
    /// Paths traversing the nodes.
    pub paths: Vec<MeridianPath>,
}

// ---------------------------------------------------------------------------
// Realm metadata
// ---------------------------------------------------------------------------

/// Per-mode guidance text shown by the control panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Instructions {
    /// Guidance for manual mode.
    pub manual: String,
    /// Guidance for auto mode.
    pub auto: String,
}

/// Static descriptive metadata for one realm.
///
/// Consumed by rendering collaborators (navigation, control panel) and by
/// the store for the activation-order policy and autoplay cadence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct RealmInfo {
    /// The realm this metadata describes.
    pub id: Realm,
    /// Display name.
    pub name: String,
    /// Full description.
    pub description: String,
    /// One-line description for the navigation sidebar.
    pub short_description: String,
    /// Difficulty/complexity level, 1 through 5.
    pub complexity_level: u8,
    /// Visualization style the realm is rendered with.
    pub visual: VisualKind,
    /// Which activations the store admits next in this realm.
    pub order: ActivationOrder,
    /// Autoplay tick interval in milliseconds.
    pub autoplay_interval_ms: u64,
    /// Per-mode guidance text.
    pub instructions: Instructions,
}

// ---------------------------------------------------------------------------
// Observation types
// ---------------------------------------------------------------------------

/// A consistent read of the full progression state.
///
/// Produced atomically by the store; collaborators never observe a
/// partially-updated state. All derived fields are recomputed before the
/// snapshot is taken, so the invariants of the progression model hold on
/// every snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct RealmSnapshot {
    /// The active realm.
    pub realm: Realm,
    /// Current interaction mode.
    pub mode: InteractionMode,
    /// Whether the autoplay sequencer is running.
    pub is_animating: bool,
    /// Number of activated nodes (equals `active_nodes.len()`).
    pub current_step: u32,
    /// Node count of the active realm.
    pub total_steps: u32,
    /// Completion percentage in [0, 100].
    #[ts(as = "String")]
    pub progress_percent: Decimal,
    /// Activated node ids in activation order, no duplicates.
    pub active_nodes: Vec<NodeId>,
    /// All nodes of the active realm in declaration order.
    pub nodes: Vec<AcupointNode>,
    /// All paths of the active realm.
    pub paths: Vec<MeridianPath>,
}

impl RealmSnapshot {
    /// Whether every node of the realm has been activated.
    ///
    /// An empty realm is never considered complete.
    pub const fn is_complete(&self) -> bool {
        self.total_steps > 0 && self.current_step == self.total_steps
    }

    /// Mean progress across the currently active paths, 0 if none are
    /// active.
    pub fn average_active_path_progress(&self) -> Decimal {
        let active: Vec<&MeridianPath> = self.paths.iter().filter(|p| p.activated).collect();
        if active.is_empty() {
            return Decimal::ZERO;
        }
        let sum = active
            .iter()
            .try_fold(Decimal::ZERO, |acc, p| acc.checked_add(p.progress));
        let count = Decimal::from(active.len());
        sum.and_then(|s| s.checked_div(count)).unwrap_or(Decimal::ZERO)
    }
}

/// Lightweight observer message pushed after every state change.
///
/// Collaborators that only need counters (control panel, navigation badge)
/// subscribe to these instead of cloning full snapshots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ProgressBroadcast {
    /// The active realm.
    pub realm: Realm,
    /// Current interaction mode.
    pub mode: InteractionMode,
    /// Whether the autoplay sequencer is running.
    pub is_animating: bool,
    /// Number of activated nodes.
    pub current_step: u32,
    /// Node count of the active realm.
    pub total_steps: u32,
    /// Completion percentage in [0, 100].
    #[ts(as = "String")]
    pub progress_percent: Decimal,
    /// The node activated by this state change, when one was.
    pub activated: Option<NodeId>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn path(id: &str, nodes: &[&str], activated: bool, progress: Decimal) -> MeridianPath {
        MeridianPath {
            id: PathId::from(id),
            nodes: nodes.iter().map(|n| NodeId::from(*n)).collect(),
            activated,
            progress,
        }
    }

    fn empty_snapshot() -> RealmSnapshot {
        RealmSnapshot {
            realm: Realm::LianQi,
            mode: InteractionMode::Manual,
            is_animating: false,
            current_step: 0,
            total_steps: 0,
            progress_percent: Decimal::ZERO,
            active_nodes: Vec::new(),
            nodes: Vec::new(),
            paths: Vec::new(),
        }
    }

    #[test]
    fn planar_position_has_zero_depth() {
        let p = Position::planar(400.0, 100.0);
        assert!(p.z.abs() < f64::EPSILON);
    }

    #[test]
    fn empty_realm_is_never_complete() {
        let snap = empty_snapshot();
        assert!(!snap.is_complete());
    }

    #[test]
    fn completion_requires_all_steps() {
        let mut snap = empty_snapshot();
        snap.total_steps = 5;
        snap.current_step = 4;
        assert!(!snap.is_complete());
        snap.current_step = 5;
        assert!(snap.is_complete());
    }

    #[test]
    fn average_path_progress_ignores_inactive() {
        let mut snap = empty_snapshot();
        snap.paths = vec![
            path("a", &["n1"], true, Decimal::new(5, 1)),
            path("b", &["n2"], true, Decimal::ONE),
            path("c", &["n3"], false, Decimal::ZERO),
        ];
        // (0.5 + 1.0) / 2 = 0.75
        assert_eq!(snap.average_active_path_progress(), Decimal::new(75, 2));
    }

    #[test]
    fn average_path_progress_empty_is_zero() {
        let snap = empty_snapshot();
        assert_eq!(snap.average_active_path_progress(), Decimal::ZERO);
    }

    #[test]
    fn decimal_fields_serialize_as_strings() {
        let p = path("a", &["n1", "n2"], true, Decimal::new(5, 1));
        let json = serde_json::to_value(&p).unwrap();
        assert_eq!(json["progress"], serde_json::json!("0.5"));
    }
}
