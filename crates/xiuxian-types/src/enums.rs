//! Enumeration types for the xiuxian cultivation simulator.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// ---------------------------------------------------------------------------
// Realms
// ---------------------------------------------------------------------------

/// One of the five cultivation realms, in progression order.
///
/// Each realm carries its own node/path layout and visualization style,
/// supplied by the realm catalog. The enumeration is closed: there is no
/// runtime registration of additional realms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
#[serde(rename_all = "lowercase")]
pub enum Realm {
    /// Qi Refining -- sensing spiritual energy, opening the meridians.
    LianQi,
    /// Foundation Building -- the ren-du circuit closes into a stable loop.
    ZhuJi,
    /// Golden Core -- a three-dimensional meridian lattice around the core.
    JinDan,
    /// Nascent Soul -- life unfolding across a cell grid.
    YuanYing,
    /// Spirit Transformation -- consciousness traced along a dimensional ring.
    HuaShen,
}

impl Realm {
    /// All realms in progression order, lowest first.
    pub const ALL: [Self; 5] = [
        Self::LianQi,
        Self::ZhuJi,
        Self::JinDan,
        Self::YuanYing,
        Self::HuaShen,
    ];

    /// Return the realm's catalog key (`lianqi`, `zhuji`, ...).
    pub const fn key(self) -> &'static str {
        match self {
            Self::LianQi => "lianqi",
            Self::ZhuJi => "zhuji",
            Self::JinDan => "jindan",
            Self::YuanYing => "yuanying",
            Self::HuaShen => "huashen",
        }
    }
}

impl core::fmt::Display for Realm {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.key())
    }
}

// ---------------------------------------------------------------------------
// Interaction
// ---------------------------------------------------------------------------

/// How the user drives progression within a realm.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize, TS,
)]
#[ts(export, export_to = "bindings/")]
#[serde(rename_all = "lowercase")]
pub enum InteractionMode {
    /// Nodes are activated one by one through explicit commands.
    #[default]
    Manual,
    /// The autoplay sequencer activates nodes on a timer.
    Auto,
}

/// Which node activations a realm admits next.
///
/// `Sequential` realms accept only the next node in declaration order;
/// `Free` realms accept any node that is not yet active. Either way a node
/// activates at most once.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize, TS,
)]
#[ts(export, export_to = "bindings/")]
#[serde(rename_all = "lowercase")]
pub enum ActivationOrder {
    /// Any not-yet-active node may be activated.
    #[default]
    Free,
    /// Only the next node in declaration order may be activated.
    Sequential,
}

// ---------------------------------------------------------------------------
// Presentation hints
// ---------------------------------------------------------------------------

/// The visualization style a realm is rendered with.
///
/// Consumed by rendering collaborators only; the progression store never
/// branches on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum VisualKind {
    /// Flat DOM-positioned scene.
    #[serde(rename = "2d")]
    TwoD,
    /// Point/sphere network in three dimensions.
    #[serde(rename = "3d")]
    ThreeD,
    /// Cell grid.
    #[serde(rename = "grid")]
    Grid,
}

/// The kind of node, used by scenes for sizing and coloring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
#[serde(rename_all = "lowercase")]
pub enum NodeCategory {
    /// An acupoint on a two-dimensional meridian chart.
    Acupoint,
    /// The golden-core center of the jindan lattice.
    Core,
    /// Inner-ring lattice node.
    Inner,
    /// Middle-ring lattice node.
    Middle,
    /// Outer-ring lattice node.
    Outer,
    /// A cell in the yuanying grid.
    Cell,
    /// A point on the huashen dimensional ring.
    Geometry,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn realms_are_ordered() {
        assert!(Realm::LianQi < Realm::ZhuJi);
        assert!(Realm::ZhuJi < Realm::JinDan);
        assert!(Realm::JinDan < Realm::YuanYing);
        assert!(Realm::YuanYing < Realm::HuaShen);
        assert_eq!(Realm::ALL.len(), 5);
    }

    #[test]
    fn realm_serde_uses_catalog_keys() {
        let json = serde_json::to_string(&Realm::LianQi).ok();
        assert_eq!(json.as_deref(), Some("\"lianqi\""));
        let parsed: Result<Realm, _> = serde_json::from_str("\"huashen\"");
        assert_eq!(parsed.ok(), Some(Realm::HuaShen));
    }

    #[test]
    fn visual_kind_serde_matches_scene_tags() {
        let json = serde_json::to_string(&VisualKind::TwoD).ok();
        assert_eq!(json.as_deref(), Some("\"2d\""));
        let json = serde_json::to_string(&VisualKind::Grid).ok();
        assert_eq!(json.as_deref(), Some("\"grid\""));
    }

    #[test]
    fn default_mode_is_manual() {
        assert_eq!(InteractionMode::default(), InteractionMode::Manual);
        assert_eq!(ActivationOrder::default(), ActivationOrder::Free);
    }

    #[test]
    fn realm_display_is_lowercase_key() {
        assert_eq!(Realm::YuanYing.to_string(), "yuanying");
    }
}
