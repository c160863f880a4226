//! Node/path layouts for all five realms.
//!
//! The first three realms are hand-laid charts: the lianqi central meridian,
//! the zhuji ren-du circuit, and the jindan three-layer lattice. The last
//! two are generated: the yuanying cell grid and the huashen dimensional
//! ring. Every builder returns a fresh instantiation with all nodes and
//! paths inactive; nothing here is cached or shared.

use rust_decimal::Decimal;
use xiuxian_types::{AcupointNode, MeridianPath, NodeCategory, NodeId, PathId, Position, RealmLayout};

/// Grid width of the yuanying realm in cells.
pub const GRID_WIDTH: u32 = 40;

/// Grid height of the yuanying realm in cells.
pub const GRID_HEIGHT: u32 = 30;

/// Number of points on the huashen dimensional ring.
pub const RING_POINTS: u32 = 20;

/// Helper to build an [`AcupointNode`], inactive.
fn node(
    id: &str,
    name: &str,
    position: Position,
    size: Decimal,
    category: NodeCategory,
) -> AcupointNode {
    AcupointNode {
        id: NodeId::from(id),
        name: name.to_owned(),
        position,
        size,
        category,
        activated: false,
    }
}

/// Helper to build a size-1 acupoint on a planar chart.
fn acupoint(id: &str, name: &str, x: f64, y: f64) -> AcupointNode {
    node(id, name, Position::planar(x, y), Decimal::ONE, NodeCategory::Acupoint)
}

/// Helper to build a [`MeridianPath`], inactive with zero progress.
fn path(id: &str, nodes: &[&str]) -> MeridianPath {
    MeridianPath {
        id: PathId::from(id),
        nodes: nodes.iter().map(|n| NodeId::from(*n)).collect(),
        activated: false,
        progress: Decimal::ZERO,
    }
}

/// Lianqi: five acupoints down the central meridian, one path.
pub fn lianqi() -> RealmLayout {
    RealmLayout {
        nodes: vec![
            acupoint("baihui", "百会", 400.0, 100.0),
            acupoint("yintang", "印堂", 400.0, 150.0),
            acupoint("tanzhong", "膻中", 400.0, 250.0),
            acupoint("qihai", "气海", 400.0, 350.0),
            acupoint("dantian", "丹田", 400.0, 400.0),
        ],
        paths: vec![path(
            "main_meridian",
            &["baihui", "yintang", "tanzhong", "qihai", "dantian"],
        )],
    }
}

/// Zhuji: the ren and du meridians closing into a circuit.
///
/// The two paths share `baihui` and `huiyin`, so activating either endpoint
/// advances both.
pub fn zhuji() -> RealmLayout {
    RealmLayout {
        nodes: vec![
            // Ren meridian (front)
            acupoint("baihui", "百会", 400.0, 100.0),
            acupoint("yintang", "印堂", 400.0, 150.0),
            acupoint("tanzhong", "膻中", 400.0, 250.0),
            acupoint("qihai", "气海", 400.0, 350.0),
            acupoint("huiyin", "会阴", 400.0, 450.0),
            // Du meridian (back)
            acupoint("mingmen", "命门", 500.0, 350.0),
            acupoint("jiaji", "夹脊", 500.0, 250.0),
            acupoint("dazhui", "大椎", 500.0, 150.0),
        ],
        paths: vec![
            path(
                "ren_meridian",
                &["baihui", "yintang", "tanzhong", "qihai", "huiyin"],
            ),
            path(
                "du_meridian",
                &["huiyin", "mingmen", "jiaji", "dazhui", "baihui"],
            ),
        ],
    }
}

/// Jindan: the golden core surrounded by inner, middle, and outer lattice
/// rings in three dimensions.
#[allow(clippy::too_many_lines)]
pub fn jindan() -> RealmLayout {
    let inner_size = Decimal::new(15, 1);
    let middle_size = Decimal::new(12, 1);

    let inner = |id: &str, name: &str, x: f64, y: f64, z: f64| {
        node(id, name, Position::new(x, y, z), inner_size, NodeCategory::Inner)
    };
    let middle = |id: &str, name: &str, x: f64, y: f64, z: f64| {
        node(id, name, Position::new(x, y, z), middle_size, NodeCategory::Middle)
    };
    let outer = |id: &str, name: &str, x: f64, y: f64, z: f64| {
        node(id, name, Position::new(x, y, z), Decimal::ONE, NodeCategory::Outer)
    };

    RealmLayout {
        nodes: vec![
            node(
                "core",
                "金丹核心",
                Position::new(0.0, 0.0, 0.0),
                Decimal::TWO,
                NodeCategory::Core,
            ),
            // Inner ring on the coordinate axes
            inner("inner_1", "内环1", 2.0, 0.0, 0.0),
            inner("inner_2", "内环2", -2.0, 0.0, 0.0),
            inner("inner_3", "内环3", 0.0, 2.0, 0.0),
            inner("inner_4", "内环4", 0.0, -2.0, 0.0),
            inner("inner_5", "内环5", 0.0, 0.0, 2.0),
            inner("inner_6", "内环6", 0.0, 0.0, -2.0),
            // Middle ring on the diagonals
            middle("middle_1", "中环1", 3.0, 3.0, 0.0),
            middle("middle_2", "中环2", -3.0, 3.0, 0.0),
            middle("middle_3", "中环3", 3.0, -3.0, 0.0),
            middle("middle_4", "中环4", -3.0, -3.0, 0.0),
            middle("middle_5", "中环5", 0.0, 3.0, 3.0),
            middle("middle_6", "中环6", 0.0, -3.0, 3.0),
            middle("middle_7", "中环7", 0.0, 3.0, -3.0),
            middle("middle_8", "中环8", 0.0, -3.0, -3.0),
            // Outer ring back on the axes, further out
            outer("outer_1", "外环1", 4.0, 0.0, 0.0),
            outer("outer_2", "外环2", -4.0, 0.0, 0.0),
            outer("outer_3", "外环3", 0.0, 4.0, 0.0),
            outer("outer_4", "外环4", 0.0, -4.0, 0.0),
            outer("outer_5", "外环5", 0.0, 0.0, 4.0),
            outer("outer_6", "外环6", 0.0, 0.0, -4.0),
        ],
        paths: vec![
            path(
                "core_to_inner",
                &["core", "inner_1", "inner_2", "inner_3", "inner_4", "inner_5", "inner_6"],
            ),
            path(
                "inner_to_middle",
                &["inner_1", "middle_1", "middle_2", "middle_3", "middle_4"],
            ),
            path(
                "middle_to_outer",
                &["middle_1", "outer_1", "outer_2", "outer_3", "outer_4", "outer_5", "outer_6"],
            ),
        ],
    }
}

/// Yuanying: a 40x30 cell grid centered on the origin, no paths.
///
/// Cells are laid out column-major (x outer, y inner), which is the
/// declaration order autoplay sweeps in.
pub fn yuanying() -> RealmLayout {
    let capacity = usize::try_from(GRID_WIDTH.saturating_mul(GRID_HEIGHT)).unwrap_or_default();
    let mut nodes = Vec::with_capacity(capacity);
    for x in 0..GRID_WIDTH {
        for y in 0..GRID_HEIGHT {
            let pos_x = f64::from(x) - f64::from(GRID_WIDTH) / 2.0;
            let pos_y = f64::from(y) - f64::from(GRID_HEIGHT) / 2.0;
            nodes.push(node(
                &format!("cell_{x}_{y}"),
                &format!("细胞({x},{y})"),
                Position::planar(pos_x, pos_y),
                Decimal::ONE,
                NodeCategory::Cell,
            ));
        }
    }
    RealmLayout {
        nodes,
        paths: Vec::new(),
    }
}

/// Huashen: twenty points on a ring whose depth oscillates at twice the
/// angular frequency, plus the single flow path traversing all of them.
pub fn huashen() -> RealmLayout {
    let size = Decimal::new(15, 1);
    let mut nodes = Vec::with_capacity(usize::try_from(RING_POINTS).unwrap_or_default());
    for i in 0..RING_POINTS {
        let angle = f64::from(i) / f64::from(RING_POINTS) * core::f64::consts::TAU;
        let pos = Position::new(
            angle.cos() * 5.0,
            angle.sin() * 5.0,
            (angle * 2.0).sin() * 3.0,
        );
        nodes.push(node(
            &format!("geometry_{i}"),
            &format!("维度点{i}"),
            pos,
            size,
            NodeCategory::Geometry,
        ));
    }
    let flow = MeridianPath {
        id: PathId::from("dimension_flow"),
        nodes: nodes.iter().map(|n| n.id.clone()).collect(),
        activated: false,
        progress: Decimal::ZERO,
    };
    RealmLayout {
        nodes,
        paths: vec![flow],
    }
}
