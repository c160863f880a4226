//! Shared type definitions for the xiuxian cultivation simulator.
//!
//! This crate is the single source of truth for every type that crosses a
//! crate boundary in the workspace. Types defined here flow downstream to
//! `TypeScript` via `ts-rs` for the presentation layer.
//!
//! # Modules
//!
//! - [`ids`] -- String-keyed newtype wrappers for node and path identifiers
//! - [`enums`] -- Enumeration types (realms, modes, ordering, presentation)
//! - [`structs`] -- Core entity structs (nodes, paths, metadata, snapshots)

pub mod enums;
pub mod ids;
pub mod structs;

// Re-export all public types at crate root for convenience.
pub use enums::{ActivationOrder, InteractionMode, NodeCategory, Realm, VisualKind};
pub use ids::{NodeId, PathId};
pub use structs::{
    AcupointNode, Instructions, MeridianPath, Position, ProgressBroadcast, RealmInfo, RealmLayout,
    RealmSnapshot,
};
