//! Static realm catalog: node/path layouts and metadata for all five
//! cultivation realms.
//!
//! The catalog is pure data with no behavior. [`layout`] returns a deep,
//! freshly-instantiated [`RealmLayout`] on every call -- never a shared or
//! cached value -- so repeated realm switches can never leak activation
//! state between instantiations. [`info`] supplies display metadata, the
//! per-realm activation-order policy, and the autoplay cadence.
//!
//! The [`Realm`] enumeration is closed, so there is no unknown-realm
//! failure mode: every match in this crate is exhaustive.

mod info;
mod layouts;

pub use layouts::{GRID_HEIGHT, GRID_WIDTH, RING_POINTS};

use xiuxian_types::{Realm, RealmInfo, RealmLayout};

/// Return a fresh node/path layout for the given realm.
///
/// All nodes and paths come back inactive with zero progress, regardless
/// of how many times the realm has been requested before.
pub fn layout(realm: Realm) -> RealmLayout {
    match realm {
        Realm::LianQi => layouts::lianqi(),
        Realm::ZhuJi => layouts::zhuji(),
        Realm::JinDan => layouts::jindan(),
        Realm::YuanYing => layouts::yuanying(),
        Realm::HuaShen => layouts::huashen(),
    }
}

/// Return the descriptive metadata for the given realm.
pub fn info(realm: Realm) -> RealmInfo {
    info::realm_info(realm)
}
