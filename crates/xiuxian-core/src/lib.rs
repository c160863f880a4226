//! Progression store and autoplay sequencer for the xiuxian cultivation
//! simulator.
//!
//! This crate owns all progression state: which realm is active, which
//! acupoint nodes have been activated and in what order, the meridian-path
//! completion derived from those activations, and the timer-driven autoplay
//! run. Presentation collaborators hold a [`RealmStore`] in an `Arc`, read
//! state through snapshots and broadcasts, and drive it through commands;
//! nothing else in the process mutates progression state.
//!
//! # Modules
//!
//! - [`config`] -- Configuration loading from `xiuxian-config.yaml` into
//!   strongly-typed structs.
//! - [`state`] -- [`RealmState`], the pure synchronous state machine.
//! - [`store`] -- [`RealmStore`], the lock-protected shared handle with
//!   observer broadcasts and the command surface.
//!
//! The autoplay sequencer is internal to the store: it starts with
//! [`RealmStore::start_autoplay`] and stops on completion, on
//! [`RealmStore::stop_autoplay`], or on any command that resets progression.
//!
//! [`RealmStore::start_autoplay`]: store::RealmStore::start_autoplay
//! [`RealmStore::stop_autoplay`]: store::RealmStore::stop_autoplay

mod autoplay;
pub mod config;
pub mod state;
pub mod store;

pub use config::{ConfigError, SimulatorConfig};
pub use state::{Activation, RealmState};
pub use store::RealmStore;
