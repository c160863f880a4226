//! Demo binary for the xiuxian cultivation simulator.
//!
//! Walks all five realms in progression order, running the autoplay
//! sequencer to completion in each and logging the progress broadcasts the
//! store emits along the way. This exercises the full command/observe
//! surface the presentation layer consumes.
//!
//! # Startup Sequence
//!
//! 1. Initialize structured logging (tracing)
//! 2. Load configuration from `xiuxian-config.yaml`
//! 3. Create the progression store
//! 4. For each realm: switch, autoplay to completion, log a summary
//! 5. Log the final state and exit

mod error;

use std::path::Path;
use std::sync::Arc;

use rust_decimal::Decimal;
use tokio::sync::broadcast::error::RecvError;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use xiuxian_core::{RealmStore, SimulatorConfig};
use xiuxian_types::Realm;

use crate::error::EngineError;

/// Application entry point.
///
/// # Errors
///
/// Returns an error if configuration loading fails.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Initialize structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    info!("xiuxian-engine starting");

    // 2. Load configuration.
    let config = load_config()?;
    info!(
        simulator = config.simulator.name,
        starting_realm = %config.simulator.starting_realm,
        start_delay_ms = config.autoplay.start_delay_ms,
        "Configuration loaded"
    );

    // 3. Create the progression store.
    let store = Arc::new(RealmStore::new(&config));
    info!("Progression store created");

    // 4. Walk every realm under autoplay.
    for realm in Realm::ALL {
        run_realm(&store, realm).await;
    }

    // 5. Final state.
    let snapshot = store.snapshot();
    info!(
        realm = %snapshot.realm,
        percent = %snapshot.progress_percent,
        "xiuxian-engine shutdown complete"
    );

    Ok(())
}

/// Switch the store to `realm`, run autoplay to completion, and log a
/// summary of what was activated.
async fn run_realm(store: &Arc<RealmStore>, realm: Realm) {
    let realm_info = xiuxian_realms::info(realm);
    info!(
        realm = %realm,
        name = realm_info.name,
        level = realm_info.complexity_level,
        visual = ?realm_info.visual,
        order = ?realm_info.order,
        "Entering realm"
    );

    store.switch_realm(realm);
    let mut rx = store.subscribe();
    store.start_autoplay();

    loop {
        match rx.recv().await {
            Ok(update) => {
                if let Some(ref node) = update.activated {
                    debug!(
                        realm = %update.realm,
                        node = %node,
                        step = update.current_step,
                        total = update.total_steps,
                        percent = %update.progress_percent,
                        "Node activated"
                    );
                }
                if !update.is_animating {
                    break;
                }
            }
            Err(RecvError::Lagged(skipped)) => {
                debug!(skipped, "progress receiver lagged, skipping ahead");
                if !store.is_animating() {
                    break;
                }
            }
            Err(RecvError::Closed) => break,
        }
    }

    let snapshot = store.snapshot();
    let paths_complete = snapshot
        .paths
        .iter()
        .filter(|p| p.progress == Decimal::ONE)
        .count();
    info!(
        realm = %realm,
        steps = snapshot.current_step,
        total = snapshot.total_steps,
        percent = %snapshot.progress_percent,
        paths_complete,
        paths_total = snapshot.paths.len(),
        "Realm complete"
    );
}

/// Load the simulator configuration from `xiuxian-config.yaml`.
///
/// Looks for the config file relative to the current working directory
/// and falls back to defaults when it is absent.
fn load_config() -> Result<SimulatorConfig, EngineError> {
    let config_path = Path::new("xiuxian-config.yaml");
    if config_path.exists() {
        let config = SimulatorConfig::from_file(config_path)?;
        Ok(config)
    } else {
        info!("Config file not found, using defaults");
        Ok(SimulatorConfig::default())
    }
}
