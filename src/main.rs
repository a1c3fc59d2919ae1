//! Entry point: load config, install the shared handle, resolve the
//! well-known collections and log their resource names. Useful as a smoke
//! check that a deployment's project/database settings name the paths the
//! app expects.

use dotenv::dotenv;
use fireeats_store::shared::config::AppConfig;
use fireeats_store::store::collections;
use fireeats_store::Firestore;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> anyhow::Result<()> {
    let env_loaded = dotenv();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Ok(path) = &env_loaded {
        info!(path = %path.display(), "loaded .env");
    }

    let cfg = AppConfig::load().unwrap_or_default();
    if let Some(host) = cfg.emulator_host() {
        info!(host, "emulator host configured (applied by the backend SDK)");
    }

    let store = Firestore::from_config(&cfg).map_err(|_| {
        anyhow::anyhow!("Set FIREEATS_PROJECT_ID (env or .env) to your Firebase project id")
    })?;
    Firestore::init_global(store.database().clone()).map_err(|e| anyhow::anyhow!("{}", e))?;

    let restaurants = collections::restaurants().map_err(|e| anyhow::anyhow!("{}", e))?;
    info!(path = %restaurants.resource_name(), "restaurants collection");

    let sample = restaurants.doc("{restaurant-id}");
    let ratings = collections::rating_collection(&sample);
    info!(path = %ratings.resource_name(), "ratings subcollection layout");

    Ok(())
}
