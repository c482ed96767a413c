//! Expired-lock sweeper.
//!
//! A crashed or stalled holder leaves `isLocked = true` behind forever;
//! the lease turns such locks into abandoned ones, and this worker
//! force-releases them on an interval so records do not stay dead to
//! writers. Acquire-over of an expired lock works even between sweeps —
//! the sweeper just keeps the steady state clean.

use sqlx::PgPool;
use stowage_core::record::RecordType;
use stowage_db::repositories::LockRepo;
use stowage_flow::CoordConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "stowage_sweeper=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let cfg = CoordConfig::from_env();
    let pool = stowage_db::create_pool(&database_url)
        .await
        .expect("failed to connect to database");

    tracing::info!(
        lease_secs = cfg.lock_lease_secs,
        interval_secs = cfg.sweep_interval_secs,
        "Lock sweeper starting"
    );

    let mut ticker =
        tokio::time::interval(std::time::Duration::from_secs(cfg.sweep_interval_secs));
    loop {
        ticker.tick().await;
        sweep_once(&pool, &cfg).await;
    }
}

/// Sweep every lockable table once, logging per-table results.
async fn sweep_once(pool: &PgPool, cfg: &CoordConfig) {
    for record_type in RecordType::ALL {
        match LockRepo::force_release_expired(pool, *record_type, cfg.lock_lease_secs).await {
            Ok(0) => {}
            Ok(cleared) => {
                tracing::info!(
                    entity = record_type.entity(),
                    cleared,
                    "Force-released expired locks"
                );
            }
            Err(err) => {
                tracing::error!(
                    entity = record_type.entity(),
                    error = %err,
                    "Sweep failed"
                );
            }
        }
    }
}
