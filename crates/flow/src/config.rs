/// Coordination settings loaded from environment variables.
///
/// All fields have defaults suitable for local development; override via
/// environment variables in production.
#[derive(Debug, Clone)]
pub struct CoordConfig {
    /// Lock lease in seconds (default: `300`). A lock older than this is
    /// abandoned: acquirable over and swept by the maintenance worker.
    pub lock_lease_secs: i64,
    /// Sweep interval for the maintenance worker in seconds
    /// (default: `60`).
    pub sweep_interval_secs: u64,
}

impl CoordConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var               | Default |
    /// |-----------------------|---------|
    /// | `LOCK_LEASE_SECS`     | `300`   |
    /// | `SWEEP_INTERVAL_SECS` | `60`    |
    pub fn from_env() -> Self {
        let lock_lease_secs: i64 = std::env::var("LOCK_LEASE_SECS")
            .unwrap_or_else(|_| "300".into())
            .parse()
            .expect("LOCK_LEASE_SECS must be a valid i64");

        let sweep_interval_secs: u64 = std::env::var("SWEEP_INTERVAL_SECS")
            .unwrap_or_else(|_| "60".into())
            .parse()
            .expect("SWEEP_INTERVAL_SECS must be a valid u64");

        Self {
            lock_lease_secs,
            sweep_interval_secs,
        }
    }
}

impl Default for CoordConfig {
    fn default() -> Self {
        Self {
            lock_lease_secs: 300,
            sweep_interval_secs: 60,
        }
    }
}
