use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Application-level constants
pub const APP_NAME: &str = "TAMS";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Deployment-region label reported by the health endpoint
pub const DEFAULT_REGION: &str = "Kenya-East";

/// Default bind address. Port 5000 matches the container target group.
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5000";

/// Get the database path.
/// `/tmp` is the one guaranteed-writable location when the container
/// filesystem is mounted read-only; durability across restarts is not
/// expected there.
pub fn database_path() -> PathBuf {
    env::var("TAMS_DB_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("/tmp/tams.db"))
}

/// Get the deployment-region label.
pub fn region() -> String {
    env::var("TAMS_REGION").unwrap_or_else(|_| DEFAULT_REGION.to_string())
}

/// Get the address the HTTP server binds to.
pub fn bind_addr() -> SocketAddr {
    env::var("TAMS_BIND_ADDR")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| {
            DEFAULT_BIND_ADDR
                .parse()
                .expect("default bind address is valid")
        })
}

/// Default tracing filter when RUST_LOG is unset
pub fn default_log_filter() -> String {
    "info,tams_backend=debug".to_string()
}
