// Application state module
// Immutable shared state built once at startup

use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::Arc;

use crate::host::HostBridge;
use crate::routing::{RouteTable, RouteTableError};

use super::types::Config;

/// Application state shared by every request task.
///
/// Everything here is read-only after startup, so tasks share it through
/// `Arc` without locking.
pub struct AppState {
    pub config: Config,
    pub routes: RouteTable,
    pub allowed_keys: HashSet<String>,
    pub data_dir: PathBuf,
    pub host: Arc<dyn HostBridge>,
}

impl AppState {
    /// Build the state from a loaded configuration and the embedding
    /// host's bridge. Route validation failures are fatal here, before
    /// the listener ever binds.
    pub fn new(config: Config, host: Arc<dyn HostBridge>) -> Result<Self, RouteTableError> {
        let routes = RouteTable::from_config(&config.routes)?;
        let allowed_keys = config.keys.iter().cloned().collect();
        let data_dir = PathBuf::from(&config.server.data_dir);
        Ok(Self {
            config,
            routes,
            allowed_keys,
            data_dir,
            host,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::DetachedHost;

    #[test]
    fn test_state_from_default_config() {
        let state = AppState::new(Config::default(), Arc::new(DetachedHost)).unwrap();
        assert!(state.routes.resolve("/api/players").is_some());
        assert!(state.allowed_keys.is_empty());
    }

    #[test]
    fn test_duplicate_route_is_fatal() {
        let mut cfg = Config::default();
        let duplicate = cfg.routes[0].clone();
        cfg.routes.push(duplicate);
        assert!(AppState::new(cfg, Arc::new(DetachedHost)).is_err());
    }
}
