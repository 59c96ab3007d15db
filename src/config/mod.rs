// Configuration module entry point
// Manages application configuration and shared runtime state

mod state;
mod types;

use std::net::SocketAddr;
use std::path::Path;

use crate::logger;

// Re-export public types
pub use state::AppState;
pub use types::{Config, LoggingConfig, PerformanceConfig, RouteConfig, ServerConfig};

/// Default config file path, without extension ("config.toml" on disk).
pub const DEFAULT_CONFIG_PATH: &str = "config";

impl Config {
    /// Load configuration from the default location.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(DEFAULT_CONFIG_PATH)
    }

    /// Load configuration from the specified file path (without
    /// extension), layering the file and `GATEWAY_*` environment
    /// variables over built-in defaults.
    ///
    /// When no config file exists yet, a default one is written so a
    /// first run leaves an editable template behind.
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let file = format!("{config_path}.toml");
        if !Path::new(&file).exists() {
            if let Err(e) = Self::write_default(&file) {
                logger::log_warning(&format!("Failed to write default config '{file}': {e}"));
            }
        }

        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(config::Environment::with_prefix("GATEWAY"))
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8080)?
            .set_default("server.data_dir", "data")?
            .set_default("logging.access_log", true)?
            .set_default("logging.access_log_format", "combined")?
            .set_default("performance.keep_alive_timeout", 75)?
            .set_default("performance.read_timeout", 30)?
            .set_default("performance.write_timeout", 30)?
            .build()?;

        settings.try_deserialize()
    }

    /// The address the gateway listens on.
    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }

    fn write_default(path: &str) -> std::io::Result<()> {
        let contents = toml::to_string_pretty(&Self::default())
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        std::fs::write(path, contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_round_trips_through_toml() {
        let rendered = toml::to_string_pretty(&Config::default()).unwrap();
        let parsed: Config = toml::from_str(&rendered).unwrap();
        assert_eq!(parsed.server.port, 8080);
        assert_eq!(parsed.routes, Config::default().routes);
    }

    #[test]
    fn test_default_routes_cover_api_endpoints() {
        let cfg = Config::default();
        let paths: Vec<&str> = cfg.routes.iter().map(|r| r.path.as_str()).collect();
        assert!(paths.contains(&"/server/console/execute"));
        assert!(paths.contains(&"/api/players"));
        assert!(paths.contains(&"/api/player/inventory"));
        assert!(paths.contains(&"/api/player/isadmin"));
        // Every admin endpoint must sit behind the auth gate.
        for route in cfg.routes.iter().filter(|r| r.path != "/") {
            assert!(route.auth, "route {} must require auth", route.path);
        }
    }

    #[test]
    fn test_socket_addr_parses() {
        let cfg = Config::default();
        assert_eq!(cfg.socket_addr().unwrap().port(), 8080);
    }
}
