// Configuration types module
// Defines all configuration-related data structures

use serde::{Deserialize, Serialize};

/// Main configuration structure.
///
/// `keys` is declared first so the serialized default file keeps plain
/// values ahead of tables.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    /// Allowed Key Set: credentials accepted by routes without a
    /// route-specific key.
    #[serde(default)]
    pub keys: Vec<String>,
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub performance: PerformanceConfig,
    #[serde(default)]
    pub routes: Vec<RouteConfig>,
}

/// Server configuration
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Base directory for static routes; each route's `dir` is joined
    /// under it.
    pub data_dir: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workers: Option<usize>,
}

/// Logging configuration
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LoggingConfig {
    pub access_log: bool,
    /// Access log format ("combined" or "json")
    #[serde(default = "default_access_log_format")]
    pub access_log_format: String,
    /// Access log file path (optional, stdout if not set)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_log_file: Option<String>,
    /// Error log file path (optional, stderr if not set)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_log_file: Option<String>,
}

fn default_access_log_format() -> String {
    "combined".to_string()
}

/// Performance configuration
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct PerformanceConfig {
    pub keep_alive_timeout: u64,
    pub read_timeout: u64,
    pub write_timeout: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_connections: Option<u64>,
}

/// One configured route: a URL path prefix bound to a static directory or
/// one of the built-in API endpoints.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct RouteConfig {
    /// URL path prefix, e.g. `/static` or `/`.
    pub path: String,
    /// Directory relative to `server.data_dir`; empty means the data
    /// directory itself. Only used for static routes.
    #[serde(default)]
    pub dir: String,
    /// File served when a request resolves to the route's root.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<String>,
    /// Allowed HTTP methods; normalized to uppercase at load.
    pub allow: Vec<String>,
    /// Whether the route requires a credential.
    #[serde(default)]
    pub auth: bool,
    /// Route-specific credential; when set, the global key set is not
    /// consulted for this route.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            keys: Vec::new(),
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8080,
                data_dir: "data".to_string(),
                workers: None,
            },
            logging: LoggingConfig {
                access_log: true,
                access_log_format: default_access_log_format(),
                access_log_file: None,
                error_log_file: None,
            },
            performance: PerformanceConfig {
                keep_alive_timeout: 75,
                read_timeout: 30,
                write_timeout: 30,
                max_connections: None,
            },
            routes: default_routes(),
        }
    }
}

/// Routes written into a freshly generated config file: a public static
/// root plus the four admin endpoints behind auth.
fn default_routes() -> Vec<RouteConfig> {
    let api_route = |path: &str, allow: &[&str]| RouteConfig {
        path: path.to_string(),
        dir: String::new(),
        index: None,
        allow: allow.iter().map(ToString::to_string).collect(),
        auth: true,
        key: None,
    };

    vec![
        RouteConfig {
            path: "/".to_string(),
            dir: "public".to_string(),
            index: Some("index.html".to_string()),
            allow: vec!["GET".to_string()],
            auth: false,
            key: None,
        },
        api_route("/server/console/execute", &["GET", "POST"]),
        api_route("/api/players", &["GET"]),
        api_route("/api/player/inventory", &["GET"]),
        api_route("/api/player/isadmin", &["GET"]),
    ]
}
