//! Route matching module
//!
//! Resolves a request path to the configured route with the longest
//! matching prefix.

use std::collections::HashSet;

use thiserror::Error;

use crate::config::RouteConfig;

/// A validated route, immutable after load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub path: String,
    pub dir: String,
    pub index: Option<String>,
    pub allow: HashSet<String>,
    pub auth: bool,
    pub key: Option<String>,
}

impl Route {
    /// Whether `method` (any case) is in the allow set.
    pub fn allows_method(&self, method: &str) -> bool {
        self.allow.contains(&method.to_uppercase())
    }

    /// A route matches on exact path, on `path + "/"` prefix, or as the
    /// `/` catch-all.
    fn matches(&self, path: &str) -> bool {
        path == self.path
            || path.starts_with(&format!("{}/", self.path))
            || (self.path == "/" && !path.is_empty())
    }
}

/// Rejected route configurations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteTableError {
    #[error("route path {0:?} must be non-empty and start with '/'")]
    InvalidPath(String),

    #[error("route {0:?} has an empty allow list")]
    EmptyAllowList(String),

    /// Two routes with the same path would make the longest-prefix
    /// winner depend on configuration order.
    #[error("duplicate route path {0:?}")]
    DuplicatePath(String),
}

/// The ordered collection of configured routes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    /// Build and validate the table from configuration.
    pub fn from_config(configs: &[RouteConfig]) -> Result<Self, RouteTableError> {
        let mut routes = Vec::with_capacity(configs.len());
        let mut seen = HashSet::new();

        for cfg in configs {
            if cfg.path.is_empty() || !cfg.path.starts_with('/') {
                return Err(RouteTableError::InvalidPath(cfg.path.clone()));
            }
            if cfg.allow.is_empty() {
                return Err(RouteTableError::EmptyAllowList(cfg.path.clone()));
            }
            if !seen.insert(cfg.path.clone()) {
                return Err(RouteTableError::DuplicatePath(cfg.path.clone()));
            }

            routes.push(Route {
                path: cfg.path.clone(),
                dir: cfg.dir.clone(),
                index: cfg.index.clone(),
                allow: cfg.allow.iter().map(|m| m.to_uppercase()).collect(),
                auth: cfg.auth,
                key: cfg.key.clone(),
            });
        }

        Ok(Self { routes })
    }

    /// Resolve a request path: among all matching routes, the one with
    /// the longest `path` wins. Pure lookup, no side effects.
    pub fn resolve(&self, path: &str) -> Option<&Route> {
        self.routes
            .iter()
            .filter(|r| r.matches(path))
            .max_by_key(|r| r.path.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn route(path: &str) -> RouteConfig {
        RouteConfig {
            path: path.to_string(),
            dir: String::new(),
            index: None,
            allow: vec!["GET".to_string()],
            auth: false,
            key: None,
        }
    }

    fn table(paths: &[&str]) -> RouteTable {
        let configs: Vec<RouteConfig> = paths.iter().map(|p| route(p)).collect();
        RouteTable::from_config(&configs).unwrap()
    }

    #[test]
    fn test_longest_prefix_wins() {
        let table = table(&["/api", "/api/player", "/"]);
        assert_eq!(
            table.resolve("/api/player/inventory").unwrap().path,
            "/api/player"
        );
        assert_eq!(table.resolve("/api/other").unwrap().path, "/api");
        assert_eq!(table.resolve("/anything").unwrap().path, "/");
    }

    #[test]
    fn test_exact_match() {
        let table = table(&["/static"]);
        assert_eq!(table.resolve("/static").unwrap().path, "/static");
        assert_eq!(table.resolve("/static/app.css").unwrap().path, "/static");
    }

    #[test]
    fn test_prefix_requires_segment_boundary() {
        let table = table(&["/static"]);
        // "/staticfile" shares the characters but not the path segment.
        assert!(table.resolve("/staticfile").is_none());
    }

    #[test]
    fn test_no_match_without_catch_all() {
        let table = table(&["/api"]);
        assert!(table.resolve("/other").is_none());
    }

    #[test]
    fn test_root_route_catches_all() {
        let table = table(&["/"]);
        assert_eq!(table.resolve("/").unwrap().path, "/");
        assert_eq!(table.resolve("/deep/nested/path").unwrap().path, "/");
    }

    #[test]
    fn test_duplicate_path_rejected() {
        let configs = vec![route("/api"), route("/api")];
        assert_eq!(
            RouteTable::from_config(&configs),
            Err(RouteTableError::DuplicatePath("/api".to_string()))
        );
    }

    #[test]
    fn test_invalid_path_rejected() {
        assert_eq!(
            RouteTable::from_config(&[route("api")]),
            Err(RouteTableError::InvalidPath("api".to_string()))
        );
        assert_eq!(
            RouteTable::from_config(&[route("")]),
            Err(RouteTableError::InvalidPath(String::new()))
        );
    }

    #[test]
    fn test_empty_allow_list_rejected() {
        let mut cfg = route("/api");
        cfg.allow.clear();
        assert_eq!(
            RouteTable::from_config(&[cfg]),
            Err(RouteTableError::EmptyAllowList("/api".to_string()))
        );
    }

    #[test]
    fn test_methods_normalized_to_uppercase() {
        let mut cfg = route("/api");
        cfg.allow = vec!["get".to_string(), "Post".to_string()];
        let table = RouteTable::from_config(&[cfg]).unwrap();
        let route = table.resolve("/api").unwrap();
        assert!(route.allows_method("GET"));
        assert!(route.allows_method("get"));
        assert!(route.allows_method("POST"));
        assert!(!route.allows_method("DELETE"));
    }
}
