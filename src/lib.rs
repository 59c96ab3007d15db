//! Embedded admin HTTP gateway for game servers.
//!
//! The gateway maps configured URL path prefixes onto static asset
//! directories and a small set of administrative JSON endpoints, behind
//! bearer-token/key authorization. A host application embeds it by
//! implementing [`host::HostBridge`], building an [`AppState`], and
//! running [`server::run`]; the `webgate` binary runs the same gateway
//! standalone against [`host::DetachedHost`].

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod handler;
pub mod host;
pub mod http;
pub mod logger;
pub mod routing;
pub mod server;

pub use config::{AppState, Config};
pub use error::GatewayError;
