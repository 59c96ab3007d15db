//! Logger module
//!
//! Gateway lifecycle, error, and access logging. Output goes to
//! stdout/stderr until [`init`] points it at files from configuration.

mod format;
pub mod writer;

pub use format::AccessLogEntry;

use std::net::SocketAddr;

use crate::config::Config;

/// Initialize the logger with configuration.
///
/// Should be called once at application startup.
pub fn init(config: &Config) -> std::io::Result<()> {
    writer::init(
        config.logging.access_log_file.as_deref(),
        config.logging.error_log_file.as_deref(),
    )
}

/// Write to info/access log
fn write_info(message: &str) {
    match writer::get() {
        Some(w) => w.write_access(message),
        None => println!("{message}"),
    }
}

/// Write to error log
fn write_error(message: &str) {
    match writer::get() {
        Some(w) => w.write_error(message),
        None => eprintln!("{message}"),
    }
}

pub fn log_gateway_start(addr: &SocketAddr, config: &Config) {
    write_info("======================================");
    write_info("Admin gateway started");
    write_info(&format!("Listening on: http://{addr}"));
    write_info(&format!("Routes configured: {}", config.routes.len()));
    write_info(&format!("Allowed keys loaded: {}", config.keys.len()));
    if let Some(workers) = config.server.workers {
        write_info(&format!("Worker threads: {workers}"));
    }
    write_info("======================================");
}

pub fn log_gateway_stopped() {
    write_info("Admin gateway stopped");
}

pub fn log_connection_accepted(peer_addr: &SocketAddr) {
    write_info(&format!("[Connection] Accepted from: {peer_addr}"));
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    write_error(&format!("[ERROR] Failed to serve connection: {err:?}"));
}

pub fn log_error(message: &str) {
    write_error(&format!("[ERROR] {message}"));
}

pub fn log_warning(message: &str) {
    write_error(&format!("[WARN] {message}"));
}

pub fn log_auth_denied(path: &str) {
    write_error(&format!("[AUTH] Denied request to {path}"));
}

pub fn log_command_dispatch(command: &str, success: bool) {
    write_info(&format!(
        "[CONSOLE] Dispatched {command:?} (success: {success})"
    ));
}

/// Bind failures are fatal to startup; this is their last trace.
pub fn log_bind_failed(addr: &SocketAddr, err: &std::io::Error) {
    write_error(&format!("[ERROR] Failed to bind {addr}: {err}"));
}

/// Emit one formatted access-log line.
pub fn log_access(entry: &AccessLogEntry, format: &str) {
    let line = entry.format(format);
    match writer::get() {
        Some(w) => w.write_access(&line),
        None => println!("{line}"),
    }
}
