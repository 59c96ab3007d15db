//! Gateway server: listener setup and the accept loop.

mod connection;
mod listener;

pub use listener::create_reusable_listener;

use std::sync::atomic::AtomicUsize;
use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::sync::Notify;

use crate::config::AppState;
use crate::logger;

/// Run the accept loop until `shutdown` is notified.
///
/// The embedding host toggles the gateway off by notifying `shutdown`;
/// in-flight connections finish in their own tasks.
pub async fn run(listener: TcpListener, state: Arc<AppState>, shutdown: Arc<Notify>) {
    let conn_counter = Arc::new(AtomicUsize::new(0));

    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => {
                        connection::accept_connection(stream, peer_addr, &state, &conn_counter);
                    }
                    Err(e) => {
                        logger::log_error(&format!("Failed to accept connection: {e}"));
                    }
                }
            }
            _ = shutdown.notified() => {
                logger::log_gateway_stopped();
                break;
            }
        }
    }
}
