// API module entry
// Administrative JSON endpoints over the host bridge

mod handlers;

use std::sync::Arc;

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

use crate::config::AppState;
use crate::error::GatewayError;
use crate::handler::router::RequestContext;

/// The four built-in endpoints, keyed by their fixed route paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    ConsoleExecute,
    Players,
    PlayerInventory,
    PlayerIsAdmin,
}

impl Endpoint {
    /// Recognize a configured route path as a built-in endpoint. Any
    /// other path falls through to static serving.
    pub fn from_path(path: &str) -> Option<Self> {
        match path {
            "/server/console/execute" => Some(Self::ConsoleExecute),
            "/api/players" => Some(Self::Players),
            "/api/player/inventory" => Some(Self::PlayerInventory),
            "/api/player/isadmin" => Some(Self::PlayerIsAdmin),
            _ => None,
        }
    }
}

/// Dispatch a matched endpoint. Method and auth checks have already
/// passed by the time this runs.
pub fn dispatch(
    endpoint: Endpoint,
    ctx: &RequestContext,
    state: &Arc<AppState>,
) -> Result<Response<Full<Bytes>>, GatewayError> {
    match endpoint {
        Endpoint::ConsoleExecute => handlers::console_execute(ctx, state),
        Endpoint::Players => handlers::players_list(state),
        Endpoint::PlayerInventory => handlers::player_inventory(ctx, state),
        Endpoint::PlayerIsAdmin => handlers::player_is_admin(ctx, state),
    }
}
