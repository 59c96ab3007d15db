// Endpoint handlers module
// Thin adapters between the HTTP surface and the host bridge

use std::sync::Arc;

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};
use serde::Serialize;

use crate::config::AppState;
use crate::error::GatewayError;
use crate::handler::router::RequestContext;
use crate::host::{CommandCapture, INVENTORY_SLOTS};
use crate::http::{self, query};
use crate::logger;

#[derive(Serialize)]
struct ConsoleResponse {
    success: bool,
    command: String,
    output: Option<String>,
    error: Option<String>,
}

#[derive(Serialize)]
struct PlayersResponse {
    success: bool,
    count: usize,
    players: Vec<String>,
}

#[derive(Serialize)]
struct InventoryEntry {
    slot: usize,
    id: i32,
    damage: i32,
    count: i32,
}

#[derive(Serialize)]
struct InventoryResponse {
    success: bool,
    player: String,
    inventory: Vec<InventoryEntry>,
}

#[derive(Serialize)]
struct IsAdminResponse {
    success: bool,
    player: String,
    #[serde(rename = "isAdmin")]
    is_admin: bool,
}

/// Execute a console command on the host, capturing its output into a
/// per-invocation buffer.
pub fn console_execute(
    ctx: &RequestContext,
    state: &Arc<AppState>,
) -> Result<Response<Full<Bytes>>, GatewayError> {
    let command = required_param(ctx, "command")?;

    let mut capture = CommandCapture::new();
    let success = state
        .host
        .dispatch_command(&command, &mut capture)
        .map_err(|e| GatewayError::HandlerFailure(e.to_string()))?;
    logger::log_command_dispatch(&command, success);

    let (output, error) = capture.into_streams();
    Ok(http::json_response(
        StatusCode::OK,
        &ConsoleResponse {
            success,
            command,
            output,
            error,
        },
    ))
}

/// Snapshot of currently connected player names.
pub fn players_list(state: &Arc<AppState>) -> Result<Response<Full<Bytes>>, GatewayError> {
    let players = state.host.online_players();
    Ok(http::json_response(
        StatusCode::OK,
        &PlayersResponse {
            success: true,
            count: players.len(),
            players,
        },
    ))
}

/// A player's inventory, filtered to non-empty slots in slot order.
/// Unlike the is-admin check, an unknown player here is a 404.
pub fn player_inventory(
    ctx: &RequestContext,
    state: &Arc<AppState>,
) -> Result<Response<Full<Bytes>>, GatewayError> {
    let name = required_param(ctx, "name")?;

    let slots = state
        .host
        .player_inventory(&name)
        .ok_or(GatewayError::PlayerNotFound)?;

    let inventory: Vec<InventoryEntry> = slots
        .into_iter()
        .take(INVENTORY_SLOTS)
        .enumerate()
        .filter_map(|(slot, item)| {
            item.map(|item| InventoryEntry {
                slot,
                id: item.id,
                damage: item.damage,
                count: item.count,
            })
        })
        .collect();

    Ok(http::json_response(
        StatusCode::OK,
        &InventoryResponse {
            success: true,
            player: name,
            inventory,
        },
    ))
}

/// Privilege check. A disconnected player is reported as not an admin
/// rather than as an error.
pub fn player_is_admin(
    ctx: &RequestContext,
    state: &Arc<AppState>,
) -> Result<Response<Full<Bytes>>, GatewayError> {
    let name = required_param(ctx, "name")?;
    let is_admin = state.host.is_admin(&name);

    Ok(http::json_response(
        StatusCode::OK,
        &IsAdminResponse {
            success: true,
            player: name,
            is_admin,
        },
    ))
}

/// A percent-decoded query parameter that must be present and non-empty.
fn required_param(ctx: &RequestContext, name: &'static str) -> Result<String, GatewayError> {
    ctx.query
        .as_deref()
        .and_then(|q| query::decoded_param(q, name))
        .filter(|value| !value.is_empty())
        .ok_or(GatewayError::MissingParameter(name))
}
