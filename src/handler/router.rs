//! Request routing dispatch module
//!
//! Every exchange walks the same pipeline: resolve the route, check the
//! method, check admission, then dispatch to an API endpoint or the
//! static file server. The first failing stage answers the request, and
//! exactly one response is written per exchange.

use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;

use http_body_util::Full;
use hyper::body::{Body as _, Bytes};
use hyper::{HeaderMap, Request, Response};

use crate::api;
use crate::auth;
use crate::config::AppState;
use crate::error::GatewayError;
use crate::handler::static_files;
use crate::http::response::gateway_error_response;
use crate::logger::{self, AccessLogEntry};

/// Everything the pipeline needs from one request. Owned by the handling
/// task for the duration of the exchange.
pub struct RequestContext {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    pub headers: HeaderMap,
}

impl RequestContext {
    pub fn from_request<B>(req: &Request<B>) -> Self {
        Self {
            method: req.method().as_str().to_string(),
            path: req.uri().path().to_string(),
            query: req.uri().query().map(ToString::to_string),
            headers: req.headers().clone(),
        }
    }
}

/// Main entry point for HTTP request handling.
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    state: Arc<AppState>,
    peer_addr: SocketAddr,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let ctx = RequestContext::from_request(&req);

    let response = match process(&ctx, &state).await {
        Ok(response) => response,
        Err(err) => gateway_error_response(&err),
    };

    if state.config.logging.access_log {
        let entry = AccessLogEntry {
            remote_addr: peer_addr.to_string(),
            time: chrono::Local::now(),
            method: ctx.method.clone(),
            path: ctx.path.clone(),
            query: ctx.query.clone(),
            status: response.status().as_u16(),
            body_bytes: response.body().size_hint().exact().unwrap_or(0),
        };
        logger::log_access(&entry, &state.config.logging.access_log_format);
    }

    Ok(response)
}

/// The request pipeline. Each stage either passes the request on or
/// short-circuits with the error that becomes the response.
async fn process(
    ctx: &RequestContext,
    state: &Arc<AppState>,
) -> Result<Response<Full<Bytes>>, GatewayError> {
    // 1. Match route
    let route = state
        .routes
        .resolve(&ctx.path)
        .ok_or(GatewayError::RouteNotFound)?;

    // 2. Check method, before auth or dispatch can have any effect
    if !route.allows_method(&ctx.method) {
        return Err(GatewayError::MethodNotAllowed(ctx.method.clone()));
    }

    // 3. Check admission
    if !auth::authorize(route, &ctx.headers, ctx.query.as_deref(), &state.allowed_keys) {
        logger::log_auth_denied(&ctx.path);
        return Err(GatewayError::Unauthorized);
    }

    // 4. Dispatch
    if let Some(endpoint) = api::Endpoint::from_path(&route.path) {
        return api::dispatch(endpoint, ctx, state);
    }
    static_files::serve(&state.data_dir, route, &ctx.path).await
}
