//! Static file serving module
//!
//! Maps a request path remainder onto a file inside the matched route's
//! directory and answers with the whole file buffered in memory. The
//! canonical path of every served file must stay inside the canonical
//! base directory; anything that escapes is answered with
//! "Access denied" and never read.

use std::path::{Path, PathBuf};

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use tokio::fs;

use crate::error::GatewayError;
use crate::http::{self, mime};
use crate::logger;
use crate::routing::Route;

/// Serve `request_path` from `route`'s directory under `data_dir`.
pub async fn serve(
    data_dir: &Path,
    route: &Route,
    request_path: &str,
) -> Result<Response<Full<Bytes>>, GatewayError> {
    let (content, content_type) = load(data_dir, route, request_path).await?;
    Ok(http::file_response(content, content_type))
}

/// Resolve and read the target file.
async fn load(
    data_dir: &Path,
    route: &Route,
    request_path: &str,
) -> Result<(Vec<u8>, &'static str), GatewayError> {
    let mut relative = request_path
        .strip_prefix(route.path.as_str())
        .unwrap_or("")
        .to_string();

    // The route's root resolves to its index file, if one is declared.
    if relative.is_empty() || relative == "/" {
        match &route.index {
            Some(index) => relative = format!("/{index}"),
            None => return Err(GatewayError::IndexNotDefined(route.path.clone())),
        }
    }

    let base_dir = base_dir(data_dir, route);
    let target = base_dir.join(relative.trim_start_matches('/'));

    let base_canonical = match fs::canonicalize(&base_dir).await {
        Ok(p) => p,
        Err(e) => {
            logger::log_warning(&format!(
                "Static directory not found or inaccessible '{}': {e}",
                base_dir.display()
            ));
            return Err(GatewayError::FileNotFound(relative));
        }
    };

    // Canonicalization resolves `..` segments and symlinks, so the
    // containment check below covers both escape vectors.
    let Ok(target_canonical) = fs::canonicalize(&target).await else {
        return Err(GatewayError::FileNotFound(relative));
    };

    if !target_canonical.starts_with(&base_canonical) {
        logger::log_warning(&format!(
            "Path traversal attempt blocked: {request_path} -> {}",
            target_canonical.display()
        ));
        return Err(GatewayError::AccessDenied);
    }

    match fs::metadata(&target_canonical).await {
        Ok(meta) if meta.is_dir() => return Err(GatewayError::FileNotFound(relative)),
        Ok(_) => {}
        Err(_) => return Err(GatewayError::FileNotFound(relative)),
    }

    let content = match fs::read(&target_canonical).await {
        Ok(c) => c,
        Err(e) => {
            logger::log_error(&format!(
                "Failed to read file '{}': {e}",
                target_canonical.display()
            ));
            return Err(GatewayError::FileNotFound(relative));
        }
    };

    let content_type = mime::content_type(target_canonical.extension().and_then(|e| e.to_str()));

    Ok((content, content_type))
}

/// The directory a route serves from; an empty `dir` means the data
/// directory itself.
fn base_dir(data_dir: &Path, route: &Route) -> PathBuf {
    if route.dir.is_empty() {
        data_dir.to_path_buf()
    } else {
        data_dir.join(&route.dir)
    }
}
