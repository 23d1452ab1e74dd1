//! Serving the single-page application under its base path.
//!
//! Clean-URL history puts route paths straight into the address bar, so a
//! reload on `/app/about` must still return the application shell.

use std::convert::Infallible;
use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
};
use tower::ServiceExt;
use tower_http::services::{ServeDir, ServeFile};

use super::SiteState;

const INDEX_FILE: &str = "index.html";

pub async fn serve_site(State(state): State<Arc<SiteState>>, request: Request) -> Response {
    let url = request
        .uri()
        .path_and_query()
        .map(|p| p.as_str())
        .unwrap_or("/")
        .to_string();

    let route = match state.router.resolve_url(&url) {
        Ok(route) => route,
        Err(e) => {
            tracing::debug!("Not serving {}: {}", url, e);
            return StatusCode::NOT_FOUND.into_response();
        }
    };

    if let Some(name) = &route.name {
        tracing::debug!(route = %name, "Serving application shell for {}", url);
        let index = ServeFile::new(state.site_root.join(INDEX_FILE));
        return into_response(index.oneshot(request).await);
    }

    // Static asset: hand ServeDir the path with the base stripped.
    let (mut parts, body) = request.into_parts();
    parts.uri = match Uri::try_from(route.location.full_path.as_str()) {
        Ok(uri) => uri,
        Err(e) => {
            tracing::debug!("Invalid asset path {}: {}", route.location.full_path, e);
            return StatusCode::BAD_REQUEST.into_response();
        }
    };

    let assets = ServeDir::new(&state.site_root);
    into_response(assets.oneshot(Request::from_parts(parts, body)).await)
}

fn into_response<R: IntoResponse>(result: Result<R, Infallible>) -> Response {
    match result {
        Ok(response) => response.into_response(),
        Err(never) => match never {},
    }
}
