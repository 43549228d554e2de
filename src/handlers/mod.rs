pub mod items;

use axum::{
    http::{Method, StatusCode, Uri},
    response::{IntoResponse, Redirect, Response},
    Json,
};
use serde_json::json;
use tracing::debug;

pub async fn health() -> (StatusCode, Json<serde_json::Value>) {
    (StatusCode::OK, Json(json!({ "status": "ok", "service": "inventory-service" })))
}

/// Unmatched GETs bounce back to the listing; anything else is a plain 404.
pub async fn fallback(method: Method, uri: Uri) -> Response {
    if method == Method::GET {
        debug!(path = %uri.path(), "Redirecting unknown path to /");
        return Redirect::temporary("/").into_response();
    }
    (StatusCode::NOT_FOUND, Json(json!({ "detail": "Not Found" }))).into_response()
}

/// Method mismatch on a known path: GETs still redirect, other methods get 405.
pub async fn method_fallback(method: Method, uri: Uri) -> Response {
    if method == Method::GET {
        debug!(path = %uri.path(), "Redirecting GET on non-GET route to /");
        return Redirect::temporary("/").into_response();
    }
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(json!({ "detail": "Method Not Allowed" })),
    )
        .into_response()
}
