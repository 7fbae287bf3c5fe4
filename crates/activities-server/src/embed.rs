use axum::extract::Path;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use rust_embed::Embed;

use crate::error::AppError;

#[derive(Embed)]
#[folder = "static/"]
struct StaticAssets;

fn asset_response(path: &str) -> Option<Response> {
    let content = <StaticAssets as Embed>::get(path)?;
    let mime = mime_guess::from_path(path).first_or_octet_stream();
    Some(
        (
            [(header::CONTENT_TYPE, mime.as_ref().to_string())],
            content.data.to_vec(),
        )
            .into_response(),
    )
}

/// GET / - the landing page, served directly rather than redirected.
pub async fn index() -> Result<Response, AppError> {
    asset_response("index.html").ok_or_else(|| AppError::not_found("landing page missing"))
}

/// GET /static/{*path} - embedded stylesheet, script and page.
pub async fn static_handler(Path(path): Path<String>) -> Result<Response, AppError> {
    let path = path.trim_start_matches('/');
    asset_response(path).ok_or_else(|| AppError::not_found(format!("asset '{path}' not found")))
}
