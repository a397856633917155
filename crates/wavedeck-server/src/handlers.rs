/// Route handlers.
///
/// Each handler resolves the request path through the configured
/// [`BrowseScope`](wavedeck_core::browse::BrowseScope). Listing handlers
/// run the synchronous core call on the blocking pool; file handlers
/// hand the checked path to `ServeFile`.
use crate::error::ApiError;
use crate::state::AppState;
use axum::extract::{Path, Request, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use tokio::task;
use tower::ServiceExt;
use tower_http::services::ServeFile;
use tracing::debug;
use wavedeck_core::browse::{self, BrowseScope};
use wavedeck_core::media;
use wavedeck_core::model::{DirListing, MountPoint};

/// `GET /serverInfo`
pub async fn server_info() -> String {
    crate::signature()
}

/// `GET /getDir`
pub async fn get_root_dir(State(state): State<AppState>) -> Result<Json<DirListing>, ApiError> {
    list_dir(&state, "").await
}

/// `GET /getDir/{*path}`
pub async fn get_dir(
    State(state): State<AppState>,
    Path(path): Path<String>,
) -> Result<Json<DirListing>, ApiError> {
    list_dir(&state, &path).await
}

async fn list_dir(state: &AppState, request: &str) -> Result<Json<DirListing>, ApiError> {
    let dir = state.scope.resolve(request)?;
    let options = state.config.list_options();
    let listing = task::spawn_blocking(move || browse::list_media_dir(&dir, &options)).await??;
    Ok(Json(listing))
}

/// `GET /getCover`
pub async fn get_root_cover(State(state): State<AppState>) -> Result<String, ApiError> {
    cover_of(&state, "").await
}

/// `GET /getCover/{*path}` — the cover file name, or an empty body.
pub async fn get_cover(
    State(state): State<AppState>,
    Path(path): Path<String>,
) -> Result<String, ApiError> {
    cover_of(&state, &path).await
}

async fn cover_of(state: &AppState, request: &str) -> Result<String, ApiError> {
    let dir = state.scope.resolve(request)?;
    let options = state.config.list_options();
    let cover = task::spawn_blocking(move || browse::find_cover(&dir, &options)).await??;
    Ok(cover.unwrap_or_default())
}

/// `GET /getMounts`
pub async fn get_mounts(State(state): State<AppState>) -> Result<Json<Vec<MountPoint>>, ApiError> {
    let mounts = state.mounts.clone();
    let points = task::spawn_blocking(move || mounts.mount_points()).await?;
    Ok(Json(points))
}

/// `GET /getBackgrounds` — empty when no backgrounds folder is configured.
pub async fn get_backgrounds(State(state): State<AppState>) -> Result<Json<Vec<String>>, ApiError> {
    let Some(dir) = state.config.backgrounds_dir.clone() else {
        return Ok(Json(Vec::new()));
    };
    let names = task::spawn_blocking(move || browse::list_backgrounds(&dir)).await??;
    Ok(Json(names))
}

/// `GET /getFile/{*path}`
pub async fn get_file(
    State(state): State<AppState>,
    Path(path): Path<String>,
    request: Request,
) -> Result<Response, ApiError> {
    serve_media(&state.scope, &path, state.config.show_hidden, request).await
}

/// `GET /music/{*path}` — only routed when a music root is configured.
pub async fn get_music(
    State(state): State<AppState>,
    Path(path): Path<String>,
    request: Request,
) -> Result<Response, ApiError> {
    if state.scope.root().is_none() {
        return Err(ApiError::NotFound);
    }
    serve_media(&state.scope, &path, state.config.show_hidden, request).await
}

/// `GET /backgrounds/{*path}` — backgrounds never include dotfiles.
pub async fn get_background(
    State(state): State<AppState>,
    Path(path): Path<String>,
    request: Request,
) -> Result<Response, ApiError> {
    let Some(dir) = &state.config.backgrounds_dir else {
        return Err(ApiError::NotFound);
    };
    let scope = BrowseScope::Rooted(dir.clone());
    serve_media(&scope, &path, false, request).await
}

/// Serve one allow-listed file through `ServeFile`, which takes care of
/// content type, conditional requests and byte ranges.
///
/// The extension check runs before the filesystem is touched, so a
/// disallowed name is refused with 403 whether or not it exists. Hidden
/// names answer 404, matching what the listings show.
async fn serve_media(
    scope: &BrowseScope,
    request_path: &str,
    show_hidden: bool,
    request: Request,
) -> Result<Response, ApiError> {
    let file_path = scope.resolve(request_path)?;
    let name = file_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let Some(kind) = media::classify_name(&name) else {
        debug!("Refusing to serve {}", file_path.display());
        return Err(ApiError::Forbidden);
    };
    if !show_hidden && browse::is_hidden_request(request_path) {
        return Err(ApiError::NotFound);
    }

    let metadata = tokio::fs::metadata(&file_path)
        .await
        .map_err(|_| ApiError::NotFound)?;
    if !metadata.is_file() {
        return Err(ApiError::NotFound);
    }

    debug!("Serving {} file {}", kind.label(), file_path.display());
    let response = ServeFile::new(&file_path)
        .oneshot(request)
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?;
    Ok(response.into_response())
}
