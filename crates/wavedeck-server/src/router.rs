/// Router assembly.
///
/// | Path | Description |
/// |------|-------------|
/// | `/serverInfo` | Plain-text server signature |
/// | `/getDir/{*path}` | JSON listing of a directory |
/// | `/getCover/{*path}` | Cover image name of a directory |
/// | `/getMounts` | JSON array of mount points |
/// | `/getFile/{*path}` | Allow-listed file bytes |
/// | `/getBackgrounds` | JSON array of background files |
/// | `/music/{*path}` | Allow-listed files under the music root |
/// | `/backgrounds/{*path}` | Allow-listed files under the backgrounds folder |
/// | anything else | The client bundle |
use crate::handlers;
use crate::state::AppState;
use axum::routing::get;
use axum::Router;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub fn build_router(state: AppState) -> Router {
    let mut router = Router::new()
        .route("/serverInfo", get(handlers::server_info))
        .route("/getDir", get(handlers::get_root_dir))
        .route("/getDir/{*path}", get(handlers::get_dir))
        .route("/getCover", get(handlers::get_root_cover))
        .route("/getCover/{*path}", get(handlers::get_cover))
        .route("/getMounts", get(handlers::get_mounts))
        .route("/getFile/{*path}", get(handlers::get_file))
        .route("/getBackgrounds", get(handlers::get_backgrounds));

    if state.scope.root().is_some() {
        router = router.route("/music/{*path}", get(handlers::get_music));
    }
    if state.config.backgrounds_dir.is_some() {
        router = router.route("/backgrounds/{*path}", get(handlers::get_background));
    }

    router
        .fallback_service(ServeDir::new(&state.config.public_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
