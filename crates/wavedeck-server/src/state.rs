/// Shared state handed to every request handler.
///
/// Everything is immutable after start-up, so cloning the state per request
/// only bumps reference counts.
use std::sync::Arc;
use wavedeck_core::browse::BrowseScope;
use wavedeck_core::platform::MountSource;
use wavedeck_core::ServerConfig;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    /// Derived from `config.music_root` once, at start-up.
    pub scope: Arc<BrowseScope>,
    pub mounts: Arc<dyn MountSource>,
}

impl AppState {
    pub fn new(config: ServerConfig, mounts: Arc<dyn MountSource>) -> Self {
        let scope = Arc::new(config.scope());
        Self {
            config: Arc::new(config),
            scope,
            mounts,
        }
    }
}
