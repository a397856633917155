/// Server configuration.
///
/// Built once from command-line input before the server starts, validated,
/// then shared read-only with every request handler. Nothing in here changes
/// after start-up.
use crate::browse::{BrowseScope, ListOptions};
use crate::error::ConfigError;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};

/// Default listening port.
pub const DEFAULT_PORT: u16 = 8000;

/// Default location of the client bundle, relative to the working directory.
pub const DEFAULT_PUBLIC_DIR: &str = "public";

/// Immutable server configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Music root. `None` exposes the whole filesystem for browsing.
    pub music_root: Option<PathBuf>,
    pub port: u16,
    /// Listen on all interfaces instead of loopback only.
    pub allow_external: bool,
    /// Open the client in a browser once the server is listening.
    pub open_browser: bool,
    /// Folder of visualizer background images and videos.
    pub backgrounds_dir: Option<PathBuf>,
    /// Client bundle served at `/`.
    pub public_dir: PathBuf,
    /// Include dotfiles in directory listings.
    pub show_hidden: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            music_root: None,
            port: DEFAULT_PORT,
            allow_external: false,
            open_browser: true,
            backgrounds_dir: None,
            public_dir: PathBuf::from(DEFAULT_PUBLIC_DIR),
            show_hidden: false,
        }
    }
}

impl ServerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_music_root(mut self, path: impl AsRef<Path>) -> Self {
        self.music_root = Some(expand_home(path.as_ref()));
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_external(mut self, allow: bool) -> Self {
        self.allow_external = allow;
        self
    }

    pub fn with_browser(mut self, open: bool) -> Self {
        self.open_browser = open;
        self
    }

    pub fn with_backgrounds(mut self, path: impl AsRef<Path>) -> Self {
        self.backgrounds_dir = Some(expand_home(path.as_ref()));
        self
    }

    pub fn with_public_dir(mut self, path: impl AsRef<Path>) -> Self {
        self.public_dir = expand_home(path.as_ref());
        self
    }

    pub fn with_hidden(mut self, show: bool) -> Self {
        self.show_hidden = show;
        self
    }

    /// Check that every configured folder exists and is a directory.
    ///
    /// The client bundle is not checked: a missing bundle just means `/`
    /// answers 404, which is fine for API-only use.
    pub fn validate(self) -> Result<Self, ConfigError> {
        for dir in [&self.music_root, &self.backgrounds_dir].into_iter().flatten() {
            if !dir.is_dir() {
                return Err(ConfigError::NotADirectory(dir.clone()));
            }
        }
        Ok(self)
    }

    /// Address to bind: loopback unless external connections are allowed.
    pub fn bind_addr(&self) -> SocketAddr {
        let ip = if self.allow_external {
            IpAddr::V4(Ipv4Addr::UNSPECIFIED)
        } else {
            IpAddr::V4(Ipv4Addr::LOCALHOST)
        };
        SocketAddr::new(ip, self.port)
    }

    /// URL for a browser on this machine.
    pub fn local_url(&self) -> String {
        format!("http://localhost:{}/", self.port)
    }

    /// How request paths map onto the filesystem.
    pub fn scope(&self) -> BrowseScope {
        match &self.music_root {
            Some(root) => BrowseScope::Rooted(root.clone()),
            None => BrowseScope::Filesystem,
        }
    }

    pub fn list_options(&self) -> ListOptions {
        ListOptions {
            show_hidden: self.show_hidden,
        }
    }
}

/// Expand a leading `~` to the user's home directory.
fn expand_home(path: &Path) -> PathBuf {
    let raw = path.to_string_lossy();
    PathBuf::from(shellexpand::tilde(&raw).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_bind_loopback() {
        let config = ServerConfig::new();
        assert_eq!(config.bind_addr(), "127.0.0.1:8000".parse::<SocketAddr>().unwrap());
        assert_eq!(config.scope(), BrowseScope::Filesystem);
        assert!(config.open_browser);
    }

    #[test]
    fn external_binds_all_interfaces() {
        let config = ServerConfig::new().with_external(true).with_port(9090);
        assert_eq!(config.bind_addr(), "0.0.0.0:9090".parse::<SocketAddr>().unwrap());
        assert_eq!(config.local_url(), "http://localhost:9090/");
    }

    #[test]
    fn music_root_gives_rooted_scope() {
        let tmp = tempfile::TempDir::new().unwrap();
        let config = ServerConfig::new().with_music_root(tmp.path());
        assert_eq!(config.scope(), BrowseScope::Rooted(tmp.path().to_path_buf()));
    }

    #[test]
    fn validate_rejects_missing_music_root() {
        let tmp = tempfile::TempDir::new().unwrap();
        let missing = tmp.path().join("nope");
        let err = ServerConfig::new()
            .with_music_root(&missing)
            .validate()
            .unwrap_err();
        assert!(matches!(err, ConfigError::NotADirectory(p) if p == missing));
    }

    #[test]
    fn validate_rejects_file_as_backgrounds() {
        let tmp = tempfile::TempDir::new().unwrap();
        let file = tmp.path().join("bg.jpg");
        std::fs::write(&file, b"x").unwrap();
        assert!(ServerConfig::new().with_backgrounds(&file).validate().is_err());
    }

    #[test]
    fn validate_accepts_existing_dirs() {
        let tmp = tempfile::TempDir::new().unwrap();
        let config = ServerConfig::new()
            .with_music_root(tmp.path())
            .with_backgrounds(tmp.path())
            .validate()
            .unwrap();
        assert_eq!(config.music_root.as_deref(), Some(tmp.path()));
    }

    #[test]
    fn hidden_flag_reaches_list_options() {
        assert!(ServerConfig::new().with_hidden(true).list_options().show_hidden);
        assert!(!ServerConfig::new().list_options().show_hidden);
    }
}
