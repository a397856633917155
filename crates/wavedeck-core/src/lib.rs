/// wavedeck core — directory browsing, media classification and mount
/// enumeration.
///
/// This crate contains all filesystem logic with zero HTTP dependencies.
/// The server crate wraps these functions in routes; anything that needs to
/// list a music folder without a web stack can use them directly.
///
/// # Modules
///
/// - [`model`] — Serialisable listing and mount types.
/// - [`media`] — Extension allow-lists and cover image selection.
/// - [`browse`] — Single-directory listing, collation and path scoping.
/// - [`platform`] — Per-OS mount enumeration and browser launching.
/// - [`config`] — Immutable server configuration.
/// - [`error`] — Error types shared by the modules above.
pub mod browse;
pub mod config;
pub mod error;
pub mod media;
pub mod model;
pub mod platform;

pub use config::ServerConfig;
pub use error::{BrowseError, ConfigError};
