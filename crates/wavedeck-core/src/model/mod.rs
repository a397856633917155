/// Data model — the per-request listing objects and mount points.
///
/// Everything here is transient: built for one request, serialised, dropped.
pub mod listing;
pub mod mount;

pub use listing::{DirListing, RawListing};
pub use mount::MountPoint;
