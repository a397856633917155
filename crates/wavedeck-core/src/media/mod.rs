/// Media module — turns a raw directory listing into what the player shows.

pub mod cover;
pub mod kind;

pub use cover::select_cover;
pub use kind::{classify_extension, classify_name, MediaKind};

use crate::model::{DirListing, RawListing};

/// Build the media view of a directory.
///
/// Audio files and playlists become `files`, subtitle tracks become `subs`,
/// and the cover is chosen among the images. Everything else is dropped.
/// Listing order is preserved throughout.
pub fn build_listing(raw: RawListing) -> DirListing {
    let mut files = Vec::new();
    let mut images = Vec::new();
    let mut subs = Vec::new();

    for name in raw.files {
        match classify_name(&name) {
            Some(MediaKind::Audio | MediaKind::Playlist) => files.push(name),
            Some(MediaKind::Image) => images.push(name),
            Some(MediaKind::Subtitle) => subs.push(name),
            Some(MediaKind::Video) | None => {}
        }
    }

    let cover = select_cover(&images).cloned();

    DirListing {
        dirs: raw.dirs,
        files,
        cover,
        subs,
    }
}

/// Image and video files usable as visualizer backgrounds.
pub fn background_files(raw: RawListing) -> Vec<String> {
    raw.files
        .into_iter()
        .filter(|name| matches!(classify_name(name), Some(MediaKind::Image | MediaKind::Video)))
        .collect()
}
