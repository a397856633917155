/// Browse module — single-directory listing for the file browser.
///
/// Every function here reads exactly one directory, synchronously, and
/// returns owned data. Nothing is cached between calls. Callers running on
/// an async runtime should move these calls onto a blocking thread.
pub mod scope;

pub use scope::{is_hidden_request, BrowseScope};

use crate::error::BrowseError;
use crate::media;
use crate::model::{DirListing, RawListing};
use std::cmp::Ordering;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Options applied to every listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListOptions {
    /// Include names beginning with `.`.
    pub show_hidden: bool,
}

/// Case-insensitive collation used for every listing.
///
/// Names are compared by their Unicode lowercase forms, so `A.mp3` sorts
/// before `b.mp3`. Names that fold to the same form fall back to plain
/// ordering, which keeps the sort total and deterministic.
pub fn collate(a: &str, b: &str) -> Ordering {
    let folded_a = a.chars().flat_map(char::to_lowercase);
    let folded_b = b.chars().flat_map(char::to_lowercase);
    folded_a.cmp(folded_b).then_with(|| a.cmp(b))
}

/// Read one directory and partition its entries into subdirectories and
/// files, both sorted with [`collate`].
///
/// Any failure to open the directory becomes [`BrowseError::NotFound`];
/// permission errors and missing paths are not distinguished. Symlinks are
/// followed. Entries whose metadata cannot be read (e.g. dangling links)
/// are skipped.
pub fn read_dir_sorted(path: &Path, options: &ListOptions) -> Result<RawListing, BrowseError> {
    let entries = fs::read_dir(path).map_err(|e| {
        debug!("Cannot read {}: {e}", path.display());
        BrowseError::NotFound(path.to_path_buf())
    })?;

    let mut listing = RawListing::default();

    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                debug!("Skipping unreadable entry in {}: {e}", path.display());
                continue;
            }
        };

        let name = entry.file_name().to_string_lossy().into_owned();
        if !options.show_hidden && name.starts_with('.') {
            continue;
        }

        match fs::metadata(entry.path()) {
            Ok(meta) if meta.is_dir() => listing.dirs.push(name),
            Ok(_) => listing.files.push(name),
            Err(e) => debug!("Skipping {name}: {e}"),
        }
    }

    listing.dirs.sort_by(|a, b| collate(a, b));
    listing.files.sort_by(|a, b| collate(a, b));

    debug!(
        "Listed {}: {} dirs, {} files",
        path.display(),
        listing.dirs.len(),
        listing.files.len()
    );

    Ok(listing)
}

/// List a directory as the player sees it: subdirectories, playable files,
/// subtitle tracks and the selected cover.
pub fn list_media_dir(path: &Path, options: &ListOptions) -> Result<DirListing, BrowseError> {
    read_dir_sorted(path, options).map(media::build_listing)
}

/// The cover image of a directory, if it holds any image at all.
pub fn find_cover(path: &Path, options: &ListOptions) -> Result<Option<String>, BrowseError> {
    list_media_dir(path, options).map(|listing| listing.cover)
}

/// Image and video files in a backgrounds folder, hidden files excluded.
pub fn list_backgrounds(path: &Path) -> Result<Vec<String>, BrowseError> {
    read_dir_sorted(path, &ListOptions::default()).map(media::background_files)
}
