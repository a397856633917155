/// Cover image selection.
///
/// Picks the image most likely to be album art: the first name containing
/// `cover`, else `folder`, else `front`, else simply the first image.
use super::kind::split_extension;

/// Keywords searched in priority order.
pub const COVER_KEYWORDS: [&str; 3] = ["cover", "folder", "front"];

/// Select a cover from `images`, which must already be in listing order.
///
/// Only the part of the name before its extension is searched, so
/// `folder.cover.png` matches `cover` but `cover` alone (no extension) is
/// matched on the whole name.
pub fn select_cover<S: AsRef<str>>(images: &[S]) -> Option<&S> {
    for keyword in COVER_KEYWORDS {
        let hit = images.iter().find(|name| {
            let name = name.as_ref();
            let stem = split_extension(name).map_or(name, |(stem, _)| stem);
            stem.to_lowercase().contains(keyword)
        });
        if hit.is_some() {
            return hit;
        }
    }
    images.first()
}
