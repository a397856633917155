/// Directory listing types.
///
/// `RawListing` is what the directory lister produces: every visible entry,
/// partitioned and sorted. `DirListing` is the media view sent to clients.
use serde::{Deserialize, Serialize};

/// Visible entries of one directory, partitioned into subdirectories and
/// files. Both lists are in collation order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawListing {
    pub dirs: Vec<String>,
    pub files: Vec<String>,
}

/// Media view of one directory.
///
/// Serialises as `{ "dirs": [...], "files": [...], "cover": "..." }`.
/// `cover` is omitted when the directory holds no images and `subs` is
/// omitted when it holds no subtitle tracks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirListing {
    /// Subdirectory names.
    pub dirs: Vec<String>,
    /// Playable files: audio tracks and playlists.
    pub files: Vec<String>,
    /// Selected cover image, if any image is present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover: Option<String>,
    /// Subtitle / lyrics tracks.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subs: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialises_without_optional_fields() {
        let listing = DirListing {
            dirs: vec!["Live".into()],
            files: vec!["01.flac".into()],
            cover: None,
            subs: Vec::new(),
        };
        let json = serde_json::to_string(&listing).unwrap();
        assert_eq!(json, r#"{"dirs":["Live"],"files":["01.flac"]}"#);
    }

    #[test]
    fn serialises_cover_and_subs_when_present() {
        let listing = DirListing {
            dirs: Vec::new(),
            files: vec!["song.mp3".into()],
            cover: Some("cover.jpg".into()),
            subs: vec!["song.vtt".into()],
        };
        let value = serde_json::to_value(&listing).unwrap();
        assert_eq!(value["cover"], "cover.jpg");
        assert_eq!(value["subs"][0], "song.vtt");
    }
}
