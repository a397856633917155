//! Media classification based on file extensions.
//!
//! The extension sets double as the allow-list for direct file serving:
//! anything that does not classify is never handed out by `/getFile`.

/// Kinds of file the player knows how to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaKind {
    Audio,
    Image,
    Video,
    Subtitle,
    Playlist,
}

impl MediaKind {
    /// Human-readable label for logs.
    pub fn label(self) -> &'static str {
        match self {
            Self::Audio => "audio",
            Self::Image => "image",
            Self::Video => "video",
            Self::Subtitle => "subtitle",
            Self::Playlist => "playlist",
        }
    }
}

/// Longest extension in any allow-list, plus headroom.
const MAX_EXT_LEN: usize = 8;

/// Classify a bare extension (no leading dot), case-insensitively.
///
/// Extensions are lowercased into a fixed-size stack buffer rather than a
/// `String`; anything longer than `MAX_EXT_LEN` bytes cannot match.
pub fn classify_extension(ext: &str) -> Option<MediaKind> {
    let bytes = ext.as_bytes();
    if bytes.is_empty() || bytes.len() > MAX_EXT_LEN {
        return None;
    }

    let mut lower = [0u8; MAX_EXT_LEN];
    for (dest, &src) in lower.iter_mut().zip(bytes.iter()) {
        *dest = src.to_ascii_lowercase();
    }
    let lower_str = std::str::from_utf8(&lower[..bytes.len()]).ok()?;

    match lower_str {
        "aac" | "flac" | "m4a" | "mp3" | "oga" | "ogg" | "opus" | "wav" | "weba" => {
            Some(MediaKind::Audio)
        }
        "avif" | "bmp" | "gif" | "jpeg" | "jpg" | "png" | "webp" => Some(MediaKind::Image),
        "m4v" | "mkv" | "mov" | "mp4" | "webm" => Some(MediaKind::Video),
        "vtt" => Some(MediaKind::Subtitle),
        "m3u" | "m3u8" => Some(MediaKind::Playlist),
        _ => None,
    }
}

/// Split a file name into stem and extension at the last dot.
///
/// Returns `None` when there is no extension. A name like `.hidden` has
/// no extension: the dot starts the name rather than separating it.
pub fn split_extension(name: &str) -> Option<(&str, &str)> {
    match name.rfind('.') {
        Some(0) | None => None,
        Some(pos) => Some((&name[..pos], &name[pos + 1..])),
    }
}

/// Classify a file name by its extension.
pub fn classify_name(name: &str) -> Option<MediaKind> {
    split_extension(name).and_then(|(_, ext)| classify_extension(ext))
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── classify_extension ───────────────────────────────────────────────

    #[test]
    fn classify_known_audio_extensions() {
        for ext in &["mp3", "flac", "m4a", "ogg", "opus", "wav"] {
            assert_eq!(
                classify_extension(ext),
                Some(MediaKind::Audio),
                "expected Audio for .{ext}"
            );
        }
    }

    #[test]
    fn classify_known_image_extensions() {
        for ext in &["jpg", "jpeg", "png", "gif", "webp", "avif"] {
            assert_eq!(
                classify_extension(ext),
                Some(MediaKind::Image),
                "expected Image for .{ext}"
            );
        }
    }

    #[test]
    fn labels_name_each_kind() {
        assert_eq!(MediaKind::Audio.label(), "audio");
        assert_eq!(MediaKind::Playlist.label(), "playlist");
    }

    #[test]
    fn classify_case_insensitive() {
        assert_eq!(classify_extension("MP3"), Some(MediaKind::Audio));
        assert_eq!(classify_extension("Jpg"), Some(MediaKind::Image));
        assert_eq!(classify_extension("VTT"), Some(MediaKind::Subtitle));
    }

    #[test]
    fn classify_unknown_or_oversized_extension() {
        assert_eq!(classify_extension("exe"), None);
        assert_eq!(classify_extension(""), None);
        assert_eq!(classify_extension("mp3mp3mp3mp3"), None);
    }

    // ── classify_name ────────────────────────────────────────────────────

    #[test]
    fn classify_name_uses_last_extension() {
        assert_eq!(classify_name("live.2019.flac"), Some(MediaKind::Audio));
        assert_eq!(classify_name("setlist.m3u8"), Some(MediaKind::Playlist));
        assert_eq!(classify_name("song.mp3.exe"), None);
    }

    #[test]
    fn names_without_extension_do_not_classify() {
        assert_eq!(classify_name("README"), None);
        assert_eq!(classify_name(".mp3"), None);
    }
}
