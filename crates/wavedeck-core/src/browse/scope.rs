/// Request-path resolution.
///
/// Clients send paths as they appear in the URL. With a music root the
/// path is relative to that root; without one it names an absolute
/// location (the client discovers roots through `/getMounts`). Either way
/// `..` components are refused outright rather than normalised.
use crate::error::BrowseError;
use std::path::{Component, Path, PathBuf, MAIN_SEPARATOR_STR};

/// Where request paths are resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseScope {
    /// Paths are relative to this directory and may not leave it.
    Rooted(PathBuf),
    /// Paths are absolute filesystem locations.
    Filesystem,
}

impl BrowseScope {
    /// Map a request path to a filesystem path.
    pub fn resolve(&self, request: &str) -> Result<PathBuf, BrowseError> {
        let forbidden = || BrowseError::Forbidden(request.to_string());

        if Path::new(request)
            .components()
            .any(|c| c == Component::ParentDir)
        {
            return Err(forbidden());
        }

        match self {
            Self::Rooted(root) => {
                let relative = Path::new(request.trim_start_matches(['/', '\\']));
                let escapes = relative
                    .components()
                    .any(|c| matches!(c, Component::RootDir | Component::Prefix(_)));
                if escapes {
                    return Err(forbidden());
                }
                Ok(root.join(relative))
            }
            Self::Filesystem => {
                let path = Path::new(request);
                if path.is_absolute() {
                    Ok(path.to_path_buf())
                } else {
                    Ok(Path::new(MAIN_SEPARATOR_STR).join(path))
                }
            }
        }
    }

    /// The music root, when there is one.
    pub fn root(&self) -> Option<&Path> {
        match self {
            Self::Rooted(root) => Some(root),
            Self::Filesystem => None,
        }
    }
}

/// Whether a request path names a dotfile or passes through a
/// dot-directory. Listings hide such entries unless `show_hidden` is set,
/// so file serving refuses them under the same rule.
pub fn is_hidden_request(request: &str) -> bool {
    Path::new(request).components().any(|c| match c {
        Component::Normal(name) => name.to_string_lossy().starts_with('.'),
        _ => false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rooted_joins_relative_paths() {
        let scope = BrowseScope::Rooted(PathBuf::from("/srv/music"));
        assert_eq!(
            scope.resolve("Artist/Album").unwrap(),
            PathBuf::from("/srv/music/Artist/Album")
        );
        assert_eq!(
            scope.resolve("/Artist").unwrap(),
            PathBuf::from("/srv/music/Artist")
        );
        assert_eq!(scope.resolve("").unwrap(), PathBuf::from("/srv/music"));
    }

    #[test]
    fn parent_components_are_forbidden() {
        let scope = BrowseScope::Rooted(PathBuf::from("/srv/music"));
        assert!(matches!(
            scope.resolve("../etc"),
            Err(BrowseError::Forbidden(_))
        ));
        assert!(matches!(
            scope.resolve("Artist/../../etc"),
            Err(BrowseError::Forbidden(_))
        ));
        assert!(matches!(
            BrowseScope::Filesystem.resolve("/home/../etc"),
            Err(BrowseError::Forbidden(_))
        ));
    }

    #[test]
    fn dotted_names_are_not_parent_components() {
        let scope = BrowseScope::Rooted(PathBuf::from("/srv/music"));
        assert_eq!(
            scope.resolve("Live...at Home").unwrap(),
            PathBuf::from("/srv/music/Live...at Home")
        );
    }

    #[cfg(unix)]
    #[test]
    fn filesystem_scope_makes_paths_absolute() {
        let scope = BrowseScope::Filesystem;
        assert_eq!(scope.resolve("media/usb").unwrap(), PathBuf::from("/media/usb"));
        assert_eq!(scope.resolve("/media/usb").unwrap(), PathBuf::from("/media/usb"));
        assert_eq!(scope.resolve("").unwrap(), PathBuf::from("/"));
        assert_eq!(scope.root(), None);
    }

    #[test]
    fn hidden_requests_are_detected_per_component() {
        assert!(is_hidden_request(".secret.mp3"));
        assert!(is_hidden_request("Album/.covers/front.jpg"));
        assert!(is_hidden_request("/.config/song.mp3"));
        assert!(!is_hidden_request("Album/song.mp3"));
        assert!(!is_hidden_request("./Album/song.mp3"));
        assert!(!is_hidden_request("Live...at Home/intro.ogg"));
    }
}
