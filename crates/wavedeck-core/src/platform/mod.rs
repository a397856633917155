/// Platform-specific functionality — mount enumeration and browser launch.
///
/// The rest of the crate only sees the [`MountSource`] trait. The concrete
/// source is picked once at start-up by [`system_mount_source`].

pub mod browser;
pub mod df;
#[cfg(windows)]
pub mod drives;

pub use browser::launch_browser;
pub use df::{parse_df_output, DfMounts};
#[cfg(windows)]
pub use drives::LogicalDrives;

use crate::model::MountPoint;
use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::debug;

/// Something that can enumerate the machine's mount points or drives.
pub trait MountSource: Send + Sync {
    fn mount_points(&self) -> Vec<MountPoint>;
}

/// A fixed list of mount points, returned as-is.
#[derive(Debug, Clone, Default)]
pub struct FixedMounts(pub Vec<MountPoint>);

impl MountSource for FixedMounts {
    fn mount_points(&self) -> Vec<MountPoint> {
        self.0.clone()
    }
}

/// The mount source for the current operating system.
pub fn system_mount_source() -> Arc<dyn MountSource> {
    #[cfg(windows)]
    {
        Arc::new(LogicalDrives)
    }
    #[cfg(not(windows))]
    {
        Arc::new(DfMounts::default())
    }
}

/// Keep only candidates that can be stat'ed, dropping duplicates while
/// preserving the original order.
pub(crate) fn keep_accessible(candidates: impl IntoIterator<Item = PathBuf>) -> Vec<MountPoint> {
    let mut seen = HashSet::new();
    candidates
        .into_iter()
        .filter(|path| match fs::metadata(path) {
            Ok(_) => true,
            Err(e) => {
                debug!("Dropping mount {}: {e}", path.display());
                false
            }
        })
        .filter(|path| seen.insert(path.clone()))
        .map(MountPoint::new)
        .collect()
}
