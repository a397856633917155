/// Drive enumeration using the Windows API.
///
/// Lists the root of every logical drive (`C:\`, `D:\`, ...). Drives that
/// cannot be stat'ed, such as an empty card reader, are left out.
use super::{keep_accessible, MountSource};
use crate::model::MountPoint;
use std::ffi::OsString;
use std::os::windows::ffi::OsStringExt;
use std::path::PathBuf;
use windows::Win32::Storage::FileSystem::GetLogicalDriveStringsW;

/// Mount source backed by `GetLogicalDriveStringsW`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogicalDrives;

impl MountSource for LogicalDrives {
    fn mount_points(&self) -> Vec<MountPoint> {
        // GetLogicalDriveStringsW returns null-separated drive root strings.
        let mut buffer = [0u16; 256];
        let len = unsafe { GetLogicalDriveStringsW(Some(&mut buffer)) };

        if len == 0 {
            tracing::warn!("GetLogicalDriveStringsW returned 0");
            return Vec::new();
        }

        let full = OsString::from_wide(&buffer[..len as usize]);
        let roots = full
            .to_string_lossy()
            .split('\0')
            .filter(|s| !s.is_empty())
            .map(PathBuf::from)
            .collect::<Vec<_>>();

        keep_accessible(roots)
    }
}
