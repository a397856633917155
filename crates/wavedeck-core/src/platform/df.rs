/// Mount enumeration through the POSIX `df` utility.
///
/// `df -P` prints one line per filesystem in a fixed six-column layout:
///
/// ```text
/// Filesystem     1024-blocks      Used Available Capacity Mounted on
/// /dev/nvme0n1p2   490617784 210040764 255554676      46% /
/// ```
///
/// The mount point is the last column and may itself contain spaces.
use super::{keep_accessible, MountSource};
use crate::model::MountPoint;
use std::path::PathBuf;
use std::process::Command;
use tracing::warn;

/// Number of whitespace-separated columns before the mount point.
const DF_FIELDS_BEFORE_MOUNT: usize = 5;

/// Mount source backed by `df -P`.
#[derive(Debug, Clone)]
pub struct DfMounts {
    program: String,
}

impl Default for DfMounts {
    fn default() -> Self {
        Self {
            program: "df".to_string(),
        }
    }
}

impl DfMounts {
    /// Use a different `df` binary (e.g. `gdf` or an absolute path).
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl MountSource for DfMounts {
    fn mount_points(&self) -> Vec<MountPoint> {
        let output = match Command::new(&self.program).arg("-P").output() {
            Ok(output) => output,
            Err(e) => {
                warn!("Failed to run {} -P: {e}", self.program);
                return Vec::new();
            }
        };

        // df exits non-zero when any single filesystem is unreadable but still
        // prints the others, so the status alone is not a reason to give up.
        if !output.status.success() {
            warn!("{} -P exited with {}", self.program, output.status);
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        keep_accessible(parse_df_output(&stdout))
    }
}

/// Extract mount points from `df -P` output. The header line is skipped,
/// as is any line too short to hold a mount point.
pub fn parse_df_output(output: &str) -> Vec<PathBuf> {
    output
        .lines()
        .skip(1)
        .filter_map(|line| {
            let fields: Vec<&str> = line.split_whitespace().collect();
            if fields.len() <= DF_FIELDS_BEFORE_MOUNT {
                return None;
            }
            Some(PathBuf::from(fields[DF_FIELDS_BEFORE_MOUNT..].join(" ")))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
Filesystem     1024-blocks      Used Available Capacity Mounted on
/dev/nvme0n1p2   490617784 210040764 255554676      46% /
tmpfs              8041400         0   8041400       0% /dev/shm
/dev/sdb1         30297088  12000000  18297088      40% /media/user/My Music
";

    #[test]
    fn parses_mount_column() {
        let mounts = parse_df_output(SAMPLE);
        assert_eq!(
            mounts,
            vec![
                PathBuf::from("/"),
                PathBuf::from("/dev/shm"),
                PathBuf::from("/media/user/My Music"),
            ]
        );
    }

    #[test]
    fn skips_header_and_short_lines() {
        let output = "Filesystem 1024-blocks Used Available Capacity Mounted on\n\ngarbage line\n";
        assert!(parse_df_output(output).is_empty());
        assert!(parse_df_output("").is_empty());
    }

    #[test]
    fn missing_program_yields_empty_list() {
        let source = DfMounts::with_program("wavedeck-no-such-df-binary");
        assert!(source.mount_points().is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn system_df_reports_root() {
        // Every Unix host has `/` mounted; skip quietly where df is absent.
        let mounts = DfMounts::default().mount_points();
        if !mounts.is_empty() {
            assert!(mounts.iter().any(|m| m.path() == std::path::Path::new("/")));
        }
    }
}
