/// Open a URL in the user's default browser.
///
/// Shells out to the platform launcher. Failure is logged and otherwise
/// ignored: the server is perfectly usable without the browser tab.
use std::process::{Command, Stdio};
use tracing::{info, warn};

// `start` treats its first quoted argument as a window title.
const WINDOWS_START_ARGS: &[&str] = &["/C", "start", ""];
const NO_ARGS: &[&str] = &[];

/// Launcher program and leading arguments for this platform.
fn launcher() -> (&'static str, &'static [&'static str]) {
    if cfg!(target_os = "windows") {
        ("cmd", WINDOWS_START_ARGS)
    } else if cfg!(target_os = "macos") {
        ("open", NO_ARGS)
    } else {
        ("xdg-open", NO_ARGS)
    }
}

/// Ask the desktop to open `url`. Returns whether the launcher started.
pub fn launch_browser(url: &str) -> bool {
    let (program, args) = launcher();
    let spawned = Command::new(program)
        .args(args)
        .arg(url)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn();

    match spawned {
        Ok(_) => {
            info!("Opened {url} in the default browser");
            true
        }
        Err(e) => {
            warn!("Could not launch {program} for {url}: {e}");
            false
        }
    }
}
