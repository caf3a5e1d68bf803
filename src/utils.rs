use log::debug;
use std::path::PathBuf;

/// Directory CSV exports go to when the caller has no preference: the user's download
/// directory, or the current directory if the platform has none.
pub fn default_export_dir() -> PathBuf {
    dirs::download_dir().unwrap_or_else(|| {
        debug!("No download directory on this platform, exporting to the current directory");
        std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
    })
}
