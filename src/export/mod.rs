//! Writing maps to disk and opening them

pub mod browser;

pub use browser::{file_uri, BrowserLauncher, SystemBrowser};

use crate::{core::map::Map, Result};
use std::path::Path;

/// Renders `map` and writes it to `path`, replacing any existing file
pub fn save(map: &Map, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let html = map.to_html()?;
    std::fs::write(path, html.as_bytes())?;
    log::info!("Saved map to {} ({} bytes)", path.display(), html.len());
    Ok(())
}

/// Saves `map` to `path` and asks `launcher` to open the written file
///
/// Nothing is retried: a write failure skips the launch, and a launch
/// failure is returned after the file is already on disk.
pub fn save_and_open_with(
    map: &Map,
    path: impl AsRef<Path>,
    launcher: &dyn BrowserLauncher,
) -> Result<()> {
    let path = path.as_ref();
    save(map, path)?;
    let uri = file_uri(path)?;
    launcher.open(&uri)
}
