//! Handing exported pages to a web browser
//!
//! Launching is behind [`BrowserLauncher`] so callers and tests can swap
//! the host browser for something that only records the request.

use crate::{MapError, Result};
use std::path::Path;
use url::Url;

/// Opens a URI somewhere a person can look at it
pub trait BrowserLauncher {
    fn open(&self, uri: &str) -> Result<()>;
}

/// The host's default browser, via the platform opener
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemBrowser;

impl BrowserLauncher for SystemBrowser {
    fn open(&self, uri: &str) -> Result<()> {
        log::info!("Opening {} in the default browser", uri);
        open::that(uri).map_err(|source| MapError::Browser {
            uri: uri.to_string(),
            source,
        })
    }
}

/// `file://` URI for the canonical absolute form of `path`
///
/// The path must exist, since symlinks and `..` are resolved on disk.
/// Spaces, `#` and non-UTF-8 bytes are percent-encoded.
pub fn file_uri(path: impl AsRef<Path>) -> Result<String> {
    let absolute = std::fs::canonicalize(path.as_ref())?;
    Url::from_file_path(&absolute)
        .map(String::from)
        .map_err(|()| MapError::FileUri(absolute))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_uri_is_absolute() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("page.html");
        std::fs::write(&path, "<html></html>").unwrap();

        let uri = file_uri(&path).unwrap();
        let expected = std::fs::canonicalize(&path).unwrap();
        assert!(uri.starts_with("file:///"));
        assert!(uri.ends_with("page.html"));
        assert_eq!(Url::parse(&uri).unwrap().to_file_path().unwrap(), expected);
    }

    #[test]
    fn test_file_uri_encodes_space_and_hash() {
        let dir = tempfile::tempdir().unwrap();
        let folder = dir.path().join("my maps #1");
        std::fs::create_dir(&folder).unwrap();
        let path = folder.join("a.html");
        std::fs::write(&path, "<html></html>").unwrap();

        let uri = file_uri(&path).unwrap();
        assert!(uri.ends_with("/my%20maps%20%231/a.html"), "{}", uri);
        assert!(!uri.contains(' '));
        assert!(!uri.contains('#'));

        let parsed = Url::parse(&uri).unwrap();
        assert_eq!(parsed.fragment(), None);
        assert_eq!(
            parsed.to_file_path().unwrap(),
            std::fs::canonicalize(&path).unwrap()
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_file_uri_keeps_non_utf8_bytes() {
        use std::{ffi::OsStr, os::unix::ffi::OsStrExt};

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(OsStr::from_bytes(b"caf\xe9.html"));
        if std::fs::write(&path, "<html></html>").is_err() {
            // Some filesystems refuse non-UTF-8 names
            return;
        }

        let uri = file_uri(&path).unwrap();
        assert!(uri.ends_with("/caf%E9.html"), "{}", uri);
        assert_eq!(
            Url::parse(&uri).unwrap().to_file_path().unwrap(),
            std::fs::canonicalize(&path).unwrap()
        );
    }

    #[test]
    fn test_file_uri_of_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let result = file_uri(dir.path().join("missing.html"));
        assert!(matches!(result, Err(MapError::Io(_))));
    }
}
