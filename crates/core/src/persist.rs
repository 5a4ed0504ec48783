//! Enabled-marker persistence
//!
//! A mod's enabled state survives relaunches as the presence or absence
//! of a zero-byte `ENABLED` file in its install directory. The file's
//! existence is the whole encoding; nothing is ever written into it.

use std::fs;
use std::io;
use std::path::Path;

/// File name of the enabled marker inside a mod's directory
pub const MARKER_FILE: &str = "ENABLED";

/// Create the marker, leaving an existing one untouched
pub fn write_marker(path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    // Append mode: create if absent, never truncate
    fs::OpenOptions::new().create(true).append(true).open(path)?;
    Ok(())
}

/// Remove the marker, treating "already absent" as success
pub fn clear_marker(path: &Path) -> io::Result<()> {
    match fs::remove_file(path) {
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        other => other,
    }
}

/// Whether the marker currently exists
pub fn marker_present(path: &Path) -> bool {
    path.exists()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_lifecycle() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("SomeMod").join(MARKER_FILE);

        assert!(!marker_present(&path));
        write_marker(&path).unwrap();
        assert!(marker_present(&path));
        assert_eq!(fs::metadata(&path).unwrap().len(), 0);

        clear_marker(&path).unwrap();
        assert!(!marker_present(&path));
    }

    #[test]
    fn test_write_marker_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(MARKER_FILE);
        write_marker(&path).unwrap();
        write_marker(&path).unwrap();
        assert!(marker_present(&path));
    }

    #[test]
    fn test_clear_marker_tolerates_absence() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(MARKER_FILE);
        clear_marker(&path).unwrap();
    }
}
