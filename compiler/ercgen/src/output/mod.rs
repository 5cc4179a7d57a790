//! All-or-nothing artifact writes.
//!
//! The text goes to a temporary file next to the destination and is renamed
//! over it only once fully written. If anything fails the temporary file is
//! dropped and the destination keeps whatever it held before.
//!
//! A replaced file keeps its permissions. A new file gets the usual mode for
//! created files (`0o666` less the umask), not the owner-only mode of a
//! temporary file.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::Builder;
use tracing::{debug, warn};

use crate::error::OutputError;

/// Write `contents` to `path`, replacing any existing file atomically.
#[tracing::instrument(level = "debug", skip_all, fields(path = %path.display(), bytes = contents.len()))]
pub fn write_atomic(path: &Path, contents: &str) -> Result<(), OutputError> {
    let dir = check_destination(path)?;
    let write_err = |source| OutputError::Write {
        path: path.to_owned(),
        source,
    };

    let existing = match fs::metadata(path) {
        Ok(meta) => {
            warn!(path = %path.display(), "overwriting existing output");
            Some(meta.permissions())
        }
        Err(_) => None,
    };

    let mut temp = temp_builder().tempfile_in(dir).map_err(write_err)?;
    if let Some(permissions) = existing {
        temp.as_file()
            .set_permissions(permissions)
            .map_err(write_err)?;
    }
    temp.write_all(contents.as_bytes()).map_err(write_err)?;
    temp.as_file().sync_all().map_err(write_err)?;
    temp.persist(path).map_err(|e| write_err(e.error))?;

    debug!("output persisted");
    Ok(())
}

/// Temporary files are created with the mode a plain `create` would use.
fn temp_builder() -> Builder<'static, 'static> {
    let mut builder = Builder::new();
    builder.prefix(".ercgen-");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o666));
    }
    builder
}

/// Confirm `path` can name a new or replaced file and return the directory
/// it lives in.
pub fn check_destination(path: &Path) -> Result<&Path, OutputError> {
    if path.file_name().is_none() {
        return Err(OutputError::NoFileName {
            path: path.to_owned(),
        });
    }
    if path.is_dir() {
        return Err(OutputError::IsDirectory {
            path: path.to_owned(),
        });
    }

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    if !dir.exists() {
        return Err(OutputError::MissingDirectory {
            dir: PathBuf::from(dir),
        });
    }
    if !dir.is_dir() {
        return Err(OutputError::NotADirectory {
            dir: PathBuf::from(dir),
        });
    }
    Ok(dir)
}
