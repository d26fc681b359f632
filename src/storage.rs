//! Reading source documents and writing annotated output.

use std::ffi::OsString;
use std::fs::Permissions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::info;

use crate::error::{Error, Result};

/// Suffix inserted before the extension of generated output names.
pub const DEFAULT_SUFFIX: &str = "_pinyin";

/// Read a whole UTF-8 document.
pub fn read_input(path: &Path) -> Result<String> {
    match std::fs::read_to_string(path) {
        Ok(text) => {
            info!(path = %path.display(), bytes = text.len(), "read input");
            Ok(text)
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            Err(Error::InputNotFound(path.to_path_buf()))
        }
        Err(source) => Err(Error::Read {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Derive an output path by inserting `suffix` before the extension.
///
/// `story.txt` becomes `story_pinyin.txt`; `notes` becomes `notes_pinyin`.
/// Only the last extension moves, so `a.tar.gz` becomes `a.tar_pinyin.gz`.
pub fn default_output_path(input: &Path, suffix: &str) -> PathBuf {
    let mut name: OsString = input.file_stem().map(OsString::from).unwrap_or_default();
    name.push(suffix);
    if let Some(ext) = input.extension() {
        name.push(".");
        name.push(ext);
    }
    input.with_file_name(name)
}

/// Write `contents` to `path` without ever leaving a partial file behind.
///
/// Data goes to a temporary file in the destination directory, is synced,
/// and then renamed over `path`. An existing target keeps its permissions;
/// a new one gets the usual `0644` on unix.
pub fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let wrap = |source: io::Error| Error::Write {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(wrap)?;
    tmp.write_all(contents.as_bytes()).map_err(wrap)?;
    // temp files start out owner-only
    if let Some(permissions) = output_permissions(path) {
        tmp.as_file().set_permissions(permissions).map_err(wrap)?;
    }
    tmp.as_file().sync_all().map_err(wrap)?;
    tmp.persist(path).map_err(|e| wrap(e.error))?;

    info!(path = %path.display(), bytes = contents.len(), "wrote output");
    Ok(())
}

fn output_permissions(path: &Path) -> Option<Permissions> {
    match std::fs::metadata(path) {
        Ok(meta) => Some(meta.permissions()),
        Err(_) => default_permissions(),
    }
}

#[cfg(unix)]
fn default_permissions() -> Option<Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn default_permissions() -> Option<Permissions> {
    None
}
