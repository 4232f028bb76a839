//! Utility functions for secure path handling and display

use std::io;
use std::path::{Path, PathBuf};

/// Resolve a deck name below `base`, ensuring it stays within the decks root
/// Returns an error if the name is absolute or climbs out of `base`
pub fn secure_path(base: &Path, relative: &str) -> io::Result<PathBuf> {
    let mut result = base.to_path_buf();

    for component in relative.split(|c| c == '/' || c == '\\') {
        match component {
            "" if result == base && relative.starts_with(['/', '\\']) => {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    "Absolute paths are not allowed",
                ));
            }
            "" | "." => continue,
            ".." => {
                if result == base {
                    return Err(io::Error::new(
                        io::ErrorKind::InvalidInput,
                        "Path traversal detected: cannot escape decks directory",
                    ));
                }
                result.pop();
            }
            _ => {
                if is_drive_prefix(component) {
                    return Err(io::Error::new(
                        io::ErrorKind::InvalidInput,
                        "Absolute paths are not allowed",
                    ));
                }
                result.push(component);
            }
        }
    }

    if result == base {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "Deck name must not be empty",
        ));
    }

    // Symlinks inside the root may still point elsewhere
    if base.exists() && result.exists() {
        let canonical_base = dunce::canonicalize(base)?;
        let canonical_result = dunce::canonicalize(&result)?;
        if !canonical_result.starts_with(&canonical_base) {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "Path traversal detected: resolved path escapes decks directory",
            ));
        }
    }

    Ok(result)
}

/// Windows drive prefix, e.g. "C:" or "C:notes"; plain file names elsewhere
#[cfg(windows)]
fn is_drive_prefix(component: &str) -> bool {
    let bytes = component.as_bytes();
    bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':'
}

#[cfg(not(windows))]
fn is_drive_prefix(_component: &str) -> bool {
    false
}

/// Make `path` absolute against the current directory without touching the filesystem
pub fn absolute_path(path: &Path) -> io::Result<PathBuf> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(std::env::current_dir()?.join(path))
    }
}

/// Display a path with forward slashes (cross-platform standard)
pub fn display_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}
