use crate::error::VerifyError;
use std::path::{Component, Path, PathBuf};

#[derive(Clone, Copy, Debug)]
pub struct PathPolicy {
    pub follow_symlinks: bool,
}

impl Default for PathPolicy {
    fn default() -> Self {
        Self { follow_symlinks: true }
    }
}

/// Resolve a manifest path against the data directory `root`.
///
/// Absolute paths and `..` components are always rejected: a manifest
/// only names files under `root`. Symlinks placed in the data directory
/// are followed unless `follow_symlinks` is off, in which case a symlink
/// anywhere along the path is rejected. Nothing here requires the file to
/// exist; a missing file surfaces later as an I/O error from hashing.
pub fn resolve(
    root: &Path,
    rel: &str,
    manifest: &Path,
    policy: PathPolicy,
) -> Result<PathBuf, VerifyError> {
    let unsafe_path = |reason: String| VerifyError::UnsafePath {
        manifest: manifest.to_path_buf(),
        rel_path: rel.to_string(),
        reason,
    };
    let rel_p = Path::new(rel);
    if rel_p.has_root() || rel_p.is_absolute() {
        return Err(unsafe_path("absolute paths are not allowed".into()));
    }
    for comp in rel_p.components() {
        match comp {
            Component::ParentDir => return Err(unsafe_path("parent traversal not allowed".into())),
            Component::Prefix(_) => return Err(unsafe_path("path prefixes are not allowed".into())),
            _ => {}
        }
    }
    let candidate = root.join(rel_p);
    if !policy.follow_symlinks {
        let mut cur = root.to_path_buf();
        for comp in rel_p.components() {
            cur.push(comp);
            if let Ok(m) = std::fs::symlink_metadata(&cur) {
                if m.file_type().is_symlink() {
                    return Err(unsafe_path(format!(
                        "symlink in path (not following): {}",
                        cur.display()
                    )));
                }
            }
        }
    }
    Ok(candidate)
}
