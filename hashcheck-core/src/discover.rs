//! Locate hash lists one level beneath a data directory.

use crate::error::VerifyError;
use globset::{Glob, GlobMatcher};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub const DEFAULT_GROUP_PATTERN: &str = "group-0?";
pub const DEFAULT_MANIFEST_NAME: &str = "hash_list.txt";

/// Directory-layout convention shared with whatever produced the manifests.
#[derive(Clone, Debug)]
pub struct ManifestLayout {
    /// Glob matched against immediate subdirectory names.
    pub group_pattern: String,
    /// File name of the hash list inside each group directory.
    pub manifest_name: String,
}

impl Default for ManifestLayout {
    fn default() -> Self {
        Self {
            group_pattern: DEFAULT_GROUP_PATTERN.to_string(),
            manifest_name: DEFAULT_MANIFEST_NAME.to_string(),
        }
    }
}

impl ManifestLayout {
    fn matcher(&self) -> Result<GlobMatcher, VerifyError> {
        Glob::new(&self.group_pattern)
            .map(|g| g.compile_matcher())
            .map_err(|source| VerifyError::Pattern { pattern: self.group_pattern.clone(), source })
    }
}

/// Return `<root>/<group>/<manifest_name>` for every immediate subdirectory
/// of `root` whose name matches the group pattern, sorted by group name.
/// Groups without a manifest are skipped. A manifest entry that exists but
/// is not a readable file (dangling symlink, directory) is still returned
/// so reading it fails loudly. A missing or non-directory `root` has no
/// groups.
pub fn find_manifests(root: &Path, layout: &ManifestLayout) -> Result<Vec<PathBuf>, VerifyError> {
    let matcher = layout.matcher()?;
    match std::fs::metadata(root) {
        Ok(meta) if meta.is_dir() => {}
        Ok(_) => {
            tracing::debug!("{} is not a directory, no hash lists", root.display());
            return Ok(Vec::new());
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("{} does not exist, no hash lists", root.display());
            return Ok(Vec::new());
        }
        Err(e) => return Err(VerifyError::io(root, e)),
    }
    let mut out = Vec::new();
    let walker = WalkDir::new(root).min_depth(1).max_depth(1).sort_by_file_name();
    for ent in walker {
        let ent = ent.map_err(|e| walk_error(root, e))?;
        // Follow a symlinked group dir the same way a shell glob would.
        if !ent.path().is_dir() {
            continue;
        }
        let name = ent.file_name();
        if !matcher.is_match(Path::new(name)) {
            continue;
        }
        let candidate = ent.path().join(&layout.manifest_name);
        if std::fs::symlink_metadata(&candidate).is_ok() {
            out.push(candidate);
        } else {
            tracing::debug!(
                "{} matches {:?} but has no {}",
                ent.path().display(),
                layout.group_pattern,
                layout.manifest_name
            );
        }
    }
    Ok(out)
}

fn walk_error(root: &Path, e: walkdir::Error) -> VerifyError {
    let path = e.path().map(Path::to_path_buf).unwrap_or_else(|| root.to_path_buf());
    let source = e.into_io_error().unwrap_or_else(|| std::io::Error::other("filesystem loop"));
    VerifyError::Io { path, source }
}
