use crate::digest;
use crate::discover::{find_manifests, ManifestLayout};
use crate::error::{Mismatch, VerifyError};
use crate::manifest::HashList;
use crate::path_safety::{self, PathPolicy};
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FailMode {
    /// Stop at the first mismatch.
    #[default]
    FailFast,
    /// Check every entry and report all mismatches together.
    Collect,
}

#[derive(Clone, Debug, Default)]
pub struct VerifyConfig {
    pub layout: ManifestLayout,
    pub mode: FailMode,
    pub path_policy: PathPolicy,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct VerifyReport {
    /// Hash lists checked, in the order they were processed.
    pub manifests: Vec<PathBuf>,
    pub files_checked: u64,
}

/// Validate every `group-0?/hash_list.txt` under `root`.
pub fn validate_directory(root: &Path) -> Result<(), VerifyError> {
    validate_with_config(root, &VerifyConfig::default()).map(|_| ())
}

pub fn validate_with_config(root: &Path, cfg: &VerifyConfig) -> Result<VerifyReport, VerifyError> {
    let manifests = find_manifests(root, &cfg.layout)?;
    tracing::info!("found {} hash list(s) under {}", manifests.len(), root.display());

    let mut report = VerifyReport::default();
    let mut mismatches = Vec::new();
    for mpath in manifests {
        let list = HashList::read(&mpath)?;
        tracing::debug!("checking {} entries from {}", list.entries.len(), mpath.display());
        for entry in &list.entries {
            let path = path_safety::resolve(root, &entry.rel_path, &list.path, cfg.path_policy)?;
            let actual = digest::file_hash(&path)?;
            report.files_checked += 1;
            if actual == entry.hash {
                continue;
            }
            if !digest::is_hex_digest(&entry.hash) {
                tracing::debug!("recorded hash {:?} for {} is not a lowercase sha1 digest", entry.hash, entry.rel_path);
            }
            let m = Mismatch {
                rel_path: entry.rel_path.clone(),
                manifest: list.path.clone(),
                expected: entry.hash.clone(),
                actual,
            };
            tracing::debug!("{}", m);
            match cfg.mode {
                FailMode::FailFast => return Err(VerifyError::Mismatch(m)),
                FailMode::Collect => mismatches.push(m),
            }
        }
        report.manifests.push(list.path);
    }

    if mismatches.is_empty() {
        Ok(report)
    } else {
        Err(VerifyError::Mismatches(mismatches))
    }
}
