//! Error kinds surfaced by discovery, parsing and verification.

use serde::Serialize;
use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// One file whose freshly computed digest differs from its recorded one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mismatch {
    /// Path as written in the manifest.
    pub rel_path: String,
    /// Manifest that recorded `expected`.
    pub manifest: PathBuf,
    pub expected: String,
    pub actual: String,
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hash value for {} does not match hash value recorded in {} (expected {}, got {})",
            self.rel_path,
            self.manifest.display(),
            self.expected,
            self.actual
        )
    }
}

#[derive(Debug, Error)]
pub enum VerifyError {
    /// A manifest or a listed file could not be opened or read.
    #[error("read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{0}")]
    Mismatch(Mismatch),

    /// Every mismatch found in collect mode, in manifest order.
    #[error("{} file(s) failed verification:\n{}", .0.len(), list_mismatches(.0))]
    Mismatches(Vec<Mismatch>),

    /// Odd token count: the last hash has no path to pair with.
    #[error("malformed manifest {}: {tokens} tokens, dangling token {dangling:?}", .manifest.display())]
    ManifestFormat {
        manifest: PathBuf,
        tokens: usize,
        dangling: String,
    },

    #[error("unsafe path {rel_path:?} in {}: {reason}", .manifest.display())]
    UnsafePath {
        manifest: PathBuf,
        rel_path: String,
        reason: String,
    },

    #[error("invalid group pattern {pattern:?}: {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },
}

impl VerifyError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        VerifyError::Io { path: path.into(), source }
    }

    /// True for the hash-comparison failures, single or aggregated.
    pub fn is_validation(&self) -> bool {
        matches!(self, VerifyError::Mismatch(_) | VerifyError::Mismatches(_))
    }

    /// Mismatches carried by this error; empty for every other kind.
    pub fn mismatches(&self) -> &[Mismatch] {
        match self {
            VerifyError::Mismatch(m) => std::slice::from_ref(m),
            VerifyError::Mismatches(v) => v,
            _ => &[],
        }
    }
}

fn list_mismatches(v: &[Mismatch]) -> String {
    v.iter().map(|m| format!("  {}", m)).collect::<Vec<_>>().join("\n")
}
