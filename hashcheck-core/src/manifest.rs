use crate::error::VerifyError;
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HashEntry {
    pub hash: String,
    pub rel_path: String,
}

/// A parsed `hash_list.txt`: `<hash> <relative_path>` pairs.
#[derive(Clone, Debug)]
pub struct HashList {
    pub path: PathBuf,
    pub entries: Vec<HashEntry>,
}

impl HashList {
    pub fn read(path: &Path) -> Result<Self, VerifyError> {
        let text = std::fs::read_to_string(path).map_err(|e| VerifyError::io(path, e))?;
        let entries = parse(&text, path)?;
        Ok(Self { path: path.to_path_buf(), entries })
    }
}

/// Split on whitespace and pair tokens by position: even indices are
/// hashes, odd indices are paths. An odd token count is rejected.
pub fn parse(text: &str, manifest: &Path) -> Result<Vec<HashEntry>, VerifyError> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    if tokens.len() % 2 != 0 {
        return Err(VerifyError::ManifestFormat {
            manifest: manifest.to_path_buf(),
            tokens: tokens.len(),
            dangling: tokens[tokens.len() - 1].to_string(),
        });
    }
    Ok(tokens
        .chunks_exact(2)
        .map(|pair| HashEntry { hash: pair[0].to_string(), rel_path: pair[1].to_string() })
        .collect())
}
