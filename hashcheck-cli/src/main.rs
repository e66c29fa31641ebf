use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};

use hashcheck_core::discover::{ManifestLayout, DEFAULT_GROUP_PATTERN, DEFAULT_MANIFEST_NAME};
use hashcheck_core::path_safety::PathPolicy;
use hashcheck_core::{validate_with_config, FailMode, VerifyConfig, VerifyError};

mod logging;

/// Check data files against the SHA-1 hash lists recorded next to them.
#[derive(Parser)]
#[command(name = "hashcheck", version)]
struct Cli {
    /// Data directory holding `group-0?/hash_list.txt` manifests
    data_dir: PathBuf,
    /// Glob for group subdirectory names
    #[arg(long, default_value = DEFAULT_GROUP_PATTERN)]
    group_pattern: String,
    /// Hash list file name inside each group directory
    #[arg(long, default_value = DEFAULT_MANIFEST_NAME)]
    manifest_name: String,
    /// Check every entry and report all mismatches instead of stopping at the first
    #[arg(long, default_value_t = false)]
    collect: bool,
    /// Reject manifest entries that pass through a symlink
    #[arg(long, default_value_t = false)]
    no_follow_symlinks: bool,
    /// Print a JSON report on success, or the mismatches as JSON on failure
    #[arg(long, default_value_t = false)]
    json: bool,
    /// Raise log verbosity (repeatable)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn config(&self) -> VerifyConfig {
        VerifyConfig {
            layout: ManifestLayout {
                group_pattern: self.group_pattern.clone(),
                manifest_name: self.manifest_name.clone(),
            },
            mode: if self.collect { FailMode::Collect } else { FailMode::FailFast },
            path_policy: PathPolicy { follow_symlinks: !self.no_follow_symlinks },
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    check(&cli.data_dir, &cli.config(), cli.json)
}

fn check(data_dir: &Path, cfg: &VerifyConfig, json: bool) -> Result<()> {
    let report = match validate_with_config(data_dir, cfg) {
        Ok(r) => r,
        Err(e) if json && e.is_validation() => {
            println!("{}", serde_json::to_string_pretty(e.mismatches())?);
            return Err(e).with_context(|| format!("validate {}", data_dir.display()));
        }
        Err(e @ VerifyError::Mismatches(_)) => {
            for m in e.mismatches() {
                eprintln!("{}", m);
            }
            return Err(anyhow::anyhow!("{} file(s) failed verification", e.mismatches().len()));
        }
        Err(e) => {
            return Err(e).with_context(|| format!("validate {}", data_dir.display()));
        }
    };
    tracing::info!(
        "{} file(s) across {} hash list(s) OK",
        report.files_checked,
        report.manifests.len()
    );
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }
    Ok(())
}
