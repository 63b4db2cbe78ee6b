//! Run configuration: built-in defaults, then an optional RON file, then flags.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use release_core::ArchiveNaming;
use release_engine::SyncConfig;
use release_logging::release_info;
use serde::Deserialize;

use crate::cli::Cli;

/// On-disk overrides. Every field is optional; `Some(..)` may be omitted
/// around values.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct ConfigFile {
    listing_url: Option<String>,
    base_url: Option<String>,
    storage_dir: Option<PathBuf>,
    archive_dir: Option<PathBuf>,
    archive_naming: Option<ArchiveNaming>,
    connect_timeout_secs: Option<u64>,
    request_timeout_secs: Option<u64>,
    read_timeout_secs: Option<u64>,
    redirect_limit: Option<usize>,
    chunk_size: Option<usize>,
}

pub fn resolve(cli: &Cli) -> anyhow::Result<SyncConfig> {
    let mut config = SyncConfig::default();
    if let Some(path) = &cli.config {
        apply_file(&mut config, load_file(path)?);
        release_info!("Loaded config from {:?}", path);
    }
    apply_flags(&mut config, cli);
    Ok(config)
}

fn load_file(path: &Path) -> anyhow::Result<ConfigFile> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    parse_file(&text).with_context(|| format!("failed to parse config file {}", path.display()))
}

fn parse_file(text: &str) -> Result<ConfigFile, ron::error::SpannedError> {
    ron::Options::default()
        .with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
        .from_str(text)
}

fn apply_file(config: &mut SyncConfig, file: ConfigFile) {
    if let Some(url) = file.listing_url {
        config.listing_url = url;
    }
    if let Some(url) = file.base_url {
        config.base_url = url;
    }
    if let Some(dir) = file.storage_dir {
        config.storage_dir = dir;
    }
    if let Some(dir) = file.archive_dir {
        config.archive_dir = dir;
    }
    if let Some(naming) = file.archive_naming {
        config.archive_naming = naming;
    }
    if let Some(secs) = file.connect_timeout_secs {
        config.fetch.connect_timeout = Duration::from_secs(secs);
    }
    if let Some(secs) = file.request_timeout_secs {
        config.fetch.request_timeout = Duration::from_secs(secs);
    }
    if let Some(secs) = file.read_timeout_secs {
        config.fetch.read_timeout = Duration::from_secs(secs);
    }
    if let Some(limit) = file.redirect_limit {
        config.fetch.redirect_limit = limit;
    }
    if let Some(size) = file.chunk_size.filter(|s| *s > 0) {
        config.fetch.chunk_size = size;
    }
}

fn apply_flags(config: &mut SyncConfig, cli: &Cli) {
    if let Some(url) = &cli.listing_url {
        config.listing_url = url.clone();
    }
    if let Some(url) = &cli.base_url {
        config.base_url = url.clone();
    }
    if let Some(dir) = &cli.storage_dir {
        config.storage_dir = dir.clone();
    }
    if let Some(dir) = &cli.archive_dir {
        config.archive_dir = dir.clone();
    }
    if let Some(name) = &cli.fixed_archive_name {
        config.archive_naming = ArchiveNaming::Fixed {
            file_name: name.clone(),
        };
    }
}
