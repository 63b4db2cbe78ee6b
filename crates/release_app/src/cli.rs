use std::path::PathBuf;

use clap::Parser;

use crate::logging::LogDestination;

/// Download every PDF linked from an archive release page that is not yet
/// stored locally, then offer to zip the local copy.
///
/// Asks for confirmation before downloading and before zipping; answering
/// anything but "y" stops the run.
#[derive(Parser, Debug)]
#[command(name = "release-sync", version)]
pub struct Cli {
    /// RON config file; command-line flags take precedence over it.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Page listing the release documents.
    #[arg(long)]
    pub listing_url: Option<String>,

    /// Prefix for links that do not start with "http".
    #[arg(long)]
    pub base_url: Option<String>,

    /// Directory holding the downloaded documents.
    #[arg(long)]
    pub storage_dir: Option<PathBuf>,

    /// Directory the zip archive is written to.
    #[arg(long)]
    pub archive_dir: Option<PathBuf>,

    /// Use this archive file name instead of the dated one.
    #[arg(long)]
    pub fixed_archive_name: Option<String>,

    /// Where diagnostic logs go. Status lines always go to stdout.
    #[arg(long, value_enum, default_value_t = LogDestination::File)]
    pub log: LogDestination,

    #[arg(long, default_value = "release_sync.log")]
    pub log_file: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::Cli;
    use crate::logging::LogDestination;
    use clap::Parser;

    #[test]
    fn defaults_leave_overrides_unset() {
        let cli = Cli::try_parse_from(["release-sync"]).unwrap();
        assert!(cli.config.is_none());
        assert!(cli.storage_dir.is_none());
        assert_eq!(cli.log, LogDestination::File);
    }

    #[test]
    fn flags_are_parsed() {
        let cli = Cli::try_parse_from([
            "release-sync",
            "--storage-dir",
            "docs",
            "--fixed-archive-name",
            "all.zip",
            "--log",
            "both",
        ])
        .unwrap();
        assert_eq!(cli.storage_dir.unwrap().to_str(), Some("docs"));
        assert_eq!(cli.fixed_archive_name.as_deref(), Some("all.zip"));
        assert_eq!(cli.log, LogDestination::Both);
    }
}
