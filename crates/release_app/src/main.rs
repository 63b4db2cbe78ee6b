//! `release-sync`: mirror the PDF documents of an archive release page into a
//! local directory and optionally bundle them into a dated zip file.
mod cli;
mod console;
mod logging;
mod prompt;
mod settings;

use anyhow::Context;
use chrono::Local;
use clap::Parser;
use release_engine::ReleaseSync;
use release_logging::{release_error, release_info};

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    logging::initialize(cli.log, &cli.log_file);

    let config = settings::resolve(&cli)?;
    release_info!("Starting run with {:?}", config);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start the IO runtime")?;
    let sync = ReleaseSync::new(config).context("failed to build the HTTP client")?;

    let mut confirmer = prompt::PromptConfirmer::stdio();
    let today = Local::now().date_naive();
    let view = runtime
        .block_on(sync.run(today, &mut confirmer, &console::ConsoleSink))
        .inspect_err(|err| release_error!("Run failed: {}", err))
        .context("release sync failed")?;

    println!("{}", view.summary());
    Ok(())
}
