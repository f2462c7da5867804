use cabinet::api::CabinetApi;
use cabinet::config::CabinetConfig;
use cabinet::error::{CabinetError, Result};
use cabinet::logging;
use cabinet::store::RecordStore;
use clap::Parser;
use directories::ProjectDirs;
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use tracing::debug;

mod args;
mod cli;
use args::Cli;
use cli::{Session, HINT_MESSAGE};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if !io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    let config_dir = resolve_config_dir(&cli)?;
    let config = CabinetConfig::load(&config_dir)?;
    let mode = cli.validation_rules.unwrap_or(config.validation_rules);
    debug!(config_dir = %config_dir.display(), %mode, "starting");

    let api = CabinetApi::new(RecordStore::new(mode.rules()), config);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "File Cabinet Application")?;
    writeln!(out, "{}", mode.description())?;
    writeln!(out, "{}", HINT_MESSAGE)?;
    writeln!(out)?;

    let stdin = io::stdin();
    Session::new(api, stdin.lock(), out).run()?;
    Ok(())
}

fn resolve_config_dir(cli: &Cli) -> Result<PathBuf> {
    if let Some(dir) = &cli.config_dir {
        return Ok(dir.clone());
    }
    ProjectDirs::from("com", "cabinet", "cabinet")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| CabinetError::Config("Could not determine config dir".into()))
}
