mod cli;

use crate::cli::app::App;
use crate::cli::script::run_script;
use crate::cli::shell::Shell;
use anyhow::{Context, Result};
use clap::Parser;
use medtrack::{DEFAULT_ALERT_CAPACITY, DEFAULT_HISTORY_CAPACITY, MedicationSystem, SystemConfig};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "medtrack")]
#[command(about = "Medication reminder system with refill alerts")]
struct Cli {
    /// JSON array of medications to load at startup (read-only)
    #[arg(long, value_name = "PATH")]
    seed: Option<PathBuf>,

    /// Run commands from a file ('-' for stdin) instead of the interactive UI
    #[arg(long, value_name = "PATH")]
    script: Option<PathBuf>,

    #[arg(long, default_value_t = DEFAULT_HISTORY_CAPACITY)]
    history_capacity: usize,

    #[arg(long, default_value_t = DEFAULT_ALERT_CAPACITY)]
    alert_capacity: usize,

    /// Write logs to this file (RUST_LOG controls the level)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli)?;

    let config = SystemConfig::new()
        .history_capacity(cli.history_capacity)
        .alert_capacity(cli.alert_capacity);
    let mut system = MedicationSystem::with_config(config)?;

    if let Some(seed) = &cli.seed {
        system
            .load_seed(seed)
            .with_context(|| format!("failed to load seed file {}", seed.display()))?;
    }

    let mut shell = Shell::new(system);

    match &cli.script {
        Some(path) if path.as_os_str() == "-" => {
            run_script(&mut shell, io::stdin().lock(), io::stdout().lock())?;
        }
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open script {}", path.display()))?;
            run_script(&mut shell, BufReader::new(file), io::stdout().lock())?;
        }
        None => App::new(shell).run()?,
    }

    Ok(())
}

/// The terminal UI owns the screen, so without a log file it gets no logger at all
fn init_logging(cli: &Cli) -> Result<()> {
    use env_logger::{Builder, Env, Target};

    if let Some(path) = &cli.log_file {
        let file = File::create(path)
            .with_context(|| format!("failed to create log file {}", path.display()))?;
        Builder::from_env(Env::default().default_filter_or("info"))
            .target(Target::Pipe(Box::new(file)))
            .init();
    } else if cli.script.is_some() {
        Builder::from_env(Env::default().default_filter_or("off"))
            .target(Target::Stderr)
            .init();
    }

    Ok(())
}
