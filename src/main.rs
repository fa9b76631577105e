use std::fs::{self, OpenOptions};
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use riddlerun::cli::{Cli, Command};
use riddlerun::{util, App};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    util::init_data_dir(cli.data_dir.clone());

    // Initialize logging to file (~/.riddlerun/logs/riddlerun.log)
    fs::create_dir_all(util::logs_dir())?;

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(util::log_file_path())?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(log_file)
        .with_ansi(false) // Disable ANSI colors in log file
        .init();

    let config = match cli.load_config() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Invalid config");
            eprintln!("riddlerun: {e}");
            return Ok(ExitCode::FAILURE);
        }
    };

    match cli.command {
        Some(Command::Check) => {
            println!("{}", config.summary_line());
        }
        None => {
            let mut app = App::new(config);
            app.run().await?;
        }
    }

    Ok(ExitCode::SUCCESS)
}
