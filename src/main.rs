//! Simple Todo - a single-user task list
//!
//! Running with no subcommand opens the list view.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::warn;

use simple_todo::config::AppConfig;
use simple_todo::{format_row, JsonFileStore, LoadOutcome, TodoController, TodoError};

#[derive(Parser)]
#[command(name = "todo-app")]
#[command(version = "0.1.0")]
#[command(about = "Single-user task list with a terminal list view", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Directory holding todo_data.json (defaults to the platform data directory)
    #[arg(long, global = true, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Verbose logging to the log file in the data directory
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the task list without opening the list view
    List,

    /// Print the path of the task file
    Path,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(e.exit_code());
    }
    Ok(())
}

fn run(cli: &Cli) -> Result<(), TodoError> {
    let config = AppConfig::resolve(cli.data_dir.as_deref())?;
    let store = JsonFileStore::open(&config)?;
    init_logging(&config, cli.verbose);

    match cli.command {
        None => {
            let controller = TodoController::load(store);
            simple_todo::ui::run(controller)?;
        }
        Some(Commands::List) => {
            if let LoadOutcome::Corrupt { reason } = store.load_outcome() {
                eprintln!(
                    "{} {} is unreadable ({}); treating it as empty",
                    "Warning:".yellow().bold(),
                    store.path().display(),
                    reason
                );
            }
            let controller = TodoController::load(store);
            if controller.is_empty() {
                println!("No tasks yet.");
            }
            for (i, task) in controller.tasks().iter().enumerate() {
                let row = format_row(i, task);
                if task.done {
                    println!("{}", row.green());
                } else {
                    println!("{row}");
                }
            }
        }
        Some(Commands::Path) => {
            println!("{}", store.path().display());
        }
    }
    Ok(())
}

/// Send tracing output to the log file; the list view owns the terminal.
fn init_logging(config: &AppConfig, verbose: bool) {
    let filter = if verbose {
        "simple_todo=debug,info"
    } else {
        "simple_todo=info,warn"
    };

    let log_path = config.log_file();
    let file = match OpenOptions::new().create(true).append(true).open(&log_path) {
        Ok(file) => file,
        Err(e) => {
            eprintln!(
                "{} cannot open log file {}: {}",
                "Warning:".yellow().bold(),
                log_path.display(),
                e
            );
            return;
        }
    };

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init();
    if installed.is_err() {
        warn!("Tracing subscriber already installed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;
    use tempfile::TempDir;

    #[test]
    fn test_config_failures_come_back_with_config_exit_code() {
        let temp = TempDir::new().unwrap();
        let occupied = temp.path().join("occupied");
        std::fs::write(&occupied, "x").unwrap();

        let cli = Cli::try_parse_from([
            OsString::from("todo-app"),
            OsString::from("--data-dir"),
            occupied.into_os_string(),
            OsString::from("path"),
        ])
        .unwrap();

        let err = run(&cli).unwrap_err();
        assert!(matches!(err, TodoError::Config { .. }));
        assert_eq!(err.exit_code(), 7);
    }
}
