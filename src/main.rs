//! Command-line front end for the theme pipeline.
//!
//! Reads theme CSS from a file (or falls back to the built-in theme), runs
//! one generation session against the in-memory host, and prints the event
//! stream a plugin UI would display. `--tree` dumps the style-guide node
//! tree afterwards, which is handy for eyeballing layout changes.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::LevelFilter;
use tokenloom::{Command, Event, MemoryHost, Session, init_logger};
use tokio::sync::mpsc;

#[derive(Parser)]
#[command(name = "tokenloom")]
#[command(about = "Generate design tokens and a style guide from theme CSS")]
struct Cli {
    /// Theme CSS file; the built-in theme is used when omitted
    css_file: Option<PathBuf>,

    /// Print the generated node tree
    #[arg(long)]
    tree: bool,

    /// Log debug detail to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger(if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    });

    let css = match &cli.css_file {
        Some(path) => match std::fs::read_to_string(path) {
            Ok(css) => css,
            Err(err) => {
                log::error!("Failed to read {}: {}", path.display(), err);
                return ExitCode::FAILURE;
            }
        },
        // Blank input makes the session use the built-in theme.
        None => String::new(),
    };

    let host = MemoryHost::new();
    let (command_tx, command_rx) = mpsc::unbounded_channel();
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();

    if command_tx.send(Command::GenerateTheme { css }).is_err() {
        return ExitCode::FAILURE;
    }
    drop(command_tx);

    let printer = tokio::spawn(async move {
        let mut failed = false;
        while let Some(event) = event_rx.recv().await {
            match event {
                Event::Progress { message } => println!("{}", message),
                Event::GenerationComplete { variable_count } => {
                    println!("Generated {} variables", variable_count);
                }
                Event::GenerationError { error } => {
                    eprintln!("error: {}", error);
                    failed = true;
                }
                Event::ExistingVariables { count } => {
                    println!("Found {} existing variables", count);
                }
            }
        }
        failed
    });

    Session::new(&host, command_rx, event_tx).run().await;
    let failed = printer.await.unwrap_or(true);

    if cli.tree {
        print!("{}", host.outline());
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
