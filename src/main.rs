//! fleetlabel - Client Label Rule Editor
//!
//! A desktop form control for choosing a client label in a rule-matching
//! condition, backed by a fleet label-directory service.
//!
//! # Features
//!
//! - Dropdown populated from the directory's `/clients/labels` listing
//! - Pre-selection of the label named by an existing rule value
//! - Write-back of the operator's pick to the bound rule
//! - Translated error reporting when the directory is unreachable
//!
//! # Architecture
//!
//! - `core`: Selector logic, rule values, and label directory access
//! - `app`: GUI application state, event handling, and layout
//! - `config`: Configuration persistence
//!
//! # Usage
//!
//! ```bash
//! # Run the GUI application
//! fleetlabel
//!
//! # CLI commands
//! fleetlabel labels                          # List labels known to the directory
//! fleetlabel labels --server http://fleet:8000
//! fleetlabel status                          # Show configured server and reachability
//! ```

mod app;
mod config;
mod core;
mod utils;

use clap::{Parser, Subcommand};
use iced::Size;
use std::process::ExitCode;

use crate::core::labels::{HttpLabelSource, LabelSource};

#[derive(Parser)]
#[command(name = "fleetlabel")]
#[command(about = "Client label rule editor for fleet investigation consoles", long_about = None)]
struct Cli {
    /// Directory server base URL (overrides the configured value)
    #[arg(short, long, value_name = "URL", global = true)]
    server: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List client labels known to the directory service
    Labels,
    /// Show the configured directory server and whether it is reachable
    Status,
}

fn main() -> ExitCode {
    let _ = crate::utils::ensure_dirs();
    let cli = Cli::parse();

    if let Some(command) = cli.command {
        // Create Tokio runtime only for CLI commands
        let runtime = tokio::runtime::Runtime::new().expect("Failed to create Tokio runtime");
        match runtime.block_on(handle_cli(command, cli.server)) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("Error: {e}");
                ExitCode::FAILURE
            }
        }
    } else {
        // GUI runs in normal sync context (Iced has its own async runtime)
        launch_gui(cli.server)
    }
}

async fn handle_cli(
    command: Commands,
    server: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Commands::Labels => {
            let config = config::load_config().await;
            let base = server.unwrap_or(config.server_url);
            let source = HttpLabelSource::for_server(&base)?;

            let labels = match source.fetch_labels().await {
                Ok(labels) => labels,
                Err(e) => {
                    let translation =
                        crate::core::error::DirectoryErrorPattern::match_error(&e.to_string());
                    for suggestion in &translation.suggestions {
                        eprintln!("hint: {suggestion}");
                    }
                    return Err(translation.user_message.into());
                }
            };

            if labels.is_empty() {
                println!("No labels defined.");
            }
            for label in labels {
                println!("{}", label.name);
            }
        }
        Commands::Status => {
            let config = config::load_config().await;
            let base = server.unwrap_or(config.server_url);
            println!("Directory server: {base}");
            match HttpLabelSource::for_server(&base) {
                Ok(source) => match source.fetch_labels().await {
                    Ok(labels) => println!("Labels: {}", labels.len()),
                    Err(e) => println!("Unreachable: {e}"),
                },
                Err(e) => println!("Invalid server URL: {e}"),
            }
        }
    }
    Ok(())
}

fn launch_gui(server_override: Option<String>) -> ExitCode {
    // Set up logging to file
    if let Some(mut log_path) = crate::utils::get_state_dir() {
        log_path.push("fleetlabel.log");
        if let Ok(file) = std::fs::File::create(log_path) {
            tracing_subscriber::fmt().with_writer(file).init();
        } else {
            tracing_subscriber::fmt::init();
        }
    } else {
        tracing_subscriber::fmt::init();
    }

    let result = iced::application(
        move || app::State::new(server_override.clone()),
        app::State::update,
        app::State::view,
    )
    .window(iced::window::Settings {
        size: Size::new(520.0, 400.0),
        ..Default::default()
    })
    .title("Fleet Label Rules")
    .theme(|_state: &app::State| iced::Theme::Dark)
    .run();

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}
