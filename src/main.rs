use std::{io, path::PathBuf, process::ExitCode};

use clap::{Parser, Subcommand};
use layout_flip::{
    app::{App, Request, Response},
    config::{Config, ConfigStore},
    domain::text::convert_text,
    platform::Headless,
    utils::tracing::init_tracing,
};

/// Toggle text between the Latin (QWERTY) and Cyrillic (ЙЦУКЕН) keyboard layouts
#[derive(Parser, Debug)]
#[command(name = "layout-flip")]
#[command(version)]
#[command(about, long_about = None)]
struct Cli {
    /// Settings file (defaults to the platform config directory)
    #[arg(short, long, value_name = "PATH", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert TEXT, or standard input when TEXT is omitted
    Convert { text: Option<String> },

    /// Print the current settings
    Config,

    /// Update settings
    Set {
        /// Enable or disable hotkey conversion
        #[arg(long, value_name = "BOOL")]
        enabled: Option<bool>,

        /// Hotkey accelerator, e.g. Shift+Cmd+L
        #[arg(long, value_name = "ACCELERATOR")]
        hotkey: Option<String>,
    },
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("error: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), String> {
    let Cli { config, command } = cli;

    let update = match command {
        Command::Convert { text } => return convert(text),
        Command::Config => None,
        Command::Set { enabled, hotkey } => Some((enabled, hotkey)),
    };

    let store = match config {
        Some(path) => ConfigStore::at(path),
        None => ConfigStore::default_location().map_err(|e| e.to_string())?,
    };
    let mut app = App::start(store, Headless::default());

    let request = match update {
        None => Request::GetConfig,
        Some((enabled, hotkey)) => {
            let current = app.config().clone();
            Request::SaveConfig(Config {
                enabled: enabled.unwrap_or(current.enabled),
                hotkey: hotkey.unwrap_or(current.hotkey),
            })
        }
    };

    match app.handle(request) {
        Response::Config(cfg) => print_config(&cfg),
        Response::Saved => print_config(app.config()),
        Response::Error(message) => return Err(message),
        other => tracing::debug!(response = ?other, "unexpected response"),
    }

    Ok(())
}

fn convert(text: Option<String>) -> Result<(), String> {
    let text = match text {
        Some(text) => text,
        None => io::read_to_string(io::stdin()).map_err(|e| e.to_string())?,
    };
    print!("{}", convert_text(&text));
    Ok(())
}

fn print_config(cfg: &Config) {
    println!("enabled = {}", cfg.enabled);
    println!("hotkey = {:?}", cfg.hotkey);
}
