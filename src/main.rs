use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use colorizer::{
    ColorState, Field, FileStore, Picker, PickerConfig, PickerError, contrast_shade, format_hsl,
    format_hsv, format_rgb,
};
use tracing_subscriber::EnvFilter;

/// Colorizer: convert colors between hex, RGB, HSL and HSV and keep a saved palette.
#[derive(Parser, Debug)]
#[command(name = "colorizer", version, about)]
struct Args {
    /// Config file path override.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Store file path override.
    #[arg(long)]
    store: Option<PathBuf>,

    /// Log level override (debug, info, warn, error).
    #[arg(long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert a color given as hex, "r, g, b", or "h, s%, l%" and make it current.
    Convert { text: String },
    /// Show the current color.
    Current,
    /// Save a hex color to the front of the palette.
    Save { hex: String },
    /// Delete a hex color from the palette.
    Delete { hex: String },
    /// List saved colors, most recent first.
    List,
}

fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .map(|dir| dir.join("colorizer").join("config.toml"))
        .unwrap_or_else(|| PathBuf::from("colorizer.toml"))
}

fn default_store_path() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join("colorizer").join("store.json"))
        .unwrap_or_else(|| PathBuf::from("colorizer-store.json"))
}

fn print_state(state: &ColorState) {
    println!("hex  {}", state.label());
    println!("rgb  {}", format_rgb(state.rgb));
    println!("hsl  {}", format_hsl(state.hsl));
    println!("hsv  {}", format_hsv(state.hsv));
    println!("text {}", contrast_shade(state.rgb));
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let config_path = args.config.unwrap_or_else(default_config_path);
    let config = PickerConfig::load(&config_path)?;

    let store_path = args
        .store
        .or_else(|| config.store_path.clone())
        .unwrap_or_else(default_store_path);
    tracing::debug!(path = %store_path.display(), "opening store");
    let mut picker = Picker::new(FileStore::open(store_path)?, &config)?;

    match args.command {
        Command::Convert { text } => {
            let field = Field::detect(&text).ok_or_else(|| {
                PickerError::Color(colorizer::ColorError::InvalidFormat {
                    expected: "hex, \"r, g, b\" or \"h, s%, l%\"",
                })
            })?;
            let state = picker.blur(field, &text)?;
            print_state(&state);
        }
        Command::Current => print_state(picker.current()),
        Command::Save { hex } => {
            let saved = picker.save_current_input(&hex)?;
            println!("{} saved colors", saved.len());
        }
        Command::Delete { hex } => {
            let saved = picker.delete_saved(&hex)?;
            println!("{} saved colors", saved.len());
        }
        Command::List => {
            for hex in &picker.saved()? {
                println!("{}  {}", hex.as_str().to_ascii_uppercase(), contrast_shade(hex.to_rgb()));
            }
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    let log_directive = args.log_level.as_deref().unwrap_or("colorizer=warn");
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                log_directive
                    .parse()
                    .unwrap_or_else(|_| "colorizer=warn".parse().unwrap()),
            ),
        )
        .init();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
