use std::path::PathBuf;

use clap::{Parser, Subcommand};
use colored::Colorize;
use plugload::{commands, init_tracing, GlobalOpts};

#[derive(Parser)]
#[command(name = "plugload")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(
    about = "Plugin manifest generator",
    long_about = "plugload scans an application's plugin tiers and regenerates the client and server import manifests."
)]
struct Cli {
    #[command(flatten)]
    global: GlobalOpts,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Regenerate the client and server plugin manifests
    Generate {
        /// Application root containing the plugin tiers
        #[arg(long, default_value = ".")]
        app_root: PathBuf,
        /// Execution mode (development, production, test); overrides APP_ENV
        #[arg(long)]
        mode: Option<String>,
    },
    /// Show discovered entry points without writing manifests
    List {
        /// Application root containing the plugin tiers
        #[arg(long, default_value = ".")]
        app_root: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.global.verbosity_level());

    let result = match cli.command {
        Commands::Generate { app_root, mode } => {
            commands::generate::run(&app_root, mode.as_deref())
        }
        Commands::List { app_root } => commands::list::run(&app_root),
    };

    if let Err(err) = result {
        eprintln!("{} {:#}", "Error:".red().bold(), err);
        std::process::exit(1);
    }
}
