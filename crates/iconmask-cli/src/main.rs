mod config;
mod service;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use crate::config::{write_default, Config, LOCAL_CONFIG_FILE};
use crate::service::{BuildOptions, BuildService};
use iconmask_sets::OutputFormat;
use std::path::{Path, PathBuf};

/// iconmask - CSS mask utilities from SVG icon directories
#[derive(Parser, Debug)]
#[command(name = "iconmask", version)]
#[command(about = "Generate CSS mask icon utilities from SVG icon sets", long_about = None)]
struct Args {
    /// Config file (defaults to ./iconmask.toml when present)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log level override (trace, debug, info, warn, error)
    #[arg(long, global = true, value_name = "LEVEL")]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate icon utilities
    Build {
        /// Output file (defaults to the configured path, or stdout)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output format: css or json
        #[arg(short, long)]
        format: Option<OutputFormat>,

        /// Emit every registered icon, even if no template uses it
        #[arg(long)]
        all: bool,
    },
    /// Print registered utility class names
    List {
        /// Only list one set (hero or lucide)
        #[arg(long, value_name = "PREFIX")]
        set: Option<String>,
    },
    /// Write a default iconmask.toml
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    match args.command {
        Command::Init { force } => {
            let path = args
                .config
                .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE));
            write_default(&path, force)
        }
        Command::Build {
            output,
            format,
            all,
        } => {
            let service = start(args.config.as_deref(), args.log_level)?;
            service.build(&BuildOptions {
                output,
                format,
                all,
            })
        }
        Command::List { set } => {
            let service = start(args.config.as_deref(), args.log_level)?;
            for name in service.list(set.as_deref())? {
                println!("{name}");
            }
            Ok(())
        }
    }
}

/// Load configuration, initialize logging and create the build service
fn start(config_path: Option<&Path>, log_level: Option<String>) -> Result<BuildService> {
    let mut config = Config::load(config_path)?;
    if let Some(level) = log_level {
        config.logging.level = level;
    }

    iconmask_logging::init_logging(&config.logging.level, config.logging.format)?;

    // Relative paths in an explicit config file are relative to that file
    let root = match config_path.and_then(Path::parent) {
        Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
        _ => std::env::current_dir().context("Failed to determine working directory")?,
    };

    Ok(BuildService::new(config, root))
}
