mod cli;
mod commands;

use clap::Parser;
use serde::Serialize;

use kundali_config::KundaliConfig;

use crate::cli::{Cli, Commands};

fn main() {
    if let Err(error) = run() {
        eprintln!("kundali: {error:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let config = KundaliConfig::load_from(cli.config.as_deref())?;

    match &cli.command {
        Commands::Classify {
            lon,
            ayanamsa,
            jd,
            asc,
        } => emit(&commands::classify_cmd(
            &config,
            *lon,
            ayanamsa.as_deref(),
            *jd,
            *asc,
        )?),
        Commands::Chart(args) => emit(&commands::build_chart(&config, args)?),
        Commands::Aspects(args) => emit(&commands::aspects_cmd(&config, args)?),
        Commands::Strength(args) => emit(&commands::strength_cmd(&config, args)?),
        Commands::Yogas(args) => emit(&commands::yogas_cmd(&config, args)?),
        Commands::Dasha {
            chart,
            level,
            now,
            sandhi,
        } => emit(&commands::dasha_cmd(
            &config,
            chart,
            *level,
            now.as_deref(),
            *sandhi,
        )?),
        Commands::Ashtakavarga(args) => emit(&commands::ashtakavarga_cmd(&config, args)?),
        Commands::Analyse(args) => emit(&commands::analyse_cmd(&config, args)?),
        Commands::Layout { chart, size } => emit(&commands::layout_cmd(&config, chart, *size)?),
        Commands::Config => {
            print!("{}", config.to_toml()?);
            Ok(())
        }
    }
}

/// Pretty JSON on stdout.
fn emit<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
