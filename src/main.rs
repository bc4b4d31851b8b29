use std::process::ExitCode;

use anyhow::{bail, Context as _, Result};
use clap::Parser;
use colored::Colorize;
use log::LevelFilter;

use datewise::cli::args::{Cli, OutputFormat};
use datewise::cli::commands::{self, Context};
use datewise::config::Config;
use datewise::logger::{parse_level, Logger, LOG_ENV};
use datewise::output::format_error_json;

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {e:#}", "error".red().bold());
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    let config = match &cli.config {
        Some(path) => Config::load_from_path(path)?,
        None => Config::load()?,
    };
    config.general.color.apply();

    let ctx = Context::new(&cli, &config);
    log::debug!("reference date {}, output {:?}", ctx.reference, ctx.format);

    match commands::dispatch(cli.command, &ctx) {
        Ok(output) => {
            if !output.is_empty() {
                println!("{output}");
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            match ctx.format {
                OutputFormat::Json => println!("{}", format_error_json(&err)?),
                OutputFormat::Pretty => eprintln!("{}: {err}", "error".red().bold()),
            }
            Ok(ExitCode::FAILURE)
        }
    }
}

fn init_logging(verbose: bool) -> Result<()> {
    let from_env = match std::env::var(LOG_ENV) {
        Ok(value) => match parse_level(&value) {
            Some(level) => level,
            None => bail!("{LOG_ENV} has unknown level '{value}'"),
        }
        Err(_) => LevelFilter::Off,
    };
    let level = if verbose { from_env.max(LevelFilter::Debug) } else { from_env };

    Logger::init().context("failed to install logger")?;
    log::set_max_level(level);
    Ok(())
}
