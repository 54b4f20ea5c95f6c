extern crate ffmpeg_next as ffmpeg;

use indicatif::MultiProgress;
use indicatif_log_bridge::LogWrapper;
use mk_thumbs::{
    process::{self, RunStatus},
    prompt::ConsolePrompter,
    settings::Settings,
    thumbnail::FfmpegExtractor,
    util::ENV,
    Error, Result,
};
use std::{env, process::ExitCode};

#[cfg(all(debug_assertions, feature = "pretty-errors"))]
fn _init_pretty_errors() -> Result<()> {
    if let Err(std::env::VarError::NotPresent) = std::env::var("RUST_BACKTRACE") {
        color_backtrace::BacktracePrinter::new()
            .verbosity(color_backtrace::Verbosity::Full)
            .install(color_backtrace::default_output_stream())
    } else {
        color_backtrace::install();
    }
    color_eyre::install()?;
    Ok(())
}

#[cfg(all(not(debug_assertions), feature = "pretty-errors"))]
fn _init_pretty_errors() -> Result<()> {
    color_backtrace::install();
    color_eyre::install()?;
    Ok(())
}

#[cfg(not(feature = "pretty-errors"))]
fn _init_pretty_errors() -> Result<()> {
    Ok(())
}

/// An explicit `RUST_LOG` always wins over `--verbose`.
fn log_filter(verbose: bool, rust_log: Option<String>) -> String {
    match rust_log {
        Some(filter) if !filter.is_empty() => filter,
        _ if verbose => String::from("mk_thumbs=debug"),
        _ => String::from("mk_thumbs=warn"),
    }
}

fn init_logging(settings: &Settings, mp: &MultiProgress) -> Result<()> {
    let logger = pretty_env_logger::formatted_builder()
        .parse_filters(&log_filter(settings.verbose(), env::var("RUST_LOG").ok()))
        .build();
    let level = logger.filter();
    LogWrapper::new(mp.clone(), logger).try_init()?;
    log::set_max_level(level);
    Ok(())
}

fn init() -> Result<()> {
    dotenv::dotenv().ok();
    _init_pretty_errors()?;
    ffmpeg::init()?;
    ffmpeg::util::log::set_level(ENV.ffmpeg_log_level());
    Ok(())
}

fn run(settings: &Settings) -> Result<ExitCode> {
    let mp = process::multi_progress();
    init_logging(settings, &mp)?;
    let mut prompter = ConsolePrompter::stdio();
    let mut extractor = FfmpegExtractor;
    let status = process::run(settings, &mut prompter, &mut extractor, &mp)?;
    if let RunStatus::DirectoryNotFound(path) = &status {
        log::debug!("Giving up: {} does not exist", path.display());
    }
    Ok(ExitCode::from(status.exit_code()))
}

fn main() -> Result<ExitCode> {
    init()?;
    match Settings::load() {
        Ok(settings) => run(&settings),
        Err(error) => {
            if let Error::Clap { source: e } = error {
                if matches!(
                    e.kind(),
                    clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion
                ) {
                    e.print()?;
                    Ok(ExitCode::SUCCESS)
                } else {
                    Err(e.into())
                }
            } else {
                Err(error)
            }
        }
    }
}
