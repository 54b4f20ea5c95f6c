use clap::Error as ClapError;
use config::ConfigError;
use eyre::Report as ReportError;
use ffmpeg::util::error::Error as FfmpegError;
use image::ImageError;
use log::SetLoggerError;
use snafu::Snafu;
use std::{io::Error as IoError, path::PathBuf};

#[derive(Snafu, Debug)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(transparent)]
    Io { source: IoError },
    #[snafu(transparent)]
    SetLogger { source: SetLoggerError },
    #[snafu(transparent)]
    Image { source: ImageError },
    #[snafu(display("{} is not a directory!", path.display()))]
    NotADirectory { path: PathBuf },
    #[snafu(display("{} is not a file!", path.display()))]
    NotAFile { path: PathBuf },
    #[snafu(display("File {} has no video stream.", path.display()))]
    NoVideoStream { path: PathBuf },
    #[snafu(display("Could not determine the duration of {}.", path.display()))]
    UnknownDuration { path: PathBuf },
    #[snafu(display("Could not decode a frame from {}.", path.display()))]
    NoFrame { path: PathBuf },
    #[snafu(transparent)]
    Ffmpeg { source: FfmpegError },
    #[snafu(display("{message}"))]
    Report { message: String },
    #[snafu(transparent)]
    Clap { source: ClapError },
    #[snafu(transparent)]
    Config { source: ConfigError },
    #[snafu(whatever, display("{message}"))]
    Other { message: String },
}

impl From<ReportError> for Error {
    fn from(report: ReportError) -> Self {
        Error::Report {
            message: format!("{:?}", report),
        }
    }
}

pub type Result<V> = std::result::Result<V, Error>;
