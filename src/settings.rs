//! Layered settings: built-in defaults, then config files, then command line flags.

use crate::{util::Dimensions, Error, Result};
use clap::Parser;
use config::{builder::DefaultState, Config, ConfigBuilder, File as ConfigFile};
use directories::BaseDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const SUPPORTED_EXTENSIONS: &[&str] = &["mp4", "mkv", "avi", "mov", "wmv", "mpg", "mpeg"];

const CONFIG_FILE_NAME: &str = "mk-thumbs.yaml";
const LOCAL_CONFIG_FILE_NAME: &str = ".mk-thumbs.yaml";

#[derive(Debug, Parser, Clone, Default)]
#[command(
    name = env!("CARGO_PKG_NAME"),
    version,
    author,
    about,
    long_about = "Asks for a folder, then writes a <name>-thumb.jpg next to every video in it."
)]
pub struct Args {
    /// Show debug logging.
    #[arg(short, long)]
    pub verbose: bool,

    /// The configuration file to use. If provided, no other config files will be loaded.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Settings {
    verbose: bool,
    thumb_width: u32,
    thumb_height: u32,
    position: u32,
    suffix: String,
    max_filename_length: usize,
    extensions: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            verbose: false,
            thumb_width: 1280,
            thumb_height: 720,
            position: 10,
            suffix: String::from("-thumb"),
            max_filename_length: 60,
            extensions: SUPPORTED_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
        }
    }
}

impl Settings {
    pub fn load() -> Result<Self> {
        let args = Args::try_parse()?;
        Self::load_with_args(&args)
    }

    pub fn load_with_args(args: &Args) -> Result<Self> {
        let mut conf = Self::get_default_config()?;
        if let Some(config_file) = &args.config {
            conf = Self::load_from_file(config_file, conf)?;
        } else {
            conf = Self::load_base_file(conf)?;
            conf = Self::load_from_file(LOCAL_CONFIG_FILE_NAME, conf)?;
        }
        conf = Self::merge_cli_args(args, conf)?;
        let settings: Self = conf.build()?.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    fn merge_cli_args(
        args: &Args,
        conf: ConfigBuilder<DefaultState>,
    ) -> Result<ConfigBuilder<DefaultState>> {
        let mut conf = conf;
        if args.verbose {
            conf = conf.set_override("verbose", true)?;
        }
        Ok(conf)
    }

    fn load_base_file(conf: ConfigBuilder<DefaultState>) -> Result<ConfigBuilder<DefaultState>> {
        let dirs = match BaseDirs::new() {
            Some(dirs) => dirs,
            None => {
                log::debug!("No home directory found; skipping the user config file.");
                return Ok(conf);
            }
        };
        let config_path = dirs.config_dir().join(CONFIG_FILE_NAME);
        Self::load_from_file(config_path, conf)
    }

    fn load_from_file<P: AsRef<Path>>(
        path_ref: P,
        conf: ConfigBuilder<DefaultState>,
    ) -> Result<ConfigBuilder<DefaultState>> {
        let path = path_ref.as_ref();
        if path.exists() {
            if !path.is_file() {
                return Err(Error::NotAFile { path: path.into() });
            }
            log::debug!("Loading config from {}", path.display());
            return Ok(conf.add_source(ConfigFile::from(path)));
        }
        Ok(conf)
    }

    fn get_default_config() -> Result<ConfigBuilder<DefaultState>> {
        let defaults = Self::default();
        Ok(Config::builder()
            .set_default("verbose", defaults.verbose)?
            .set_default("thumb_width", defaults.thumb_width as i64)?
            .set_default("thumb_height", defaults.thumb_height as i64)?
            .set_default("position", defaults.position as i64)?
            .set_default("suffix", defaults.suffix)?
            .set_default("max_filename_length", defaults.max_filename_length as i64)?
            .set_default("extensions", defaults.extensions)?)
    }

    fn validate(&self) -> Result<()> {
        if self.position > 100 {
            snafu::whatever!(
                "position must be a percentage between 0 and 100, got {}",
                self.position
            );
        }
        if self.thumb_width == 0 || self.thumb_height == 0 {
            snafu::whatever!("thumbnail size must not be zero, got {}", self.thumb_size());
        }
        Ok(())
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }

    pub fn thumb_size(&self) -> Dimensions {
        Dimensions::new(self.thumb_width, self.thumb_height)
    }

    /// How far into the video the thumbnail is taken from, as a fraction.
    pub fn position(&self) -> f64 {
        (self.position as f64) / 100.0
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    pub fn max_filename_length(&self) -> usize {
        self.max_filename_length
    }

    pub fn extensions(&self) -> Vec<String> {
        self.extensions.iter().map(|e| e.to_lowercase()).collect()
    }
}
