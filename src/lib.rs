#![cfg_attr(docsrs, feature(doc_cfg))]
extern crate ffmpeg_next as ffmpeg;

pub mod ffmpeg_ext;
pub mod files;
pub mod prompt;
pub mod settings;
pub mod thumbnail;
pub mod util;
pub mod video;

pub mod cli;
mod error;
pub mod process;
pub use error::{Error, Result};
