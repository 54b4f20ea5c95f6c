//! Writing a single thumbnail for a video.
use image::{ImageFormat, RgbImage};
use std::path::Path;

use crate::{files::get_filename, util::Dimensions, video::VidInfo, Result};

/// Something that can pull one frame out of a video and write it as a JPEG.
pub trait FrameExtractor {
    /// Grabs the frame `position` of the way through `source` (`0.1` is 10% in), scales it to
    /// exactly `size`, and writes it to `output`, replacing whatever is already there.
    fn extract_frame(
        &mut self,
        source: &Path,
        output: &Path,
        position: f64,
        size: &Dimensions,
    ) -> Result<()>;
}

/// Extracts frames in-process with FFmpeg. `ffmpeg::init` must have been called first.
#[derive(Debug, Default, Clone, Copy)]
pub struct FfmpegExtractor;

impl FrameExtractor for FfmpegExtractor {
    fn extract_frame(
        &mut self,
        source: &Path,
        output: &Path,
        position: f64,
        size: &Dimensions,
    ) -> Result<()> {
        log::info!("Generating thumbnail for {}", get_filename(&source));
        let mut info = VidInfo::new(source)?;
        log::debug!("{:#?}", info);
        let image = info.frame_at(position, size)?;
        save_jpeg(&image, output)
    }
}

pub fn save_jpeg(image: &RgbImage, path: &Path) -> Result<()> {
    log::debug!("Saving to file {}", path.display());
    image.save_with_format(path, ImageFormat::Jpeg)?;
    Ok(())
}
