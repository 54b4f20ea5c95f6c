use crate::{util::Dimensions, Result};
use ffmpeg::{
    format::Pixel as PixelFormat,
    software::scaling::{context::Context as ScalingContext, flag::Flags as ScalingFlags},
    util::frame::video::Video,
};
use image::RgbImage;
use snafu::OptionExt as _;

pub trait ScaleToRgb {
    /// Scales the frame to exactly `size` and converts it to a packed RGB image.
    fn scale_to_rgb(&self, size: &Dimensions) -> Result<RgbImage>;
}

impl ScaleToRgb for Video {
    fn scale_to_rgb(&self, size: &Dimensions) -> Result<RgbImage> {
        let mut scaler = ScalingContext::get(
            self.format(),
            self.width(),
            self.height(),
            PixelFormat::RGB24,
            size.width(),
            size.height(),
            ScalingFlags::BILINEAR,
        )?;
        let mut rgb_frame = Video::empty();
        scaler.run(self, &mut rgb_frame)?;
        let buffer = packed_plane(&rgb_frame, size, 3);
        RgbImage::from_raw(size.width(), size.height(), buffer)
            .whatever_context(format!("RGB buffer does not fit {}", size))
    }
}

/// Copies the first plane of `frame` without the row padding FFmpeg adds for alignment.
fn packed_plane(frame: &Video, size: &Dimensions, bytes_per_pixel: usize) -> Vec<u8> {
    let stride = frame.stride(0);
    let row_len = size.width() as usize * bytes_per_pixel;
    let rows = size.height() as usize;
    let data = frame.data(0);
    if stride == row_len {
        data[..row_len * rows].to_vec()
    } else {
        data.chunks(stride)
            .take(rows)
            .flat_map(|row| &row[..row_len])
            .copied()
            .collect()
    }
}
