use std::path::{Path, PathBuf};

use derivative::Derivative;
use ffmpeg::{
    codec::context::Context as CodecContext,
    decoder::Video as VideoDecoder,
    format::{context::Input, Pixel as PixelFormat},
    media::Type as MediaType,
    rescale::{self, Rescale as _},
    util::frame::video::Video,
    Rational,
};
use ffmpeg_sys_next as ffmpeg_sys;
use image::RgbImage;
use snafu::OptionExt as _;

use crate::{
    error::{NoFrameSnafu, NoVideoStreamSnafu, UnknownDurationSnafu},
    ffmpeg_ext::{FrameSeekable as _, ScaleToRgb as _, SeekFlags},
    util::Dimensions,
    Result,
};

/// The timestamp in `time_base` lying `position` of the way through a video that starts at
/// `start_time` and lasts `duration` (both in `AV_TIME_BASE` units).
pub fn target_timestamp(
    start_time: i64,
    duration: i64,
    position: f64,
    time_base: Rational,
) -> i64 {
    let offset = (duration as f64 * position.clamp(0.0, 1.0)) as i64;
    (start_time + offset).rescale(rescale::TIME_BASE, time_base)
}

/// An opened video file along with what's needed to grab frames out of its best video stream.
#[derive(Derivative)]
#[derivative(Debug)]
pub struct VidInfo {
    pub path: PathBuf,
    /// Duration in `AV_TIME_BASE` units (microseconds).
    pub duration: i64,
    /// Where the video stream's timestamps begin, in `AV_TIME_BASE` units. MPEG program and
    /// transport streams rarely start at zero.
    pub start_time: i64,
    pub pixel_format: PixelFormat,
    pub time_base: Rational,
    pub height: u32,
    pub width: u32,
    pub video_stream_idx: usize,
    #[derivative(Debug = "ignore")]
    pub input: Input,
}

impl VidInfo {
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let input = ffmpeg::format::input(&path)?;
        let stream = input
            .streams()
            .best(MediaType::Video)
            .context(NoVideoStreamSnafu { path: path.clone() })?;
        let decoder = CodecContext::from_parameters(stream.parameters())?
            .decoder()
            .video()?;
        let time_base = stream.time_base();
        let duration = if input.duration() > 0 {
            input.duration()
        } else if stream.duration() > 0 {
            stream.duration().rescale(time_base, rescale::TIME_BASE)
        } else {
            return UnknownDurationSnafu { path }.fail();
        };
        let start_time = match stream.start_time() {
            ffmpeg_sys::AV_NOPTS_VALUE => 0,
            start => start.rescale(time_base, rescale::TIME_BASE),
        };
        let video_stream_idx = stream.index();
        Ok(Self {
            duration,
            start_time,
            pixel_format: decoder.format(),
            time_base,
            width: decoder.width(),
            height: decoder.height(),
            video_stream_idx,
            input,
            path,
        })
    }

    fn create_decoder(&self) -> Result<VideoDecoder> {
        let stream = self
            .input
            .stream(self.video_stream_idx)
            .context(NoVideoStreamSnafu {
                path: self.path.clone(),
            })?;
        Ok(CodecContext::from_parameters(stream.parameters())?
            .decoder()
            .video()?)
    }

    /// The timestamp, in the video stream's time base, that lies `position` of the way through
    /// the video. `position` is clamped to `0.0..=1.0`.
    pub fn timestamp_at(&self, position: f64) -> i64 {
        target_timestamp(self.start_time, self.duration, position, self.time_base)
    }

    /// Decodes the first frame at or after `position` of the way through the video and scales it
    /// to `size`. If the stream ends before reaching that point, the last decoded frame is used.
    pub fn frame_at(&mut self, position: f64, size: &Dimensions) -> Result<RgbImage> {
        let ts = self.timestamp_at(position);
        log::debug!(
            "Getting frame at {} ({}%) of {}",
            ts,
            position * 100.0,
            self.path.display()
        );
        let mut decoder = self.create_decoder()?;
        self.input
            .seek_to_frame(self.video_stream_idx as i32, ts, SeekFlags::BACKWARD)?;
        let mut frame = Video::empty();
        let mut found: Option<Video> = None;
        // Done to prevent a borrow of self
        let video_stream_idx = self.video_stream_idx;
        'packets: for (stream, packet) in self.input.packets() {
            if stream.index() != video_stream_idx {
                continue;
            }
            decoder.send_packet(&packet)?;
            while decoder.receive_frame(&mut frame).is_ok() {
                let reached = frame.timestamp().map_or(true, |pts| pts >= ts);
                found = Some(frame.clone());
                if reached {
                    break 'packets;
                }
            }
        }
        if found.as_ref().map_or(true, |f| f.timestamp().unwrap_or(ts) < ts) {
            decoder.send_eof()?;
            while decoder.receive_frame(&mut frame).is_ok() {
                let reached = frame.timestamp().map_or(true, |pts| pts >= ts);
                found = Some(frame.clone());
                if reached {
                    break;
                }
            }
        }
        let frame = found.context(NoFrameSnafu {
            path: self.path.clone(),
        })?;
        frame.scale_to_rgb(size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_timestamp_from_zero() {
        // 10 s at 1/1000.
        assert_eq!(
            target_timestamp(0, 10_000_000, 0.1, Rational::new(1, 1000)),
            1_000
        );
        assert_eq!(target_timestamp(0, 10_000_000, 0.0, Rational::new(1, 1000)), 0);
    }

    #[test]
    fn test_target_timestamp_adds_start_time() {
        // A 10 s MPEG stream whose timestamps begin at 1 s, 90 kHz clock.
        assert_eq!(
            target_timestamp(1_000_000, 10_000_000, 0.1, Rational::new(1, 90_000)),
            180_000
        );
    }

    #[test]
    fn test_target_timestamp_clamps_position() {
        let tb = Rational::new(1, 1000);
        assert_eq!(target_timestamp(500_000, 2_000_000, 1.5, tb), 2_500);
        assert_eq!(target_timestamp(500_000, 2_000_000, -1.0, tb), 500);
    }
}
