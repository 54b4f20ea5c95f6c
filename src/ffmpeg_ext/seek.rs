use crate::Result;
use bitflags::bitflags;
use ffmpeg::{format::context::Input, util::error::Error as FFMpegError};
use ffmpeg_sys_next as ffmpeg_sys;
use libc::c_int;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Flags: c_int {
        const BACKWARD = ffmpeg_sys::AVSEEK_FLAG_BACKWARD as c_int;
    }
}

/// Seeking on a single stream, with `timestamp` in that stream's time base. The safe
/// `Input::seek` only seeks across all streams in `AV_TIME_BASE` units.
pub trait FrameSeekable {
    fn seek_to_frame(&mut self, stream_idx: i32, timestamp: i64, flags: Flags) -> Result<()>;
}

impl FrameSeekable for Input {
    fn seek_to_frame(&mut self, stream_idx: i32, timestamp: i64, flags: Flags) -> Result<()> {
        unsafe {
            match ffmpeg_sys::av_seek_frame(self.as_mut_ptr(), stream_idx, timestamp, flags.bits())
            {
                s if s >= 0 => Ok(()),
                e => Err(FFMpegError::from(e).into()),
            }
        }
    }
}
