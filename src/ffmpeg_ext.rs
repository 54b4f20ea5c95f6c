pub mod seek;
pub use seek::Flags as SeekFlags;
pub use seek::FrameSeekable;

pub mod rgb;
pub use rgb::ScaleToRgb;
