use ffmpeg::util::log::Level as FfmpegLogLevel;
use std::{
    env,
    fmt::{self, Display, Formatter},
    str::FromStr as _,
    sync::OnceLock,
};

lazy_static::lazy_static! {
    pub static ref ENV: EnvVars = EnvVars::default();
}

#[derive(Debug, Clone, Copy)]
pub struct Dimensions(pub u32, pub u32);

impl Dimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self(width, height)
    }
    pub fn width(&self) -> u32 {
        self.0
    }
    pub fn height(&self) -> u32 {
        self.1
    }
}

impl Display for Dimensions {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}x{}", self.width(), self.height())
    }
}

impl PartialEq for Dimensions {
    fn eq(&self, other: &Dimensions) -> bool {
        self.width() == other.width() && self.height() == other.height()
    }
}

/// Gets the value of the provided environment variable name and converts it to a boolean value. A
/// environment variable's value is considered `true` if it's value is a positive, non-zero integer.
pub fn envvar_to_bool(varname: &str) -> bool {
    match env::var(varname) {
        Err(_) => false,
        Ok(v) => {
            if let Ok(n) = usize::from_str(&v) {
                n != 0
            } else {
                false
            }
        }
    }
}

/// Shortens a file name for display by replacing its middle with `...`. Names that are already
/// `max_length` characters or shorter are returned as-is. Otherwise the result keeps the first and
/// last `(max_length - 3) / 2` characters.
pub fn shorten_filename(name: &str, max_length: usize) -> String {
    let len = name.chars().count();
    if len <= max_length {
        return String::from(name);
    }
    let half = max_length.saturating_sub(3) / 2;
    let head: String = name.chars().take(half).collect();
    let tail: String = name.chars().skip(len - half).collect();
    format!("{}...{}", head, tail)
}

#[derive(Debug, Default)]
pub struct EnvVars {
    hide_progress_bars: OnceLock<bool>,
    ffmpeg_log_level: OnceLock<FfmpegLogLevel>,
}

macro_rules! env_var_bool_getter {
    ($field:ident, $var_name:literal) => {
        pub fn $field(&self) -> bool {
            *self.$field.get_or_init(|| envvar_to_bool($var_name))
        }
    };
}

impl EnvVars {
    env_var_bool_getter! {hide_progress_bars, "HIDE_PROGRESS_BARS"}

    pub fn ffmpeg_log_level(&self) -> FfmpegLogLevel {
        *self
            .ffmpeg_log_level
            .get_or_init(|| match env::var("FFMPEG_LOG_LEVEL") {
                Err(_) => FfmpegLogLevel::Panic,
                Ok(level_str) => parse_ffmpeg_log_level(&level_str),
            })
    }
}

fn parse_ffmpeg_log_level(level_str: &str) -> FfmpegLogLevel {
    match level_str.to_lowercase().as_ref() {
        "quiet" => FfmpegLogLevel::Quiet,
        "panic" => FfmpegLogLevel::Panic,
        "fatal" => FfmpegLogLevel::Fatal,
        "error" => FfmpegLogLevel::Error,
        "warning" => FfmpegLogLevel::Warning,
        "info" => FfmpegLogLevel::Info,
        "verbose" => FfmpegLogLevel::Verbose,
        "debug" => FfmpegLogLevel::Debug,
        "trace" => FfmpegLogLevel::Trace,
        other => {
            log::warn!("Unknown ffmpeg log level: {}", other);
            FfmpegLogLevel::Panic
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env::set_var;

    #[test]
    fn test_envvar_to_bool() {
        set_var("MK_THUMBS_TEST_VAR", "1");
        assert!(envvar_to_bool("MK_THUMBS_TEST_VAR"));
        set_var("MK_THUMBS_TEST_VAR", "2");
        assert!(envvar_to_bool("MK_THUMBS_TEST_VAR"));
        set_var("MK_THUMBS_TEST_VAR", "0");
        assert!(!envvar_to_bool("MK_THUMBS_TEST_VAR"));
        set_var("MK_THUMBS_TEST_VAR", "");
        assert!(!envvar_to_bool("MK_THUMBS_TEST_VAR"));
        set_var("MK_THUMBS_TEST_VAR", "bad-input");
        assert!(!envvar_to_bool("MK_THUMBS_TEST_VAR"));
        assert!(!envvar_to_bool("MK_THUMBS_TEST_VAR_UNSET"));
    }

    #[test]
    fn test_shorten_filename_short_names_unchanged() {
        assert_eq!(shorten_filename("clip.mp4", 60), "clip.mp4");
        let exactly_sixty = "a".repeat(60);
        assert_eq!(shorten_filename(&exactly_sixty, 60), exactly_sixty);
        assert_eq!(
            shorten_filename(&shorten_filename("clip.mp4", 60), 60),
            "clip.mp4"
        );
    }

    #[test]
    fn test_shorten_filename_long_names() {
        let name = format!("{}{}{}.mp4", "A".repeat(28), "m".repeat(40), "Z".repeat(24));
        let short = shorten_filename(&name, 60);
        assert_eq!(short.chars().count(), 28 + 3 + 28);
        assert!(short.starts_with(&"A".repeat(28)));
        assert!(short.contains("..."));
        assert!(short.ends_with(&format!("{}.mp4", "Z".repeat(24))));

        let sixty_one = "b".repeat(61);
        assert_eq!(
            shorten_filename(&sixty_one, 60),
            format!("{}...{}", "b".repeat(28), "b".repeat(28))
        );
    }

    #[test]
    fn test_shorten_filename_counts_chars_not_bytes() {
        let name = "é".repeat(70);
        let short = shorten_filename(&name, 60);
        assert_eq!(short, format!("{}...{}", "é".repeat(28), "é".repeat(28)));
    }

    #[test]
    fn test_dimensions_display() {
        let dims = Dimensions::new(1280, 720);
        assert_eq!(dims.to_string(), "1280x720");
        assert_eq!((dims.width(), dims.height()), (1280, 720));
        assert_eq!(dims, Dimensions(1280, 720));
    }

    #[test]
    fn test_parse_ffmpeg_log_level() {
        assert_eq!(parse_ffmpeg_log_level("ERROR"), FfmpegLogLevel::Error);
        assert_eq!(parse_ffmpeg_log_level("trace"), FfmpegLogLevel::Trace);
        assert_eq!(parse_ffmpeg_log_level("nonsense"), FfmpegLogLevel::Panic);
    }
}
