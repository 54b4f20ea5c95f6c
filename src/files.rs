//! Items dealing with files.
use std::{
    fs::{self, read_dir},
    path::{Path, PathBuf},
};

use crate::Result;

/// A convenience function to get the file name from a path as a string.
pub fn get_filename<P: AsRef<Path>>(path: &P) -> String {
    path.as_ref()
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// A convenience function to get the file stem from a path as a string.
pub fn get_file_stem<P: AsRef<Path>>(path: &P) -> String {
    path.as_ref()
        .file_stem()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Gets the file name to use for a thumbnail based off of the original file name, which is the
/// file name without its extension, followed by `suffix` and `.jpg`.
pub fn thumb_file_name<P: AsRef<Path>>(path: &P, suffix: &str) -> String {
    format!("{}{}.jpg", get_file_stem(path), suffix)
}

/// The thumbnail path for the video `file_name` inside `dir`.
pub fn thumb_path(dir: &Path, file_name: &str, suffix: &str) -> PathBuf {
    dir.join(thumb_file_name(&file_name, suffix))
}

/// Dot files and the `._` resource fork files macOS leaves on foreign filesystems.
pub fn is_hidden(file_name: &str) -> bool {
    file_name.starts_with("._") || file_name.starts_with('.')
}

pub fn has_supported_extension<S: AsRef<str>>(file_name: &str, extensions: &[S]) -> bool {
    match Path::new(file_name).extension().and_then(|e| e.to_str()) {
        Some(ext) => {
            let ext = ext.to_lowercase();
            extensions.iter().any(|e| e.as_ref() == ext)
        }
        None => false,
    }
}

/// Lists the names of the video files directly inside `dir`. A file is kept when it is a
/// non-empty regular file, isn't hidden, and has one of `extensions`. The order is whatever the
/// filesystem returns.
pub fn get_video_files<S: AsRef<str>>(dir: &Path, extensions: &[S]) -> Result<Vec<String>> {
    let mut video_files = Vec::new();
    for entry in read_dir(dir)? {
        let path = entry?.path();
        let file_name = match path.file_name().and_then(|n| n.to_str()) {
            Some(name) => String::from(name),
            None => {
                log::warn!("Skipping {}: name is not valid UTF-8.", path.display());
                continue;
            }
        };
        if is_hidden(&file_name) || !has_supported_extension(&file_name, extensions) {
            log::trace!("Ignoring {}", file_name);
            continue;
        }
        match fs::metadata(&path) {
            Ok(meta) if meta.is_file() && meta.len() > 0 => video_files.push(file_name),
            Ok(_) => log::debug!("Ignoring {}: empty or not a regular file.", file_name),
            Err(e) => log::warn!("Failed to stat {}. Error: {}", file_name, e),
        }
    }
    log::debug!("Found {} video file(s) in {}", video_files.len(), dir.display());
    Ok(video_files)
}
