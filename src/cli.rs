//! Everything printed to the terminal that isn't a log line.
use colored::Colorize as _;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;

const BANNER_TITLE: &str = "🎬 Video Thumbnail Generator";

lazy_static::lazy_static! {
    pub (crate)static ref PROGRESS_BAR_STYLE: ProgressStyle = ProgressStyle::default_bar()
        .template("{prefix:.cyan} [{bar:40.cyan/blue}] {percent:3}% | {pos}/{len}")
        .unwrap()
        .progress_chars("█░");
}

/// Draws the title inside a padded cyan box.
pub fn banner() -> String {
    // The clapper emoji takes two columns.
    let inner = BANNER_TITLE.chars().count() + 1 + 6;
    let horizontal = "─".repeat(inner);
    let blank = format!("│{}│", " ".repeat(inner));
    [
        format!("╭{}╮", horizontal).cyan().to_string(),
        blank.cyan().to_string(),
        format!(
            "{}   {}   {}",
            "│".cyan(),
            BANNER_TITLE.cyan(),
            "│".cyan()
        ),
        blank.cyan().to_string(),
        format!("╰{}╯", horizontal).cyan().to_string(),
    ]
    .join("\n")
}

pub fn print_banner() {
    println!("{}", banner());
}

pub fn print_directory_not_found(path: &Path) {
    eprintln!("{}", "❌ Directory not found!".red());
    log::debug!("{} does not exist", path.display());
}

pub fn print_no_videos() {
    println!("{}", "No video files found.".yellow());
}

pub fn print_all_done() {
    println!("{}", "\n✨ All done!".bright_cyan());
}

/// Prints above the progress bar.
pub fn print_conflict(pbar: &ProgressBar, short_name: &str) {
    pbar.suspend(|| {
        println!("{}", "\nThumbnail already exists for:".yellow());
        println!("{}", format!("\"{}\"", short_name).bright_black());
    });
}

pub fn print_generating(pbar: &ProgressBar, short_name: &str) {
    pbar.suspend(|| {
        println!(
            "{}",
            format!("\n📸 Generating thumb for: {}", short_name).green()
        )
    });
}

pub fn print_saved(pbar: &ProgressBar, thumb_name: &str) {
    pbar.suspend(|| println!("{}", format!("✅ Saved: {}", thumb_name).bright_black()));
}

pub fn print_failed(pbar: &ProgressBar, short_name: &str, error: &str) {
    pbar.suspend(|| {
        println!(
            "{}",
            format!("❌ Error processing {}: {}", short_name, error).red()
        )
    });
}
