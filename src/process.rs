use crate::{
    cli, files,
    prompt::{OverwriteDecision, Prompter},
    settings::Settings,
    thumbnail::FrameExtractor,
    util::{self, ENV},
    Error, Result,
};
use indicatif::{MultiProgress, ProgressBar};
use std::{
    env,
    path::{Path, PathBuf},
};

/// Whether existing thumbnails get asked about or are overwritten silently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverwritePolicy {
    #[default]
    Ask,
    Always,
}

/// What happened to a single video.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Generated,
    Skipped,
    Failed(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    pub generated: usize,
    pub skipped: usize,
    pub failed: usize,
    pub policy: OverwritePolicy,
}

impl Summary {
    fn record(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::Generated => self.generated += 1,
            Outcome::Skipped => self.skipped += 1,
            Outcome::Failed(_) => self.failed += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.generated + self.skipped + self.failed
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunStatus {
    Completed(Summary),
    NoVideos,
    DirectoryNotFound(PathBuf),
}

impl RunStatus {
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::DirectoryNotFound(_) => 1,
            _ => 0,
        }
    }
}

/// Turns the user's answer into an absolute path. Relative answers are resolved against the
/// current directory.
pub fn resolve_directory(answer: &str) -> Result<PathBuf> {
    let path = Path::new(answer.trim());
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(env::current_dir()?.join(path))
    }
}

/// Handles one candidate: resolves a conflict with an existing thumbnail, then generates it.
/// Extraction failures are reported and returned as [`Outcome::Failed`]; only prompt errors are
/// propagated.
pub fn process_video<P, E>(
    pbar: &ProgressBar,
    settings: &Settings,
    dir: &Path,
    file_name: &str,
    policy: &mut OverwritePolicy,
    prompter: &mut P,
    extractor: &mut E,
) -> Result<Outcome>
where
    P: Prompter + ?Sized,
    E: FrameExtractor + ?Sized,
{
    let source = dir.join(file_name);
    let thumb_path = files::thumb_path(dir, file_name, settings.suffix());
    let short_name = util::shorten_filename(file_name, settings.max_filename_length());

    if thumb_path.exists() && *policy == OverwritePolicy::Ask {
        cli::print_conflict(pbar, &short_name);
        match pbar.suspend(|| prompter.ask_overwrite(file_name))? {
            OverwriteDecision::No => {
                log::info!("Keeping existing thumbnail for {}", file_name);
                return Ok(Outcome::Skipped);
            }
            OverwriteDecision::All => {
                log::info!("Overwriting all remaining thumbnails.");
                *policy = OverwritePolicy::Always;
            }
            OverwriteDecision::Yes => {}
            OverwriteDecision::Unspecified => {
                log::warn!(
                    "Unrecognized answer for {}; overwriting the thumbnail anyway.",
                    file_name
                );
            }
        }
    }

    cli::print_generating(pbar, &short_name);
    match extractor.extract_frame(
        &source,
        &thumb_path,
        settings.position(),
        &settings.thumb_size(),
    ) {
        Ok(()) => {
            cli::print_saved(pbar, &files::get_filename(&thumb_path));
            Ok(Outcome::Generated)
        }
        Err(error) => {
            log::error!("{} failed: {}", file_name, error);
            let message = error.to_string();
            cli::print_failed(pbar, &short_name, &message);
            Ok(Outcome::Failed(message))
        }
    }
}

/// A bar for `len` videos, drawn through `mp`.
pub fn progress_bar(mp: &MultiProgress, len: usize) -> ProgressBar {
    let pbar = mp.add(ProgressBar::new(len as u64));
    pbar.set_style(cli::PROGRESS_BAR_STYLE.clone());
    pbar.set_prefix("Progress");
    pbar
}

/// Runs every video in `video_files` through [`process_video`] in order, advancing `pbar` once
/// per video regardless of the outcome.
pub fn process_videos<P, E>(
    pbar: &ProgressBar,
    settings: &Settings,
    dir: &Path,
    video_files: &[String],
    prompter: &mut P,
    extractor: &mut E,
) -> Result<Summary>
where
    P: Prompter + ?Sized,
    E: FrameExtractor + ?Sized,
{
    let mut summary = Summary::default();
    let mut policy = OverwritePolicy::Ask;
    for file_name in video_files {
        let outcome = process_video(
            pbar,
            settings,
            dir,
            file_name,
            &mut policy,
            prompter,
            extractor,
        )?;
        summary.record(&outcome);
        pbar.inc(1);
    }
    pbar.finish();
    summary.policy = policy;
    Ok(summary)
}

/// One full interactive run: ask for the folder, find the videos, and thumbnail them.
pub fn run<P, E>(
    settings: &Settings,
    prompter: &mut P,
    extractor: &mut E,
    mp: &MultiProgress,
) -> Result<RunStatus>
where
    P: Prompter + ?Sized,
    E: FrameExtractor + ?Sized,
{
    cli::print_banner();
    let dir = resolve_directory(&prompter.ask_directory()?)?;
    if !dir.exists() {
        cli::print_directory_not_found(&dir);
        return Ok(RunStatus::DirectoryNotFound(dir));
    }
    if !dir.is_dir() {
        return Err(Error::NotADirectory { path: dir });
    }
    log::debug!("Settings: {:#?}", settings);
    let video_files = files::get_video_files(&dir, &settings.extensions())?;
    if video_files.is_empty() {
        cli::print_no_videos();
        return Ok(RunStatus::NoVideos);
    }
    let pbar = progress_bar(mp, video_files.len());
    let summary = process_videos(&pbar, settings, &dir, &video_files, prompter, extractor)?;
    log::info!(
        "Processed {} video(s): {} generated, {} skipped, {} failed.",
        summary.total(),
        summary.generated,
        summary.skipped,
        summary.failed
    );
    cli::print_all_done();
    Ok(RunStatus::Completed(summary))
}

/// A progress display that respects `HIDE_PROGRESS_BARS`.
pub fn multi_progress() -> MultiProgress {
    if ENV.hide_progress_bars() {
        MultiProgress::with_draw_target(indicatif::ProgressDrawTarget::hidden())
    } else {
        MultiProgress::new()
    }
}
