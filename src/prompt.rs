//! Interactive questions asked of the user.
use colored::Colorize as _;
use std::io::{self, BufRead, StdinLock, Stdout, Write};

use crate::Result;

/// The answer to the "Overwrite? (Y/N/A for all)" question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverwriteDecision {
    /// Overwrite this thumbnail only.
    Yes,
    /// Overwrite this one and every later conflict without asking.
    All,
    /// Leave the existing thumbnail alone.
    No,
    /// Anything else. The thumbnail still gets generated.
    Unspecified,
}

impl OverwriteDecision {
    pub fn parse(answer: &str) -> Self {
        match answer.trim().to_lowercase().as_str() {
            "y" => Self::Yes,
            "a" => Self::All,
            "n" => Self::No,
            _ => Self::Unspecified,
        }
    }
}

/// Source of the user's answers. Both calls block until an answer is available.
pub trait Prompter {
    fn ask_directory(&mut self) -> Result<String>;
    fn ask_overwrite(&mut self, file_name: &str) -> Result<OverwriteDecision>;
}

/// Asks on a terminal, or anything else that reads and writes lines.
pub struct ConsolePrompter<R, W> {
    input: R,
    output: W,
}

impl ConsolePrompter<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsolePrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn ask(&mut self, question: &str) -> Result<String> {
        write!(self.output, "{} ", question)?;
        self.output.flush()?;
        let mut answer = String::new();
        if self.input.read_line(&mut answer)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed before an answer was given",
            )
            .into());
        }
        Ok(answer)
    }
}

impl<R: BufRead, W: Write> Prompter for ConsolePrompter<R, W> {
    fn ask_directory(&mut self) -> Result<String> {
        let answer = self.ask(&format!(
            "{} {}",
            "?".green(),
            "Enter the folder path with videos:".bold()
        ))?;
        Ok(answer.trim().to_string())
    }

    fn ask_overwrite(&mut self, file_name: &str) -> Result<OverwriteDecision> {
        let answer = self.ask(&format!(
            "{} {}",
            "?".green(),
            "Overwrite? (Y/N/A for all):".white()
        ))?;
        let decision = OverwriteDecision::parse(&answer);
        log::debug!("Overwrite answer for {}: {:?}", file_name, decision);
        Ok(decision)
    }
}
