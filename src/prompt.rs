//! Interactive prompts.
//!
//! Every console read goes through the [`Input`] trait so the confirmation
//! gate and the collision resolver can be driven by scripted answers.

use crate::error::Result;
use colored::Colorize;
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use std::path::Path;

/// Source of answers to interactive questions.
pub trait Input {
    /// Shows `question` and reads one line of input.
    ///
    /// Returns `Ok(None)` at end of input.
    fn ask(&mut self, question: &str) -> Result<Option<String>>;
}

/// Reads answers from stdin, writing questions to stdout.
#[derive(Debug, Default)]
pub struct ConsoleInput;

impl Input for ConsoleInput {
    fn ask(&mut self, question: &str) -> Result<Option<String>> {
        let mut stdout = io::stdout().lock();
        write!(stdout, "{question}")?;
        stdout.flush()?;

        let mut line = String::new();
        let read = io::stdin().lock().read_line(&mut line)?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

/// Answers from a fixed queue and remembers the questions asked.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    answers: VecDeque<String>,
    questions: Vec<String>,
}

impl ScriptedInput {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            questions: Vec::new(),
        }
    }

    /// Questions asked so far, in order.
    pub fn questions(&self) -> &[String] {
        &self.questions
    }

    /// Answers not yet consumed.
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl Input for ScriptedInput {
    fn ask(&mut self, question: &str) -> Result<Option<String>> {
        self.questions.push(question.to_string());
        Ok(self.answers.pop_front())
    }
}

/// Answer to a collision prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionChoice {
    /// Overwrite this destination.
    Confirmed,
    /// Overwrite this destination and every later one without asking.
    ConfirmedAll,
    /// Leave this entry alone.
    Skipped,
}

impl CollisionChoice {
    fn parse(answer: &str) -> Option<Self> {
        match normalize(answer).as_str() {
            "y" => Some(Self::Confirmed),
            "a" => Some(Self::ConfirmedAll),
            "n" => Some(Self::Skipped),
            _ => None,
        }
    }
}

fn normalize(answer: &str) -> String {
    answer.trim().to_lowercase()
}

/// Asks once whether to rename `count` entries.
///
/// Only an answer of `y` (case-insensitive, surrounding whitespace ignored)
/// confirms. End of input declines.
pub fn confirm_batch(input: &mut dyn Input, count: usize) -> Result<bool> {
    let question = format!(
        "{} {} ",
        format!("Proceed to rename {count} files?").bold(),
        "(y/n):".dimmed()
    );

    let confirmed = match input.ask(&question)? {
        Some(answer) => normalize(&answer) == "y",
        None => false,
    };

    if !confirmed {
        log::info!("Rename cancelled by user");
    }

    Ok(confirmed)
}

/// Asks what to do about an existing destination until a valid answer arrives.
///
/// End of input is treated as [`CollisionChoice::Skipped`].
pub fn resolve_collision(input: &mut dyn Input, destination: &Path) -> Result<CollisionChoice> {
    let question = format!(
        "The file '{}' already exists. Do you want to replace it? {} ",
        destination.display().to_string().yellow(),
        "(Yes/No/All):".dimmed()
    );

    loop {
        let Some(answer) = input.ask(&question)? else {
            log::debug!("End of input at collision prompt, skipping");
            return Ok(CollisionChoice::Skipped);
        };

        match CollisionChoice::parse(&answer) {
            Some(choice) => return Ok(choice),
            None => println!("{}", "Answer not valid".red()),
        }
    }
}

/// Waits for the user to press enter before the program closes.
pub fn pause(input: &mut dyn Input) -> Result<()> {
    input.ask("Press enter to close the program...")?;
    Ok(())
}
