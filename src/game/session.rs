//! Ladder session state machine
//!
//! A session owns one puzzle and up to [`MAX_ROWS`] attempt rows. Rows before
//! `current_row` are fixed, `current_row` is editable while playing, and later
//! rows are blank. The only mutations are editing the current row, submitting
//! it, staging a hint, and clearing the ladder.

use crate::core::{Dictionary, Word, letter_diff};
use crate::ladder::{GeneratorConfig, PathFinder, Puzzle, PuzzleGenerator};
use log::{debug, warn};
use rand::Rng;
use std::cell::OnceCell;
use std::time::{Duration, Instant};
use thiserror::Error;

/// Number of attempt rows in a session
pub const MAX_ROWS: usize = 5;

/// How long a rejected move stays visible
pub const ERROR_DISPLAY_DURATION: Duration = Duration::from_secs(2);

/// Session lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Playing,
    Won,
    Lost,
}

/// Why a move or hint was rejected
///
/// All variants are recoverable; the session is left as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LadderError {
    #[error("Not enough letters")]
    IncompleteWord,
    #[error("Not in word list")]
    NotInDictionary,
    #[error("Enter a new word")]
    NoChange,
    #[error("Change exactly one letter")]
    TooManyChanges,
    #[error("No connection found!")]
    NoConnectionFound,
    #[error("The game is over, start a new puzzle")]
    GameOver,
}

/// A rejected move, shown until it expires
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorSignal {
    pub error: LadderError,
    pub raised_at: Instant,
}

impl ErrorSignal {
    #[must_use]
    pub const fn new(error: LadderError, raised_at: Instant) -> Self {
        Self { error, raised_at }
    }

    /// Whether the signal is still inside its display window at `now`
    #[must_use]
    pub fn is_active_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.raised_at) < ERROR_DISPLAY_DURATION
    }
}

/// Result of an accepted submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Row fixed; play continues on `next_row`
    Advanced { next_row: usize },
    Won,
    Lost,
}

/// Mutable game state for one puzzle
#[derive(Debug)]
pub struct LadderSession<'a> {
    dictionary: &'a Dictionary,
    puzzle: Puzzle,
    rows: [String; MAX_ROWS],
    current_row: usize,
    status: Status,
    started_at: Instant,
    finished_at: Option<Instant>,
    error: Option<ErrorSignal>,
    optimal_steps: OnceCell<usize>,
}

impl<'a> LadderSession<'a> {
    /// Start a session on an existing puzzle
    #[must_use]
    pub fn new(dictionary: &'a Dictionary, puzzle: Puzzle) -> Self {
        debug!("New session {puzzle}");

        Self {
            dictionary,
            puzzle,
            rows: Default::default(),
            current_row: 0,
            status: Status::Playing,
            started_at: Instant::now(),
            finished_at: None,
            error: None,
            optimal_steps: OnceCell::new(),
        }
    }

    /// Generate a fresh puzzle and start a session on it
    pub fn generate<R: Rng + ?Sized>(
        dictionary: &'a Dictionary,
        rng: &mut R,
        config: &GeneratorConfig,
    ) -> Self {
        let puzzle = PuzzleGenerator::new(dictionary).generate_with(rng, config);
        Self::new(dictionary, puzzle)
    }

    /// Replace the current row's content
    ///
    /// Ignored once the game is over. Clears any visible error.
    pub fn set_row_content(&mut self, text: &str) {
        if self.status != Status::Playing {
            return;
        }

        self.error = None;
        self.rows[self.current_row] = text.to_ascii_lowercase();
    }

    /// Append a letter to the current row, up to the word length
    pub fn push_letter(&mut self, letter: char) {
        let current = self.current_text();
        if !letter.is_ascii_alphabetic() || current.len() >= self.dictionary.word_length() {
            return;
        }

        let mut text = current.to_string();
        text.push(letter);
        self.set_row_content(&text);
    }

    /// Remove the last letter of the current row
    pub fn pop_letter(&mut self) {
        let mut text = self.current_text().to_string();
        if text.pop().is_some() {
            self.set_row_content(&text);
        }
    }

    /// Validate and submit the current row
    ///
    /// Checks run in order and the first failure wins: length, dictionary
    /// membership, then exactly one change from the previous word. A valid
    /// word equal to the target wins on any row; a valid non-target word on
    /// the last row loses.
    ///
    /// # Errors
    ///
    /// Returns the rejection reason and raises it as the session's error
    /// signal. Rows are left untouched. `GameOver` is returned without a
    /// signal when the session has already finished.
    pub fn submit_row(&mut self) -> Result<Outcome, LadderError> {
        if self.status != Status::Playing {
            return Err(LadderError::GameOver);
        }

        let word = self.current_text();

        if word.chars().count() != self.dictionary.word_length() {
            return Err(self.raise(LadderError::IncompleteWord));
        }

        if !self.dictionary.contains(word) {
            return Err(self.raise(LadderError::NotInDictionary));
        }

        match letter_diff(self.previous_word(), word) {
            0 => return Err(self.raise(LadderError::NoChange)),
            1 => {}
            _ => return Err(self.raise(LadderError::TooManyChanges)),
        }

        let reached_target = word == self.puzzle.target.text();
        self.error = None;

        if reached_target {
            self.finish(Status::Won);
            return Ok(Outcome::Won);
        }

        if self.current_row == MAX_ROWS - 1 {
            self.finish(Status::Lost);
            return Ok(Outcome::Lost);
        }

        self.current_row += 1;
        Ok(Outcome::Advanced {
            next_row: self.current_row,
        })
    }

    /// Stage the next word of a shortest ladder in the current row
    ///
    /// The word is not submitted.
    ///
    /// # Errors
    ///
    /// `GameOver` once the session has finished, or `NoConnectionFound` when
    /// the target cannot be reached from the previous word. The latter means
    /// the dictionary and puzzle disagree and is logged as such.
    pub fn hint(&mut self) -> Result<Word, LadderError> {
        if self.status != Status::Playing {
            return Err(LadderError::GameOver);
        }

        let next = Word::new(self.previous_word()).ok().and_then(|previous| {
            PathFinder::new(self.dictionary)
                .find_shortest_path(&previous, &self.puzzle.target)
                .and_then(|path| path.next_step().cloned())
        });

        if let Some(word) = next {
            self.set_row_content(word.text());
            Ok(word)
        } else {
            warn!(
                "No ladder from '{}' to '{}': puzzle and dictionary are inconsistent",
                self.previous_word(),
                self.puzzle.target
            );
            Err(self.raise(LadderError::NoConnectionFound))
        }
    }

    /// Reset the ladder on the same puzzle
    ///
    /// The solve clock keeps running from the original start.
    pub fn clear(&mut self) {
        self.rows = Default::default();
        self.current_row = 0;
        self.status = Status::Playing;
        self.error = None;
        self.finished_at = None;
    }

    /// Steps on a shortest ladder from start to target
    ///
    /// Falls back to [`MAX_ROWS`] if the target is unreachable.
    pub fn optimal_steps(&self) -> usize {
        *self.optimal_steps.get_or_init(|| {
            PathFinder::new(self.dictionary)
                .distance(&self.puzzle.start, &self.puzzle.target)
                .unwrap_or(MAX_ROWS)
        })
    }

    #[must_use]
    pub const fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    #[must_use]
    pub const fn dictionary(&self) -> &'a Dictionary {
        self.dictionary
    }

    #[must_use]
    pub const fn rows(&self) -> &[String; MAX_ROWS] {
        &self.rows
    }

    #[must_use]
    pub const fn current_row(&self) -> usize {
        self.current_row
    }

    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    /// Content of the editable row
    #[must_use]
    pub fn current_text(&self) -> &str {
        &self.rows[self.current_row]
    }

    /// The word the current row must differ from by one letter
    #[must_use]
    pub fn previous_word(&self) -> &str {
        if self.current_row == 0 {
            self.puzzle.start.text()
        } else {
            &self.rows[self.current_row - 1]
        }
    }

    /// The visible error, if one was raised less than
    /// [`ERROR_DISPLAY_DURATION`] ago
    #[must_use]
    pub fn error(&self) -> Option<LadderError> {
        self.error_at(Instant::now())
    }

    /// The visible error as of `now`
    #[must_use]
    pub fn error_at(&self, now: Instant) -> Option<LadderError> {
        self.error
            .filter(|signal| signal.is_active_at(now))
            .map(|signal| signal.error)
    }

    /// Time from start to finish; zero while still playing
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.finished_at
            .map(|end| end.saturating_duration_since(self.started_at))
            .unwrap_or_default()
    }

    #[must_use]
    pub const fn started_at(&self) -> Instant {
        self.started_at
    }

    #[must_use]
    pub const fn finished_at(&self) -> Option<Instant> {
        self.finished_at
    }

    /// Rows submitted so far, the finishing row included
    #[must_use]
    pub fn moves(&self) -> usize {
        self.current_row + usize::from(self.status != Status::Playing)
    }

    /// Attempts left; none once lost
    #[must_use]
    pub fn hearts(&self) -> usize {
        match self.status {
            Status::Lost => 0,
            _ => MAX_ROWS - self.current_row,
        }
    }

    /// Whether a row has been submitted and accepted
    #[must_use]
    pub fn is_fixed(&self, row: usize) -> bool {
        row < self.current_row || (self.status != Status::Playing && row == self.current_row)
    }

    /// Whether a fixed row has the target's letter at `position`
    #[must_use]
    pub fn matches_target(&self, row: usize, position: usize) -> bool {
        self.is_fixed(row)
            && self.rows[row].as_bytes().get(position).copied()
                == self.puzzle.target.char_at(position)
    }

    fn raise(&mut self, error: LadderError) -> LadderError {
        debug!("Rejected row {}: {error}", self.current_row);
        self.error = Some(ErrorSignal::new(error, Instant::now()));
        error
    }

    fn finish(&mut self, status: Status) {
        debug!("Session {} after {} moves", self.puzzle, self.current_row + 1);
        self.status = status;
        self.finished_at = Some(Instant::now());
    }
}
