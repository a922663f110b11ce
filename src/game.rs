use std::fmt;

use crate::session::{GameSession, Phase};
use crate::util::{percent, per_minute};
use crate::words::{pick_word, RandomPicker, WordPicker};

/// Default session length in seconds
pub const DEFAULT_DURATION_SECS: u32 = 30;

/// Result of feeding one tick to the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not playing, nothing changed
    Ignored,
    Running { remaining: u32 },
    Finished { words_per_minute: u32 },
}

/// Result of submitting the typed text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Not playing, nothing changed
    Ignored,
    /// Stored, not yet long enough to judge
    Pending,
    /// Matched the target; a new target was drawn
    Completed,
    /// Full length but wrong; the target stays
    Mistake,
}

/// The game controller: owns the session and every transition on it.
///
/// It performs no scheduling. Something outside calls [`Game::tick`] once per
/// elapsed second while [`Phase::Playing`].
pub struct Game {
    session: GameSession,
    duration: u32,
    picker: Box<dyn WordPicker>,
}

impl fmt::Debug for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Game")
            .field("session", &self.session)
            .field("duration", &self.duration)
            .finish_non_exhaustive()
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(DEFAULT_DURATION_SECS, Box::new(RandomPicker::from_entropy()))
    }
}

impl Game {
    pub fn new(duration: u32, picker: Box<dyn WordPicker>) -> Self {
        Self {
            session: GameSession {
                time_remaining: duration,
                ..GameSession::default()
            },
            duration,
            picker,
        }
    }

    /// Begin a fresh session. Accepted from any phase.
    pub fn start(&mut self) {
        let number = self.session.number + 1;
        self.session = GameSession {
            phase: Phase::Playing,
            time_remaining: self.duration,
            target_word: pick_word(self.picker.as_mut()).to_string(),
            number,
            ..GameSession::default()
        };
        tracing::info!(
            session = number,
            duration = self.duration,
            word = %self.session.target_word,
            "session started"
        );
    }

    /// Back to the title screen
    pub fn reset(&mut self) {
        self.session = GameSession {
            time_remaining: self.duration,
            number: self.session.number,
            ..GameSession::default()
        };
        tracing::debug!("session reset to idle");
    }

    pub fn tick(&mut self) -> TickOutcome {
        if self.session.phase != Phase::Playing {
            return TickOutcome::Ignored;
        }

        self.session.time_remaining = self.session.time_remaining.saturating_sub(1);
        if self.session.time_remaining > 0 {
            return TickOutcome::Running {
                remaining: self.session.time_remaining,
            };
        }

        self.session.phase = Phase::Finished;
        self.session.words_per_minute = per_minute(self.session.correct, self.duration);
        tracing::info!(
            session = self.session.number,
            correct = self.session.correct,
            mistakes = self.session.mistakes,
            wpm = self.session.words_per_minute,
            "session finished"
        );
        TickOutcome::Finished {
            words_per_minute: self.session.words_per_minute,
        }
    }

    pub fn submit_input(&mut self, text: &str) -> SubmitOutcome {
        if self.session.phase != Phase::Playing {
            return SubmitOutcome::Ignored;
        }

        self.session.typed = text.to_string();

        if self.session.typed == self.session.target_word {
            self.session.correct += 1;
            self.session.typed.clear();
            self.session.target_word = pick_word(self.picker.as_mut()).to_string();
            tracing::debug!(
                correct = self.session.correct,
                next = %self.session.target_word,
                "word completed"
            );
            SubmitOutcome::Completed
        } else if self.session.typed.chars().count() == self.session.target_word.chars().count()
        {
            self.session.mistakes += 1;
            self.session.typed.clear();
            tracing::debug!(mistakes = self.session.mistakes, "word missed");
            SubmitOutcome::Mistake
        } else {
            SubmitOutcome::Pending
        }
    }

    pub fn phase(&self) -> Phase {
        self.session.phase
    }

    pub fn time_remaining(&self) -> u32 {
        self.session.time_remaining
    }

    pub fn duration(&self) -> u32 {
        self.duration
    }

    pub fn target_word(&self) -> &str {
        &self.session.target_word
    }

    pub fn typed_input(&self) -> &str {
        &self.session.typed
    }

    pub fn correct_count(&self) -> u32 {
        self.session.correct
    }

    pub fn mistake_count(&self) -> u32 {
        self.session.mistakes
    }

    /// Computed when the session finishes; 0 before that
    pub fn words_per_minute(&self) -> u32 {
        self.session.words_per_minute
    }

    /// Share of attempted words that were correct, only once finished
    pub fn accuracy(&self) -> Option<u32> {
        match self.session.phase {
            Phase::Finished => Some(percent(self.session.correct, self.session.attempts())),
            _ => None,
        }
    }

    pub fn session_number(&self) -> u64 {
        self.session.number
    }

    /// Time remaining as a fraction of the duration, for the progress bar
    pub fn progress_ratio(&self) -> f64 {
        if self.duration == 0 {
            return 0.0;
        }
        (self.session.time_remaining as f64 / self.duration as f64).clamp(0.0, 1.0)
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }
}
