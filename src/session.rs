/// Which commands a session currently accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, strum_macros::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Phase {
    #[default]
    Idle,
    Playing,
    Finished,
}

/// Mutable state of one game session, owned by [`crate::game::Game`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameSession {
    pub phase: Phase,
    pub time_remaining: u32,
    pub target_word: String,
    pub typed: String,
    pub correct: u32,
    pub mistakes: u32,
    pub words_per_minute: u32,
    /// Bumped on every start so a restarted session is never confused with
    /// the one before it
    pub number: u64,
}

impl GameSession {
    /// Attempted words: completions plus mistakes
    pub fn attempts(&self) -> u32 {
        self.correct + self.mistakes
    }
}
