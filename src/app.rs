use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::config::Config;
use crate::game::{Game, TickOutcome};
use crate::session::Phase;
use crate::typing_policy::{pop_char, push_char};
use crate::words::{RandomPicker, WordPicker};

/// What the event loop should do after a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

/// Application shell: routes terminal input to the game controller
#[derive(Debug)]
pub struct App {
    pub game: Game,
}

impl App {
    pub fn new(game: Game) -> Self {
        Self { game }
    }

    /// Build a game from the resolved settings
    pub fn from_config(config: &Config) -> Self {
        let picker: Box<dyn WordPicker> = match config.seed {
            Some(seed) => Box::new(RandomPicker::seeded(seed)),
            None => Box::new(RandomPicker::from_entropy()),
        };
        Self::new(Game::new(config.duration_secs, picker))
    }

    /// The session entitled to ticks, if any
    pub fn tick_lease(&self) -> Option<u64> {
        match self.game.phase() {
            Phase::Playing => Some(self.game.session_number()),
            _ => None,
        }
    }

    pub fn on_tick(&mut self) -> TickOutcome {
        self.game.tick()
    }

    pub fn on_key(&mut self, key: KeyEvent) -> Control {
        let ctrl_c =
            key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c');
        if key.code == KeyCode::Esc || ctrl_c {
            return Control::Quit;
        }

        match self.game.phase() {
            Phase::Idle => {
                if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
                    self.game.start();
                }
            }
            Phase::Playing => match key.code {
                KeyCode::Tab => self.game.start(),
                KeyCode::Backspace => {
                    let text = pop_char(self.game.typed_input());
                    self.game.submit_input(&text);
                }
                KeyCode::Char(c) => {
                    let text = push_char(self.game.typed_input(), c);
                    self.game.submit_input(&text);
                }
                _ => {}
            },
            Phase::Finished => match key.code {
                KeyCode::Enter | KeyCode::Char('r') => self.game.start(),
                KeyCode::Char('b') => self.game.reset(),
                _ => {}
            },
        }

        Control::Continue
    }
}
