// Library surface for the binary, headless/integration tests and reuse.
pub mod app;
pub mod app_dirs;
pub mod config;
pub mod error;
pub mod game;
pub mod logging;
pub mod runtime;
pub mod session;
pub mod typing_policy;
pub mod ui;
pub mod util;
pub mod words;

pub use error::{Result, TyperError};
pub use game::Game;
pub use session::Phase;
