//! Interactive terminal UI for the query agent.
//!
//! [`App`] wraps a [`QueryController`](crate::agent::QueryController) and
//! projects its state onto one of four screens. The remaining submodules
//! implement the event loop, key handling, rendering, and the widgets and
//! styles those screens are built from.

mod actions;
pub mod components;
mod config;
mod hints;
mod links;
mod render;
mod runtime;
mod state;
pub mod style;


pub use config::UiConfig;
pub use hints::{DEFAULT_HINT_INTERVAL, PromptRotation, SAMPLE_PROMPTS};
pub use links::open_url;
pub use runtime::run;
pub use state::{App, SessionOutcome};
