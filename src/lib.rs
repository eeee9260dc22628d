//! Core crate exports for the `qagent` terminal query agent.
//!
//! The [`agent`] module holds the view-state controller and its pluggable
//! validator and synthesizer; [`ui`] renders it in the terminal.

pub mod agent;
pub mod app_dirs;
pub mod logging;
pub mod ui;

pub use agent::{
	ControllerState, HeuristicValidator, MockSynthesizer, QueryController,
	QueryControllerBuilder, QueryHistoryEntry, SearchResult, SubmitOutcome, Synthesis,
	Synthesizer, Transition, Validator, View,
};
pub use ui::style::{Theme, default_theme};
pub use ui::{App, SessionOutcome, UiConfig, run};
