use std::sync::mpsc::Receiver;
use std::time::{Duration, Instant};

use log::debug;
use ratatui::widgets::ListState;
use serde::Serialize;
use throbber_widgets_tui::ThrobberState;

use super::config::UiConfig;
use super::hints::PromptRotation;
use crate::agent::{QueryController, SearchResult, Transition, View};
use crate::ui::components::SearchInput;
pub use crate::ui::style::Theme;

const SPINNER_PERIOD: Duration = Duration::from_millis(100);

/// Where the session stood when the user quit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionOutcome {
	pub view: View,
	pub query: String,
	pub results: Vec<SearchResult>,
}

pub struct App<'a> {
	pub controller: QueryController,
	pub search_input: SearchInput<'a>,
	pub theme: Theme,
	pub(crate) ui: UiConfig,
	pub(crate) results_state: ListState,
	pub(crate) throbber_state: ThrobberState,
	pub(crate) spinner_phase: usize,
	pub(crate) last_spin: Instant,
	pub(crate) hints: PromptRotation,
	pub(crate) show_logs: bool,
	pub(crate) initial_query: Option<String>,
	transitions: Receiver<Transition>,
}

impl<'a> App<'a> {
	pub fn new(mut controller: QueryController) -> Self {
		let transitions = controller.subscribe();
		let ui = UiConfig::default();
		let mut search_input = SearchInput::new("");
		search_input.set_placeholder(ui.input_placeholder.clone());

		Self {
			controller,
			search_input,
			theme: Theme::default(),
			ui,
			results_state: ListState::default(),
			throbber_state: ThrobberState::default(),
			spinner_phase: 0,
			last_spin: Instant::now(),
			hints: PromptRotation::default(),
			show_logs: false,
			initial_query: None,
			transitions,
		}
	}

	#[must_use]
	pub fn with_ui(mut self, ui: UiConfig) -> Self {
		self.ui = ui;
		self.refresh_placeholder();
		self
	}

	pub fn set_theme(&mut self, theme: Theme) {
		self.theme = theme;
	}

	pub fn set_hint_interval(&mut self, interval: Duration) {
		self.hints.set_interval(interval);
	}

	/// Submit `query` as soon as the event loop starts.
	pub fn set_initial_query(&mut self, query: impl Into<String>) {
		let query = query.into();
		let trimmed = query.trim();
		self.initial_query = (!trimmed.is_empty()).then(|| trimmed.to_string());
	}

	pub fn view(&self) -> View {
		self.controller.view()
	}

	pub fn outcome(&self) -> SessionOutcome {
		let state = self.controller.state();
		let results = match state.view {
			View::Results => state.current_results.clone(),
			_ => Vec::new(),
		};
		SessionOutcome {
			view: state.view,
			query: state.current_query.clone(),
			results,
		}
	}

	/// Submit whatever is in the input box, ignoring blank input.
	pub(crate) fn submit_input(&mut self) {
		let query = self.search_input.text().trim().to_string();
		if query.is_empty() {
			return;
		}
		self.search_input.clear();
		self.controller.submit(&query);
		self.sync();
	}

	pub(crate) fn go_back(&mut self) {
		self.controller.go_back();
		self.sync();
	}

	/// Apply finished syntheses and react to view changes.
	pub(crate) fn sync(&mut self) {
		self.controller.pump();
		while let Ok(transition) = self.transitions.try_recv() {
			self.on_transition(transition);
		}
	}

	/// Advance time-based decorations.
	pub(crate) fn tick(&mut self, now: Instant) {
		if now.saturating_duration_since(self.last_spin) >= SPINNER_PERIOD {
			self.last_spin = now;
			self.throbber_state.calc_next();
			self.spinner_phase = self.spinner_phase.wrapping_add(1);
		}
		if self.view() == View::Hero {
			self.hints.tick(now);
		}
	}

	pub(crate) fn submit_initial_query(&mut self) {
		if let Some(query) = self.initial_query.take() {
			self.controller.submit(&query);
			self.sync();
		}
	}

	pub(crate) fn selected_result(&self) -> Option<&SearchResult> {
		let state = self.controller.state();
		if state.view != View::Results {
			return None;
		}
		state.current_results.get(self.results_state.selected()?)
	}

	fn on_transition(&mut self, transition: Transition) {
		debug!("view {} -> {}", transition.from, transition.to);
		match transition.to {
			View::Hero => {
				self.search_input.clear();
				self.hints.reset(Instant::now());
			}
			View::Results => {
				let has_results = !self.controller.state().current_results.is_empty();
				self.results_state.select(has_results.then_some(0));
			}
			View::Loading | View::Invalid => {}
		}
		self.refresh_placeholder();
	}

	fn refresh_placeholder(&mut self) {
		let placeholder = match self.view() {
			View::Results => &self.ui.follow_up_placeholder,
			_ => &self.ui.input_placeholder,
		};
		self.search_input.set_placeholder(placeholder.clone());
	}
}
