use ratatui::{
	Frame,
	layout::{Constraint, Direction, Layout, Margin, Rect},
	text::{Line, Span},
	widgets::Paragraph,
};

use super::App;
use super::components::{
	HeroContext, ResultsContext, render_hero, render_invalid, render_loading, render_logs,
	render_results,
};
use crate::agent::View;

const LOG_DRAWER_HEIGHT: u16 = 10;

impl<'a> App<'a> {
	/// Project the controller state onto exactly one screen fragment.
	pub(crate) fn draw(&mut self, frame: &mut Frame) {
		let area = frame.area().inner(Margin {
			vertical: 0,
			horizontal: 1,
		});

		let mut constraints = vec![Constraint::Min(1), Constraint::Length(1)];
		if self.show_logs {
			constraints.push(Constraint::Length(LOG_DRAWER_HEIGHT));
		}
		let layout = Layout::default()
			.direction(Direction::Vertical)
			.constraints(constraints)
			.split(area);

		self.render_view(frame, layout[0]);
		self.render_key_hints(frame, layout[1]);
		if self.show_logs {
			render_logs(frame, layout[2], &self.theme);
		}
	}

	fn render_view(&mut self, frame: &mut Frame, area: Rect) {
		let state = self.controller.state();
		match state.view {
			View::Hero => render_hero(
				frame,
				area,
				HeroContext {
					input: &mut self.search_input,
					hint: self.hints.current(),
					ui: &self.ui,
					theme: &self.theme,
				},
			),
			View::Loading => render_loading(
				frame,
				area,
				&self.throbber_state,
				self.spinner_phase,
				&self.ui,
				&self.theme,
			),
			View::Invalid => render_invalid(frame, area, &self.ui, &self.theme),
			View::Results => render_results(
				frame,
				area,
				ResultsContext {
					input: &mut self.search_input,
					list_state: &mut self.results_state,
					query: &state.current_query,
					results: &state.current_results,
					summary: &state.current_summary,
					ui: &self.ui,
					theme: &self.theme,
				},
			),
		}
	}

	fn render_key_hints(&self, frame: &mut Frame, area: Rect) {
		let hints: &[(&str, &str)] = match self.view() {
			View::Hero => &[("Enter", "search"), ("Esc", "quit")],
			View::Loading => &[("Esc", "cancel")],
			View::Results => &[
				("Enter", "search"),
				("↑↓", "select"),
				("Ctrl+O", "open"),
				("Esc", "back"),
			],
			View::Invalid => &[("Enter", "try another query")],
		};

		let mut spans = Vec::new();
		for (key, action) in hints.iter().chain(&[("Ctrl+L", "logs"), ("Ctrl+C", "quit")]) {
			spans.push(Span::styled(format!(" {key} "), self.theme.prompt_style()));
			spans.push(Span::styled(format!("{action}  "), self.theme.muted_style()));
		}
		frame.render_widget(Paragraph::new(Line::from(spans)), area);
	}
}
