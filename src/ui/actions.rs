use anyhow::Result;
use log::{info, warn};
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::links;
use super::state::{App, SessionOutcome};
use crate::agent::View;

impl<'a> App<'a> {
	pub(crate) fn handle_key(&mut self, key: KeyEvent) -> Result<Option<SessionOutcome>> {
		if key.modifiers.contains(KeyModifiers::CONTROL) {
			match key.code {
				KeyCode::Char('c') => return Ok(Some(self.outcome())),
				KeyCode::Char('l') => {
					self.show_logs = !self.show_logs;
					return Ok(None);
				}
				KeyCode::Char('o') => {
					self.open_selected();
					return Ok(None);
				}
				_ => {}
			}
		}

		match self.view() {
			View::Hero => match key.code {
				KeyCode::Esc => return Ok(Some(self.outcome())),
				KeyCode::Enter => self.submit_input(),
				_ => {
					self.search_input.input(key);
				}
			},
			View::Loading => {
				if key.code == KeyCode::Esc {
					self.go_back();
				}
			}
			View::Results => match key.code {
				KeyCode::Esc => self.go_back(),
				KeyCode::Enter => self.submit_input(),
				KeyCode::Up => self.move_selection_up(),
				KeyCode::Down => self.move_selection_down(),
				_ => {
					self.search_input.input(key);
				}
			},
			View::Invalid => {
				if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
					self.go_back();
				}
			}
		}
		Ok(None)
	}

	fn open_selected(&self) {
		let Some(result) = self.selected_result() else {
			return;
		};
		match links::open_url(&result.url) {
			Ok(()) => info!("opened {}", result.url),
			Err(err) => warn!("{err}"),
		}
	}

	fn move_selection_up(&mut self) {
		if let Some(selected) = self.results_state.selected()
			&& selected > 0
		{
			self.results_state.select(Some(selected - 1));
		}
	}

	fn move_selection_down(&mut self) {
		if let Some(selected) = self.results_state.selected() {
			let len = self.controller.state().current_results.len();
			if selected + 1 < len {
				self.results_state.select(Some(selected + 1));
			}
		}
	}
}
