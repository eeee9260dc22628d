use ratatui::Frame;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Block;
use tui_textarea::{CursorMove, TextArea};

use crate::ui::style::Theme;

/// Single-line query editor.
pub struct SearchInput<'a> {
	textarea: TextArea<'a>,
	placeholder: String,
}

impl<'a> SearchInput<'a> {
	pub fn new(initial: impl Into<String>) -> Self {
		let mut input = Self {
			textarea: TextArea::default(),
			placeholder: String::new(),
		};
		input.set_text(initial);
		input
	}

	pub fn text(&self) -> &str {
		self.textarea
			.lines()
			.first()
			.map(String::as_str)
			.unwrap_or("")
	}

	pub fn set_text(&mut self, text: impl Into<String>) {
		let text: String = text.into();
		let single_line = text.replace(['\r', '\n'], " ");
		self.textarea = TextArea::new(vec![single_line]);
		self.textarea.move_cursor(CursorMove::End);
		self.textarea.set_cursor_line_style(Style::default());
		self.textarea.set_placeholder_text(self.placeholder.clone());
	}

	pub fn clear(&mut self) {
		self.set_text(String::new());
	}

	pub fn set_placeholder(&mut self, placeholder: impl Into<String>) {
		self.placeholder = placeholder.into();
		self.textarea.set_placeholder_text(self.placeholder.clone());
	}

	/// Feed a key to the editor. Returns `true` if the text changed.
	///
	/// Keys that would start a new line are ignored.
	pub fn input(&mut self, key: KeyEvent) -> bool {
		let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
		let newline = matches!(key.code, KeyCode::Enter)
			|| (ctrl && matches!(key.code, KeyCode::Char('m') | KeyCode::Char('j')));
		if newline {
			return false;
		}
		self.textarea.input(key)
	}

	pub fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
		let block = Block::bordered()
			.border_style(theme.border_style())
			.title(" Search ")
			.title_style(theme.prompt_style());
		self.textarea.set_block(block);
		self.textarea.set_placeholder_style(theme.muted_style());
		self.textarea.set_style(Style::default());
		frame.render_widget(&self.textarea, area);
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn key(code: KeyCode) -> KeyEvent {
		KeyEvent::new(code, KeyModifiers::NONE)
	}

	#[test]
	fn typing_edits_a_single_line() {
		let mut input = SearchInput::new("");
		for ch in "delhi".chars() {
			assert!(input.input(key(KeyCode::Char(ch))));
		}
		assert!(!input.input(key(KeyCode::Enter)));
		assert!(input.input(key(KeyCode::Backspace)));
		assert_eq!(input.text(), "delh");
	}

	#[test]
	fn initial_text_drops_line_breaks() {
		let input = SearchInput::new("climate\nchange");
		assert_eq!(input.text(), "climate change");
	}

	#[test]
	fn clear_keeps_the_placeholder() {
		let mut input = SearchInput::new("query");
		input.set_placeholder("Ask me anything...");
		input.clear();
		assert_eq!(input.text(), "");
		assert_eq!(input.placeholder, "Ask me anything...");
	}
}
