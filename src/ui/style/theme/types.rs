use ratatui::style::Style;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
	pub title: Style,
	pub prompt: Style,
	pub muted: Style,
	pub highlight: Style,
	pub accent: Style,
	pub error: Style,
	pub border: Style,
}

impl Theme {
	#[must_use]
	pub fn title_style(&self) -> Style {
		self.title
	}

	#[must_use]
	pub fn prompt_style(&self) -> Style {
		self.prompt
	}

	#[must_use]
	pub fn muted_style(&self) -> Style {
		self.muted
	}

	#[must_use]
	pub fn highlight_style(&self) -> Style {
		self.highlight
	}

	#[must_use]
	pub fn accent_style(&self) -> Style {
		self.accent
	}

	#[must_use]
	pub fn error_style(&self) -> Style {
		self.error
	}

	#[must_use]
	pub fn border_style(&self) -> Style {
		self.border
	}
}

/// Definition for a built-in theme bundled with the application.
#[derive(Debug, Clone, Copy)]
pub struct ThemeDefinition {
	pub name: &'static str,
	pub theme: Theme,
	pub aliases: &'static [&'static str],
}

impl ThemeDefinition {
	pub const fn new(name: &'static str, theme: Theme) -> Self {
		Self {
			name,
			theme,
			aliases: &[],
		}
	}

	pub const fn with_aliases(mut self, aliases: &'static [&'static str]) -> Self {
		self.aliases = aliases;
		self
	}
}
