use ratatui::style::{Color, Modifier, Style};

use super::super::types::{Theme, ThemeDefinition};

pub const NAME: &str = "slate";

pub const SLATE: Theme = Theme {
	title: Style::new()
		.fg(Color::Rgb(226, 232, 240))
		.add_modifier(Modifier::BOLD),
	prompt: Style::new().fg(Color::LightCyan),
	muted: Style::new().fg(Color::DarkGray),
	highlight: Style::new()
		.bg(Color::Rgb(30, 41, 59))
		.fg(Color::Rgb(250, 204, 21)),
	accent: Style::new().fg(Color::Rgb(167, 139, 250)),
	error: Style::new().fg(Color::Rgb(248, 113, 113)),
	border: Style::new().fg(Color::Rgb(71, 85, 105)),
};

pub const DEFINITION: ThemeDefinition = ThemeDefinition::new(NAME, SLATE).with_aliases(&["dark"]);
