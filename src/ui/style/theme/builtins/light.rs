use ratatui::style::{Color, Modifier, Style};

use super::super::types::{Theme, ThemeDefinition};

pub const NAME: &str = "light";

pub const LIGHT: Theme = Theme {
	title: Style::new()
		.fg(Color::Rgb(15, 23, 42))
		.add_modifier(Modifier::BOLD),
	prompt: Style::new().fg(Color::Rgb(0, 102, 153)),
	muted: Style::new().fg(Color::Rgb(100, 100, 100)),
	highlight: Style::new()
		.bg(Color::Rgb(200, 200, 200))
		.fg(Color::Rgb(120, 120, 0)),
	accent: Style::new().fg(Color::Rgb(109, 40, 217)),
	error: Style::new().fg(Color::Rgb(185, 28, 28)),
	border: Style::new().fg(Color::Rgb(148, 163, 184)),
};

pub const DEFINITION: ThemeDefinition = ThemeDefinition::new(NAME, LIGHT).with_aliases(&["day"]);
