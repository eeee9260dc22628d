use ratatui::style::{Color, Modifier, Style};

use super::super::types::{Theme, ThemeDefinition};

pub const NAME: &str = "solarized";

pub const SOLARIZED: Theme = Theme {
	title: Style::new()
		.fg(Color::Rgb(253, 246, 227))
		.add_modifier(Modifier::BOLD),
	prompt: Style::new().fg(Color::Rgb(38, 139, 210)),
	muted: Style::new().fg(Color::Rgb(88, 110, 117)),
	highlight: Style::new()
		.bg(Color::Rgb(0, 43, 54))
		.fg(Color::Rgb(181, 137, 0))
		.add_modifier(Modifier::BOLD),
	accent: Style::new().fg(Color::Rgb(108, 113, 196)),
	error: Style::new().fg(Color::Rgb(220, 50, 47)),
	border: Style::new().fg(Color::Rgb(7, 54, 66)),
};

pub const DEFINITION: ThemeDefinition = ThemeDefinition::new(NAME, SOLARIZED);
