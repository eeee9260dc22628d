use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use super::{SearchInput, centered};
use crate::ui::UiConfig;
use crate::ui::style::Theme;

const HERO_WIDTH: u16 = 72;
const HERO_HEIGHT: u16 = 11;

/// Argument bundle for the landing screen.
pub struct HeroContext<'a, 'i> {
	pub input: &'a mut SearchInput<'i>,
	pub hint: Option<&'a str>,
	pub ui: &'a UiConfig,
	pub theme: &'a Theme,
}

/// Title, tagline, query input and the rotating sample prompt.
pub fn render_hero(frame: &mut Frame, area: Rect, context: HeroContext<'_, '_>) {
	let HeroContext {
		input,
		hint,
		ui,
		theme,
	} = context;

	let area = centered(area, HERO_WIDTH, HERO_HEIGHT);
	let rows = Layout::default()
		.direction(Direction::Vertical)
		.constraints([
			Constraint::Length(1),
			Constraint::Length(1),
			Constraint::Length(2),
			Constraint::Length(1),
			Constraint::Length(3),
			Constraint::Length(1),
			Constraint::Length(1),
		])
		.split(area);

	let title = Line::from(vec![
		Span::styled("✦ ", theme.accent_style()),
		Span::styled(ui.title.as_str(), theme.title_style()),
	]);
	frame.render_widget(Paragraph::new(title).alignment(Alignment::Center), rows[0]);

	let tagline = Paragraph::new(ui.tagline.as_str())
		.style(theme.muted_style())
		.alignment(Alignment::Center)
		.wrap(Wrap { trim: true });
	frame.render_widget(tagline, rows[2]);

	input.render(frame, rows[4], theme);

	if let Some(hint) = hint {
		let hint = Paragraph::new(format!("Try: \"{hint}\""))
			.style(theme.muted_style())
			.alignment(Alignment::Center);
		frame.render_widget(hint, rows[6]);
	}
}
