use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph, Wrap};

use super::centered;
use crate::ui::UiConfig;
use crate::ui::style::Theme;

pub fn render_invalid(frame: &mut Frame, area: Rect, ui: &UiConfig, theme: &Theme) {
	let area = centered(area, 60, 12);

	let block = Block::bordered()
		.border_style(theme.border_style())
		.padding(Padding::horizontal(2));

	let lines = vec![
		Line::from(Span::styled("⚠", theme.error_style())),
		Line::default(),
		Line::from(Span::styled(
			ui.invalid_title.as_str(),
			theme.title_style(),
		)),
		Line::default(),
		Line::from(Span::styled(ui.invalid_body.as_str(), theme.muted_style())),
		Line::default(),
		Line::from(vec![
			Span::styled("[Enter] ", theme.prompt_style()),
			Span::styled(
				ui.invalid_action.as_str(),
				theme.accent_style().add_modifier(Modifier::BOLD),
			),
		]),
	];

	let paragraph = Paragraph::new(lines)
		.block(block)
		.alignment(Alignment::Center)
		.wrap(Wrap { trim: true });
	frame.render_widget(paragraph, area);
}
