use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use throbber_widgets_tui::{Throbber, ThrobberState};

use super::centered;
use crate::ui::UiConfig;
use crate::ui::style::Theme;

/// Spinner and captions shown while a synthesis is pending. `phase` drives
/// the trailing dots.
pub fn render_loading(
	frame: &mut Frame,
	area: Rect,
	throbber_state: &ThrobberState,
	phase: usize,
	ui: &UiConfig,
	theme: &Theme,
) {
	let area = centered(area, 48, 3);

	let spinner = Throbber::default()
		.style(theme.accent_style())
		.throbber_style(theme.accent_style());
	let headline = Line::from(vec![
		spinner.to_symbol_span(throbber_state),
		Span::styled(ui.loading_title.as_str(), theme.title_style()),
	]);

	let dots = ".".repeat(phase % 4);
	let detail = Line::from(Span::styled(
		format!("{}{dots:<3}", ui.loading_detail),
		theme.muted_style(),
	));

	let paragraph =
		Paragraph::new(vec![headline, Line::default(), detail]).alignment(Alignment::Center);
	frame.render_widget(paragraph, area);
}
