use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, List, ListItem, ListState, Paragraph, Wrap};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::SearchInput;
use crate::agent::SearchResult;
use crate::ui::UiConfig;
use crate::ui::style::Theme;

/// Argument bundle for the results screen.
pub struct ResultsContext<'a, 'i> {
	pub input: &'a mut SearchInput<'i>,
	pub list_state: &'a mut ListState,
	pub query: &'a str,
	pub results: &'a [SearchResult],
	pub summary: &'a str,
	pub ui: &'a UiConfig,
	pub theme: &'a Theme,
}

/// Follow-up input, heading, selectable sources and the summary panel.
pub fn render_results(frame: &mut Frame, area: Rect, context: ResultsContext<'_, '_>) {
	let ResultsContext {
		input,
		list_state,
		query,
		results,
		summary,
		ui,
		theme,
	} = context;

	let list_height = sources_height(results.len());
	let rows = Layout::default()
		.direction(Direction::Vertical)
		.constraints([
			Constraint::Length(3),
			Constraint::Length(1),
			Constraint::Length(1),
			Constraint::Length(1),
			Constraint::Length(list_height),
			Constraint::Min(3),
		])
		.split(area);

	input.render(frame, rows[0], theme);

	let heading = Line::from(vec![
		Span::styled("Results for: ", theme.title_style()),
		Span::styled(format!("\"{query}\""), theme.prompt_style()),
	]);
	frame.render_widget(Paragraph::new(heading), rows[1]);

	let count = Line::from(vec![
		Span::styled("🌐 ", theme.muted_style()),
		Span::styled(
			format!("Found {} sources", results.len()),
			theme.muted_style(),
		),
	]);
	frame.render_widget(Paragraph::new(count), rows[2]);

	render_sources(frame, rows[4], list_state, results, ui, theme);
	render_summary(frame, rows[5], summary, ui, theme);
}

fn render_sources(
	frame: &mut Frame,
	area: Rect,
	list_state: &mut ListState,
	results: &[SearchResult],
	ui: &UiConfig,
	theme: &Theme,
) {
	// Borders plus the highlight symbol.
	let width = usize::from(area.width.saturating_sub(4));
	let items: Vec<ListItem> = results
		.iter()
		.map(|result| {
			ListItem::new(vec![
				Line::from(truncate_to_width(&result.title, width)),
				Line::from(Span::styled(
					truncate_to_width(&result.url, width),
					theme.muted_style(),
				)),
			])
		})
		.collect();

	let block = Block::bordered()
		.title(format!(" {} ", ui.sources_title))
		.title_bottom(Line::from(" Ctrl+O open ").right_aligned())
		.border_style(theme.border_style())
		.title_style(theme.title_style());
	let list = List::new(items)
		.block(block)
		.highlight_style(theme.highlight_style())
		.highlight_symbol("› ");
	frame.render_stateful_widget(list, area, list_state);
}

/// Two rows per source plus the borders, saturating for huge lists.
fn sources_height(count: usize) -> u16 {
	u16::try_from(count)
		.unwrap_or(u16::MAX)
		.saturating_mul(2)
		.saturating_add(2)
}

/// Cut `text` to at most `width` display columns, ending in an ellipsis when
/// anything was dropped.
fn truncate_to_width(text: &str, width: usize) -> String {
	if text.width() <= width {
		return text.to_string();
	}
	if width == 0 {
		return String::new();
	}

	let mut out = String::new();
	let mut used = 0;
	for ch in text.chars() {
		let ch_width = ch.width().unwrap_or(0);
		if used + ch_width + 1 > width {
			break;
		}
		used += ch_width;
		out.push(ch);
	}
	out.push('…');
	out
}

fn render_summary(frame: &mut Frame, area: Rect, summary: &str, ui: &UiConfig, theme: &Theme) {
	let title = Line::from(vec![
		Span::styled(" ✦ ", theme.accent_style()),
		Span::styled(
			format!("{} ", ui.summary_title),
			theme.title_style().add_modifier(Modifier::BOLD),
		),
	]);
	let block = Block::bordered()
		.title(title)
		.border_style(theme.border_style());
	let paragraph = Paragraph::new(summary)
		.block(block)
		.wrap(Wrap { trim: true });
	frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn sources_height_saturates_instead_of_wrapping() {
		assert_eq!(sources_height(5), 12);
		assert_eq!(sources_height(70_000), u16::MAX);
		assert_eq!(sources_height(usize::from(u16::MAX) + 1), u16::MAX);
	}

	#[test]
	fn short_text_is_left_alone() {
		assert_eq!(truncate_to_width("Rust", 10), "Rust");
	}

	#[test]
	fn long_text_ends_with_ellipsis_within_width() {
		let cut = truncate_to_width("https://example.com/rust-ownership", 12);
		assert_eq!(cut, "https://exa…");
		assert_eq!(cut.width(), 12);
	}

	#[test]
	fn wide_characters_count_double() {
		let cut = truncate_to_width("日本語のテキスト", 7);
		assert_eq!(cut, "日本語…");
		assert!(cut.width() <= 7);
	}
}
