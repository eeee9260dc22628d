use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::widgets::{Block, Clear};
use tui_logger::{TuiLoggerLevelOutput, TuiLoggerWidget};

use crate::ui::style::Theme;

/// Runtime log drawer, toggled with Ctrl+L.
pub fn render_logs(frame: &mut Frame, area: Rect, theme: &Theme) {
	if area.width == 0 || area.height == 0 {
		return;
	}

	let block = Block::bordered()
		.title(" Runtime log ")
		.border_style(theme.border_style())
		.title_style(theme.muted_style());
	let widget = TuiLoggerWidget::default()
		.block(block)
		.output_level(Some(TuiLoggerLevelOutput::Abbreviated))
		.style(theme.muted_style());

	frame.render_widget(Clear, area);
	frame.render_widget(widget, area);
}
