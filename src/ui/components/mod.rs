//! Screen fragments and the widgets they share.

pub mod hero;
pub mod input;
pub mod invalid;
pub mod loading;
pub mod logs;
pub mod results;

pub use hero::{HeroContext, render_hero};
pub use input::SearchInput;
pub use invalid::render_invalid;
pub use loading::render_loading;
pub use logs::render_logs;
pub use results::{ResultsContext, render_results};

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Center a box of at most `width` x `height` inside `area`.
pub(crate) fn centered(area: Rect, width: u16, height: u16) -> Rect {
	let width = width.min(area.width);
	let height = height.min(area.height);

	let vertical = Layout::default()
		.direction(Direction::Vertical)
		.constraints([
			Constraint::Fill(1),
			Constraint::Length(height),
			Constraint::Fill(1),
		])
		.split(area);
	let horizontal = Layout::default()
		.direction(Direction::Horizontal)
		.constraints([
			Constraint::Fill(1),
			Constraint::Length(width),
			Constraint::Fill(1),
		])
		.split(vertical[1]);
	horizontal[1]
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn centered_box_is_clamped_to_the_area() {
		let area = Rect::new(0, 0, 40, 10);
		let inner = centered(area, 20, 4);
		assert_eq!(inner, Rect::new(10, 3, 20, 4));

		let clamped = centered(area, 80, 20);
		assert_eq!(clamped, area);
	}
}
