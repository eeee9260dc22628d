mod builtins;
mod registry;
mod types;

pub use builtins::{DEFAULT_THEME_NAME, LIGHT, SLATE, SOLARIZED};
pub use registry::{by_name, names};
pub use types::{Theme, ThemeDefinition};

/// Theme used when nothing else is configured.
#[must_use]
pub fn default_theme() -> Theme {
	SLATE
}

impl Default for Theme {
	fn default() -> Self {
		default_theme()
	}
}
