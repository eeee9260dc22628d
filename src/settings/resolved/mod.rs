use std::time::Duration;

use log::LevelFilter;

use qagent::{Theme, UiConfig};

mod errors;
mod sources;
mod summary;
mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};

/// Fully merged settings that drive a session.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
	pub delay: Duration,
	pub hint_interval: Duration,
	pub theme_name: String,
	pub theme: Theme,
	pub ui: UiConfig,
	pub initial_query: Option<String>,
	pub log_level: LevelFilter,
}

impl ResolvedConfig {
	pub(super) fn validate(&self, sources: &ConfigSources) -> Result<(), ConfigError> {
		validation::validate(self, sources)
	}

	pub fn print_summary(&self) {
		summary::print_summary(self);
	}
}
