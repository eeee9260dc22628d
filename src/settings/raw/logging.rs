use log::LevelFilter;
use serde::Deserialize;

use crate::cli::CliArgs;
use qagent::logging::parse_level;

use super::super::resolved::ConfigError;
use super::{SourceFn, invalid};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct LoggingSection {
	pub(super) level: Option<String>,
}

impl LoggingSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(level) = &cli.log_level {
			self.level = Some(level.clone());
		}
	}

	pub(super) fn finalize(self, origin: SourceFn<'_>) -> Result<LevelFilter, ConfigError> {
		let Some(level) = self.level else {
			return Ok(LevelFilter::Info);
		};
		parse_level(&level).ok_or_else(|| {
			invalid(
				"logging.level",
				level,
				origin,
				"expected one of off, error, warn, info, debug, trace",
			)
		})
	}
}
