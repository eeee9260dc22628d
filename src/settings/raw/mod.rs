use std::env;
use std::time::Duration;

use anyhow::{Error, Result};
use serde::Deserialize;

use crate::cli::CliArgs;

use super::resolved::{ConfigError, ConfigSources, ResolvedConfig, SettingSource};

mod agent;
mod logging;
mod ui;

use agent::AgentSection;
use logging::LoggingSection;
use ui::UiSection;

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	agent: AgentSection,
	ui: UiSection,
	logging: LoggingSection,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		self.agent.apply_cli_overrides(cli);
		self.ui.apply_cli_overrides(cli);
		self.logging.apply_cli_overrides(cli);
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating and
	/// filling defaults where required.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let sources = ConfigSources {
			delay: detect_source(
				cli.delay_ms.is_some(),
				self.agent.delay_ms.is_some(),
				"QAGENT__AGENT__DELAY_MS",
				"--delay-ms",
				"agent.delay_ms",
			),
			hint_interval: detect_source(
				cli.hint_interval_ms.is_some(),
				self.agent.hint_interval_ms.is_some(),
				"QAGENT__AGENT__HINT_INTERVAL_MS",
				"--hint-interval-ms",
				"agent.hint_interval_ms",
			),
			theme: detect_source(
				cli.theme.is_some(),
				self.ui.theme.is_some(),
				"QAGENT__UI__THEME",
				"--theme",
				"ui.theme",
			),
			log_level: detect_source(
				cli.log_level.is_some(),
				self.logging.level.is_some(),
				"QAGENT__LOGGING__LEVEL",
				"--log-level",
				"logging.level",
			),
		};

		let agent = self.agent.finalize();
		let ui = self
			.ui
			.finalize(&|| sources.source_for_theme())
			.map_err(Error::new)?;
		let log_level = self
			.logging
			.finalize(&|| sources.source_for_log_level())
			.map_err(Error::new)?;

		let config = ResolvedConfig {
			delay: agent.delay,
			hint_interval: agent.hint_interval,
			theme_name: ui.theme_name,
			theme: ui.theme,
			ui: ui.ui,
			initial_query: ui.initial_query,
			log_level,
		};

		config.validate(&sources).map_err(Error::new)?;

		Ok(config)
	}
}

pub(super) fn millis(value: Option<u64>, default: Duration) -> Duration {
	value.map_or(default, Duration::from_millis)
}

fn detect_source(
	cli_present: bool,
	value_present: bool,
	env_var: &'static str,
	cli_flag: &'static str,
	key: &'static str,
) -> Option<SettingSource> {
	if !value_present {
		return None;
	}

	if cli_present {
		return Some(SettingSource::CliFlag(cli_flag));
	}

	if env::var_os(env_var).is_some() {
		return Some(SettingSource::Environment(env_var));
	}

	Some(SettingSource::ConfigKey(key))
}

pub(super) type SourceFn<'a> = &'a dyn Fn() -> SettingSource;

pub(super) fn invalid(
	key: &'static str,
	value: impl Into<String>,
	origin: SourceFn<'_>,
	reason: impl Into<String>,
) -> ConfigError {
	ConfigError::invalid(key, value, origin(), reason)
}

#[cfg(test)]
mod tests;
