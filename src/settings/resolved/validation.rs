use std::time::Duration;

use super::{ConfigError, ConfigSources, ResolvedConfig};

/// Longest simulated synthesis latency accepted from configuration.
pub(super) const MAX_DELAY: Duration = Duration::from_secs(600);

pub(super) fn validate(
	config: &ResolvedConfig,
	sources: &ConfigSources,
) -> Result<(), ConfigError> {
	if config.hint_interval.is_zero() {
		return Err(ConfigError::invalid(
			"agent.hint_interval_ms",
			config.hint_interval.as_millis().to_string(),
			sources.source_for_hint_interval(),
			"must be greater than zero",
		));
	}

	if config.delay > MAX_DELAY {
		return Err(ConfigError::invalid(
			"agent.delay_ms",
			config.delay.as_millis().to_string(),
			sources.source_for_delay(),
			format!("must be at most {}", MAX_DELAY.as_millis()),
		));
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	use log::LevelFilter;
	use qagent::{Theme, UiConfig};

	use super::super::SettingSource;
	use super::*;

	fn config() -> ResolvedConfig {
		ResolvedConfig {
			delay: Duration::from_millis(2000),
			hint_interval: Duration::from_millis(3000),
			theme_name: "slate".to_string(),
			theme: Theme::default(),
			ui: UiConfig::default(),
			initial_query: None,
			log_level: LevelFilter::Info,
		}
	}

	#[test]
	fn defaults_are_valid() {
		assert!(validate(&config(), &ConfigSources::default()).is_ok());
	}

	#[test]
	fn validation_rejects_zero_hint_interval() {
		let config = ResolvedConfig {
			hint_interval: Duration::ZERO,
			..config()
		};
		let sources = ConfigSources {
			hint_interval: Some(SettingSource::CliFlag("--hint-interval-ms")),
			..ConfigSources::default()
		};

		let err = validate(&config, &sources).unwrap_err();
		assert_eq!(err.key, "agent.hint_interval_ms");
		assert_eq!(err.origin, SettingSource::CliFlag("--hint-interval-ms"));
		assert!(err.to_string().contains("greater than zero"));
	}

	#[test]
	fn validation_rejects_excessive_delay() {
		let config = ResolvedConfig {
			delay: MAX_DELAY + Duration::from_millis(1),
			..config()
		};

		let err = validate(&config, &ConfigSources::default()).unwrap_err();
		assert_eq!(err.key, "agent.delay_ms");
		assert_eq!(err.origin, SettingSource::ConfigKey("agent.delay_ms"));
		assert_eq!(err.value, "600001");
	}

	#[test]
	fn zero_delay_is_allowed() {
		let config = ResolvedConfig {
			delay: Duration::ZERO,
			..config()
		};
		assert!(validate(&config, &ConfigSources::default()).is_ok());
	}
}
