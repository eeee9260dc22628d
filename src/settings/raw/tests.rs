use std::time::Duration;

use clap::Parser;
use log::LevelFilter;

use super::RawConfig;
use crate::cli::CliArgs;
use qagent::ui::style::theme::{LIGHT, SLATE};

#[test]
fn defaults_resolve_without_any_sources() {
	let cli = CliArgs::parse_from(["qagent"]);
	let config = RawConfig::default().resolve(&cli).unwrap();

	assert_eq!(config.delay, Duration::from_millis(2000));
	assert_eq!(config.hint_interval, Duration::from_millis(3000));
	assert_eq!(config.theme_name, "slate");
	assert_eq!(config.theme, SLATE);
	assert_eq!(config.ui.title, "Query Agent");
	assert_eq!(config.initial_query, None);
	assert_eq!(config.log_level, LevelFilter::Info);
}

#[test]
fn cli_overrides_take_precedence() {
	let cli = CliArgs::parse_from([
		"qagent",
		"--delay-ms",
		"25",
		"--hint-interval-ms",
		"750",
		"--theme",
		"Day",
		"--title",
		"Desk",
		"--query",
		"  rust ownership  ",
		"--log-level",
		"debug",
	]);

	let mut config = RawConfig::default();
	config.agent.delay_ms = Some(9000);
	config.ui.theme = Some("solarized".into());
	config.ui.title = Some("From file".into());
	config.apply_cli_overrides(&cli);

	let resolved = config.resolve(&cli).unwrap();
	assert_eq!(resolved.delay, Duration::from_millis(25));
	assert_eq!(resolved.hint_interval, Duration::from_millis(750));
	assert_eq!(resolved.theme, LIGHT);
	assert_eq!(resolved.theme_name, "day");
	assert_eq!(resolved.ui.title, "Desk");
	assert_eq!(resolved.initial_query.as_deref(), Some("rust ownership"));
	assert_eq!(resolved.log_level, LevelFilter::Debug);
}

#[test]
fn file_values_survive_when_cli_is_silent() {
	let cli = CliArgs::parse_from(["qagent"]);
	let mut config = RawConfig::default();
	config.ui.tagline = Some("Ask away".into());
	config.ui.initial_query = Some("   ".into());
	config.apply_cli_overrides(&cli);

	let resolved = config.resolve(&cli).unwrap();
	assert_eq!(resolved.ui.tagline, "Ask away");
	assert_eq!(resolved.initial_query, None);
}

#[test]
fn unknown_theme_reports_cli_flag() {
	let cli = CliArgs::parse_from(["qagent", "--theme", "neon"]);
	let mut config = RawConfig::default();
	config.apply_cli_overrides(&cli);

	let message = config.resolve(&cli).unwrap_err().to_string();
	assert!(message.contains("ui.theme"));
	assert!(message.contains("CLI flag `--theme`"));
	assert!(message.contains("slate"));
}

#[test]
fn invalid_log_level_is_rejected() {
	let cli = CliArgs::parse_from(["qagent", "--log-level", "loud"]);
	let mut config = RawConfig::default();
	config.apply_cli_overrides(&cli);

	let message = config.resolve(&cli).unwrap_err().to_string();
	assert!(message.contains("logging.level"));
	assert!(message.contains("value: loud"));
}

#[test]
fn zero_hint_interval_is_rejected() {
	let cli = CliArgs::parse_from(["qagent", "--hint-interval-ms", "0"]);
	let mut config = RawConfig::default();
	config.apply_cli_overrides(&cli);

	let message = config.resolve(&cli).unwrap_err().to_string();
	assert!(message.contains("agent.hint_interval_ms"));
	assert!(message.contains("--hint-interval-ms"));
}
