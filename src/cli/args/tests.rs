use clap::{CommandFactory, Parser};

use super::{CliArgs, OutputFormat};

#[test]
fn command_definition_is_consistent() {
	CliArgs::command().debug_assert();
}

#[test]
fn defaults_parse_without_arguments() {
	let parsed = CliArgs::parse_from(["qagent"]);
	assert_eq!(parsed.output, OutputFormat::Plain);
	assert!(parsed.initial_query.is_none());
	assert!(!parsed.no_config);
}

#[test]
fn flags_are_captured() {
	let parsed = CliArgs::parse_from([
		"qagent",
		"-q",
		"Latest AI developments",
		"--delay-ms",
		"250",
		"--theme",
		"light",
		"-o",
		"json",
		"-c",
		"one.toml",
		"-c",
		"two.toml",
	]);
	assert_eq!(parsed.initial_query.as_deref(), Some("Latest AI developments"));
	assert_eq!(parsed.delay_ms, Some(250));
	assert_eq!(parsed.theme.as_deref(), Some("light"));
	assert_eq!(parsed.output, OutputFormat::Json);
	assert_eq!(parsed.config.len(), 2);
}
