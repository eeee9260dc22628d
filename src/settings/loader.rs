use anyhow::{Result, anyhow};

use super::raw::RawConfig;
use super::resolved::ResolvedConfig;
use super::sources::build_config;
use crate::cli::CliArgs;

/// Load configuration by combining CLI arguments, config files and environment
/// variables.
pub fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
	let builder = build_config(cli)?;
	let mut raw: RawConfig = builder
		.try_deserialize()
		.map_err(|err| anyhow!("failed to deserialize configuration: {err}"))?;
	raw.apply_cli_overrides(cli);
	raw.resolve(cli)
}

#[cfg(test)]
mod tests {
	use std::fs;
	use std::time::Duration;

	use clap::Parser;
	use tempfile::tempdir;

	use super::*;
	use qagent::ui::style::theme::{LIGHT, SOLARIZED};

	#[test]
	fn config_file_values_are_resolved() {
		let dir = tempdir().unwrap();
		let path = dir.path().join("agent.toml");
		fs::write(
			&path,
			"[agent]\ndelay_ms = 150\nhint_interval_ms = 500\n\n[ui]\ntheme = \"light\"\ntitle = \"Research Desk\"\n",
		)
		.unwrap();

		let cli = CliArgs::parse_from(["qagent", "--no-config", "-c", path.to_str().unwrap()]);
		let resolved = load(&cli).unwrap();

		assert_eq!(resolved.delay, Duration::from_millis(150));
		assert_eq!(resolved.hint_interval, Duration::from_millis(500));
		assert_eq!(resolved.theme, LIGHT);
		assert_eq!(resolved.ui.title, "Research Desk");
	}

	#[test]
	fn cli_flags_override_config_files() {
		let dir = tempdir().unwrap();
		let path = dir.path().join("agent.toml");
		fs::write(&path, "[agent]\ndelay_ms = 150\n\n[ui]\ntheme = \"light\"\n").unwrap();

		let cli = CliArgs::parse_from([
			"qagent",
			"--no-config",
			"-c",
			path.to_str().unwrap(),
			"--delay-ms",
			"0",
			"--theme",
			"solarized",
		]);
		let resolved = load(&cli).unwrap();

		assert_eq!(resolved.delay, Duration::ZERO);
		assert_eq!(resolved.theme, SOLARIZED);
		assert_eq!(resolved.theme_name, "solarized");
	}

	#[test]
	fn unknown_theme_in_file_names_the_key() {
		let dir = tempdir().unwrap();
		let path = dir.path().join("agent.toml");
		fs::write(&path, "[ui]\ntheme = \"neon\"\n").unwrap();

		let cli = CliArgs::parse_from(["qagent", "--no-config", "-c", path.to_str().unwrap()]);
		let message = load(&cli).unwrap_err().to_string();

		assert!(message.contains("ui.theme"));
		assert!(message.contains("value: neon"));
		assert!(message.contains("configuration key"));
	}

	#[test]
	fn missing_explicit_config_file_is_an_error() {
		let dir = tempdir().unwrap();
		let path = dir.path().join("absent.toml");
		let cli = CliArgs::parse_from(["qagent", "--no-config", "-c", path.to_str().unwrap()]);
		assert!(load(&cli).is_err());
	}
}
