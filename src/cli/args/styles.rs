use std::fmt::Write;

use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use qagent::app_dirs;
use qagent::ui::style;

/// Version banner listing where configuration is read from and which themes
/// ship with the binary.
pub(super) fn long_version() -> &'static str {
	let mut banner = format!("qagent {}\n", env!("CARGO_PKG_VERSION"));

	match app_dirs::get_config_dir() {
		Ok(dir) => {
			let _ = writeln!(banner, "config file: {}", dir.join("config.toml").display());
		}
		Err(err) => {
			let _ = writeln!(banner, "config file: unavailable ({err})");
		}
	}
	let _ = writeln!(banner, "environment: QAGENT__<SECTION>__<KEY>");
	let _ = writeln!(banner, "themes: {}", style::names().join(", "));

	Box::leak(banner.into_boxed_str())
}

/// Help colours: bold green headings, cyan flags and yellow value names.
pub(super) fn cli_styles() -> Styles {
	Styles::styled()
		.header(AnsiColor::Green.on_default().effects(Effects::BOLD | Effects::UNDERLINE))
		.usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
		.placeholder(AnsiColor::Yellow.on_default())
		.error(AnsiColor::Red.on_default().effects(Effects::BOLD))
}
