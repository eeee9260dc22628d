//! Runtime logging routed into the in-UI log drawer.
//!
//! Call sites use the `log` macros. `tui-logger` buffers the records and its
//! own background thread moves them into the widget.

use std::str::FromStr;
use std::sync::OnceLock;

use anyhow::{Result, anyhow};
use log::LevelFilter;

static INSTALLED: OnceLock<()> = OnceLock::new();

/// Install the logger once and set the level shown in the drawer.
pub fn initialize(level: LevelFilter) -> Result<()> {
	if INSTALLED.get().is_none() {
		tui_logger::init_logger(LevelFilter::Trace)
			.map_err(|err| anyhow!("failed to install logger: {err}"))?;
		let _ = INSTALLED.set(());
	}
	tui_logger::set_default_level(level);
	log::set_max_level(level);
	Ok(())
}

/// Parse a level name such as `info` or `TRACE`.
pub fn parse_level(value: &str) -> Option<LevelFilter> {
	LevelFilter::from_str(value.trim()).ok()
}
