use serde::Deserialize;

use crate::cli::CliArgs;
use qagent::UiConfig;
use qagent::ui::style::{self, Theme};
use qagent::ui::style::theme::DEFAULT_THEME_NAME;

use super::super::resolved::ConfigError;
use super::{SourceFn, invalid};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct UiSection {
	pub(super) title: Option<String>,
	pub(super) tagline: Option<String>,
	pub(super) theme: Option<String>,
	pub(super) initial_query: Option<String>,
}

pub(super) struct UiResolution {
	pub(super) ui: UiConfig,
	pub(super) theme_name: String,
	pub(super) theme: Theme,
	pub(super) initial_query: Option<String>,
}

impl UiSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(title) = &cli.title {
			self.title = Some(title.clone());
		}
		if let Some(theme) = &cli.theme {
			self.theme = Some(theme.clone());
		}
		if let Some(query) = &cli.initial_query {
			self.initial_query = Some(query.clone());
		}
	}

	pub(super) fn finalize(self, origin: SourceFn<'_>) -> Result<UiResolution, ConfigError> {
		let mut ui = UiConfig::default();
		if let Some(title) = self.title {
			ui = ui.with_title(title);
		}
		if let Some(tagline) = self.tagline {
			ui = ui.with_tagline(tagline);
		}

		let theme_name = self
			.theme
			.map(|name| name.trim().to_ascii_lowercase())
			.unwrap_or_else(|| DEFAULT_THEME_NAME.to_string());
		let theme = style::by_name(&theme_name).ok_or_else(|| {
			invalid(
				"ui.theme",
				theme_name.clone(),
				origin,
				format!("unknown theme; available: {}", style::names().join(", ")),
			)
		})?;

		let initial_query = self
			.initial_query
			.map(|query| query.trim().to_string())
			.filter(|query| !query.is_empty());

		Ok(UiResolution {
			ui,
			theme_name,
			theme,
			initial_query,
		})
	}
}
