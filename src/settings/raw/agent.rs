use std::time::Duration;

use serde::Deserialize;

use crate::cli::CliArgs;
use qagent::agent::DEFAULT_SYNTHESIS_DELAY;
use qagent::ui::DEFAULT_HINT_INTERVAL;

use super::millis;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct AgentSection {
	pub(super) delay_ms: Option<u64>,
	pub(super) hint_interval_ms: Option<u64>,
}

pub(super) struct AgentResolution {
	pub(super) delay: Duration,
	pub(super) hint_interval: Duration,
}

impl AgentSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(delay) = cli.delay_ms {
			self.delay_ms = Some(delay);
		}
		if let Some(interval) = cli.hint_interval_ms {
			self.hint_interval_ms = Some(interval);
		}
	}

	pub(super) fn finalize(self) -> AgentResolution {
		AgentResolution {
			delay: millis(self.delay_ms, DEFAULT_SYNTHESIS_DELAY),
			hint_interval: millis(self.hint_interval_ms, DEFAULT_HINT_INTERVAL),
		}
	}
}
