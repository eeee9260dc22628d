use std::time::{Duration, Instant};

/// Example questions cycled beneath the hero input.
pub const SAMPLE_PROMPTS: &[&str] = &[
	"Best places to visit in Delhi",
	"How to learn React in 2024",
	"Latest AI developments",
	"Climate change solutions",
	"Healthy breakfast recipes",
];

pub const DEFAULT_HINT_INTERVAL: Duration = Duration::from_millis(3000);

/// Cycles through sample prompts on a fixed period.
#[derive(Debug, Clone)]
pub struct PromptRotation {
	prompts: &'static [&'static str],
	index: usize,
	interval: Duration,
	last_advance: Instant,
}

impl Default for PromptRotation {
	fn default() -> Self {
		Self::new(SAMPLE_PROMPTS, DEFAULT_HINT_INTERVAL)
	}
}

impl PromptRotation {
	pub fn new(prompts: &'static [&'static str], interval: Duration) -> Self {
		Self {
			prompts,
			index: 0,
			interval,
			last_advance: Instant::now(),
		}
	}

	pub fn current(&self) -> Option<&'static str> {
		self.prompts.get(self.index).copied()
	}

	pub fn set_interval(&mut self, interval: Duration) {
		self.interval = interval;
	}

	/// Restart from the first prompt.
	pub fn reset(&mut self, now: Instant) {
		self.index = 0;
		self.last_advance = now;
	}

	/// Advance once per elapsed interval. Returns `true` if the prompt changed.
	pub fn tick(&mut self, now: Instant) -> bool {
		if self.prompts.is_empty() || self.interval.is_zero() {
			return false;
		}

		let mut advanced = false;
		while now.saturating_duration_since(self.last_advance) >= self.interval {
			self.last_advance += self.interval;
			self.index = (self.index + 1) % self.prompts.len();
			advanced = true;
		}
		advanced
	}
}
