use std::collections::VecDeque;
use std::fmt;

use chrono::{DateTime, Local};
use serde::Serialize;

/// Maximum number of past queries kept for cache lookups.
pub const HISTORY_LIMIT: usize = 10;

/// The single active screen of the agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
	#[default]
	Hero,
	Loading,
	Results,
	Invalid,
}

impl View {
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Hero => "hero",
			Self::Loading => "loading",
			Self::Results => "results",
			Self::Invalid => "invalid",
		}
	}
}

impl fmt::Display for View {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// A synthesized source link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResult {
	pub title: String,
	pub url: String,
}

impl SearchResult {
	pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
		Self {
			title: title.into(),
			url: url.into(),
		}
	}
}

/// A completed search remembered for the rest of the session.
#[derive(Debug, Clone, Serialize)]
pub struct QueryHistoryEntry {
	pub query: String,
	pub results: Vec<SearchResult>,
	pub summary: String,
	pub timestamp: DateTime<Local>,
}

/// Bounded, most-recent-first record of completed searches.
#[derive(Debug, Clone, Default)]
pub struct QueryHistory {
	entries: VecDeque<QueryHistoryEntry>,
}

impl QueryHistory {
	pub fn new() -> Self {
		Self::default()
	}

	/// Case-insensitive exact match on the query text.
	pub fn find(&self, query: &str) -> Option<&QueryHistoryEntry> {
		let needle = query.to_lowercase();
		self.entries
			.iter()
			.find(|entry| entry.query.to_lowercase() == needle)
	}

	/// Prepend an entry, dropping the oldest ones beyond [`HISTORY_LIMIT`].
	pub fn record(&mut self, entry: QueryHistoryEntry) {
		self.entries.push_front(entry);
		self.entries.truncate(HISTORY_LIMIT);
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = &QueryHistoryEntry> {
		self.entries.iter()
	}
}

/// Everything the render layer projects onto the screen.
#[derive(Debug, Clone, Default)]
pub struct ControllerState {
	pub view: View,
	pub current_query: String,
	pub current_results: Vec<SearchResult>,
	pub current_summary: String,
	pub(crate) history: QueryHistory,
}
