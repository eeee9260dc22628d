use std::sync::LazyLock;

use regex::Regex;

use super::state::SearchResult;

/// Results and summary produced for one query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Synthesis {
	pub results: Vec<SearchResult>,
	pub summary: String,
}

/// Turns a validated query into sources and a summary. Must not fail.
pub trait Synthesizer: Send + Sync {
	fn synthesize(&self, query: &str) -> Synthesis;
}

static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Template-driven stand-in for a real search backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockSynthesizer;

impl MockSynthesizer {
	pub fn new() -> Self {
		Self
	}
}

impl Synthesizer for MockSynthesizer {
	fn synthesize(&self, query: &str) -> Synthesis {
		let slug = WHITESPACE_RUN.replace_all(query, "-");
		let results = vec![
			SearchResult::new(
				format!("Comprehensive Guide to {query}"),
				format!("https://example.com/guide-{slug}"),
			),
			SearchResult::new(
				format!("Latest Updates on {query}"),
				format!("https://news.example.com/{slug}"),
			),
			SearchResult::new(
				format!("Expert Analysis: {query}"),
				format!("https://expert.example.com/analysis-{slug}"),
			),
			SearchResult::new(
				format!("{query} - Complete Overview"),
				format!("https://overview.example.com/{slug}"),
			),
			SearchResult::new(
				format!("Research and Insights on {query}"),
				format!("https://research.example.com/{slug}"),
			),
		];

		let summary = format!(
			"Based on current web sources, {query} is a complex topic with multiple perspectives. \
			 Recent research shows significant developments in this area, with experts highlighting \
			 key trends and practical applications. The information gathered from reliable sources \
			 suggests that understanding {query} requires considering various factors and staying \
			 updated with the latest findings. This synthesis provides a comprehensive overview \
			 while acknowledging the evolving nature of the subject."
		);

		Synthesis { results, summary }
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn synthesis_is_deterministic() {
		let synth = MockSynthesizer::new();
		assert_eq!(
			synth.synthesize("Latest AI developments"),
			synth.synthesize("Latest AI developments")
		);
	}

	#[test]
	fn urls_collapse_whitespace_runs_into_dashes() {
		let synthesis = MockSynthesizer::new().synthesize("Climate  change\tsolutions");
		assert_eq!(synthesis.results.len(), 5);
		assert_eq!(
			synthesis.results[0].url,
			"https://example.com/guide-Climate-change-solutions"
		);
		assert_eq!(
			synthesis.results[2].url,
			"https://expert.example.com/analysis-Climate-change-solutions"
		);
	}

	#[test]
	fn titles_and_summary_mention_the_query() {
		let synthesis = MockSynthesizer::new().synthesize("Healthy breakfast recipes");
		assert_eq!(
			synthesis.results[3].title,
			"Healthy breakfast recipes - Complete Overview"
		);
		assert!(synthesis.summary.starts_with(
			"Based on current web sources, Healthy breakfast recipes is a complex topic"
		));
		assert!(synthesis.summary.ends_with("the evolving nature of the subject."));
		assert_eq!(synthesis.summary.matches("Healthy breakfast recipes").count(), 2);
	}
}
