use std::sync::LazyLock;

use regex::Regex;

/// Decides whether a query is something the agent should search for.
pub trait Validator: Send {
	fn is_valid(&self, query: &str) -> bool;
}

impl<F> Validator for F
where
	F: Fn(&str) -> bool + Send,
{
	fn is_valid(&self, query: &str) -> bool {
		self(query)
	}
}

/// Queries at or below this many characters are rejected outright.
const MIN_EXCLUSIVE_LEN: usize = 3;

static IMPERATIVE: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"(?i)^(add|create|make|set|delete|remove)\s").unwrap());

static ARITHMETIC: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"(?i)^(what is|what's)\s*\d+\s*[+\-*/]\s*\d+").unwrap());

static GREETING: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"(?i)^(hello|hi|hey|good morning|good evening)").unwrap());

/// Prefix heuristics that turn away commands, sums and small talk.
///
/// Greetings are matched without a word boundary, so "history of rome" is
/// rejected along with "hi there".
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicValidator;

impl HeuristicValidator {
	pub fn new() -> Self {
		Self
	}
}

impl Validator for HeuristicValidator {
	fn is_valid(&self, query: &str) -> bool {
		let query = query.trim();
		if query.chars().count() <= MIN_EXCLUSIVE_LEN {
			return false;
		}

		![&*IMPERATIVE, &*ARITHMETIC, &*GREETING]
			.iter()
			.any(|pattern| pattern.is_match(query))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn valid(query: &str) -> bool {
		HeuristicValidator::new().is_valid(query)
	}

	#[test]
	fn short_queries_are_rejected() {
		assert!(!valid(""));
		assert!(!valid("abc"));
		assert!(!valid("  abc   "));
		assert!(valid("abcd"));
	}

	#[test]
	fn imperative_prefixes_are_rejected() {
		assert!(!valid("add milk"));
		assert!(!valid("Create a reminder"));
		assert!(!valid("DELETE my account"));
		assert!(!valid("remove\tfiles"));
		assert!(valid("addition rules in algebra"));
		assert!(valid("settings for vim"));
	}

	#[test]
	fn arithmetic_questions_are_rejected() {
		assert!(!valid("What is 2 + 2"));
		assert!(!valid("what's 10*3"));
		assert!(!valid("WHAT IS 7 / 0 please"));
		assert!(valid("What is the tallest mountain"));
	}

	#[test]
	fn greetings_are_rejected_by_prefix() {
		assert!(!valid("hello there"));
		assert!(!valid("Good morning agent"));
		assert!(!valid("hey you"));
		assert!(!valid("history of rome"));
	}

	#[test]
	fn research_questions_are_accepted() {
		assert!(valid("Best places to visit in Delhi"));
		assert!(valid("Climate change solutions"));
		assert!(valid("Healthy breakfast recipes"));
	}

	#[test]
	fn closures_can_stand_in_for_validators() {
		let always = |_: &str| true;
		assert!(always.is_valid("add milk"));
	}
}
