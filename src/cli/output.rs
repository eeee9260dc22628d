use anyhow::Result;
use qagent::{SessionOutcome, View};

/// Print a plain-text representation of the session outcome.
pub(crate) fn print_plain(outcome: &SessionOutcome) {
	match outcome.view {
		View::Results => {
			println!("Results for \"{}\":", outcome.query);
			for result in &outcome.results {
				println!("{}\t{}", result.title, result.url);
			}
		}
		View::Invalid => println!("Not searchable: \"{}\"", outcome.query),
		View::Loading => println!("Cancelled while loading \"{}\"", outcome.query),
		View::Hero => println!("No query"),
	}
}

/// Format the session outcome as a JSON string.
pub(crate) fn format_outcome_json(outcome: &SessionOutcome) -> Result<String> {
	Ok(serde_json::to_string_pretty(outcome)?)
}

/// Print the JSON representation of the session outcome.
pub(crate) fn print_json(outcome: &SessionOutcome) -> Result<()> {
	println!("{}", format_outcome_json(outcome)?);
	Ok(())
}

#[cfg(test)]
mod tests {
	use qagent::SearchResult;
	use serde_json::Value;

	use super::*;

	#[test]
	fn json_format_includes_view_and_sources() {
		let outcome = SessionOutcome {
			view: View::Results,
			query: "Latest AI developments".into(),
			results: vec![SearchResult::new(
				"Latest Updates on Latest AI developments",
				"https://news.example.com/Latest-AI-developments",
			)],
		};

		let json = format_outcome_json(&outcome).expect("json");
		let value: Value = serde_json::from_str(&json).expect("parse");
		assert_eq!(value["view"], "results");
		assert_eq!(value["query"], "Latest AI developments");
		assert_eq!(
			value["results"][0]["url"],
			"https://news.example.com/Latest-AI-developments"
		);
	}
}
