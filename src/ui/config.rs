/// Text shown on each of the agent's screens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiConfig {
	pub title: String,
	pub tagline: String,
	pub input_placeholder: String,
	pub follow_up_placeholder: String,
	pub loading_title: String,
	pub loading_detail: String,
	pub invalid_title: String,
	pub invalid_body: String,
	pub invalid_action: String,
	pub sources_title: String,
	pub summary_title: String,
}

impl Default for UiConfig {
	fn default() -> Self {
		Self {
			title: "Query Agent".to_string(),
			tagline: "Your AI-powered search assistant. Ask anything and get intelligent summaries \
			          from across the web."
				.to_string(),
			input_placeholder: "Ask me anything...".to_string(),
			follow_up_placeholder: "Ask another question...".to_string(),
			loading_title: "AI is thinking".to_string(),
			loading_detail: "Analyzing your query".to_string(),
			invalid_title: "Hmm, that doesn't look like something I can search.".to_string(),
			invalid_body: "I'm designed to help you find information from the web. Try asking \
			               about topics, facts, or questions that need research."
				.to_string(),
			invalid_action: "Try another query".to_string(),
			sources_title: "Sources".to_string(),
			summary_title: "AI Summary".to_string(),
		}
	}
}

impl UiConfig {
	/// Override the hero title.
	#[must_use]
	pub fn with_title(mut self, title: impl Into<String>) -> Self {
		self.title = title.into();
		self
	}

	/// Override the hero tagline.
	#[must_use]
	pub fn with_tagline(mut self, tagline: impl Into<String>) -> Self {
		self.tagline = tagline.into();
		self
	}
}
