use super::ResolvedConfig;

pub(super) fn print_summary(config: &ResolvedConfig) {
	println!("Effective configuration:");
	println!("  Synthesis delay: {}ms", config.delay.as_millis());
	println!("  Hint interval: {}ms", config.hint_interval.as_millis());
	println!("  Theme: {}", config.theme_name);
	println!("  Title: {}", config.ui.title);
	println!("  Tagline: {}", config.ui.tagline);
	match &config.initial_query {
		Some(query) => println!("  Initial query: {query}"),
		None => println!("  Initial query: (none)"),
	}
	println!("  Log level: {}", config.log_level);
}
