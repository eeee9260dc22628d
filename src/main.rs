mod cli;
mod settings;

use anyhow::Result;
use cli::{OutputFormat, parse_cli, print_json, print_plain};
use log::info;
use qagent::{App, QueryController, logging};
use settings::ResolvedConfig;

fn main() -> Result<()> {
	let cli = parse_cli();

	if cli.list_themes {
		for name in qagent::ui::style::names() {
			println!("{name}");
		}
		return Ok(());
	}

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	run_session(cli.output, resolved)
}

/// Run the interactive session and print where it ended.
fn run_session(format: OutputFormat, settings: ResolvedConfig) -> Result<()> {
	logging::initialize(settings.log_level)?;
	info!(
		"starting with theme {} and {}ms synthesis delay",
		settings.theme_name,
		settings.delay.as_millis()
	);

	let controller = QueryController::builder().delay(settings.delay).build();
	let mut app = App::new(controller).with_ui(settings.ui);
	app.set_theme(settings.theme);
	app.set_hint_interval(settings.hint_interval);
	if let Some(query) = settings.initial_query {
		app.set_initial_query(query);
	}

	let outcome = app.run()?;

	match format {
		OutputFormat::Plain => print_plain(&outcome),
		OutputFormat::Json => print_json(&outcome)?,
	}

	Ok(())
}
