use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser};

use super::options::OutputFormat;
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `qagent` binary.
#[derive(Parser, Debug)]
#[command(
	name = "qagent",
	version,
	long_version = long_version(),
	about = "Ask questions in the terminal and get sourced summaries",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "QAGENT_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		short = 'q',
		long = "query",
		value_name = "QUERY",
		help = "Submit a query as soon as the agent starts (default: none)"
	)]
	pub(crate) initial_query: Option<String>,
	#[arg(
		long = "delay-ms",
		value_name = "MS",
		help = "Simulated synthesis latency in milliseconds (default: 2000)"
	)]
	pub(crate) delay_ms: Option<u64>,
	#[arg(
		long = "hint-interval-ms",
		value_name = "MS",
		help = "How long each sample prompt stays on screen (default: 3000)"
	)]
	pub(crate) hint_interval_ms: Option<u64>,
	#[arg(
		long,
		value_name = "THEME",
		help = "Select a theme by name (default: slate)"
	)]
	pub(crate) theme: Option<String>,
	#[arg(
		short = 't',
		long,
		value_name = "TITLE",
		help = "Set the title on the landing screen (default: Query Agent)"
	)]
	pub(crate) title: Option<String>,
	#[arg(
		long = "log-level",
		value_name = "LEVEL",
		help = "Minimum level shown in the log drawer (default: info)"
	)]
	pub(crate) log_level: Option<String>,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		short = 'l',
		long = "list-themes",
		help = "List supported themes and exit (default: disabled)"
	)]
	pub(crate) list_themes: bool,
	#[arg(
		short = 'o',
		long = "output",
		value_enum,
		default_value_t = OutputFormat::Plain,
		help = "Choose how to print the session outcome"
	)]
	pub(crate) output: OutputFormat,
}
