use clap::ValueEnum;

/// Output formats for the session outcome printed on exit.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
	Plain,
	Json,
}
