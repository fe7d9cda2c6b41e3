mod tools;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{Verbosity, WarnLevel};

#[derive(Parser, Debug)]
#[command(
	author,
	version,
	about,
	long_about = None,
	propagate_version = true,
	disable_help_subcommand = true,
)]
struct Cli {
	#[command(subcommand)]
	command: Commands,

	#[command(flatten)]
	verbose: Verbosity<WarnLevel>,
}

#[derive(Subcommand, Debug)]
enum Commands {
	/// Render a single tile into an image file
	Render(tools::render::Subcommand),

	/// Show how a configuration resolves: feature profile, style policy and options
	Probe(tools::probe::Subcommand),
}

fn main() -> Result<()> {
	let cli = Cli::parse();

	env_logger::Builder::new()
		.filter_level(cli.verbose.log_level_filter())
		.format_timestamp(None)
		.init();

	run(cli)
}

fn run(cli: Cli) -> Result<()> {
	match &cli.command {
		Commands::Render(arguments) => tools::render::run(arguments),
		Commands::Probe(arguments) => tools::probe::run(arguments),
	}
}

#[cfg(test)]
mod tests {
	use crate::{Cli, run};
	use anyhow::Result;
	use clap::Parser;

	pub fn run_command(arg_vec: Vec<&str>) -> Result<String> {
		let cli = Cli::try_parse_from(arg_vec)?;
		let msg = format!("{cli:?}");
		run(cli)?;
		Ok(msg)
	}

	#[test]
	fn help() {
		let err = run_command(vec!["featuretiles"]).unwrap_err().to_string();
		assert!(err.starts_with("Renders vector geographic features into raster map tiles."));
		assert!(err.contains("\nUsage: featuretiles [OPTIONS] <COMMAND>"));
	}

	#[test]
	fn version() {
		let err = run_command(vec!["featuretiles", "-V"]).unwrap_err().to_string();
		assert!(err.starts_with("featuretiles "));
	}

	#[test]
	fn render_subcommand() {
		let output = run_command(vec!["featuretiles", "render"]).unwrap_err().to_string();
		assert!(output.starts_with("Render a single tile into an image file"));
	}

	#[test]
	fn probe_subcommand() {
		let output = run_command(vec!["featuretiles", "probe"]).unwrap_err().to_string();
		assert!(output.starts_with("Show how a configuration resolves"));
	}
}
