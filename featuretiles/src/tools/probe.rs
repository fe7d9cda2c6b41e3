use super::open_tile_source;
use anyhow::Result;
use clap::Args;
use featuretiles_core::TileProfile;
use featuretiles_render::SimpleRasterizer;
use std::path::PathBuf;

#[derive(Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// YAML file with the tile source options
	#[arg(required = true)]
	config: PathBuf,

	/// tiling scheme: "global-geodetic" or "spherical-mercator"
	#[arg(long, short)]
	profile: Option<TileProfile>,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	let source = open_tile_source(&arguments.config, SimpleRasterizer::new(), arguments.profile)?;

	println!("tile profile: {}", source.profile().unwrap_or_default());
	match source.feature_source() {
		Some(features) => match features.feature_profile() {
			Some(profile) => println!("features: {}", profile.extent()),
			None => println!("features: none"),
		},
		None => println!("features: no feature source"),
	}
	match source.style_policy() {
		Some(policy) => println!("style policy: {policy}"),
		None => println!("style policy: none"),
	}
	println!("options:\n{}", source.options().to_yaml_string()?);
	Ok(())
}

#[cfg(test)]
mod tests {
	use crate::tests::run_command;

	#[test]
	fn probe_config() {
		run_command(vec!["featuretiles", "probe", "-q", "../testdata/rivers.yaml"]).unwrap();
	}

	#[test]
	fn probe_missing_config() {
		let err = run_command(vec!["featuretiles", "probe", "-q", "../testdata/missing.yaml"]).unwrap_err();
		assert!(format!("{err:#}").starts_with("Failed to read options from '../testdata/missing.yaml'"));
	}
}
