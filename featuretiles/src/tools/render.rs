use super::open_tile_source;
use anyhow::{Context, Result};
use clap::Args;
use featuretiles_core::{TileKey, TileProfile, progress::ProgressCounter};
use featuretiles_image::{Color, TileImageFormat};
use featuretiles_render::SimpleRasterizer;
use std::{fs, path::PathBuf};

#[derive(Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// YAML file with the tile source options
	#[arg(required = true)]
	config: PathBuf,

	/// zoom level of the tile
	level: u8,

	/// column of the tile
	x: u32,

	/// row of the tile, 0 is the northernmost row
	y: u32,

	/// image file to write, *.png or *.webp
	#[arg(long, short, default_value = "tile.png")]
	output: PathBuf,

	/// tiling scheme: "global-geodetic" or "spherical-mercator"
	#[arg(long, short)]
	profile: Option<TileProfile>,

	/// fill the tile with this color before drawing, e.g. "#ffffff"
	#[arg(long)]
	background: Option<Color>,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	let format = TileImageFormat::from_path(&arguments.output)?;
	let rasterizer = match arguments.background {
		Some(color) => SimpleRasterizer::with_background(color),
		None => SimpleRasterizer::new(),
	};
	let source = open_tile_source(&arguments.config, rasterizer, arguments.profile)?;
	let profile = source.profile().unwrap_or_default();
	let key = TileKey::new(arguments.level, arguments.x, arguments.y, profile)?;

	let progress = ProgressCounter::default();
	let Some(image) = source.create_image(&key, Some(&progress))? else {
		log::warn!("tile {key} has nothing to render, no image written");
		return Ok(());
	};
	log::info!("rendered tile {key} in {} batch(es)", progress.reports());

	let bytes = format.encode(&image)?;
	fs::write(&arguments.output, bytes)
		.with_context(|| format!("Failed to write '{}'", arguments.output.display()))?;
	eprintln!("wrote tile {key} to {:?}", arguments.output);
	Ok(())
}

#[cfg(test)]
mod tests {
	use crate::tests::run_command;
	use featuretiles_image::{TileImageFormat, TileImageInfo};
	use tempfile::tempdir;

	#[test]
	fn renders_png() {
		let dir = tempdir().unwrap();
		let output = dir.path().join("tile.png");
		run_command(vec![
			"featuretiles",
			"render",
			"-q",
			"../testdata/rivers.yaml",
			"0",
			"0",
			"0",
			"-o",
			output.to_str().unwrap(),
		])
		.unwrap();

		let image = TileImageFormat::Png.decode(&std::fs::read(&output).unwrap()).unwrap();
		assert_eq!(image.dimensions(), (256, 256));
		assert!(!image.is_blank());
	}

	#[test]
	fn rejects_unknown_image_format() {
		let err = run_command(vec![
			"featuretiles",
			"render",
			"-q",
			"../testdata/rivers.yaml",
			"0",
			"0",
			"0",
			"-o",
			"tile.jpg",
		])
		.unwrap_err();
		assert!(format!("{err:#}").contains("unsupported image format 'jpg'"));
	}
}
