mod info;

pub use info::TileImageInfo;
