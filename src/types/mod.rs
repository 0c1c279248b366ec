//! Core types for assetgen.

pub mod asset_type;
pub mod model;
pub mod size;
pub mod style_template;

pub use asset_type::{AssetType, AssetTypeSpec, ASSET_TYPES};
pub use model::Model;
pub use size::{Size, SizeParseError};
pub use style_template::StyleTemplate;
