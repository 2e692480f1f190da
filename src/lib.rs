//! Translation of Synty (Unity) materials to the Godot shaders that replace them.
//!
//! Each source material is assigned one of seven target shaders and its properties are renamed to that shader's
//! parameters. Two encoding defects of the source format are corrected on the way: opaque colours stored with zero
//! alpha, and toggles stored as floats.
//!
//! ```
//! use indexmap::IndexMap;
//! use synty_materials::{translate, SourceMaterial, TargetShader};
//!
//! let source = SourceMaterial::new("Fern_01", "9b98a126c8d4d7a4baeb81b16e4f7b97").with_scalar("_Enable_Breeze", 1.0);
//! let material = translate(&source, &IndexMap::new(), None);
//!
//! assert_eq!(material.shader, TargetShader::Foliage);
//! assert!(material.booleans["enable_breeze"]);
//! assert_eq!(material.scalars["leaf_smoothness"], 0.1);
//! ```

use indexmap::IndexMap;

pub mod cache;
pub mod config;
pub mod detect;
pub mod material;
pub mod quirks;
pub mod shader;
pub mod summary;
pub mod tables;
pub mod translate;

pub use cache::{MaterialSlot, ShaderCache};
pub use config::TranslatorConfig;
pub use detect::{detect, detect_from_name, determine_shader, Detection, Evidence};
pub use material::{Color, MaterialError, Result, SourceMaterial, TargetMaterial, TextureRef};
pub use shader::{known_identifiers, shader_for_identifier, ShaderGuid, TargetShader};
pub use summary::MappingSummary;
pub use tables::DefaultValue;
pub use translate::{apply_defaults, Translation, Translator};

/// Translate a material with the default settings. See [`Translator::translate`].
pub fn translate(
	source: &SourceMaterial,
	filenames: &IndexMap<String, String>,
	shader: Option<TargetShader>
) -> TargetMaterial {
	Translator::default().translate(source, filenames, shader)
}

/// See [`Translator::validate`].
pub fn validate(shader: TargetShader, source: &SourceMaterial) -> bool {
	Translator::default().validate(shader, source)
}

/// See [`Translator::synthesize_placeholder`].
pub fn synthesize_placeholder(name: &str) -> TargetMaterial {
	Translator::default().synthesize_placeholder(name)
}
