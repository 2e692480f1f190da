use indexmap::IndexMap;
use thiserror::Error;

use crate::shader::TargetShader;

pub type Result<T, E = MaterialError> = std::result::Result<T, E>;

#[derive(Error, Debug, PartialEq)]
pub enum MaterialError {
	#[error("unknown target shader: {0}")]
	UnknownShader(String),

	#[error("shader GUIDs must be 32 hex characters, got {0}")]
	InvalidGuidLength(usize),

	#[error("invalid hex: {0}")]
	InvalidHex(#[from] hex::FromHexError),

	#[error("invalid name pattern: {0}")]
	InvalidPattern(#[from] regex::Error)
}

/// An RGBA colour as stored in the source material. Values are not clamped, so HDR colours survive translation.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	pub r: f32,
	pub g: f32,
	pub b: f32,
	pub a: f32
}

impl Color {
	pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
		Self { r, g, b, a }
	}

	/// Whether any of the RGB channels is non-zero.
	pub fn has_rgb(&self) -> bool {
		self.r != 0.0 || self.g != 0.0 || self.b != 0.0
	}

	pub fn with_alpha(self, a: f32) -> Self {
		Self { a, ..self }
	}
}

impl Default for Color {
	fn default() -> Self {
		Self::new(0.0, 0.0, 0.0, 1.0)
	}
}

impl From<[f32; 4]> for Color {
	fn from([r, g, b, a]: [f32; 4]) -> Self {
		Self { r, g, b, a }
	}
}

impl From<(f32, f32, f32, f32)> for Color {
	fn from((r, g, b, a): (f32, f32, f32, f32)) -> Self {
		Self { r, g, b, a }
	}
}

/// A texture slot of a source material.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Clone, Debug, PartialEq)]
pub struct TextureRef {
	/// The asset GUID of the referenced texture.
	pub guid: String,

	pub scale: [f32; 2],
	pub offset: [f32; 2]
}

impl TextureRef {
	pub fn new(guid: impl Into<String>) -> Self {
		Self {
			guid: guid.into(),
			scale: [1.0, 1.0],
			offset: [0.0, 0.0]
		}
	}
}

/// A parsed source (Unity) material, keyed by the source property names.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Clone, Debug, PartialEq, Default)]
pub struct SourceMaterial {
	pub name: String,

	/// The shader GUID. May be empty or malformed; the detector treats both as unknown.
	#[cfg_attr(feature = "serde", serde(default))]
	pub shader_guid: String,

	#[cfg_attr(feature = "serde", serde(default))]
	pub textures: IndexMap<String, TextureRef>,

	#[cfg_attr(feature = "serde", serde(default))]
	pub scalars: IndexMap<String, f32>,

	#[cfg_attr(feature = "serde", serde(default))]
	pub colors: IndexMap<String, Color>
}

impl SourceMaterial {
	pub fn new(name: impl Into<String>, shader_guid: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			shader_guid: shader_guid.into(),
			..Default::default()
		}
	}

	pub fn with_texture(mut self, slot: impl Into<String>, guid: impl Into<String>) -> Self {
		self.textures.insert(slot.into(), TextureRef::new(guid));
		self
	}

	pub fn with_scalar(mut self, name: impl Into<String>, value: f32) -> Self {
		self.scalars.insert(name.into(), value);
		self
	}

	pub fn with_color(mut self, name: impl Into<String>, color: impl Into<Color>) -> Self {
		self.colors.insert(name.into(), color.into());
		self
	}

	/// Whether the material carries no properties at all.
	pub fn is_bare(&self) -> bool {
		self.textures.is_empty() && self.scalars.is_empty() && self.colors.is_empty()
	}
}

/// A material translated to one of the destination (Godot) shaders, keyed by shader parameter names.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Clone, Debug, PartialEq)]
pub struct TargetMaterial {
	pub name: String,

	pub shader: TargetShader,

	/// Parameter name to texture filename (without extension).
	#[cfg_attr(feature = "serde", serde(skip_serializing_if = "IndexMap::is_empty"))]
	#[cfg_attr(feature = "serde", serde(default))]
	pub textures: IndexMap<String, String>,

	#[cfg_attr(feature = "serde", serde(skip_serializing_if = "IndexMap::is_empty"))]
	#[cfg_attr(feature = "serde", serde(default))]
	pub scalars: IndexMap<String, f32>,

	#[cfg_attr(feature = "serde", serde(skip_serializing_if = "IndexMap::is_empty"))]
	#[cfg_attr(feature = "serde", serde(default))]
	pub booleans: IndexMap<String, bool>,

	#[cfg_attr(feature = "serde", serde(skip_serializing_if = "IndexMap::is_empty"))]
	#[cfg_attr(feature = "serde", serde(default))]
	pub colors: IndexMap<String, Color>
}

impl TargetMaterial {
	pub fn new(name: impl Into<String>, shader: TargetShader) -> Self {
		Self {
			name: name.into(),
			shader,
			textures: IndexMap::new(),
			scalars: IndexMap::new(),
			booleans: IndexMap::new(),
			colors: IndexMap::new()
		}
	}

	/// The destination shader file, e.g. `foliage.gdshader`.
	pub fn shader_file(&self) -> &'static str {
		self.shader.file_name()
	}

	/// The texture filenames this material needs copied alongside it.
	pub fn required_textures(&self) -> impl Iterator<Item = &str> {
		self.textures.values().map(String::as_str)
	}

	/// Whether `param` is set in any of the value maps.
	pub fn has_param(&self, param: &str) -> bool {
		self.textures.contains_key(param)
			|| self.scalars.contains_key(param)
			|| self.booleans.contains_key(param)
			|| self.colors.contains_key(param)
	}
}
