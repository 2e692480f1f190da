use std::{fmt::Display, str::FromStr, sync::LazyLock};

use indexmap::IndexMap;
use strum::{EnumCount, EnumIter};
use tryvial::try_fn;

use crate::material::{MaterialError, Result};

/// One of the destination shader programs.
///
/// The set is closed; every translated material uses exactly one of these.
#[cfg_attr(feature = "serde", derive(serde_with::SerializeDisplay, serde_with::DeserializeFromStr))]
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug, PartialOrd, Ord, EnumIter, EnumCount)]
pub enum TargetShader {
	/// General-purpose props, terrain and characters. The generic default.
	Polygon,

	/// Trees, ferns and grass with wind animation.
	Foliage,

	/// Rivers, lakes and oceans.
	Water,

	/// Crystals, gems and glass.
	Crystal,

	Particles,
	Skydome,
	Clouds
}

impl TargetShader {
	/// The shader every material falls back to.
	pub const DEFAULT: Self = Self::Polygon;

	pub fn is_default(self) -> bool {
		self == Self::DEFAULT
	}

	/// Canonical name, e.g. `foliage`.
	pub fn name(self) -> &'static str {
		match self {
			Self::Polygon => "polygon",
			Self::Foliage => "foliage",
			Self::Water => "water",
			Self::Crystal => "crystal",
			Self::Particles => "particles",
			Self::Skydome => "skydome",
			Self::Clouds => "clouds"
		}
	}

	/// Destination shader file, e.g. `foliage.gdshader`.
	pub fn file_name(self) -> &'static str {
		match self {
			Self::Polygon => "polygon.gdshader",
			Self::Foliage => "foliage.gdshader",
			Self::Water => "water.gdshader",
			Self::Crystal => "crystal.gdshader",
			Self::Particles => "particles.gdshader",
			Self::Skydome => "skydome.gdshader",
			Self::Clouds => "clouds.gdshader"
		}
	}

	pub(crate) fn index(self) -> usize {
		self as usize
	}
}

impl FromStr for TargetShader {
	type Err = MaterialError;

	/// Accepts both the canonical name and the shader file name.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.strip_suffix(".gdshader").unwrap_or(s) {
			"polygon" => Ok(Self::Polygon),
			"foliage" => Ok(Self::Foliage),
			"water" => Ok(Self::Water),
			"crystal" => Ok(Self::Crystal),
			"particles" => Ok(Self::Particles),
			"skydome" => Ok(Self::Skydome),
			"clouds" => Ok(Self::Clouds),
			_ => Err(MaterialError::UnknownShader(s.into()))
		}
	}
}

impl Display for TargetShader {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.name())
	}
}

/// A source shader GUID: 16 bytes, written as 32 hex characters.
#[cfg_attr(feature = "serde", derive(serde_with::SerializeDisplay, serde_with::DeserializeFromStr))]
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct ShaderGuid([u8; 16]);

impl ShaderGuid {
	/// Parse a GUID. Surrounding whitespace is ignored and either case is accepted.
	#[try_fn]
	pub fn parse(value: &str) -> Result<Self> {
		let value = value.trim();

		if value.len() != 32 {
			return Err(MaterialError::InvalidGuidLength(value.len()));
		}

		let mut bytes = [0u8; 16];
		hex::decode_to_slice(value, &mut bytes)?;

		Self(bytes)
	}
}

impl FromStr for ShaderGuid {
	type Err = MaterialError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::parse(s)
	}
}

impl Display for ShaderGuid {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", hex::encode(self.0))
	}
}

/// Known source shader GUIDs, collected from the Synty packs.
const SHADER_GUIDS: &[(&str, TargetShader)] = &[
	// Core shaders shared by most packs
	("0730dae39bc73f34796280af9875ce14", TargetShader::Polygon), // PolygonLit
	("9b98a126c8d4d7a4baeb81b16e4f7b97", TargetShader::Foliage),
	("0736e099ec10c9e46b9551b2337d0cc7", TargetShader::Particles),
	("19e269a311c45cd4482cf0ac0e694503", TargetShader::Polygon), // Triplanar
	("436db39b4e2ae5e46a17e21865226b19", TargetShader::Water),
	("5808064c5204e554c89f589a7059c558", TargetShader::Crystal),
	("de1d86872962c37429cb628a7de53613", TargetShader::Skydome),
	("4a6c8c23090929241b2a55476a46a9b1", TargetShader::Clouds),
	("dfec08fb273e4674bb5398df25a5932c", TargetShader::Foliage), // Leaf card
	("fdea4239d29733541b44cd6960afefcd", TargetShader::Crystal), // Glass
	("3b44a38ec6f81134ab0f820ac54d6a93", TargetShader::Polygon), // Generic_Standard
	// Skydome variants
	("3d532bc2d70158948859b7839127e562", TargetShader::Skydome),
	("74fa94d128fe4f348889c6f5f182e0e1", TargetShader::Skydome),
	// SciFi
	("0835602ed30128f4a88a652bf920fcaa", TargetShader::Polygon), // UV scroll
	("2b5804ffd3081d344bed894a653e3014", TargetShader::Polygon), // Hologram
	("5c2ccdfe181d55b42bd5313305f194e4", TargetShader::Polygon), // Screens
	("77e5bdd170fa4a4459dea431aba43e3c", TargetShader::Polygon), // Decals
	("972cd3fede1c33342b0f52ad57f47d90", TargetShader::Polygon), // Blinking lights
	("c48a4461fec61fc45a01e7d6a50e520f", TargetShader::Foliage), // SciFi plant
	// Horror
	("325b924500ba5804aa4b407d80084502", TargetShader::Polygon), // Neon
	("0ecc70cac2c8895439f5094ba6660db8", TargetShader::Polygon), // Grunge triplanar
	("5d828b280155912429aa717d34cd8879", TargetShader::Polygon), // Ghost
	// Urban
	("62e87ad08a1afa642830420bf8e0dd4d", TargetShader::Polygon),
	("2a33a166317493947a7be330dcc78a05", TargetShader::Polygon), // Interior parallax
	("e9556606a5f42464fa7dd78d624dc180", TargetShader::Polygon),
	("a49be8e7504a48b4fba9b0c2a7fad57b", TargetShader::Polygon),
	("1f67b66c29dfd4f45aa8cc07bf5e901a", TargetShader::Polygon),
	("a711ca3b984db6a4e81ec2d50ca4c0ca", TargetShader::Polygon),
	("5d014726978e80a43b6178cba929343b", TargetShader::Polygon),
	("a7331fc07349b124c8c15d545676f9ed", TargetShader::Polygon),
	// Fantasy
	("d0be6b296f23e8d459e94b4007017ea0", TargetShader::Polygon), // Runes
	("e8b857c3d7fea464e942e1c1f0940e96", TargetShader::Polygon), // Portal
	("e312e3877c798a44dba23093a3417a94", TargetShader::Polygon), // Potion
	("a2cae5b0e99e16249b9a2163a7087bcb", TargetShader::Foliage), // Cloth/sail wind
	// Vikings
	("d2820334f2975bb47ab3f2fffa1b4cbe", TargetShader::Skydome), // Aurora
	("b83105300c9f7fb42a6e1b790fd2bd29", TargetShader::Particles),
	("00eec7c5cd1f4c6429ffee9a690c3d16", TargetShader::Particles),
	// Apocalypse
	("f3534f26c7b573c45a1346e0634d57fc", TargetShader::Polygon),
	("e17f8fe2503580447a3784d34b316d11", TargetShader::Polygon),
	// Legacy and built-in
	("933532a4fcc9baf4fa0491de14d08ed7", TargetShader::Polygon), // URP Lit
	("56ef766d507df464fb2a1726a99c925f", TargetShader::Particles), // Heat shimmer
	("1ab581f9e0198304996581171522f458", TargetShader::Water),
	("4b0390819f518774fa1a44198298459a", TargetShader::Foliage),
	("0000000000000000f000000000000000", TargetShader::Polygon), // Built-in
	// Elven Realm
	("e854bc7dc0cde7044b9000faaf0c4e11", TargetShader::Polygon),
	("9b1e1d14d7778714391ae095571c3d4f", TargetShader::Water), // Waterfall
	("df6b3a02955954d41bb15c534388ba14", TargetShader::Polygon),
	("903fe97c2d85c8147a64932806c92eb1", TargetShader::Water),
	("ca9b700964f37d84a90b00c70d981934", TargetShader::Skydome),
	// Pro Racer
	("ab6da834753539b4989259dbf4bcc39b", TargetShader::Polygon),
	("22e3738818284144eb7ada0a62acca66", TargetShader::Polygon),
	("402ae1c33e4c28c45876b1bc945b77e6", TargetShader::Particles),
	("da24369d453e6a547aaa57ebee28fc81", TargetShader::Polygon),
	("8e5d248915e86014095ff0547bc0c755", TargetShader::Polygon),
	("1bf4a2dc982313347912f313ba25f563", TargetShader::Polygon),
	// Modular Fantasy Hero
	("e603b0446c7f2804db0c8dd0fb5c1af0", TargetShader::Polygon)
];

static SHADER_GUID_MAP: LazyLock<IndexMap<ShaderGuid, TargetShader>> = LazyLock::new(|| {
	SHADER_GUIDS
		.iter()
		.filter_map(|&(guid, shader)| ShaderGuid::parse(guid).ok().map(|guid| (guid, shader)))
		.collect()
});

/// Look up the shader a GUID is known to use. Empty, malformed and unrecognised GUIDs all give `None`.
pub fn shader_for_identifier(identifier: &str) -> Option<TargetShader> {
	let guid = ShaderGuid::parse(identifier).ok()?;
	SHADER_GUID_MAP.get(&guid).copied()
}

/// Every known shader GUID with the shader it maps to, in table order.
pub fn known_identifiers() -> impl Iterator<Item = (ShaderGuid, TargetShader)> {
	SHADER_GUID_MAP.iter().map(|(guid, shader)| (*guid, *shader))
}

#[cfg(test)]
mod tests {
	use strum::IntoEnumIterator;

	use super::*;

	#[test]
	fn test_every_static_guid_parses() {
		assert_eq!(SHADER_GUID_MAP.len(), SHADER_GUIDS.len());
		assert_eq!(SHADER_GUIDS.len(), 56);
	}

	#[test]
	fn test_shader_names_round_trip() {
		for shader in TargetShader::iter() {
			assert_eq!(shader.name().parse::<TargetShader>(), Ok(shader));
			assert_eq!(shader.file_name().parse::<TargetShader>(), Ok(shader));
			assert_eq!(shader.to_string(), shader.name());
		}

		assert_eq!(TargetShader::COUNT, 7);
		assert_eq!(
			"terrain.gdshader".parse::<TargetShader>(),
			Err(MaterialError::UnknownShader("terrain.gdshader".into()))
		);
	}

	#[test]
	fn test_guid_parse() {
		let guid = ShaderGuid::parse(" 9B98A126C8D4D7A4BAEB81B16E4F7B97 ").unwrap();
		assert_eq!(guid.to_string(), "9b98a126c8d4d7a4baeb81b16e4f7b97");

		assert_eq!(ShaderGuid::parse(""), Err(MaterialError::InvalidGuidLength(0)));
		assert!(matches!(
			ShaderGuid::parse("unknown_guid_1234567890123456789"),
			Err(MaterialError::InvalidHex(_))
		));
	}

	#[test]
	fn test_identifier_lookup() {
		assert_eq!(
			shader_for_identifier("9b98a126c8d4d7a4baeb81b16e4f7b97"),
			Some(TargetShader::Foliage)
		);
		assert_eq!(
			shader_for_identifier("0730dae39bc73f34796280af9875ce14"),
			Some(TargetShader::Polygon)
		);
		assert_eq!(shader_for_identifier("ffffffffffffffffffffffffffffffff"), None);
		assert_eq!(shader_for_identifier("not-a-guid"), None);
		assert_eq!(shader_for_identifier(""), None);
	}
}
