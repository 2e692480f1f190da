//! Static lookup data, built once on first use and never mutated afterwards.

use std::sync::LazyLock;

use indexmap::{IndexMap, IndexSet};
use regex::Regex;
use tryvial::try_fn;

use crate::{material::Result, shader::TargetShader};

mod defaults;
mod evidence;
mod patterns;
mod properties;
mod quirks;

pub use defaults::DefaultValue;
pub use quirks::BLEND_MODE_PROPERTY;

use defaults::Defaults;
use evidence::{Characteristic, Scoring};
use properties::PropertyMap;

/// Everything the engine knows about one target shader.
#[derive(Debug)]
pub(crate) struct ShaderProfile {
	pub shader: TargetShader,

	pub textures: IndexMap<&'static str, &'static str>,
	pub scalars: IndexMap<&'static str, &'static str>,
	pub colors: IndexMap<&'static str, &'static str>,

	pub characteristic_textures: IndexSet<&'static str>,
	pub characteristic_scalars: IndexSet<&'static str>,
	pub characteristic_colors: IndexSet<&'static str>,

	pub scoring_scalars: IndexSet<&'static str>,
	pub scoring_colors: IndexSet<&'static str>,

	pub defaults: Defaults,
	pub placeholder: Defaults
}

/// The kinds of source property, each with its own mapping table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum PropertyClass {
	Texture,
	Scalar,
	Color
}

struct ProfileSource {
	textures: PropertyMap,
	scalars: PropertyMap,
	colors: PropertyMap,
	characteristic: Characteristic,
	scoring: Scoring,
	defaults: Defaults,
	placeholder: Defaults
}

impl ShaderProfile {
	fn build(shader: TargetShader) -> Self {
		let source = match shader {
			TargetShader::Polygon => ProfileSource {
				textures: properties::TEXTURES_POLYGON,
				scalars: properties::SCALARS_POLYGON,
				colors: properties::COLORS_POLYGON,
				characteristic: evidence::CHARACTERISTIC_POLYGON,
				scoring: evidence::SCORING_POLYGON,
				defaults: defaults::DEFAULTS_POLYGON,
				placeholder: defaults::DEFAULTS_NONE
			},

			TargetShader::Foliage => ProfileSource {
				textures: properties::TEXTURES_FOLIAGE,
				scalars: properties::SCALARS_FOLIAGE,
				colors: properties::COLORS_FOLIAGE,
				characteristic: evidence::CHARACTERISTIC_FOLIAGE,
				scoring: evidence::SCORING_FOLIAGE,
				defaults: defaults::DEFAULTS_FOLIAGE,
				placeholder: defaults::PLACEHOLDER_FOLIAGE
			},

			TargetShader::Water => ProfileSource {
				textures: properties::TEXTURES_WATER,
				scalars: properties::SCALARS_WATER,
				colors: properties::COLORS_WATER,
				characteristic: evidence::CHARACTERISTIC_WATER,
				scoring: evidence::SCORING_WATER,
				defaults: defaults::DEFAULTS_WATER,
				placeholder: defaults::PLACEHOLDER_WATER
			},

			TargetShader::Crystal => ProfileSource {
				textures: properties::TEXTURES_CRYSTAL,
				scalars: properties::SCALARS_CRYSTAL,
				colors: properties::COLORS_CRYSTAL,
				characteristic: evidence::CHARACTERISTIC_CRYSTAL,
				scoring: evidence::SCORING_CRYSTAL,
				defaults: defaults::DEFAULTS_CRYSTAL,
				placeholder: defaults::PLACEHOLDER_CRYSTAL
			},

			TargetShader::Particles => ProfileSource {
				textures: properties::TEXTURES_PARTICLES,
				scalars: properties::SCALARS_PARTICLES,
				colors: properties::COLORS_PARTICLES,
				characteristic: evidence::CHARACTERISTIC_PARTICLES,
				scoring: evidence::SCORING_PARTICLES,
				defaults: defaults::DEFAULTS_NONE,
				placeholder: defaults::DEFAULTS_NONE
			},

			TargetShader::Skydome => ProfileSource {
				textures: properties::TEXTURES_SKYDOME,
				scalars: properties::SCALARS_SKYDOME,
				colors: properties::COLORS_SKYDOME,
				characteristic: evidence::CHARACTERISTIC_SKYDOME,
				scoring: evidence::SCORING_SKYDOME,
				defaults: defaults::DEFAULTS_NONE,
				placeholder: defaults::DEFAULTS_NONE
			},

			TargetShader::Clouds => ProfileSource {
				textures: properties::TEXTURES_CLOUDS,
				scalars: properties::SCALARS_CLOUDS,
				colors: properties::COLORS_CLOUDS,
				characteristic: evidence::CHARACTERISTIC_CLOUDS,
				scoring: evidence::SCORING_CLOUDS,
				defaults: defaults::DEFAULTS_NONE,
				placeholder: defaults::DEFAULTS_NONE
			}
		};

		let (characteristic_textures, characteristic_scalars, characteristic_colors) = source.characteristic;
		let (scoring_scalars, scoring_colors) = source.scoring;

		Self {
			shader,
			textures: source.textures.iter().copied().collect(),
			scalars: source.scalars.iter().copied().collect(),
			colors: source.colors.iter().copied().collect(),
			characteristic_textures: characteristic_textures.iter().copied().collect(),
			characteristic_scalars: characteristic_scalars.iter().copied().collect(),
			characteristic_colors: characteristic_colors.iter().copied().collect(),
			scoring_scalars: scoring_scalars.iter().copied().collect(),
			scoring_colors: scoring_colors.iter().copied().collect(),
			defaults: source.defaults,
			placeholder: source.placeholder
		}
	}

	/// The shader parameter a source property maps to.
	pub fn param(&self, class: PropertyClass, identifier: &str) -> Option<&'static str> {
		let table = match class {
			PropertyClass::Texture => &self.textures,
			PropertyClass::Scalar => &self.scalars,
			PropertyClass::Color => &self.colors
		};

		table.get(identifier).copied()
	}

	/// Number of scoring properties present. Both skydome gradient colours together count extra.
	pub fn scoring_hits(&self, scalars: &[&str], colors: &[&str]) -> u32 {
		let mut hits = scalars.iter().filter(|name| self.scoring_scalars.contains(**name)).count() as u32;
		hits += colors.iter().filter(|name| self.scoring_colors.contains(**name)).count() as u32;

		if self.shader == TargetShader::Skydome {
			let (top, bottom) = evidence::SKYDOME_GRADIENT_PAIR;

			if colors.contains(&top) && colors.contains(&bottom) {
				hits += evidence::SKYDOME_GRADIENT_PAIR_BONUS;
			}
		}

		hits
	}

	/// The first texture slot, scalar or colour that is characteristic of this shader.
	pub fn find_characteristic<'a>(
		&self,
		textures: &[&'a str],
		scalars: &[&'a str],
		colors: &[&'a str]
	) -> Option<&'a str> {
		textures
			.iter()
			.find(|name| self.characteristic_textures.contains(**name))
			.or_else(|| scalars.iter().find(|name| self.characteristic_scalars.contains(**name)))
			.or_else(|| colors.iter().find(|name| self.characteristic_colors.contains(**name)))
			.copied()
	}
}

static PROFILES: LazyLock<[ShaderProfile; 7]> = LazyLock::new(|| {
	[
		TargetShader::Polygon,
		TargetShader::Foliage,
		TargetShader::Water,
		TargetShader::Crystal,
		TargetShader::Particles,
		TargetShader::Skydome,
		TargetShader::Clouds
	]
	.map(ShaderProfile::build)
});

pub(crate) fn profile(shader: TargetShader) -> &'static ShaderProfile {
	&PROFILES[shader.index()]
}

/// Order in which specialized shaders receive their property bonus. Ties between equal totals go to whichever shader
/// scored first, so this matters when the name matched nothing.
pub(crate) const PROPERTY_BONUS_ORDER: [TargetShader; 6] = [
	TargetShader::Water,
	TargetShader::Foliage,
	TargetShader::Clouds,
	TargetShader::Particles,
	TargetShader::Skydome,
	TargetShader::Crystal
];

#[derive(Debug)]
pub(crate) struct NamePattern {
	pub regex: Regex,
	pub shader: TargetShader,
	pub weight: u32
}

impl NamePattern {
	/// Compile a pattern to match case-insensitively.
	#[try_fn]
	pub fn new(pattern: &str, shader: TargetShader, weight: u32) -> Result<Self> {
		Self {
			regex: Regex::new(&format!("(?i){pattern}"))?,
			shader,
			weight
		}
	}
}

static NAME_PATTERNS: LazyLock<Vec<NamePattern>> = LazyLock::new(|| {
	patterns::NAME_PATTERNS
		.iter()
		.filter_map(|&(pattern, shader, weight)| match NamePattern::new(pattern, shader, weight) {
			Ok(pattern) => Some(pattern),

			Err(error) => {
				#[cfg(feature = "tracing")]
				tracing::error!(pattern, %error, "name pattern failed to compile and will never match");

				#[cfg(not(feature = "tracing"))]
				let _ = error;

				None
			}
		})
		.collect()
});

pub(crate) fn name_patterns() -> &'static [NamePattern] {
	&NAME_PATTERNS
}

static ALPHA_FIX: LazyLock<IndexSet<&'static str>> =
	LazyLock::new(|| quirks::ALPHA_FIX_PROPERTIES.iter().copied().collect());

static BOOLEAN_FLOAT: LazyLock<IndexSet<&'static str>> =
	LazyLock::new(|| quirks::BOOLEAN_FLOAT_PROPERTIES.iter().copied().collect());

/// Whether a colour property is known to be stored with a bogus zero alpha.
pub fn is_alpha_fix_eligible(identifier: &str) -> bool {
	ALPHA_FIX.contains(identifier)
}

/// Whether a scalar property is really a 0/1 toggle.
pub fn is_boolean_encoded(identifier: &str) -> bool {
	BOOLEAN_FLOAT.contains(identifier)
}

pub(crate) fn alpha_fix_count() -> usize {
	ALPHA_FIX.len()
}

pub(crate) fn boolean_encoded_count() -> usize {
	BOOLEAN_FLOAT.len()
}

/// The parameters `shader` falls back to when a material leaves them unset.
pub fn shader_defaults(shader: TargetShader) -> impl Iterator<Item = (&'static str, DefaultValue)> {
	profile(shader).defaults.iter().copied()
}

#[cfg(test)]
mod tests {
	use strum::IntoEnumIterator;

	use super::*;
	use crate::material::MaterialError;

	#[test]
	fn test_profiles_are_indexed_by_shader() {
		for shader in TargetShader::iter() {
			assert_eq!(profile(shader).shader, shader);
		}
	}

	#[test]
	fn test_every_pattern_compiles() {
		for &(pattern, shader, weight) in patterns::NAME_PATTERNS {
			assert!(NamePattern::new(pattern, shader, weight).is_ok(), "{pattern} does not compile");
		}

		assert_eq!(name_patterns().len(), patterns::NAME_PATTERNS.len());
		assert_eq!(name_patterns().len(), 20);
	}

	#[test]
	fn test_broken_pattern_is_an_error() {
		assert!(matches!(
			NamePattern::new("(unclosed", TargetShader::Water, 10),
			Err(MaterialError::InvalidPattern(_))
		));
	}

	#[test]
	fn test_patterns_ignore_case() {
		let triplanar = &name_patterns()[0];
		assert!(triplanar.regex.is_match("Rock_TRIPLANAR_01"));
		assert_eq!(triplanar.shader, TargetShader::Polygon);
		assert_eq!(triplanar.weight, 60);
	}

	#[test]
	fn test_only_specialized_shaders_get_property_bonus() {
		assert!(!PROPERTY_BONUS_ORDER.contains(&TargetShader::DEFAULT));
		assert!(profile(TargetShader::DEFAULT).scoring_scalars.is_empty());
		assert!(profile(TargetShader::DEFAULT).characteristic_textures.is_empty());
	}

	#[test]
	fn test_scoring_excludes_shared_depth_colours() {
		for shader in [TargetShader::Water, TargetShader::Crystal] {
			let profile = profile(shader);
			assert!(!profile.scoring_colors.contains("_Deep_Color"));
			assert!(!profile.scoring_colors.contains("_Shallow_Color"));
		}
	}

	#[test]
	fn test_skydome_gradient_pair_bonus() {
		let skydome = profile(TargetShader::Skydome);

		assert_eq!(skydome.scoring_hits(&[], &["_Top_Color"]), 1);
		assert_eq!(skydome.scoring_hits(&["_Falloff"], &["_Top_Color", "_Bottom_Color"]), 5);
		assert_eq!(
			profile(TargetShader::Clouds).scoring_hits(&[], &["_Top_Color", "_Bottom_Color"]),
			0
		);
	}

	#[test]
	fn test_characteristic_lookup_checks_every_class() {
		let foliage = profile(TargetShader::Foliage);

		assert_eq!(foliage.find_characteristic(&["_Leaf_Texture"], &[], &[]), Some("_Leaf_Texture"));
		assert_eq!(
			foliage.find_characteristic(&[], &[], &["_Trunk_Base_Color"]),
			Some("_Trunk_Base_Color")
		);
		assert_eq!(foliage.find_characteristic(&["_Base_Texture"], &["_Smoothness"], &["_Color"]), None);
	}

	#[test]
	fn test_param_lookup() {
		let water = profile(TargetShader::Water);

		assert_eq!(water.param(PropertyClass::Scalar, "_FoamDepth"), Some("shore_foam_intensity"));
		assert_eq!(water.param(PropertyClass::Color, "_FoamDepth"), None);
		assert_eq!(profile(TargetShader::Skydome).param(PropertyClass::Scalar, "_Distance"), Some("distance_"));
	}

	#[test]
	fn test_quirk_sets() {
		assert!(is_alpha_fix_eligible("_Leaf_Base_Color"));
		assert!(!is_alpha_fix_eligible("_Fog_Color"));
		assert!(is_boolean_encoded("_Enable_Breeze"));
		assert!(!is_boolean_encoded("_Breeze_Strength"));
	}

	#[test]
	fn test_crystal_defaults() {
		assert_eq!(
			shader_defaults(TargetShader::Crystal).collect::<Vec<_>>(),
			[("opacity", DefaultValue::Scalar(0.7))]
		);
		assert_eq!(shader_defaults(TargetShader::Clouds).count(), 0);
	}
}
