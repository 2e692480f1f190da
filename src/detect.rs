//! Picking a target shader for a source material.
//!
//! Three kinds of evidence are combined, strongest first:
//!
//! 1. The source shader GUID. A GUID known to belong to a specialized shader decides on its own.
//! 2. The material name. Every matching pattern adds its weight to its shader's score.
//! 3. The material's properties. Each scoring property of a specialized shader adds a fixed bonus to it.
//!
//! The best score wins if it reaches the acceptance threshold; otherwise the material gets the default shader.

use indexmap::IndexMap;
#[cfg(feature = "tracing")]
use tracing::{debug, trace};

use crate::{
	config::TranslatorConfig,
	material::Color,
	shader::{shader_for_identifier, TargetShader},
	tables
};

/// What decided a detection.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "camelCase"))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Evidence {
	/// The source shader GUID is known to belong to the shader.
	Identifier,

	/// The shader had the highest score, at or above the acceptance threshold.
	Scored { score: u32 },

	/// Nothing conclusive; the default shader was used.
	Fallback
}

/// The outcome of shader detection.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Clone, Debug, PartialEq)]
pub struct Detection {
	pub shader: TargetShader,
	pub evidence: Evidence,

	/// Score per shader, in the order each shader first scored. Empty when the GUID decided.
	pub scores: IndexMap<TargetShader, u32>
}

impl Detection {
	/// Whether the GUID decided, in which case no further validation applies.
	pub fn is_authoritative(&self) -> bool {
		self.evidence == Evidence::Identifier
	}
}

pub(crate) fn score_name(name: &str, scores: &mut IndexMap<TargetShader, u32>) {
	for pattern in tables::name_patterns() {
		if pattern.regex.is_match(name) {
			#[cfg(feature = "tracing")]
			trace!(
				name,
				pattern = pattern.regex.as_str(),
				shader = %pattern.shader,
				weight = pattern.weight,
				"name pattern matched"
			);
			let score = scores.entry(pattern.shader).or_default();
			*score = score.saturating_add(pattern.weight);
		}
	}
}

pub(crate) fn score_properties(
	scalars: &[&str],
	colors: &[&str],
	bonus: u32,
	scores: &mut IndexMap<TargetShader, u32>
) {
	for shader in tables::PROPERTY_BONUS_ORDER {
		let hits = tables::profile(shader).scoring_hits(scalars, colors);

		if hits > 0 {
			#[cfg(feature = "tracing")]
			trace!(shader = %shader, hits, "scoring properties present");
			let score = scores.entry(shader).or_default();
			*score = score.saturating_add(hits.saturating_mul(bonus));
		}
	}
}

/// The highest scoring shader. Equal scores go to the shader that scored first.
pub(crate) fn best_score(scores: &IndexMap<TargetShader, u32>) -> Option<(TargetShader, u32)> {
	scores.iter().fold(None, |best, (&shader, &score)| match best {
		Some((_, best_score)) if best_score >= score => best,
		_ => Some((shader, score))
	})
}

pub(crate) fn classify(
	config: &TranslatorConfig,
	identifier: &str,
	name: &str,
	scalars: Option<&IndexMap<String, f32>>,
	colors: Option<&IndexMap<String, Color>>
) -> Detection {
	if let Some(shader) = shader_for_identifier(identifier).filter(|shader| !shader.is_default()) {
		#[cfg(feature = "tracing")]
		debug!(name, identifier, shader = %shader, "shader decided by GUID");

		return Detection {
			shader,
			evidence: Evidence::Identifier,
			scores: IndexMap::new()
		};
	}

	let mut scores = IndexMap::new();
	score_name(name, &mut scores);

	if scalars.is_some() || colors.is_some() {
		let scalars = scalars.map(|x| x.keys().map(String::as_str).collect::<Vec<_>>()).unwrap_or_default();
		let colors = colors.map(|x| x.keys().map(String::as_str).collect::<Vec<_>>()).unwrap_or_default();

		score_properties(&scalars, &colors, config.property_bonus, &mut scores);
	}

	match best_score(&scores) {
		Some((shader, score)) if score >= config.acceptance_threshold => {
			#[cfg(feature = "tracing")]
			debug!(name, shader = %shader, score, "shader decided by score");

			Detection {
				shader,
				evidence: Evidence::Scored { score },
				scores
			}
		}

		_ => {
			#[cfg(feature = "tracing")]
			debug!(name, scores = ?scores, "no conclusive evidence, using default shader");

			Detection {
				shader: TargetShader::DEFAULT,
				evidence: Evidence::Fallback,
				scores
			}
		}
	}
}

/// Detect the target shader for a material with the default settings.
///
/// `scalars` and `colors` are optional; without them only the GUID and name are considered.
pub fn detect(
	identifier: &str,
	name: &str,
	scalars: Option<&IndexMap<String, f32>>,
	colors: Option<&IndexMap<String, Color>>
) -> TargetShader {
	classify(&TranslatorConfig::default(), identifier, name, scalars, colors).shader
}

/// Detect a shader from the material name alone. Returns `None` when no shader scores enough, in which case the
/// material is worth flagging for manual review.
pub fn detect_from_name(name: &str) -> Option<TargetShader> {
	classify_name(&TranslatorConfig::default(), name)
}

/// Pick a shader for an entry of a mesh material list.
///
/// Materials on the stock shader always use the default. Custom shader materials are detected by name. The flag is
/// `false` when the default had to be used for a custom shader material.
pub fn determine_shader(name: &str, uses_custom_shader: bool) -> (TargetShader, bool) {
	decide_slot(&TranslatorConfig::default(), name, uses_custom_shader)
}

pub(crate) fn classify_name(config: &TranslatorConfig, name: &str) -> Option<TargetShader> {
	let mut scores = IndexMap::new();
	score_name(name, &mut scores);

	best_score(&scores)
		.filter(|&(_, score)| score >= config.acceptance_threshold)
		.map(|(shader, _)| shader)
}

pub(crate) fn decide_slot(config: &TranslatorConfig, name: &str, uses_custom_shader: bool) -> (TargetShader, bool) {
	if !uses_custom_shader {
		return (TargetShader::DEFAULT, true);
	}

	match classify_name(config, name) {
		Some(shader) => (shader, true),
		None => {
			#[cfg(feature = "tracing")]
			debug!(name, "no shader matched custom material name");
			(TargetShader::DEFAULT, false)
		}
	}
}
