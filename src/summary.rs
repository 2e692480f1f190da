use std::fmt::Display;

use indexmap::IndexMap;

use crate::{
	shader::{known_identifiers, TargetShader},
	tables
};

/// Sizes of the built-in lookup tables, for checking what a build knows about.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MappingSummary {
	pub identifiers: usize,
	pub name_patterns: usize,
	pub alpha_fix_properties: usize,
	pub boolean_encoded_properties: usize,

	/// Known GUIDs per shader, most first.
	pub identifiers_by_shader: IndexMap<TargetShader, usize>
}

impl MappingSummary {
	pub fn collect() -> Self {
		let mut identifiers_by_shader = IndexMap::<TargetShader, usize>::new();

		for (_, shader) in known_identifiers() {
			*identifiers_by_shader.entry(shader).or_default() += 1;
		}

		identifiers_by_shader.sort_by(|_, a, _, b| b.cmp(a));

		Self {
			identifiers: known_identifiers().count(),
			name_patterns: tables::name_patterns().len(),
			alpha_fix_properties: tables::alpha_fix_count(),
			boolean_encoded_properties: tables::boolean_encoded_count(),
			identifiers_by_shader
		}
	}
}

impl Display for MappingSummary {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		writeln!(f, "Known shader GUIDs: {}", self.identifiers)?;
		writeln!(f, "Name patterns: {}", self.name_patterns)?;
		writeln!(f, "Alpha-fix properties: {}", self.alpha_fix_properties)?;
		writeln!(f, "Boolean-encoded properties: {}", self.boolean_encoded_properties)?;
		writeln!(f, "GUIDs by target shader:")?;

		for (shader, count) in &self.identifiers_by_shader {
			writeln!(f, "  {}: {}", shader.file_name(), count)?;
		}

		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_summary_counts() {
		let summary = MappingSummary::collect();

		assert_eq!(summary.identifiers, 56);
		assert_eq!(summary.name_patterns, 20);
		assert_eq!(summary.identifiers_by_shader.values().sum::<usize>(), 56);
		assert_eq!(summary.identifiers_by_shader.first(), Some((&TargetShader::Polygon, &34)));
	}

	#[test]
	fn test_summary_display() {
		let text = MappingSummary::collect().to_string();

		assert!(text.starts_with("Known shader GUIDs: 56\n"));
		assert!(text.contains("  polygon.gdshader: 34\n"));
	}
}
