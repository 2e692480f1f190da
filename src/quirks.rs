//! Corrections for the two ways the source format misencodes values.

use indexmap::IndexMap;
#[cfg(feature = "tracing")]
use tracing::debug;

use crate::{
	material::Color,
	tables::{self, BLEND_MODE_PROPERTY}
};

/// Restore the alpha of an opaque colour that was stored with alpha 0.
///
/// Returns the corrected colour, or `None` when the colour should be kept as is: the property isn't known to be
/// affected, the alpha isn't zero, the colour is black, or the material's blend mode is translucent.
pub fn fix_alpha_zero(
	color: Color,
	identifier: &str,
	scalars: &IndexMap<String, f32>,
	transparent_threshold: f32
) -> Option<Color> {
	if !tables::is_alpha_fix_eligible(identifier) || color.a != 0.0 || !color.has_rgb() {
		return None;
	}

	if let Some(&mode) = scalars.get(BLEND_MODE_PROPERTY) {
		if mode >= transparent_threshold {
			#[cfg(feature = "tracing")]
			debug!(identifier, mode, "keeping zero alpha on translucent material");
			return None;
		}
	}

	#[cfg(feature = "tracing")]
	debug!(identifier, "corrected zero alpha to 1.0");

	Some(color.with_alpha(1.0))
}

/// Split the 0/1 toggles out of a material's scalars.
///
/// Returns the remaining scalars and the toggles, both still keyed by source name. Any non-zero value is `true`.
pub fn extract_booleans(scalars: &IndexMap<String, f32>) -> (IndexMap<&str, f32>, IndexMap<&str, bool>) {
	let mut remaining = IndexMap::new();
	let mut booleans = IndexMap::new();

	for (identifier, &value) in scalars {
		if tables::is_boolean_encoded(identifier) {
			booleans.insert(identifier.as_str(), value != 0.0);
		} else {
			remaining.insert(identifier.as_str(), value);
		}
	}

	(remaining, booleans)
}

/// Shader parameter name for a source property no mapping table knows: `_Enable_Breeze` becomes `enable_breeze`
/// and `_BaseColor` becomes `base_color`.
pub fn derive_param_name(identifier: &str) -> String {
	let mut name = String::with_capacity(identifier.len() + 4);

	for (i, c) in identifier.trim_start_matches('_').chars().enumerate() {
		if (c == '_' || (c.is_uppercase() && i > 0)) && !name.ends_with('_') {
			name.push('_');
		}

		if c != '_' {
			name.extend(c.to_lowercase());
		}
	}

	name
}

#[cfg(test)]
mod tests {
	use super::*;

	fn scalars(values: &[(&str, f32)]) -> IndexMap<String, f32> {
		values.iter().map(|&(name, value)| (name.to_owned(), value)).collect()
	}

	#[test]
	fn test_alpha_fixed_on_opaque_material() {
		let fixed = fix_alpha_zero(Color::new(0.2, 0.6, 0.1, 0.0), "_Leaf_Base_Color", &scalars(&[]), 1.0);
		assert_eq!(fixed, Some(Color::new(0.2, 0.6, 0.1, 1.0)));

		let fixed = fix_alpha_zero(
			Color::new(0.2, 0.6, 0.1, 0.0),
			"_Leaf_Base_Color",
			&scalars(&[("_Mode", 0.0)]),
			1.0
		);
		assert_eq!(fixed.map(|c| c.a), Some(1.0));
	}

	#[test]
	fn test_alpha_kept_on_translucent_material() {
		let color = Color::new(0.2, 0.6, 0.1, 0.0);

		assert_eq!(fix_alpha_zero(color, "_Leaf_Base_Color", &scalars(&[("_Mode", 1.0)]), 1.0), None);
		assert_eq!(fix_alpha_zero(color, "_Leaf_Base_Color", &scalars(&[("_Mode", 3.0)]), 1.0), None);
	}

	#[test]
	fn test_alpha_kept_on_black_or_ineligible() {
		assert_eq!(fix_alpha_zero(Color::new(0.0, 0.0, 0.0, 0.0), "_Color", &scalars(&[]), 1.0), None);
		assert_eq!(fix_alpha_zero(Color::new(1.0, 0.0, 0.0, 0.0), "_Fog_Color", &scalars(&[]), 1.0), None);
		assert_eq!(fix_alpha_zero(Color::new(1.0, 0.0, 0.0, 0.5), "_Color", &scalars(&[]), 1.0), None);
	}

	#[test]
	fn test_extract_booleans() {
		let source = scalars(&[("_Enable_Breeze", 1.0), ("_Breeze_Strength", 0.4), ("_Enable_Frosting", 0.0)]);
		let (remaining, booleans) = extract_booleans(&source);

		assert_eq!(remaining.into_iter().collect::<Vec<_>>(), [("_Breeze_Strength", 0.4)]);
		assert_eq!(
			booleans.into_iter().collect::<Vec<_>>(),
			[("_Enable_Breeze", true), ("_Enable_Frosting", false)]
		);
	}

	#[test]
	fn test_any_nonzero_is_true() {
		let source = scalars(&[("_Enable_Snow", 0.5), ("_AlphaClip", -1.0)]);
		let (_, booleans) = extract_booleans(&source);

		assert!(booleans.values().all(|&on| on));
	}

	#[test]
	fn test_derive_param_name() {
		assert_eq!(derive_param_name("_Enable_Breeze"), "enable_breeze");
		assert_eq!(derive_param_name("_BaseColor"), "base_color");
		assert_eq!(derive_param_name("_VertexOffset_Toggle"), "vertex_offset_toggle");
		assert_eq!(derive_param_name("__Leaf__Color"), "leaf_color");
		assert_eq!(derive_param_name("_AlphaClip"), "alpha_clip");
		assert_eq!(derive_param_name(""), "");
	}
}
