/// Minimum detection score a specialized shader needs before it is chosen over the default.
pub const ACCEPTANCE_THRESHOLD: u32 = 20;

/// Score added per scoring property a material carries.
pub const PROPERTY_BONUS: u32 = 10;

/// Blend modes at or above this value are translucent; their zero alphas are left alone.
pub const TRANSPARENT_BLEND_THRESHOLD: f32 = 1.0;

/// Tunables for [`Translator`](crate::Translator).
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Clone, Debug, PartialEq)]
pub struct TranslatorConfig {
	pub acceptance_threshold: u32,
	pub property_bonus: u32,
	pub transparent_blend_threshold: f32,

	/// Let specialized shaders fall back to the generic shader's mapping tables for properties they don't map
	/// themselves.
	pub inherit_generic_tables: bool
}

impl Default for TranslatorConfig {
	fn default() -> Self {
		Self {
			acceptance_threshold: ACCEPTANCE_THRESHOLD,
			property_bonus: PROPERTY_BONUS,
			transparent_blend_threshold: TRANSPARENT_BLEND_THRESHOLD,
			inherit_generic_tables: false
		}
	}
}
