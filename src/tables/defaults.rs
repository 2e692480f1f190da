use crate::material::Color;

/// A fallback value for a shader parameter.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", content = "value"))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DefaultValue {
	Scalar(f32),
	Boolean(bool),
	Color(Color)
}

pub(super) type Defaults = &'static [(&'static str, DefaultValue)];

pub(super) const DEFAULTS_POLYGON: Defaults = &[
	("smoothness", DefaultValue::Scalar(0.5)),
	("metallic", DefaultValue::Scalar(0.0))
];

// Matte leaves, slightly rough bark.
pub(super) const DEFAULTS_FOLIAGE: Defaults = &[
	("leaf_smoothness", DefaultValue::Scalar(0.1)),
	("trunk_smoothness", DefaultValue::Scalar(0.15)),
	("leaf_metallic", DefaultValue::Scalar(0.0)),
	("trunk_metallic", DefaultValue::Scalar(0.0))
];

pub(super) const DEFAULTS_WATER: Defaults = &[
	("smoothness", DefaultValue::Scalar(0.95)),
	("metallic", DefaultValue::Scalar(0.0))
];

pub(super) const DEFAULTS_CRYSTAL: Defaults = &[("opacity", DefaultValue::Scalar(0.7))];

pub(super) const DEFAULTS_NONE: Defaults = &[];

// Placeholders have no source data at all, so they get a visible starting look on top of the defaults.
pub(super) const PLACEHOLDER_CRYSTAL: Defaults = &[
	("base_color", DefaultValue::Color(Color::new(0.5, 0.7, 1.0, 1.0))),
	("enable_fresnel", DefaultValue::Boolean(true))
];

pub(super) const PLACEHOLDER_WATER: Defaults = &[
	("deep_color", DefaultValue::Color(Color::new(0.0, 0.2, 0.4, 1.0))),
	("shallow_color", DefaultValue::Color(Color::new(0.2, 0.5, 0.7, 1.0)))
];

pub(super) const PLACEHOLDER_FOLIAGE: Defaults =
	&[("leaf_base_color", DefaultValue::Color(Color::new(0.2, 0.5, 0.2, 1.0)))];
