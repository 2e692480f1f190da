//! Properties that count as evidence for a specialized shader.
//!
//! `CHARACTERISTIC_*` back the validation gate. `SCORING_*` feed the property bonus during detection
//! and leave out the depth colours shared by water and crystal.

pub(super) type NameList = &'static [&'static str];

/// Textures, scalars and colours, in that order.
pub(super) type Characteristic = (NameList, NameList, NameList);

/// Scalars and colours, in that order.
pub(super) type Scoring = (NameList, NameList);

pub(super) const CHARACTERISTIC_POLYGON: Characteristic = (&[], &[], &[]);

pub(super) const CHARACTERISTIC_FOLIAGE: Characteristic = (
	&[
		"_Leaf_Texture",
		"_Trunk_Texture",
		"_Leaf_Normal",
		"_Trunk_Normal",
		"_Breeze_Noise_Map",
		"_Leaf_Ambient_Occlusion",
		"_Trunk_Ambient_Occlusion"
	],
	&[
		"_Breeze_Strength",
		"_Light_Wind_Strength",
		"_Strong_Wind_Strength",
		"_Leaf_Smoothness",
		"_LeafSmoothness",
		"_Trunk_Smoothness",
		"_TrunkSmoothness",
		"_Leaf_Metallic",
		"_Trunk_Metallic"
	],
	&["_Leaf_Base_Color", "_Trunk_Base_Color"]
);

pub(super) const CHARACTERISTIC_CRYSTAL: Characteristic = (
	&[
		"_Refraction_Height",
		"_Refraction_Texture",
		"_Top_Albedo",
		"_Base_Albedo",
		"_Top_Normal",
		"_Base_Normal"
	],
	&[
		"_Fresnel_Power",
		"_Refraction_Strength",
		"_Deep_Depth",
		"_Shallow_Depth",
		"_Enable_Fresnel",
		"_Enable_Refraction"
	],
	&["_Deep_Color", "_Shallow_Color", "_Fresnel_Color", "_Refraction_Color"]
);

pub(super) const CHARACTERISTIC_WATER: Characteristic = (
	&[
		"_Caustics_Flipbook",
		"_Foam_Noise_Texture",
		"_Shore_Foam_Noise_Texture",
		"_Scrolling_Texture",
		"_Water_Normal_Texture",
		"_Foam_Texture"
	],
	&[
		"_Maximum_Depth",
		"_Shore_Wave_Speed",
		"_Ocean_Wave_Height",
		"_Shore_Foam_Intensity",
		"_Caustics_Intensity",
		"_Base_Opacity",
		"_Shallows_Opacity"
	],
	&[
		"_Shallow_Color",
		"_Deep_Color",
		"_Very_Deep_Color",
		"_Foam_Color",
		"_Caustics_Color"
	]
);

pub(super) const CHARACTERISTIC_PARTICLES: Characteristic = (
	&[],
	&[
		"_Soft_Power",
		"_Soft_Distance",
		"_Camera_Fade_Near",
		"_Camera_Fade_Far",
		"_View_Edge_Power",
		"_Fog_Density"
	],
	&["_Fog_Color"]
);

pub(super) const CHARACTERISTIC_SKYDOME: Characteristic =
	(&[], &["_Falloff", "_Offset", "_Distance"], &["_Top_Color", "_Bottom_Color"]);

pub(super) const CHARACTERISTIC_CLOUDS: Characteristic = (
	&[],
	&[
		"_Light_Intensity",
		"_Scattering_Multiplier",
		"_Cloud_Speed",
		"_Cloud_Strength",
		"_CloudCoverage"
	],
	&["_Scattering_Color", "_Aurora_Color_01", "_Aurora_Color_02"]
);

// The generic default never receives a property bonus.
pub(super) const SCORING_POLYGON: Scoring = (&[], &[]);

pub(super) const SCORING_WATER: Scoring = (
	&[
		"_Enable_Shore_Foam",
		"_Enable_Shore_Waves",
		"_Enable_Caustics",
		"_Enable_Ocean_Wave",
		"_Shore_Foam_Intensity",
		"_Water_Depth",
		"_Depth_Distance",
		"_Deep_Height",
		"_Shallow_Intensity",
		"_Shore_Wave_Speed",
		"_Ocean_Wave_Height",
		"_Ocean_Wave_Speed",
		"_Caustics_Intensity",
		"_Maximum_Depth",
		"_Base_Opacity",
		"_Shallows_Opacity",
		"_Very_Deep_Height"
	],
	&[
		"_Water_Deep_Color",
		"_Water_Shallow_Color",
		"_Foam_Color",
		"_Shore_Wave_Color_Tint",
		"_Shore_Foam_Color_Tint",
		"_Caustics_Color"
	]
);

pub(super) const SCORING_FOLIAGE: Scoring = (
	&[
		"_Enable_Breeze",
		"_Breeze_Strength",
		"_Enable_Light_Wind",
		"_Light_Wind_Strength",
		"_Enable_Strong_Wind",
		"_Strong_Wind_Strength",
		"_Wind_Enabled",
		"_Leaf_Metallic",
		"_Leaf_Smoothness",
		"_Trunk_Metallic",
		"_Trunk_Smoothness",
		"_Frosting_Falloff",
		"_Frosting_Height",
		"_Wind_Twist_Strength",
		"_Gale_Blend",
		"_Light_Wind_Y_Strength",
		"_Light_Wind_Y_Offset"
	],
	&[
		"_Leaf_Base_Color",
		"_Trunk_Base_Color",
		"_Leaf_Noise_Color",
		"_Trunk_Noise_Color",
		"_Frosting_Color",
		"_Trunk_Emissive_Color"
	]
);

pub(super) const SCORING_CLOUDS: Scoring = (
	&[
		"_Cloud_Speed",
		"_Cloud_Strength",
		"_Scattering_Multiplier",
		"_Scattering_Edge_Dist",
		"_Light_Intensity",
		"_Fog_Density"
	],
	&["_Scattering_Color"]
);

pub(super) const SCORING_PARTICLES: Scoring = (
	&[
		"_Soft_Power",
		"_Soft_Distance",
		"_Enable_Soft_Particles",
		"_Camera_Fade_Near",
		"_Camera_Fade_Far",
		"_Camera_Fade_Smoothness",
		"_View_Edge_Power",
		"_Enable_Camera_Fade"
	],
	&[]
);

pub(super) const SCORING_SKYDOME: Scoring = (&["_Falloff", "_Offset", "_Distance"], &["_Top_Color", "_Bottom_Color"]);

pub(super) const SCORING_CRYSTAL: Scoring = (
	&[
		"_Enable_Fresnel",
		"_Enable_Depth",
		"_Enable_Refraction",
		"_Fresnel_Power",
		"_Refraction_Strength",
		"_Opacity",
		"_Deep_Depth",
		"_Shallow_Depth"
	],
	&["_Fresnel_Color", "_Refraction_Color"]
);

/// Both gradient colours together count as this many extra skydome properties.
pub(super) const SKYDOME_GRADIENT_PAIR: (&str, &str) = ("_Top_Color", "_Bottom_Color");
pub(super) const SKYDOME_GRADIENT_PAIR_BONUS: u32 = 2;
