//! Source property name to shader parameter name, per shader and property class.
//!
//! Several source names may map to one parameter; packs disagree on naming.

pub(super) type PropertyMap = &'static [(&'static str, &'static str)];

pub(super) const TEXTURES_POLYGON: PropertyMap = &[
	("_Base_Texture", "base_texture"),
	("_Normal_Texture", "normal_texture"),
	("_Emission_Texture", "emission_texture"),
	("_AO_Texture", "ao_texture"),
	("_Triplanar_Texture_Top", "triplanar_texture_top"),
	("_Triplanar_Texture_Side", "triplanar_texture_side"),
	("_Triplanar_Texture_Bottom", "triplanar_texture_bottom"),
	("_Albedo_Map", "base_texture"),
	("_BaseMap", "base_texture"),
	("_MainTex", "base_texture"),
	("_Normal_Map", "normal_texture"),
	("_BumpMap", "normal_texture"),
	("_Emission_Map", "emission_texture"),
	("_EmissionMap", "emission_texture"),
	("_OcclusionMap", "ao_texture"),
	("_Metallic_Smoothness_Texture", "metallic_texture"),
	("_MetallicGlossMap", "metallic_texture"),
	("_MainTexture", "base_texture"),
	("_Emission", "emission_texture"),
	("_Hair_Mask", "hair_mask"),
	("_Skin_Mask", "skin_mask"),
	("_Mask_01", "mask_01"),
	("_Mask_02", "mask_02"),
	("_Mask_03", "mask_03"),
	("_Mask_04", "mask_04"),
	("_Mask_05", "mask_05"),
	("_Metallic_Map", "metallic_texture"),
	("_Grunge_Map", "grunge_map"),
	("_Blood_Mask", "blood_mask"),
	("_Blood_Texture", "blood_texture"),
	("_Rune_Texture", "rune_texture"),
	// Interior mapping
	("_Floor", "floor_texture"),
	("_Wall", "wall_texture"),
	("_Ceiling", "ceiling_texture"),
	("_Back", "back_texture"),
	("_Props", "props_texture"),
	("_Scan_Line_Map", "scan_line_map"),
	("_LED_Mask_01", "led_mask"),
	("_Cloth_Mask", "cloth_mask"),
	("_Overlay_Texture", "overlay_texture"),
	("_Triplanar_Emission_Texture", "triplanar_emission_texture"),
	("_Triplanar_Normal_Texture_Bottom", "triplanar_normal_bottom"),
	("_Triplanar_Normal_Texture_Side", "triplanar_normal_side"),
	("_Triplanar_Normal_Texture_Top", "triplanar_normal_top"),
	("_Moss", "overlay_texture"),
	("_MossTexture", "overlay_texture"),
	("_ParallaxMap", "height_texture"),
	("_HeightMap", "height_texture"),
	("_Alpha_Texture", "alpha_texture"),
	("_Spherical_Map", "spherical_map"),
	("_Snow_Normal_Texture", "snow_normal_texture"),
	("_Snow_Metallic_Smoothness_Texture", "snow_metallic_smoothness"),
	("_Snow_Edge_Noise", "snow_edge_noise"),
	("_LED_Panel_Emissive_Wave_01", "led_emissive_wave"),
	("_Pixelation_Map", "pixelation_map"),
	("_DetailAlbedoMap", "detail_albedo"),
	("_DetailNormalMap", "detail_normal"),
	("_DetailMask", "detail_mask")
];

pub(super) const TEXTURES_FOLIAGE: PropertyMap = &[
	("_Leaf_Texture", "leaf_color"),
	("_Leaf_Normal", "leaf_normal"),
	("_Trunk_Texture", "trunk_color"),
	("_Trunk_Normal", "trunk_normal"),
	("_Leaf_Ambient_Occlusion", "leaf_ao"),
	("_Trunk_Ambient_Occlusion", "trunk_ao"),
	("_Emissive_Mask", "emissive_mask"),
	("_Emissive_2_Mask", "emissive_2_mask"),
	("_Emissive_Pulse_Map", "emissive_pulse_mask"),
	("_Trunk_Emissive_Mask", "trunk_emissive_mask"),
	("_Breeze_Noise_Map", "breeze_noise_map")
];

pub(super) const TEXTURES_CRYSTAL: PropertyMap = &[
	("_Base_Albedo", "base_albedo"),
	("_Base_Normal", "base_normal"),
	("_Refraction_Height", "refraction_height"),
	("_Refraction_Texture", "refraction_texture"),
	("_Top_Albedo", "top_albedo"),
	("_Top_Normal", "top_normal"),
	("_MainTex", "base_albedo"),
	("_BumpMap", "base_normal"),
	("_BaseMap", "base_albedo")
];

pub(super) const TEXTURES_WATER: PropertyMap = &[
	("_Caustics_Flipbook", "caustics_flipbook"),
	("_Foam_Noise_Texture", "noise_texture"),
	("_Foam_Texture", "noise_texture"),
	("_Foam_Texture1", "noise_texture"),
	("_FoamMask", "noise_texture"),
	("_Noise_Texture", "noise_texture"),
	("_Normal_Map", "normal_texture"),
	("_Normal_Texture", "normal_texture"),
	("_Scrolling_Texture", "scrolling_texture"),
	("_Shore_Foam_Noise_Texture", "shore_foam_noise_texture"),
	("_Water_Normal_Texture", "normal_texture"),
	("_WaterNormal", "normal_texture"),
	("_WaterNormal1", "normal_texture"),
	("_WaterNormal2", "normal_texture"),
	("_RipplesNormal", "normal_texture"),
	("_RipplesNormal2", "normal_texture"),
	("_WaveMask", "noise_texture"),
	("_WaveMaskTuff", "noise_texture"),
	("_WaveNoise", "noise_texture"),
	("_Shore_Wave_Foam_Noise_Texture", "shore_foam_noise_texture"),
	("_Water_Noise_Texture", "noise_texture"),
	("_MainTex", "normal_texture"),
	("_BumpMap", "normal_texture"),
	("_BaseMap", "normal_texture")
];

pub(super) const TEXTURES_PARTICLES: PropertyMap = &[
	("_Albedo_Map", "albedo_map"),
	("_MainTex", "albedo_map"),
	("_BaseMap", "albedo_map")
];

// Skydome and clouds are procedural.
pub(super) const TEXTURES_SKYDOME: PropertyMap = &[];
pub(super) const TEXTURES_CLOUDS: PropertyMap = &[];

pub(super) const SCALARS_POLYGON: PropertyMap = &[
	("_Smoothness", "smoothness"),
	("_Glossiness", "smoothness"),
	("_Metallic", "metallic"),
	("_Normal_Intensity", "normal_intensity"),
	("_Normal_Amount", "normal_intensity"),
	("_BumpScale", "normal_intensity"),
	("_AO_Intensity", "ao_intensity"),
	("_OcclusionStrength", "ao_intensity"),
	("_Alpha_Clip_Threshold", "alpha_clip_threshold"),
	("_Cutoff", "alpha_clip_threshold"),
	("_AlphaCutoff", "alpha_clip_threshold"),
	// Hologram
	("_HoloLines", "holo_lines"),
	("_Scroll_Speed", "scroll_speed"),
	("_Opacity", "opacity"),
	("_Hologram_Intensity", "hologram_intensity"),
	// CRT screens
	("_Screen_Bulge", "screen_bulge"),
	("_Screen_Flicker_Frequency", "screen_flicker_frequency"),
	("_Vignette_Amount", "vignette_amount"),
	("_Pixelation_Amount", "pixelation_amount"),
	("_CRT_Curve", "crt_curve"),
	// Interior mapping
	("_RoomTile", "room_tile"),
	("_RoomIntensity", "room_intensity"),
	("_WindowAlpha", "window_alpha"),
	("_RoomDepth", "room_depth"),
	// Ghost
	("_Transparency", "transparency"),
	("_RimPower", "rim_power"),
	("_TransShadow", "trans_shadow"),
	("_Ghost_Strength", "ghost_strength"),
	("_Dirt_Amount", "dirt_amount"),
	("_Dust_Amount", "dust_amount"),
	("_Grunge_Intensity", "grunge_intensity"),
	("_Glow_Amount", "glow_amount"),
	("_Glow_Falloff", "glow_falloff"),
	("_dissolve", "dissolve"),
	("_twirlstr", "twirl_strength"),
	("_Rune_Speed", "rune_speed"),
	// Potions
	("_liquidamount", "liquid_amount"),
	("_WobbleX", "wobble_x"),
	("_WobbleZ", "wobble_z"),
	("_Wave_Scale", "wave_scale"),
	("_Foam_Line", "foam_line"),
	("_Rim_Width", "rim_width"),
	("_BloodAmount", "blood_amount"),
	("_Blood_Intensity", "blood_intensity"),
	("_Brightness", "brightness"),
	("_UVScrollSpeed", "uv_scroll_speed"),
	("_Saturation", "saturation"),
	("_Neon_Intensity", "neon_intensity"),
	("_Pulse_Speed", "pulse_speed"),
	// Cloth and sails
	("_Wave_Speed", "wave_speed"),
	("_Wave_Amplitude", "wave_amplitude"),
	("_Wind_Influence", "wind_influence"),
	("_BodyArt_Amount", "bodyart_amount"),
	("_Tattoo_Amount", "tattoo_amount"),
	("_Flipbook_Width", "flipbook_width"),
	("_Flipbook_Height", "flipbook_height"),
	("_Flipbook_Speed", "flipbook_speed"),
	// Heat shimmer
	("_Distortion_strength", "distortion_strength"),
	("_Edge_Distortion_Intensity", "edge_distortion_intensity"),
	("_Speed_X", "speed_x"),
	("_Speed_Y", "speed_y"),
	("_Snow_Level", "snow_level"),
	("_Snow_Transition", "snow_transition"),
	("_Snow_Metallic", "snow_metallic"),
	("_Snow_Smoothness", "snow_smoothness"),
	("_Snow_Normal_Intensity", "snow_normal_intensity"),
	("_Triplanar_Fade", "triplanar_fade"),
	("_Triplanar_Intensity", "triplanar_intensity"),
	("_Triplanar_Normal_Intensity_Top", "triplanar_normal_intensity_top"),
	("_Triplanar_Normal_Intensity_Side", "triplanar_normal_intensity_side"),
	("_Triplanar_Normal_Intensity_Bottom", "triplanar_normal_intensity_bottom"),
	("_Emission_Intensity", "emission_intensity"),
	("_DetailNormalMapScale", "detail_normal_scale")
];

pub(super) const SCALARS_FOLIAGE: PropertyMap = &[
	("_Metallic", "metallic"),
	("_Smoothness", "smoothness"),
	("_Glossiness", "smoothness"),
	("_LeafSmoothness", "leaf_smoothness"),
	("_Leaf_Smoothness", "leaf_smoothness"),
	("_Leaf_Metallic", "leaf_metallic"),
	("_TrunkSmoothness", "trunk_smoothness"),
	("_Trunk_Smoothness", "trunk_smoothness"),
	("_Trunk_Metallic", "trunk_metallic"),
	// Wind
	("_Breeze_Strength", "breeze_strength"),
	("_Light_Wind_Strength", "light_wind_strength"),
	("_Strong_Wind_Strength", "strong_wind_strength"),
	("_Wind_Twist_Strength", "wind_twist_strength"),
	("_Gale_Blend", "gale_blend"),
	("_Light_Wind_Y_Strength", "light_wind_y_strength"),
	("_Light_Wind_Y_Offset", "light_wind_y_offset"),
	("_Alpha_Clip_Threshold", "alpha_clip_threshold"),
	("_Normal_Intensity", "normal_intensity"),
	("_BumpScale", "normal_intensity"),
	("_Frosting_Falloff", "frosting_falloff"),
	("_Frosting_Height", "frosting_height"),
	// Pre-2022 packs
	("_Leaves_WindAmount", "breeze_strength"),
	("_Tree_WindAmount", "light_wind_strength"),
	("_Cutoff", "alpha_clip_threshold"),
	("_AlphaCutoff", "alpha_clip_threshold")
];

pub(super) const SCALARS_CRYSTAL: PropertyMap = &[
	("_Metallic", "metallic"),
	("_Smoothness", "smoothness"),
	("_Glossiness", "smoothness"),
	("_Opacity", "opacity"),
	("_Fresnel_Power", "fresnel_power"),
	("_Refraction_Strength", "refraction_strength"),
	("_Deep_Depth", "deep_depth"),
	("_Shallow_Depth", "shallow_depth"),
	("_Normal_Intensity", "normal_intensity"),
	("_BumpScale", "normal_intensity")
];

pub(super) const SCALARS_WATER: PropertyMap = &[
	("_Smoothness", "smoothness"),
	("_Glossiness", "smoothness"),
	("_Metallic", "metallic"),
	("_Base_Opacity", "base_opacity"),
	("_Shallows_Opacity", "shallows_opacity"),
	("_Maximum_Depth", "maximum_depth"),
	("_Normal_Intensity", "normal_intensity"),
	("_BumpScale", "normal_intensity"),
	("_Shore_Wave_Speed", "shore_wave_speed"),
	("_Ocean_Wave_Height", "ocean_wave_height"),
	("_Ocean_Wave_Speed", "ocean_wave_speed"),
	("_Distortion_Strength", "distortion_strength"),
	("_Deep_Height", "deep_height"),
	("_Very_Deep_Height", "very_deep_height"),
	("_Depth_Distance", "depth_distance"),
	("_Water_Depth", "water_depth"),
	("_ShallowFalloff", "shallow_intensity"),
	("_OverallFalloff", "base_opacity"),
	("_OpacityFalloff", "shallows_opacity"),
	// Foam
	("_Shore_Foam_Intensity", "shore_foam_intensity"),
	("_FoamShoreline", "shore_foam_intensity"),
	("_FoamDepth", "shore_foam_intensity"),
	("_FoamFalloff", "ocean_foam_opacity"),
	// Caustics
	("_Caustics_Intensity", "caustics_intensity"),
	("_CausticDepthFade", "caustics_intensity"),
	("_CausticScale", "caustics_scale"),
	("_CausticSpeed", "caustics_speed"),
	("_Shallow_Intensity", "shallow_intensity"),
	// Waterfalls
	("_FresnelPower", "fresnel_power"),
	("_UVScrollSpeed", "uv_scroll_speed")
];

pub(super) const SCALARS_PARTICLES: PropertyMap = &[
	// Misspelt in the source shaders.
	("_Alpha_Clip_Treshold", "alpha_clip_threshold"),
	("_Alpha_Clip_Threshold", "alpha_clip_threshold"),
	("_Cutoff", "alpha_clip_threshold"),
	("_AlphaCutoff", "alpha_clip_threshold"),
	("_Soft_Power", "soft_power"),
	("_Soft_Distance", "soft_distance"),
	("_Camera_Fade_Near", "camera_fade_near"),
	("_Camera_Fade_Far", "camera_fade_far"),
	("_Camera_Fade_Smoothness", "camera_fade_smoothness"),
	("_View_Edge_Power", "view_edge_power"),
	("_Fog_Density", "fog_density")
];

pub(super) const SCALARS_SKYDOME: PropertyMap = &[
	("_Falloff", "falloff"),
	("_Offset", "offset"),
	// `distance` is reserved in the destination shader language.
	("_Distance", "distance_")
];

pub(super) const SCALARS_CLOUDS: PropertyMap = &[
	("_Light_Intensity", "light_intensity"),
	("_Fresnel_Power", "fresnel_power"),
	("_Fog_Density", "fog_density"),
	("_Scattering_Multiplier", "scattering_multiplier"),
	("_Cloud_Speed", "cloud_speed"),
	("_Cloud_Strength", "cloud_strength"),
	("_CloudCoverage", "cloud_strength"),
	("_CloudPower", "cloud_strength"),
	("_CloudSpeed", "cloud_speed"),
	("_Cloud_Contrast", "scattering_multiplier"),
	("_Cloud_Falloff", "fog_density"),
	("_Aurora_Speed", "aurora_speed"),
	("_Aurora_Intensity", "aurora_intensity"),
	("_Aurora_Scale", "aurora_scale")
];

pub(super) const COLORS_POLYGON: PropertyMap = &[
	("_Color_Tint", "color_tint"),
	("_Color", "color_tint"),
	("_BaseColor", "color_tint"),
	("_BaseColour", "color_tint"),
	("_Emission_Color", "emission_color"),
	("_EmissionColor", "emission_color"),
	("_Snow_Color", "snow_color"),
	("_Hair_Color", "hair_color"),
	("_Skin_Color", "skin_color"),
	("_Neon_Colour_01", "neon_color_01"),
	("_Neon_Colour_02", "neon_color_02"),
	("_Hologram_Color", "hologram_color"),
	("_RimColor", "rim_color"),
	("_Dust_Colour", "dust_color"),
	("_Glow_Colour", "glow_color"),
	("_Glow_Tint", "glow_tint"),
	("_Liquid_Color", "liquid_color"),
	("_BloodColor", "blood_color"),
	("_Blood_Color", "blood_color"),
	// Modular character zones
	("_Color_Primary", "color_primary"),
	("_Color_Secondary", "color_secondary"),
	("_Color_Tertiary", "color_tertiary"),
	("_Color_Metal_Primary", "color_metal_primary"),
	("_Color_Metal_Secondary", "color_metal_secondary"),
	("_Color_Metal_Dark", "color_metal_dark"),
	("_Color_Leather_Primary", "color_leather_primary"),
	("_Color_Leather_Secondary", "color_leather_secondary"),
	("_Color_Skin", "color_skin"),
	("_Color_Hair", "color_hair"),
	("_Color_Eyes", "color_eyes"),
	("_Color_Stubble", "color_stubble"),
	("_Color_Scar", "color_scar"),
	("_Color_BodyArt", "color_bodyart")
];

pub(super) const COLORS_FOLIAGE: PropertyMap = &[
	("_Color", "color_tint"),
	("_Color_Tint", "color_tint"),
	("_BaseColor", "color_tint"),
	("_Leaf_Base_Color", "leaf_base_color"),
	("_Trunk_Base_Color", "trunk_base_color"),
	("_Leaf_Noise_Color", "leaf_noise_color"),
	("_Trunk_Noise_Color", "trunk_noise_color"),
	("_Emissive_Color", "emissive_color"),
	("_Emissive_2_Color", "emissive_2_color"),
	("_Trunk_Emissive_Color", "trunk_emissive_color"),
	("_Frosting_Color", "frosting_color"),
	("_ColorTint", "color_tint")
];

pub(super) const COLORS_CRYSTAL: PropertyMap = &[
	("_Base_Color", "base_color"),
	("_Base_Color_Multiplier", "base_color"),
	("_Top_Color_Multiplier", "top_color"),
	("_Deep_Color", "deep_color"),
	("_Shallow_Color", "shallow_color"),
	("_Fresnel_Color", "fresnel_color"),
	("_Refraction_Color", "refraction_color")
];

pub(super) const COLORS_WATER: PropertyMap = &[
	("_Shallow_Color", "shallow_color"),
	("_Deep_Color", "deep_color"),
	("_Very_Deep_Color", "very_deep_color"),
	("_ShallowColour", "shallow_color"),
	("_DeepColour", "deep_color"),
	("_VeryDeepColour", "very_deep_color"),
	("_Foam_Color", "foam_color"),
	("_Caustics_Color", "caustics_color"),
	("_CausticColour", "caustics_color"),
	("_Shore_Foam_Color_Tint", "shore_foam_color_tint"),
	("_Shore_Wave_Color_Tint", "shore_wave_color_tint"),
	("_FoamEmitColour", "shore_foam_color_tint"),
	("_DepthGlowColour", "very_deep_color"),
	("_Color", "color_tint"),
	("_Color_Tint", "color_tint"),
	("_BaseColor", "color_tint"),
	("_WaterDeepColor", "deep_color"),
	("_WaterShallowColor", "shallow_color"),
	("_Water_Deep_Color", "deep_color"),
	("_Water_Shallow_Color", "shallow_color"),
	("_Water_Near_Color", "shallow_color"),
	("_Water_Far_Color", "deep_color"),
	("_WaterColour", "water_color"),
	("_FresnelColour", "fresnel_color")
];

pub(super) const COLORS_PARTICLES: PropertyMap = &[
	("_Base_Color", "base_color"),
	("_Color", "base_color"),
	("_Color_Tint", "base_color"),
	("_BaseColor", "base_color"),
	("_Fog_Color", "fog_color"),
	("_EmissionColor", "emission_color")
];

pub(super) const COLORS_SKYDOME: PropertyMap = &[("_Top_Color", "top_color"), ("_Bottom_Color", "bottom_color")];

pub(super) const COLORS_CLOUDS: PropertyMap = &[
	("_Top_Color", "top_color"),
	("_Base_Color", "base_color"),
	("_Fresnel_Color", "fresnel_color"),
	("_Scattering_Color", "scattering_color"),
	("_CloudColor", "top_color"),
	("_Aurora_Color_01", "aurora_color_01"),
	("_Aurora_Color_02", "aurora_color_02")
];
