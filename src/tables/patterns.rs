use crate::shader::TargetShader;

/// Weighted material name patterns, matched case-insensitively.
///
/// Every matching pattern adds its weight, so the order here only matters for breaking ties.
/// Weights run from 60 for rendering techniques that only one shader implements, down to 15 for
/// words that turn up in all kinds of names.
pub(super) const NAME_PATTERNS: &[(&str, TargetShader, u32)] = &[
	("triplanar", TargetShader::Polygon, 60),
	("caustics", TargetShader::Water, 55),
	("(fresnel|refractive|refraction)", TargetShader::Crystal, 55),
	("soft.?particle", TargetShader::Particles, 55),
	("(skydome|sky_dome|skybox|sky_box)", TargetShader::Skydome, 55),
	(
		"(crystal|gem|jewel|diamond|ruby|emerald|sapphire|amethyst|quartz)",
		TargetShader::Crystal,
		45
	),
	("(water|ocean|river|lake|waterfall)", TargetShader::Water, 45),
	("(particle|fx_)", TargetShader::Particles, 45),
	("(cloud|clouds|sky_cloud)", TargetShader::Clouds, 45),
	("(glass|ice|transparent|translucent)", TargetShader::Crystal, 35),
	("(pond|stream|liquid|aqua|sea)", TargetShader::Water, 35),
	("(fog|mist|atmosphere)", TargetShader::Clouds, 35),
	("(spark|dust|debris|smoke|fire|rain|snow|splash)", TargetShader::Particles, 35),
	("(aurora|sky_gradient)", TargetShader::Skydome, 35),
	("(foliage|vegetation)", TargetShader::Foliage, 35),
	(
		"(tree|fern|grass|vine|branch|willow|bush|shrub|hedge|bamboo|koru|treefern)",
		TargetShader::Foliage,
		25
	),
	("(leaf|leaves)", TargetShader::Foliage, 20),
	("(bark|trunk|undergrowth|plant)", TargetShader::Foliage, 20),
	("(moss|dirt)", TargetShader::Polygon, 15),
	("(effect|additive)", TargetShader::Particles, 15)
];
