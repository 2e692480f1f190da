use indexmap::IndexMap;
use pretty_assertions::assert_eq;
use synty_materials::{translate, Color, Evidence, SourceMaterial, TargetMaterial, TargetShader, Translator};

const POLYGON_GUID: &str = "0730dae39bc73f34796280af9875ce14";
const FOLIAGE_GUID: &str = "9b98a126c8d4d7a4baeb81b16e4f7b97";
const CRYSTAL_GUID: &str = "5808064c5204e554c89f589a7059c558";

fn init_tracing() {
	let _ = tracing_subscriber::fmt()
		.with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
		.with_test_writer()
		.try_init();
}

fn no_textures() -> IndexMap<String, String> {
	IndexMap::new()
}

#[test]
fn identifier_takes_priority_over_name() {
	init_tracing();

	let source = SourceMaterial::new("RandomRock123", FOLIAGE_GUID);
	let translation = Translator::default().translate_detailed(&source, &no_textures(), None);

	assert_eq!(translation.material.shader, TargetShader::Foliage);
	assert_eq!(translation.detection.map(|x| x.evidence), Some(Evidence::Identifier));
	assert_eq!(translation.demoted_from, None);
}

#[test]
fn name_scores_accumulate() {
	let source = SourceMaterial::new("Leaves_Triplanar", "");
	let detection = Translator::default().classify(&source);

	assert_eq!(detection.shader, TargetShader::Polygon);
	assert_eq!(detection.scores.get(&TargetShader::Polygon), Some(&60));
	assert_eq!(detection.scores.get(&TargetShader::Foliage), Some(&20));
}

#[test]
fn weak_names_fall_back_to_default() {
	let source = SourceMaterial::new("Effect_01", "");
	let detection = Translator::default().classify(&source);

	assert_eq!(detection.shader, TargetShader::Polygon);
	assert_eq!(detection.evidence, Evidence::Fallback);
}

#[test]
fn detection_without_evidence_is_demoted() {
	init_tracing();

	let source = SourceMaterial::new("Water_Bucket", "").with_texture("_Base_Texture", "aaaa");
	let filenames = IndexMap::from([("aaaa".to_owned(), "Bucket_Albedo".to_owned())]);

	let translation = Translator::default().translate_detailed(&source, &filenames, None);

	assert_eq!(translation.detection.as_ref().map(|x| x.shader), Some(TargetShader::Water));
	assert_eq!(translation.demoted_from, Some(TargetShader::Water));
	assert_eq!(translation.material.shader, TargetShader::Polygon);
	assert_eq!(translation.material.textures["base_texture"], "Bucket_Albedo");
	assert_eq!(translation.material.scalars["smoothness"], 0.5);
}

#[test]
fn detection_with_evidence_is_kept() {
	let source = SourceMaterial::new("Water_River", "")
		.with_scalar("_Maximum_Depth", 3.0)
		.with_color("_Deep_Color", (0.0, 0.1, 0.3, 1.0));

	let material = translate(&source, &no_textures(), None);

	assert_eq!(material.shader, TargetShader::Water);
	assert_eq!(material.scalars["maximum_depth"], 3.0);
	assert_eq!(material.colors["deep_color"], Color::new(0.0, 0.1, 0.3, 1.0));
	assert_eq!(material.scalars["smoothness"], 0.95);
}

#[test]
fn zero_alpha_fixed_on_opaque_materials() {
	init_tracing();

	let source = SourceMaterial::new("Prop_Crate", POLYGON_GUID).with_color("_Color", (0.8, 0.2, 0.1, 0.0));
	let translation = Translator::default().translate_detailed(&source, &no_textures(), None);

	assert_eq!(translation.material.colors["color_tint"], Color::new(0.8, 0.2, 0.1, 1.0));
	assert_eq!(translation.alpha_corrected, ["_Color"]);
}

#[test]
fn zero_alpha_kept_on_transparent_materials() {
	let source = SourceMaterial::new("Prop_Crate", POLYGON_GUID)
		.with_scalar("_Mode", 3.0)
		.with_color("_Color", (0.8, 0.2, 0.1, 0.0));
	let translation = Translator::default().translate_detailed(&source, &no_textures(), None);

	assert_eq!(translation.material.colors["color_tint"].a, 0.0);
	assert!(translation.alpha_corrected.is_empty());
}

#[test]
fn zero_alpha_kept_on_black() {
	let source = SourceMaterial::new("Prop_Crate", POLYGON_GUID).with_color("_Color", (0.0, 0.0, 0.0, 0.0));
	let material = translate(&source, &no_textures(), None);

	assert_eq!(material.colors["color_tint"], Color::new(0.0, 0.0, 0.0, 0.0));
}

#[test]
fn boolean_floats_are_extracted() {
	let source = SourceMaterial::new("Fern_01", FOLIAGE_GUID)
		.with_scalar("_Enable_Breeze", 1.0)
		.with_scalar("_Breeze_Strength", 0.3);
	let translation = Translator::default().translate_detailed(&source, &no_textures(), None);

	assert!(translation.material.booleans["enable_breeze"]);
	assert!(!translation.material.scalars.contains_key("enable_breeze"));
	assert_eq!(translation.material.scalars["breeze_strength"], 0.3);
	assert_eq!(translation.extracted_booleans, ["_Enable_Breeze"]);
}

#[test]
fn defaults_never_override_source_values() {
	let source = SourceMaterial::new("Gem_01", CRYSTAL_GUID).with_scalar("_Opacity", 0.3);
	let material = translate(&source, &no_textures(), None);

	assert_eq!(material.shader, TargetShader::Crystal);
	assert_eq!(material.scalars["opacity"], 0.3);
}

#[test]
fn bare_foliage_material_gets_only_defaults() {
	let source = SourceMaterial::new("Tree_01", FOLIAGE_GUID);
	let material = translate(&source, &no_textures(), None);

	let mut expected = TargetMaterial::new("Tree_01", TargetShader::Foliage);
	expected.scalars = IndexMap::from([
		("leaf_smoothness".to_owned(), 0.1),
		("trunk_smoothness".to_owned(), 0.15),
		("leaf_metallic".to_owned(), 0.0),
		("trunk_metallic".to_owned(), 0.0)
	]);

	assert_eq!(material, expected);
}

#[test]
fn property_evidence_outweighs_weaker_name_match() {
	init_tracing();

	let source = SourceMaterial::new("Crystal_Leaves_01", "").with_scalar("_Enable_Fresnel", 1.0);
	let translation = Translator::default().translate_detailed(&source, &no_textures(), None);

	let detection = translation.detection.expect("detection ran");
	assert_eq!(detection.scores[&TargetShader::Crystal], 55);
	assert_eq!(detection.scores[&TargetShader::Foliage], 20);

	let material = translation.material;
	assert_eq!(material.shader, TargetShader::Crystal);
	assert!(material.booleans["enable_fresnel"]);
	assert_eq!(material.scalars["opacity"], 0.7);
}

#[test]
fn translation_is_deterministic() {
	let source = SourceMaterial::new("Waterfall_Foam", "")
		.with_texture("_Foam_Texture", "aaaa")
		.with_scalar("_Enable_Caustics", 1.0)
		.with_scalar("_Caustics_Intensity", 0.4)
		.with_color("_Foam_Color", (1.0, 1.0, 1.0, 0.0));
	let filenames = IndexMap::from([("aaaa".to_owned(), "Foam".to_owned())]);

	let first = translate(&source, &filenames, None);

	for _ in 0..10 {
		assert_eq!(translate(&source, &filenames, None), first);
	}

	assert_eq!(first.shader, TargetShader::Water);
	assert_eq!(first.colors["foam_color"].a, 1.0);
}

#[test]
fn translators_can_be_shared_between_threads() {
	let translator = &Translator::default();
	let names = ["Water_01", "Crystal_01", "Fern_01", "Rock_01", "Cloud_01", "Skydome_01", "FX_Smoke_01"];

	let placeholders = std::thread::scope(|scope| {
		let handles = names
			.iter()
			.map(|name| scope.spawn(move || translator.synthesize_placeholder(name)))
			.collect::<Vec<_>>();

		handles.into_iter().map(|x| x.join().unwrap()).collect::<Vec<_>>()
	});

	assert_eq!(
		placeholders.iter().map(|x| x.shader).collect::<Vec<_>>(),
		[
			TargetShader::Water,
			TargetShader::Crystal,
			TargetShader::Foliage,
			TargetShader::Polygon,
			TargetShader::Clouds,
			TargetShader::Skydome,
			TargetShader::Particles
		]
	);
}
