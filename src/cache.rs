use indexmap::{IndexMap, IndexSet};
#[cfg(feature = "tracing")]
use tracing::debug;
use tryvial::try_fn;

use crate::{
	config::TranslatorConfig,
	detect,
	material::{Result, SourceMaterial, TargetMaterial},
	shader::TargetShader,
	translate::Translator
};

/// One material slot of a mesh, as listed in a pack's material list.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MaterialSlot {
	pub material_name: String,

	/// Whether the slot's material uses one of the pack's own shaders rather than the stock one.
	pub uses_custom_shader: bool
}

impl MaterialSlot {
	pub fn new(material_name: impl Into<String>, uses_custom_shader: bool) -> Self {
		Self {
			material_name: material_name.into(),
			uses_custom_shader
		}
	}
}

/// Shader decisions made ahead of translation, keyed by material name.
///
/// The first decision for a name sticks. Decisions are passed to [`Translator::translate`] as the override shader.
/// Names are scored against the acceptance threshold of the configuration the cache was made with.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ShaderCache {
	config: TranslatorConfig,
	decisions: IndexMap<String, TargetShader>,
	unmatched: IndexSet<String>
}

impl ShaderCache {
	pub fn new() -> Self {
		Self::default()
	}

	/// A cache that decides shaders the way `translator` would.
	pub fn for_translator(translator: &Translator) -> Self {
		Self {
			config: translator.config().to_owned(),
			..Self::default()
		}
	}

	/// Restore a cache from `(material name, shader name)` pairs, e.g. read back from a previous run.
	#[try_fn]
	pub fn from_entries<N: Into<String>, S: AsRef<str>>(entries: impl IntoIterator<Item = (N, S)>) -> Result<Self> {
		let mut cache = Self::new();

		for (name, shader) in entries {
			cache.insert(name, shader.as_ref().parse()?);
		}

		cache
	}

	/// Record a decision unless the material already has one. Returns whether it was recorded.
	pub fn insert(&mut self, name: impl Into<String>, shader: TargetShader) -> bool {
		let name = name.into();

		if self.decisions.contains_key(&name) {
			return false;
		}

		self.decisions.insert(name, shader);
		true
	}

	/// The shader for a material slot, deciding it if this is the first time the material is seen.
	pub fn resolve(&mut self, slot: &MaterialSlot) -> TargetShader {
		if let Some(&shader) = self.decisions.get(&slot.material_name) {
			return shader;
		}

		let (shader, matched) = detect::decide_slot(&self.config, &slot.material_name, slot.uses_custom_shader);

		if !matched {
			self.unmatched.insert(slot.material_name.to_owned());
		}

		self.decisions.insert(slot.material_name.to_owned(), shader);
		shader
	}

	/// Record the decisions for one prefab, given its meshes from LOD0 down.
	///
	/// LOD0 decides per slot. Lower LODs take the decision of the LOD0 slot at the same index, so a simplified
	/// material on a distant LOD keeps the look of the full one.
	pub fn add_prefab(&mut self, lods: &[Vec<MaterialSlot>]) {
		let mut slot_shaders = IndexMap::<usize, TargetShader>::new();

		for (lod, slots) in lods.iter().enumerate() {
			for (index, slot) in slots.iter().enumerate() {
				if self.decisions.contains_key(&slot.material_name) {
					continue;
				}

				match slot_shaders.get(&index) {
					Some(&shader) if lod > 0 => {
						#[cfg(feature = "tracing")]
						debug!(material = %slot.material_name, lod, shader = %shader, "inherited shader from LOD0");
						self.decisions.insert(slot.material_name.to_owned(), shader);
					}

					_ => {
						let shader = self.resolve(slot);

						if lod == 0 {
							slot_shaders.insert(index, shader);
						}
					}
				}
			}
		}
	}

	pub fn get(&self, name: &str) -> Option<TargetShader> {
		self.decisions.get(name).copied()
	}

	/// Custom shader materials no name pattern matched, in the order they were seen. Worth adding patterns for.
	pub fn unmatched(&self) -> impl Iterator<Item = &str> {
		self.unmatched.iter().map(String::as_str)
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, TargetShader)> {
		self.decisions.iter().map(|(name, shader)| (name.as_str(), *shader))
	}

	pub fn len(&self) -> usize {
		self.decisions.len()
	}

	pub fn is_empty(&self) -> bool {
		self.decisions.is_empty()
	}

	/// Translate a material, using the cached decision as the override shader if there is one.
	pub fn translate(
		&self,
		translator: &Translator,
		source: &SourceMaterial,
		filenames: &IndexMap<String, String>
	) -> TargetMaterial {
		translator.translate(source, filenames, self.get(&source.name))
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;
	use crate::material::MaterialError;

	#[test]
	fn test_first_decision_wins() {
		let mut cache = ShaderCache::new();

		assert_eq!(cache.resolve(&MaterialSlot::new("Water_01", true)), TargetShader::Water);
		assert_eq!(cache.resolve(&MaterialSlot::new("Water_01", false)), TargetShader::Water);
		assert!(!cache.insert("Water_01", TargetShader::Crystal));
		assert_eq!(cache.get("Water_01"), Some(TargetShader::Water));
	}

	#[test]
	fn test_stock_shader_materials_use_default() {
		let mut cache = ShaderCache::new();

		assert_eq!(cache.resolve(&MaterialSlot::new("Crystal_01", false)), TargetShader::Polygon);
		assert_eq!(cache.unmatched().count(), 0);
	}

	#[test]
	fn test_unmatched_custom_materials_are_collected() {
		let mut cache = ShaderCache::new();
		cache.resolve(&MaterialSlot::new("Mystery_01", true));
		cache.resolve(&MaterialSlot::new("Mystery_01", true));
		cache.resolve(&MaterialSlot::new("Tree_01", true));

		assert_eq!(cache.unmatched().collect::<Vec<_>>(), ["Mystery_01"]);
		assert_eq!(cache.get("Mystery_01"), Some(TargetShader::Polygon));
	}

	#[test]
	fn test_lods_inherit_slot_decisions() {
		let mut cache = ShaderCache::new();

		cache.add_prefab(&[
			vec![MaterialSlot::new("Tree_Leaves", true), MaterialSlot::new("Tree_Bark", false)],
			vec![MaterialSlot::new("Tree_LOD1_Atlas", false), MaterialSlot::new("Tree_Bark", false)],
			vec![
				MaterialSlot::new("Tree_LOD2_Atlas", false),
				MaterialSlot::new("Tree_LOD2_Bark", true),
				MaterialSlot::new("Water_Extra", true)
			]
		]);

		assert_eq!(cache.get("Tree_Leaves"), Some(TargetShader::Foliage));
		assert_eq!(cache.get("Tree_Bark"), Some(TargetShader::Polygon));
		assert_eq!(cache.get("Tree_LOD1_Atlas"), Some(TargetShader::Foliage));
		assert_eq!(cache.get("Tree_LOD2_Atlas"), Some(TargetShader::Foliage));
		assert_eq!(cache.get("Tree_LOD2_Bark"), Some(TargetShader::Polygon));
		assert_eq!(cache.get("Water_Extra"), Some(TargetShader::Water));
		assert_eq!(cache.len(), 6);
	}

	#[test]
	fn test_restore_from_entries() {
		let cache = ShaderCache::from_entries([("Rock_01", "polygon"), ("Fern_01", "foliage.gdshader")]).unwrap();

		assert_eq!(
			cache.iter().collect::<Vec<_>>(),
			[("Rock_01", TargetShader::Polygon), ("Fern_01", TargetShader::Foliage)]
		);

		assert_eq!(
			ShaderCache::from_entries([("Rock_01", "terrain")]),
			Err(MaterialError::UnknownShader("terrain".into()))
		);
	}

	#[test]
	fn test_cached_decision_overrides_detection() {
		let mut cache = ShaderCache::new();
		cache.insert("Rock_01", TargetShader::Crystal);

		let source = SourceMaterial::new("Rock_01", "");
		let material = cache.translate(&Translator::default(), &source, &IndexMap::new());

		assert_eq!(material.shader, TargetShader::Crystal);
		assert_eq!(material.scalars["opacity"], 0.7);
	}

	#[test]
	fn test_cache_follows_translator_threshold() {
		let translator = Translator::new(TranslatorConfig {
			acceptance_threshold: 10,
			..Default::default()
		});
		let slot = MaterialSlot::new("Effect_01", true);

		let mut cache = ShaderCache::for_translator(&translator);
		assert_eq!(cache.resolve(&slot), TargetShader::Particles);
		assert_eq!(cache.resolve(&slot), translator.determine_shader("Effect_01", true).0);
		assert_eq!(cache.unmatched().count(), 0);

		let mut cache = ShaderCache::new();
		assert_eq!(cache.resolve(&slot), TargetShader::Polygon);
		assert_eq!(cache.unmatched().collect::<Vec<_>>(), ["Effect_01"]);
	}
}
