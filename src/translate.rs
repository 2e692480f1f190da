use indexmap::IndexMap;
#[cfg(feature = "tracing")]
use tracing::{debug, trace};

use crate::{
	config::TranslatorConfig,
	detect::{self, Detection},
	material::{Color, SourceMaterial, TargetMaterial},
	quirks,
	shader::TargetShader,
	tables::{self, DefaultValue, PropertyClass}
};

/// A translated material, along with what happened to it on the way.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Clone, Debug, PartialEq)]
pub struct Translation {
	pub material: TargetMaterial,

	/// How the shader was detected. `None` when it was overridden.
	pub detection: Option<Detection>,

	/// The detected shader, if the material lacked the properties to back it up and was given the default instead.
	pub demoted_from: Option<TargetShader>,

	/// Mapped texture slots whose texture GUID couldn't be resolved to a file.
	pub unresolved_textures: Vec<String>,

	/// Source colours whose zero alpha was corrected.
	pub alpha_corrected: Vec<String>,

	/// Source scalars emitted as booleans.
	pub extracted_booleans: Vec<String>
}

/// Translates source materials to target materials.
///
/// A `Translator` holds no state besides its configuration and can be shared freely between threads.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Translator {
	config: TranslatorConfig
}

impl Translator {
	pub fn new(config: TranslatorConfig) -> Self {
		Self { config }
	}

	pub fn config(&self) -> &TranslatorConfig {
		&self.config
	}

	/// Detect the target shader for a material, with the evidence behind the decision.
	pub fn classify(&self, source: &SourceMaterial) -> Detection {
		detect::classify(
			&self.config,
			&source.shader_guid,
			&source.name,
			Some(&source.scalars),
			Some(&source.colors)
		)
	}

	/// Detect the target shader for a material given as separate parts.
	pub fn detect(
		&self,
		identifier: &str,
		name: &str,
		scalars: Option<&IndexMap<String, f32>>,
		colors: Option<&IndexMap<String, Color>>
	) -> TargetShader {
		detect::classify(&self.config, identifier, name, scalars, colors).shader
	}

	/// Detect a shader from a material name alone, as [`detect_from_name`](crate::detect_from_name) does.
	pub fn detect_from_name(&self, name: &str) -> Option<TargetShader> {
		detect::classify_name(&self.config, name)
	}

	/// Pick a shader for an entry of a mesh material list, as [`determine_shader`](crate::determine_shader) does.
	pub fn determine_shader(&self, name: &str, uses_custom_shader: bool) -> (TargetShader, bool) {
		detect::decide_slot(&self.config, name, uses_custom_shader)
	}

	/// Check that a material carries at least one property characteristic of `shader`. The default shader always
	/// passes.
	pub fn validate(&self, shader: TargetShader, source: &SourceMaterial) -> bool {
		if shader.is_default() {
			return true;
		}

		let textures = source.textures.keys().map(String::as_str).collect::<Vec<_>>();
		let scalars = source.scalars.keys().map(String::as_str).collect::<Vec<_>>();
		let colors = source.colors.keys().map(String::as_str).collect::<Vec<_>>();

		let characteristic = tables::profile(shader).find_characteristic(&textures, &scalars, &colors);

		#[cfg(feature = "tracing")]
		if let Some(property) = characteristic {
			trace!(shader = %shader, property, "characteristic property found");
		}

		characteristic.is_some()
	}

	/// Translate a material.
	///
	/// `filenames` maps texture GUIDs to texture filenames. Textures missing from it are dropped. When `shader` is
	/// given it is used as is, without detection or validation.
	pub fn translate(
		&self,
		source: &SourceMaterial,
		filenames: &IndexMap<String, String>,
		shader: Option<TargetShader>
	) -> TargetMaterial {
		self.translate_detailed(source, filenames, shader).material
	}

	/// Translate a material, reporting detection and every correction made.
	#[cfg_attr(feature = "tracing", tracing::instrument(skip_all, fields(material = %source.name)))]
	pub fn translate_detailed(
		&self,
		source: &SourceMaterial,
		filenames: &IndexMap<String, String>,
		shader: Option<TargetShader>
	) -> Translation {
		let mut demoted_from = None;

		let (shader, detection) = match shader {
			Some(shader) => {
				#[cfg(feature = "tracing")]
				debug!(shader = %shader, "using override shader");
				(shader, None)
			}

			None => {
				let detection = self.classify(source);
				let mut shader = detection.shader;

				if !detection.is_authoritative() && !self.validate(shader, source) {
					#[cfg(feature = "tracing")]
					debug!(
						detected = %shader,
						"material has no properties specific to the detected shader, demoting to default"
					);

					demoted_from = Some(shader);
					shader = TargetShader::DEFAULT;
				}

				(shader, Some(detection))
			}
		};

		let mut translation = Translation {
			material: TargetMaterial::new(source.name.to_owned(), shader),
			detection,
			demoted_from,
			unresolved_textures: vec![],
			alpha_corrected: vec![],
			extracted_booleans: vec![]
		};

		self.translate_textures(source, filenames, &mut translation);
		self.translate_scalars(source, &mut translation);
		self.translate_colors(source, &mut translation);

		apply_defaults(&mut translation.material);

		#[cfg(feature = "tracing")]
		debug!(
			shader = %shader,
			textures = translation.material.textures.len(),
			scalars = translation.material.scalars.len(),
			booleans = translation.material.booleans.len(),
			colors = translation.material.colors.len(),
			"translated material"
		);

		translation
	}

	/// Build a stand-in for a material that is referenced but missing, using only its name.
	#[cfg_attr(feature = "tracing", tracing::instrument(skip(self)))]
	pub fn synthesize_placeholder(&self, name: &str) -> TargetMaterial {
		let shader = detect::classify(&self.config, "", name, None, None).shader;

		#[cfg(feature = "tracing")]
		debug!(shader = %shader, "creating placeholder material");

		let mut material = TargetMaterial::new(name, shader);
		apply_defaults(&mut material);
		apply_values(&mut material, tables::profile(shader).placeholder.iter().copied());

		material
	}

	fn param(&self, shader: TargetShader, class: PropertyClass, identifier: &str) -> Option<&'static str> {
		let param = tables::profile(shader).param(class, identifier);

		if param.is_none() && self.config.inherit_generic_tables && !shader.is_default() {
			tables::profile(TargetShader::DEFAULT).param(class, identifier)
		} else {
			param
		}
	}

	fn translate_textures(
		&self,
		source: &SourceMaterial,
		filenames: &IndexMap<String, String>,
		translation: &mut Translation
	) {
		let shader = translation.material.shader;

		for (slot, texture) in &source.textures {
			let Some(param) = self.param(shader, PropertyClass::Texture, slot) else {
				#[cfg(feature = "tracing")]
				trace!(slot = %slot, "texture slot not mapped");
				continue;
			};

			match filenames.get(&texture.guid) {
				Some(filename) => {
					translation.material.textures.insert(param.to_owned(), filename.to_owned());
				}

				None => {
					#[cfg(feature = "tracing")]
					debug!(slot = %slot, guid = %texture.guid, "could not resolve texture GUID");
					translation.unresolved_textures.push(slot.to_owned());
				}
			}
		}
	}

	fn translate_scalars(&self, source: &SourceMaterial, translation: &mut Translation) {
		let shader = translation.material.shader;
		let (scalars, booleans) = quirks::extract_booleans(&source.scalars);

		for (identifier, value) in scalars {
			match self.param(shader, PropertyClass::Scalar, identifier) {
				Some(param) => {
					translation.material.scalars.insert(param.to_owned(), value);
				}

				None => {
					#[cfg(feature = "tracing")]
					trace!(identifier, "scalar not mapped");
				}
			}
		}

		for (identifier, value) in booleans {
			let param = self
				.param(shader, PropertyClass::Scalar, identifier)
				.map(str::to_owned)
				.unwrap_or_else(|| quirks::derive_param_name(identifier));

			#[cfg(feature = "tracing")]
			debug!(identifier, param = %param, value, "extracted boolean");

			if translation.material.scalars.shift_remove(&param).is_some() {
				#[cfg(feature = "tracing")]
				debug!(param = %param, "boolean replaces scalar of the same name");
			}

			translation.material.booleans.insert(param, value);
			translation.extracted_booleans.push(identifier.to_owned());
		}
	}

	fn translate_colors(&self, source: &SourceMaterial, translation: &mut Translation) {
		let shader = translation.material.shader;

		for (identifier, &color) in &source.colors {
			let Some(param) = self.param(shader, PropertyClass::Color, identifier) else {
				#[cfg(feature = "tracing")]
				trace!(identifier = %identifier, "colour not mapped");
				continue;
			};

			let color = match quirks::fix_alpha_zero(
				color,
				identifier,
				&source.scalars,
				self.config.transparent_blend_threshold
			) {
				Some(fixed) => {
					translation.alpha_corrected.push(identifier.to_owned());
					fixed
				}

				None => color
			};

			translation.material.colors.insert(param.to_owned(), color);
		}
	}
}

/// Fill in the target shader's defaults for every parameter the material doesn't set.
pub fn apply_defaults(material: &mut TargetMaterial) {
	apply_values(material, tables::shader_defaults(material.shader));
}

fn apply_values(material: &mut TargetMaterial, values: impl IntoIterator<Item = (&'static str, DefaultValue)>) {
	for (param, value) in values {
		if material.has_param(param) {
			continue;
		}

		#[cfg(feature = "tracing")]
		debug!(param, value = ?value, "applied default");

		match value {
			DefaultValue::Scalar(value) => {
				material.scalars.insert(param.to_owned(), value);
			}

			DefaultValue::Boolean(value) => {
				material.booleans.insert(param.to_owned(), value);
			}

			DefaultValue::Color(value) => {
				material.colors.insert(param.to_owned(), value);
			}
		}
	}
}
