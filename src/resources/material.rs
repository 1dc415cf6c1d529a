//! Named material presets.

use cgmath::Vector3;

/// Phong material values pushed to the shader before a draw.
#[derive(Clone, Debug, PartialEq)]
pub struct MaterialEntry {
    pub tag: String,
    pub diffuse_color: Vector3<f32>,
    pub specular_color: Vector3<f32>,
    pub shininess: f32,
}

/// Ordered catalogue of material presets.
///
/// Like the texture registry, duplicate tags are accepted and the first
/// definition wins every lookup.
#[derive(Clone, Debug, Default)]
pub struct MaterialRegistry {
    entries: Vec<MaterialEntry>,
}

impl MaterialRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn define(
        &mut self,
        tag: impl Into<String>,
        diffuse_color: impl Into<Vector3<f32>>,
        specular_color: impl Into<Vector3<f32>>,
        shininess: f32,
    ) {
        let tag = tag.into();
        if self.entries.iter().any(|entry| entry.tag == tag) {
            log::warn!("Material `{}` is already defined, the new definition is unreachable", tag);
        }
        self.entries.push(MaterialEntry {
            tag,
            diffuse_color: diffuse_color.into(),
            specular_color: specular_color.into(),
            shininess,
        });
    }

    /// Copy of the first material tagged `tag`.
    pub fn resolve(&self, tag: &str) -> Option<MaterialEntry> {
        self.entries.iter().find(|entry| entry.tag == tag).cloned()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MaterialEntry> {
        self.entries.iter()
    }
}
