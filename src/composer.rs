//! Scene preparation and per-frame draw composition.
//!
//! The [`SceneComposer`] owns the texture and material registries and the
//! mesh provider. [`prepare`](SceneComposer::prepare) fills them once from
//! the [`Scene`] description; [`render`](SceneComposer::render) then walks the
//! object list in order and, per object, pushes transform, surface, material
//! and UV scale before asking the mesh provider to draw.

use std::collections::HashSet;

use crate::{
    bridge::ShaderState,
    data_structures::{
        scene::{RenderObject, Scene, SurfaceSource},
        transform,
    },
    error::SceneError,
    resources::{
        decoder::ImageDecoder,
        material::MaterialRegistry,
        mesh::MeshProvider,
        texture::{TextureBackend, TextureRegistry},
    },
};

const SCENE_NAME: &str = "lounge";

pub struct SceneComposer<B: TextureBackend, M: MeshProvider> {
    scene: Scene,
    textures: TextureRegistry<B>,
    materials: MaterialRegistry,
    meshes: M,
    prepared: bool,
}

impl<B: TextureBackend, M: MeshProvider> SceneComposer<B, M> {
    pub fn new(scene: Scene, textures: TextureRegistry<B>, meshes: M) -> Self {
        Self {
            scene,
            textures,
            materials: MaterialRegistry::new(),
            meshes,
            prepared: false,
        }
    }

    /// Load meshes and textures, define materials and set up the lights.
    ///
    /// A texture that cannot be loaded is skipped and objects using it draw
    /// with an unresolved slot. Running out of texture units stops the
    /// preparation.
    pub fn prepare(
        &mut self,
        decoder: &impl ImageDecoder,
        program: &mut M::Program,
    ) -> Result<(), SceneError> {
        if self.prepared {
            return Err(SceneError::AlreadyPrepared(SCENE_NAME));
        }
        log::info!(
            "Preparing scene `{}` v{}: {} textures, {} materials, {} objects",
            SCENE_NAME,
            self.scene.version,
            self.scene.textures.len(),
            self.scene.materials.len(),
            self.scene.objects.len()
        );

        for kind in self.scene.mesh_kinds() {
            self.meshes.load(kind);
        }

        for source in self.scene.textures {
            match self.textures.register(decoder, source.path, source.tag) {
                Ok(_) => (),
                Err(e) if e.is_fatal() => return Err(SceneError::CapacityExceeded(e)),
                Err(_) => log::warn!("Texture `{}` skipped", source.tag),
            }
        }

        for preset in self.scene.materials {
            self.materials
                .define(preset.tag, preset.diffuse, preset.specular, preset.shininess);
        }

        let mut state = ShaderState::new(program);
        state.push_lighting(true);
        state.push_lights(&self.scene.lights);

        self.textures.bind_all();
        self.warn_unresolved();
        self.prepared = true;
        Ok(())
    }

    /// Issue every draw of the scene, in scene order.
    pub fn render(&mut self, program: &mut M::Program) -> Result<(), SceneError> {
        if !self.prepared {
            return Err(SceneError::NotPrepared(SCENE_NAME));
        }
        let mut state = ShaderState::new(program);
        for object in self.scene.objects {
            self.draw_object(object, &mut state);
        }
        Ok(())
    }

    fn draw_object(&mut self, object: &RenderObject, state: &mut ShaderState<'_, M::Program>) {
        log::trace!("Drawing {}", object.name);
        state.push_model(transform::compose(&object.transform));

        match object.surface {
            SurfaceSource::Texture(tag) => self.push_texture(state, tag),
            SurfaceSource::Color(rgba) => state.push_flat_color(rgba),
        }
        if let Some(tag) = object.material {
            self.push_material(state, tag);
        }
        if let Some([u, v]) = object.uv_scale {
            state.push_uv_scale(u, v);
        }

        self.meshes.draw(object.mesh, state);
    }

    fn push_texture(&self, state: &mut ShaderState<'_, M::Program>, tag: &str) {
        state.push_texture(self.textures.resolve(tag));
    }

    fn push_material(&self, state: &mut ShaderState<'_, M::Program>, tag: &str) {
        if let Some(material) = self.materials.resolve(tag) {
            state.push_material(&material);
        }
    }

    /// Select the texture registered under `tag` for the next draws.
    pub fn set_shader_texture(&self, program: &mut M::Program, tag: &str) {
        self.push_texture(&mut ShaderState::new(program), tag);
    }

    /// Push the material defined under `tag`. Unknown tags push nothing.
    pub fn set_shader_material(&self, program: &mut M::Program, tag: &str) {
        self.push_material(&mut ShaderState::new(program), tag);
    }

    fn warn_unresolved(&self) {
        let mut reported = HashSet::new();
        for object in self.scene.objects {
            if let SurfaceSource::Texture(tag) = object.surface {
                if self.textures.find(tag).is_none() && reported.insert(("texture", tag)) {
                    log::warn!("Texture `{}` is not registered, objects using it draw untextured", tag);
                }
            }
            if let Some(tag) = object.material {
                if self.materials.resolve(tag).is_none() && reported.insert(("material", tag)) {
                    log::warn!("Material `{}` is not defined, objects using it keep the previous material", tag);
                }
            }
        }
    }

    /// Release the textures and forget the materials. The composer has to be
    /// prepared again before it can render.
    pub fn teardown(&mut self) {
        self.textures.teardown();
        self.materials = MaterialRegistry::new();
        self.prepared = false;
    }

    pub fn is_prepared(&self) -> bool {
        self.prepared
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn textures(&self) -> &TextureRegistry<B> {
        &self.textures
    }

    pub fn materials(&self) -> &MaterialRegistry {
        &self.materials
    }

    pub fn meshes(&self) -> &M {
        &self.meshes
    }
}
