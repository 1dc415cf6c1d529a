//! The scene program on the CPU side.
//!
//! WGSL has no loose uniforms, so [`FrameProgram`] keeps the uniform values a
//! GL program would hold and lays them out the way `scene.wgsl` reads them.
//! Each draw takes a snapshot of the per-object block; the renderer uploads
//! all snapshots of a frame into one buffer and selects them with dynamic
//! offsets.

use cgmath::{Matrix, Matrix4, SquareMatrix, Vector2, Vector3, Vector4};

use crate::{
    data_structures::mesh::MeshKind,
    pipelines::light::{LightRaw, LightsUniform},
    resources::texture::NOT_FOUND,
    shader::{ShadingProgram, uniform},
};

/// Per-draw uniform block (`@group(2)` in `scene.wgsl`).
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ObjectUniform {
    pub model: [[f32; 4]; 4],
    /// Inverse transpose of the model matrix, columns padded to vec4.
    pub normal_matrix: [[f32; 4]; 3],
    pub object_color: [f32; 4],
    pub uv_scale: [f32; 2],
    pub use_texture: u32,
    pub use_lighting: u32,
    pub texture_slot: i32,
    pub shininess: f32,
    _padding: [u32; 2],
    pub diffuse_color: [f32; 3],
    _padding2: u32,
    pub specular_color: [f32; 3],
    _padding3: u32,
}

impl Default for ObjectUniform {
    fn default() -> Self {
        let identity: [[f32; 4]; 4] = Matrix4::identity().into();
        Self {
            model: identity,
            normal_matrix: [identity[0], identity[1], identity[2]],
            object_color: [1.0; 4],
            uv_scale: [1.0, 1.0],
            use_texture: 0,
            use_lighting: 0,
            texture_slot: NOT_FOUND,
            shininess: 32.0,
            _padding: [0; 2],
            diffuse_color: [1.0; 3],
            _padding2: 0,
            specular_color: [0.0; 3],
            _padding3: 0,
        }
    }
}

impl ObjectUniform {
    fn set_model(&mut self, model: Matrix4<f32>) {
        self.model = model.into();
        // a degenerate scale has no inverse, keep the model basis then
        let normal: [[f32; 4]; 4] = model
            .invert()
            .map_or(model, |inverse| inverse.transpose())
            .into();
        self.normal_matrix = [normal[0], normal[1], normal[2]];
    }
}

/// A snapshot of the object block taken when a mesh was drawn.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DrawCall {
    pub mesh: MeshKind,
    pub object: ObjectUniform,
}

#[derive(Debug, Default)]
pub struct FrameProgram {
    object: ObjectUniform,
    lights: LightsUniform,
    draws: Vec<DrawCall>,
}

impl FrameProgram {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget the draws of the previous frame. Uniform values persist.
    pub fn begin_frame(&mut self) {
        self.draws.clear();
    }

    /// Record a draw of `mesh` with the current uniform values.
    pub fn submit(&mut self, mesh: MeshKind) {
        self.draws.push(DrawCall {
            mesh,
            object: self.object,
        });
    }

    pub fn draws(&self) -> &[DrawCall] {
        &self.draws
    }

    pub fn object(&self) -> &ObjectUniform {
        &self.object
    }

    pub fn lights(&self) -> &LightsUniform {
        &self.lights
    }
}

/// Split `directionalLight.<field>` / `pointLights[<i>].<field>` into the
/// light slot and the field name.
fn light_slot<'a, 'n>(
    lights: &'a mut LightsUniform,
    name: &'n str,
) -> Option<(&'a mut LightRaw, &'n str)> {
    if let Some(field) = name
        .strip_prefix(uniform::DIRECTIONAL_LIGHT)
        .and_then(|rest| rest.strip_prefix('.'))
    {
        return Some((&mut lights.directional, field));
    }
    let rest = name
        .strip_prefix(uniform::POINT_LIGHTS)?
        .strip_prefix('[')?;
    let (index, field) = rest.split_once("].")?;
    let index: usize = index.parse().ok()?;
    lights.points.get_mut(index).map(|light| (light, field))
}

fn ignored(name: &str) {
    log::debug!("Uniform `{}` is not part of the scene program, write ignored", name);
}

impl ShadingProgram for FrameProgram {
    fn set_mat4(&mut self, name: &str, value: Matrix4<f32>) {
        match name {
            uniform::MODEL => self.object.set_model(value),
            _ => ignored(name),
        }
    }

    fn set_vec4(&mut self, name: &str, value: Vector4<f32>) {
        match name {
            uniform::OBJECT_COLOR => self.object.object_color = value.into(),
            _ => ignored(name),
        }
    }

    fn set_vec3(&mut self, name: &str, value: Vector3<f32>) {
        match name {
            uniform::MATERIAL_DIFFUSE => self.object.diffuse_color = value.into(),
            uniform::MATERIAL_SPECULAR => self.object.specular_color = value.into(),
            _ => match light_slot(&mut self.lights, name) {
                Some((light, uniform::LIGHT_DIRECTION | uniform::LIGHT_POSITION)) => {
                    light.vector = value.into()
                }
                Some((light, uniform::LIGHT_AMBIENT)) => light.ambient = value.into(),
                Some((light, uniform::LIGHT_DIFFUSE)) => light.diffuse = value.into(),
                Some((light, uniform::LIGHT_SPECULAR)) => light.specular = value.into(),
                _ => ignored(name),
            },
        }
    }

    fn set_vec2(&mut self, name: &str, value: Vector2<f32>) {
        match name {
            uniform::UV_SCALE => self.object.uv_scale = value.into(),
            _ => ignored(name),
        }
    }

    fn set_float(&mut self, name: &str, value: f32) {
        match name {
            uniform::MATERIAL_SHININESS => self.object.shininess = value,
            _ => ignored(name),
        }
    }

    fn set_bool(&mut self, name: &str, value: bool) {
        match name {
            uniform::USE_TEXTURE => self.object.use_texture = value as u32,
            uniform::USE_LIGHTING => self.object.use_lighting = value as u32,
            _ => match light_slot(&mut self.lights, name) {
                Some((light, uniform::LIGHT_ACTIVE)) => light.enabled = value as u32,
                _ => ignored(name),
            },
        }
    }

    fn set_sampler(&mut self, name: &str, unit: i32) {
        match name {
            uniform::OBJECT_TEXTURE => self.object.texture_slot = unit,
            _ => ignored(name),
        }
    }
}

