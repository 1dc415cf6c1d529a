//! Named-uniform interface of the active shading program.
//!
//! The scene only ever talks to the shader through uniform names, the same
//! names the WGSL program in `pipelines/scene.wgsl` is written against. A
//! write is visible to every draw issued after it until the same uniform is
//! written again.

use cgmath::{Matrix4, Vector2, Vector3, Vector4};

/// Uniform names understood by the scene program.
pub mod uniform {
    pub const MODEL: &str = "model";
    pub const OBJECT_COLOR: &str = "objectColor";
    pub const OBJECT_TEXTURE: &str = "objectTexture";
    pub const USE_TEXTURE: &str = "bUseTexture";
    pub const USE_LIGHTING: &str = "bUseLighting";
    pub const UV_SCALE: &str = "UVscale";

    pub const MATERIAL_DIFFUSE: &str = "material.diffuseColor";
    pub const MATERIAL_SPECULAR: &str = "material.specularColor";
    pub const MATERIAL_SHININESS: &str = "material.shininess";

    pub const DIRECTIONAL_LIGHT: &str = "directionalLight";
    pub const POINT_LIGHTS: &str = "pointLights";

    pub const LIGHT_DIRECTION: &str = "direction";
    pub const LIGHT_POSITION: &str = "position";
    pub const LIGHT_AMBIENT: &str = "ambient";
    pub const LIGHT_DIFFUSE: &str = "diffuse";
    pub const LIGHT_SPECULAR: &str = "specular";
    pub const LIGHT_ACTIVE: &str = "bActive";

    /// `directionalLight.<field>`
    pub fn directional(field: &str) -> String {
        format!("{DIRECTIONAL_LIGHT}.{field}")
    }

    /// `pointLights[<index>].<field>`
    pub fn point(index: usize, field: &str) -> String {
        format!("{POINT_LIGHTS}[{index}].{field}")
    }
}

/// Target of every uniform write.
///
/// Implementations apply writes immediately; there is no batching and no
/// range validation. Unknown names are ignored, the way a GL program ignores
/// a uniform location of -1.
pub trait ShadingProgram {
    fn set_mat4(&mut self, name: &str, value: Matrix4<f32>);
    fn set_vec4(&mut self, name: &str, value: Vector4<f32>);
    fn set_vec3(&mut self, name: &str, value: Vector3<f32>);
    fn set_vec2(&mut self, name: &str, value: Vector2<f32>);
    fn set_float(&mut self, name: &str, value: f32);
    fn set_bool(&mut self, name: &str, value: bool);
    /// Select the texture unit a sampler reads from.
    fn set_sampler(&mut self, name: &str, unit: i32);
}
