//! Per-draw state forwarding.
//!
//! [`ShaderState`] is the render-state context every push and every draw goes
//! through. It holds the only mutable borrow of the program for as long as a
//! frame (or a preparation step) runs, so the order in which state reaches the
//! shader is the order of the calls made on it. It keeps nothing of its own:
//! each push turns into uniform writes right away.

use cgmath::{Matrix4, Vector2, Vector3, Vector4};

use crate::{
    data_structures::scene::LightSetup,
    resources::material::MaterialEntry,
    shader::{ShadingProgram, uniform},
};

pub struct ShaderState<'a, P: ShadingProgram> {
    program: &'a mut P,
}

impl<'a, P: ShadingProgram> ShaderState<'a, P> {
    pub fn new(program: &'a mut P) -> Self {
        Self { program }
    }

    /// The program the pushes land in, for the draw that follows them.
    pub fn program(&mut self) -> &mut P {
        &mut *self.program
    }

    pub fn push_model(&mut self, model: Matrix4<f32>) {
        self.program.set_mat4(uniform::MODEL, model);
    }

    /// Draw the next meshes with a flat colour instead of a texture.
    pub fn push_flat_color(&mut self, rgba: [f32; 4]) {
        self.program.set_bool(uniform::USE_TEXTURE, false);
        self.program.set_vec4(uniform::OBJECT_COLOR, Vector4::from(rgba));
    }

    /// Sample the next meshes from texture unit `slot`.
    ///
    /// The slot is forwarded as it is, including
    /// [`NOT_FOUND`](crate::resources::texture::NOT_FOUND). What an invalid
    /// unit samples is up to the program.
    pub fn push_texture(&mut self, slot: i32) {
        self.program.set_bool(uniform::USE_TEXTURE, true);
        self.program.set_sampler(uniform::OBJECT_TEXTURE, slot);
    }

    pub fn push_material(&mut self, material: &MaterialEntry) {
        self.program
            .set_vec3(uniform::MATERIAL_DIFFUSE, material.diffuse_color);
        self.program
            .set_vec3(uniform::MATERIAL_SPECULAR, material.specular_color);
        self.program
            .set_float(uniform::MATERIAL_SHININESS, material.shininess);
    }

    pub fn push_uv_scale(&mut self, u: f32, v: f32) {
        self.program.set_vec2(uniform::UV_SCALE, Vector2::new(u, v));
    }

    pub fn push_lighting(&mut self, enabled: bool) {
        self.program.set_bool(uniform::USE_LIGHTING, enabled);
    }

    /// Write the directional light and every point light of `lights`.
    pub fn push_lights(&mut self, lights: &LightSetup) {
        let sun = &lights.directional;
        self.program.set_vec3(
            &uniform::directional(uniform::LIGHT_DIRECTION),
            Vector3::from(sun.direction),
        );
        self.push_light_terms(
            &uniform::directional(uniform::LIGHT_AMBIENT),
            &uniform::directional(uniform::LIGHT_DIFFUSE),
            &uniform::directional(uniform::LIGHT_SPECULAR),
            sun.ambient,
            sun.diffuse,
            sun.specular,
        );
        self.program
            .set_bool(&uniform::directional(uniform::LIGHT_ACTIVE), sun.active);

        for (index, light) in lights.points.iter().enumerate() {
            self.program.set_vec3(
                &uniform::point(index, uniform::LIGHT_POSITION),
                Vector3::from(light.position),
            );
            self.push_light_terms(
                &uniform::point(index, uniform::LIGHT_AMBIENT),
                &uniform::point(index, uniform::LIGHT_DIFFUSE),
                &uniform::point(index, uniform::LIGHT_SPECULAR),
                light.ambient,
                light.diffuse,
                light.specular,
            );
            self.program
                .set_bool(&uniform::point(index, uniform::LIGHT_ACTIVE), light.active);
        }
    }

    fn push_light_terms(
        &mut self,
        ambient_name: &str,
        diffuse_name: &str,
        specular_name: &str,
        ambient: [f32; 3],
        diffuse: [f32; 3],
        specular: [f32; 3],
    ) {
        self.program.set_vec3(ambient_name, Vector3::from(ambient));
        self.program.set_vec3(diffuse_name, Vector3::from(diffuse));
        self.program.set_vec3(specular_name, Vector3::from(specular));
    }
}
