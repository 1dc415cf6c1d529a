use cgmath::{Matrix4, SquareMatrix, Vector3};
use parlor::{
    bridge::ShaderState,
    data_structures::{mesh::MeshKind, scene::Scene},
    pipelines::{
        light::{LightRaw, LightsUniform},
        program::{FrameProgram, ObjectUniform},
    },
    resources::{material::MaterialEntry, texture::NOT_FOUND},
    shader::ShadingProgram,
};

#[test]
fn uniform_blocks_match_the_shader_layout() {
    assert_eq!(std::mem::size_of::<ObjectUniform>(), 192);
    assert_eq!(std::mem::size_of::<LightRaw>(), 64);
    assert_eq!(std::mem::size_of::<LightsUniform>(), 5 * 64);
}

#[test]
fn defaults_draw_untextured() {
    let program = FrameProgram::new();
    let object = program.object();
    assert_eq!(object.texture_slot, NOT_FOUND);
    assert_eq!(object.use_texture, 0);
    assert_eq!(object.uv_scale, [1.0, 1.0]);
    assert!(program.draws().is_empty());
}

#[test]
fn submit_snapshots_current_values() {
    let mut program = FrameProgram::new();
    {
        let mut state = ShaderState::new(&mut program);
        state.push_texture(2);
        state.program().submit(MeshKind::Box);
        state.push_flat_color([0.7, 0.7, 0.7, 1.0]);
        state.program().submit(MeshKind::Cylinder);
    }

    let draws = program.draws();
    assert_eq!(draws.len(), 2);
    assert_eq!(draws[0].mesh, MeshKind::Box);
    assert_eq!(draws[0].object.use_texture, 1);
    assert_eq!(draws[0].object.texture_slot, 2);
    assert_eq!(draws[1].mesh, MeshKind::Cylinder);
    assert_eq!(draws[1].object.use_texture, 0);
    assert_eq!(draws[1].object.object_color, [0.7, 0.7, 0.7, 1.0]);
    // the slot written for the first draw is still in the block
    assert_eq!(draws[1].object.texture_slot, 2);
}

#[test]
fn begin_frame_clears_draws_but_keeps_values() {
    let mut program = FrameProgram::new();
    ShaderState::new(&mut program).push_uv_scale(4.0, 2.0);
    program.submit(MeshKind::Plane);
    program.begin_frame();

    assert!(program.draws().is_empty());
    assert_eq!(program.object().uv_scale, [4.0, 2.0]);
}

#[test]
fn model_write_updates_the_normal_matrix() {
    let mut program = FrameProgram::new();
    let model = Matrix4::from_nonuniform_scale(2.0, 4.0, 1.0);
    ShaderState::new(&mut program).push_model(model);

    let object = program.object();
    let expected: [[f32; 4]; 4] = model.into();
    assert_eq!(object.model, expected);
    assert_eq!(object.normal_matrix[0], [0.5, 0.0, 0.0, 0.0]);
    assert_eq!(object.normal_matrix[1], [0.0, 0.25, 0.0, 0.0]);
    assert_eq!(object.normal_matrix[2], [0.0, 0.0, 1.0, 0.0]);
}

#[test]
fn degenerate_model_keeps_a_normal_matrix() {
    let mut program = FrameProgram::new();
    let model = Matrix4::from_nonuniform_scale(1.0, 0.0, 1.0);
    ShaderState::new(&mut program).push_model(model);
    assert_eq!(program.object().normal_matrix[0], [1.0, 0.0, 0.0, 0.0]);
}

#[test]
fn material_lands_in_the_object_block() {
    let mut program = FrameProgram::new();
    let metal = MaterialEntry {
        tag: "metal".to_string(),
        diffuse_color: Vector3::new(0.6, 0.6, 0.6),
        specular_color: Vector3::new(0.9, 0.9, 0.9),
        shininess: 128.0,
    };
    {
        let mut state = ShaderState::new(&mut program);
        state.push_material(&metal);
        state.push_lighting(true);
    }

    let object = program.object();
    assert_eq!(object.diffuse_color, [0.6, 0.6, 0.6]);
    assert_eq!(object.specular_color, [0.9, 0.9, 0.9]);
    assert_eq!(object.shininess, 128.0);
    assert_eq!(object.use_lighting, 1);
}

#[test]
fn light_names_select_light_slots() {
    let mut program = FrameProgram::new();
    ShaderState::new(&mut program).push_lights(&Scene::lounge().lights);

    let lights = program.lights();
    assert_eq!(lights.directional.vector, [-0.3, -1.0, -0.2]);
    assert_eq!(lights.directional.enabled, 1);
    assert_eq!(lights.points[0].vector, [5.0, 8.0, 3.0]);
    assert_eq!(lights.points[1].vector, [-9.0, 6.0, 2.0]);
    assert_eq!(lights.points[1].enabled, 1);
    // unused slots stay dark
    assert_eq!(lights.points[2], LightRaw::default());
    assert_eq!(lights.points[3].enabled, 0);
}

#[test]
fn out_of_range_and_unknown_names_are_ignored() {
    let mut program = FrameProgram::new();
    let before = *program.object();
    let lights_before = *program.lights();

    program.set_vec3("pointLights[4].position", Vector3::new(1.0, 2.0, 3.0));
    program.set_vec3("pointLights[x].position", Vector3::new(1.0, 2.0, 3.0));
    program.set_bool("directionalLight.bShadows", true);
    program.set_float("fogDensity", 0.5);
    program.set_mat4("view", Matrix4::identity());
    program.set_sampler("normalMap", 3);

    assert_eq!(*program.object(), before);
    assert_eq!(*program.lights(), lights_before);
}
