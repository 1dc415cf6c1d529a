//! Static scene description.
//!
//! A [`Scene`] is plain data: the textures to load, the material presets, the
//! light setup and the ordered list of draws. Nothing in here touches the GPU;
//! the [`SceneComposer`](crate::composer::SceneComposer) turns it into uniform
//! writes and draw calls.

use crate::data_structures::{mesh::MeshKind, transform::TransformSpec};

/// Most point lights the scene program has slots for.
pub const MAX_POINT_LIGHTS: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextureSource {
    /// Path relative to the asset directory.
    pub path: &'static str,
    pub tag: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MaterialPreset {
    pub tag: &'static str,
    pub diffuse: [f32; 3],
    pub specular: [f32; 3],
    pub shininess: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DirectionalLight {
    pub direction: [f32; 3],
    pub ambient: [f32; 3],
    pub diffuse: [f32; 3],
    pub specular: [f32; 3],
    pub active: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointLight {
    pub position: [f32; 3],
    pub ambient: [f32; 3],
    pub diffuse: [f32; 3],
    pub specular: [f32; 3],
    pub active: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LightSetup {
    pub directional: DirectionalLight,
    /// At most [`MAX_POINT_LIGHTS`]; extra entries are written but never lit.
    pub points: &'static [PointLight],
}

/// Where an object's base colour comes from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SurfaceSource {
    /// Sample the texture registered under this tag.
    Texture(&'static str),
    /// Flat RGBA colour, no texture.
    Color([f32; 4]),
}

/// One draw in the fixed scene order.
///
/// `material` and `uv_scale` are optional: `None` pushes nothing, so the value
/// left by an earlier object stays in effect for this draw.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderObject {
    pub name: &'static str,
    pub mesh: MeshKind,
    pub transform: TransformSpec,
    pub surface: SurfaceSource,
    pub material: Option<&'static str>,
    pub uv_scale: Option<[f32; 2]>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scene {
    pub version: u32,
    pub textures: &'static [TextureSource],
    pub materials: &'static [MaterialPreset],
    pub lights: LightSetup,
    pub objects: &'static [RenderObject],
}

impl Scene {
    /// The furnished corner: armchair, cabinet with record player, cup and
    /// four framed pictures against a wall.
    pub fn lounge() -> Self {
        LOUNGE
    }

    /// Mesh kinds the object list draws, each once, in first-use order.
    pub fn mesh_kinds(&self) -> Vec<MeshKind> {
        let mut kinds = Vec::new();
        for object in self.objects {
            if !kinds.contains(&object.mesh) {
                kinds.push(object.mesh);
            }
        }
        kinds
    }
}

pub const LOUNGE_VERSION: u32 = 1;

pub const LOUNGE: Scene = Scene {
    version: LOUNGE_VERSION,
    textures: LOUNGE_TEXTURES,
    materials: LOUNGE_MATERIALS,
    lights: LOUNGE_LIGHTS,
    objects: LOUNGE_OBJECTS,
};

const fn texture(path: &'static str, tag: &'static str) -> TextureSource {
    TextureSource { path, tag }
}

pub const LOUNGE_TEXTURES: &[TextureSource] = &[
    texture("textures/wood.jpg", "wood"),
    texture("textures/fabric.jpg", "fabric"),
    texture("textures/white.jpg", "white"),
    texture("textures/floor.jpg", "floor"),
    texture("textures/pillow.jpg", "pillow"),
    texture("textures/wall.jpg", "wall"),
    texture("textures/metal.jpg", "metal"),
    texture("textures/record_player.jpg", "record_player"),
    texture("textures/turntable.jpg", "turntable"),
    texture("textures/vinyl.jpg", "vinyl"),
    texture("textures/polka.jpg", "polka"),
    texture("textures/picture1.jpg", "picture1"),
    texture("textures/picture2.jpg", "picture2"),
    texture("textures/picture3.jpg", "picture3"),
    texture("textures/picture4.jpg", "picture4"),
];

const fn material(
    tag: &'static str,
    diffuse: [f32; 3],
    specular: [f32; 3],
    shininess: f32,
) -> MaterialPreset {
    MaterialPreset {
        tag,
        diffuse,
        specular,
        shininess,
    }
}

pub const LOUNGE_MATERIALS: &[MaterialPreset] = &[
    material("wood", [0.6, 0.3, 0.1], [0.2, 0.2, 0.2], 10.0),
    material("fabric", [0.8, 0.5, 0.5], [0.1, 0.1, 0.1], 5.0),
    material("white", [1.0, 1.0, 1.0], [0.5, 0.5, 0.5], 20.0),
    material("floor", [0.4, 0.4, 0.4], [0.2, 0.2, 0.2], 15.0),
    material("pillow", [1.0, 1.0, 1.0], [0.5, 0.5, 0.5], 25.0),
    material("metal", [0.6, 0.6, 0.6], [0.9, 0.9, 0.9], 128.0),
    material("vinyl", [0.2, 0.2, 0.2], [0.7, 0.7, 0.7], 50.0),
    material("turntable", [0.5, 0.5, 0.5], [0.8, 0.8, 0.8], 30.0),
    material("polka", [1.0, 1.0, 1.0], [0.5, 0.5, 0.5], 10.0),
    material("picture", [1.0, 1.0, 1.0], [0.5, 0.5, 0.5], 10.0),
];

pub const LOUNGE_LIGHTS: LightSetup = LightSetup {
    // soft interior daylight
    directional: DirectionalLight {
        direction: [-0.3, -1.0, -0.2],
        ambient: [0.3, 0.3, 0.32],
        diffuse: [0.5, 0.5, 0.52],
        specular: [0.3, 0.3, 0.3],
        active: true,
    },
    points: &[
        // warm fill by the cabinet
        PointLight {
            position: [5.0, 8.0, 3.0],
            ambient: [0.15, 0.15, 0.15],
            diffuse: [0.6, 0.58, 0.55],
            specular: [0.4, 0.4, 0.4],
            active: true,
        },
        // fill by the chair
        PointLight {
            position: [-9.0, 6.0, 2.0],
            ambient: [0.2, 0.2, 0.2],
            diffuse: [0.5, 0.48, 0.46],
            specular: [0.2, 0.2, 0.2],
            active: true,
        },
    ],
};

const UNIT_UV: Option<[f32; 2]> = Some([1.0, 1.0]);

/// Textured draw with a material and the unit UV scale.
const fn textured(
    name: &'static str,
    mesh: MeshKind,
    transform: TransformSpec,
    texture: &'static str,
    material: &'static str,
) -> RenderObject {
    RenderObject {
        name,
        mesh,
        transform,
        surface: SurfaceSource::Texture(texture),
        material: Some(material),
        uv_scale: UNIT_UV,
    }
}

/// Textured draw that keeps the UV scale of the previous object.
const fn textured_keep_uv(
    name: &'static str,
    mesh: MeshKind,
    transform: TransformSpec,
    texture: &'static str,
    material: &'static str,
) -> RenderObject {
    RenderObject {
        uv_scale: None,
        ..textured(name, mesh, transform, texture, material)
    }
}

const fn at(scale: [f32; 3], rotation: [f32; 3], position: [f32; 3]) -> TransformSpec {
    TransformSpec::new(scale, rotation, position)
}

const CHAIR_LEG: [f32; 3] = [0.2, 4.5, 0.2];
const CABINET_LEG: [f32; 3] = [0.15, 2.0, 0.15];
const CABINET_DOOR: [f32; 3] = [4.8, 4.0, 0.1];
const RECORD_PLAYER: [f32; 3] = [3.2, 0.8, 3.2];
const NO_ROTATION: [f32; 3] = [0.0, 0.0, 0.0];
const FACING_ROOM: [f32; 3] = [0.0, 180.0, 0.0];

pub const LOUNGE_OBJECTS: &[RenderObject] = &[
    textured("floor", MeshKind::Plane, at([20.0, 1.0, 10.0], NO_ROTATION, [0.0, 0.0, 0.0]), "floor", "floor"),
    textured("wall", MeshKind::Plane, at([20.0, 1.0, 10.0], [90.0, 180.0, 0.0], [0.0, 10.0, -5.0]), "white", "white"),
    // armchair; the first leg reuses whatever material the wall left behind
    RenderObject {
        material: None,
        ..textured("chair leg front left", MeshKind::Cylinder, at(CHAIR_LEG, [0.0, 0.0, -10.0], [-13.0, 0.0, 4.5]), "wood", "wood")
    },
    textured("chair leg back left", MeshKind::Cylinder, at(CHAIR_LEG, [10.0, 0.0, -10.0], [-13.0, 0.0, -1.0]), "wood", "wood"),
    textured("chair leg front right", MeshKind::Cylinder, at(CHAIR_LEG, [0.0, 0.0, 10.0], [-6.0, 0.0, 4.5]), "wood", "wood"),
    textured("chair leg back right", MeshKind::Cylinder, at(CHAIR_LEG, [10.0, 0.0, 10.0], [-6.0, 0.0, -1.0]), "wood", "wood"),
    textured("seat frame", MeshKind::Box, at([6.0, 0.3, 5.5], NO_ROTATION, [-9.5, 2.25, 1.75]), "wood", "wood"),
    textured("seat cushion", MeshKind::Box, at([5.5, 0.8, 5.2], NO_ROTATION, [-9.5, 2.8, 1.75]), "fabric", "fabric"),
    textured("back cushion", MeshKind::Box, at([5.0, 3.5, 0.8], [-10.0, 0.0, 0.0], [-9.5, 4.5, -1.2]), "fabric", "fabric"),
    textured("armrest left", MeshKind::Box, at([1.0, 0.3, 5.5], NO_ROTATION, [-12.5, 4.35, 1.75]), "wood", "wood"),
    textured("armrest right", MeshKind::Box, at([1.0, 0.3, 5.5], NO_ROTATION, [-6.5, 4.35, 1.75]), "wood", "wood"),
    textured("pillow", MeshKind::Box, at([2.5, 3.5, 0.5], [-10.0, 0.0, 0.0], [-9.5, 4.5, -0.5]), "white", "pillow"),
    textured("pillowcase", MeshKind::Box, at([2.5, 3.5, 0.51], [-10.0, 0.0, 0.0], [-9.5, 4.5, -0.49]), "pillow", "pillow"),
    // cabinet; only the first leg sets the UV scale
    textured("cabinet leg front left", MeshKind::Box, at(CABINET_LEG, NO_ROTATION, [1.0, 1.0, 1.5]), "metal", "metal"),
    textured_keep_uv("cabinet leg front right", MeshKind::Box, at(CABINET_LEG, NO_ROTATION, [10.5, 1.0, 1.5]), "metal", "metal"),
    textured_keep_uv("cabinet leg back left", MeshKind::Box, at(CABINET_LEG, NO_ROTATION, [1.0, 1.0, -1.5]), "metal", "metal"),
    textured_keep_uv("cabinet leg back right", MeshKind::Box, at(CABINET_LEG, NO_ROTATION, [10.5, 1.0, -1.5]), "metal", "metal"),
    textured_keep_uv("cabinet body", MeshKind::Box, at([10.0, 4.4, 3.5], NO_ROTATION, [5.75, 4.0, 0.0]), "metal", "metal"),
    textured_keep_uv("cabinet door left", MeshKind::Box, at(CABINET_DOOR, NO_ROTATION, [3.3, 4.0, 1.85]), "metal", "metal"),
    textured_keep_uv("cabinet door right", MeshKind::Box, at(CABINET_DOOR, NO_ROTATION, [8.3, 4.0, 1.85]), "metal", "metal"),
    // record player
    textured("record player base", MeshKind::Box, at(RECORD_PLAYER, [0.0, -10.0, 0.0], [5.42, 6.65, 0.1]), "record_player", "metal"),
    textured("record player lid", MeshKind::Box, at(RECORD_PLAYER, [90.0, -10.0, 0.0], [5.75, 8.67, -1.85]), "record_player", "metal"),
    RenderObject {
        name: "turntable",
        mesh: MeshKind::Cylinder,
        transform: at([1.5, 0.2, 1.5], [0.0, -10.0, 0.0], [5.42, 7.1, 0.1]),
        surface: SurfaceSource::Color([0.7, 0.7, 0.7, 1.0]),
        material: Some("metal"),
        uv_scale: None,
    },
    textured("record", MeshKind::Cylinder, at([1.2, 0.05, 1.2], [0.0, -10.0, 0.0], [5.42, 7.35, 0.1]), "vinyl", "vinyl"),
    textured("tonearm", MeshKind::Box, at([0.1, 2.2, 0.1], [-90.0, -23.0, 0.0], [6.3, 7.45, 0.1]), "metal", "metal"),
    textured("tonearm head", MeshKind::Box, at([0.23, 0.9, 0.23], [0.0, -23.0, 0.0], [6.76, 7.35, -0.9]), "metal", "metal"),
    textured("cup", MeshKind::Cylinder, at([0.4, 1.0, 0.4], NO_ROTATION, [2.5, 6.0, 1.0]), "polka", "polka"),
    // picture frames: wooden frame, wall-coloured mat, picture
    textured("frame 1", MeshKind::Box, at([4.5, 7.0, 0.1], FACING_ROOM, [-5.0, 9.5, -4.9]), "wood", "wood"),
    textured("mat 1", MeshKind::Box, at([4.0, 6.5, 0.1], FACING_ROOM, [-5.0, 9.5, -4.8]), "wall", "white"),
    textured("picture 1", MeshKind::Box, at([3.5, 6.0, 0.1], FACING_ROOM, [-5.0, 9.5, -4.7]), "picture1", "picture"),
    textured("frame 2", MeshKind::Box, at([4.5, 4.5, 0.1], FACING_ROOM, [-11.0, 11.5, -4.9]), "wood", "wood"),
    textured("mat 2", MeshKind::Box, at([4.0, 4.0, 0.1], FACING_ROOM, [-11.0, 11.5, -4.8]), "wall", "white"),
    textured("picture 2", MeshKind::Box, at([3.5, 3.5, 0.1], FACING_ROOM, [-11.0, 11.5, -4.7]), "picture2", "picture"),
    textured("frame 3", MeshKind::Box, at([3.2, 5.0, 0.1], FACING_ROOM, [-5.5, 16.5, -4.9]), "wood", "wood"),
    textured("mat 3", MeshKind::Box, at([2.8, 4.5, 0.1], FACING_ROOM, [-5.5, 16.5, -4.8]), "wall", "white"),
    textured("picture 3", MeshKind::Box, at([2.5, 4.0, 0.1], FACING_ROOM, [-5.5, 16.5, -4.7]), "picture3", "picture"),
    textured("frame 4", MeshKind::Box, at([6.0, 5.0, 0.1], FACING_ROOM, [-11.0, 17.5, -4.9]), "wood", "wood"),
    textured("mat 4", MeshKind::Box, at([5.5, 4.5, 0.1], FACING_ROOM, [-11.0, 17.5, -4.8]), "wall", "white"),
    textured("picture 4", MeshKind::Box, at([5.0, 4.0, 0.1], FACING_ROOM, [-11.0, 17.5, -4.7]), "picture4", "picture"),
];
