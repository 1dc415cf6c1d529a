//! Primitive meshes: kinds, vertex layout and procedural geometry.
//!
//! Every primitive is generated in its own object space:
//!
//! - plane: XZ square from -1 to 1, facing +Y
//! - box: unit cube centred on the origin (-0.5 to 0.5)
//! - cylinder: radius 1, from y = 0 to y = 1, capped at both ends
//! - sphere: radius 1, centred on the origin
//! - cone: base of radius 1 at y = 0, apex at y = 1

use std::f32::consts::{FRAC_PI_2, PI, TAU};

use cgmath::{InnerSpace, Vector3};

/// Closed set of shapes the mesh provider can draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MeshKind {
    Plane,
    Box,
    Cylinder,
    Sphere,
    Cone,
}

impl MeshKind {
    pub const ALL: [MeshKind; 5] = [
        MeshKind::Plane,
        MeshKind::Box,
        MeshKind::Cylinder,
        MeshKind::Sphere,
        MeshKind::Cone,
    ];

    /// Position of the kind in [`MeshKind::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn geometry(self) -> MeshGeometry {
        match self {
            MeshKind::Plane => plane(),
            MeshKind::Box => cube(),
            MeshKind::Cylinder => cylinder(SEGMENTS),
            MeshKind::Sphere => sphere(SPHERE_STACKS, SEGMENTS),
            MeshKind::Cone => cone(SEGMENTS),
        }
    }
}

const SEGMENTS: u32 = 36;
const SPHERE_STACKS: u32 = 18;

pub trait Vertex {
    fn desc() -> wgpu::VertexBufferLayout<'static>;
}

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub tex_coords: [f32; 2],
}

impl Vertex for MeshVertex {
    fn desc() -> wgpu::VertexBufferLayout<'static> {
        use std::mem;
        wgpu::VertexBufferLayout {
            array_stride: mem::size_of::<MeshVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: mem::size_of::<[f32; 3]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: mem::size_of::<[f32; 6]>() as wgpu::BufferAddress,
                    shader_location: 2,
                    format: wgpu::VertexFormat::Float32x2,
                },
            ],
        }
    }
}

/// CPU-side triangle list with counter-clockwise front faces.
#[derive(Clone, Debug, Default)]
pub struct MeshGeometry {
    pub vertices: Vec<MeshVertex>,
    pub indices: Vec<u32>,
}

impl MeshGeometry {
    fn push(&mut self, position: Vector3<f32>, normal: Vector3<f32>, tex_coords: [f32; 2]) -> u32 {
        self.vertices.push(MeshVertex {
            position: position.into(),
            normal: normal.into(),
            tex_coords,
        });
        self.vertices.len() as u32 - 1
    }

    fn triangle(&mut self, a: u32, b: u32, c: u32) {
        self.indices.extend_from_slice(&[a, b, c]);
    }

    /// Add a quad spanned by `u` and `v` around `center`. `u x v` is the front.
    fn quad(&mut self, center: Vector3<f32>, u: Vector3<f32>, v: Vector3<f32>) {
        let normal = u.cross(v).normalize();
        let base = self.push(center - u - v, normal, [0.0, 0.0]);
        self.push(center + u - v, normal, [1.0, 0.0]);
        self.push(center + u + v, normal, [1.0, 1.0]);
        self.push(center - u + v, normal, [0.0, 1.0]);
        self.triangle(base, base + 1, base + 2);
        self.triangle(base, base + 2, base + 3);
    }

    /// Flat disc of radius 1 at height `y`, facing up or down.
    fn disc(&mut self, y: f32, facing_up: bool, segments: u32) {
        let normal = Vector3::new(0.0, if facing_up { 1.0 } else { -1.0 }, 0.0);
        let center = self.push(Vector3::new(0.0, y, 0.0), normal, [0.5, 0.5]);
        let first = self.vertices.len() as u32;
        for i in 0..=segments {
            let (sin, cos) = (i as f32 / segments as f32 * TAU).sin_cos();
            self.push(
                Vector3::new(cos, y, sin),
                normal,
                [0.5 + 0.5 * cos, 0.5 + 0.5 * sin],
            );
        }
        for i in 0..segments {
            let (a, b) = (first + i, first + i + 1);
            if facing_up {
                self.triangle(center, b, a);
            } else {
                self.triangle(center, a, b);
            }
        }
    }
}

pub fn plane() -> MeshGeometry {
    let mut geometry = MeshGeometry::default();
    geometry.quad(
        Vector3::new(0.0, 0.0, 0.0),
        Vector3::new(1.0, 0.0, 0.0),
        Vector3::new(0.0, 0.0, -1.0),
    );
    geometry
}

pub fn cube() -> MeshGeometry {
    let mut geometry = MeshGeometry::default();
    let x = Vector3::new(0.5, 0.0, 0.0);
    let y = Vector3::new(0.0, 0.5, 0.0);
    let z = Vector3::new(0.0, 0.0, 0.5);
    // (face centre, u, v) with u x v pointing out of the cube
    let faces = [
        (x, -z, y),
        (-x, z, y),
        (y, x, -z),
        (-y, x, z),
        (z, x, y),
        (-z, -x, y),
    ];
    for (center, u, v) in faces {
        geometry.quad(center, u, v);
    }
    geometry
}

pub fn cylinder(segments: u32) -> MeshGeometry {
    let mut geometry = MeshGeometry::default();
    let first = geometry.vertices.len() as u32;
    for i in 0..=segments {
        let t = i as f32 / segments as f32;
        let (sin, cos) = (t * TAU).sin_cos();
        let normal = Vector3::new(cos, 0.0, sin);
        geometry.push(Vector3::new(cos, 0.0, sin), normal, [t, 0.0]);
        geometry.push(Vector3::new(cos, 1.0, sin), normal, [t, 1.0]);
    }
    for i in 0..segments {
        let bottom = first + 2 * i;
        let top = bottom + 1;
        let (next_bottom, next_top) = (bottom + 2, bottom + 3);
        geometry.triangle(bottom, top, next_bottom);
        geometry.triangle(next_bottom, top, next_top);
    }
    geometry.disc(1.0, true, segments);
    geometry.disc(0.0, false, segments);
    geometry
}

pub fn sphere(stacks: u32, sectors: u32) -> MeshGeometry {
    let mut geometry = MeshGeometry::default();
    for j in 0..=stacks {
        let phi = FRAC_PI_2 - j as f32 * PI / stacks as f32;
        let (ring_y, ring_radius) = phi.sin_cos();
        for i in 0..=sectors {
            let s = i as f32 / sectors as f32;
            let (sin, cos) = (s * TAU).sin_cos();
            let position = Vector3::new(ring_radius * cos, ring_y, ring_radius * sin);
            geometry.push(position, position, [s, 1.0 - j as f32 / stacks as f32]);
        }
    }
    let ring = sectors + 1;
    for j in 0..stacks {
        for i in 0..sectors {
            let upper = j * ring + i;
            let lower = upper + ring;
            // the first and last stacks collapse into the poles
            if j != 0 {
                geometry.triangle(upper, upper + 1, lower);
            }
            if j != stacks - 1 {
                geometry.triangle(upper + 1, lower + 1, lower);
            }
        }
    }
    geometry
}

pub fn cone(segments: u32) -> MeshGeometry {
    let mut geometry = MeshGeometry::default();
    let first = geometry.vertices.len() as u32;
    for i in 0..=segments {
        let t = i as f32 / segments as f32;
        let (sin, cos) = (t * TAU).sin_cos();
        // radius and height are both 1, so the slant normal leans 45 degrees up
        let normal = Vector3::new(cos, 1.0, sin).normalize();
        geometry.push(Vector3::new(cos, 0.0, sin), normal, [t, 0.0]);
        geometry.push(Vector3::new(0.0, 1.0, 0.0), normal, [t, 1.0]);
    }
    for i in 0..segments {
        let rim = first + 2 * i;
        geometry.triangle(rim, rim + 1, rim + 2);
    }
    geometry.disc(0.0, false, segments);
    geometry
}
