use wgpu::util::DeviceExt;

use crate::{
    bridge::ShaderState,
    data_structures::mesh::MeshKind,
    pipelines::program::FrameProgram,
    shader::ShadingProgram,
};

/// Source of the primitive meshes the scene is built from.
///
/// A draw uses whatever state was pushed through the [`ShaderState`] before
/// it, so the provider receives the same state object the pushes went
/// through.
pub trait MeshProvider {
    type Program: ShadingProgram;

    /// Make `kind` drawable. Loading a kind twice keeps the first copy.
    fn load(&mut self, kind: MeshKind);

    fn is_loaded(&self, kind: MeshKind) -> bool;

    fn draw(&mut self, kind: MeshKind, state: &mut ShaderState<'_, Self::Program>);

    /// Number of distinct meshes held.
    fn resource_count(&self) -> usize;
}

#[derive(Debug)]
pub struct GpuMesh {
    pub vertex_buffer: wgpu::Buffer,
    pub index_buffer: wgpu::Buffer,
    pub num_elements: u32,
}

/// Procedural primitives uploaded to the GPU, one buffer pair per kind.
///
/// Drawing does not touch the GPU: it records the draw with the current
/// uniform block in the [`FrameProgram`], and the renderer replays the
/// recorded draws against these buffers.
#[derive(Debug)]
pub struct ShapeMeshes {
    device: wgpu::Device,
    meshes: [Option<GpuMesh>; MeshKind::ALL.len()],
}

impl ShapeMeshes {
    pub fn new(device: wgpu::Device) -> Self {
        Self {
            device,
            meshes: Default::default(),
        }
    }

    pub fn mesh(&self, kind: MeshKind) -> Option<&GpuMesh> {
        self.meshes[kind.index()].as_ref()
    }
}

impl MeshProvider for ShapeMeshes {
    type Program = FrameProgram;

    fn load(&mut self, kind: MeshKind) {
        if self.is_loaded(kind) {
            log::debug!("{:?} mesh already loaded", kind);
            return;
        }
        let geometry = kind.geometry();

        let vertex_buffer = self
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(&format!("{:?} Vertex Buffer", kind)),
                contents: bytemuck::cast_slice(&geometry.vertices),
                usage: wgpu::BufferUsages::VERTEX,
            });
        let index_buffer = self
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(&format!("{:?} Index Buffer", kind)),
                contents: bytemuck::cast_slice(&geometry.indices),
                usage: wgpu::BufferUsages::INDEX,
            });

        log::info!(
            "Loaded {:?} mesh: {} vertices, {} triangles",
            kind,
            geometry.vertices.len(),
            geometry.indices.len() / 3
        );
        self.meshes[kind.index()] = Some(GpuMesh {
            vertex_buffer,
            index_buffer,
            num_elements: geometry.indices.len() as u32,
        });
    }

    fn is_loaded(&self, kind: MeshKind) -> bool {
        self.meshes[kind.index()].is_some()
    }

    fn draw(&mut self, kind: MeshKind, state: &mut ShaderState<'_, FrameProgram>) {
        if !self.is_loaded(kind) {
            log::warn!("{:?} mesh drawn before it was loaded, skipping", kind);
            return;
        }
        state.program().submit(kind);
    }

    fn resource_count(&self) -> usize {
        self.meshes.iter().filter(|mesh| mesh.is_some()).count()
    }
}
