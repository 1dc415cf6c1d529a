//! Frame encoding.
//!
//! [`SceneRenderer`] replays the draws recorded by the
//! [`FrameProgram`] during [`SceneComposer::render`](crate::composer::SceneComposer::render).
//! All object snapshots of a frame go into one uniform buffer, one aligned
//! slot per draw, and each draw binds its slot through a dynamic offset.

use std::iter;

use crate::{
    context::Context,
    pipelines::{
        basic::{mk_scene_pipeline, object_binding_size, object_layout, texture_units_layout},
        light::LightResources,
        program::{FrameProgram, ObjectUniform},
    },
    resources::{mesh::ShapeMeshes, texture::WgpuTextureBackend},
};

const INITIAL_OBJECT_SLOTS: usize = 64;

pub struct SceneRenderer {
    pipeline: wgpu::RenderPipeline,
    lights: LightResources,
    object_layout: wgpu::BindGroupLayout,
    object_buffer: wgpu::Buffer,
    object_bind_group: wgpu::BindGroup,
    object_stride: u64,
    object_slots: usize,
    texture_bind_group: wgpu::BindGroup,
}

impl SceneRenderer {
    /// Build the pipeline. `textures` has to be fully bound already, its
    /// units are captured in a bind group here.
    pub fn new(ctx: &Context, textures: &WgpuTextureBackend) -> Self {
        let lights = LightResources::new(&ctx.device, &Default::default());
        let object_layout = object_layout(&ctx.device);
        let texture_layout = texture_units_layout(&ctx.device);
        let pipeline = mk_scene_pipeline(
            &ctx.device,
            &ctx.config,
            &ctx.camera.bind_group_layout,
            &lights.bind_group_layout,
            &object_layout,
            &texture_layout,
        );

        let object_stride = wgpu::util::align_to(
            std::mem::size_of::<ObjectUniform>() as u64,
            ctx.device.limits().min_uniform_buffer_offset_alignment as u64,
        );
        let (object_buffer, object_bind_group) =
            mk_object_buffer(&ctx.device, &object_layout, object_stride, INITIAL_OBJECT_SLOTS);

        Self {
            pipeline,
            lights,
            object_layout,
            object_buffer,
            object_bind_group,
            object_stride,
            object_slots: INITIAL_OBJECT_SLOTS,
            texture_bind_group: textures.bind_group(&texture_layout),
        }
    }

    fn reserve(&mut self, device: &wgpu::Device, draws: usize) {
        if draws <= self.object_slots {
            return;
        }
        let slots = draws.next_power_of_two();
        log::debug!("Growing object buffer from {} to {} slots", self.object_slots, slots);
        let (buffer, bind_group) =
            mk_object_buffer(device, &self.object_layout, self.object_stride, slots);
        self.object_buffer = buffer;
        self.object_bind_group = bind_group;
        self.object_slots = slots;
    }

    fn upload(&mut self, ctx: &Context, program: &FrameProgram) {
        let draws = program.draws();
        self.reserve(&ctx.device, draws.len());

        let stride = self.object_stride as usize;
        let mut bytes = vec![0u8; stride * draws.len()];
        for (slot, draw) in bytes.chunks_exact_mut(stride).zip(draws) {
            let object = bytemuck::bytes_of(&draw.object);
            slot[..object.len()].copy_from_slice(object);
        }
        if !bytes.is_empty() {
            ctx.queue.write_buffer(&self.object_buffer, 0, &bytes);
        }
        self.lights.write(&ctx.queue, program.lights());
    }

    pub fn render(
        &mut self,
        ctx: &Context,
        meshes: &ShapeMeshes,
        program: &FrameProgram,
    ) -> Result<(), wgpu::SurfaceError> {
        self.upload(ctx, program);

        let output = ctx.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = ctx
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });
        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(ctx.clear_colour),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &ctx.depth_texture.view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                occlusion_query_set: None,
                timestamp_writes: None,
            });

            render_pass.set_pipeline(&self.pipeline);
            render_pass.set_bind_group(0, &ctx.camera.bind_group, &[]);
            render_pass.set_bind_group(1, &self.lights.bind_group, &[]);
            render_pass.set_bind_group(3, &self.texture_bind_group, &[]);

            for (index, draw) in program.draws().iter().enumerate() {
                let Some(mesh) = meshes.mesh(draw.mesh) else {
                    log::warn!("{:?} mesh is not loaded, draw {} skipped", draw.mesh, index);
                    continue;
                };
                let offset = (index as u64 * self.object_stride) as wgpu::DynamicOffset;
                render_pass.set_bind_group(2, &self.object_bind_group, &[offset]);
                render_pass.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
                render_pass.set_index_buffer(mesh.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
                render_pass.draw_indexed(0..mesh.num_elements, 0, 0..1);
            }
        }

        ctx.queue.submit(iter::once(encoder.finish()));
        output.present();
        Ok(())
    }
}

fn mk_object_buffer(
    device: &wgpu::Device,
    layout: &wgpu::BindGroupLayout,
    stride: u64,
    slots: usize,
) -> (wgpu::Buffer, wgpu::BindGroup) {
    let buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("Object Uniform Buffer"),
        size: stride * slots as u64,
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });
    let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        layout,
        entries: &[wgpu::BindGroupEntry {
            binding: 0,
            resource: wgpu::BindingResource::Buffer(wgpu::BufferBinding {
                buffer: &buffer,
                offset: 0,
                size: Some(object_binding_size()),
            }),
        }],
        label: Some("object_bind_group"),
    });
    (buffer, bind_group)
}
