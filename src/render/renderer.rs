use super::backend::{DrawRange, FrameRecording};
use super::camera::Projection;
use super::context::GpuContext;
use super::mesh::{Mesh, MeshCache, MeshKind};
use super::pipeline::{RenderPipelines, Uniforms};

const MAX_DRAWS: usize = 256;

/// Replays a [`FrameRecording`] on the GPU.
pub struct FigureRenderer {
    pipelines: RenderPipelines,
    meshes: MeshCache<Mesh>,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    uniform_alignment: u32,
    clear_color: wgpu::Color,
}

impl FigureRenderer {
    pub fn new(context: &GpuContext, clear_color: [f64; 4]) -> Self {
        let pipelines = RenderPipelines::new(context);

        let uniform_alignment = context.device.limits().min_uniform_buffer_offset_alignment;
        let aligned_size =
            Self::align_to(std::mem::size_of::<Uniforms>() as u32, uniform_alignment);
        let buffer_size = (aligned_size as usize * MAX_DRAWS) as u64;

        let uniform_buffer = context.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Dynamic Uniform Buffer"),
            size: buffer_size,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = pipelines.create_dynamic_bind_group(&context.device, &uniform_buffer);

        let [r, g, b, a] = clear_color;
        Self {
            pipelines,
            meshes: MeshCache::new(),
            uniform_buffer,
            bind_group,
            uniform_alignment,
            clear_color: wgpu::Color { r, g, b, a },
        }
    }

    fn align_to(size: u32, alignment: u32) -> u32 {
        (size + alignment - 1) & !(alignment - 1)
    }

    fn aligned_uniform_size(&self) -> u32 {
        Self::align_to(std::mem::size_of::<Uniforms>() as u32, self.uniform_alignment)
    }

    pub fn render(
        &mut self,
        context: &GpuContext,
        view: &wgpu::TextureView,
        frame: &FrameRecording,
        projection: &Projection,
    ) {
        let aligned_size = self.aligned_uniform_size() as usize;

        if frame.calls.len() > MAX_DRAWS {
            log::warn!(
                "frame has {} draws, only the first {} are drawn",
                frame.calls.len(),
                MAX_DRAWS
            );
        }
        let calls = &frame.calls[..frame.calls.len().min(MAX_DRAWS)];

        let mut uniform_data = vec![0u8; aligned_size * calls.len().max(1)];
        for (i, call) in calls.iter().enumerate() {
            let global_rotation = glam::Mat4::from_cols_array_2d(&call.uniforms.global_rotation);
            let uniforms = Uniforms {
                view: projection.view(global_rotation).to_cols_array_2d(),
                model: call.uniforms.model,
                color: call.uniforms.color,
            };
            let offset = i * aligned_size;
            let bytes = bytemuck::bytes_of(&uniforms);
            uniform_data[offset..offset + bytes.len()].copy_from_slice(bytes);
        }

        for kind in [MeshKind::Cube, MeshKind::Heart] {
            if calls.iter().any(|c| c.mesh == kind) {
                self.meshes
                    .get_or_upload(kind, |geometry| Mesh::upload(&context.device, kind, geometry));
            }
        }

        context.queue.write_buffer(&self.uniform_buffer, 0, &uniform_data);

        let mut encoder = context.device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("Figure Encoder"),
        });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Figure Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &context.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            render_pass.set_pipeline(&self.pipelines.pipeline);

            for (i, call) in calls.iter().enumerate() {
                let Some(mesh) = self.meshes.get(call.mesh) else {
                    continue;
                };
                render_pass.set_bind_group(0, &self.bind_group, &[(i * aligned_size) as u32]);
                render_pass.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));

                match (call.range, &mesh.index_buffer) {
                    (DrawRange::Triangles { first, count }, _) => {
                        render_pass.draw(first..first + count, 0..1);
                    }
                    (DrawRange::Indexed { count }, Some(index_buffer)) => {
                        render_pass
                            .set_index_buffer(index_buffer.slice(..), wgpu::IndexFormat::Uint16);
                        render_pass.draw_indexed(0..count.min(mesh.index_count), 0, 0..1);
                    }
                    (DrawRange::Indexed { .. }, None) => {
                        log::warn!("{:?} has no index buffer, skipping indexed draw", call.mesh);
                    }
                }
            }
        }

        context.queue.submit(std::iter::once(encoder.finish()));
    }
}
