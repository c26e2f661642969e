use std::time::{Duration, Instant};

use anyhow::Result;
use raw_window_handle::{HasDisplayHandle, HasWindowHandle};
use tracing::debug;
use winit::dpi::PhysicalSize;

use crate::runtime::TimeSample;

use super::context::GpuContext;
use super::pipeline::LogoPipeline;
use super::uniforms::{TimeUniform, TIME_UNIFORM_SIZE};

/// Glues the GPU context, pipeline, and time uniform together and encodes
/// one frame per [`GpuState::render`] call.
pub(crate) struct GpuState {
    context: GpuContext,
    pipeline: LogoPipeline,
    uniform_buffer: wgpu::Buffer,
    uniform_bind_group: wgpu::BindGroup,
    uniform: TimeUniform,
    last_stats_log: Instant,
    frames_since_log: u32,
}

impl GpuState {
    pub(crate) fn new<T>(target: &T, initial_size: PhysicalSize<u32>) -> Result<Self>
    where
        T: HasDisplayHandle + HasWindowHandle,
    {
        let context = GpuContext::new(target, initial_size)?;
        let pipeline = LogoPipeline::new(&context.device, context.surface_format);

        let uniform_buffer = context.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("time uniform"),
            size: TIME_UNIFORM_SIZE,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let uniform_bind_group = context
            .device
            .create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some("time uniform bind group"),
                layout: &pipeline.uniform_layout,
                entries: &[wgpu::BindGroupEntry {
                    binding: 0,
                    resource: uniform_buffer.as_entire_binding(),
                }],
            });

        let uniform = TimeUniform::new();
        context
            .queue
            .write_buffer(&uniform_buffer, 0, uniform.as_bytes());

        Ok(Self {
            context,
            pipeline,
            uniform_buffer,
            uniform_bind_group,
            uniform,
            last_stats_log: Instant::now(),
            frames_since_log: 0,
        })
    }

    pub(crate) fn size(&self) -> PhysicalSize<u32> {
        self.context.size
    }

    pub(crate) fn resize(&mut self, new_size: PhysicalSize<u32>) {
        self.context.resize(new_size);
    }

    /// Renders and presents one frame at the sampled timestamp.
    ///
    /// Writes the time uniform, records a single pass that clears to
    /// opaque black and draws 3 vertices / 1 instance, then submits.
    /// Exactly one submission per call; completion is never awaited.
    pub(crate) fn render(&mut self, sample: TimeSample) -> Result<(), wgpu::SurfaceError> {
        self.uniform.set_seconds(sample.seconds);
        self.context
            .queue
            .write_buffer(&self.uniform_buffer, 0, self.uniform.as_bytes());

        let frame = self.context.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder =
            self.context
                .device
                .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                    label: Some("frame encoder"),
                });
        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("logo pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    depth_slice: None,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                occlusion_query_set: None,
                timestamp_writes: None,
            });
            render_pass.set_pipeline(&self.pipeline.pipeline);
            render_pass.set_bind_group(0, &self.uniform_bind_group, &[]);
            render_pass.draw(0..3, 0..1);
        }
        self.context.queue.submit(std::iter::once(encoder.finish()));
        frame.present();

        self.frames_since_log += 1;
        let elapsed = self.last_stats_log.elapsed();
        if elapsed >= Duration::from_secs(1) {
            debug!(
                fps = (self.frames_since_log as f32 / elapsed.as_secs_f32()).round(),
                time = self.uniform.seconds(),
                "render stats"
            );
            self.frames_since_log = 0;
            self.last_stats_log = Instant::now();
        }

        Ok(())
    }
}
