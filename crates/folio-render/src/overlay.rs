use crate::helpers::{uniform_buffer, uniform_layout_entry};
use folio_core::CursorFrame;
use smallvec::SmallVec;

const MAX_QUADS: usize = 8;
const OUTLINE_STROKE_PX: f32 = 1.5;

/// One ellipse drawn in screen pixels.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct OverlayQuad {
    pub center: [f32; 2],
    pub radii: [f32; 2],
    pub rotation: f32,
    pub fill_alpha: f32,
    /// Outline width in px; 0 draws a filled disc only.
    pub stroke: f32,
    pub _pad: f32,
    pub color: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct ScreenUniform {
    size: [f32; 2],
    _pad: [f32; 2],
}

/// Outline ring then dot, in draw order. Empty while the cursor is hidden.
pub fn cursor_quads(frame: &CursorFrame<'_>, color: [f32; 3]) -> SmallVec<[OverlayQuad; 2]> {
    let mut out = SmallVec::new();
    if !frame.visible {
        return out;
    }
    let rgba = [color[0], color[1], color[2], 1.0];
    out.push(OverlayQuad {
        center: frame.outline.to_array(),
        radii: [
            frame.radius * frame.stretch_along,
            frame.radius * frame.stretch_across,
        ],
        rotation: frame.heading,
        fill_alpha: frame.style.fill_opacity,
        stroke: OUTLINE_STROKE_PX,
        _pad: 0.0,
        color: rgba,
    });
    if frame.dot_radius > 0.0 {
        out.push(OverlayQuad {
            center: frame.dot.to_array(),
            radii: [frame.dot_radius; 2],
            rotation: 0.0,
            fill_alpha: 1.0,
            stroke: 0.0,
            _pad: 0.0,
            color: rgba,
        });
    }
    out
}

pub struct OverlayRenderer {
    pipeline: wgpu::RenderPipeline,
    screen_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    instances: wgpu::Buffer,
    count: u32,
}

impl OverlayRenderer {
    pub fn new(device: &wgpu::Device, format: wgpu::TextureFormat) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("overlay_shader"),
            source: wgpu::ShaderSource::Wgsl(crate::OVERLAY_WGSL.into()),
        });
        let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("overlay_bgl"),
            entries: &[uniform_layout_entry(wgpu::ShaderStages::VERTEX)],
        });
        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("overlay_pl"),
            bind_group_layouts: &[&bgl],
            push_constant_ranges: &[],
        });
        let instance_layout = wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<OverlayQuad>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &[
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x2,
                    offset: 0,
                    shader_location: 0,
                },
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x2,
                    offset: 8,
                    shader_location: 1,
                },
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32,
                    offset: 16,
                    shader_location: 2,
                },
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32,
                    offset: 20,
                    shader_location: 3,
                },
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32,
                    offset: 24,
                    shader_location: 4,
                },
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x4,
                    offset: 32,
                    shader_location: 5,
                },
            ],
        };
        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("overlay_pipeline"),
            layout: Some(&layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_overlay"),
                buffers: &[instance_layout],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            primitive: wgpu::PrimitiveState::default(),
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_overlay"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            cache: None,
            multiview: None,
        });
        let screen_buffer = uniform_buffer::<ScreenUniform>(device, "overlay_screen");
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("overlay_bg"),
            layout: &bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: screen_buffer.as_entire_binding(),
            }],
        });
        let instances = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("overlay_instances"),
            size: (std::mem::size_of::<OverlayQuad>() * MAX_QUADS) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        Self {
            pipeline,
            screen_buffer,
            bind_group,
            instances,
            count: 0,
        }
    }

    /// Extra quads beyond the instance buffer's capacity are dropped.
    pub fn prepare(&mut self, queue: &wgpu::Queue, size: (u32, u32), quads: &[OverlayQuad]) {
        let screen = ScreenUniform {
            size: [size.0.max(1) as f32, size.1.max(1) as f32],
            _pad: [0.0; 2],
        };
        queue.write_buffer(&self.screen_buffer, 0, bytemuck::bytes_of(&screen));
        let quads = &quads[..quads.len().min(MAX_QUADS)];
        if !quads.is_empty() {
            queue.write_buffer(&self.instances, 0, bytemuck::cast_slice(quads));
        }
        self.count = quads.len() as u32;
    }

    pub fn draw(&self, rpass: &mut wgpu::RenderPass<'_>) {
        if self.count == 0 {
            return;
        }
        rpass.set_pipeline(&self.pipeline);
        rpass.set_bind_group(0, &self.bind_group, &[]);
        rpass.set_vertex_buffer(0, self.instances.slice(..));
        rpass.draw(0..6, 0..self.count);
    }
}
