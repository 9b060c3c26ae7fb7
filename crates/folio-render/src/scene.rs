use crate::helpers::{uniform_buffer, uniform_layout_entry, DEPTH_FORMAT};
use folio_core::constants::COLOR_VIOLET;
use folio_core::scene::Scene;
use folio_core::transform::{Camera, Transform};
use folio_core::MeshData;
use glam::Vec3;
use wgpu::util::DeviceExt;

const AMBIENT_INTENSITY: f32 = 0.5;
const KEY_LIGHT_POS: Vec3 = Vec3::new(10.0, 10.0, 5.0);
const KEY_LIGHT_INTENSITY: f32 = 1.0;
const FILL_LIGHT_POS: Vec3 = Vec3::new(-10.0, -10.0, -5.0);
const FILL_LIGHT_INTENSITY: f32 = 0.5;
const SHAPE_MATERIAL: [f32; 4] = [0.5, 0.2, 0.0, 0.0]; // roughness, metalness
const SURFACE_MATERIAL: [f32; 4] = [0.9, 0.0, 0.0, 0.0];

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct Vertex {
    position: [f32; 3],
    normal: [f32; 3],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct Globals {
    view_proj: [[f32; 4]; 4],
    eye: [f32; 4],
    ambient: [f32; 4],
    key_dir: [f32; 4],
    key_color: [f32; 4],
    fill_dir: [f32; 4],
    fill_color: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct ObjectUniforms {
    model: [[f32; 4]; 4],
    color: [f32; 4],
    material: [f32; 4],
}

fn fill_vertices(mesh: &MeshData, out: &mut Vec<Vertex>) {
    out.clear();
    out.extend(mesh.positions.iter().zip(&mesh.normals).map(|(p, n)| Vertex {
        position: p.to_array(),
        normal: n.to_array(),
    }));
}

struct GpuMesh {
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    color: [f32; 4],
    material: [f32; 4],
}

impl GpuMesh {
    fn new(
        device: &wgpu::Device,
        layout: &wgpu::BindGroupLayout,
        label: &str,
        mesh: &MeshData,
        color: [f32; 3],
        material: [f32; 4],
        dynamic: bool,
    ) -> Self {
        let mut verts = Vec::with_capacity(mesh.vertex_count());
        fill_vertices(mesh, &mut verts);
        let mut usage = wgpu::BufferUsages::VERTEX;
        if dynamic {
            usage |= wgpu::BufferUsages::COPY_DST;
        }
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(&verts),
            usage,
        });
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(&mesh.indices),
            usage: wgpu::BufferUsages::INDEX,
        });
        let uniform_buffer = uniform_buffer::<ObjectUniforms>(device, label);
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(label),
            layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });
        Self {
            vertex_buffer,
            index_buffer,
            index_count: mesh.indices.len() as u32,
            uniform_buffer,
            bind_group,
            color: [color[0], color[1], color[2], 1.0],
            material,
        }
    }

    fn write_uniforms(&self, queue: &wgpu::Queue, transform: &Transform) {
        let u = ObjectUniforms {
            model: transform.matrix().to_cols_array_2d(),
            color: self.color,
            material: self.material,
        };
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&u));
    }

    fn draw(&self, rpass: &mut wgpu::RenderPass<'_>) {
        rpass.set_bind_group(1, &self.bind_group, &[]);
        rpass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        rpass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
        rpass.draw_indexed(0..self.index_count, 0, 0..1);
    }
}

/// Draws every mounted scene node plus the wavy surface.
///
/// Node meshes are uploaded once; only the surface vertex buffer is
/// rewritten each frame.
pub struct SceneRenderer {
    pipeline: wgpu::RenderPipeline,
    globals_buffer: wgpu::Buffer,
    globals_bind_group: wgpu::BindGroup,
    nodes: Vec<GpuMesh>,
    surface: Option<GpuMesh>,
    surface_vertices: Vec<Vertex>,
}

impl SceneRenderer {
    pub fn new(device: &wgpu::Device, format: wgpu::TextureFormat, scene: &Scene) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("scene_shader"),
            source: wgpu::ShaderSource::Wgsl(crate::SCENE_WGSL.into()),
        });
        let globals_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("scene_globals_bgl"),
            entries: &[uniform_layout_entry(wgpu::ShaderStages::VERTEX_FRAGMENT)],
        });
        let object_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("scene_object_bgl"),
            entries: &[uniform_layout_entry(wgpu::ShaderStages::VERTEX_FRAGMENT)],
        });
        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("scene_pl"),
            bind_group_layouts: &[&globals_bgl, &object_bgl],
            push_constant_ranges: &[],
        });
        let vertex_layout = wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x3,
                    offset: 0,
                    shader_location: 0,
                },
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x3,
                    offset: 12,
                    shader_location: 1,
                },
            ],
        };
        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("scene_pipeline"),
            layout: Some(&layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[vertex_layout],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            // the surface is double sided, so nothing is culled
            primitive: wgpu::PrimitiveState {
                cull_mode: None,
                ..wgpu::PrimitiveState::default()
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: DEPTH_FORMAT,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState::default(),
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            cache: None,
            multiview: None,
        });

        let globals_buffer = uniform_buffer::<Globals>(device, "scene_globals");
        let globals_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("scene_globals_bg"),
            layout: &globals_bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: globals_buffer.as_entire_binding(),
            }],
        });

        let nodes = scene
            .nodes()
            .iter()
            .map(|node| {
                let mesh = node.shape().build_mesh();
                GpuMesh::new(
                    device,
                    &object_bgl,
                    node.name(),
                    &mesh,
                    node.color(),
                    SHAPE_MATERIAL,
                    false,
                )
            })
            .collect();
        let surface = scene.surface().map(|s| {
            GpuMesh::new(
                device,
                &object_bgl,
                "surface",
                s.surface.mesh(),
                s.color,
                SURFACE_MATERIAL,
                true,
            )
        });
        log::info!(
            "[render] uploaded {} node meshes{}",
            scene.nodes().len(),
            if surface.is_some() { " + surface" } else { "" }
        );

        Self {
            pipeline,
            globals_buffer,
            globals_bind_group,
            nodes,
            surface,
            surface_vertices: Vec::new(),
        }
    }

    /// Upload camera, lights, node transforms and the displaced surface.
    pub fn prepare(&mut self, queue: &wgpu::Queue, scene: &Scene, camera: &Camera) {
        let violet = COLOR_VIOLET;
        let g = Globals {
            view_proj: camera.view_projection().to_cols_array_2d(),
            eye: camera.eye.extend(1.0).to_array(),
            ambient: [1.0, 1.0, 1.0, AMBIENT_INTENSITY],
            key_dir: KEY_LIGHT_POS.normalize().extend(0.0).to_array(),
            key_color: [1.0, 1.0, 1.0, KEY_LIGHT_INTENSITY],
            fill_dir: FILL_LIGHT_POS.normalize().extend(0.0).to_array(),
            fill_color: [violet[0], violet[1], violet[2], FILL_LIGHT_INTENSITY],
        };
        queue.write_buffer(&self.globals_buffer, 0, bytemuck::bytes_of(&g));

        for (gpu, node) in self.nodes.iter().zip(scene.nodes()) {
            if let Some(t) = node.transform() {
                gpu.write_uniforms(queue, t);
            }
        }
        if let (Some(gpu), Some(node)) = (&self.surface, scene.surface()) {
            if let Some(t) = node.transform() {
                gpu.write_uniforms(queue, t);
                fill_vertices(node.surface.mesh(), &mut self.surface_vertices);
                queue.write_buffer(
                    &gpu.vertex_buffer,
                    0,
                    bytemuck::cast_slice(&self.surface_vertices),
                );
            }
        }
    }

    pub fn draw(&self, rpass: &mut wgpu::RenderPass<'_>, scene: &Scene) {
        rpass.set_pipeline(&self.pipeline);
        rpass.set_bind_group(0, &self.globals_bind_group, &[]);
        if let (Some(gpu), Some(node)) = (&self.surface, scene.surface()) {
            if node.transform().is_some() {
                gpu.draw(rpass);
            }
        }
        for (gpu, node) in self.nodes.iter().zip(scene.nodes()) {
            if node.is_mounted() {
                gpu.draw(rpass);
            }
        }
    }
}
