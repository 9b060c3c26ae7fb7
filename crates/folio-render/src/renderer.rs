use crate::gpu::GpuState;
use crate::overlay::{OverlayQuad, OverlayRenderer};
use crate::scene::SceneRenderer;
use folio_core::scene::Scene;

/// What a host should do after a failed frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
    Continue,
    Fatal,
}

/// Scene pass followed by the cursor overlay, straight to the swapchain.
pub struct Renderer<'a> {
    gpu: GpuState<'a>,
    scene: SceneRenderer,
    overlay: OverlayRenderer,
    pub clear_color: wgpu::Color,
}

impl<'a> Renderer<'a> {
    pub async fn new(
        instance: &wgpu::Instance,
        surface: wgpu::Surface<'a>,
        width: u32,
        height: u32,
        scene: &Scene,
    ) -> anyhow::Result<Self> {
        let gpu = GpuState::new(instance, surface, width, height).await?;
        let scene_renderer = SceneRenderer::new(&gpu.device, gpu.format(), scene);
        let overlay = OverlayRenderer::new(&gpu.device, gpu.format());
        Ok(Self {
            gpu,
            scene: scene_renderer,
            overlay,
            clear_color: wgpu::Color {
                r: 0.012,
                g: 0.012,
                b: 0.024,
                a: 1.0,
            },
        })
    }

    pub fn size(&self) -> (u32, u32) {
        self.gpu.size()
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.gpu.resize_if_needed(width, height);
    }

    pub fn render(&mut self, scene: &Scene, quads: &[OverlayQuad]) -> Result<(), wgpu::SurfaceError> {
        let camera = scene.camera();
        self.scene.prepare(&self.gpu.queue, scene, &camera);
        self.overlay.prepare(&self.gpu.queue, self.gpu.size(), quads);

        let frame = self.gpu.acquire()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.gpu.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Discard,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            self.scene.draw(&mut rpass, scene);
        }
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("overlay_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Load,
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            self.overlay.draw(&mut rpass);
        }
        self.gpu.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }

    /// Recover from a lost or outdated surface; anything else is skipped
    /// except running out of memory.
    pub fn handle_surface_error(&mut self, err: wgpu::SurfaceError) -> FrameOutcome {
        match err {
            wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated => {
                log::warn!("[render] surface {:?}, reconfiguring", err);
                self.gpu.reconfigure();
                FrameOutcome::Continue
            }
            wgpu::SurfaceError::OutOfMemory => {
                log::error!("[render] out of memory");
                FrameOutcome::Fatal
            }
            other => {
                log::debug!("[render] skipped frame: {:?}", other);
                FrameOutcome::Continue
            }
        }
    }
}
