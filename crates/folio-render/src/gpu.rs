use crate::helpers::{create_depth_texture, pick_surface_format};

/// Device, queue and the configured presentation surface.
pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    pub(crate) device: wgpu::Device,
    pub(crate) queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    depth_tex: wgpu::Texture,
    pub(crate) depth_view: wgpu::TextureView,
}

impl<'a> GpuState<'a> {
    pub async fn new(
        instance: &wgpu::Instance,
        surface: wgpu::Surface<'a>,
        width: u32,
        height: u32,
    ) -> anyhow::Result<Self> {
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No GPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // default limits keep older WebGPU implementations happy
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!("request_device error: {:?}", e))?;
        let caps = surface.get_capabilities(&adapter);
        let format =
            pick_surface_format(&caps).ok_or_else(|| anyhow::anyhow!("Surface has no formats"))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: width.max(1),
            height: height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        let (depth_tex, depth_view) = create_depth_texture(&device, config.width, config.height);
        log::info!(
            "[gpu] {:?} surface {}x{} ({:?})",
            adapter.get_info().backend,
            config.width,
            config.height,
            format
        );
        Ok(Self {
            surface,
            device,
            queue,
            config,
            depth_tex,
            depth_view,
        })
    }

    pub fn format(&self) -> wgpu::TextureFormat {
        self.config.format
    }

    pub fn size(&self) -> (u32, u32) {
        (self.config.width, self.config.height)
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.config.width || height != self.config.height {
            self.config.width = width;
            self.config.height = height;
            self.reconfigure();
        }
    }

    /// Re-apply the current configuration, e.g. after the surface was lost.
    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
        if self.depth_tex.width() != self.config.width
            || self.depth_tex.height() != self.config.height
        {
            let (tex, view) = create_depth_texture(&self.device, self.config.width, self.config.height);
            self.depth_tex = tex;
            self.depth_view = view;
        }
    }

    pub(crate) fn acquire(&self) -> Result<wgpu::SurfaceTexture, wgpu::SurfaceError> {
        self.surface.get_current_texture()
    }
}
