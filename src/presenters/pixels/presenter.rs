use crate::adapters::pixel_format::{PixelFormatError, copy_rgb_to_rgba};
use crate::controllers::interactive::ports::presenter::FramePresenterPort;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::point::Point;
use egui::Context as EguiContext;
use egui_wgpu::Renderer as EguiRenderer;
use pixels::Pixels;
use pixels::SurfaceTexture;
use pixels::wgpu;
use std::error::Error;
use std::fmt;
use winit::window::Window;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PresentError {
    PixelFormat(PixelFormatError),
}

impl fmt::Display for PresentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PixelFormat(err) => write!(f, "frame does not fit the surface: {}", err),
        }
    }
}

impl Error for PresentError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::PixelFormat(err) => Some(err),
        }
    }
}

impl From<PixelFormatError> for PresentError {
    fn from(err: PixelFormatError) -> Self {
        Self::PixelFormat(err)
    }
}

/// Shows rendered frames in a `pixels` surface with an egui overlay on top.
pub struct PixelsPresenter {
    window: &'static Window,
    pixels: Pixels<'static>,
    egui_renderer: EguiRenderer,
    surface_width: u32,
    surface_height: u32,
}

impl FramePresenterPort for PixelsPresenter {
    type Failure = PresentError;

    fn present(&mut self, frame: &PixelBuffer) -> Result<(), Self::Failure> {
        copy_rgb_to_rgba(frame.buffer(), self.pixels.frame_mut())?;
        self.window.request_redraw();

        Ok(())
    }
}

impl PixelsPresenter {
    /// Creates a surface covering the window with a `width` x `height` frame.
    pub fn new(window: &'static Window, width: u32, height: u32) -> Result<Self, pixels::Error> {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);
        let pixels = Pixels::new(width, height, surface_texture)?;

        let egui_renderer = EguiRenderer::new(
            pixels.device(),
            pixels.render_texture_format(),
            None, // depth format
            1,    // msaa samples
        );

        Ok(Self {
            window,
            pixels,
            egui_renderer,
            surface_width: size.width,
            surface_height: size.height,
        })
    }

    /// Maps a physical window position to a frame pixel, clamping positions
    /// outside the frame onto its nearest edge.
    #[must_use]
    pub fn window_pos_to_pixel(&self, position: (f32, f32)) -> Point {
        let (x, y) = self
            .pixels
            .window_pos_to_pixel(position)
            .unwrap_or_else(|outside| self.pixels.clamp_pixel_pos(outside));

        Point {
            x: x as i32,
            y: y as i32,
        }
    }

    pub fn resize_surface(&mut self, width: u32, height: u32) -> Result<(), pixels::TextureError> {
        if width == 0 || height == 0 {
            return Ok(());
        }

        self.pixels.resize_surface(width, height)?;
        self.surface_width = width;
        self.surface_height = height;

        Ok(())
    }

    /// Draws the last presented frame, then the egui output over it.
    pub fn render(
        &mut self,
        egui_output: egui::FullOutput,
        egui_ctx: &EguiContext,
    ) -> Result<(), pixels::Error> {
        if self.surface_width == 0 || self.surface_height == 0 {
            return Ok(());
        }

        let clipped_primitives =
            egui_ctx.tessellate(egui_output.shapes, egui_ctx.pixels_per_point());
        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [self.surface_width, self.surface_height],
            pixels_per_point: egui_ctx.pixels_per_point(),
        };
        let textures_delta = egui_output.textures_delta;
        let egui_renderer = &mut self.egui_renderer;

        self.pixels.render_with(|encoder, render_target, context| {
            context.scaling_renderer.render(encoder, render_target);

            for (id, delta) in &textures_delta.set {
                egui_renderer.update_texture(&context.device, &context.queue, *id, delta);
            }

            egui_renderer.update_buffers(
                &context.device,
                &context.queue,
                encoder,
                &clipped_primitives,
                &screen_descriptor,
            );

            {
                let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("egui"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: render_target,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            // keep the fractal underneath
                            load: wgpu::LoadOp::Load,
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    ..Default::default()
                });

                egui_renderer.render(&mut render_pass, &clipped_primitives, &screen_descriptor);
            }

            for id in &textures_delta.free {
                egui_renderer.free_texture(id);
            }

            Ok(())
        })
    }
}
