use crate::controllers::interactive::errors::SessionError;
use crate::controllers::interactive::types::ClickButton;
use crate::core::colour_mapping::kinds::ColourMapKind;
use crate::core::config::ViewerConfig;
use crate::core::data::point::Point;
use crate::core::data::raster_size::RasterSize;
use crate::core::data::render_request::RenderRequest;
use crate::core::data::viewport::{Viewport, ViewportError};
use crate::core::fractals::fractal_kinds::FractalKind;

/// Navigation state of one viewer: the current view plus the display
/// selections, and the configuration it resets to.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    config: ViewerConfig,
    size: RasterSize,
    start: Viewport,
    viewport: Viewport,
    fractal: FractalKind,
    colour_map: ColourMapKind,
}

impl Session {
    pub fn new(config: ViewerConfig) -> Result<Self, SessionError> {
        let size = config.raster_size()?;
        let start = config.start_viewport()?;

        Ok(Self {
            config,
            size,
            start,
            viewport: start,
            fractal: FractalKind::default(),
            colour_map: ColourMapKind::default(),
        })
    }

    #[must_use]
    pub fn size(&self) -> RasterSize {
        self.size
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn fractal(&self) -> FractalKind {
        self.fractal
    }

    #[must_use]
    pub fn colour_map(&self) -> ColourMapKind {
        self.colour_map
    }

    /// Restores the start view. Display selections are kept.
    pub fn reset(&mut self) {
        self.viewport = self.start;
    }

    /// Recentres on `pixel`, then zooms according to `button`.
    ///
    /// The recentre always applies. A rejected zoom step is reported but
    /// leaves the zoom as it was.
    pub fn click(&mut self, pixel: Point, button: ClickButton) -> Result<(), ViewportError> {
        self.viewport.recentre(pixel, self.size);

        match button {
            ClickButton::Left => self.viewport.zoom_by(self.config.zoom_factor),
            ClickButton::Right => self.viewport.zoom_by(1.0 / self.config.zoom_factor),
            ClickButton::Other => Ok(()),
        }
    }

    pub fn toggle_fractal(&mut self) {
        self.fractal = self.fractal.toggled();
    }

    pub fn set_fractal(&mut self, fractal: FractalKind) {
        self.fractal = fractal;
    }

    pub fn cycle_colour_map(&mut self) {
        self.colour_map = self.colour_map.next();
    }

    #[must_use]
    pub fn render_request(&self) -> RenderRequest {
        RenderRequest {
            fractal: self.fractal,
            viewport: self.viewport,
            julia_c: self.config.julia_c,
            max_iterations: self.viewport.max_iterations(self.config.iterations_per_decade),
            bail_out: self.config.bail_out,
        }
    }
}
