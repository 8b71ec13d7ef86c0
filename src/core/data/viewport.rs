use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::data::raster_size::RasterSize;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ViewportError {
    InvalidZoom { zoom: f64 },
    InvalidZoomFactor { factor: f64 },
}

impl fmt::Display for ViewportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidZoom { zoom } => {
                write!(f, "zoom must be positive and finite: {}", zoom)
            }
            Self::InvalidZoomFactor { factor } => {
                write!(f, "zoom factor must be positive and finite: {}", factor)
            }
        }
    }
}

impl Error for ViewportError {}

fn is_valid_scale(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// The region of the complex plane shown in the raster: `center` sits on the
/// raster's centre pixel and `zoom` is measured in pixels per unit.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    center: Complex,
    zoom: f64,
}

impl Viewport {
    pub fn new(center: Complex, zoom: f64) -> Result<Self, ViewportError> {
        if !is_valid_scale(zoom) {
            return Err(ViewportError::InvalidZoom { zoom });
        }

        Ok(Self { center, zoom })
    }

    #[must_use]
    pub fn center(&self) -> Complex {
        self.center
    }

    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    #[inline]
    #[must_use]
    pub fn pixel_to_complex(&self, pixel: Point, size: RasterSize) -> Complex {
        let centre = size.centre();

        Complex {
            real: self.center.real + (pixel.x - centre.x) as f64 / self.zoom,
            imag: self.center.imag + (pixel.y - centre.y) as f64 / self.zoom,
        }
    }

    /// Moves the viewport so that `pixel` becomes the new centre.
    pub fn recentre(&mut self, pixel: Point, size: RasterSize) {
        self.center = self.pixel_to_complex(pixel, size);
    }

    /// Multiplies the zoom by `factor`. A step that would leave the zoom
    /// non-positive or non-finite is rejected and the zoom is left unchanged.
    pub fn zoom_by(&mut self, factor: f64) -> Result<(), ViewportError> {
        if !is_valid_scale(factor) {
            return Err(ViewportError::InvalidZoomFactor { factor });
        }

        let zoom = self.zoom * factor;

        if !is_valid_scale(zoom) {
            return Err(ViewportError::InvalidZoom { zoom });
        }

        self.zoom = zoom;
        Ok(())
    }

    /// Iteration budget for this zoom level: `trunc(per_decade * log10(zoom))`.
    /// Zoom levels at or below 1 saturate to zero iterations.
    #[must_use]
    pub fn max_iterations(&self, per_decade: f64) -> u32 {
        (per_decade * self.zoom.log10()) as u32
    }
}
