//! Fixed viewer parameters.
//!
//! Every tunable lives here as a constant; [`ViewerConfig`] gathers them so
//! that callers (and tests) can substitute a smaller raster or different
//! start view without touching the rendering code.

use crate::core::data::complex::Complex;
use crate::core::data::raster_size::{RasterSize, RasterSizeError};
use crate::core::data::viewport::{Viewport, ViewportError};

pub const WIDTH: u32 = 1280;
pub const HEIGHT: u32 = 720;

pub const START_CENTER: Complex = Complex::new(-0.5, 0.0);
pub const START_ZOOM: f64 = 200.0;

/// Zoom multiplier applied by a left click (and divisor for a right click).
pub const ZOOM_FACTOR: f64 = 2.0;

/// Squared magnitude beyond which an orbit counts as escaped.
pub const BAIL_OUT: f64 = 4.0;

/// Iterations granted per decade of zoom.
pub const ITERATIONS_PER_DECADE: f64 = (WIDTH / 2) as f64 * 0.049715909;

pub const JULIA_C: Complex = Complex::new(-0.7, 0.27015);

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewerConfig {
    pub width: u32,
    pub height: u32,
    pub start_center: Complex,
    pub start_zoom: f64,
    pub zoom_factor: f64,
    pub bail_out: f64,
    pub iterations_per_decade: f64,
    pub julia_c: Complex,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            start_center: START_CENTER,
            start_zoom: START_ZOOM,
            zoom_factor: ZOOM_FACTOR,
            bail_out: BAIL_OUT,
            iterations_per_decade: ITERATIONS_PER_DECADE,
            julia_c: JULIA_C,
        }
    }
}

impl ViewerConfig {
    pub fn raster_size(&self) -> Result<RasterSize, RasterSizeError> {
        RasterSize::new(self.width, self.height)
    }

    pub fn start_viewport(&self) -> Result<Viewport, ViewportError> {
        Viewport::new(self.start_center, self.start_zoom)
    }
}
