use crate::core::data::complex::Complex;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::fractal_kinds::FractalKind;

/// Everything one frame needs, captured before rendering starts so that the
/// row tasks only ever see read-only state.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RenderRequest {
    pub fractal: FractalKind,
    pub viewport: Viewport,
    pub julia_c: Complex,
    pub max_iterations: u32,
    pub bail_out: f64,
}
