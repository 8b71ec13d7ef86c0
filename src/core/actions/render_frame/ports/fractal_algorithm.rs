use crate::core::data::complex::Complex;
use crate::core::fractals::escape_time::EscapeTime;

pub trait FractalAlgorithm: Sync {
    fn evaluate(&self, point: Complex) -> EscapeTime;
}
