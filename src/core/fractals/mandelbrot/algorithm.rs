use crate::core::actions::render_frame::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::fractals::escape_time::{EscapeTime, escape_time};

/// Each plane coordinate is the parameter `c`; the orbit starts at zero.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MandelbrotAlgorithm {
    max_iterations: u32,
    bail_out: f64,
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    #[inline]
    fn evaluate(&self, point: Complex) -> EscapeTime {
        escape_time(Complex::ZERO, point, self.max_iterations, self.bail_out)
    }
}

impl MandelbrotAlgorithm {
    #[must_use]
    pub fn new(max_iterations: u32, bail_out: f64) -> Self {
        Self {
            max_iterations,
            bail_out,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_is_in_the_set() {
        let algorithm = MandelbrotAlgorithm::new(256, 4.0);

        assert_eq!(algorithm.evaluate(Complex::ZERO).iterations, 256);
    }

    #[test]
    fn main_cardioid_point_is_in_the_set() {
        let algorithm = MandelbrotAlgorithm::new(500, 4.0);

        assert_eq!(algorithm.evaluate(Complex::new(-0.1, 0.1)).iterations, 500);
    }

    #[test]
    fn far_point_escapes() {
        let algorithm = MandelbrotAlgorithm::new(256, 4.0);

        assert!(algorithm.evaluate(Complex::new(2.5, 0.0)).escaped(256));
    }
}
