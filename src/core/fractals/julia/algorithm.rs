use crate::core::actions::render_frame::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::fractals::escape_time::{EscapeTime, escape_time};

/// Each plane coordinate is the orbit's seed; `c` is fixed for the whole frame.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct JuliaAlgorithm {
    c: Complex,
    max_iterations: u32,
    bail_out: f64,
}

impl FractalAlgorithm for JuliaAlgorithm {
    #[inline]
    fn evaluate(&self, point: Complex) -> EscapeTime {
        escape_time(point, self.c, self.max_iterations, self.bail_out)
    }
}

impl JuliaAlgorithm {
    #[must_use]
    pub fn new(c: Complex, max_iterations: u32, bail_out: f64) -> Self {
        Self {
            c,
            max_iterations,
            bail_out,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_parameter_keeps_unit_disc_bounded() {
        // with c = 0 the filled Julia set is the closed unit disc
        let algorithm = JuliaAlgorithm::new(Complex::ZERO, 100, 4.0);

        assert_eq!(algorithm.evaluate(Complex::new(0.5, 0.5)).iterations, 100);
        assert!(algorithm.evaluate(Complex::new(1.1, 0.0)).escaped(100));
    }

    #[test]
    fn seed_differs_from_mandelbrot_for_same_point() {
        let c = Complex::new(-0.7, 0.27015);
        let algorithm = JuliaAlgorithm::new(c, 100, 4.0);

        // z0 = 0 is a seed, not the parameter: its orbit is the critical orbit of c
        let from_origin = algorithm.evaluate(Complex::ZERO);
        let expected = escape_time(Complex::ZERO, c, 100, 4.0);

        assert_eq!(from_origin, expected);
    }
}
