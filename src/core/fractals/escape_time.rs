use crate::core::data::complex::Complex;

/// Outcome of iterating a single orbit.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct EscapeTime {
    /// Index of the update that escaped, or the iteration cap when the orbit stayed bounded.
    pub iterations: u32,
    /// The last iterate computed.
    pub z: Complex,
}

impl EscapeTime {
    #[must_use]
    pub fn escaped(&self, max_iterations: u32) -> bool {
        self.iterations < max_iterations
    }
}

/// Iterates `z <- z*z + c` from `z0` until `|z|² > bail_out` or `max_iterations` updates have run.
#[inline]
#[must_use]
pub fn escape_time(z0: Complex, c: Complex, max_iterations: u32, bail_out: f64) -> EscapeTime {
    let mut z = z0;
    let mut iterations = 0;

    while iterations < max_iterations {
        z = z * z + c;

        if z.magnitude_squared() > bail_out {
            break;
        }

        iterations += 1;
    }

    EscapeTime { iterations, z }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BAIL_OUT: f64 = 4.0;

    #[test]
    fn origin_never_escapes_the_mandelbrot_iteration() {
        for max_iterations in [1, 2, 10, 1000] {
            let result = escape_time(Complex::ZERO, Complex::ZERO, max_iterations, BAIL_OUT);

            assert_eq!(result.iterations, max_iterations);
            assert!(!result.escaped(max_iterations));
            assert_eq!(result.z, Complex::ZERO);
        }
    }

    #[test]
    fn points_outside_radius_two_escape_on_the_first_update() {
        let points = [
            Complex::new(2.01, 0.0),
            Complex::new(-2.5, 0.0),
            Complex::new(0.0, 3.0),
            Complex::new(1.5, -1.5),
            Complex::new(-100.0, 42.0),
        ];

        for c in points {
            let result = escape_time(Complex::ZERO, c, 500, BAIL_OUT);

            assert!(result.escaped(500), "{:?} should escape", c);
            assert_eq!(result.iterations, 0);
            assert!(result.z.magnitude_squared() > BAIL_OUT);
        }
    }

    #[test]
    fn bounded_cycle_reaches_the_cap() {
        // c = -1 cycles 0 -> -1 -> 0 -> -1 ...
        let result = escape_time(Complex::ZERO, Complex::new(-1.0, 0.0), 64, BAIL_OUT);

        assert_eq!(result.iterations, 64);
    }

    #[test]
    fn escape_reports_index_of_escaping_update() {
        // c = 1: 1, 2, 5 -> |5|² = 25 > 4 on the third update (index 2)
        let result = escape_time(Complex::ZERO, Complex::new(1.0, 0.0), 100, BAIL_OUT);

        assert_eq!(result.iterations, 2);
        assert_eq!(result.z, Complex::new(5.0, 0.0));
    }

    #[test]
    fn zero_cap_runs_no_updates() {
        let z0 = Complex::new(10.0, 10.0);
        let result = escape_time(z0, Complex::ZERO, 0, BAIL_OUT);

        assert_eq!(result.iterations, 0);
        assert_eq!(result.z, z0);
    }

    #[test]
    fn julia_seed_far_outside_escapes_immediately() {
        let c = Complex::new(-0.7, 0.27015);
        let result = escape_time(Complex::new(3.0, 0.0), c, 200, BAIL_OUT);

        assert_eq!(result.iterations, 0);
    }
}
