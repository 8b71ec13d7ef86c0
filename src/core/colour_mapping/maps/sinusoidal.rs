use crate::core::actions::render_frame::ports::colour_map::ColourMap;
use crate::core::colour_mapping::kinds::ColourMapKind;
use crate::core::colour_mapping::smooth::smooth_iteration_count;
use crate::core::data::colour::Colour;
use crate::core::fractals::escape_time::EscapeTime;

/// Three phase-shifted sine waves over the continuous escape count.
/// Channel values stay within `0..=254`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SinusoidalColourMap;

fn wave(value: f64) -> u8 {
    ((1.0 + value) * 127.0) as u8
}

impl ColourMap for SinusoidalColourMap {
    #[inline]
    fn map(&self, escape: EscapeTime, max_iterations: u32) -> Colour {
        if escape.iterations >= max_iterations {
            return Colour::BLACK;
        }

        let count = smooth_iteration_count(escape);

        Colour {
            r: wave((count * 0.27 + 5.0).sin()),
            g: wave((count * 0.85).cos()),
            b: wave((count * 0.15).sin()),
        }
    }

    fn kind(&self) -> ColourMapKind {
        ColourMapKind::Sinusoidal
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::complex::Complex;

    #[test]
    fn in_set_is_black_whatever_the_final_iterate() {
        let map = SinusoidalColourMap;

        for z in [Complex::ZERO, Complex::new(3.0, -7.0), Complex::new(f64::NAN, 0.0)] {
            assert_eq!(map.map(EscapeTime { iterations: 45, z }, 45), Colour::BLACK);
            assert_eq!(map.map(EscapeTime { iterations: 50, z }, 45), Colour::BLACK);
        }
    }

    #[test]
    fn zero_cap_is_black() {
        let escape = EscapeTime {
            iterations: 0,
            z: Complex::new(10.0, 0.0),
        };

        assert_eq!(SinusoidalColourMap.map(escape, 0), Colour::BLACK);
    }

    #[test]
    fn zero_smooth_count_matches_wave_phases() {
        // |z| = 2 gives a smooth count of n
        let escape = EscapeTime {
            iterations: 0,
            z: Complex::new(2.0, 0.0),
        };

        let colour = SinusoidalColourMap.map(escape, 100);

        assert_eq!(colour.r, 5);
        assert!(colour.g >= 253);
        assert!((126..=127).contains(&colour.b));
    }

    #[test]
    fn mapping_is_deterministic() {
        let escape = EscapeTime {
            iterations: 12,
            z: Complex::new(1.7, 2.9),
        };

        assert_eq!(
            SinusoidalColourMap.map(escape, 80),
            SinusoidalColourMap.map(escape, 80)
        );
    }

    #[test]
    fn escaped_colours_never_reach_full_intensity() {
        for n in 0..200 {
            let escape = EscapeTime {
                iterations: n,
                z: Complex::new(2.5, 1.0),
            };
            let colour = SinusoidalColourMap.map(escape, 200);

            assert!(colour.r < 255 && colour.g < 255 && colour.b < 255);
        }
    }
}
