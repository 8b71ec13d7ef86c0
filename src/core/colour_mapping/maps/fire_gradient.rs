use crate::core::actions::render_frame::ports::colour_map::ColourMap;
use crate::core::colour_mapping::kinds::ColourMapKind;
use crate::core::colour_mapping::smooth::smooth_iteration_count;
use crate::core::data::colour::Colour;
use crate::core::fractals::escape_time::EscapeTime;

/// Black, red, orange, yellow, white over the continuous count divided by the cap.
#[derive(Debug, Default, Clone, Copy)]
pub struct FireGradientColourMap;

impl ColourMap for FireGradientColourMap {
    fn map(&self, escape: EscapeTime, max_iterations: u32) -> Colour {
        if escape.iterations >= max_iterations {
            return Colour::BLACK;
        }

        let t = (smooth_iteration_count(escape) / max_iterations as f64).clamp(0.0, 1.0);
        let band = |start: f64| (t - start) / 0.25;

        if t < 0.25 {
            Colour {
                r: (band(0.0) * 255.0) as u8,
                g: 0,
                b: 0,
            }
        } else if t < 0.5 {
            Colour {
                r: 255,
                g: (band(0.25) * 165.0) as u8,
                b: 0,
            }
        } else if t < 0.75 {
            Colour {
                r: 255,
                g: (165.0 + band(0.5) * 90.0) as u8,
                b: 0,
            }
        } else {
            Colour {
                r: 255,
                g: 255,
                b: (band(0.75) * 255.0) as u8,
            }
        }
    }

    fn kind(&self) -> ColourMapKind {
        ColourMapKind::FireGradient
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::complex::Complex;

    // magnitude 2 keeps the smooth count at the integer count
    fn escape(iterations: u32) -> EscapeTime {
        EscapeTime {
            iterations,
            z: Complex::new(2.0, 0.0),
        }
    }

    #[test]
    fn in_set_is_black() {
        assert_eq!(FireGradientColourMap.map(escape(100), 100), Colour::BLACK);
    }

    #[test]
    fn first_band_ramps_red() {
        let colour = FireGradientColourMap.map(escape(10), 100);

        assert!((101..=102).contains(&colour.r));
        assert_eq!((colour.g, colour.b), (0, 0));
    }

    #[test]
    fn third_band_is_orange_to_yellow() {
        let colour = FireGradientColourMap.map(escape(60), 100);

        assert_eq!(colour.r, 255);
        assert!((200..=201).contains(&colour.g));
        assert_eq!(colour.b, 0);
    }

    #[test]
    fn near_cap_is_near_white() {
        let colour = FireGradientColourMap.map(escape(99), 100);

        assert_eq!((colour.r, colour.g), (255, 255));
        assert!(colour.b > 240);
    }

    #[test]
    fn large_final_magnitude_clamps_to_black() {
        let far = EscapeTime {
            iterations: 0,
            z: Complex::new(1e6, 0.0),
        };

        assert_eq!(FireGradientColourMap.map(far, 100), Colour::BLACK);
    }
}
