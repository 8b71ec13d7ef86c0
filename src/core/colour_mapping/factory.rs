use crate::core::actions::render_frame::ports::colour_map::ColourMap;
use crate::core::colour_mapping::kinds::ColourMapKind;
use crate::core::colour_mapping::maps::fire_gradient::FireGradientColourMap;
use crate::core::colour_mapping::maps::sinusoidal::SinusoidalColourMap;

#[must_use]
pub fn colour_map_factory(kind: ColourMapKind) -> Box<dyn ColourMap> {
    match kind {
        ColourMapKind::Sinusoidal => Box::new(SinusoidalColourMap),
        ColourMapKind::FireGradient => Box::new(FireGradientColourMap),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_array_has_default_first() {
        assert_eq!(ColourMapKind::ALL.first(), Some(&ColourMapKind::default()));
    }

    #[test]
    fn factory_round_trip_for_all_kinds() {
        for &kind in ColourMapKind::ALL {
            let map = colour_map_factory(kind);

            assert_eq!(map.kind(), kind);
            assert_eq!(map.display_name(), kind.display_name());
        }
    }

    #[test]
    fn display_names_are_unique() {
        let names: Vec<&str> = ColourMapKind::ALL.iter().map(|k| k.display_name()).collect();

        for (i, name) in names.iter().enumerate() {
            assert!(
                !names[i + 1..].contains(name),
                "Duplicate display name: {}",
                name
            );
        }
    }
}
