use crate::core::colour_mapping::kinds::ColourMapKind;
use crate::core::data::colour::Colour;
use crate::core::fractals::escape_time::EscapeTime;

/// Converts the outcome of one orbit into a display colour.
///
/// Implementations must be pure: the renderer calls them concurrently from
/// every row task and expects identical output for identical input.
pub trait ColourMap: Send + Sync {
    fn map(&self, escape: EscapeTime, max_iterations: u32) -> Colour;

    fn kind(&self) -> ColourMapKind;

    fn display_name(&self) -> &str {
        self.kind().display_name()
    }
}
