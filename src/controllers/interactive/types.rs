//! Domain commands exchanged between an input adapter and the
//! interactive controller. Nothing here depends on a windowing library.

use crate::core::data::point::Point;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ClickButton {
    /// Recentre and zoom in.
    Left,
    /// Recentre and zoom out.
    Right,
    /// Recentre only.
    Other,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InputCommand {
    Reset,
    Exit,
    Click { pixel: Point, button: ClickButton },
    ToggleFractal,
    CycleColourMap,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ControlOutcome {
    Continue,
    Exit,
}
