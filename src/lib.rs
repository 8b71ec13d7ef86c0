mod adapters;
mod controllers;
mod core;
#[cfg(feature = "gui")]
mod input;
mod presenters;

pub use adapters::pixel_format::{PixelFormatError, copy_rgb_to_rgba};
pub use controllers::interactive::InteractiveController;
pub use controllers::interactive::errors::SessionError;
pub use controllers::interactive::ports::presenter::FramePresenterPort;
pub use controllers::interactive::session::Session;
pub use controllers::interactive::types::{ClickButton, ControlOutcome, InputCommand};
pub use controllers::snapshot::SnapshotController;
pub use crate::core::actions::render_frame::ports::colour_map::ColourMap;
pub use crate::core::actions::render_frame::ports::fractal_algorithm::FractalAlgorithm;
pub use crate::core::actions::render_frame::render_frame::{
    render_frame, render_frame_serial, render_request,
};
pub use crate::core::colour_mapping::factory::colour_map_factory;
pub use crate::core::colour_mapping::kinds::ColourMapKind;
pub use crate::core::config::ViewerConfig;
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::pixel_buffer::PixelBuffer;
pub use crate::core::data::point::Point;
pub use crate::core::data::raster_size::RasterSize;
pub use crate::core::data::render_request::RenderRequest;
pub use crate::core::data::viewport::Viewport;
pub use crate::core::fractals::escape_time::EscapeTime;
pub use crate::core::fractals::fractal_kinds::FractalKind;
pub use crate::core::fractals::julia::algorithm::JuliaAlgorithm;
pub use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
pub use presenters::file::ppm::PpmFilePresenter;

#[cfg(feature = "gui")]
pub use input::gui::commands::run_gui::RunGuiCommand;
#[cfg(feature = "gui")]
pub use input::gui::errors::GuiError;
