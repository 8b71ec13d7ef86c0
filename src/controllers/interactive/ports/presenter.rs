use crate::core::data::pixel_buffer::PixelBuffer;
use std::error::Error;

/// Receives each completed frame. Called once per render, after every row
/// has been written.
pub trait FramePresenterPort {
    type Failure: Error;

    fn present(&mut self, frame: &PixelBuffer) -> Result<(), Self::Failure>;
}
