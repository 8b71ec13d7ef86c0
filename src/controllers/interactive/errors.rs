use crate::core::data::raster_size::RasterSizeError;
use crate::core::data::viewport::ViewportError;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum SessionError {
    RasterSize(RasterSizeError),
    Viewport(ViewportError),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RasterSize(err) => write!(f, "invalid raster: {}", err),
            Self::Viewport(err) => write!(f, "invalid start view: {}", err),
        }
    }
}

impl Error for SessionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::RasterSize(err) => Some(err),
            Self::Viewport(err) => Some(err),
        }
    }
}

impl From<RasterSizeError> for SessionError {
    fn from(err: RasterSizeError) -> Self {
        Self::RasterSize(err)
    }
}

impl From<ViewportError> for SessionError {
    fn from(err: ViewportError) -> Self {
        Self::Viewport(err)
    }
}
