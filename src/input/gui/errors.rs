use crate::controllers::interactive::errors::SessionError;
use crate::presenters::pixels::presenter::PresentError;
use std::error::Error;
use std::fmt;
use winit::error::{EventLoopError, OsError};

#[derive(Debug)]
pub enum GuiError {
    EventLoop(EventLoopError),
    Window(OsError),
    Pixels(pixels::Error),
    Session(SessionError),
    Present(PresentError),
}

impl fmt::Display for GuiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EventLoop(err) => write!(f, "event loop error: {}", err),
            Self::Window(err) => write!(f, "failed to create window: {}", err),
            Self::Pixels(err) => write!(f, "pixels surface error: {}", err),
            Self::Session(err) => write!(f, "{}", err),
            Self::Present(err) => write!(f, "present error: {}", err),
        }
    }
}

impl Error for GuiError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::EventLoop(err) => Some(err),
            Self::Window(err) => Some(err),
            Self::Pixels(err) => Some(err),
            Self::Session(err) => Some(err),
            Self::Present(err) => Some(err),
        }
    }
}

impl From<EventLoopError> for GuiError {
    fn from(err: EventLoopError) -> Self {
        Self::EventLoop(err)
    }
}

impl From<OsError> for GuiError {
    fn from(err: OsError) -> Self {
        Self::Window(err)
    }
}

impl From<pixels::Error> for GuiError {
    fn from(err: pixels::Error) -> Self {
        Self::Pixels(err)
    }
}

impl From<SessionError> for GuiError {
    fn from(err: SessionError) -> Self {
        Self::Session(err)
    }
}

impl From<PresentError> for GuiError {
    fn from(err: PresentError) -> Self {
        Self::Present(err)
    }
}
