use crate::controllers::interactive::errors::SessionError;
use crate::controllers::interactive::ports::presenter::FramePresenterPort;
use crate::controllers::interactive::session::Session;
use crate::controllers::interactive::types::{ControlOutcome, InputCommand};
use crate::core::actions::render_frame::ports::colour_map::ColourMap;
use crate::core::actions::render_frame::render_frame::render_request;
use crate::core::colour_mapping::factory::colour_map_factory;
use crate::core::config::ViewerConfig;
use crate::core::data::pixel_buffer::PixelBuffer;
use log::{debug, info, warn};
use std::time::{Duration, Instant};

/// Applies input commands to a [`Session`] and re-renders after each one.
///
/// Rendering is synchronous: `handle` returns only after the new frame has
/// been handed to the presenter, so commands are never coalesced.
pub struct InteractiveController<P: FramePresenterPort> {
    session: Session,
    frame: PixelBuffer,
    colour_map: Box<dyn ColourMap>,
    presenter: P,
    last_render_duration: Option<Duration>,
}

impl<P: FramePresenterPort> InteractiveController<P> {
    pub fn new(config: ViewerConfig, presenter: P) -> Result<Self, SessionError> {
        let session = Session::new(config)?;
        let frame = PixelBuffer::new(session.size());
        let colour_map = colour_map_factory(session.colour_map());

        Ok(Self {
            session,
            frame,
            colour_map,
            presenter,
            last_render_duration: None,
        })
    }

    pub fn handle(&mut self, command: InputCommand) -> Result<ControlOutcome, P::Failure> {
        match command {
            InputCommand::Exit => {
                info!("exit requested");
                return Ok(ControlOutcome::Exit);
            }
            InputCommand::Reset => self.session.reset(),
            InputCommand::Click { pixel, button } => {
                if let Err(err) = self.session.click(pixel, button) {
                    warn!("zoom step rejected: {}", err);
                }
            }
            InputCommand::ToggleFractal => {
                self.session.toggle_fractal();
                info!("showing {}", self.session.fractal());
            }
            InputCommand::CycleColourMap => {
                self.session.cycle_colour_map();
                self.colour_map = colour_map_factory(self.session.colour_map());
                info!("colour map: {}", self.colour_map.display_name());
            }
        }

        self.redraw()?;

        Ok(ControlOutcome::Continue)
    }

    /// Renders the current session state and presents it once.
    pub fn redraw(&mut self) -> Result<(), P::Failure> {
        let request = self.session.render_request();
        let start = Instant::now();

        render_request(&mut self.frame, &request, &*self.colour_map);

        let elapsed = start.elapsed();
        self.last_render_duration = Some(elapsed);
        debug!("frame rendered in {:?}", elapsed);

        self.presenter.present(&self.frame)
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub fn last_render_duration(&self) -> Option<Duration> {
        self.last_render_duration
    }

    #[must_use]
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }
}
