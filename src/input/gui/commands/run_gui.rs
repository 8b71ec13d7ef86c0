use log::info;
use winit::{
    dpi::PhysicalSize,
    event_loop::EventLoop,
    window::{Window, WindowBuilder},
};

use crate::controllers::interactive::InteractiveController;
use crate::core::config::ViewerConfig;
use crate::input::gui::app::gui_app::GuiApp;
use crate::input::gui::errors::GuiError;
use crate::presenters::pixels::presenter::PixelsPresenter;

pub struct RunGuiCommand {
    config: ViewerConfig,
}

impl RunGuiCommand {
    pub fn new(config: ViewerConfig) -> Self {
        Self { config }
    }

    /// Opens a fixed-size window, draws the start view and blocks until the
    /// viewer exits.
    pub fn execute(&self) -> Result<(), GuiError> {
        let event_loop = EventLoop::new()?;

        // pixels needs a 'static window
        let window: &'static Window = Box::leak(Box::new(
            WindowBuilder::new()
                .with_title("Fractal Viewer")
                .with_inner_size(PhysicalSize::new(self.config.width, self.config.height))
                .with_resizable(false)
                .build(&event_loop)?,
        ));

        let presenter = PixelsPresenter::new(window, self.config.width, self.config.height)?;
        let mut controller = InteractiveController::new(self.config, presenter)?;

        info!(
            "opened {}x{} window",
            self.config.width, self.config.height
        );

        controller.redraw()?;

        GuiApp::new(window, &event_loop, controller).run(event_loop)
    }
}

impl Default for RunGuiCommand {
    fn default() -> Self {
        Self::new(ViewerConfig::default())
    }
}
