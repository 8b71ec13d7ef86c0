use egui::Context;
use egui_winit::State as EguiWinitState;
use log::error;
use winit::{
    event::{ElementState, Event, KeyEvent, WindowEvent},
    event_loop::{EventLoop, EventLoopWindowTarget},
    keyboard::PhysicalKey,
    window::Window,
};

use crate::controllers::interactive::InteractiveController;
use crate::controllers::interactive::types::{ControlOutcome, InputCommand};
use crate::core::data::point::Point;
use crate::input::gui::app::hud::{HudState, show_hud};
use crate::input::gui::errors::GuiError;
use crate::input::gui::events::{KeyAction, action_for_key, command_for_mouse_button};
use crate::presenters::pixels::presenter::PixelsPresenter;

pub struct GuiApp {
    window: &'static Window,
    controller: InteractiveController<PixelsPresenter>,
    cursor: Point,
    hud: HudState,
    failure: Option<GuiError>,
    egui_ctx: Context,
    egui_state: EguiWinitState,
}

impl GuiApp {
    pub fn new(
        window: &'static Window,
        event_loop: &EventLoop<()>,
        controller: InteractiveController<PixelsPresenter>,
    ) -> Self {
        let egui_ctx = Context::default();
        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(window.scale_factor() as f32),
            None, // max_texture_side, use default
        );

        Self {
            window,
            cursor: controller.session().size().centre(),
            controller,
            hud: HudState::default(),
            failure: None,
            egui_ctx,
            egui_state,
        }
    }

    /// Runs until the window closes or ESC is pressed. A failure that
    /// stopped the loop is returned once it has exited.
    pub fn run(mut self, event_loop: EventLoop<()>) -> Result<(), GuiError> {
        event_loop.run(|event, elwt| self.handle_event(event, elwt))?;

        match self.failure.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn handle_event(&mut self, event: Event<()>, elwt: &EventLoopWindowTarget<()>) {
        if let Event::WindowEvent { event, window_id } = event {
            if window_id == self.window.id() {
                self.handle_window_event(event, elwt);
            }
        }
    }

    fn handle_window_event(&mut self, event: WindowEvent, elwt: &EventLoopWindowTarget<()>) {
        let response = self.egui_state.on_window_event(self.window, &event);

        if response.repaint {
            self.window.request_redraw();
        }

        match event {
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::RedrawRequested => self.redraw(elwt),
            WindowEvent::Resized(size) => {
                if let Err(err) = self
                    .controller
                    .presenter_mut()
                    .resize_surface(size.width, size.height)
                {
                    error!("failed to resize surface: {}", err);
                }
                self.window.request_redraw();
            }
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                self.egui_ctx.set_pixels_per_point(scale_factor as f32);
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = self
                    .controller
                    .presenter()
                    .window_pos_to_pixel((position.x as f32, position.y as f32));
            }
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button,
                ..
            } if !response.consumed => {
                self.dispatch(command_for_mouse_button(button, self.cursor), elwt);
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(code),
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } if !response.consumed => match action_for_key(code) {
                Some(KeyAction::Command(command)) => self.dispatch(command, elwt),
                Some(KeyAction::ToggleHud) => {
                    self.hud.toggle();
                    self.window.request_redraw();
                }
                None => {}
            },
            _ => {}
        }
    }

    fn dispatch(&mut self, command: InputCommand, elwt: &EventLoopWindowTarget<()>) {
        match self.controller.handle(command) {
            Ok(ControlOutcome::Continue) => {}
            Ok(ControlOutcome::Exit) => elwt.exit(),
            Err(err) => self.fail(err.into(), elwt),
        }
    }

    fn redraw(&mut self, elwt: &EventLoopWindowTarget<()>) {
        let raw_input = self.egui_state.take_egui_input(self.window);
        let hud_visible = self.hud.visible;
        let session = self.controller.session();
        let last_render = self.controller.last_render_duration();

        let mut egui_output = self.egui_ctx.run(raw_input, |ctx| {
            if hud_visible {
                show_hud(ctx, session, last_render);
            }
        });

        self.egui_state
            .handle_platform_output(self.window, std::mem::take(&mut egui_output.platform_output));

        if let Err(err) = self
            .controller
            .presenter_mut()
            .render(egui_output, &self.egui_ctx)
        {
            self.fail(err.into(), elwt);
        }
    }

    fn fail(&mut self, err: GuiError, elwt: &EventLoopWindowTarget<()>) {
        error!("{}", err);
        self.failure = Some(err);
        elwt.exit();
    }
}
