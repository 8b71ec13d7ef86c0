use std::time::Duration;

use crate::controllers::interactive::session::Session;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HudState {
    pub visible: bool,
}

impl Default for HudState {
    fn default() -> Self {
        Self { visible: true }
    }
}

impl HudState {
    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }
}

/// Read-only overlay describing the current view.
pub fn show_hud(ctx: &egui::Context, session: &Session, last_render: Option<Duration>) {
    let viewport = session.viewport();
    let request = session.render_request();

    egui::Window::new("Fractal Viewer")
        .default_pos([10.0, 10.0])
        .resizable(false)
        .show(ctx, |ui| {
            ui.label(format!("Fractal: {}", session.fractal()));
            ui.label(format!("Colour map: {}", session.colour_map()));
            ui.separator();
            ui.label(format!(
                "Centre: {:.10} {:+.10}i",
                viewport.center().real,
                viewport.center().imag
            ));
            ui.label(format!("Zoom: {:.3e}", viewport.zoom()));
            ui.label(format!("Max iterations: {}", request.max_iterations));
            if let Some(duration) = last_render {
                ui.label(format!("Last render: {} ms", duration.as_millis()));
            }
            ui.separator();
            ui.small("Left click: zoom in   Right click: zoom out");
            ui.small("Space: reset   J: Julia   C: colours   H: hide   Esc: quit");
        });
}
