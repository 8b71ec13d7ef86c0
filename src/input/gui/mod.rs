//! Windowed front end: winit for the window and events, pixels for the
//! framebuffer, egui for the HUD overlay.

pub mod app;
pub mod commands;
pub mod errors;
pub mod events;
