pub mod controller;
pub mod errors;
pub mod ports;
pub mod session;
pub mod types;

pub use controller::InteractiveController;
