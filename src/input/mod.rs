//! Input adapters: receive events from an outside source and translate
//! them into controller commands.

#[cfg(feature = "gui")]
pub mod gui;
