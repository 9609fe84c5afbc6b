//! scrivi-tui - Terminal UI for scrivi
//!
//! This crate provides the ratatui-based terminal interface. It creates an Engine
//! from scrivi-app and adds terminal rendering, event polling, and widget display.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;
pub mod wrap;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry point
pub use runner::run;
