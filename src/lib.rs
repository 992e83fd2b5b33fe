//! Pulseboard - canvas-rendered metrics dashboard
//!
//! This crate provides the core types and logic for a dashboard overlay
//! implementing the Elm Architecture pattern: a pure view-model state
//! machine, a pixel-buffer canvas renderer, and hit-testing geometry
//! shared between the two.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod messages;
pub mod model;
pub mod runtime;
pub mod theme;
pub mod tracing;
pub mod update;
pub mod view;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::AppConfig;
pub use messages::Msg;
pub use model::{AppModel, CalendarData, DetailMode, OverlayView};
pub use theme::Theme;
