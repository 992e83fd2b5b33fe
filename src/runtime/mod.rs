//! Runtime module - winit event loop integration
//!
//! Owns the window, the renderer, and the translation of window events
//! into messages for the update layer.

mod app;

pub use app::App;
