//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use crate::model::DetailMode;

/// Overlay-specific messages (open/close, detail selection, canvas clicks)
#[derive(Debug, Clone)]
pub enum OverlayMsg {
    /// Open the overlay (starts at the overview state)
    Open,
    /// Close the overlay; clears detail mode and selected date
    Close,
    /// Toggle the overlay open/closed
    Toggle,
    /// Toggle a detail mode; selecting the active mode returns to overview
    ToggleDetail(DetailMode),
    /// Pointer click in window coordinates; resolved against the panel and
    /// calendar layout by the update layer
    Click { x: f64, y: f64 },
}

/// Application-level messages (window events)
#[derive(Debug, Clone)]
pub enum AppMsg {
    /// Window resized
    Resize(u32, u32),
    /// Display scale factor changed (e.g., moving between monitors)
    ScaleFactorChanged(f64),
    /// Quit the application
    Quit,
}

/// Top-level message type
#[derive(Debug, Clone)]
pub enum Msg {
    /// Overlay messages (state machine transitions)
    Overlay(OverlayMsg),
    /// App messages (window)
    App(AppMsg),
}

// Convenience constructors for common messages
impl Msg {
    /// Create a resize message
    pub fn resize(width: u32, height: u32) -> Self {
        Msg::App(AppMsg::Resize(width, height))
    }

    /// Create a canvas click message
    pub fn click(x: f64, y: f64) -> Self {
        Msg::Overlay(OverlayMsg::Click { x, y })
    }
}
