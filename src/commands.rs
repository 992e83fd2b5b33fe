//! Side-effect commands returned by update functions
//!
//! Update functions mutate the model and describe any required follow-up
//! work as a `Cmd`; the runtime interprets the command.

/// Commands the runtime executes after an update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cmd {
    /// No side effect
    None,
    /// Request a full repaint
    Redraw,
    /// Exit the event loop
    Quit,
}

impl Cmd {
    /// Whether this command requires a repaint
    pub fn needs_redraw(&self) -> bool {
        matches!(self, Cmd::Redraw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_needs_redraw() {
        assert!(Cmd::Redraw.needs_redraw());
        assert!(!Cmd::None.needs_redraw());
        assert!(!Cmd::Quit.needs_redraw());
    }
}
