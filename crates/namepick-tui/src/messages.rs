//! TUI message types (Elm Messages).

/// Messages that drive the TUI update cycle.
#[derive(Debug, Clone)]
pub enum TuiMessage {
    /// Key press event forwarded from the event loop.
    KeyPress(crate::keymap::KeyAction),
    /// Tick event: advance the spin animation.
    Tick,
    /// Ctrl+C or a termination signal; ends the session as interrupted.
    Interrupt,
}
