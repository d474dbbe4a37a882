//! Constants for animation timing, storage and display.

/// Base tick interval (ms) of the spin animation; divided by the number of names.
pub const DEFAULT_BASE_INTERVAL_MS: u64 = 700;

/// Total spin duration (ms) when more than one name remains.
pub const DEFAULT_SPIN_MS: u64 = 1500;

/// Total spin duration (ms) when exactly one name remains.
pub const DEFAULT_FINAL_SPIN_MS: u64 = 500;

/// Lower bound for a single animation tick, so huge groups still advance frame by frame.
pub const MIN_TICK_MS: u64 = 10;

/// Name of the group created when storage holds no groups.
pub const DEFAULT_GROUP_NAME: &str = "Default";

/// Spin button label while names remain to be drawn.
pub const PLAY_LABEL: &str = "Play 🎲";

/// Spin button label once every name has been drawn.
pub const RESET_LABEL: &str = "Reset";

/// Suffix appended to the drawn name in the result display.
pub const RESULT_SUFFIX: &str = "🎉";

/// Exit codes for the `namepick` binary.
pub mod exit_codes {
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Invalid configuration or arguments.
    pub const ERROR_CONFIG: i32 = 4;
    /// Interrupted by the user (Ctrl+C).
    pub const ERROR_CANCELED: i32 = 130;
}
