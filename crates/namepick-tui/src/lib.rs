//! # namepick-tui
//!
//! Interactive name picker dashboard using ratatui with Elm architecture.

pub mod display;
pub mod footer;
pub mod groups;
pub mod header;
pub mod input;
pub mod keymap;
pub mod logs;
pub mod messages;
pub mod model;
pub mod names;
pub mod styles;

pub use keymap::{InputMode, KeyAction};
pub use messages::TuiMessage;
pub use model::{Focus, TuiApp};
