//! # namepick-cli
//!
//! Plain-terminal output and shell completion.

pub mod completion;
pub mod presenter;
pub mod ui;

pub use presenter::CliPresenter;
