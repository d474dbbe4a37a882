//! # namepick-core
//!
//! Core library for the namepick name picker: named groups of candidates,
//! sampling without replacement, the spin animation and the controller
//! state machine that ties them together.
//!
//! # Example
//! ```
//! use namepick_core::{MemoryStore, Selector};
//!
//! let mut selector = Selector::new(Box::new(MemoryStore::new())).with_seed(1);
//! selector.add_name("Ada").unwrap();
//! selector.add_name("Grace").unwrap();
//!
//! let first = selector.choose_name().unwrap();
//! let second = selector.choose_name().unwrap();
//! assert_ne!(first, second);
//! assert_eq!(selector.choose_name(), None);
//! ```

pub mod animator;
pub mod constants;
pub mod controller;
pub mod error;
pub mod group;
pub mod selector;
pub mod storage;
pub mod view;

// Re-exports
pub use animator::{AnimationEvent, Animator, SpinTiming};
pub use constants::{exit_codes, DEFAULT_GROUP_NAME};
pub use controller::{Controller, Phase, SpinOutcome};
pub use error::PickerError;
pub use group::{parse_names, Group, GroupMap};
pub use selector::Selector;
pub use storage::{default_store_path, GroupStore, JsonFileStore, MemoryStore};
pub use view::{NameEntry, SpinButton, ViewState};
