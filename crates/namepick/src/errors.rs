//! Error handling and exit codes.

use namepick_core::constants::exit_codes;
use namepick_core::PickerError;

/// Map an application error to the process exit code.
#[must_use]
pub fn exit_code(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<PickerError>() {
        Some(
            PickerError::InvalidGroupName(_)
            | PickerError::GroupExists(_)
            | PickerError::GroupNotFound(_),
        ) => exit_codes::ERROR_CONFIG,
        Some(PickerError::Interrupted) => exit_codes::ERROR_CANCELED,
        _ => exit_codes::ERROR_GENERIC,
    }
}
