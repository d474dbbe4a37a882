//! Error type shared by the core components.

/// Errors produced by storage, group management and the animator.
///
/// Invalid or duplicate *member* names are not errors: those operations
/// silently report that nothing changed.
#[derive(Debug, thiserror::Error)]
pub enum PickerError {
    /// Reading or writing the group store failed.
    #[error("storage error: {0}")]
    Storage(#[from] std::io::Error),

    /// The group mapping could not be serialized.
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// A spin was requested while another one is still running.
    #[error("a spin is already in progress")]
    AlreadySpinning,

    /// Group name was empty or whitespace only.
    #[error("invalid group name: {0:?}")]
    InvalidGroupName(String),

    /// A group with this name already exists.
    #[error("group already exists: {0}")]
    GroupExists(String),

    /// No group with this name exists.
    #[error("group not found: {0}")]
    GroupNotFound(String),

    /// The session was ended by Ctrl+C or a termination signal.
    #[error("interrupted")]
    Interrupted,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            PickerError::AlreadySpinning.to_string(),
            "a spin is already in progress"
        );
        assert_eq!(
            PickerError::GroupNotFound("Team".into()).to_string(),
            "group not found: Team"
        );
        assert_eq!(PickerError::Interrupted.to_string(), "interrupted");
        assert_eq!(
            PickerError::InvalidGroupName("  ".into()).to_string(),
            "invalid group name: \"  \""
        );
    }

    #[test]
    fn io_error_converts() {
        let err: PickerError = std::io::Error::other("disk full").into();
        assert!(matches!(err, PickerError::Storage(_)));
        assert!(err.to_string().contains("disk full"));
    }
}
