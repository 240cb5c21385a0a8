/// Session storage errors (private browsing, quota, disabled storage).
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage unavailable: {reason}")]
    Unavailable { reason: String },

    #[error("storage write failed for key {key}: {reason}")]
    WriteFailed { key: String, reason: String },

    #[error("corrupt record under key {key}: {reason}")]
    Corrupt { key: String, reason: String },
}
