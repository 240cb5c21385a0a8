/// Bootstrap and configuration errors. Any of these disables the agent.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing client id")]
    MissingClientId,

    #[error("invalid client id: {client_id:?}")]
    InvalidClientId { client_id: String },

    #[error("invalid script url {url:?}: {reason}")]
    InvalidScriptUrl { url: String, reason: String },

    #[error("invalid {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to parse config: {reason}")]
    ParseFailed { reason: String },
}
