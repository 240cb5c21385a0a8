/// Delivery errors on the POST fallback path.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("network error: {reason}")]
    Network { reason: String },

    #[error("collector responded with HTTP {status}")]
    Status { status: u16 },

    #[error("transport unavailable: {reason}")]
    Unavailable { reason: String },
}
