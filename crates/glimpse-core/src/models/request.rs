//! POST hand-off between the delivery engine and a transport.

use crate::errors::TransportError;

/// Identifies one POST handed to the transport until its completion comes back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestId(pub u64);

/// A JSON POST the transport performs in the background.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostRequest {
    pub id: RequestId,
    pub url: String,
    pub body: String,
    /// Let the request outlive the page.
    pub keepalive: bool,
}

/// Outcome of a [`PostRequest`], fed back to the tracker by the host.
#[derive(Debug)]
pub struct PostCompletion {
    pub id: RequestId,
    pub outcome: Result<(), TransportError>,
}

impl PostCompletion {
    pub fn succeeded(id: RequestId) -> Self {
        Self { id, outcome: Ok(()) }
    }

    pub fn failed(id: RequestId, error: TransportError) -> Self {
        Self {
            id,
            outcome: Err(error),
        }
    }
}
