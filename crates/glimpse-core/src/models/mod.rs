pub mod device;
pub mod envelope;
pub mod payload;
pub mod request;
pub mod signal;
pub mod timer;

pub use device::{DeviceClass, DeviceProfile};
pub use envelope::EventEnvelope;
pub use payload::{BatchPayload, SinglePayload, UtmParams};
pub use request::{PostCompletion, PostRequest, RequestId};
pub use signal::{Anchor, ErrorReport, NavigationKind, NavigationTiming, PageSignal, ScrollMetrics};
pub use timer::{RetryId, Timer, TimerId};
