//! Platform capabilities injected into the engine.
//!
//! Execution is single-threaded on the host's event loop, so implementations
//! are shared as `Rc<dyn _>` and use interior mutability where they keep state.

mod clock;
mod diagnostics;
mod page;
mod scheduler;
mod storage;
mod transport;

pub use clock::{Clock, SystemClock};
pub use diagnostics::DiagnosticSink;
pub use page::PageContext;
pub use scheduler::Scheduler;
pub use storage::SessionStore;
pub use transport::{BeaconStatus, Transport};
