mod adapter;
mod audit_sink;
mod cancellation;
mod clock;
mod history_store;
mod reachability;

pub use adapter::{AdapterResponse, IEvidenceAdapter};
pub use audit_sink::IAuditSink;
pub use cancellation::{Cancellable, CancellationToken};
pub use clock::{Clock, ManualClock, SystemClock};
pub use history_store::IHistoryStore;
pub use reachability::{IReachabilityProbe, ProbeOutcome};
