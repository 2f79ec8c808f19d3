//! Courier Remote — remote call record building and rollover tagging.

pub mod remote;
pub mod telemetry;
pub mod traits;

pub use traits::{QueueListener, RemoteCallSink};
