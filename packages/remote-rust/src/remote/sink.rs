//! In-memory [`RemoteCallSink`] that records dispatched calls.

use async_trait::async_trait;
use courier_core::RemoteCall;
use parking_lot::Mutex;

use crate::traits::RemoteCallSink;

/// Keeps every dispatched record in memory, in dispatch order.
///
/// Useful for tests and for wiring the pipeline before a transport exists.
#[derive(Debug, Default)]
pub struct InMemorySink {
    calls: Mutex<Vec<RemoteCall>>,
}

impl InMemorySink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all records dispatched so far.
    #[must_use]
    pub fn calls(&self) -> Vec<RemoteCall> {
        self.calls.lock().clone()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.calls.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.calls.lock().is_empty()
    }
}

#[async_trait]
impl RemoteCallSink for InMemorySink {
    async fn dispatch(&self, call: RemoteCall) -> anyhow::Result<()> {
        self.calls.lock().push(call);
        Ok(())
    }
}
