use async_trait::async_trait;
use courier_core::RemoteCall;

/// Downstream consumer of built remote call records.
/// Implementations: message transport, in-memory recorder (tests).
#[async_trait]
pub trait RemoteCallSink: Send + Sync {
    /// Hand a built record to the transport for serialization and delivery.
    async fn dispatch(&self, call: RemoteCall) -> anyhow::Result<()>;
}

/// A message listener bound to a single queue.
/// Only its queue name is consulted, when building the non-tagged registry.
pub trait QueueListener: Send + Sync {
    /// Name of the queue this listener drains.
    fn queue_name(&self) -> &str;
}
