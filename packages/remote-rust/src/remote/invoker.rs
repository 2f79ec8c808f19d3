//! Remote invocation: look up, build, dispatch.

use std::sync::Arc;

use courier_core::{CallContext, Value};
use tracing::{debug, warn};

use super::builder::{BuildError, RemoteCallBuilder};
use super::resolver::{CallContextResolver, ExecutionContextResolver};
use super::table::{InterfaceTable, LookupError};
use crate::traits::RemoteCallSink;

/// Errors from [`RemoteInvoker::invoke`].
#[derive(Debug, thiserror::Error)]
pub enum InvokeError {
    #[error(transparent)]
    Lookup(#[from] LookupError),
    #[error(transparent)]
    Build(#[from] BuildError),
    #[error("dispatch failed: {0}")]
    Dispatch(#[from] anyhow::Error),
}

/// Turns a call on a registered remote interface into a dispatched record.
///
/// 1. Resolve the method descriptor from the [`InterfaceTable`]
/// 2. Build and tag the record with the [`RemoteCallBuilder`]
/// 3. Hand the record to the [`RemoteCallSink`]
pub struct RemoteInvoker<S, R = CallContextResolver> {
    table: Arc<InterfaceTable>,
    builder: Arc<RemoteCallBuilder<R>>,
    sink: Arc<S>,
}

impl<S, R> RemoteInvoker<S, R>
where
    S: RemoteCallSink,
    R: ExecutionContextResolver,
{
    #[must_use]
    pub fn new(table: Arc<InterfaceTable>, builder: Arc<RemoteCallBuilder<R>>, sink: Arc<S>) -> Self {
        Self {
            table,
            builder,
            sink,
        }
    }

    /// Invoke `method` on `interface` with `args`.
    ///
    /// # Errors
    ///
    /// - `InvokeError::Lookup` if the interface or method is not registered
    /// - `InvokeError::Build` if the arguments do not match the declaration
    /// - `InvokeError::Dispatch` if the sink rejects the record
    pub async fn invoke(
        &self,
        ctx: &CallContext,
        interface: &str,
        method: &str,
        args: Vec<Value>,
    ) -> Result<(), InvokeError> {
        let descriptor = self.table.method(interface, method)?;
        let call = self.builder.build(ctx, interface, descriptor, args)?;
        let tagged = call.is_tagged();
        let node_id = self.builder.node_id();

        if let Err(e) = self.sink.dispatch(call).await {
            warn!(node_id, interface, method, tagged, error = %e, "remote call dispatch failed");
            return Err(InvokeError::Dispatch(e));
        }
        debug!(node_id, interface, method, tagged, "remote call dispatched");
        Ok(())
    }
}

impl<S, R> Clone for RemoteInvoker<S, R> {
    fn clone(&self) -> Self {
        Self {
            table: Arc::clone(&self.table),
            builder: Arc::clone(&self.builder),
            sink: Arc::clone(&self.sink),
        }
    }
}
