//! Remote call record construction and rollover tagging.

use std::sync::Arc;

use courier_core::{CallContext, MethodDescriptor, RemoteCall, TypeDescriptor, Value};
use tracing::debug;

use super::config::RemoteConfig;
use super::registry::NonTaggedQueueRegistry;
use super::resolver::{CallContextResolver, ExecutionContextResolver};

// ---------------------------------------------------------------------------
// BuildError
// ---------------------------------------------------------------------------

/// Errors from assembling a [`RemoteCall`].
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("interface name must not be empty")]
    EmptyInterfaceName,
    #[error("{interface}.{method} declares {expected} parameters but {actual} arguments were supplied")]
    ArgumentCountMismatch {
        interface: String,
        method: String,
        expected: usize,
        actual: usize,
    },
}

// ---------------------------------------------------------------------------
// RemoteCallBuilder
// ---------------------------------------------------------------------------

/// Assembles [`RemoteCall`] records and decides whether each is tagged.
///
/// A call is tagged only when it is issued from a handler draining a queue
/// that is not in the [`NonTaggedQueueRegistry`]. Calls made outside any
/// message handler are never tagged.
///
/// Building is synchronous and does no I/O. The builder is `Send + Sync` and
/// meant to be shared behind an `Arc`.
pub struct RemoteCallBuilder<R = CallContextResolver> {
    registry: Arc<NonTaggedQueueRegistry>,
    resolver: R,
    node_id: String,
}

impl RemoteCallBuilder {
    /// Create a builder that reads the origin carried on each `CallContext`.
    #[must_use]
    pub fn new(registry: Arc<NonTaggedQueueRegistry>) -> Self {
        Self::with_resolver(registry, CallContextResolver)
    }

    /// Create a builder from configuration: the registry comes from the
    /// configured queues and `node_id` is recorded on every log event.
    #[must_use]
    pub fn from_config(config: &RemoteConfig) -> Self {
        Self::new(Arc::new(config.non_tagged_registry())).with_node_id(config.node_id.clone())
    }
}

impl<R: ExecutionContextResolver> RemoteCallBuilder<R> {
    /// Create a builder with a custom execution context resolver.
    #[must_use]
    pub fn with_resolver(registry: Arc<NonTaggedQueueRegistry>, resolver: R) -> Self {
        Self {
            registry,
            resolver,
            node_id: String::new(),
        }
    }

    /// Set the node identifier attached to log events.
    #[must_use]
    pub fn with_node_id(mut self, node_id: impl Into<String>) -> Self {
        self.node_id = node_id.into();
        self
    }

    #[must_use]
    pub fn registry(&self) -> &NonTaggedQueueRegistry {
        &self.registry
    }

    #[must_use]
    pub fn node_id(&self) -> &str {
        &self.node_id
    }

    /// Build a record for invoking `method` on `interface_name`.
    ///
    /// Parameter types are taken from the descriptor, never from the shape
    /// of the supplied values. `args` is moved into the record as-is.
    ///
    /// # Errors
    ///
    /// - `BuildError::EmptyInterfaceName` if `interface_name` is empty
    /// - `BuildError::ArgumentCountMismatch` if `args.len()` differs from the
    ///   declared parameter count
    pub fn build(
        &self,
        ctx: &CallContext,
        interface_name: &str,
        method: &MethodDescriptor,
        args: Vec<Value>,
    ) -> Result<RemoteCall, BuildError> {
        if interface_name.is_empty() {
            return Err(BuildError::EmptyInterfaceName);
        }
        let actual = args.len();
        let parameter_types = method
            .parameter_types()
            .iter()
            .map(TypeDescriptor::to_string)
            .collect();
        let principal = ctx.principal_id().map(str::to_string);
        let tagged = self.should_tag_remote_call(ctx);

        // RemoteCall::new only rejects a length mismatch between declared
        // types and supplied arguments.
        let call = RemoteCall::new(
            interface_name.to_string(),
            method.name().to_string(),
            parameter_types,
            args,
            principal,
            tagged,
        )
        .map_err(|_| BuildError::ArgumentCountMismatch {
            interface: interface_name.to_string(),
            method: method.name().to_string(),
            expected: method.arity(),
            actual,
        })?;

        debug!(
            node_id = %self.node_id,
            interface = interface_name,
            method = method.name(),
            tagged,
            trace_id = %ctx.trace_id,
            "remote call built"
        );
        Ok(call)
    }

    /// Whether a call issued from `ctx` is deferrable low-priority work.
    ///
    /// Tagged calls are halted early during a deployment rollover. Only calls
    /// issued while draining a queue outside the registry are tagged.
    #[must_use]
    pub fn should_tag_remote_call(&self, ctx: &CallContext) -> bool {
        match self.resolver.resolve(ctx) {
            Some(queue_name) => !self.registry.is_non_tagged(queue_name),
            None => false,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
