//! Call-scoped execution context.
//!
//! A [`CallContext`] travels with every remote invocation and answers two
//! questions the record builder needs: who is calling, and whether the call
//! originates from a message handler draining a specific queue.

use serde::{Deserialize, Serialize};

use crate::types::Principal;

/// Prefix of worker identities that denote message-processing workers.
pub const MESSAGE_PROCESSOR_PREFIX: &str = "MessageProcessor:";

/// Where the current unit of work is executing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum ExecutionContext {
    /// Invoked directly, not as a handler for a queued message.
    #[default]
    Direct,
    /// Invoked by a handler processing a message pulled from `queue_name`.
    #[serde(rename_all = "camelCase")]
    MessageProcessor { queue_name: String },
}

impl ExecutionContext {
    /// Creates a message-processing context for the given queue.
    #[must_use]
    pub fn message_processor(queue_name: impl Into<String>) -> Self {
        Self::MessageProcessor {
            queue_name: queue_name.into(),
        }
    }

    /// Parses a worker identity of the form `"MessageProcessor:<queueName>"`.
    ///
    /// The queue name is the second colon-delimited segment, so
    /// `"MessageProcessor:a:b"` resolves to `a` and `"MessageProcessor::x"`
    /// resolves to the empty queue name. Identities without the exact prefix
    /// are `Direct`, as are identities with nothing but colons after it,
    /// since they carry no queue segment at all.
    ///
    /// # Examples
    ///
    /// ```
    /// use courier_core::ExecutionContext;
    ///
    /// assert_eq!(
    ///     ExecutionContext::from_worker_identity("MessageProcessor:orders"),
    ///     ExecutionContext::message_processor("orders"),
    /// );
    /// assert_eq!(
    ///     ExecutionContext::from_worker_identity("Worker-7"),
    ///     ExecutionContext::Direct,
    /// );
    /// ```
    #[must_use]
    pub fn from_worker_identity(identity: &str) -> Self {
        let Some(rest) = identity.strip_prefix(MESSAGE_PROCESSOR_PREFIX) else {
            return Self::Direct;
        };
        if rest.chars().all(|c| c == ':') {
            return Self::Direct;
        }
        match rest.split(':').next() {
            Some(queue_name) => Self::message_processor(queue_name),
            None => Self::Direct,
        }
    }

    /// The queue being drained, if this is a message-processing context.
    #[must_use]
    pub fn queue_name(&self) -> Option<&str> {
        match self {
            Self::Direct => None,
            Self::MessageProcessor { queue_name } => Some(queue_name),
        }
    }
}

/// Per-invocation context carrying caller identity and execution origin.
#[derive(Debug, Clone, Default)]
pub struct CallContext {
    /// Where the invoking code is executing.
    pub execution: ExecutionContext,
    /// Authenticated principal, if one is resolvable.
    pub principal: Option<Principal>,
    /// Distributed trace identifier for observability.
    pub trace_id: String,
}

impl CallContext {
    /// Context for a call made outside any message handler.
    #[must_use]
    pub fn direct() -> Self {
        Self::default()
    }

    /// Context for a call made while handling a message from `queue_name`.
    #[must_use]
    pub fn message_processor(queue_name: impl Into<String>) -> Self {
        Self {
            execution: ExecutionContext::message_processor(queue_name),
            ..Self::default()
        }
    }

    /// Context derived from a legacy worker identity string.
    #[must_use]
    pub fn for_worker(identity: &str) -> Self {
        Self {
            execution: ExecutionContext::from_worker_identity(identity),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_principal(mut self, principal: Principal) -> Self {
        self.principal = Some(principal);
        self
    }

    #[must_use]
    pub fn with_trace_id(mut self, trace_id: impl Into<String>) -> Self {
        self.trace_id = trace_id.into();
        self
    }

    /// Identifier of the calling principal, if any.
    #[must_use]
    pub fn principal_id(&self) -> Option<&str> {
        self.principal.as_ref().map(|p| p.id.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn worker_identity_with_prefix_resolves_queue() {
        let ctx = ExecutionContext::from_worker_identity("MessageProcessor:ordersQueue");
        assert_eq!(ctx.queue_name(), Some("ordersQueue"));
    }

    #[test]
    fn worker_identity_takes_second_segment_only() {
        let ctx = ExecutionContext::from_worker_identity("MessageProcessor:orders:3");
        assert_eq!(ctx.queue_name(), Some("orders"));
    }

    #[test]
    fn worker_identity_without_prefix_is_direct() {
        for identity in ["", "Worker-7", "MessageListener:x", "MessageProcessor", "messageprocessor:x"] {
            assert_eq!(
                ExecutionContext::from_worker_identity(identity),
                ExecutionContext::Direct,
                "identity {identity:?}"
            );
        }
    }

    #[test]
    fn worker_identity_without_queue_segment_is_direct() {
        for identity in ["MessageProcessor:", "MessageProcessor::", "MessageProcessor:::"] {
            assert_eq!(
                ExecutionContext::from_worker_identity(identity),
                ExecutionContext::Direct,
                "identity {identity:?}"
            );
        }
    }

    #[test]
    fn worker_identity_with_empty_queue_segment_names_empty_queue() {
        let parsed = ExecutionContext::from_worker_identity("MessageProcessor::x");
        assert_eq!(parsed, ExecutionContext::message_processor(""));
        assert_eq!(parsed.queue_name(), Some(""));
    }

    #[test]
    fn call_context_principal_id() {
        let ctx = CallContext::direct().with_principal(Principal::new("alice"));
        assert_eq!(ctx.principal_id(), Some("alice"));
        assert_eq!(CallContext::direct().principal_id(), None);
    }

    #[test]
    fn call_context_for_worker() {
        let ctx = CallContext::for_worker("MessageProcessor:events").with_trace_id("t-1");
        assert_eq!(ctx.execution.queue_name(), Some("events"));
        assert_eq!(ctx.trace_id, "t-1");
    }

    proptest::proptest! {
        #[test]
        fn prefixed_identity_yields_first_segment(queue in "[A-Za-z0-9_.-]{1,20}", tail in "(:[a-z0-9]{0,4}){0,2}") {
            let identity = format!("{MESSAGE_PROCESSOR_PREFIX}{queue}{tail}");
            let ctx = ExecutionContext::from_worker_identity(&identity);
            proptest::prop_assert_eq!(ctx.queue_name(), Some(queue.as_str()));
        }
    }

    #[test]
    fn execution_context_serde_shape() {
        let json = serde_json::to_value(ExecutionContext::message_processor("q")).unwrap();
        assert_eq!(json, serde_json::json!({"kind": "messageProcessor", "queueName": "q"}));
    }
}
