//! Resolves whether a call originates from a message handler, and for which
//! queue.

use courier_core::{CallContext, ExecutionContext};

/// Answers "is this call running as a handler for a queued message?".
///
/// Implementations must be pure: the answer depends only on the context
/// passed in, never on shared mutable state.
pub trait ExecutionContextResolver: Send + Sync {
    /// The queue being drained, or `None` outside a message handler.
    fn resolve<'a>(&self, ctx: &'a CallContext) -> Option<&'a str>;
}

/// Reads the execution origin carried explicitly on the [`CallContext`].
#[derive(Debug, Clone, Copy, Default)]
pub struct CallContextResolver;

impl ExecutionContextResolver for CallContextResolver {
    fn resolve<'a>(&self, ctx: &'a CallContext) -> Option<&'a str> {
        ctx.execution.queue_name()
    }
}

/// Queue name encoded in a worker identity of the form
/// `"MessageProcessor:<queueName>"`.
///
/// For transports that still identify handlers by worker name. Malformed
/// identities resolve to no queue rather than failing.
#[must_use]
pub fn queue_for_worker(identity: &str) -> Option<String> {
    match ExecutionContext::from_worker_identity(identity) {
        ExecutionContext::MessageProcessor { queue_name } => Some(queue_name),
        ExecutionContext::Direct => None,
    }
}

/// Call context whose origin is taken from a worker identity.
#[must_use]
pub fn context_for_worker(identity: &str) -> CallContext {
    CallContext::for_worker(identity)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn call_context_resolver_reads_explicit_origin() {
        let resolver = CallContextResolver;
        assert_eq!(
            resolver.resolve(&CallContext::message_processor("ordersQueue")),
            Some("ordersQueue")
        );
        assert_eq!(resolver.resolve(&CallContext::direct()), None);
    }

    #[test]
    fn identity_with_prefix_resolves() {
        assert_eq!(
            queue_for_worker("MessageProcessor:systemEvents").as_deref(),
            Some("systemEvents")
        );
    }

    #[test]
    fn malformed_identities_resolve_to_none() {
        for identity in ["", "Worker-7", "MessageListener:x", "no-colon", "MessageProcessor:"] {
            assert_eq!(queue_for_worker(identity), None, "{identity:?}");
        }
    }

    #[test]
    fn context_for_round_trips_through_call_context_resolver() {
        let ctx = context_for_worker("MessageProcessor:indexing");
        assert_eq!(CallContextResolver.resolve(&ctx), Some("indexing"));
    }
}
