//! Queues whose handler-issued remote calls are never tagged.

use std::collections::HashSet;

use tracing::info;

use super::config::InfrastructureQueues;
use crate::traits::QueueListener;

/// Immutable allow-list of queue names exempt from tagging.
///
/// Built once at startup and shared read-only. Any queue not listed here is
/// taggable: newly introduced queues are tagged unless explicitly exempted.
#[derive(Debug, Clone, Default)]
pub struct NonTaggedQueueRegistry {
    queue_names: HashSet<String>,
}

impl NonTaggedQueueRegistry {
    /// Creates a registry from a set of queue names. Duplicates collapse.
    #[must_use]
    pub fn new<I, S>(queue_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let queue_names: HashSet<String> = queue_names.into_iter().map(Into::into).collect();
        info!(count = queue_names.len(), "non-tagged queue registry built");
        Self { queue_names }
    }

    /// Creates a registry from the queues drained by the given listeners.
    #[must_use]
    pub fn from_listeners(listeners: &[&dyn QueueListener]) -> Self {
        Self::new(listeners.iter().map(|l| l.queue_name().to_string()))
    }

    /// Creates a registry from the configured infrastructure queues.
    #[must_use]
    pub fn from_config(queues: &InfrastructureQueues) -> Self {
        Self::new(queues.names())
    }

    /// Whether calls issued while draining `queue_name` must stay untagged.
    #[must_use]
    pub fn is_non_tagged(&self, queue_name: &str) -> bool {
        self.queue_names.contains(queue_name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.queue_names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue_names.is_empty()
    }

    /// Registered queue names in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.queue_names.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Listener(&'static str);

    impl QueueListener for Listener {
        fn queue_name(&self) -> &str {
            self.0
        }
    }

    const INFRA: [&str; 5] = [
        "events",
        "highPriorityEvents",
        "remoteCalls",
        "remoteResponses",
        "systemEvents",
    ];

    #[test]
    fn membership_is_exact() {
        let registry = NonTaggedQueueRegistry::new(INFRA);
        for name in INFRA {
            assert!(registry.is_non_tagged(name));
        }
        assert!(!registry.is_non_tagged("ordersQueue"));
        assert!(!registry.is_non_tagged("SystemEvents"));
        assert!(!registry.is_non_tagged(""));
    }

    #[test]
    fn duplicates_collapse() {
        let registry = NonTaggedQueueRegistry::new(["events", "events", "systemEvents"]);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn from_listeners_harvests_queue_names() {
        let a = Listener("events");
        let b = Listener("systemEvents");
        let c = Listener("events");
        let registry = NonTaggedQueueRegistry::from_listeners(&[&a as &dyn QueueListener, &b, &c]);
        assert_eq!(registry.len(), 2);
        assert!(registry.is_non_tagged("systemEvents"));
    }

    #[test]
    fn listener_order_does_not_matter() {
        let listeners: Vec<Listener> = INFRA.into_iter().map(Listener).collect();
        let forward: Vec<&dyn QueueListener> =
            listeners.iter().map(|l| l as &dyn QueueListener).collect();
        let reverse: Vec<&dyn QueueListener> = forward.iter().rev().copied().collect();

        let a = NonTaggedQueueRegistry::from_listeners(&forward);
        let b = NonTaggedQueueRegistry::from_listeners(&reverse);
        for queue in INFRA.iter().chain(&["ordersQueue", "indexing"]) {
            assert_eq!(a.is_non_tagged(queue), b.is_non_tagged(queue));
        }
    }

    #[test]
    fn from_config_uses_all_five_queues() {
        let registry = NonTaggedQueueRegistry::from_config(&InfrastructureQueues::default());
        let mut names: Vec<&str> = registry.iter().collect();
        names.sort_unstable();
        let mut expected = INFRA.to_vec();
        expected.sort_unstable();
        assert_eq!(names, expected);
    }

    #[test]
    fn empty_registry_exempts_nothing() {
        let registry = NonTaggedQueueRegistry::default();
        assert!(registry.is_empty());
        assert!(!registry.is_non_tagged("events"));
    }
}
