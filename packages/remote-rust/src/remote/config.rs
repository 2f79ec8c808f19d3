//! Configuration for the remote call pipeline.

use serde::Deserialize;

use super::registry::NonTaggedQueueRegistry;

/// Names of the infrastructure queues whose handlers must never issue
/// tagged remote calls.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InfrastructureQueues {
    /// General domain events.
    pub events: String,
    /// High-priority domain events.
    pub high_priority_events: String,
    /// Outbound remote call commands.
    pub remote_calls: String,
    /// Responses to remote calls.
    pub remote_responses: String,
    /// System events.
    pub system_events: String,
}

impl InfrastructureQueues {
    /// All five queue names in declaration order.
    #[must_use]
    pub fn names(&self) -> [&str; 5] {
        [
            self.events.as_str(),
            self.high_priority_events.as_str(),
            self.remote_calls.as_str(),
            self.remote_responses.as_str(),
            self.system_events.as_str(),
        ]
    }
}

impl Default for InfrastructureQueues {
    fn default() -> Self {
        Self {
            events: "events".to_string(),
            high_priority_events: "highPriorityEvents".to_string(),
            remote_calls: "remoteCalls".to_string(),
            remote_responses: "remoteResponses".to_string(),
            system_events: "systemEvents".to_string(),
        }
    }
}

/// Top-level configuration for remote call building.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RemoteConfig {
    /// Identifier of this node, attached to log output.
    pub node_id: String,
    /// Infrastructure queues exempt from tagging.
    pub queues: InfrastructureQueues,
    /// Additional queues exempt from tagging. Empty by default.
    pub extra_non_tagged_queues: Vec<String>,
}

/// Errors from loading a [`RemoteConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid remote config: {0}")]
    Parse(#[from] serde_json::Error),
}

impl RemoteConfig {
    /// Parses a JSON document. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` if the document is not valid JSON or a
    /// field has the wrong type.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Builds the exemption registry from the infrastructure queues plus
    /// any extra configured names.
    #[must_use]
    pub fn non_tagged_registry(&self) -> NonTaggedQueueRegistry {
        NonTaggedQueueRegistry::new(
            self.queues
                .names()
                .into_iter()
                .map(str::to_string)
                .chain(self.extra_non_tagged_queues.iter().cloned()),
        )
    }
}
