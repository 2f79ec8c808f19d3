//! Remote call pipeline.
//!
//! 1. **Registry** (`registry`): queues whose handlers never issue tagged calls
//! 2. **Resolution** (`resolver`): which queue, if any, the caller is draining
//! 3. **Building** (`builder`): `RemoteCall` assembly and the tagging decision
//! 4. **Registration** (`table`): interfaces and their declared parameter types
//! 5. **Invocation** (`invoker`): lookup, build, and hand-off to a `RemoteCallSink`

pub mod builder;
pub mod config;
pub mod invoker;
pub mod registry;
pub mod resolver;
pub mod sink;
pub mod table;

// Re-export key types for convenient access.
pub use builder::{BuildError, RemoteCallBuilder};
pub use config::{ConfigError, InfrastructureQueues, RemoteConfig};
pub use invoker::{InvokeError, RemoteInvoker};
pub use registry::NonTaggedQueueRegistry;
pub use resolver::{context_for_worker, queue_for_worker, CallContextResolver, ExecutionContextResolver};
pub use sink::InMemorySink;
pub use table::{InterfaceTable, InterfaceTableBuilder, LookupError};
