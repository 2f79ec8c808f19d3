//! Courier Core — remote call records, method descriptors, and call context.

pub mod call;
pub mod context;
pub mod descriptor;
pub mod error;
pub mod types;

pub use call::RemoteCall;
pub use context::{CallContext, ExecutionContext, MESSAGE_PROCESSOR_PREFIX};
pub use descriptor::{InterfaceDescriptor, InterfaceDescriptorBuilder, MethodDescriptor, TypeDescriptor};
pub use error::ConstraintViolation;
pub use types::{Principal, Value};
