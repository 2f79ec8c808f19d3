//! Startup-time registration table of remote interfaces.

use std::collections::HashMap;

use courier_core::{ConstraintViolation, InterfaceDescriptor, MethodDescriptor};
use tracing::info;

/// Errors from looking up a method in an [`InterfaceTable`].
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("unknown remote interface: {interface}")]
    UnknownInterface { interface: String },
    #[error("unknown method {method} on remote interface {interface}")]
    UnknownMethod { interface: String, method: String },
}

/// Immutable table of remote interfaces and their method descriptors.
///
/// Built once via [`InterfaceTable::builder`] and shared read-only.
#[derive(Debug, Default)]
pub struct InterfaceTable {
    interfaces: HashMap<String, InterfaceDescriptor>,
}

impl InterfaceTable {
    #[must_use]
    pub fn builder() -> InterfaceTableBuilder {
        InterfaceTableBuilder::default()
    }

    /// Look up the descriptor for `method` on `interface`.
    ///
    /// # Errors
    ///
    /// Returns `LookupError::UnknownInterface` or `LookupError::UnknownMethod`
    /// when either name is not registered.
    pub fn method(&self, interface: &str, method: &str) -> Result<&MethodDescriptor, LookupError> {
        let descriptor =
            self.interfaces
                .get(interface)
                .ok_or_else(|| LookupError::UnknownInterface {
                    interface: interface.to_string(),
                })?;
        descriptor
            .method(method)
            .ok_or_else(|| LookupError::UnknownMethod {
                interface: interface.to_string(),
                method: method.to_string(),
            })
    }

    #[must_use]
    pub fn interface(&self, name: &str) -> Option<&InterfaceDescriptor> {
        self.interfaces.get(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.interfaces.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.interfaces.is_empty()
    }
}

/// Collects interface registrations for an [`InterfaceTable`].
#[derive(Debug, Default)]
pub struct InterfaceTableBuilder {
    interfaces: HashMap<String, InterfaceDescriptor>,
}

impl InterfaceTableBuilder {
    /// Register an interface.
    ///
    /// # Errors
    ///
    /// Returns `ConstraintViolation` if an interface with the same name is
    /// already registered.
    pub fn register(mut self, descriptor: InterfaceDescriptor) -> Result<Self, ConstraintViolation> {
        if self.interfaces.contains_key(descriptor.name()) {
            return Err(ConstraintViolation::new(format!(
                "remote interface {} registered twice",
                descriptor.name()
            )));
        }
        self.interfaces.insert(descriptor.name().to_string(), descriptor);
        Ok(self)
    }

    #[must_use]
    pub fn build(self) -> InterfaceTable {
        info!(interfaces = self.interfaces.len(), "remote interface table built");
        InterfaceTable {
            interfaces: self.interfaces,
        }
    }
}
