//! Static descriptors for remote interfaces and their methods.
//!
//! Descriptors are declared once at startup and replace any runtime type
//! introspection: the parameter types recorded on a call are always the
//! declared ones.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ConstraintViolation;

/// Name of a declared static parameter type, e.g. `"com.example.Animal"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeDescriptor(String);

impl TypeDescriptor {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TypeDescriptor {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for TypeDescriptor {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// A method name plus its ordered declared parameter types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodDescriptor {
    name: String,
    parameter_types: Vec<TypeDescriptor>,
}

impl MethodDescriptor {
    #[must_use]
    pub fn new<I, T>(name: impl Into<String>, parameter_types: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<TypeDescriptor>,
    {
        Self {
            name: name.into(),
            parameter_types: parameter_types.into_iter().map(Into::into).collect(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn parameter_types(&self) -> &[TypeDescriptor] {
        &self.parameter_types
    }

    /// Number of declared parameters.
    #[must_use]
    pub fn arity(&self) -> usize {
        self.parameter_types.len()
    }
}

/// A remote interface and the methods it exposes, keyed by method name.
///
/// Overloading by name is not supported: each method name appears once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceDescriptor {
    name: String,
    methods: BTreeMap<String, MethodDescriptor>,
}

impl InterfaceDescriptor {
    /// Starts declaring an interface with the given name.
    #[must_use]
    pub fn builder(name: impl Into<String>) -> InterfaceDescriptorBuilder {
        InterfaceDescriptorBuilder {
            name: name.into(),
            methods: Vec::new(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn method(&self, name: &str) -> Option<&MethodDescriptor> {
        self.methods.get(name)
    }

    /// Declared methods in name order.
    pub fn methods(&self) -> impl Iterator<Item = &MethodDescriptor> {
        self.methods.values()
    }
}

/// Collects method declarations for an [`InterfaceDescriptor`].
#[derive(Debug)]
pub struct InterfaceDescriptorBuilder {
    name: String,
    methods: Vec<MethodDescriptor>,
}

impl InterfaceDescriptorBuilder {
    /// Declares a method with its ordered parameter types.
    #[must_use]
    pub fn method<I, T>(mut self, name: impl Into<String>, parameter_types: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<TypeDescriptor>,
    {
        self.methods.push(MethodDescriptor::new(name, parameter_types));
        self
    }

    /// Finishes the declaration.
    ///
    /// # Errors
    ///
    /// Returns `ConstraintViolation` if the interface name is empty or a
    /// method name is declared more than once.
    pub fn build(self) -> Result<InterfaceDescriptor, ConstraintViolation> {
        if self.name.is_empty() {
            return Err(ConstraintViolation::new("interface name must not be empty"));
        }
        let mut methods = BTreeMap::new();
        for method in self.methods {
            if methods.contains_key(method.name()) {
                return Err(ConstraintViolation::new(format!(
                    "method {} declared twice on interface {}",
                    method.name(),
                    self.name
                )));
            }
            methods.insert(method.name().to_string(), method);
        }
        Ok(InterfaceDescriptor {
            name: self.name,
            methods,
        })
    }
}
