//! The remote call record handed to transport and lifecycle control.

use serde::{Deserialize, Serialize};

use crate::error::ConstraintViolation;
use crate::types::Value;

/// A fully assembled cross-service method invocation.
///
/// Immutable once built. `parameter_types` and `arguments` always have the
/// same length; the constructor and deserialization both enforce this.
///
/// `tagged` marks the call as deferrable work that a deployment rollover may
/// stop accepting early. Untagged calls must keep flowing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RemoteCallRepr")]
pub struct RemoteCall {
    interface_name: String,
    method_name: String,
    parameter_types: Vec<String>,
    arguments: Vec<Value>,
    principal: Option<String>,
    tagged: bool,
}

impl RemoteCall {
    /// Assembles a record from its parts.
    ///
    /// # Errors
    ///
    /// Returns `ConstraintViolation` if `parameter_types` and `arguments`
    /// differ in length.
    pub fn new(
        interface_name: String,
        method_name: String,
        parameter_types: Vec<String>,
        arguments: Vec<Value>,
        principal: Option<String>,
        tagged: bool,
    ) -> Result<Self, ConstraintViolation> {
        if parameter_types.len() != arguments.len() {
            return Err(ConstraintViolation::new(format!(
                "{interface_name}.{method_name} has {} parameter types but {} arguments",
                parameter_types.len(),
                arguments.len()
            )));
        }
        Ok(Self {
            interface_name,
            method_name,
            parameter_types,
            arguments,
            principal,
            tagged,
        })
    }

    #[must_use]
    pub fn interface_name(&self) -> &str {
        &self.interface_name
    }

    #[must_use]
    pub fn method_name(&self) -> &str {
        &self.method_name
    }

    #[must_use]
    pub fn parameter_types(&self) -> &[String] {
        &self.parameter_types
    }

    #[must_use]
    pub fn arguments(&self) -> &[Value] {
        &self.arguments
    }

    #[must_use]
    pub fn principal(&self) -> Option<&str> {
        self.principal.as_deref()
    }

    #[must_use]
    pub fn is_tagged(&self) -> bool {
        self.tagged
    }

    /// Consumes the record, returning its arguments.
    #[must_use]
    pub fn into_arguments(self) -> Vec<Value> {
        self.arguments
    }
}

/// Unchecked wire shape; converted through [`RemoteCall::new`].
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RemoteCallRepr {
    interface_name: String,
    method_name: String,
    parameter_types: Vec<String>,
    arguments: Vec<Value>,
    #[serde(default)]
    principal: Option<String>,
    tagged: bool,
}

impl TryFrom<RemoteCallRepr> for RemoteCall {
    type Error = ConstraintViolation;

    fn try_from(repr: RemoteCallRepr) -> Result<Self, Self::Error> {
        RemoteCall::new(
            repr.interface_name,
            repr.method_name,
            repr.parameter_types,
            repr.arguments,
            repr.principal,
            repr.tagged,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(tagged: bool) -> RemoteCall {
        RemoteCall::new(
            "com.example.OrderService".to_string(),
            "placeOrder".to_string(),
            vec!["java.lang.String".to_string(), "int".to_string()],
            vec![Value::from("sku-1"), Value::Int(2)],
            Some("alice".to_string()),
            tagged,
        )
        .unwrap()
    }

    #[test]
    fn accessors_return_parts() {
        let call = sample(true);
        assert_eq!(call.interface_name(), "com.example.OrderService");
        assert_eq!(call.method_name(), "placeOrder");
        assert_eq!(call.parameter_types(), ["java.lang.String", "int"]);
        assert_eq!(call.arguments().len(), 2);
        assert_eq!(call.principal(), Some("alice"));
        assert!(call.is_tagged());
    }

    #[test]
    fn mismatched_lengths_are_rejected() {
        let err = RemoteCall::new(
            "Svc".to_string(),
            "m".to_string(),
            vec!["int".to_string()],
            vec![],
            None,
            false,
        )
        .unwrap_err();
        assert!(err.message().contains("1 parameter types but 0 arguments"));
    }

    #[test]
    fn serializes_with_camel_case_fields() {
        let json = serde_json::to_value(sample(false)).unwrap();
        assert_eq!(json["interfaceName"], "com.example.OrderService");
        assert_eq!(json["parameterTypes"][1], "int");
        assert_eq!(json["tagged"], false);
    }

    #[test]
    fn deserialize_rejects_length_mismatch() {
        let json = serde_json::json!({
            "interfaceName": "Svc",
            "methodName": "m",
            "parameterTypes": ["int", "int"],
            "arguments": [{"Int": 1}],
            "tagged": true
        });
        assert!(serde_json::from_value::<RemoteCall>(json).is_err());
    }

    #[test]
    fn deserialize_defaults_missing_principal() {
        let json = serde_json::json!({
            "interfaceName": "Svc",
            "methodName": "m",
            "parameterTypes": [],
            "arguments": [],
            "tagged": false
        });
        let call: RemoteCall = serde_json::from_value(json).unwrap();
        assert_eq!(call.principal(), None);
    }

    #[test]
    fn into_arguments_moves_values_out() {
        let args = sample(false).into_arguments();
        assert_eq!(args[0], Value::from("sku-1"));
    }
}
