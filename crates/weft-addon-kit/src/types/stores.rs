use indexmap::IndexMap;
use serde_json::Value;

use super::diagnostics::Diagnostic;
use super::operations::OperationInput;

/// Resolved parameter values for one scope (one input item, typically).
/// Values arrive from the host as JSON; the typed accessors convert misses
/// and mismatches into diagnostics the caller can surface verbatim.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ValueStore {
    pub name: String,
    store: IndexMap<String, Value>,
}

impl ValueStore {
    pub fn new(name: &str) -> ValueStore {
        ValueStore { name: name.to_string(), store: IndexMap::new() }
    }

    pub fn tmp() -> ValueStore {
        ValueStore::new("")
    }

    pub fn with_value(mut self, key: &str, value: Value) -> Self {
        self.store.insert(key.to_string(), value);
        self
    }

    pub fn with_values_from_object(mut self, object: &serde_json::Map<String, Value>) -> Self {
        for (key, value) in object.iter() {
            self.store.insert(key.clone(), value.clone());
        }
        self
    }

    pub fn insert(&mut self, key: &str, value: Value) {
        self.store.insert(key.to_string(), value);
    }

    /// Verifies that every non-optional input of a specification is present.
    pub fn check(&self, instance_name: &str, spec_inputs: &[OperationInput]) -> Result<(), Diagnostic> {
        for input in spec_inputs.iter() {
            if input.optional {
                continue;
            }
            if self.store.get(&input.name).is_none() {
                return Err(Diagnostic::error_from_string(format!(
                    "Could not execute operation '{}': required input '{}' missing",
                    instance_name, input.name
                )));
            }
        }
        Ok(())
    }

    // Expected values
    pub fn get_expected_value(&self, key: &str) -> Result<&Value, Diagnostic> {
        let Some(value) = self.store.get(key) else {
            return Err(Diagnostic::error_from_string(format!(
                "unable to retrieve value '{}'",
                key
            )));
        };
        Ok(value)
    }

    pub fn get_expected_string(&self, key: &str) -> Result<&str, Diagnostic> {
        let value = self.get_expected_value(key)?;
        let Some(value) = value.as_str() else {
            return Err(Diagnostic::error_from_string(format!(
                "value associated with '{}' type mismatch: expected string",
                key
            )));
        };
        Ok(value)
    }

    pub fn get_expected_integer(&self, key: &str) -> Result<i64, Diagnostic> {
        let value = self.get_expected_value(key)?;
        let Some(value) = value.as_i64() else {
            return Err(Diagnostic::error_from_string(format!(
                "value associated with '{}' type mismatch: expected integer",
                key
            )));
        };
        Ok(value)
    }

    pub fn get_expected_uint(&self, key: &str) -> Result<u64, Diagnostic> {
        let value = self.get_expected_value(key)?;
        let Some(value) = value.as_u64() else {
            return Err(Diagnostic::error_from_string(format!(
                "value associated with '{}' type mismatch: expected positive integer",
                key
            )));
        };
        Ok(value)
    }

    pub fn get_expected_bool(&self, key: &str) -> Result<bool, Diagnostic> {
        let value = self.get_expected_value(key)?;
        let Some(value) = value.as_bool() else {
            return Err(Diagnostic::error_from_string(format!(
                "value associated with '{}' type mismatch: expected bool",
                key
            )));
        };
        Ok(value)
    }

    pub fn get_expected_object(&self, key: &str) -> Result<&serde_json::Map<String, Value>, Diagnostic> {
        let value = self.get_expected_value(key)?;
        let Some(value) = value.as_object() else {
            return Err(Diagnostic::error_from_string(format!(
                "value associated with '{}' type mismatch: expected object",
                key
            )));
        };
        Ok(value)
    }

    // Optional values
    pub fn get_value(&self, key: &str) -> Option<&Value> {
        self.store.get(key)
    }

    pub fn get_string(&self, key: &str) -> Option<&str> {
        self.store.get(key).and_then(|v| v.as_str())
    }

    pub fn get_uint(&self, key: &str) -> Option<u64> {
        self.store.get(key).and_then(|v| v.as_u64())
    }

    pub fn get_integer(&self, key: &str) -> Option<i64> {
        self.store.get(key).and_then(|v| v.as_i64())
    }

    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.store.get(key).and_then(|v| v.as_bool())
    }

    pub fn iter(&self) -> indexmap::map::Iter<String, Value> {
        self.store.iter()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}
