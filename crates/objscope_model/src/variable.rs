//! Variables declared on objects

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The type of a variable value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VariableType {
    String,
    Number,
    Boolean,
    Structure,
    Array,
}

impl VariableType {
    pub fn as_str(&self) -> &'static str {
        match self {
            VariableType::String => "string",
            VariableType::Number => "number",
            VariableType::Boolean => "boolean",
            VariableType::Structure => "structure",
            VariableType::Array => "array",
        }
    }
}

impl std::fmt::Display for VariableType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A variable value. Structures and arrays nest further variables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Variable {
    Boolean(bool),
    Number(f64),
    String(String),
    Array(Vec<Variable>),
    Structure(BTreeMap<String, Variable>),
}

impl Variable {
    pub fn variable_type(&self) -> VariableType {
        match self {
            Variable::Boolean(_) => VariableType::Boolean,
            Variable::Number(_) => VariableType::Number,
            Variable::String(_) => VariableType::String,
            Variable::Array(_) => VariableType::Array,
            Variable::Structure(_) => VariableType::Structure,
        }
    }

    /// Child of a structure, if this is one
    pub fn child(&self, name: &str) -> Option<&Variable> {
        match self {
            Variable::Structure(children) => children.get(name),
            _ => None,
        }
    }
}

impl Default for Variable {
    fn default() -> Self {
        Variable::Number(0.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct NamedVariable {
    name: String,
    value: Variable,
}

/// Ordered, keyed storage for the variables of one object
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VariablesContainer {
    entries: Vec<NamedVariable>,
}

impl VariablesContainer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a variable. Replacing an existing one keeps its position.
    pub fn insert(&mut self, name: impl Into<String>, value: Variable) {
        let name = name.into();
        match self.entries.iter_mut().find(|e| e.name == name) {
            Some(entry) => entry.value = value,
            None => self.entries.push(NamedVariable { name, value }),
        }
    }

    pub fn has(&self, name: &str) -> bool {
        self.entries.iter().any(|e| e.name == name)
    }

    pub fn get(&self, name: &str) -> Option<&Variable> {
        self.entries.iter().find(|e| e.name == name).map(|e| &e.value)
    }

    /// Variables in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Variable)> {
        self.entries.iter().map(|e| (e.name.as_str(), &e.value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
