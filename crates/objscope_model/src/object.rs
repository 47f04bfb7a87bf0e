//! Objects and groups of objects

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::variable::{Variable, VariablesContainer};

/// A behavior attached to an object
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Behavior {
    pub name: String,
    /// Behavior type, e.g. `PlatformBehavior::PlatformerObjectBehavior`
    #[serde(rename = "type")]
    pub behavior_type: String,
}

/// Settings that depend on the object type
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectConfiguration {
    /// Animation names, in declaration order
    #[serde(default)]
    pub animations: Vec<String>,
    #[serde(default)]
    pub properties: BTreeMap<String, String>,
}

/// An object declaration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Object {
    pub name: String,
    /// Object type, e.g. `Sprite` or `TextObject::Text`
    #[serde(rename = "type")]
    pub object_type: String,
    #[serde(default)]
    pub variables: VariablesContainer,
    #[serde(default)]
    pub behaviors: Vec<Behavior>,
    #[serde(default)]
    pub configuration: ObjectConfiguration,
}

impl Object {
    pub fn new(name: impl Into<String>, object_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            object_type: object_type.into(),
            variables: VariablesContainer::new(),
            behaviors: Vec::new(),
            configuration: ObjectConfiguration::default(),
        }
    }

    pub fn with_behavior(mut self, name: impl Into<String>, behavior_type: impl Into<String>) -> Self {
        self.behaviors.push(Behavior {
            name: name.into(),
            behavior_type: behavior_type.into(),
        });
        self
    }

    pub fn with_variable(mut self, name: impl Into<String>, value: Variable) -> Self {
        self.variables.insert(name, value);
        self
    }

    pub fn with_animation(mut self, name: impl Into<String>) -> Self {
        self.configuration.animations.push(name.into());
        self
    }

    pub fn has_behavior_named(&self, name: &str) -> bool {
        self.behavior(name).is_some()
    }

    pub fn behavior(&self, name: &str) -> Option<&Behavior> {
        self.behaviors.iter().find(|b| b.name == name)
    }

    pub fn behavior_names(&self) -> impl Iterator<Item = &str> {
        self.behaviors.iter().map(|b| b.name.as_str())
    }

    pub fn animation_names(&self) -> impl Iterator<Item = &str> {
        self.configuration.animations.iter().map(|a| a.as_str())
    }
}

/// A named, ordered set of object names
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectGroup {
    pub name: String,
    #[serde(default)]
    pub objects: Vec<String>,
}

impl ObjectGroup {
    pub fn new<I, S>(name: impl Into<String>, objects: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            objects: objects.into_iter().map(Into::into).collect(),
        }
    }

    pub fn has(&self, object_name: &str) -> bool {
        self.objects.iter().any(|o| o == object_name)
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}
