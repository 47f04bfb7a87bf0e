//! Object declaration tables

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::object::{Object, ObjectGroup};

/// Where a table of objects comes from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceType {
    #[default]
    Unknown,
    /// Objects shared by the whole project
    Global,
    /// Objects of one scene
    Scene,
    /// Child objects of a custom object
    Object,
    /// Parameters and temporaries of an events function
    Function,
}

impl SourceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceType::Unknown => "unknown",
            SourceType::Global => "global",
            SourceType::Scene => "scene",
            SourceType::Object => "object",
            SourceType::Function => "function",
        }
    }
}

impl std::fmt::Display for SourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Read access to one table of object and group declarations.
///
/// Everything the resolver needs from a scope layer goes through this trait.
pub trait ObjectsTable: Sync {
    fn has_object_named(&self, name: &str) -> bool {
        self.object(name).is_some()
    }

    fn has_group_named(&self, name: &str) -> bool {
        self.group(name).is_some()
    }

    fn object(&self, name: &str) -> Option<&Object>;

    fn group(&self, name: &str) -> Option<&ObjectGroup>;

    /// Objects in declaration order
    fn objects(&self) -> Box<dyn Iterator<Item = &Object> + '_>;

    /// Groups in declaration order
    fn groups(&self) -> Box<dyn Iterator<Item = &ObjectGroup> + '_>;

    fn source_type(&self) -> SourceType;
}

/// In-memory table of objects and groups
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ObjectsContainer {
    #[serde(default)]
    pub source_type: SourceType,
    #[serde(default)]
    pub objects: Vec<Object>,
    #[serde(default)]
    pub groups: Vec<ObjectGroup>,
}

impl ObjectsContainer {
    pub fn new(source_type: SourceType) -> Self {
        Self {
            source_type,
            objects: Vec::new(),
            groups: Vec::new(),
        }
    }

    pub fn add_object(&mut self, object: Object) -> Result<&mut Object, ModelError> {
        if self.objects.iter().any(|o| o.name == object.name) {
            return Err(ModelError::DuplicateObject(object.name));
        }
        if self.groups.iter().any(|g| g.name == object.name) {
            return Err(ModelError::NameTaken(object.name));
        }
        self.objects.push(object);
        let last = self.objects.len() - 1;
        Ok(&mut self.objects[last])
    }

    pub fn add_group(&mut self, group: ObjectGroup) -> Result<&mut ObjectGroup, ModelError> {
        if self.groups.iter().any(|g| g.name == group.name) {
            return Err(ModelError::DuplicateGroup(group.name));
        }
        if self.objects.iter().any(|o| o.name == group.name) {
            return Err(ModelError::NameTaken(group.name));
        }
        self.groups.push(group);
        let last = self.groups.len() - 1;
        Ok(&mut self.groups[last])
    }

    /// Builder-style `add_object`, for tables assembled in code
    pub fn with_object(mut self, object: Object) -> Result<Self, ModelError> {
        self.add_object(object)?;
        Ok(self)
    }

    /// Builder-style `add_group`
    pub fn with_group(mut self, group: ObjectGroup) -> Result<Self, ModelError> {
        self.add_group(group)?;
        Ok(self)
    }

    /// Check the naming rules `add_object`/`add_group` enforce, for tables
    /// that were deserialized instead of built.
    pub fn validate(&self) -> Result<(), ModelError> {
        let mut objects = HashSet::new();
        for object in &self.objects {
            if !objects.insert(object.name.as_str()) {
                return Err(ModelError::DuplicateObject(object.name.clone()));
            }
        }
        let mut groups = HashSet::new();
        for group in &self.groups {
            if !groups.insert(group.name.as_str()) {
                return Err(ModelError::DuplicateGroup(group.name.clone()));
            }
            if objects.contains(group.name.as_str()) {
                return Err(ModelError::NameTaken(group.name.clone()));
            }
        }
        Ok(())
    }
}

impl ObjectsTable for ObjectsContainer {
    fn object(&self, name: &str) -> Option<&Object> {
        self.objects.iter().find(|o| o.name == name)
    }

    fn group(&self, name: &str) -> Option<&ObjectGroup> {
        self.groups.iter().find(|g| g.name == name)
    }

    fn objects(&self) -> Box<dyn Iterator<Item = &Object> + '_> {
        Box::new(self.objects.iter())
    }

    fn groups(&self) -> Box<dyn Iterator<Item = &ObjectGroup> + '_> {
        Box::new(self.groups.iter())
    }

    fn source_type(&self) -> SourceType {
        self.source_type
    }
}
