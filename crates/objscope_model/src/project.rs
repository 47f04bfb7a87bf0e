//! Projects and layouts, the owners of global and scene tables

use serde::{Deserialize, Serialize};

use crate::container::{ObjectsContainer, SourceType};
use crate::error::ModelError;
use crate::object::{Object, ObjectGroup};

/// A scene with its own objects
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "TableData", into = "TableData")]
pub struct Layout {
    pub name: String,
    pub objects: ObjectsContainer,
}

impl Layout {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            objects: ObjectsContainer::new(SourceType::Scene),
        }
    }
}

/// A game project: global objects plus its layouts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "ProjectData", into = "ProjectData")]
pub struct Project {
    pub name: String,
    pub objects: ObjectsContainer,
    pub layouts: Vec<Layout>,
}

impl Project {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            objects: ObjectsContainer::new(SourceType::Global),
            layouts: Vec::new(),
        }
    }

    pub fn layout(&self, name: &str) -> Option<&Layout> {
        self.layouts.iter().find(|l| l.name == name)
    }

    pub fn layout_mut(&mut self, name: &str) -> Option<&mut Layout> {
        self.layouts.iter_mut().find(|l| l.name == name)
    }

    /// Check every table of the project for duplicate declarations
    pub fn validate(&self) -> Result<(), ModelError> {
        self.objects.validate()?;
        for layout in &self.layouts {
            layout.objects.validate()?;
        }
        Ok(())
    }
}

// On-disk shape: objects and groups sit directly on the project or layout,
// the source type is implied by where the table lives.

#[derive(Debug, Clone, Serialize, Deserialize)]
struct TableData {
    name: String,
    #[serde(default)]
    objects: Vec<Object>,
    #[serde(default)]
    groups: Vec<ObjectGroup>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ProjectData {
    name: String,
    #[serde(default)]
    objects: Vec<Object>,
    #[serde(default)]
    groups: Vec<ObjectGroup>,
    #[serde(default)]
    layouts: Vec<Layout>,
}

fn container(source_type: SourceType, objects: Vec<Object>, groups: Vec<ObjectGroup>) -> ObjectsContainer {
    ObjectsContainer {
        source_type,
        objects,
        groups,
    }
}

impl From<TableData> for Layout {
    fn from(data: TableData) -> Self {
        Self {
            name: data.name,
            objects: container(SourceType::Scene, data.objects, data.groups),
        }
    }
}

impl From<Layout> for TableData {
    fn from(layout: Layout) -> Self {
        Self {
            name: layout.name,
            objects: layout.objects.objects,
            groups: layout.objects.groups,
        }
    }
}

impl From<ProjectData> for Project {
    fn from(data: ProjectData) -> Self {
        Self {
            name: data.name,
            objects: container(SourceType::Global, data.objects, data.groups),
            layouts: data.layouts,
        }
    }
}

impl From<Project> for ProjectData {
    fn from(project: Project) -> Self {
        Self {
            name: project.name,
            objects: project.objects.objects,
            groups: project.objects.groups,
            layouts: project.layouts,
        }
    }
}
