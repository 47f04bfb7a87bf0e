//! Object declaration tables
//!
//! The data the resolver reads from:
//! 1. Objects with their type, behaviors, variables and animations
//! 2. Groups of objects declared next to them
//! 3. Containers (tables) holding both, tagged with where they come from
//! 4. Projects and layouts, which own the global and scene-local tables

mod container;
mod error;
mod object;
mod project;
mod variable;

pub use container::{ObjectsContainer, ObjectsTable, SourceType};
pub use error::ModelError;
pub use object::{Behavior, Object, ObjectConfiguration, ObjectGroup};
pub use project::{Layout, Project};
pub use variable::{Variable, VariableType, VariablesContainer};
