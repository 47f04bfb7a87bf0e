//! Scoped name resolution for objects and groups of objects
//!
//! This crate answers questions about a name used in events:
//! 1. Is it declared, and in which table of the scope stack
//! 2. Which objects it stands for once groups are expanded
//! 3. What type, behaviors, variables and animations those objects share

pub mod merge;
mod resolver;
mod search;

pub use merge::VariableExistence;
pub use resolver::{NameMatch, ScopedObjectResolver};
pub use search::SearchMatcher;
