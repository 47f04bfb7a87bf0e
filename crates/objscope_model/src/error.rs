use thiserror::Error;

/// Errors raised while building or validating a table
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("object `{0}` is already declared in this container")]
    DuplicateObject(String),

    #[error("group `{0}` is already declared in this container")]
    DuplicateGroup(String),

    /// A group and an object of one container cannot share a name.
    #[error("`{0}` is declared both as an object and as a group")]
    NameTaken(String),
}
