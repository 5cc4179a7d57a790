//! Errors raised while building the hierarchy.

use std::fmt;

use thiserror::Error;

use crate::EntityKind;

/// What two entities collided on.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Conflict {
    Name,
    Code(i64),
}

impl fmt::Display for Conflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Conflict::Name => write!(f, "name"),
            Conflict::Code(code) => write!(f, "code {code}"),
        }
    }
}

/// A name or code that is already taken within its scope.
#[derive(Clone, Eq, PartialEq, Debug, Error)]
#[error(
    "duplicate {kind} {conflict}: `{name}` collides with `{existing}`{}",
    .scope.as_ref().map(|s| format!(" in `{s}`")).unwrap_or_default()
)]
pub struct DuplicateDefinitionError {
    pub kind: EntityKind,
    pub conflict: Conflict,
    /// The entity being inserted.
    pub name: String,
    /// The entity already present.
    pub existing: String,
    /// Owning facility or component; `None` for facilities.
    pub scope: Option<String>,
}

/// A facility or component code outside its bit width.
#[derive(Clone, Eq, PartialEq, Debug, Error)]
#[error(
    "{kind} `{name}` has code {code}, outside the {}-bit range 0..={}",
    .kind.code_bits(),
    .kind.max_code()
)]
pub struct RangeError {
    pub kind: EntityKind,
    pub name: String,
    pub code: i64,
}

/// Any rejected insertion.
#[derive(Clone, Eq, PartialEq, Debug, Error)]
pub enum ModelError {
    #[error(transparent)]
    Duplicate(#[from] DuplicateDefinitionError),
    #[error(transparent)]
    Range(#[from] RangeError),
}
