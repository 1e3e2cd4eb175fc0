//! Error types for the shell core
//!
//! Only conditions that matter at the API boundary become errors; everything
//! recoverable (malformed persisted records, operations on absent targets,
//! capacity exhaustion) is absorbed where it happens.

use thiserror::Error;

/// Errors surfaced by icon store and layout operations
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ShellError {
    /// An icon record with this id already exists
    #[error("icon record {0} already exists")]
    DuplicateId(String),

    /// A recycle bin record already exists
    #[error("a recycle bin record already exists")]
    RecycleBinExists,

    /// The referenced parent is missing or not a folder
    #[error("parent folder {0} does not exist or is not a folder")]
    InvalidParent(String),

    /// The move would make a folder its own ancestor
    #[error("moving {id} into {folder} would create a containment cycle")]
    FolderCycle { id: String, folder: String },

    /// The persisted layout could not be parsed at the top level
    #[error("malformed layout: {0}")]
    MalformedLayout(String),

    /// The layout could not be serialized
    #[error("layout serialization failed: {0}")]
    SerializeLayout(String),
}

/// A window's view was already detached from the host container
///
/// Terminal, recoverable state: remove paths suppress it instead of
/// propagating.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[error("view already detached from host container")]
pub struct DetachedError;
