//! Error taxonomy for board commands.
//!
//! Every variant is recoverable: the session reports it and moves on to the
//! next command.

use thiserror::Error;

use crate::document::ShapeId;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Verb or shape tag that no parser recognises
    #[error("Unknown shape type: {0}")]
    UnknownShape(String),

    #[error("Unknown triangle type: {0} (expected right or equal)")]
    UnknownTriangle(String),

    #[error("Unknown color: {0}")]
    UnknownColor(String),

    #[error("Unknown fill state: {0} (expected filled or frame)")]
    UnknownFillState(String),

    #[error("Not an integer: {0}")]
    InvalidNumber(String),

    #[error("Wrong number of parameters for {what}: expected {expected}, got {got}")]
    Arity {
        what: String,
        expected: usize,
        got: usize,
    },

    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: i32 },

    #[error("Missing argument: {0}")]
    MissingArgument(&'static str),

    #[error("Shape does not fit on the board: {0}")]
    OutOfBounds(String),

    #[error("Shape already exists: {0}")]
    Duplicate(String),

    #[error("No shape selected")]
    NoSelection,

    #[error("No shape with ID {0}")]
    NoSuchShape(ShapeId),

    #[error("No shape at ({x}, {y})")]
    NoShapeAt { x: i32, y: i32 },

    #[error("No shapes to undo.")]
    NothingToUndo,

    /// File could not be opened, read, or written
    #[error("{0}")]
    Io(String),
}

impl BoardError {
    pub fn arity(what: impl Into<String>, expected: usize, got: usize) -> Self {
        BoardError::Arity {
            what: what.into(),
            expected,
            got,
        }
    }
}

impl From<anyhow::Error> for BoardError {
    fn from(err: anyhow::Error) -> Self {
        BoardError::Io(format!("{:#}", err))
    }
}
