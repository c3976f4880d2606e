//! Interactive ASCII-art drawing board.
//!
//! Shapes are placed on a fixed character grid through text commands, kept in
//! a registry with stable ids, and persisted as one canonical line per shape.

pub mod app;
pub mod canvas;
pub mod command;
pub mod config;
pub mod document;
pub mod error;
pub mod file_io;
pub mod render;
pub mod shapes;

pub use app::{App, Response};
pub use canvas::{Board, Position};
pub use command::Command;
pub use config::Config;
pub use document::{Document, ShapeId};
pub use error::BoardError;
pub use shapes::{Shape, ShapeColor, ShapeKind};
