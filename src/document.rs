//! Shape registry - THE source of truth for placed shapes.
//!
//! Every mutation goes through this document. It handles:
//! - Identifier assignment (monotonic, never reused)
//! - Duplicate detection via canonical serialization
//! - Selection tracking
//! - Placement validation against the board dimensions

use std::collections::{BTreeMap, HashSet};

use tracing::debug;

use crate::canvas::Position;
use crate::error::BoardError;
use crate::shapes::{Shape, ShapeColor};

/// Shape identifier - positive, assigned in insertion order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShapeId(pub u64);

impl std::fmt::Display for ShapeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ordered registry of placed shapes
#[derive(Debug, Clone)]
pub struct Document {
    /// Shapes keyed by id; BTreeMap order is insertion order
    shapes: BTreeMap<ShapeId, Shape>,
    /// Canonical serializations of every placed shape
    keys: HashSet<String>,
    /// Last id handed out
    last_id: u64,
    /// Lookup key only - re-validated on every use
    selected: Option<ShapeId>,
    width: i32,
    height: i32,
}

impl Document {
    /// Create an empty registry validating against a `width` x `height` board
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            shapes: BTreeMap::new(),
            keys: HashSet::new(),
            last_id: 0,
            selected: None,
            width,
            height,
        }
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn get(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.get(&id)
    }

    /// Shapes in identifier order
    pub fn iter(&self) -> impl Iterator<Item = (ShapeId, &Shape)> {
        self.shapes.iter().map(|(id, shape)| (*id, shape))
    }

    /// `(id, description)` pairs in identifier order
    pub fn list(&self) -> impl Iterator<Item = (ShapeId, String)> + '_ {
        self.iter().map(|(id, shape)| (id, shape.describe()))
    }

    /// The current selection, if it still refers to a placed shape
    pub fn selected(&self) -> Option<ShapeId> {
        self.selected.filter(|id| self.shapes.contains_key(id))
    }

    fn require_selection(&self) -> Result<(ShapeId, Shape), BoardError> {
        let id = self.selected().ok_or(BoardError::NoSelection)?;
        let shape = self.shapes.get(&id).copied().ok_or(BoardError::NoSelection)?;
        Ok((id, shape))
    }

    fn check_bounds(&self, shape: &Shape) -> Result<(), BoardError> {
        if shape.kind.is_inside_board(self.width, self.height) {
            Ok(())
        } else {
            Err(BoardError::OutOfBounds(shape.serialize()))
        }
    }

    /// Place a new shape. Rejected if it is off the board or an exact
    /// duplicate of a placed shape.
    pub fn add(&mut self, shape: Shape) -> Result<ShapeId, BoardError> {
        self.check_bounds(&shape)?;
        let key = shape.serialize();
        if self.keys.contains(&key) {
            return Err(BoardError::Duplicate(key));
        }
        self.last_id += 1;
        let id = ShapeId(self.last_id);
        self.shapes.insert(id, shape);
        self.keys.insert(key);
        debug!(%id, %shape, "added shape");
        Ok(id)
    }

    /// Swap in an edited copy of a placed shape after validating it
    fn commit(&mut self, id: ShapeId, old: Shape, candidate: Shape) -> Result<(), BoardError> {
        self.check_bounds(&candidate)?;
        let old_key = old.serialize();
        let new_key = candidate.serialize();
        if new_key != old_key && self.keys.contains(&new_key) {
            return Err(BoardError::Duplicate(new_key));
        }
        self.keys.remove(&old_key);
        self.keys.insert(new_key);
        self.shapes.insert(id, candidate);
        debug!(%id, shape = %candidate, "updated shape");
        Ok(())
    }

    /// Select by identifier
    pub fn select_id(&mut self, id: ShapeId) -> Result<&Shape, BoardError> {
        let shape = self.shapes.get(&id).ok_or(BoardError::NoSuchShape(id))?;
        self.selected = Some(id);
        Ok(shape)
    }

    /// Select the first shape (in id order) whose outline covers `pos`
    pub fn select_at(&mut self, pos: Position) -> Result<ShapeId, BoardError> {
        let id = self
            .shape_at(pos)
            .ok_or(BoardError::NoShapeAt { x: pos.x, y: pos.y })?;
        self.selected = Some(id);
        Ok(id)
    }

    /// First shape in id order whose drawn outline passes through `pos`.
    /// Off-board positions never match.
    pub fn shape_at(&self, pos: Position) -> Option<ShapeId> {
        let on_board = (0..self.width).contains(&pos.x) && (0..self.height).contains(&pos.y);
        if !on_board {
            return None;
        }
        self.iter()
            .find(|(_, shape)| shape.kind.covers(pos))
            .map(|(id, _)| id)
    }

    /// Remove the selected shape and clear the selection
    pub fn remove_selected(&mut self) -> Result<(ShapeId, Shape), BoardError> {
        let (id, _) = self.require_selection()?;
        let removed = self.take(id).ok_or(BoardError::NoSelection)?;
        Ok((id, removed))
    }

    /// Relocate the selected shape's anchor
    pub fn move_selected(&mut self, pos: Position) -> Result<ShapeId, BoardError> {
        let (id, shape) = self.require_selection()?;
        let candidate = Shape {
            kind: shape.kind.moved_to(pos),
            ..shape
        };
        self.commit(id, shape, candidate)?;
        Ok(id)
    }

    /// Resize the selected shape; the stored shape is untouched on failure
    pub fn edit_selected(&mut self, params: &[i32]) -> Result<ShapeId, BoardError> {
        let (id, shape) = self.require_selection()?;
        let candidate = Shape {
            kind: shape.kind.with_edit(params)?,
            ..shape
        };
        self.commit(id, shape, candidate)?;
        Ok(id)
    }

    /// Recolor the selected shape
    pub fn paint_selected(&mut self, color: Option<ShapeColor>) -> Result<ShapeId, BoardError> {
        let (id, shape) = self.require_selection()?;
        let candidate = Shape { color, ..shape };
        self.commit(id, shape, candidate)?;
        Ok(id)
    }

    /// Remove the most recently added shape
    pub fn undo(&mut self) -> Result<(ShapeId, Shape), BoardError> {
        let id = *self
            .shapes
            .keys()
            .next_back()
            .ok_or(BoardError::NothingToUndo)?;
        let removed = self.take(id).ok_or(BoardError::NothingToUndo)?;
        Ok((id, removed))
    }

    fn take(&mut self, id: ShapeId) -> Option<Shape> {
        let shape = self.shapes.remove(&id)?;
        self.keys.remove(&shape.serialize());
        if self.selected == Some(id) {
            self.selected = None;
        }
        debug!(%id, %shape, "removed shape");
        Some(shape)
    }

    /// Drop every shape. The id counter keeps running.
    pub fn clear(&mut self) {
        self.shapes.clear();
        self.keys.clear();
        self.selected = None;
    }

    /// Replace the whole registry, renumbering from 1. Shapes that fail
    /// validation are returned with their rejection reason.
    pub fn replace_all(&mut self, shapes: impl IntoIterator<Item = Shape>) -> Vec<(Shape, BoardError)> {
        self.clear();
        self.last_id = 0;
        shapes
            .into_iter()
            .filter_map(|shape| self.add(shape).err().map(|err| (shape, err)))
            .collect()
    }
}
