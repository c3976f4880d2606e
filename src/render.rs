//! Compositing shapes onto the board.

use crate::canvas::Board;
use crate::document::Document;
use crate::shapes::Shape;

/// Character used for shape outlines
pub const OUTLINE_CHAR: char = '*';

/// Character used for filled interiors
pub const FILL_CHAR: char = '#';

/// Rasterize a single shape on top of whatever is already drawn.
/// Filled shapes get their interior first so the outline stays visible.
pub fn draw_shape(board: &mut Board, shape: &Shape) {
    let (width, height) = (board.width(), board.height());
    if shape.filled {
        for pos in shape.kind.fill_points(width, height) {
            board.set_pixel(pos, FILL_CHAR, shape.color);
        }
    }
    for pos in shape.kind.outline_points(width, height) {
        board.set_pixel(pos, OUTLINE_CHAR, shape.color);
    }
}

/// Clear the board and redraw every shape in id order (last write wins)
pub fn render_all(board: &mut Board, doc: &Document) {
    board.clear();
    for (_, shape) in doc.iter() {
        draw_shape(board, shape);
    }
}
