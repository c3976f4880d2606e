//! Fixed-size character grid that shapes are rasterized onto.

use crossterm::style::Stylize;
use serde::{Deserialize, Serialize};

use crate::shapes::ShapeColor;

/// Default board width in cells
pub const BOARD_WIDTH: i32 = 60;

/// Default board height in cells
pub const BOARD_HEIGHT: i32 = 40;

/// Largest accepted board side
pub const MAX_BOARD_SIDE: i32 = 1000;

/// A position on the board. Shape math may produce negative or oversized
/// coordinates; the board silently drops those.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A single board cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub color: Option<ShapeColor>,
}

impl Default for Cell {
    fn default() -> Self {
        Self { ch: ' ', color: None }
    }
}

/// The drawing board - dense row-major representation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: i32,
    height: i32,
    cells: Vec<Cell>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BOARD_WIDTH, BOARD_HEIGHT)
    }
}

impl Board {
    /// Create an empty board. Each side is clamped to `0..=MAX_BOARD_SIDE`;
    /// non-positive dimensions yield an empty grid.
    pub fn new(width: i32, height: i32) -> Self {
        let width = width.clamp(0, MAX_BOARD_SIDE);
        let height = height.clamp(0, MAX_BOARD_SIDE);
        let cells = width as usize * height as usize;
        Self {
            width,
            height,
            cells: vec![Cell::default(); cells],
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.width && pos.y >= 0 && pos.y < self.height
    }

    fn index(&self, pos: Position) -> Option<usize> {
        self.contains(pos)
            .then(|| (pos.y * self.width + pos.x) as usize)
    }

    /// Get the cell at a position, or a blank cell when out of bounds
    pub fn get(&self, pos: Position) -> Cell {
        self.index(pos)
            .map(|i| self.cells[i])
            .unwrap_or_default()
    }

    /// Write a cell. Out-of-bounds writes are ignored.
    pub fn set_pixel(&mut self, pos: Position, ch: char, color: Option<ShapeColor>) {
        if let Some(i) = self.index(pos) {
            self.cells[i] = Cell { ch, color };
        }
    }

    /// Reset every cell to blank
    pub fn clear(&mut self) {
        self.cells.fill(Cell::default());
    }

    /// Check whether nothing has been drawn
    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(|c| *c == Cell::default())
    }

    /// Display rows, top to bottom. Colored cells are wrapped in terminal
    /// escape sequences when `colored` is set.
    pub fn rows(&self, colored: bool) -> impl Iterator<Item = String> + '_ {
        self.cells
            .chunks(self.width.max(1) as usize)
            .take(self.height as usize)
            .map(move |row| {
                let mut line = String::with_capacity(row.len());
                for cell in row {
                    match cell.color {
                        Some(color) if colored => {
                            line.push_str(&cell.ch.with(color.to_crossterm()).to_string());
                        }
                        _ => line.push(cell.ch),
                    }
                }
                line
            })
    }

    /// Export the board as plain text, one line per row, no escapes
    pub fn to_plain_string(&self) -> String {
        self.rows(false).collect::<Vec<_>>().join("\n")
    }
}
