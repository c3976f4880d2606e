//! Shape types and their rasterization.
//!
//! ShapeKind is a closed set of geometric variants. Shape adds the color tag
//! and fill flag shared by every variant. The canonical text form produced by
//! `Shape::serialize` doubles as the file format and the duplicate-detection
//! key.

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use crossterm::style::Color;
use serde::{Deserialize, Serialize};

use crate::canvas::Position;
use crate::error::BoardError;

/// Color tag for shapes - 8-color terminal palette plus gray
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    Gray,
}

impl ShapeColor {
    pub const ALL: [ShapeColor; 9] = [
        ShapeColor::Black,
        ShapeColor::Red,
        ShapeColor::Green,
        ShapeColor::Yellow,
        ShapeColor::Blue,
        ShapeColor::Magenta,
        ShapeColor::Cyan,
        ShapeColor::White,
        ShapeColor::Gray,
    ];

    /// Convert to crossterm Color for terminal rendering
    pub fn to_crossterm(self) -> Color {
        match self {
            ShapeColor::Black => Color::Black,
            ShapeColor::Red => Color::Red,
            ShapeColor::Green => Color::Green,
            ShapeColor::Yellow => Color::Yellow,
            ShapeColor::Blue => Color::Blue,
            ShapeColor::Magenta => Color::Magenta,
            ShapeColor::Cyan => Color::Cyan,
            ShapeColor::White => Color::White,
            ShapeColor::Gray => Color::Grey,
        }
    }

    /// Lowercase tag used in commands and saved files
    pub fn name(self) -> &'static str {
        match self {
            ShapeColor::Black => "black",
            ShapeColor::Red => "red",
            ShapeColor::Green => "green",
            ShapeColor::Yellow => "yellow",
            ShapeColor::Blue => "blue",
            ShapeColor::Magenta => "magenta",
            ShapeColor::Cyan => "cyan",
            ShapeColor::White => "white",
            ShapeColor::Gray => "gray",
        }
    }

    /// Parse a color tag. `none` means untagged.
    pub fn parse_tag(tag: &str) -> Result<Option<ShapeColor>, BoardError> {
        let lower = tag.to_ascii_lowercase();
        if lower == "none" {
            return Ok(None);
        }
        if lower == "grey" {
            return Ok(Some(ShapeColor::Gray));
        }
        ShapeColor::ALL
            .into_iter()
            .find(|c| c.name() == lower)
            .map(Some)
            .ok_or_else(|| BoardError::UnknownColor(tag.to_string()))
    }

    pub fn tag(color: Option<ShapeColor>) -> &'static str {
        color.map_or("none", ShapeColor::name)
    }
}

/// Triangle flavours accepted by `add triangle`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TriangleKind {
    Right,
    Equal,
}

impl FromStr for TriangleKind {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "right" => Ok(TriangleKind::Right),
            "equal" | "equilateral" => Ok(TriangleKind::Equal),
            other => Err(BoardError::UnknownTriangle(other.to_string())),
        }
    }
}

/// Different types of shapes we can draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeKind {
    /// Ring around a center cell
    Circle { center: Position, radius: i32 },
    /// Axis-aligned box anchored at its top-left cell
    Rectangle {
        origin: Position,
        width: i32,
        height: i32,
    },
    /// Right angle at the origin, legs running right and down
    RightTriangle { origin: Position, length: i32 },
    /// Isosceles wedge opening downward from the apex
    EquilateralTriangle { apex: Position, length: i32 },
}

/// Offsets `lo..=hi` from `origin` that land inside `[0, limit)`
fn clipped(origin: i32, lo: i64, hi: i64, limit: i32) -> RangeInclusive<i64> {
    let origin = i64::from(origin);
    lo.max(-origin)..=hi.min(i64::from(limit) - 1 - origin)
}

fn at(origin: Position, dx: i64, dy: i64) -> Position {
    // Callers only pass offsets that were clipped to the board
    Position::new(
        (i64::from(origin.x) + dx) as i32,
        (i64::from(origin.y) + dy) as i32,
    )
}

fn parse_int(token: &str) -> Result<i32, BoardError> {
    token
        .parse()
        .map_err(|_| BoardError::InvalidNumber(token.to_string()))
}

fn positive(name: &'static str, value: i32) -> Result<i32, BoardError> {
    if value > 0 {
        Ok(value)
    } else {
        Err(BoardError::NonPositive { name, value })
    }
}

impl ShapeKind {
    /// Parse `<type> [<subtype>] <geometry...>` as used by `add` and in saved
    /// files. Size parameters must be positive.
    pub fn parse(tokens: &[&str]) -> Result<Self, BoardError> {
        let Some((&tag, rest)) = tokens.split_first() else {
            return Err(BoardError::MissingArgument("shape type"));
        };
        match tag {
            "circle" => {
                let [x, y, r] = numbers::<3>("circle", rest)?;
                Ok(ShapeKind::Circle {
                    center: Position::new(x, y),
                    radius: positive("radius", r)?,
                })
            }
            "rectangle" => {
                let [x, y, w, h] = numbers::<4>("rectangle", rest)?;
                Ok(ShapeKind::Rectangle {
                    origin: Position::new(x, y),
                    width: positive("width", w)?,
                    height: positive("height", h)?,
                })
            }
            "triangle" => {
                let Some((&kind, rest)) = rest.split_first() else {
                    return Err(BoardError::MissingArgument("triangle type"));
                };
                let kind: TriangleKind = kind.parse()?;
                let [x, y, len] = numbers::<3>("triangle", rest)?;
                let length = positive("length", len)?;
                let anchor = Position::new(x, y);
                Ok(match kind {
                    TriangleKind::Right => ShapeKind::RightTriangle { origin: anchor, length },
                    TriangleKind::Equal => ShapeKind::EquilateralTriangle { apex: anchor, length },
                })
            }
            other => Err(BoardError::UnknownShape(other.to_string())),
        }
    }

    /// The position that `move` relocates
    pub fn anchor(&self) -> Position {
        match *self {
            ShapeKind::Circle { center, .. } => center,
            ShapeKind::Rectangle { origin, .. } => origin,
            ShapeKind::RightTriangle { origin, .. } => origin,
            ShapeKind::EquilateralTriangle { apex, .. } => apex,
        }
    }

    /// Copy with the anchor relocated; size is unchanged
    pub fn moved_to(&self, pos: Position) -> Self {
        match *self {
            ShapeKind::Circle { radius, .. } => ShapeKind::Circle { center: pos, radius },
            ShapeKind::Rectangle { width, height, .. } => ShapeKind::Rectangle {
                origin: pos,
                width,
                height,
            },
            ShapeKind::RightTriangle { length, .. } => ShapeKind::RightTriangle { origin: pos, length },
            ShapeKind::EquilateralTriangle { length, .. } => {
                ShapeKind::EquilateralTriangle { apex: pos, length }
            }
        }
    }

    /// Number of size parameters `edit` expects
    pub fn edit_arity(&self) -> usize {
        match self {
            ShapeKind::Rectangle { .. } => 2,
            _ => 1,
        }
    }

    /// Copy with new size parameters (radius; width and height; length).
    /// Position and variant never change.
    pub fn with_edit(&self, params: &[i32]) -> Result<Self, BoardError> {
        if params.len() != self.edit_arity() {
            return Err(BoardError::arity(
                format!("edit {}", self.type_name()),
                self.edit_arity(),
                params.len(),
            ));
        }
        Ok(match *self {
            ShapeKind::Circle { center, .. } => ShapeKind::Circle {
                center,
                radius: positive("radius", params[0])?,
            },
            ShapeKind::Rectangle { origin, .. } => ShapeKind::Rectangle {
                origin,
                width: positive("width", params[0])?,
                height: positive("height", params[1])?,
            },
            ShapeKind::RightTriangle { origin, .. } => ShapeKind::RightTriangle {
                origin,
                length: positive("length", params[0])?,
            },
            ShapeKind::EquilateralTriangle { apex, .. } => ShapeKind::EquilateralTriangle {
                apex,
                length: positive("length", params[0])?,
            },
        })
    }

    /// Placement check against a `width` x `height` board.
    ///
    /// Circles only check their center. Rectangles and right triangles may
    /// touch the far edge (inclusive bound). Equilateral triangles must keep
    /// the widened base row on the board.
    pub fn is_inside_board(&self, width: i32, height: i32) -> bool {
        let (w, h) = (i64::from(width), i64::from(height));
        match *self {
            ShapeKind::Circle { center, .. } => {
                center.x >= 0 && center.x < width && center.y >= 0 && center.y < height
            }
            ShapeKind::Rectangle {
                origin,
                width: rw,
                height: rh,
            } => {
                origin.x >= 0
                    && origin.y >= 0
                    && i64::from(origin.x) + i64::from(rw) <= w
                    && i64::from(origin.y) + i64::from(rh) <= h
            }
            ShapeKind::RightTriangle { origin, length } => {
                origin.x >= 0
                    && origin.y >= 0
                    && i64::from(origin.x) + i64::from(length) <= w
                    && i64::from(origin.y) + i64::from(length) <= h
            }
            ShapeKind::EquilateralTriangle { apex, length } => {
                let spread = i64::from(length) - 1;
                let (x, y) = (i64::from(apex.x), i64::from(apex.y));
                x - spread >= 0 && x + spread < w && y >= 0 && y + spread < h
            }
        }
    }

    /// Outline cells that fall on a `width` x `height` board
    pub fn outline_points(&self, width: i32, height: i32) -> Vec<Position> {
        let mut points = Vec::new();
        match *self {
            ShapeKind::Circle { center, radius } => {
                let r = i64::from(radius);
                let (inner, outer) = ((r - 1) * (r - 1), r * r);
                for j in clipped(center.y, -r, r, height) {
                    for i in clipped(center.x, -r, r, width) {
                        let d = i * i + j * j;
                        if inner <= d && d <= outer {
                            points.push(at(center, i, j));
                        }
                    }
                }
            }
            ShapeKind::Rectangle {
                origin,
                width: rw,
                height: rh,
            } => {
                let (rw, rh) = (i64::from(rw), i64::from(rh));
                for i in clipped(origin.y, 0, rh - 1, height) {
                    for j in clipped(origin.x, 0, rw - 1, width) {
                        if i == 0 || i == rh - 1 || j == 0 || j == rw - 1 {
                            points.push(at(origin, j, i));
                        }
                    }
                }
            }
            ShapeKind::RightTriangle { origin, length } => {
                let len = i64::from(length);
                for i in clipped(origin.y, 0, len - 1, height) {
                    for j in clipped(origin.x, 0, i, width) {
                        if i == len - 1 || j == 0 || j == i {
                            points.push(at(origin, j, i));
                        }
                    }
                }
            }
            ShapeKind::EquilateralTriangle { apex, length } => {
                let len = i64::from(length);
                let on_board =
                    |p: Position| p.x >= 0 && p.x < width && p.y >= 0 && p.y < height;
                for i in clipped(apex.y, 0, len - 1, height) {
                    for dx in [-i, i] {
                        let x = i64::from(apex.x) + dx;
                        if x >= 0 && x < i64::from(width) {
                            points.push(at(apex, dx, i));
                        }
                    }
                }
                let base = i64::from(apex.y) + len - 1;
                if base < i64::from(height) {
                    for j in clipped(apex.x, -(len - 1), len - 1, width) {
                        let p = at(apex, j, len - 1);
                        if on_board(p) {
                            points.push(p);
                        }
                    }
                }
            }
        }
        points
    }

    /// Interior cells (including the border) that fall on the board
    pub fn fill_points(&self, width: i32, height: i32) -> Vec<Position> {
        let mut points = Vec::new();
        match *self {
            ShapeKind::Circle { center, radius } => {
                let r = i64::from(radius);
                for j in clipped(center.y, -r, r, height) {
                    for i in clipped(center.x, -r, r, width) {
                        if i * i + j * j <= r * r {
                            points.push(at(center, i, j));
                        }
                    }
                }
            }
            ShapeKind::Rectangle {
                origin,
                width: rw,
                height: rh,
            } => {
                for i in clipped(origin.y, 0, i64::from(rh) - 1, height) {
                    for j in clipped(origin.x, 0, i64::from(rw) - 1, width) {
                        points.push(at(origin, j, i));
                    }
                }
            }
            ShapeKind::RightTriangle { origin, length } => {
                for i in clipped(origin.y, 0, i64::from(length) - 1, height) {
                    for j in clipped(origin.x, 0, i, width) {
                        points.push(at(origin, j, i));
                    }
                }
            }
            ShapeKind::EquilateralTriangle { apex, length } => {
                for i in clipped(apex.y, 0, i64::from(length) - 1, height) {
                    for j in clipped(apex.x, -i, i, width) {
                        points.push(at(apex, j, i));
                    }
                }
            }
        }
        points
    }

    /// Whether the outline passes through `pos`, independent of any board
    pub fn covers(&self, pos: Position) -> bool {
        match *self {
            ShapeKind::Circle { center, radius } => {
                // i128: squared offsets between arbitrary i32 points overflow i64
                let (i, j) = (
                    i128::from(pos.x) - i128::from(center.x),
                    i128::from(pos.y) - i128::from(center.y),
                );
                let r = i128::from(radius);
                let d = i * i + j * j;
                (r - 1) * (r - 1) <= d && d <= r * r
            }
            ShapeKind::Rectangle {
                origin,
                width,
                height,
            } => {
                let j = i64::from(pos.x) - i64::from(origin.x);
                let i = i64::from(pos.y) - i64::from(origin.y);
                let (w, h) = (i64::from(width), i64::from(height));
                (0..w).contains(&j)
                    && (0..h).contains(&i)
                    && (i == 0 || i == h - 1 || j == 0 || j == w - 1)
            }
            ShapeKind::RightTriangle { origin, length } => {
                let j = i64::from(pos.x) - i64::from(origin.x);
                let i = i64::from(pos.y) - i64::from(origin.y);
                let len = i64::from(length);
                (0..len).contains(&i)
                    && (0..=i).contains(&j)
                    && (i == len - 1 || j == 0 || j == i)
            }
            ShapeKind::EquilateralTriangle { apex, length } => {
                let dx = i64::from(pos.x) - i64::from(apex.x);
                let i = i64::from(pos.y) - i64::from(apex.y);
                let len = i64::from(length);
                (0..len).contains(&i) && (dx.abs() == i || (i == len - 1 && dx.abs() <= len - 1))
            }
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            ShapeKind::Circle { .. } => "circle",
            ShapeKind::Rectangle { .. } => "rectangle",
            ShapeKind::RightTriangle { .. } | ShapeKind::EquilateralTriangle { .. } => "triangle",
        }
    }

    /// Canonical `<type> [<subtype>] <geometry...>` tokens
    pub fn serialize(&self) -> String {
        match *self {
            ShapeKind::Circle { center, radius } => {
                format!("circle {} {} {}", center.x, center.y, radius)
            }
            ShapeKind::Rectangle {
                origin,
                width,
                height,
            } => format!("rectangle {} {} {} {}", origin.x, origin.y, width, height),
            ShapeKind::RightTriangle { origin, length } => {
                format!("triangle right {} {} {}", origin.x, origin.y, length)
            }
            ShapeKind::EquilateralTriangle { apex, length } => {
                format!("triangle equal {} {} {}", apex.x, apex.y, length)
            }
        }
    }
}

fn numbers<const N: usize>(what: &str, tokens: &[&str]) -> Result<[i32; N], BoardError> {
    if tokens.len() != N {
        return Err(BoardError::arity(what, N, tokens.len()));
    }
    let mut out = [0; N];
    for (slot, token) in out.iter_mut().zip(tokens) {
        *slot = parse_int(token)?;
    }
    Ok(out)
}

/// A placed (or candidate) shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Shape {
    pub kind: ShapeKind,
    pub color: Option<ShapeColor>,
    pub filled: bool,
}

impl Shape {
    /// Uncolored outline shape
    pub fn new(kind: ShapeKind) -> Self {
        Self {
            kind,
            color: None,
            filled: false,
        }
    }

    /// Filled shape drawn in `color`
    pub fn filled(kind: ShapeKind, color: Option<ShapeColor>) -> Self {
        Self {
            kind,
            color,
            filled: true,
        }
    }

    pub fn fill_state(&self) -> &'static str {
        if self.filled { "filled" } else { "frame" }
    }

    /// Canonical line: `<type> [<subtype>] <geometry...> <color> <fill-state>`
    pub fn serialize(&self) -> String {
        format!(
            "{} {} {}",
            self.kind.serialize(),
            ShapeColor::tag(self.color),
            self.fill_state()
        )
    }

    /// Human-readable summary for `list`
    pub fn describe(&self) -> String {
        let geometry = match self.kind {
            ShapeKind::Circle { center, radius } => {
                format!("Circle ({}, {}), radius: {}", center.x, center.y, radius)
            }
            ShapeKind::Rectangle {
                origin,
                width,
                height,
            } => format!(
                "Rectangle ({}, {}), width: {}, height: {}",
                origin.x, origin.y, width, height
            ),
            ShapeKind::RightTriangle { origin, length } => format!(
                "Triangle ({}, {}), length: {}, type: right",
                origin.x, origin.y, length
            ),
            ShapeKind::EquilateralTriangle { apex, length } => format!(
                "Triangle ({}, {}), length: {}, type: equal",
                apex.x, apex.y, length
            ),
        };
        format!(
            "{}, color: {}, {}",
            geometry,
            ShapeColor::tag(self.color),
            self.fill_state()
        )
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.serialize())
    }
}

impl FromStr for Shape {
    type Err = BoardError;

    /// Parse a canonical line as written by `serialize`
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let Some(&tag) = tokens.first() else {
            return Err(BoardError::MissingArgument("shape type"));
        };
        if !matches!(tag, "circle" | "rectangle" | "triangle") {
            return Err(BoardError::UnknownShape(tag.to_string()));
        }
        let [geometry @ .., color, fill] = tokens.as_slice() else {
            return Err(BoardError::MissingArgument("color and fill state"));
        };
        let kind = ShapeKind::parse(geometry)?;
        let color = ShapeColor::parse_tag(color)?;
        let filled = match *fill {
            "filled" => true,
            "frame" => false,
            other => return Err(BoardError::UnknownFillState(other.to_string())),
        };
        Ok(Shape { kind, color, filled })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use proptest::prelude::*;

    use super::*;
    use crate::canvas::{BOARD_HEIGHT, BOARD_WIDTH};

    fn kind(tokens: &str) -> ShapeKind {
        let tokens: Vec<&str> = tokens.split_whitespace().collect();
        ShapeKind::parse(&tokens).unwrap()
    }

    fn set(points: Vec<Position>) -> HashSet<(i32, i32)> {
        points.into_iter().map(|p| (p.x, p.y)).collect()
    }

    #[test]
    fn parse_rejects_bad_input() {
        assert_eq!(
            ShapeKind::parse(&["hexagon", "1", "2", "3"]),
            Err(BoardError::UnknownShape("hexagon".into()))
        );
        assert_eq!(
            ShapeKind::parse(&["circle", "1", "2"]),
            Err(BoardError::arity("circle", 3, 2))
        );
        assert_eq!(
            ShapeKind::parse(&["circle", "1", "x", "3"]),
            Err(BoardError::InvalidNumber("x".into()))
        );
        assert_eq!(
            ShapeKind::parse(&["circle", "1", "2", "0"]),
            Err(BoardError::NonPositive { name: "radius", value: 0 })
        );
        assert_eq!(
            ShapeKind::parse(&["triangle", "iso", "1", "2", "3"]),
            Err(BoardError::UnknownTriangle("iso".into()))
        );
    }

    #[test]
    fn rectangle_outline_is_hollow_box() {
        let rect = kind("rectangle 5 5 4 4");
        let points = set(rect.outline_points(BOARD_WIDTH, BOARD_HEIGHT));
        assert_eq!(points.len(), 12);
        for corner in [(5, 5), (8, 5), (5, 8), (8, 8)] {
            assert!(points.contains(&corner));
        }
        assert!(!points.contains(&(6, 6)));
        assert_eq!(rect.fill_points(BOARD_WIDTH, BOARD_HEIGHT).len(), 16);
    }

    #[test]
    fn right_triangle_outline() {
        let tri = kind("triangle right 0 0 3");
        let points = set(tri.outline_points(BOARD_WIDTH, BOARD_HEIGHT));
        let expected: HashSet<(i32, i32)> =
            [(0, 0), (0, 1), (1, 1), (0, 2), (1, 2), (2, 2)].into_iter().collect();
        assert_eq!(points, expected);

        let big = kind("triangle right 0 0 5");
        let outline = set(big.outline_points(BOARD_WIDTH, BOARD_HEIGHT));
        assert!(!outline.contains(&(1, 3)));
        let fill = set(big.fill_points(BOARD_WIDTH, BOARD_HEIGHT));
        assert!(fill.contains(&(1, 3)));
        assert_eq!(fill.len(), 15);
    }

    #[test]
    fn equilateral_outline_and_fill() {
        let tri = kind("triangle equal 10 0 3");
        let points = set(tri.outline_points(BOARD_WIDTH, BOARD_HEIGHT));
        let expected: HashSet<(i32, i32)> = [
            (10, 0),
            (9, 1),
            (11, 1),
            (8, 2),
            (9, 2),
            (10, 2),
            (11, 2),
            (12, 2),
        ]
        .into_iter()
        .collect();
        assert_eq!(points, expected);

        let fill = set(tri.fill_points(BOARD_WIDTH, BOARD_HEIGHT));
        assert_eq!(fill.len(), 1 + 3 + 5);
        assert!(fill.contains(&(10, 1)));
    }

    #[test]
    fn small_circle_outline() {
        let circle = kind("circle 5 5 1");
        let points = set(circle.outline_points(BOARD_WIDTH, BOARD_HEIGHT));
        let expected: HashSet<(i32, i32)> =
            [(5, 5), (4, 5), (6, 5), (5, 4), (5, 6)].into_iter().collect();
        assert_eq!(points, expected);
    }

    #[test]
    fn rasterization_clips_to_board() {
        let circle = kind("circle 0 0 3");
        let points = circle.outline_points(BOARD_WIDTH, BOARD_HEIGHT);
        assert!(!points.is_empty());
        assert!(points.iter().all(|p| p.x >= 0 && p.y >= 0));

        // Radius is not bounded by placement, rasterization must stay cheap
        let huge = kind("circle 5 5 2000000000");
        assert!(huge.outline_points(BOARD_WIDTH, BOARD_HEIGHT).is_empty());
        assert_eq!(
            huge.fill_points(BOARD_WIDTH, BOARD_HEIGHT).len(),
            (BOARD_WIDTH * BOARD_HEIGHT) as usize
        );
    }

    #[test]
    fn bounds_rules_per_variant() {
        // Circle checks only its center
        assert!(kind("circle 0 0 10").is_inside_board(60, 40));
        assert!(kind("circle 59 39 30").is_inside_board(60, 40));
        assert!(!kind("circle 60 10 1").is_inside_board(60, 40));
        assert!(!kind("circle -1 10 1").is_inside_board(60, 40));

        // Rectangle may touch the far edge
        assert!(kind("rectangle 56 36 4 4").is_inside_board(60, 40));
        assert!(!kind("rectangle 57 36 4 4").is_inside_board(60, 40));
        assert!(!kind("rectangle -1 0 4 4").is_inside_board(60, 40));

        // Right triangle uses the same inclusive bound
        assert!(kind("triangle right 55 35 5").is_inside_board(60, 40));
        assert!(!kind("triangle right 56 35 5").is_inside_board(60, 40));

        // Equilateral keeps the widened base on the board
        assert!(kind("triangle equal 4 0 5").is_inside_board(60, 40));
        assert!(!kind("triangle equal 3 0 5").is_inside_board(60, 40));
        assert!(kind("triangle equal 55 35 5").is_inside_board(60, 40));
        assert!(!kind("triangle equal 56 35 5").is_inside_board(60, 40));
        assert!(!kind("triangle equal 30 36 5").is_inside_board(60, 40));
    }

    #[test]
    fn edit_changes_size_only() {
        let rect = kind("rectangle 2 3 4 5");
        let edited = rect.with_edit(&[6, 7]).unwrap();
        assert_eq!(edited, kind("rectangle 2 3 6 7"));
        assert_eq!(
            rect.with_edit(&[6]),
            Err(BoardError::arity("edit rectangle", 2, 1))
        );

        let circle = kind("circle 10 10 3");
        assert_eq!(
            circle.with_edit(&[0]),
            Err(BoardError::NonPositive { name: "radius", value: 0 })
        );
        assert!(circle.with_edit(&[-2]).is_err());
        assert_eq!(circle.with_edit(&[4]).unwrap(), kind("circle 10 10 4"));
    }

    #[test]
    fn moved_keeps_size() {
        let tri = kind("triangle equal 10 0 3");
        let moved = tri.moved_to(Position::new(20, 5));
        assert_eq!(moved, kind("triangle equal 20 5 3"));
        assert_eq!(moved.anchor(), Position::new(20, 5));
    }

    #[test]
    fn covers_matches_outline() {
        for def in [
            "circle 10 10 4",
            "rectangle 3 4 6 3",
            "triangle right 2 2 6",
            "triangle equal 20 5 5",
        ] {
            let shape = kind(def);
            let outline = set(shape.outline_points(BOARD_WIDTH, BOARD_HEIGHT));
            for y in 0..BOARD_HEIGHT {
                for x in 0..BOARD_WIDTH {
                    assert_eq!(
                        shape.covers(Position::new(x, y)),
                        outline.contains(&(x, y)),
                        "{def} at ({x}, {y})"
                    );
                }
            }
        }
    }

    #[test]
    fn serialize_parse_canonical_line() {
        let shape = Shape::filled(kind("triangle equal 10 2 4"), Some(ShapeColor::Red));
        assert_eq!(shape.serialize(), "triangle equal 10 2 4 red filled");
        assert_eq!(shape.serialize().parse::<Shape>().unwrap(), shape);

        let plain = Shape::new(kind("circle 1 2 3"));
        assert_eq!(plain.to_string(), "circle 1 2 3 none frame");
        assert_eq!(
            "circle 1 2 3 none solid".parse::<Shape>(),
            Err(BoardError::UnknownFillState("solid".into()))
        );
        assert_eq!(
            "blob 1 2 3 none frame".parse::<Shape>(),
            Err(BoardError::UnknownShape("blob".into()))
        );
    }

    #[test]
    fn describe_mentions_geometry() {
        let shape = Shape::new(kind("rectangle 5 5 4 4"));
        assert_eq!(
            shape.describe(),
            "Rectangle (5, 5), width: 4, height: 4, color: none, frame"
        );
    }

    #[test]
    fn color_tags() {
        assert_eq!(ShapeColor::parse_tag("none"), Ok(None));
        assert_eq!(ShapeColor::parse_tag("Red"), Ok(Some(ShapeColor::Red)));
        assert_eq!(ShapeColor::parse_tag("grey"), Ok(Some(ShapeColor::Gray)));
        assert_eq!(
            ShapeColor::parse_tag("mauve"),
            Err(BoardError::UnknownColor("mauve".into()))
        );
        for color in ShapeColor::ALL {
            assert_eq!(ShapeColor::parse_tag(color.name()), Ok(Some(color)));
        }
    }

    proptest! {
        #[test]
        fn circle_outline_stays_in_annulus(x in 0i32..60, y in 0i32..40, r in 1i32..25) {
            let circle = ShapeKind::Circle { center: Position::new(x, y), radius: r };
            let (inner, outer) = ((r - 1) * (r - 1), r * r);
            for p in circle.outline_points(BOARD_WIDTH, BOARD_HEIGHT) {
                let (dx, dy) = (p.x - x, p.y - y);
                let d = dx * dx + dy * dy;
                prop_assert!(inner <= d && d <= outer);
                prop_assert!(p.x >= 0 && p.x < BOARD_WIDTH && p.y >= 0 && p.y < BOARD_HEIGHT);
            }
        }

        #[test]
        fn fill_contains_outline(x in 0i32..60, y in 0i32..40, len in 1i32..15) {
            for shape in [
                ShapeKind::RightTriangle { origin: Position::new(x, y), length: len },
                ShapeKind::EquilateralTriangle { apex: Position::new(x, y), length: len },
                ShapeKind::Rectangle { origin: Position::new(x, y), width: len, height: len + 1 },
                ShapeKind::Circle { center: Position::new(x, y), radius: len },
            ] {
                let fill = set(shape.fill_points(BOARD_WIDTH, BOARD_HEIGHT));
                for p in shape.outline_points(BOARD_WIDTH, BOARD_HEIGHT) {
                    prop_assert!(fill.contains(&(p.x, p.y)));
                }
            }
        }
    }
}
