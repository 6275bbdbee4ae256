//! Errors raised by the reference map and layout parser.

use skirmish_core::Point;
use std::fmt;

/// Errors that can occur when editing a [`TileMap`](crate::TileMap).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapError {
    /// The position lies outside the map.
    OutOfBounds(Point),
    /// The position already holds a destructible.
    Occupied(Point),
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds(p) => write!(f, "map: position {p} is out of bounds"),
            Self::Occupied(p) => write!(f, "map: position {p} is already occupied"),
        }
    }
}

impl std::error::Error for MapError {}

/// Errors that can occur when parsing a [`Layout`](crate::Layout).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// Lines have inconsistent widths.
    InconsistentSize(String),
    /// A character not in the allowed set was found.
    InvalidRune {
        ch: char,
        pos: Point,
        content: String,
    },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InconsistentSize(s) => write!(f, "layout: inconsistent size:\n{s}"),
            Self::InvalidRune { ch, pos, content } => write!(
                f,
                "layout contains invalid rune \u{201c}{ch}\u{201d} at ({}, {}):\n{content}",
                pos.x, pos.y
            ),
        }
    }
}

impl std::error::Error for LayoutError {}
