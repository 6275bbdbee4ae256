//! **skirmish-core**: battlefield grid abstraction for turn-based combat.
//!
//! This crate defines the vocabulary shared across the *skirmish* crates:
//! geometry primitives, the [`Tile`] content a visitor receives, and the
//! [`Battlefield`] trait that traversal and line-of-sight queries read from.

pub mod battlefield;
pub mod geom;
pub mod tile;

pub use battlefield::Battlefield;
pub use geom::{Point, Range, RangeIter};
pub use tile::{Tile, TileVisitor};
