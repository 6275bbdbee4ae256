//! Reference battlefield storage for *skirmish*.
//!
//! [`TileMap`] implements [`skirmish_core::Battlefield`] with at most one
//! destructible per tile, and [`Layout`] builds maps from ASCII art, which
//! keeps scenario setup in tests and demos readable.

pub mod error;
pub mod layout;
pub mod map;

pub use error::{LayoutError, MapError};
pub use layout::Layout;
pub use map::TileMap;
