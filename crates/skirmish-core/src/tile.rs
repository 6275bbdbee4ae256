//! Tile content as seen by a visitor: [`Tile`] and [`TileVisitor`].

use crate::geom::Point;

/// What a battlefield reports for a coordinate.
///
/// The battlefield resolves this before the visitor runs, so visitors only
/// need to match on the variant.
#[derive(Debug, PartialEq, Eq)]
pub enum Tile<'a, D> {
    /// Plain ground, nothing to target.
    Ground,
    /// A destructible occupant.
    Destructible(&'a D),
}

impl<'a, D> Tile<'a, D> {
    /// Whether the tile is plain ground.
    #[inline]
    pub fn is_ground(&self) -> bool {
        matches!(self, Self::Ground)
    }

    /// The destructible occupant, if any.
    #[inline]
    pub fn destructible(&self) -> Option<&'a D> {
        match *self {
            Self::Ground => None,
            Self::Destructible(d) => Some(d),
        }
    }
}

impl<'a, D> From<Option<&'a D>> for Tile<'a, D> {
    fn from(occupant: Option<&'a D>) -> Self {
        occupant.map_or(Self::Ground, Self::Destructible)
    }
}

// Manual impls: derive would require `D: Clone`.
impl<D> Clone for Tile<'_, D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D> Copy for Tile<'_, D> {}

/// Callback invoked once per visited coordinate.
///
/// Any `FnMut(Point, Tile<'_, D>)` closure is a visitor.
pub trait TileVisitor<D> {
    /// Handle the tile found at `pos`.
    fn visit_tile(&mut self, pos: Point, tile: Tile<'_, D>);
}

impl<D, F> TileVisitor<D> for F
where
    F: FnMut(Point, Tile<'_, D>),
{
    #[inline]
    fn visit_tile(&mut self, pos: Point, tile: Tile<'_, D>) {
        self(pos, tile)
    }
}
