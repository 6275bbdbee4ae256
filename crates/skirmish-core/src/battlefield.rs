//! The [`Battlefield`] collaborator: dimensions, tile content, occupancy.

use crate::geom::{Point, Range};
use crate::tile::{Tile, TileVisitor};

/// A rectangular battlefield read by traversal and line-of-sight queries.
///
/// Implementors own tile storage and the occupancy model. Coordinates handed
/// to [`tile`](Self::tile), [`visit`](Self::visit) and
/// [`can_place_at`](Self::can_place_at) are not pre-validated and may lie
/// outside `[0, width) × [0, height)`; implementors decide how to treat them.
pub trait Battlefield {
    /// The occupant type that can be targeted and destroyed.
    type Destructible;

    /// Number of columns. Non-positive means an empty battlefield.
    fn width(&self) -> i32;

    /// Number of rows. Non-positive means an empty battlefield.
    fn height(&self) -> i32;

    /// Resolve what sits at `p`.
    fn tile(&self, p: Point) -> Tile<'_, Self::Destructible>;

    /// Whether `p` is vacant, i.e. does not block a line of sight.
    fn can_place_at(&self, p: Point) -> bool;

    /// Dispatch the tile at `p` to `visitor`.
    ///
    /// The default resolves [`tile`](Self::tile) and hands it over as-is.
    fn visit<V>(&self, p: Point, visitor: &mut V)
    where
        V: TileVisitor<Self::Destructible> + ?Sized,
    {
        visitor.visit_tile(p, self.tile(p));
    }

    /// The in-bounds region, `[0, width) × [0, height)`.
    fn bounds(&self) -> Range {
        Range::with_size(self.width(), self.height())
    }
}

impl<B: Battlefield + ?Sized> Battlefield for &B {
    type Destructible = B::Destructible;

    fn width(&self) -> i32 {
        (**self).width()
    }

    fn height(&self) -> i32 {
        (**self).height()
    }

    fn tile(&self, p: Point) -> Tile<'_, Self::Destructible> {
        (**self).tile(p)
    }

    fn can_place_at(&self, p: Point) -> bool {
        (**self).can_place_at(p)
    }

    fn visit<V>(&self, p: Point, visitor: &mut V)
    where
        V: TileVisitor<Self::Destructible> + ?Sized,
    {
        (**self).visit(p, visitor)
    }
}
