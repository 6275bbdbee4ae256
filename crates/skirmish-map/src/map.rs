//! An in-memory battlefield storing at most one destructible per tile.

use skirmish_core::{Battlefield, Point, Range, Tile, TileVisitor};

use crate::error::MapError;

/// A rectangular battlefield of `Option<D>` tiles.
///
/// A tile is vacant (and lets sight through) when it holds no destructible.
/// Positions outside the map are never vacant and are skipped by
/// [`visit`](Battlefield::visit).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileMap<D> {
    width: i32,
    height: i32,
    occupants: Vec<Option<D>>,
}

impl<D> TileMap<D> {
    /// Create an empty map. Negative dimensions are clamped to zero.
    pub fn new(width: i32, height: i32) -> Self {
        Self::from_fn(width, height, |_| None)
    }

    /// Create a map whose tile at `p` holds `f(p)`. `f` is called once per
    /// position, in row-major order.
    pub fn from_fn(width: i32, height: i32, f: impl FnMut(Point) -> Option<D>) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        let mut occupants = Vec::with_capacity(width as usize * height as usize);
        occupants.extend(Range::with_size(width, height).iter().map(f));
        Self {
            width,
            height,
            occupants,
        }
    }

    /// Width of the map.
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Height of the map.
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Returns the bounding range of the map.
    pub fn bounds(&self) -> Range {
        Range::with_size(self.width, self.height)
    }

    /// Whether the map contains the given point.
    pub fn contains(&self, p: Point) -> bool {
        self.bounds().contains(p)
    }

    fn index(&self, p: Point) -> Option<usize> {
        self.contains(p)
            .then(|| p.y as usize * self.width as usize + p.x as usize)
    }

    /// The destructible at `p`, or `None` if vacant or out of bounds.
    pub fn at(&self, p: Point) -> Option<&D> {
        self.index(p).and_then(|i| self.occupants[i].as_ref())
    }

    /// Mutable access to the destructible at `p`.
    pub fn at_mut(&mut self, p: Point) -> Option<&mut D> {
        let i = self.index(p)?;
        self.occupants[i].as_mut()
    }

    /// Put `d` on a vacant in-bounds tile.
    pub fn place(&mut self, p: Point, d: D) -> Result<(), MapError> {
        let i = self.index(p).ok_or(MapError::OutOfBounds(p))?;
        let slot = &mut self.occupants[i];
        if slot.is_some() {
            return Err(MapError::Occupied(p));
        }
        *slot = Some(d);
        Ok(())
    }

    /// Take the destructible off `p`, leaving ground behind.
    pub fn remove(&mut self, p: Point) -> Option<D> {
        let i = self.index(p)?;
        self.occupants[i].take()
    }

    /// Remove every destructible.
    pub fn clear(&mut self) {
        for slot in &mut self.occupants {
            *slot = None;
        }
    }

    /// Number of occupied tiles.
    pub fn occupied_count(&self) -> usize {
        self.occupants.iter().filter(|o| o.is_some()).count()
    }

    /// Iterate over occupied tiles in row-major order.
    pub fn occupants(&self) -> impl Iterator<Item = (Point, &D)> + '_ {
        self.bounds()
            .iter()
            .zip(self.occupants.iter())
            .filter_map(|(p, o)| o.as_ref().map(|d| (p, d)))
    }
}

impl<D> Battlefield for TileMap<D> {
    type Destructible = D;

    fn width(&self) -> i32 {
        self.width
    }

    fn height(&self) -> i32 {
        self.height
    }

    fn tile(&self, p: Point) -> Tile<'_, D> {
        self.at(p).into()
    }

    fn can_place_at(&self, p: Point) -> bool {
        self.contains(p) && self.at(p).is_none()
    }

    fn visit<V>(&self, p: Point, visitor: &mut V)
    where
        V: TileVisitor<D> + ?Sized,
    {
        if self.contains(p) {
            visitor.visit_tile(p, self.tile(p));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_and_size() {
        let m: TileMap<u8> = TileMap::new(10, 5);
        assert_eq!(m.width(), 10);
        assert_eq!(m.height(), 5);
        assert_eq!(m.bounds(), Range::new(0, 0, 10, 5));
        assert_eq!(m.occupied_count(), 0);
    }

    #[test]
    fn test_negative_size_is_empty() {
        let m: TileMap<u8> = TileMap::new(-4, 3);
        assert_eq!(m.width(), 0);
        assert!(m.bounds().is_empty());
        assert!(!m.can_place_at(Point::new(0, 0)));
    }

    #[test]
    fn test_from_fn_row_major() {
        let mut order = Vec::new();
        let m = TileMap::from_fn(3, 2, |p| {
            order.push(p);
            (p.x == p.y).then_some(p.x)
        });
        assert_eq!(order, Range::with_size(3, 2).iter().collect::<Vec<_>>());
        assert_eq!(m.occupied_count(), 2);
        assert_eq!(m.at(Point::new(0, 0)), Some(&0));
        assert_eq!(m.at(Point::new(1, 1)), Some(&1));
        assert_eq!(m.at(Point::new(2, 1)), None);
        assert_eq!(TileMap::from_fn(-1, 5, |_| Some(())).occupied_count(), 0);
    }

    #[test]
    fn test_extreme_points_are_outside() {
        let mut m = TileMap::new(4, 3);
        m.place(Point::new(3, 2), 'Z').unwrap();
        for p in [
            Point::new(i32::MIN, i32::MIN),
            Point::new(i32::MAX, i32::MAX),
            Point::new(i32::MIN, i32::MAX),
            Point::new(i32::MAX, 0),
        ] {
            assert!(!m.contains(p));
            assert_eq!(m.at(p), None);
            assert!(!m.can_place_at(p));
            assert_eq!(m.place(p, 'Y'), Err(MapError::OutOfBounds(p)));
        }
        assert_eq!(m.at(Point::new(3, 2)), Some(&'Z'));
    }

    #[test]
    fn test_place_and_at() {
        let mut m = TileMap::new(4, 4);
        let p = Point::new(2, 3);
        m.place(p, 'R').unwrap();
        assert_eq!(m.at(p), Some(&'R'));
        assert_eq!(m.at(Point::new(0, 0)), None);
        assert_eq!(m.at(Point::new(10, 10)), None);
        assert!(!m.can_place_at(p));
        assert!(m.can_place_at(Point::new(0, 0)));
    }

    #[test]
    fn test_place_errors() {
        let mut m = TileMap::new(3, 3);
        m.place(Point::new(1, 1), 1).unwrap();
        assert_eq!(
            m.place(Point::new(1, 1), 2),
            Err(MapError::Occupied(Point::new(1, 1)))
        );
        assert_eq!(
            m.place(Point::new(3, 0), 2),
            Err(MapError::OutOfBounds(Point::new(3, 0)))
        );
        assert_eq!(m.at(Point::new(1, 1)), Some(&1));
    }

    #[test]
    fn test_remove_and_clear() {
        let mut m = TileMap::new(3, 3);
        m.place(Point::new(0, 0), 5u32).unwrap();
        m.place(Point::new(2, 2), 6u32).unwrap();
        if let Some(hp) = m.at_mut(Point::new(2, 2)) {
            *hp -= 1;
        }
        assert_eq!(m.remove(Point::new(2, 2)), Some(5));
        assert_eq!(m.remove(Point::new(2, 2)), None);
        assert_eq!(m.occupied_count(), 1);
        m.clear();
        assert_eq!(m.occupied_count(), 0);
    }

    #[test]
    fn test_occupants_row_major() {
        let mut m = TileMap::new(3, 3);
        m.place(Point::new(2, 1), 'b').unwrap();
        m.place(Point::new(1, 0), 'a').unwrap();
        m.place(Point::new(0, 2), 'c').unwrap();
        let items: Vec<_> = m.occupants().collect();
        assert_eq!(
            items,
            vec![
                (Point::new(1, 0), &'a'),
                (Point::new(2, 1), &'b'),
                (Point::new(0, 2), &'c'),
            ]
        );
    }

    #[test]
    fn test_visit_resolves_tiles_and_skips_outside() {
        let mut m = TileMap::new(2, 2);
        m.place(Point::new(1, 0), 'X').unwrap();
        let mut seen = Vec::new();
        let mut visitor =
            |p: Point, t: Tile<'_, char>| seen.push((p, t.destructible().copied()));
        m.visit(Point::new(0, 0), &mut visitor);
        m.visit(Point::new(1, 0), &mut visitor);
        m.visit(Point::new(-1, 0), &mut visitor);
        m.visit(Point::new(0, 2), &mut visitor);
        assert_eq!(
            seen,
            vec![(Point::new(0, 0), None), (Point::new(1, 0), Some('X'))]
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_round_trip() {
        let mut m = TileMap::new(3, 2);
        m.place(Point::new(2, 1), 7u8).unwrap();
        let json = serde_json::to_string(&m).unwrap();
        let back: TileMap<u8> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, m);
    }
}
