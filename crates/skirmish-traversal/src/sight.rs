//! Line-of-sight classification and the obstruction scans behind it.

use std::fmt;

use skirmish_core::{Battlefield, Point};

use crate::line::line;

/// How two positions relate, which decides the obstruction scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Alignment {
    /// Same tile or Chebyshev distance 1.
    Adjacent,
    /// `|dx| == |dy| > 1`.
    Diagonal,
    /// Same row.
    Row,
    /// Same column.
    Column,
    /// None of the above.
    Unaligned,
}

/// Classify the offset from `from` to `to`.
///
/// The checks run in order: adjacency, diagonal, row, column.
pub fn classify(from: Point, to: Point) -> Alignment {
    let (dx, dy) = from.abs_diff(to);
    if dx.max(dy) <= 1 {
        Alignment::Adjacent
    } else if dx == dy {
        Alignment::Diagonal
    } else if from.y == to.y {
        Alignment::Row
    } else if from.x == to.x {
        Alignment::Column
    } else {
        Alignment::Unaligned
    }
}

/// Outcome of a line-of-sight query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Sight {
    /// Nothing in the way.
    Clear,
    /// The first occupied tile found by the scan.
    Blocked { at: Point },
}

impl Sight {
    /// Whether the target can be seen.
    #[inline]
    pub fn is_clear(self) -> bool {
        matches!(self, Self::Clear)
    }

    /// The blocking tile, if any.
    #[inline]
    pub fn blocker(self) -> Option<Point> {
        match self {
            Self::Clear => None,
            Self::Blocked { at } => Some(at),
        }
    }
}

/// The obstruction scan run for a pair of positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Scan {
    /// Every tile of the bounding rectangle, x-major.
    Diagonal,
    /// The row segment from the source toward the target.
    Row,
    /// The column segment from the source toward the target.
    Column,
    /// The Bresenham line, endpoints excluded.
    Line,
}

impl Scan {
    /// The first tile, in scan order, for which `hit` returns `true`.
    pub fn find(self, from: Point, to: Point, mut hit: impl FnMut(Point) -> bool) -> Option<Point> {
        match self {
            Self::Diagonal => toward(from.x, to.x)
                .flat_map(|x| toward(from.y, to.y).map(move |y| Point::new(x, y)))
                .find(|&p| hit(p)),
            Self::Row => toward(from.x, to.x)
                .map(|x| Point::new(x, from.y))
                .find(|&p| hit(p)),
            Self::Column => toward(from.y, to.y)
                .map(|y| Point::new(from.x, y))
                .find(|&p| hit(p)),
            Self::Line => line(from, to)
                .skip(1)
                .take_while(|&p| p != to)
                .find(|&p| hit(p)),
        }
    }

    /// The first tile of the scan that `battlefield` reports as occupied.
    pub fn first_blocker<B>(self, battlefield: &B, from: Point, to: Point) -> Option<Point>
    where
        B: Battlefield + ?Sized,
    {
        self.find(from, to, |p| !battlefield.can_place_at(p))
    }
}

impl fmt::Display for Scan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Diagonal => "diagonal",
            Self::Row => "row",
            Self::Column => "column",
            Self::Line => "line",
        })
    }
}

/// Coordinates from `from` (inclusive) stepping toward `to` (exclusive).
fn toward(from: i32, to: i32) -> impl Iterator<Item = i32> + Clone {
    let ascending = from <= to;
    // `i < |to - from|`, so every value lies between the two bounds.
    (0..from.abs_diff(to)).map(move |i| {
        if ascending {
            from.wrapping_add_unsigned(i)
        } else {
            from.wrapping_sub_unsigned(i)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: i32, y: i32) -> Point {
        Point::new(x, y)
    }

    /// Every tile the scan tests, in order.
    fn cells(scan: Scan, from: Point, to: Point) -> Vec<Point> {
        let mut seen = Vec::new();
        scan.find(from, to, |q| {
            seen.push(q);
            false
        });
        seen
    }

    #[test]
    fn classify_offsets() {
        assert_eq!(classify(p(2, 2), p(2, 2)), Alignment::Adjacent);
        assert_eq!(classify(p(2, 2), p(3, 1)), Alignment::Adjacent);
        assert_eq!(classify(p(0, 0), p(3, 3)), Alignment::Diagonal);
        assert_eq!(classify(p(4, 0), p(1, 3)), Alignment::Diagonal);
        assert_eq!(classify(p(0, 2), p(4, 2)), Alignment::Row);
        assert_eq!(classify(p(2, 4), p(2, 0)), Alignment::Column);
        assert_eq!(classify(p(0, 0), p(1, 3)), Alignment::Unaligned);
    }

    #[test]
    fn toward_excludes_far_end() {
        assert_eq!(toward(1, 4).collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(toward(4, 1).collect::<Vec<_>>(), vec![4, 3, 2]);
        assert_eq!(toward(2, 2).count(), 0);
    }

    #[test]
    fn diagonal_scans_bounding_rectangle() {
        let small = cells(Scan::Diagonal, p(0, 0), p(2, 2));
        assert_eq!(small, vec![p(0, 0), p(0, 1), p(1, 0), p(1, 1)]);

        let anti = cells(Scan::Diagonal, p(3, 0), p(0, 3));
        assert_eq!(anti.len(), 9);
        assert_eq!(anti[0], p(3, 0));
        assert_eq!(anti[1], p(3, 1));
        assert_eq!(anti[8], p(1, 2));
    }

    #[test]
    fn row_and_column_include_source() {
        let row = cells(Scan::Row, p(4, 2), p(1, 2));
        assert_eq!(row, vec![p(4, 2), p(3, 2), p(2, 2)]);
        let col = cells(Scan::Column, p(2, 0), p(2, 3));
        assert_eq!(col, vec![p(2, 0), p(2, 1), p(2, 2)]);
    }

    #[test]
    fn line_scan_excludes_endpoints() {
        let steep = cells(Scan::Line, p(0, 0), p(1, 3));
        assert_eq!(steep, vec![p(0, 1), p(1, 2)]);
        assert!(cells(Scan::Line, p(0, 0), p(1, 1)).is_empty());
    }

    #[test]
    fn find_stops_at_first_hit() {
        let mut tested = 0;
        let hit = Scan::Row.find(p(0, 0), p(5, 0), |q| {
            tested += 1;
            q.x == 2
        });
        assert_eq!(hit, Some(p(2, 0)));
        assert_eq!(tested, 3);
    }

    #[test]
    fn extreme_coordinates_do_not_overflow() {
        let (min, max) = (i32::MIN, i32::MAX);
        assert_eq!(classify(p(min, 0), p(max, 0)), Alignment::Row);
        assert_eq!(classify(p(0, max), p(0, min)), Alignment::Column);
        assert_eq!(classify(p(min, min), p(max, max)), Alignment::Diagonal);
        assert_eq!(classify(p(min, 0), p(max, 1)), Alignment::Unaligned);

        assert_eq!(toward(max, min).take(2).collect::<Vec<_>>(), vec![max, max - 1]);
        assert_eq!(toward(min, max).take(2).collect::<Vec<_>>(), vec![min, min + 1]);

        let first = Scan::Row.find(p(max, 3), p(min, 3), |_| true);
        assert_eq!(first, Some(p(max, 3)));
        let first = Scan::Diagonal.find(p(min, max), p(max, min), |_| true);
        assert_eq!(first, Some(p(min, max)));
        let first = Scan::Line.find(p(min, min), p(max, max), |_| true);
        assert_eq!(first, Some(p(min + 1, min + 1)));
    }

    #[test]
    fn sight_accessors() {
        assert!(Sight::Clear.is_clear());
        assert_eq!(Sight::Clear.blocker(), None);
        let s = Sight::Blocked { at: p(1, 1) };
        assert!(!s.is_clear());
        assert_eq!(s.blocker(), Some(p(1, 1)));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn sight_round_trip() {
        let s = Sight::Blocked { at: p(3, 4) };
        let json = serde_json::to_string(&s).unwrap();
        assert_eq!(serde_json::from_str::<Sight>(&json).unwrap(), s);
    }
}
