//! Bresenham line rasterisation.

use skirmish_core::Point;

/// Iterator over the tiles of a Bresenham line, both endpoints included.
#[derive(Debug, Clone)]
pub struct Line {
    cur: Point,
    end: Point,
    dx: i64,
    dy: i64,
    sx: i32,
    sy: i32,
    err: i64,
    done: bool,
}

/// The tiles on the straight line from `from` to `to`, inclusive.
pub fn line(from: Point, to: Point) -> Line {
    // Offsets span up to 2^32, error terms twice that: work in i64.
    let dx = i64::from(from.x.abs_diff(to.x));
    let dy = -i64::from(from.y.abs_diff(to.y));
    Line {
        cur: from,
        end: to,
        dx,
        dy,
        sx: to.x.cmp(&from.x) as i32,
        sy: to.y.cmp(&from.y) as i32,
        err: dx + dy,
        done: false,
    }
}

impl Iterator for Line {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.done {
            return None;
        }
        let p = self.cur;
        if p == self.end {
            self.done = true;
            return Some(p);
        }
        let e2 = 2 * self.err;
        if e2 >= self.dy {
            self.err += self.dy;
            self.cur.x += self.sx;
        }
        if e2 <= self.dx {
            self.err += self.dx;
            self.cur.y += self.sy;
        }
        Some(p)
    }
}

impl std::iter::FusedIterator for Line {}
