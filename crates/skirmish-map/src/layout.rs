//! Battlefields built from ASCII art.
//!
//! A [`Layout`] validates a block of text where each character is one tile,
//! then builds a [`TileMap`] by mapping characters to optional occupants.

use skirmish_core::Point;

use crate::error::LayoutError;
use crate::map::TileMap;

/// A validated rectangular block of text.
///
/// Lines are separated by `'\n'` and must all have the same width. Leading
/// and trailing whitespace of the whole block is trimmed, individual lines
/// are kept as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    content: String,
    size: Point,
}

impl Layout {
    /// Parse a layout accepting any character.
    pub fn new(s: &str) -> Result<Self, LayoutError> {
        Self::with_runes(s, "")
    }

    /// Parse a layout, rejecting characters that are not in `runes`.
    /// An empty `runes` accepts everything.
    pub fn with_runes(s: &str, runes: &str) -> Result<Self, LayoutError> {
        let s = s.trim();
        let mut width: Option<i32> = None;
        let mut height = 0;
        for (y, line) in s.lines().enumerate() {
            let mut x = 0;
            for ch in line.chars() {
                if !runes.is_empty() && !runes.contains(ch) {
                    return Err(LayoutError::InvalidRune {
                        ch,
                        pos: Point::new(x, y as i32),
                        content: s.to_string(),
                    });
                }
                x += 1;
            }
            match width {
                Some(w) if w != x => return Err(LayoutError::InconsistentSize(s.to_string())),
                _ => width = Some(x),
            }
            height += 1;
        }
        Ok(Self {
            content: s.to_string(),
            size: Point::new(width.unwrap_or(0), height),
        })
    }

    /// Return the layout's textual content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Return the (width, height) size of the layout in tiles.
    pub fn size(&self) -> Point {
        self.size
    }

    /// Iterate over all positions and their characters, row-major.
    pub fn iter(&self) -> impl Iterator<Item = (Point, char)> + '_ {
        self.content.lines().enumerate().flat_map(|(y, line)| {
            line.chars()
                .enumerate()
                .map(move |(x, ch)| (Point::new(x as i32, y as i32), ch))
        })
    }

    /// Build a map, placing `occupant(ch)` wherever it returns `Some`.
    pub fn build<D>(&self, mut occupant: impl FnMut(char) -> Option<D>) -> TileMap<D> {
        // Both walks are row-major over the same rectangle.
        let mut chars = self.iter().map(|(_, ch)| ch);
        TileMap::from_fn(self.size.x, self.size.y, |_| chars.next().and_then(&mut occupant))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ARENA: &str = "
#####
#.R.#
#...#
#####
";

    #[test]
    fn parse_and_size() {
        let l = Layout::new(ARENA).unwrap();
        assert_eq!(l.size(), Point::new(5, 4));
        assert!(l.content().starts_with("#####"));
    }

    #[test]
    fn iter_positions() {
        let l = Layout::new(ARENA).unwrap();
        let cells: Vec<_> = l.iter().collect();
        assert_eq!(cells.len(), 20);
        assert_eq!(cells[0], (Point::new(0, 0), '#'));
        assert_eq!(cells[7], (Point::new(2, 1), 'R'));
    }

    #[test]
    fn build_places_occupants() {
        let l = Layout::new(ARENA).unwrap();
        let map = l.build(|ch| (ch != '.').then_some(ch));
        assert_eq!(map.width(), 5);
        assert_eq!(map.height(), 4);
        assert_eq!(map.at(Point::new(2, 1)), Some(&'R'));
        assert_eq!(map.at(Point::new(1, 1)), None);
        assert_eq!(map.occupied_count(), 15);
    }

    #[test]
    fn build_matches_iter_positions() {
        let l = Layout::new(ARENA).unwrap();
        let map = l.build(|ch| (ch != '.').then_some(ch));
        let expected: Vec<_> = l.iter().filter(|&(_, ch)| ch != '.').collect();
        let got: Vec<_> = map.occupants().map(|(p, &ch)| (p, ch)).collect();
        assert_eq!(got, expected);
    }

    #[test]
    fn empty_layout() {
        let l = Layout::new("  \n ").unwrap();
        assert_eq!(l.size(), Point::new(0, 0));
        assert_eq!(l.build(|_| Some(())).occupied_count(), 0);
    }

    #[test]
    fn rune_validation() {
        assert!(Layout::with_runes(ARENA, "#.R").is_ok());
        let err = Layout::with_runes("#.\n#x", "#.").unwrap_err();
        assert_eq!(
            err,
            LayoutError::InvalidRune {
                ch: 'x',
                pos: Point::new(1, 1),
                content: "#.\n#x".to_string(),
            }
        );
    }

    #[test]
    fn inconsistent_size_error() {
        assert_eq!(
            Layout::new("AB\nCDE"),
            Err(LayoutError::InconsistentSize("AB\nCDE".to_string()))
        );
    }
}
