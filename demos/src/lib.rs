//! Shared scenario code for the skirmish demos.

use std::collections::HashMap;

use rand::{Rng, RngExt};
use skirmish_core::{Point, Tile};
use skirmish_map::TileMap;
use skirmish_traversal::{BattlefieldTraversal, NullObserver};

pub const WIDTH: i32 = 24;
pub const HEIGHT: i32 = 14;

/// Destructible scenery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Obstacle {
    Rock,
    Crate,
    Barrel,
}

impl Obstacle {
    pub fn glyph(self) -> char {
        match self {
            Self::Rock => '#',
            Self::Crate => '+',
            Self::Barrel => 'o',
        }
    }
}

/// Scatter obstacles over a fresh map, roughly `density` percent of tiles.
pub fn random_battlefield(
    rng: &mut impl Rng,
    width: i32,
    height: i32,
    density: u32,
) -> TileMap<Obstacle> {
    TileMap::from_fn(width, height, |_| {
        if rng.random_range(0..100) >= density {
            return None;
        }
        Some(match rng.random_range(0..3) {
            0 => Obstacle::Rock,
            1 => Obstacle::Crate,
            _ => Obstacle::Barrel,
        })
    })
}

/// Draw the map as text, one line per row. `marks` override tiles.
pub fn render(map: &TileMap<Obstacle>, marks: &HashMap<Point, char>) -> String {
    let mut out = String::new();
    BattlefieldTraversal::new(map)
        .with_observer(NullObserver)
        .visit_full_map(&mut |p: Point, tile: Tile<'_, Obstacle>| {
            let ch = match (marks.get(&p), tile) {
                (Some(&m), _) => m,
                (None, Tile::Destructible(o)) => o.glyph(),
                (None, Tile::Ground) => '.',
            };
            out.push(ch);
            if p.x == map.width() - 1 {
                out.push('\n');
            }
        });
    out
}
