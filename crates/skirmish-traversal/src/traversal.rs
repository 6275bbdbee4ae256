//! [`BattlefieldTraversal`]: visit orders and line of sight over a
//! [`Battlefield`].

use skirmish_core::{Battlefield, Point, Range, RangeIter, TileVisitor};

use crate::config::{SightRule, TraversalConfig};
use crate::observer::{LogObserver, SightEvent, SightObserver};
use crate::ring::rings;
use crate::sight::{Alignment, Scan, Sight, classify};

/// Read-only traversal engine over a borrowed battlefield.
///
/// The engine owns no tile state; every query reads the battlefield through
/// [`Battlefield::visit`] or [`Battlefield::can_place_at`] at call time.
pub struct BattlefieldTraversal<'a, B: ?Sized, O = LogObserver> {
    battlefield: &'a B,
    config: TraversalConfig,
    observer: O,
}

impl<'a, B: Battlefield + ?Sized> BattlefieldTraversal<'a, B> {
    /// Create an engine with the default config, logging through `log`.
    pub fn new(battlefield: &'a B) -> Self {
        Self {
            battlefield,
            config: TraversalConfig::default(),
            observer: LogObserver,
        }
    }
}

impl<'a, B: Battlefield + ?Sized, O: SightObserver> BattlefieldTraversal<'a, B, O> {
    /// Replace the config (builder).
    pub fn with_config(mut self, config: TraversalConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace the observer (builder).
    pub fn with_observer<P: SightObserver>(self, observer: P) -> BattlefieldTraversal<'a, B, P> {
        BattlefieldTraversal {
            battlefield: self.battlefield,
            config: self.config,
            observer,
        }
    }

    /// The battlefield being read.
    pub fn battlefield(&self) -> &'a B {
        self.battlefield
    }

    /// The active config.
    pub fn config(&self) -> &TraversalConfig {
        &self.config
    }

    /// The active observer.
    pub fn observer(&self) -> &O {
        &self.observer
    }

    // -----------------------------------------------------------------------
    // Full map
    // -----------------------------------------------------------------------

    /// Every coordinate of the battlefield, top-left to bottom-right,
    /// row by row.
    pub fn full_map(&self) -> RangeIter {
        Range::with_size(self.battlefield.width(), self.battlefield.height()).iter()
    }

    /// Visit the whole battlefield in row-major order.
    ///
    /// An empty battlefield (width or height ≤ 0) visits nothing.
    pub fn visit_full_map<V>(&self, visitor: &mut V)
    where
        V: TileVisitor<B::Destructible> + ?Sized,
    {
        for p in self.full_map() {
            self.battlefield.visit(p, visitor);
        }
    }

    // -----------------------------------------------------------------------
    // Rings
    // -----------------------------------------------------------------------

    /// Coordinates around `center`, ring by ring up to `max_radius`.
    ///
    /// See [`ring`](fn@crate::ring) for the order within a ring.
    pub fn adjacent(&self, center: Point, max_radius: i32) -> impl Iterator<Item = Point> + Clone {
        rings(center, max_radius)
    }

    /// Visit the tiles around `center`, starting from the top-left tile of
    /// each ring and proceeding clockwise, one ring per radius from 1 to
    /// `max_radius`.
    ///
    /// Coordinates are not clipped to the battlefield; out-of-range ones are
    /// handed to [`Battlefield::visit`] as-is.
    pub fn visit_adjacent<V>(&self, center: Point, max_radius: i32, visitor: &mut V)
    where
        V: TileVisitor<B::Destructible> + ?Sized,
    {
        for p in rings(center, max_radius) {
            self.battlefield.visit(p, visitor);
        }
    }

    // -----------------------------------------------------------------------
    // Line of sight
    // -----------------------------------------------------------------------

    /// Whether nothing blocks the straight path from `from` to `to`.
    pub fn has_line_of_sight(&self, from: Point, to: Point) -> bool {
        self.sight(from, to).is_clear()
    }

    /// The scan the configured rule runs for this pair, or `None` when the
    /// pair is clear without looking.
    pub fn scan_for(&self, from: Point, to: Point) -> Option<Scan> {
        match (self.config.sight_rule, classify(from, to)) {
            (_, Alignment::Adjacent) => None,
            (SightRule::Compat, Alignment::Diagonal) => Some(Scan::Diagonal),
            (SightRule::Compat, Alignment::Row) => Some(Scan::Row),
            (SightRule::Compat, Alignment::Column) => Some(Scan::Column),
            (SightRule::Compat, Alignment::Unaligned) => None,
            (SightRule::Bresenham, _) => Some(Scan::Line),
        }
    }

    /// Check line of sight and report the first blocking tile.
    pub fn sight(&self, from: Point, to: Point) -> Sight {
        let Some(scan) = self.scan_for(from, to) else {
            return Sight::Clear;
        };
        if self.config.trace_scans {
            self.observer
                .notify(&SightEvent::ScanStarted { scan, from, to });
        }
        match scan.first_blocker(self.battlefield, from, to) {
            Some(at) => {
                self.observer.notify(&SightEvent::Blocked { from, to, at });
                Sight::Blocked { at }
            }
            None => Sight::Clear,
        }
    }
}
