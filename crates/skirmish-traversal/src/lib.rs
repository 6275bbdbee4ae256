//! Tile traversal orders and line-of-sight checks for grid battlefields.
//!
//! Everything runs through [`BattlefieldTraversal`], which borrows any
//! [`skirmish_core::Battlefield`] and answers three independent queries:
//!
//! - **Full-map scan** ([`BattlefieldTraversal::visit_full_map`]): row-major,
//!   top-left to bottom-right.
//! - **Rings** ([`BattlefieldTraversal::visit_adjacent`]): clockwise square
//!   rings of growing radius around a center.
//! - **Line of sight** ([`BattlefieldTraversal::has_line_of_sight`]): whether
//!   an occupied tile sits between two positions, under a configurable
//!   [`SightRule`].
//!
//! Obstructions are reported to a [`SightObserver`] rather than printed.
//! The default [`LogObserver`] writes through the `log` facade.
//!
//! # Sight rules
//!
//! | Pair | [`SightRule::Compat`] | [`SightRule::Bresenham`] |
//! |---|---|---|
//! | Chebyshev distance ≤ 1 | clear | clear |
//! | Diagonal | bounding rectangle, source side | line, endpoints excluded |
//! | Row / column | segment, source included | line, endpoints excluded |
//! | Anything else | clear | line, endpoints excluded |

mod config;
mod distance;
mod line;
mod observer;
mod ring;
mod sight;
mod traversal;

pub use config::{SightRule, TraversalConfig};
pub use distance::chebyshev;
pub use line::{Line, line};
pub use observer::{LogObserver, NullObserver, SightEvent, SightObserver};
pub use ring::{ring, rings};
pub use sight::{Alignment, Scan, Sight, classify};
pub use traversal::BattlefieldTraversal;
