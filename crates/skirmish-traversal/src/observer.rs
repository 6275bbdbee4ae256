//! Diagnostics emitted while checking line of sight.
//!
//! The engine never prints. It hands [`SightEvent`]s to a [`SightObserver`];
//! the default [`LogObserver`] forwards them to the `log` facade.

use std::fmt;

use skirmish_core::Point;

use crate::sight::Scan;

/// Something worth reporting during a line-of-sight check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SightEvent {
    /// A scan is about to run, whatever its outcome.
    ScanStarted { scan: Scan, from: Point, to: Point },
    /// The scan from `from` to `to` hit an occupied tile at `at`.
    Blocked { from: Point, to: Point, at: Point },
}

impl fmt::Display for SightEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ScanStarted { scan, from, to } => {
                write!(f, "{scan} scan from {from} toward {to}")
            }
            Self::Blocked { to, .. } => write!(
                f,
                "Obstacle on the way to the target of pos {} {} ! Can't shoot.",
                to.x, to.y
            ),
        }
    }
}

/// Receiver of [`SightEvent`]s.
///
/// Takes `&self` so a single engine can answer queries from shared
/// references. Any `Fn(&SightEvent)` closure is an observer.
pub trait SightObserver {
    fn notify(&self, event: &SightEvent);
}

impl<F: Fn(&SightEvent)> SightObserver for F {
    fn notify(&self, event: &SightEvent) {
        self(event)
    }
}

/// Forwards events to the `log` facade: obstructions at `info`, scans at
/// `debug`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogObserver;

impl SightObserver for LogObserver {
    fn notify(&self, event: &SightEvent) {
        match event {
            SightEvent::Blocked { from, at, .. } => {
                log::info!("{event}");
                log::debug!("sight from {from} stopped at {at}");
            }
            SightEvent::ScanStarted { .. } => log::debug!("{event}"),
        }
    }
}

/// Drops every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullObserver;

impl SightObserver for NullObserver {
    fn notify(&self, _event: &SightEvent) {}
}
