//! Engine configuration.

/// Which obstruction test [`sight`](crate::BattlefieldTraversal::sight) applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SightRule {
    /// Axis-aligned and diagonal scans only.
    ///
    /// Diagonals scan the whole bounding rectangle, rows and columns scan the
    /// straight segment. Scans include the source tile and stop before the
    /// target. Pairs that are neither aligned nor diagonal are always clear.
    #[default]
    Compat,
    /// Walk the Bresenham line for every pair and test the tiles strictly
    /// between source and target.
    Bresenham,
}

/// Settings for a [`BattlefieldTraversal`](crate::BattlefieldTraversal).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TraversalConfig {
    /// Obstruction test used for line of sight.
    pub sight_rule: SightRule,
    /// Report a [`ScanStarted`](crate::SightEvent::ScanStarted) event for
    /// every scan, whatever its outcome.
    pub trace_scans: bool,
}

impl Default for TraversalConfig {
    fn default() -> Self {
        Self {
            sight_rule: SightRule::Compat,
            trace_scans: true,
        }
    }
}

impl TraversalConfig {
    /// Set the sight rule (builder).
    pub const fn with_sight_rule(mut self, sight_rule: SightRule) -> Self {
        self.sight_rule = sight_rule;
        self
    }

    /// Enable or disable scan tracing (builder).
    pub const fn with_trace_scans(mut self, trace_scans: bool) -> Self {
        self.trace_scans = trace_scans;
        self
    }
}
