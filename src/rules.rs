//! Rules module for the toroidal Life simulation
//!
//! This module contains the birth/survival rule definitions, rule-string parsing,
//! named presets and the stampable patterns used to seed a grid.
pub mod patterns;
pub mod presets;

pub use patterns::Pattern;
pub use presets::{RuleFamily, RulePreset, PRESETS};

use crate::error::RuleParseError;
use std::fmt;
use std::str::FromStr;

/// Highest possible live-neighbor count in a Moore neighborhood.
pub const MAX_NEIGHBORS: u8 = 8;

/// A set of live-neighbor counts in `0..=8`, stored as a bitmask.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NeighborSet(u16);

impl NeighborSet {
    pub const EMPTY: Self = Self(0);

    /// Build a set from a list of counts. Counts above 8 are ignored.
    pub const fn from_counts(counts: &[u8]) -> Self {
        let mut bits = 0u16;
        let mut i = 0;
        while i < counts.len() {
            if counts[i] <= MAX_NEIGHBORS {
                bits |= 1 << counts[i];
            }
            i += 1;
        }
        Self(bits)
    }

    pub fn contains(self, count: u8) -> bool {
        count <= MAX_NEIGHBORS && self.0 & (1 << count) != 0
    }

    pub fn insert(&mut self, count: u8) {
        if count <= MAX_NEIGHBORS {
            self.0 |= 1 << count;
        }
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Counts in ascending order.
    pub fn iter(self) -> impl Iterator<Item = u8> {
        (0..=MAX_NEIGHBORS).filter(move |&n| self.contains(n))
    }
}

impl fmt::Display for NeighborSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for n in self.iter() {
            write!(f, "{n}")?;
        }
        Ok(())
    }
}

/// Life-like rules:
/// 1. A dead cell becomes alive when its live-neighbor count is in `birth`
/// 2. A live cell stays alive when its live-neighbor count is in `survival`
/// 3. Every other cell is dead in the next generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameRules {
    /// Neighbor counts for a dead cell to become alive
    pub birth: NeighborSet,
    /// Neighbor counts for a live cell to survive
    pub survival: NeighborSet,
}

impl Default for GameRules {
    fn default() -> Self {
        // Classic Conway's Game of Life rules
        Self::conway()
    }
}

impl GameRules {
    /// Create a new rule set from birth and survival counts
    pub const fn new(birth: &[u8], survival: &[u8]) -> Self {
        Self {
            birth: NeighborSet::from_counts(birth),
            survival: NeighborSet::from_counts(survival),
        }
    }

    /// Conway's classic Game of Life (B3/S23)
    pub const fn conway() -> Self {
        Self::new(&[3], &[2, 3])
    }

    /// HighLife variant (B36/S23) - has a self-replicating pattern
    pub const fn high_life() -> Self {
        Self::new(&[3, 6], &[2, 3])
    }

    /// Day & Night variant (B3678/S34678)
    pub const fn day_and_night() -> Self {
        Self::new(&[3, 6, 7, 8], &[3, 4, 6, 7, 8])
    }

    /// Next liveness of a cell given its current state and live-neighbor count.
    pub fn next_state(&self, alive: bool, live_neighbors: u8) -> bool {
        if alive {
            self.survival.contains(live_neighbors)
        } else {
            self.birth.contains(live_neighbors)
        }
    }

    /// Resolve either a `B…/S…` rule string or a preset name.
    pub fn lookup(input: &str) -> Result<Self, RuleParseError> {
        if let Some(preset) = RulePreset::by_name(input) {
            return Ok(preset.rules);
        }
        input.parse().map_err(|e| {
            if input.contains('/') {
                e
            } else {
                RuleParseError::UnknownPreset(input.trim().to_string())
            }
        })
    }
}

impl fmt::Display for GameRules {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "B{}/S{}", self.birth, self.survival)
    }
}

impl FromStr for GameRules {
    type Err = RuleParseError;

    /// Parses `B3/S23`, `b36/s23` or `S23/B3`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(RuleParseError::Empty);
        }

        let mut birth = None;
        let mut survival = None;
        for part in s.split('/') {
            let mut chars = part.trim().chars();
            let slot = match chars.next().map(|c| c.to_ascii_uppercase()) {
                Some('B') => &mut birth,
                Some('S') => &mut survival,
                _ => return Err(RuleParseError::MissingPart(s.to_string())),
            };
            if slot.is_some() {
                return Err(RuleParseError::MissingPart(s.to_string()));
            }
            let mut set = NeighborSet::EMPTY;
            for c in chars {
                match c.to_digit(10) {
                    Some(n) if n <= u32::from(MAX_NEIGHBORS) => set.insert(n as u8),
                    _ => return Err(RuleParseError::InvalidCount(c)),
                }
            }
            *slot = Some(set);
        }

        match (birth, survival) {
            (Some(birth), Some(survival)) => Ok(Self { birth, survival }),
            _ => Err(RuleParseError::MissingPart(s.to_string())),
        }
    }
}
