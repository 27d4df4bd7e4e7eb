//! State flags shared by points and shapes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{BitOr, BitOrAssign};

/// Bit set of point/shape states.
///
/// `LOCKED` makes a point or shape immune to transforms. `CONNECTOR` marks a
/// point that is shared with other shapes and must only move with its owner.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateFlags(u8);

impl StateFlags {
    pub const NONE: Self = Self(0);
    pub const VISIBLE: Self = Self(1);
    pub const LOCKED: Self = Self(1 << 1);
    pub const CONNECTOR: Self = Self(1 << 2);
    pub const INPUT: Self = Self(1 << 3);
    pub const OUTPUT: Self = Self(1 << 4);
    pub const STANDALONE: Self = Self(1 << 5);

    /// Default state for newly created points and shapes.
    pub const DEFAULT: Self = Self(Self::VISIBLE.0 | Self::STANDALONE.0);

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    pub fn insert(&mut self, other: Self) {
        self.0 |= other.0;
    }

    pub fn remove(&mut self, other: Self) {
        self.0 &= !other.0;
    }

    pub fn set(&mut self, other: Self, value: bool) {
        if value {
            self.insert(other);
        } else {
            self.remove(other);
        }
    }

    pub const fn is_locked(self) -> bool {
        self.contains(Self::LOCKED)
    }

    pub const fn is_connector(self) -> bool {
        self.contains(Self::CONNECTOR)
    }
}

impl BitOr for StateFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for StateFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl fmt::Debug for StateFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const NAMES: [(StateFlags, &str); 6] = [
            (StateFlags::VISIBLE, "VISIBLE"),
            (StateFlags::LOCKED, "LOCKED"),
            (StateFlags::CONNECTOR, "CONNECTOR"),
            (StateFlags::INPUT, "INPUT"),
            (StateFlags::OUTPUT, "OUTPUT"),
            (StateFlags::STANDALONE, "STANDALONE"),
        ];
        let names: Vec<&str> = NAMES
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, name)| *name)
            .collect();
        if names.is_empty() {
            write!(f, "StateFlags(NONE)")
        } else {
            write!(f, "StateFlags({})", names.join(" | "))
        }
    }
}
