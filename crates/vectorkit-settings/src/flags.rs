//! Mode and target flag sets for the snap filters.
//!
//! Each set is a small bit field so modes can be combined (`Point | Middle`)
//! and stored in configuration files as a plain integer.

use serde::{Deserialize, Serialize};
use std::ops::{BitOr, BitOrAssign};

macro_rules! snap_flags {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $( $(#[$flag_meta:meta])* const $flag:ident = $value:expr; )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(u8);

        impl $name {
            pub const NONE: Self = Self(0);
            $( $(#[$flag_meta])* pub const $flag: Self = Self($value); )*

            pub const fn bits(self) -> u8 {
                self.0
            }

            pub const fn from_bits(bits: u8) -> Self {
                Self(bits)
            }

            pub const fn contains(self, other: Self) -> bool {
                other.0 != 0 && self.0 & other.0 == other.0
            }

            pub const fn is_empty(self) -> bool {
                self.0 == 0
            }
        }

        impl BitOr for $name {
            type Output = Self;

            fn bitor(self, rhs: Self) -> Self {
                Self(self.0 | rhs.0)
            }
        }

        impl BitOrAssign for $name {
            fn bitor_assign(&mut self, rhs: Self) {
                self.0 |= rhs.0;
            }
        }
    };
}

snap_flags! {
    /// Axes the grid filter rounds.
    pub struct GridSnapMode {
        /// Round `x` to the horizontal grid size.
        const HORIZONTAL = 1;
        /// Round `y` to the vertical grid size.
        const VERTICAL = 1 << 1;
    }
}

snap_flags! {
    /// Strategies the line filter tries, in priority order.
    pub struct LineSnapMode {
        /// Line endpoints.
        const POINT = 1;
        /// Line midpoints.
        const MIDDLE = 1 << 1;
        /// Intersections of two candidate lines.
        const INTERSECTION = 1 << 2;
        /// Lock `y` to an endpoint's `y`.
        const HORIZONTAL = 1 << 3;
        /// Lock `x` to an endpoint's `x`.
        const VERTICAL = 1 << 4;
        /// Closest point on a candidate segment.
        const NEAREST = 1 << 5;
    }
}

snap_flags! {
    /// Which line sets the line filter considers.
    pub struct LineSnapTarget {
        /// The container's guide lines.
        const GUIDES = 1;
        /// Line shapes on the drawing.
        const SHAPES = 1 << 1;
    }
}

impl GridSnapMode {
    pub const ALL: Self = Self(Self::HORIZONTAL.0 | Self::VERTICAL.0);
}

impl LineSnapMode {
    pub const ALL: Self = Self(
        Self::POINT.0
            | Self::MIDDLE.0
            | Self::INTERSECTION.0
            | Self::HORIZONTAL.0
            | Self::VERTICAL.0
            | Self::NEAREST.0,
    );
}

impl LineSnapTarget {
    pub const ALL: Self = Self(Self::GUIDES.0 | Self::SHAPES.0);
}
