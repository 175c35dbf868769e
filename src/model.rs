use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// Caller-assigned identifier of a graph node, unique within its graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub u64);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Length in meters of a road segment, or a distance accumulated along a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Length(u64);

impl Length {
    pub const ZERO: Self = Self(0);

    /// Sentinel distance of a node no path is known to.
    /// Strictly greater than any achievable route length.
    pub const MAX: Self = Self(u64::MAX);

    pub const fn from_meters(meters: u64) -> Self {
        Self(meters)
    }

    pub const fn meters(&self) -> u64 {
        self.0
    }
}

// Sums of lengths must never wrap past the Length::MAX sentinel.
impl Add for Length {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Length {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sum for Length {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if *self == Self::MAX {
            f.write_str("inf")
        } else {
            self.0.fmt(f)
        }
    }
}
