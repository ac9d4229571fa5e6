//! Pieces, piece sizes, and per-player inventories.
//!
//! Every player owns one doll of each size 1..=5. Sizes are validated at
//! construction so the rest of the engine never sees an out-of-range size.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use thiserror::Error;

use super::player::PlayerId;

/// A raw size value outside 1..=5.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
#[error("piece size must be in {min}..={max}, got {0}", min = Size::MIN, max = Size::MAX)]
pub struct InvalidSize(pub u8);

/// A piece size in 1..=5. Larger pieces cover strictly smaller ones.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Size(u8);

impl Size {
    /// Smallest piece size.
    pub const MIN: u8 = 1;
    /// Largest piece size.
    pub const MAX: u8 = 5;
    /// Number of distinct sizes (and pieces per player).
    pub const COUNT: usize = (Self::MAX - Self::MIN + 1) as usize;

    /// Create a size, or `None` if `value` is outside 1..=5.
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value >= Self::MIN && value <= Self::MAX {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Get the raw size value.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Check whether a piece of this size may be placed over `other`.
    #[must_use]
    pub const fn covers(self, other: Size) -> bool {
        self.0 > other.0
    }

    /// Iterate over all sizes, smallest first.
    pub fn all() -> impl Iterator<Item = Size> {
        (Self::MIN..=Self::MAX).map(Size)
    }
}

impl TryFrom<u8> for Size {
    type Error = InvalidSize;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Size::new(value).ok_or(InvalidSize(value))
    }
}

impl From<Size> for u8 {
    fn from(size: Size) -> u8 {
        size.0
    }
}

impl std::fmt::Display for Size {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A placed doll: who owns it and how big it is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub owner: PlayerId,
    pub size: Size,
}

impl Piece {
    #[must_use]
    pub const fn new(owner: PlayerId, size: Size) -> Self {
        Self { owner, size }
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tag = match self.owner {
            PlayerId::P1 => 'A',
            PlayerId::P2 => 'B',
        };
        write!(f, "{}{}", tag, self.size)
    }
}

/// The sizes a player has not placed yet.
///
/// Stored as a bitmask (bit `n` set means size `n` is still in hand), so
/// membership, removal and copying are all O(1).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Inventory {
    bits: u8,
}

impl Inventory {
    const FULL_MASK: u8 = 0b0011_1110;

    /// An inventory holding every size.
    #[must_use]
    pub const fn full() -> Self {
        Self { bits: Self::FULL_MASK }
    }

    /// An inventory with nothing left.
    #[must_use]
    pub const fn empty() -> Self {
        Self { bits: 0 }
    }

    #[must_use]
    pub const fn contains(self, size: Size) -> bool {
        self.bits & (1 << size.0) != 0
    }

    /// Add a size back. Only used when rebuilding an inventory from stored data.
    pub fn insert(&mut self, size: Size) -> bool {
        let had = self.contains(size);
        self.bits |= 1 << size.0;
        !had
    }

    /// Remove a size, returning whether it was present.
    pub fn remove(&mut self, size: Size) -> bool {
        let had = self.contains(size);
        self.bits &= !(1 << size.0);
        had
    }

    /// Number of sizes left.
    #[must_use]
    pub const fn len(self) -> usize {
        self.bits.count_ones() as usize
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Iterate over remaining sizes, smallest first.
    pub fn iter(self) -> impl Iterator<Item = Size> {
        Size::all().filter(move |&s| self.contains(s))
    }

    /// Remaining sizes as a small inline list, smallest first.
    #[must_use]
    pub fn sizes(self) -> SmallVec<[Size; Size::COUNT]> {
        self.iter().collect()
    }
}

impl Default for Inventory {
    fn default() -> Self {
        Self::full()
    }
}

impl FromIterator<Size> for Inventory {
    fn from_iter<I: IntoIterator<Item = Size>>(iter: I) -> Self {
        let mut inv = Inventory::empty();
        for size in iter {
            inv.insert(size);
        }
        inv
    }
}
