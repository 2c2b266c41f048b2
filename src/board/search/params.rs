#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Opponent strength, 1 (weakest) to 4 (strongest).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Difficulty(u8);

impl Difficulty {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 4;

    /// Clamp any integer into 1..=4
    #[must_use]
    pub fn new(level: i64) -> Self {
        Difficulty(level.clamp(i64::from(Self::MIN), i64::from(Self::MAX)) as u8)
    }

    #[inline]
    #[must_use]
    pub const fn level(self) -> u8 {
        self.0
    }

    /// Search depth in plies: 3, 4, 5, 6 for levels 1-4
    #[inline]
    #[must_use]
    pub const fn depth(self) -> u32 {
        self.0 as u32 + 2
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Difficulty(Self::MAX)
    }
}

impl From<u8> for Difficulty {
    fn from(level: u8) -> Self {
        Difficulty::new(i64::from(level))
    }
}
