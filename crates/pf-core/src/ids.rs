use core::fmt;
use core::num::NonZeroU32;

/// Compact handle into a registry.
///
/// `NonZero` keeps `Option<Id>` the same size as `Id`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Id(NonZeroU32);

impl Id {
    /// Create an Id from a 0-based index by storing index+1.
    ///
    /// # Panics
    /// If `index == u32::MAX`.
    pub fn from_index(index: u32) -> Self {
        let raw = index.checked_add(1).expect("Id index overflow");
        Self(NonZeroU32::new(raw).expect("index+1 is nonzero"))
    }

    /// Recover the 0-based index.
    pub fn index(self) -> u32 {
        self.0.get() - 1
    }
}

impl fmt::Debug for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.index())
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index())
    }
}

/// Handle of a stream held by a `StreamTable`.
pub type StreamId = Id;
