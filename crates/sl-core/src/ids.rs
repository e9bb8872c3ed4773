use core::fmt;
use core::num::NonZeroU32;

/// Compact, stable identifier for a vertex of a star graph.
///
/// - `u32` keeps memory small
/// - `NonZero` enables `Option<VertexId>` to be pointer-optimized
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VertexId(NonZeroU32);

impl VertexId {
    /// Identifier of the center vertex (always allocated first).
    pub const CENTER: VertexId = VertexId(NonZeroU32::MIN);

    /// Create an id from a 0-based index by storing index+1.
    ///
    /// `u32::MAX` saturates; graph sizes are bounded well below that by
    /// [`crate::StarParams`].
    pub fn from_index(index: u32) -> Self {
        Self(NonZeroU32::MIN.saturating_add(index))
    }

    /// Recover the 0-based index.
    pub fn index(self) -> u32 {
        self.0.get() - 1
    }

    /// The 0-based index as a `usize`, for slice addressing.
    pub fn slot(self) -> usize {
        self.index() as usize
    }
}

impl fmt::Debug for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.index())
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index())
    }
}

/// Positive vertex label.
pub type Label = u32;

/// Edge weight derived from two endpoint labels.
pub type Weight = u32;
