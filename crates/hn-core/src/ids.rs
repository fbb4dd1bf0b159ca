use core::fmt;
use core::num::NonZeroU32;
use core::str::FromStr;

use crate::HnError;

/// Compact, stable identifier for graph nodes.
///
/// - `u32` keeps memory small
/// - `NonZero` enables `Option<NodeId>` to be pointer-optimized
///
/// Displayed as its 0-based index, which is also the string form used in
/// network snapshots.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(NonZeroU32);

impl NodeId {
    /// Create an id from a 0-based index by storing index+1.
    pub fn from_index(index: u32) -> Self {
        Self(NonZeroU32::MIN.saturating_add(index))
    }

    /// Recover the 0-based index.
    pub fn index(self) -> u32 {
        self.0.get() - 1
    }

    /// The index as a `usize`, for slicing per-node buffers.
    pub fn slot(self) -> usize {
        self.index() as usize
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.index())
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index())
    }
}

impl FromStr for NodeId {
    type Err = HnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let index: u32 = s
            .trim()
            .parse()
            .map_err(|_| HnError::invalid_arg(format!("not a node id: {s:?}")))?;
        if index == u32::MAX {
            return Err(HnError::invalid_arg(format!("node id out of range: {s}")));
        }
        Ok(Self::from_index(index))
    }
}
