use super::bounds::LinkBounds;
use crate::error::{LinkError, Result};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Index value marking a field of a [`DirectedLink`] as unassigned.
///
/// Networks are sized far below `u32::MAX` cells or segments per cell, so an
/// assigned index never equals this value.
pub const UNASSIGNED: u32 = u32::MAX;

/// One outgoing connection: a destination cell and a segment on that cell.
///
/// The indices are lookup keys into network-owned storage. Nothing is checked
/// at construction; use [`DirectedLink::is_valid`] or [`DirectedLink::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DirectedLink {
    dst_unit: u32,    // cell index in [0, columns * cells_per_column)
    dst_segment: u32, // segment index on dst_unit
}

impl Default for DirectedLink {
    fn default() -> Self {
        Self {
            dst_unit: UNASSIGNED,
            dst_segment: UNASSIGNED,
        }
    }
}

impl DirectedLink {
    /// Creates a link to `dst_segment` on `dst_unit`. No range check.
    pub fn new(dst_unit: u32, dst_segment: u32) -> Self {
        Self {
            dst_unit,
            dst_segment,
        }
    }

    // Getters
    pub fn destination_unit_index(&self) -> u32 { self.dst_unit }
    pub fn destination_segment_index(&self) -> u32 { self.dst_segment }

    /// True when both fields still hold [`UNASSIGNED`].
    pub fn is_unassigned(&self) -> bool {
        self.dst_unit == UNASSIGNED && self.dst_segment == UNASSIGNED
    }

    /// Checks whether this link goes to the given cell and segment.
    pub fn points_to(&self, dst_unit: u32, dst_segment: u32) -> bool {
        self.dst_unit == dst_unit && self.dst_segment == dst_segment
    }

    /// Field-wise equality, same as `==`.
    pub fn equals(&self, other: &DirectedLink) -> bool {
        self.points_to(other.dst_unit, other.dst_segment)
    }

    /// Checks that both indices are in range for `bounds`.
    ///
    /// Out-of-range indices yield `false`, never a panic. The segment bound is
    /// only consulted once the cell index is known to be in range.
    pub fn is_valid<B: LinkBounds + ?Sized>(&self, bounds: &B) -> bool {
        self.dst_unit < bounds.total_unit_count()
            && self.dst_segment < bounds.segment_count_for(self.dst_unit)
    }

    /// Unchecked validity for call sites with no network at hand.
    ///
    /// Performs no check and always returns `true`. The link is only as valid
    /// as whoever built it made it.
    pub fn is_valid_unchecked(&self) -> bool {
        true
    }

    /// Like [`is_valid`](Self::is_valid), but reports which bound was exceeded.
    pub fn validate<B: LinkBounds + ?Sized>(&self, bounds: &B) -> Result<()> {
        let total = bounds.total_unit_count();
        if self.dst_unit >= total {
            trace!(unit = self.dst_unit, total, "link destination cell out of range");
            return Err(LinkError::UnitOutOfRange {
                unit: self.dst_unit,
                total,
            });
        }

        let count = bounds.segment_count_for(self.dst_unit);
        if self.dst_segment >= count {
            trace!(
                unit = self.dst_unit,
                segment = self.dst_segment,
                count,
                "link destination segment out of range"
            );
            return Err(LinkError::SegmentOutOfRange {
                unit: self.dst_unit,
                segment: self.dst_segment,
                count,
            });
        }

        Ok(())
    }
}
