//! Column/cell layout and per-cell segment counts backing link validation.

use crate::error::{LinkError, Result};
use crate::link::LinkBounds;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Largest cell count a topology may hold; each cell keeps one `u32` segment count.
pub const MAX_CELLS: u32 = 1 << 24;

/// Configuration for a cell topology
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TopologyConfig {
    /// Number of columns in the layer
    pub columns: u32,
    /// Cells stacked in each column
    pub cells_per_column: u32,
    /// Upper bound on segments grown on a single cell
    pub max_segments_per_cell: u32,
}

impl Default for TopologyConfig {
    fn default() -> Self {
        Self {
            columns: 2048,
            cells_per_column: 32,
            max_segments_per_cell: 128,
        }
    }
}

impl TopologyConfig {
    /// Total cell count, or an error when the layout is empty or overflows.
    pub fn total_cells(&self) -> Result<u32> {
        if self.columns == 0 || self.cells_per_column == 0 {
            return Err(LinkError::InvalidTopology(format!(
                "{} columns x {} cells per column has no cells",
                self.columns, self.cells_per_column
            )));
        }

        // Bounded well below UNASSIGNED, so no cell index reaches the sentinel.
        match self.columns.checked_mul(self.cells_per_column) {
            Some(total) if total <= MAX_CELLS => Ok(total),
            _ => Err(LinkError::InvalidTopology(format!(
                "{} columns x {} cells per column exceeds {} cells",
                self.columns, self.cells_per_column, MAX_CELLS
            ))),
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.total_cells()?;
        if self.max_segments_per_cell == 0 || self.max_segments_per_cell == u32::MAX {
            return Err(LinkError::InvalidTopology(format!(
                "max_segments_per_cell must be in 1..{}, got {}",
                u32::MAX,
                self.max_segments_per_cell
            )));
        }
        Ok(())
    }
}

/// Cells laid out as `columns * cells_per_column`, each with a segment count.
///
/// Cell `c` in column `col` has index `col * cells_per_column + c`.
#[derive(Debug, Clone)]
pub struct CellTopology {
    config: TopologyConfig,
    segment_counts: Vec<u32>,
}

impl CellTopology {
    /// Builds a topology where every cell starts with no segments.
    ///
    /// Allocates one `u32` per cell, at most [`MAX_CELLS`].
    pub fn new(config: TopologyConfig) -> Result<Self> {
        config.validate()?;
        let total = config.total_cells()?;

        debug!(
            columns = config.columns,
            cells_per_column = config.cells_per_column,
            total_cells = total,
            "Created cell topology"
        );

        Ok(Self {
            segment_counts: vec![0; total as usize],
            config,
        })
    }

    pub fn config(&self) -> &TopologyConfig {
        &self.config
    }

    /// Index of cell `cell` within column `column`.
    pub fn cell_index(&self, column: u32, cell: u32) -> Result<u32> {
        if column >= self.config.columns || cell >= self.config.cells_per_column {
            return Err(LinkError::CellOutOfLayout {
                column,
                cell,
                columns: self.config.columns,
                cells_per_column: self.config.cells_per_column,
            });
        }
        Ok(column * self.config.cells_per_column + cell)
    }

    /// Grows one segment on `unit` and returns its index.
    pub fn add_segment(&mut self, unit: u32) -> Result<u32> {
        let max = self.config.max_segments_per_cell;
        let total = self.total_unit_count();
        let count = self
            .segment_counts
            .get_mut(unit as usize)
            .ok_or(LinkError::UnitOutOfRange { unit, total })?;

        if *count >= max {
            warn!(unit, max, "cell is at its segment limit");
            return Err(LinkError::SegmentOutOfRange {
                unit,
                segment: *count,
                count: max,
            });
        }

        let segment = *count;
        *count += 1;
        Ok(segment)
    }

    /// Sets the segment count of `unit`, e.g. after the network prunes segments.
    pub fn set_segment_count(&mut self, unit: u32, count: u32) -> Result<()> {
        let max = self.config.max_segments_per_cell;
        if count > max {
            return Err(LinkError::SegmentOutOfRange {
                unit,
                segment: count,
                count: max,
            });
        }

        let total = self.total_unit_count();
        let slot = self
            .segment_counts
            .get_mut(unit as usize)
            .ok_or(LinkError::UnitOutOfRange { unit, total })?;
        *slot = count;
        Ok(())
    }
}

impl LinkBounds for CellTopology {
    fn total_unit_count(&self) -> u32 {
        self.segment_counts.len() as u32
    }

    fn segment_count_for(&self, unit: u32) -> u32 {
        self.segment_counts.get(unit as usize).copied().unwrap_or(0)
    }
}
