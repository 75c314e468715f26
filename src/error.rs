use thiserror::Error;

/// Result type for fallible link and topology operations.
pub type Result<T> = std::result::Result<T, LinkError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LinkError {
    #[error("destination cell {unit} out of range (network has {total} cells)")]
    UnitOutOfRange { unit: u32, total: u32 },
    #[error("destination segment {segment} out of range (cell {unit} has {count} segments)")]
    SegmentOutOfRange { unit: u32, segment: u32, count: u32 },
    #[error("cell {cell} of column {column} outside a {columns} x {cells_per_column} layout")]
    CellOutOfLayout { column: u32, cell: u32, columns: u32, cells_per_column: u32 },
    #[error("invalid topology: {0}")]
    InvalidTopology(String),
}
