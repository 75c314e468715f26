/// Index bounds a network exposes so links into it can be validated.
///
/// Implemented by whatever owns the cells and their segments. A link never
/// holds a reference to its network; bounds are passed in at check time.
pub trait LinkBounds {
    /// Number of addressable destination cells (`columns * cells_per_column`).
    fn total_unit_count(&self) -> u32;

    /// Number of segments currently present on `unit`.
    fn segment_count_for(&self, unit: u32) -> u32;
}

impl<B: LinkBounds + ?Sized> LinkBounds for &B {
    fn total_unit_count(&self) -> u32 {
        (**self).total_unit_count()
    }

    fn segment_count_for(&self, unit: u32) -> u32 {
        (**self).segment_count_for(unit)
    }
}
