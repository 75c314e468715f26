//! Directed links between cells and the per-cell lists that hold them.

pub mod bounds;
pub mod directed;
pub mod outgoing;

pub use bounds::LinkBounds;
pub use directed::{DirectedLink, UNASSIGNED};
pub use outgoing::OutgoingLinks;
