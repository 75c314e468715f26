//! Outgoing-connection addressing for a cortical network.
//!
//! A [`DirectedLink`] names one destination cell and one segment on that cell.
//! Links are plain `Copy` values; the network that owns cells and segments is
//! reached only through the [`LinkBounds`] trait when a link is validated.

pub mod error;
pub mod link;
pub mod topology;

pub use error::{LinkError, Result};
pub use link::{DirectedLink, LinkBounds, OutgoingLinks, UNASSIGNED};
pub use topology::{CellTopology, TopologyConfig, MAX_CELLS};
