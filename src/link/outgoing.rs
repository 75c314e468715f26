use super::bounds::LinkBounds;
use super::directed::DirectedLink;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Outgoing links of a single source cell, in insertion order.
///
/// Holds each destination at most once. Not synchronized; the owning network
/// decides how lists are shared between threads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutgoingLinks {
    links: Vec<DirectedLink>,
}

impl OutgoingLinks {
    pub fn new() -> Self {
        Self { links: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            links: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DirectedLink> {
        self.links.iter()
    }

    pub fn as_slice(&self) -> &[DirectedLink] {
        &self.links
    }

    pub fn contains(&self, link: &DirectedLink) -> bool {
        self.links.contains(link)
    }

    /// Looks up a destination without building a temporary link.
    pub fn contains_target(&self, dst_unit: u32, dst_segment: u32) -> bool {
        self.position_of(dst_unit, dst_segment).is_some()
    }

    /// Appends `link` unless an equal link is already present.
    pub fn insert(&mut self, link: DirectedLink) -> bool {
        if self.contains(&link) {
            trace!(?link, "outgoing link already present");
            return false;
        }
        self.links.push(link);
        true
    }

    /// Removes `link` if present.
    pub fn remove(&mut self, link: &DirectedLink) -> bool {
        self.remove_target(link.destination_unit_index(), link.destination_segment_index())
    }

    /// Removes the link going to `dst_segment` on `dst_unit`, if any.
    pub fn remove_target(&mut self, dst_unit: u32, dst_segment: u32) -> bool {
        match self.position_of(dst_unit, dst_segment) {
            Some(pos) => {
                // Order matters to callers iterating in insertion order.
                self.links.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Drops every link that is out of range for `bounds`.
    ///
    /// Returns the number of links removed.
    pub fn retain_valid<B: LinkBounds + ?Sized>(&mut self, bounds: &B) -> usize {
        let before = self.links.len();
        self.links.retain(|link| link.is_valid(bounds));
        let removed = before - self.links.len();

        if removed > 0 {
            debug!(removed, remaining = self.links.len(), "dropped out-of-range outgoing links");
        }
        removed
    }

    pub fn clear(&mut self) {
        self.links.clear();
    }

    fn position_of(&self, dst_unit: u32, dst_segment: u32) -> Option<usize> {
        self.links
            .iter()
            .position(|link| link.points_to(dst_unit, dst_segment))
    }
}

impl<'a> IntoIterator for &'a OutgoingLinks {
    type Item = &'a DirectedLink;
    type IntoIter = std::slice::Iter<'a, DirectedLink>;

    fn into_iter(self) -> Self::IntoIter {
        self.links.iter()
    }
}

impl FromIterator<DirectedLink> for OutgoingLinks {
    fn from_iter<I: IntoIterator<Item = DirectedLink>>(iter: I) -> Self {
        let mut list = OutgoingLinks::new();
        for link in iter {
            list.insert(link);
        }
        list
    }
}
