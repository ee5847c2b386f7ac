//! Definition of the indexed point.

use crate::math::{Point, Real};
use core::fmt;

/// A point carrying an integer identity.
///
/// Identities below the number of nodes of the divided element denote original vertices.
/// Larger identities denote points synthesized on a split edge: the point of edge `e` has
/// the identity `n_nodes + e`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct IndexedPoint {
    coords: Point<Real>,
    id: u32,
}

impl IndexedPoint {
    /// Creates a new indexed point.
    #[inline]
    pub fn new(coords: Point<Real>, id: u32) -> Self {
        Self { coords, id }
    }

    /// The coordinates of this point.
    #[inline]
    pub fn coords(&self) -> &Point<Real> {
        &self.coords
    }

    /// The identity of this point.
    #[inline]
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Is this point one of the vertices of an element with `n_nodes` nodes?
    #[inline]
    pub fn is_original(&self, n_nodes: usize) -> bool {
        (self.id as usize) < n_nodes
    }

    /// Is this point synthesized on a split edge of an element with `n_nodes` nodes?
    #[inline]
    pub fn is_intersection(&self, n_nodes: usize) -> bool {
        !self.is_original(n_nodes)
    }
}

impl fmt::Display for IndexedPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "IndexedPoint #{} ({}, {}, {})",
            self.id, self.coords.x, self.coords.y, self.coords.z
        )
    }
}
