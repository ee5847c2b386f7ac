use arrayvec::ArrayVec;

/// A simplex built on the points of an [`IndexedPointSet`](crate::shape::IndexedPointSet).
///
/// Only the identities are stored: 3 of them for a sub-triangle, 4 for a sub-tetrahedron,
/// 2 for an interface segment and 3 for an interface triangle.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SubGeometry {
    ids: ArrayVec<u32, 4>,
}

impl SubGeometry {
    /// The maximum number of points of a sub-geometry.
    pub const MAX_POINTS: usize = 4;

    /// Builds a sub-geometry from point identities.
    ///
    /// # Panics
    /// Panics if more than [`Self::MAX_POINTS`] identities are given.
    pub fn from_ids(ids: &[u32]) -> Self {
        Self {
            ids: ids.iter().copied().collect(),
        }
    }

    pub(crate) fn from_local(ids: impl IntoIterator<Item = u32>) -> Self {
        Self {
            ids: ids.into_iter().collect(),
        }
    }

    /// The point identities of this sub-geometry.
    #[inline]
    pub fn ids(&self) -> &[u32] {
        &self.ids
    }

    /// The number of points of this sub-geometry.
    #[inline]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns `true` if this sub-geometry has no point.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Are all the points of this sub-geometry synthesized on split edges?
    ///
    /// Such a sub-geometry lies on the interface.
    pub fn is_interface(&self, n_nodes: usize) -> bool {
        !self.ids.is_empty() && self.ids.iter().all(|id| *id as usize >= n_nodes)
    }

    /// The identities of the original element vertices used by this sub-geometry.
    pub fn originals(&self, n_nodes: usize) -> impl Iterator<Item = u32> + '_ {
        self.ids
            .iter()
            .copied()
            .filter(move |id| (*id as usize) < n_nodes)
    }
}

impl From<[u32; 2]> for SubGeometry {
    fn from(ids: [u32; 2]) -> Self {
        Self::from_ids(&ids)
    }
}

impl From<[u32; 3]> for SubGeometry {
    fn from(ids: [u32; 3]) -> Self {
        Self::from_ids(&ids)
    }
}

impl From<[u32; 4]> for SubGeometry {
    fn from(ids: [u32; 4]) -> Self {
        Self::from_ids(&ids)
    }
}
