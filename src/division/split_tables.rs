use core::slice::ChunksExact;

/// The constant data describing how one reference shape is split.
///
/// Local point identities follow a single convention: the original vertices are
/// `0..n_nodes` and the point synthesized on edge `e` is `n_nodes + e`.
pub(crate) struct SplitTables {
    /// The number of vertices of the shape, which is also the number of points of each
    /// of its subdivisions.
    pub n_nodes: usize,
    /// The dimension of the shape.
    pub local_dimension: usize,
    /// The vertices of each edge.
    pub edges: &'static [[u8; 2]],
    /// The local faces of one subdivision, outward for a positively oriented subdivision.
    ///
    /// These are edges for triangles and triangles for tetrahedra.
    pub sub_faces: &'static [&'static [u8]],
    /// The subdivisions of each split-edge bitmask, flattened with a stride of `n_nodes`.
    pub patterns: &'static [Option<&'static [u8]>],
    /// The vertices of each parent face.
    pub parent_faces: &'static [&'static [u8]],
    /// The parent face a subdivision face lies on, if any.
    pub exterior_face_parent: fn(&[u32]) -> Option<usize>,
}

impl SplitTables {
    #[inline]
    pub fn n_edges(&self) -> usize {
        self.edges.len()
    }

    #[inline]
    pub fn n_faces(&self) -> usize {
        self.parent_faces.len()
    }

    /// The subdivisions for the given split-edge bitmask.
    ///
    /// Returns `None` if no sign distribution can produce this bitmask.
    pub fn pattern(&self, mask: u32) -> Option<ChunksExact<'static, u8>> {
        self.patterns
            .get(mask as usize)
            .copied()
            .flatten()
            .map(|flat| flat.chunks_exact(self.n_nodes))
    }
}
