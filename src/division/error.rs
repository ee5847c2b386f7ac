use arrayvec::ArrayVec;

/// Why an operation could not run on the current state of a
/// [`DivideGeometry`](crate::division::DivideGeometry).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PreconditionViolation {
    /// The operation needs the subdivisions, but `generate_division` was not called yet.
    NotDivided,
    /// The operation needs the interface pieces, but `generate_intersections_skin` was not
    /// called since the last division.
    NotSkinned,
    /// The operation only makes sense on an element cut by the interface.
    NotSplit,
    /// The requested parent face does not exist on the divided element.
    FatherFaceOutOfRange {
        /// The requested parent face.
        face: usize,
        /// The number of faces of the divided element.
        n_faces: usize,
    },
}

impl core::fmt::Display for PreconditionViolation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::NotDivided => f.pad("the division was not generated yet"),
            Self::NotSkinned => f.pad("the interface skin was not generated yet"),
            Self::NotSplit => f.pad("the element is not split by the interface"),
            Self::FatherFaceOutOfRange { face, n_faces } => write!(
                f,
                "father face {face} out of range (the element has {n_faces} faces)"
            ),
        }
    }
}

/// Errors that can occur while dividing an element.
///
/// None of them is recoverable by retrying: the division is deterministic, so the same
/// input always leads to the same error. The caller decides whether to skip the element
/// or abort.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DivideError {
    /// An operation was called in the wrong state, or with an invalid argument.
    #[error("precondition failed: {0}")]
    Precondition(PreconditionViolation),

    /// A subdivision mixes vertices with strictly positive and strictly negative distances,
    /// or is otherwise malformed.
    ///
    /// This signals a mismatch between a split pattern and the edge bitmask it was picked
    /// for, not a problem with the input.
    #[error("invalid split geometry {ids:?}: {reason}")]
    InvalidSplitGeometry {
        /// The point identities of the faulty sub-geometry.
        ids: ArrayVec<u32, 4>,
        /// What is wrong with it.
        reason: &'static str,
    },

    /// No split table is registered for this combination of dimensions and node count.
    #[error(
        "no split table for working space dimension {working_space_dimension}, \
         local space dimension {local_space_dimension} and {n_nodes} nodes"
    )]
    UnsupportedShape {
        /// The dimension of the space the element lives in.
        working_space_dimension: usize,
        /// The dimension of the element itself.
        local_space_dimension: usize,
        /// The number of nodes of the element.
        n_nodes: usize,
    },

    /// The geometry or the distances do not have one entry per node.
    #[error(
        "expected {expected} nodes, got {geometry} vertices and {distances} nodal distances"
    )]
    InputSizeMismatch {
        /// The number of nodes of the element shape.
        expected: usize,
        /// The number of vertices given.
        geometry: usize,
        /// The number of distances given.
        distances: usize,
    },

    /// The split-edge bitmask has no entry in the split table of the shape.
    #[error("no split pattern for the split-edge mask {mask:#b}")]
    UnknownSplitPattern {
        /// The split-edge bitmask.
        mask: u32,
    },
}

impl From<PreconditionViolation> for DivideError {
    fn from(value: PreconditionViolation) -> Self {
        DivideError::Precondition(value)
    }
}
