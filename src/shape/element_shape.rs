use crate::division::split_tables::SplitTables;
use crate::division::split_tetrahedron::TETRAHEDRON_TABLES;
use crate::division::split_triangle::TRIANGLE_TABLES;
use crate::division::DivideError;
use core::fmt;

/// The reference shapes an element can be divided as.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ElementShape {
    /// A 3-noded triangle in the plane.
    Triangle2D3,
    /// A 3-noded triangle embedded in 3D space.
    Triangle3D3,
    /// A 4-noded tetrahedron.
    Tetrahedron3D4,
}

impl ElementShape {
    /// Selects the shape matching the given dimensions and number of nodes.
    ///
    /// Fails with [`DivideError::UnsupportedShape`] if no split table is registered for
    /// this combination.
    pub fn from_dimensions(
        working_space_dimension: usize,
        local_space_dimension: usize,
        n_nodes: usize,
    ) -> Result<Self, DivideError> {
        match (working_space_dimension, local_space_dimension, n_nodes) {
            (2, 2, 3) => Ok(ElementShape::Triangle2D3),
            (3, 2, 3) => Ok(ElementShape::Triangle3D3),
            (3, 3, 4) => Ok(ElementShape::Tetrahedron3D4),
            _ => Err(DivideError::UnsupportedShape {
                working_space_dimension,
                local_space_dimension,
                n_nodes,
            }),
        }
    }

    pub(crate) fn tables(self) -> &'static SplitTables {
        match self {
            ElementShape::Triangle2D3 | ElementShape::Triangle3D3 => &TRIANGLE_TABLES,
            ElementShape::Tetrahedron3D4 => &TETRAHEDRON_TABLES,
        }
    }

    /// The dimension of the space this shape lives in.
    pub fn working_space_dimension(self) -> usize {
        match self {
            ElementShape::Triangle2D3 => 2,
            ElementShape::Triangle3D3 | ElementShape::Tetrahedron3D4 => 3,
        }
    }

    /// The dimension of this shape.
    pub fn local_space_dimension(self) -> usize {
        self.tables().local_dimension
    }

    /// The number of vertices of this shape.
    pub fn n_nodes(self) -> usize {
        self.tables().n_nodes
    }

    /// The number of edges of this shape.
    pub fn n_edges(self) -> usize {
        self.tables().n_edges()
    }

    /// The number of boundary faces of this shape (edges for triangles).
    pub fn n_faces(self) -> usize {
        self.tables().n_faces()
    }

    /// The local vertex indices of the `i`-th edge.
    ///
    /// Returns `None` if `i >= self.n_edges()`.
    pub fn edge(self, i: usize) -> Option<(usize, usize)> {
        self.tables()
            .edges
            .get(i)
            .map(|e| (e[0] as usize, e[1] as usize))
    }

    /// The local vertex indices of the `i`-th boundary face, outward-oriented.
    ///
    /// Returns `None` if `i >= self.n_faces()`.
    pub fn face(self, i: usize) -> Option<&'static [u8]> {
        self.tables().parent_faces.get(i).copied()
    }
}

impl fmt::Display for ElementShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementShape::Triangle2D3 => f.pad("Triangle2D3"),
            ElementShape::Triangle3D3 => f.pad("Triangle3D3"),
            ElementShape::Tetrahedron3D4 => f.pad("Tetrahedron3D4"),
        }
    }
}
