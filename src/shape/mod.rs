//! Geometric entities manipulated while dividing an element.

pub use self::element_shape::ElementShape;
pub use self::indexed_point::IndexedPoint;
pub use self::indexed_point_set::IndexedPointSet;
pub use self::sub_geometry::SubGeometry;
pub use self::tetrahedron::Tetrahedron;
pub use self::triangle::Triangle;

mod element_shape;
mod indexed_point;
mod indexed_point_set;
mod sub_geometry;
mod tetrahedron;
mod triangle;
