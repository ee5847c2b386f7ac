//! Division of elements cut by an interface.
//!
//! The interface is given by a signed distance at each node of the element. Dividing the
//! element yields the sub-geometries on each side of the interface, the interface pieces,
//! and the pieces of the element boundary belonging to each side.

pub use self::divide_geometry::{BoundaryFace, DivideGeometry, DivisionState, Side};
pub use self::error::{DivideError, PreconditionViolation};
pub use self::quadrature::{QuadratureDomain, QuadraturePointFactory};

pub mod batch;
mod divide_geometry;
mod error;
pub mod quadrature;
pub(crate) mod split_tables;
pub(crate) mod split_tetrahedron;
pub(crate) mod split_triangle;
