/*!
interface-split
===============

**interface-split** divides finite elements cut by an embedded interface.

Given the vertices of an element and a signed distance at each vertex, it computes the
sub-triangles (or sub-tetrahedra) lying on the positive and on the negative side of the
zero level set, the interface pieces approximating that zero level set inside the element,
and the pieces of the element boundary belonging to each side.

*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::module_inception)]
#![deny(unused_qualifications)]

#[cfg(feature = "serde")]
#[macro_use]
extern crate serde;
#[macro_use]
extern crate approx;
#[macro_use]
extern crate static_assertions;

pub extern crate nalgebra as na;

pub mod division;
pub mod shape;
pub mod utils;

mod real {
    /// The scalar type used throughout this crate.
    #[cfg(feature = "f64")]
    pub use f64 as Real;

    /// The scalar type used throughout this crate.
    #[cfg(feature = "f32")]
    pub use f32 as Real;
}

/// Compilation flags dependent aliases for mathematical types.
pub mod math {
    pub use super::real::*;
    pub use na::{Point3, Vector3};

    /// The point type. Planar elements keep a zero third coordinate.
    pub use Point3 as Point;

    /// The vector type.
    pub use Vector3 as Vector;
}
