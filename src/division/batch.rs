//! Division of many elements at once.
//!
//! With the `parallel` feature enabled, elements are divided on the rayon thread pool.

use crate::division::{DivideError, DivideGeometry};
use crate::math::{Point, Real};
use crate::shape::ElementShape;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// The input of one element to divide.
#[derive(Copy, Clone, Debug)]
pub struct ElementInput<'a> {
    /// The shape of the element.
    pub shape: ElementShape,
    /// The vertices of the element.
    pub geometry: &'a [Point<Real>],
    /// The signed distance at each vertex of the element.
    pub distances: &'a [Real],
}

impl<'a> ElementInput<'a> {
    /// Groups the input of one element.
    pub fn new(shape: ElementShape, geometry: &'a [Point<Real>], distances: &'a [Real]) -> Self {
        Self {
            shape,
            geometry,
            distances,
        }
    }
}

/// Divides one element, and generates its interface skin if it is split.
pub fn divide_element<'a>(input: &ElementInput<'a>) -> Result<DivideGeometry<'a>, DivideError> {
    let mut division = DivideGeometry::new(input.shape, input.geometry, input.distances)?;
    division.generate_division()?;

    if division.is_split() {
        division.generate_intersections_skin()?;
    }

    Ok(division)
}

/// Divides every element of `inputs` with [`divide_element`].
///
/// The results are in the order of `inputs`. A failure on one element does not prevent
/// the division of the others.
pub fn divide_elements<'a>(
    inputs: &[ElementInput<'a>],
) -> Vec<Result<DivideGeometry<'a>, DivideError>> {
    #[cfg(feature = "parallel")]
    let results: Vec<_> = inputs.par_iter().map(divide_element).collect();
    #[cfg(not(feature = "parallel"))]
    let results: Vec<_> = inputs.iter().map(divide_element).collect();

    log::debug!(
        "divided {} elements, {} split",
        results.len(),
        results
            .iter()
            .filter(|r| matches!(r, Ok(d) if d.is_split()))
            .count()
    );

    results
}
