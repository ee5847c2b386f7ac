//! The boundary between the division and the integration layer.

use crate::division::DivideError;
use crate::shape::IndexedPoint;

/// The dimensions of the geometries handed to a [`QuadraturePointFactory`].
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct QuadratureDomain {
    /// The dimension of the space the points live in.
    pub working_space_dimension: usize,
    /// The dimension of the geometry: 2 for triangles, 1 for segments, etc.
    pub local_space_dimension: usize,
}

/// Builds integration points on the sub-geometries of a divided element.
///
/// Implemented by the integration layer. Closures with the signature of
/// [`QuadraturePointFactory::create`] implement this trait too.
pub trait QuadraturePointFactory {
    /// The integration data built for one sub-geometry.
    type Output;

    /// Builds the integration data of the simplex with the given points.
    fn create(
        &mut self,
        domain: QuadratureDomain,
        points: &[IndexedPoint],
    ) -> Result<Self::Output, DivideError>;
}

impl<F, O> QuadraturePointFactory for F
where
    F: FnMut(QuadratureDomain, &[IndexedPoint]) -> Result<O, DivideError>,
{
    type Output = O;

    fn create(
        &mut self,
        domain: QuadratureDomain,
        points: &[IndexedPoint],
    ) -> Result<O, DivideError> {
        self(domain, points)
    }
}
