use interface_split::division::{
    DivideError, DivideGeometry, QuadratureDomain, QuadraturePointFactory, Side,
};
use interface_split::math::{Point, Real};
use interface_split::na;
use interface_split::shape::{ElementShape, IndexedPoint, Tetrahedron, Triangle};
use interface_split::utils::center;

/// One integration point at the centroid, weighted by the measure of the simplex.
struct CentroidRule {
    calls: usize,
}

impl QuadraturePointFactory for CentroidRule {
    type Output = (Point<Real>, Real);

    fn create(
        &mut self,
        domain: QuadratureDomain,
        points: &[IndexedPoint],
    ) -> Result<Self::Output, DivideError> {
        self.calls += 1;
        let pts: Vec<Point<Real>> = points.iter().map(|p| *p.coords()).collect();

        let weight = match (domain.local_space_dimension, pts.as_slice()) {
            (1, [a, b]) => na::distance(a, b),
            (2, [a, b, c]) => Triangle::new(*a, *b, *c).area(),
            (3, [a, b, c, d]) => Tetrahedron::new(*a, *b, *c, *d).volume(),
            _ => {
                return Err(DivideError::UnsupportedShape {
                    working_space_dimension: domain.working_space_dimension,
                    local_space_dimension: domain.local_space_dimension,
                    n_nodes: points.len(),
                })
            }
        };

        Ok((center(&pts), weight))
    }
}

fn integrate(rule: &[(Point<Real>, Real)], f: impl Fn(&Point<Real>) -> Real) -> Real {
    rule.iter().map(|(pt, w)| f(pt) * w).sum()
}

#[test]
fn linear_fields_are_integrated_exactly() {
    let geometry = [
        Point::new(0.0, 0.0, 0.0),
        Point::new(1.0, 0.0, 0.0),
        Point::new(0.0, 1.0, 0.0),
        Point::new(0.0, 0.0, 1.0),
    ];
    let distances = [0.3, -0.5, 0.8, -0.1];
    let mut division =
        DivideGeometry::new(ElementShape::Tetrahedron3D4, &geometry, &distances).unwrap();
    division.generate_division().unwrap();

    let mut rule = CentroidRule { calls: 0 };
    let mut points = division
        .create_quadrature_points(Side::Positive, &mut rule)
        .unwrap();
    points.extend(
        division
            .create_quadrature_points(Side::Negative, &mut rule)
            .unwrap(),
    );
    assert_eq!(rule.calls, division.divisions_number());

    let f = |pt: &Point<Real>| 1.0 + 2.0 * pt.x - pt.y + 3.0 * pt.z;
    let volume = 1.0 / 6.0;
    let exact = volume * f(&Point::new(0.25, 0.25, 0.25));
    assert!(relative_eq!(integrate(&points, |_| 1.0), volume, epsilon = 1.0e-12));
    assert!(relative_eq!(integrate(&points, f), exact, epsilon = 1.0e-12));
}

#[test]
fn interface_rules_live_on_the_cut() {
    let geometry = [
        Point::new(0.0, 0.0, 0.0),
        Point::new(2.0, 0.0, 0.0),
        Point::new(0.0, 2.0, 0.0),
    ];
    // The interface is the segment x = 1 inside the triangle.
    let distances = [-1.0, 1.0, -1.0];
    let mut division =
        DivideGeometry::new(ElementShape::Triangle2D3, &geometry, &distances).unwrap();
    division.generate_division().unwrap();
    division.generate_intersections_skin().unwrap();

    let mut rule = CentroidRule { calls: 0 };
    let points = division
        .create_interface_quadrature_points(Side::Positive, &mut rule)
        .unwrap();

    assert_eq!(points.len(), 1);
    assert!(relative_eq!(points[0].0, Point::new(1.0, 0.5, 0.0)));
    assert!(relative_eq!(points[0].1, 1.0));
}
