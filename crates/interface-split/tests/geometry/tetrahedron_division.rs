use interface_split::division::{DivideGeometry, Side};
use interface_split::math::{Point, Real};
use interface_split::shape::{ElementShape, IndexedPointSet, SubGeometry, Tetrahedron};

fn unit_tetrahedron() -> [Point<Real>; 4] {
    [
        Point::new(0.0, 0.0, 0.0),
        Point::new(1.0, 0.0, 0.0),
        Point::new(0.0, 1.0, 0.0),
        Point::new(0.0, 0.0, 1.0),
    ]
}

fn total_measure(aux: &IndexedPointSet, geometries: &[SubGeometry]) -> Real {
    geometries.iter().map(|g| aux.measure(g).unwrap()).sum()
}

fn assert_positively_oriented(aux: &IndexedPointSet, geometries: &[SubGeometry]) {
    for g in geometries {
        let pts = aux.coordinates(g).unwrap();
        let tet = Tetrahedron::new(pts[0], pts[1], pts[2], pts[3]);
        assert!(tet.signed_volume() > 0.0, "{:?} is inverted", g.ids());
    }
}

#[test]
fn corner_cut() {
    let geometry = unit_tetrahedron();
    let distances = [-1.0, 1.0, 1.0, 1.0];
    let mut division = DivideGeometry::from_dimensions(3, 3, &geometry, &distances).unwrap();

    assert_eq!(division.shape(), ElementShape::Tetrahedron3D4);
    assert_eq!(division.split_edges(), 0b000111);

    division.generate_division().unwrap();
    assert_eq!(division.split_edges_number(), 3);
    assert_eq!(division.divisions_number(), 4);
    assert_eq!(division.negative_subdivisions().len(), 1);
    assert_eq!(division.positive_subdivisions().len(), 3);

    let aux = division.aux_points();
    assert_eq!(aux.len(), 7);
    assert_positively_oriented(aux, division.positive_subdivisions());
    assert_positively_oriented(aux, division.negative_subdivisions());

    let negative = total_measure(aux, division.negative_subdivisions());
    let positive = total_measure(aux, division.positive_subdivisions());
    assert!(relative_eq!(negative, 1.0 / 48.0, epsilon = 1.0e-12));
    assert!(relative_eq!(negative + positive, 1.0 / 6.0, epsilon = 1.0e-12));

    division.generate_intersections_skin().unwrap();
    let aux = division.aux_points();
    for side in [Side::Positive, Side::Negative] {
        let interfaces = division.interfaces(side);
        assert_eq!(interfaces.len(), 1);

        let mut ids = interfaces[0].ids().to_vec();
        ids.sort_unstable();
        assert_eq!(ids, vec![4, 5, 6]);
        assert!(relative_eq!(
            total_measure(aux, interfaces),
            (3.0 as Real).sqrt() / 8.0,
            epsilon = 1.0e-12
        ));
    }
    assert_eq!(division.negative_interfaces_parent_ids(), &[0]);
}

#[test]
fn cut_through_four_edges() {
    let geometry = unit_tetrahedron();
    let distances = [-1.0, -1.0, 1.0, 1.0];
    let mut division =
        DivideGeometry::new(ElementShape::Tetrahedron3D4, &geometry, &distances).unwrap();

    assert_eq!(division.split_edges(), 0b011110);
    division.generate_division().unwrap();
    assert_eq!(division.divisions_number(), 6);
    assert_eq!(division.negative_subdivisions().len(), 3);
    assert_eq!(division.positive_subdivisions().len(), 3);

    let aux = division.aux_points();
    assert!(!aux.contains(4));
    assert!(!aux.contains(9));
    assert_positively_oriented(aux, division.positive_subdivisions());
    assert_positively_oriented(aux, division.negative_subdivisions());

    let negative = total_measure(aux, division.negative_subdivisions());
    let positive = total_measure(aux, division.positive_subdivisions());
    assert!(relative_eq!(negative, positive, epsilon = 1.0e-12));
    assert!(relative_eq!(negative + positive, 1.0 / 6.0, epsilon = 1.0e-12));

    // The cut is a parallelogram split in two triangles, seen from both sides.
    division.generate_intersections_skin().unwrap();
    let aux = division.aux_points();
    let negative_skin = division.negative_interfaces();
    let positive_skin = division.positive_interfaces();
    assert_eq!(negative_skin.len(), 2);
    assert_eq!(positive_skin.len(), 2);
    assert!(relative_eq!(
        total_measure(aux, negative_skin),
        (2.0 as Real).sqrt() / 4.0,
        epsilon = 1.0e-12
    ));
    assert!(relative_eq!(
        total_measure(aux, positive_skin),
        total_measure(aux, negative_skin),
        epsilon = 1.0e-12
    ));
}

#[test]
fn single_split_edge() {
    let geometry = unit_tetrahedron();
    // Vertices 2 and 3 lie on the interface.
    let distances = [-1.0, 1.0, 0.0, 0.0];
    let mut division =
        DivideGeometry::new(ElementShape::Tetrahedron3D4, &geometry, &distances).unwrap();

    assert_eq!(division.split_edges(), 0b000001);
    division.generate_division().unwrap();
    assert_eq!(division.negative_subdivisions().len(), 1);
    assert_eq!(division.positive_subdivisions().len(), 1);

    // The cut face holds vertices 2 and 3, so it is not an interface piece.
    division.generate_intersections_skin().unwrap();
    assert!(division.negative_interfaces().is_empty());
    assert!(division.positive_interfaces().is_empty());
}
