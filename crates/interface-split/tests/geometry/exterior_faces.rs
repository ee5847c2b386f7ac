use interface_split::division::{BoundaryFace, DivideGeometry, Side};
use interface_split::math::{Point, Real};
use interface_split::shape::{ElementShape, IndexedPointSet, SubGeometry, Triangle};

fn face_measure(aux: &IndexedPointSet, faces: &[BoundaryFace]) -> Real {
    faces.iter().map(|f| aux.measure(&f.face).unwrap()).sum()
}

fn parent_face(shape: ElementShape, i: usize) -> SubGeometry {
    let ids: Vec<u32> = shape.face(i).unwrap().iter().map(|id| *id as u32).collect();
    SubGeometry::from_ids(&ids)
}

#[test]
fn tetrahedron_faces_are_covered_by_both_sides() {
    let geometry = [
        Point::new(0.0, 0.0, 0.0),
        Point::new(1.0, 0.0, 0.0),
        Point::new(0.0, 1.0, 0.0),
        Point::new(0.0, 0.0, 1.0),
    ];
    let distances = [-1.0, 1.0, 1.0, 1.0];
    let mut division =
        DivideGeometry::new(ElementShape::Tetrahedron3D4, &geometry, &distances).unwrap();
    division.generate_division().unwrap();
    let aux = division.aux_points();

    // The face opposite to the negative vertex is entirely positive.
    assert!(division.generate_negative_exterior_faces_on(0).unwrap().is_empty());
    let opposite = division.generate_positive_exterior_faces_on(0).unwrap();
    assert!(relative_eq!(
        face_measure(aux, &opposite),
        (3.0 as Real).sqrt() / 2.0,
        epsilon = 1.0e-12
    ));

    let negative = division.generate_negative_exterior_faces().unwrap();
    assert_eq!(negative.len(), 3);
    assert!(negative.iter().all(|f| f.parent_subdivision == 0));
    assert!(relative_eq!(face_measure(aux, &negative), 3.0 / 8.0, epsilon = 1.0e-12));

    for father_face in 0..4 {
        let parent = parent_face(ElementShape::Tetrahedron3D4, father_face);
        let parent_pts = aux.coordinates(&parent).unwrap();
        let parent_normal = Triangle::new(parent_pts[0], parent_pts[1], parent_pts[2]).scaled_normal();

        let mut pieces = division.generate_positive_exterior_faces_on(father_face).unwrap();
        pieces.extend(division.generate_negative_exterior_faces_on(father_face).unwrap());

        assert!(pieces.iter().all(|f| f.father_face == father_face));
        assert!(relative_eq!(
            face_measure(aux, &pieces),
            aux.measure(&parent).unwrap(),
            epsilon = 1.0e-12
        ));

        for piece in &pieces {
            let pts = aux.coordinates(&piece.face).unwrap();
            let normal = Triangle::new(pts[0], pts[1], pts[2]).scaled_normal();
            assert!(normal.dot(&parent_normal) > 0.0, "{:?} points inward", piece.face.ids());
        }
    }
}

#[test]
fn triangle_edges_are_covered_by_both_sides() {
    let geometry = [
        Point::new(0.0, 0.0, 0.0),
        Point::new(2.0, 0.0, 0.0),
        Point::new(0.0, 2.0, 0.0),
    ];
    let distances = [-1.0, 1.0, -3.0];
    let mut division =
        DivideGeometry::new(ElementShape::Triangle2D3, &geometry, &distances).unwrap();
    division.generate_division().unwrap();
    let aux = division.aux_points();

    let all: usize = [Side::Positive, Side::Negative]
        .iter()
        .map(|side| division.generate_exterior_faces(*side).unwrap().len())
        .sum();
    assert_eq!(all, 5);

    for father_face in 0..3 {
        let parent = parent_face(ElementShape::Triangle2D3, father_face);
        let parent_pts = aux.coordinates(&parent).unwrap();
        let parent_dir = parent_pts[1] - parent_pts[0];

        let mut pieces = division.generate_exterior_faces_on(Side::Positive, father_face).unwrap();
        pieces.extend(division.generate_exterior_faces_on(Side::Negative, father_face).unwrap());

        assert!(relative_eq!(
            face_measure(aux, &pieces),
            aux.measure(&parent).unwrap(),
            epsilon = 1.0e-12
        ));

        for piece in &pieces {
            let pts = aux.coordinates(&piece.face).unwrap();
            assert!((pts[1] - pts[0]).dot(&parent_dir) > 0.0);
        }
    }
}
