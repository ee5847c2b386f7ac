use interface_split::division::batch::{divide_element, divide_elements, ElementInput};
use interface_split::division::DivisionState;
use interface_split::math::{Point, Real};
use interface_split::shape::ElementShape;

#[test]
fn strip_of_triangles() {
    // Four triangles along the x axis, cut by the plane x = 1.5.
    let vertices: Vec<Point<Real>> = (0..5)
        .flat_map(|i| [Point::new(i as Real, 0.0, 0.0), Point::new(i as Real, 1.0, 0.0)])
        .collect();
    let distances: Vec<Real> = vertices.iter().map(|p| p.x - 1.5).collect();

    let elements: Vec<([Point<Real>; 3], [Real; 3])> = (0..4)
        .map(|i| {
            let ids = [2 * i, 2 * i + 2, 2 * i + 1];
            (ids.map(|k| vertices[k]), ids.map(|k| distances[k]))
        })
        .collect();
    let inputs: Vec<ElementInput> = elements
        .iter()
        .map(|(g, d)| ElementInput::new(ElementShape::Triangle2D3, g, d))
        .collect();

    let results = divide_elements(&inputs);
    let split: Vec<bool> = results.iter().map(|r| r.as_ref().unwrap().is_split()).collect();
    assert_eq!(split, vec![false, true, false, false]);

    let cut = results[1].as_ref().unwrap();
    assert_eq!(cut.state(), DivisionState::SkinGenerated);
    assert_eq!(cut.positive_interfaces().len(), 1);
    assert_eq!(cut.negative_interfaces().len(), 1);

    let single = divide_element(&inputs[1]).unwrap();
    assert_eq!(single.positive_subdivisions(), cut.positive_subdivisions());
    assert_eq!(single.negative_subdivisions(), cut.negative_subdivisions());
}
