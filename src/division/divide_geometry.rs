use crate::division::quadrature::{QuadratureDomain, QuadraturePointFactory};
use crate::division::{DivideError, PreconditionViolation};
use crate::math::{Point, Real};
use crate::shape::{ElementShape, IndexedPoint, IndexedPointSet, SubGeometry};
use arrayvec::ArrayVec;
use core::fmt;

/// One side of the interface.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// Where the nodal distances are positive.
    Positive,
    /// Where the nodal distances are negative.
    Negative,
}

impl Side {
    /// The other side of the interface.
    #[inline]
    pub fn opposite(self) -> Side {
        match self {
            Side::Positive => Side::Negative,
            Side::Negative => Side::Positive,
        }
    }
}

/// How far the division of an element went.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum DivisionState {
    /// The split edges are known, nothing was generated yet.
    Classified,
    /// The subdivisions were generated.
    Divided,
    /// The subdivisions and the interface skin were generated.
    SkinGenerated,
}

/// A piece of the element boundary owned by one subdivision.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoundaryFace {
    /// The point identities of the piece, oriented outward.
    pub face: SubGeometry,
    /// The index of the subdivision owning this piece, among the subdivisions of its side.
    pub parent_subdivision: usize,
    /// The boundary face of the original element this piece lies on.
    pub father_face: usize,
}

#[derive(Clone, Debug, Default)]
struct SideData {
    subdivisions: Vec<SubGeometry>,
    interfaces: Vec<SubGeometry>,
    interfaces_parent_ids: Vec<usize>,
}

impl SideData {
    fn clear(&mut self) {
        self.subdivisions.clear();
        self.clear_skin();
    }

    fn clear_skin(&mut self) {
        self.interfaces.clear();
        self.interfaces_parent_ids.clear();
    }
}

/// Divides one element cut by an interface.
///
/// The interface is the zero level set of a distance field sampled at the nodes of the
/// element. An edge is split iff the distances at its ends have strictly opposite signs:
/// a node with a zero distance never splits the edges it belongs to.
///
/// The division goes through three steps:
/// 1. [`DivideGeometry::new`] finds the split edges.
/// 2. [`DivideGeometry::generate_division`] builds the points synthesized on the split
///    edges, then the subdivisions of each side from the split pattern of the shape.
/// 3. [`DivideGeometry::generate_intersections_skin`] extracts the interface pieces, and
///    the exterior face queries extract the pieces of the element boundary.
///
/// Every subdivision, interface piece and boundary piece is a [`SubGeometry`] referring to
/// the points of [`DivideGeometry::aux_points`]. Points `0..n_nodes` are the element
/// vertices, point `n_nodes + e` is the intersection with edge `e`.
///
/// # Example
///
/// ```
/// # #[cfg(feature = "f64")] {
/// use interface_split::division::{DivideGeometry, Side};
/// use interface_split::math::Point;
/// use interface_split::shape::ElementShape;
///
/// let geometry = [
///     Point::new(0.0, 0.0, 0.0),
///     Point::new(1.0, 0.0, 0.0),
///     Point::new(0.0, 1.0, 0.0),
/// ];
/// let distances = [1.0, -1.0, 1.0];
///
/// let mut division =
///     DivideGeometry::new(ElementShape::Triangle2D3, &geometry, &distances).unwrap();
/// assert!(division.is_split());
///
/// division.generate_division().unwrap();
/// assert_eq!(division.subdivisions(Side::Positive).len(), 2);
/// assert_eq!(division.subdivisions(Side::Negative).len(), 1);
///
/// division.generate_intersections_skin().unwrap();
/// assert_eq!(division.interfaces(Side::Positive)[0].ids(), &[3, 4]);
/// assert_eq!(division.interfaces(Side::Negative)[0].ids(), &[4, 3]);
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct DivideGeometry<'a> {
    shape: ElementShape,
    geometry: &'a [Point<Real>],
    distances: &'a [Real],
    state: DivisionState,
    split_edges: u32,
    split_edges_number: usize,
    divisions_number: usize,
    aux_points: IndexedPointSet,
    positive: SideData,
    negative: SideData,
}

impl<'a> DivideGeometry<'a> {
    /// Prepares the division of an element and finds its split edges.
    ///
    /// `geometry` and `distances` must both have one entry per node of `shape`, in the
    /// node order of `shape`.
    pub fn new(
        shape: ElementShape,
        geometry: &'a [Point<Real>],
        distances: &'a [Real],
    ) -> Result<Self, DivideError> {
        let expected = shape.n_nodes();
        if geometry.len() != expected || distances.len() != expected {
            return Err(DivideError::InputSizeMismatch {
                expected,
                geometry: geometry.len(),
                distances: distances.len(),
            });
        }

        let mut result = Self {
            shape,
            geometry,
            distances,
            state: DivisionState::Classified,
            split_edges: 0,
            split_edges_number: 0,
            divisions_number: 0,
            aux_points: IndexedPointSet::new(),
            positive: SideData::default(),
            negative: SideData::default(),
        };
        result.classify();
        Ok(result)
    }

    /// Prepares the division of an element given its dimensions instead of its shape.
    ///
    /// Fails with [`DivideError::UnsupportedShape`] if no shape matches.
    pub fn from_dimensions(
        working_space_dimension: usize,
        local_space_dimension: usize,
        geometry: &'a [Point<Real>],
        distances: &'a [Real],
    ) -> Result<Self, DivideError> {
        let shape = ElementShape::from_dimensions(
            working_space_dimension,
            local_space_dimension,
            geometry.len(),
        )?;
        Self::new(shape, geometry, distances)
    }

    fn classify(&mut self) {
        let distances = self.distances;
        self.split_edges = self
            .shape
            .tables()
            .edges
            .iter()
            .enumerate()
            .filter(|(_, [i, j])| distances[*i as usize] * distances[*j as usize] < 0.0)
            .fold(0, |mask, (e, _)| mask | (1 << e));

        log::trace!(
            "{} with distances {:?}: split-edge mask {:#b}",
            self.shape,
            self.distances,
            self.split_edges
        );
    }

    /// The shape of the divided element.
    #[inline]
    pub fn shape(&self) -> ElementShape {
        self.shape
    }

    /// The vertices of the divided element.
    #[inline]
    pub fn input_geometry(&self) -> &'a [Point<Real>] {
        self.geometry
    }

    /// The signed distances at the nodes of the divided element.
    #[inline]
    pub fn nodal_distances(&self) -> &'a [Real] {
        self.distances
    }

    /// How far the division went.
    #[inline]
    pub fn state(&self) -> DivisionState {
        self.state
    }

    /// Is at least one edge of the element split by the interface?
    #[inline]
    pub fn is_split(&self) -> bool {
        self.split_edges != 0
    }

    /// The split edges, as a bitmask where bit `e` is set iff edge `e` is split.
    #[inline]
    pub fn split_edges(&self) -> u32 {
        self.split_edges
    }

    /// The number of split edges found by the last division.
    #[inline]
    pub fn split_edges_number(&self) -> usize {
        self.split_edges_number
    }

    /// The number of subdivisions generated by the last division.
    ///
    /// This is 1 for an element that is not split: the element itself.
    #[inline]
    pub fn divisions_number(&self) -> usize {
        self.divisions_number
    }

    /// The element vertices and the points synthesized on its split edges.
    #[inline]
    pub fn aux_points(&self) -> &IndexedPointSet {
        &self.aux_points
    }

    fn side(&self, side: Side) -> &SideData {
        match side {
            Side::Positive => &self.positive,
            Side::Negative => &self.negative,
        }
    }

    fn side_mut(&mut self, side: Side) -> &mut SideData {
        match side {
            Side::Positive => &mut self.positive,
            Side::Negative => &mut self.negative,
        }
    }

    /// The subdivisions lying on the given side of the interface.
    pub fn subdivisions(&self, side: Side) -> &[SubGeometry] {
        &self.side(side).subdivisions
    }

    /// The subdivisions lying on the positive side of the interface.
    pub fn positive_subdivisions(&self) -> &[SubGeometry] {
        self.subdivisions(Side::Positive)
    }

    /// The subdivisions lying on the negative side of the interface.
    pub fn negative_subdivisions(&self) -> &[SubGeometry] {
        self.subdivisions(Side::Negative)
    }

    /// The interface pieces owned by the subdivisions of the given side.
    pub fn interfaces(&self, side: Side) -> &[SubGeometry] {
        &self.side(side).interfaces
    }

    /// The interface pieces owned by the positive subdivisions.
    pub fn positive_interfaces(&self) -> &[SubGeometry] {
        self.interfaces(Side::Positive)
    }

    /// The interface pieces owned by the negative subdivisions.
    pub fn negative_interfaces(&self) -> &[SubGeometry] {
        self.interfaces(Side::Negative)
    }

    /// For each interface piece of the given side, the index of the subdivision owning it.
    pub fn interfaces_parent_ids(&self, side: Side) -> &[usize] {
        &self.side(side).interfaces_parent_ids
    }

    /// For each positive interface piece, the index of the subdivision owning it.
    pub fn positive_interfaces_parent_ids(&self) -> &[usize] {
        self.interfaces_parent_ids(Side::Positive)
    }

    /// For each negative interface piece, the index of the subdivision owning it.
    pub fn negative_interfaces_parent_ids(&self) -> &[usize] {
        self.interfaces_parent_ids(Side::Negative)
    }

    /// Generates the subdivisions of the element.
    ///
    /// Every previous result is discarded first, so calling this again on the same input
    /// gives the same subdivisions. An element that is not split gets no subdivision.
    pub fn generate_division(&mut self) -> Result<(), DivideError> {
        let tables = self.shape.tables();
        let n_nodes = tables.n_nodes;

        self.aux_points.clear();
        self.positive.clear();
        self.negative.clear();
        self.state = DivisionState::Classified;

        for (i, pt) in self.geometry.iter().enumerate() {
            let _ = self.aux_points.insert(IndexedPoint::new(*pt, i as u32));
        }

        if !self.is_split() {
            self.divisions_number = 1;
            self.split_edges_number = 0;
            self.state = DivisionState::Divided;
            return Ok(());
        }

        for (e, [i, j]) in tables.edges.iter().enumerate() {
            if self.split_edges & (1 << e) == 0 {
                continue;
            }

            let (i, j) = (*i as usize, *j as usize);
            let (di, dj) = (self.distances[i], self.distances[j]);
            debug_assert!(!relative_eq!(dj - di, 0.0));

            let t = (di / (dj - di)).abs();
            let coords = self.geometry[j].coords * t + self.geometry[i].coords * (1.0 - t);
            let _ = self
                .aux_points
                .insert(IndexedPoint::new(coords.into(), (n_nodes + e) as u32));
        }

        let pattern = tables.pattern(self.split_edges).ok_or_else(|| {
            log::error!(
                "{}: no split pattern for the split-edge mask {:#b}",
                self.shape,
                self.split_edges
            );
            DivideError::UnknownSplitPattern {
                mask: self.split_edges,
            }
        })?;

        self.split_edges_number = self.split_edges.count_ones() as usize;
        self.divisions_number = 0;

        for local_ids in pattern {
            let sub = SubGeometry::from_local(local_ids.iter().map(|id| *id as u32));
            let side = self.side_of(&sub)?;
            self.side_mut(side).subdivisions.push(sub);
            self.divisions_number += 1;
        }

        self.state = DivisionState::Divided;
        log::debug!(
            "{}: {} split edges, {} positive and {} negative subdivisions",
            self.shape,
            self.split_edges_number,
            self.positive.subdivisions.len(),
            self.negative.subdivisions.len()
        );

        Ok(())
    }

    /// The side of a subdivision, voted by the distances of its original vertices.
    ///
    /// Vertices with a zero distance do not vote. A subdivision without any vote is
    /// negative.
    fn side_of(&self, sub: &SubGeometry) -> Result<Side, DivideError> {
        let mut pos = 0;
        let mut neg = 0;

        for id in sub.originals(self.shape.n_nodes()) {
            let dist = self.distances[id as usize];
            if dist < 0.0 {
                neg += 1;
            } else if dist > 0.0 {
                pos += 1;
            }
        }

        if pos > 0 && neg > 0 {
            log::error!(
                "{}: subdivision {:?} has nodes on both sides of the interface",
                self.shape,
                sub.ids()
            );
            return Err(invalid_geometry(
                sub,
                "nodes in both positive and negative sides",
            ));
        }

        Ok(if pos > 0 { Side::Positive } else { Side::Negative })
    }

    fn check_divided_and_split(&self) -> Result<(), DivideError> {
        if self.state < DivisionState::Divided {
            Err(PreconditionViolation::NotDivided.into())
        } else if !self.is_split() {
            Err(PreconditionViolation::NotSplit.into())
        } else {
            Ok(())
        }
    }

    /// Generates the interface pieces of each side.
    ///
    /// An interface piece is a face (an edge for triangles) of a subdivision whose points
    /// were all synthesized on split edges. Each piece is stored with the index of the
    /// subdivision it comes from. A sub-triangle has at most one such edge; every such
    /// face of a sub-tetrahedron is kept.
    ///
    /// Fails if the division was not generated, or if the element is not split.
    pub fn generate_intersections_skin(&mut self) -> Result<(), DivideError> {
        self.check_divided_and_split()?;

        let tables = self.shape.tables();
        let n_nodes = tables.n_nodes;

        for side in [Side::Positive, Side::Negative] {
            let SideData {
                subdivisions,
                interfaces,
                interfaces_parent_ids,
            } = self.side_mut(side);
            interfaces.clear();
            interfaces_parent_ids.clear();

            for (i_sub, sub) in subdivisions.iter().enumerate() {
                for face in tables.sub_faces {
                    let piece = sub_face(sub, face);

                    if piece.is_interface(n_nodes) {
                        interfaces.push(piece);
                        interfaces_parent_ids.push(i_sub);

                        if tables.local_dimension == 2 {
                            break;
                        }
                    }
                }
            }
        }

        self.state = DivisionState::SkinGenerated;
        Ok(())
    }

    /// The pieces of the element boundary belonging to the subdivisions of `side`.
    ///
    /// Fails if the division was not generated, or if the element is not split.
    pub fn generate_exterior_faces(&self, side: Side) -> Result<Vec<BoundaryFace>, DivideError> {
        self.exterior_faces(side, None)
    }

    /// The pieces of the boundary face `father_face` belonging to the subdivisions of `side`.
    ///
    /// Fails if the division was not generated, if the element is not split, or if
    /// `father_face` is not a face of the element.
    pub fn generate_exterior_faces_on(
        &self,
        side: Side,
        father_face: usize,
    ) -> Result<Vec<BoundaryFace>, DivideError> {
        self.check_divided_and_split()?;

        let n_faces = self.shape.n_faces();
        if father_face >= n_faces {
            return Err(PreconditionViolation::FatherFaceOutOfRange {
                face: father_face,
                n_faces,
            }
            .into());
        }

        self.exterior_faces(side, Some(father_face))
    }

    /// The boundary pieces of the positive subdivisions.
    pub fn generate_positive_exterior_faces(&self) -> Result<Vec<BoundaryFace>, DivideError> {
        self.generate_exterior_faces(Side::Positive)
    }

    /// The boundary pieces of the negative subdivisions.
    pub fn generate_negative_exterior_faces(&self) -> Result<Vec<BoundaryFace>, DivideError> {
        self.generate_exterior_faces(Side::Negative)
    }

    /// The pieces of the boundary face `father_face` belonging to the positive subdivisions.
    pub fn generate_positive_exterior_faces_on(
        &self,
        father_face: usize,
    ) -> Result<Vec<BoundaryFace>, DivideError> {
        self.generate_exterior_faces_on(Side::Positive, father_face)
    }

    /// The pieces of the boundary face `father_face` belonging to the negative subdivisions.
    pub fn generate_negative_exterior_faces_on(
        &self,
        father_face: usize,
    ) -> Result<Vec<BoundaryFace>, DivideError> {
        self.generate_exterior_faces_on(Side::Negative, father_face)
    }

    fn exterior_faces(
        &self,
        side: Side,
        father_face: Option<usize>,
    ) -> Result<Vec<BoundaryFace>, DivideError> {
        self.check_divided_and_split()?;

        let tables = self.shape.tables();
        let mut result = Vec::new();

        for (i_sub, sub) in self.subdivisions(side).iter().enumerate() {
            for face in tables.sub_faces {
                let piece = sub_face(sub, face);

                if has_repeated_ids(&piece) {
                    log::error!(
                        "{}: subdivision {} of {:?} has a face with repeated points",
                        self.shape,
                        i_sub,
                        sub.ids()
                    );
                    return Err(invalid_geometry(&piece, "repeated point in a face"));
                }

                if let Some(parent) = (tables.exterior_face_parent)(piece.ids()) {
                    if father_face.map_or(true, |f| f == parent) {
                        result.push(BoundaryFace {
                            face: piece,
                            parent_subdivision: i_sub,
                            father_face: parent,
                        });
                    }
                }
            }
        }

        Ok(result)
    }

    /// Feeds every subdivision of `side` to a quadrature point factory.
    ///
    /// Returns one factory output per subdivision, in order. An element that is not split
    /// has no subdivision, so this returns nothing: the element itself must be integrated
    /// instead.
    pub fn create_quadrature_points<F: QuadraturePointFactory>(
        &self,
        side: Side,
        factory: &mut F,
    ) -> Result<Vec<F::Output>, DivideError> {
        if self.state < DivisionState::Divided {
            return Err(PreconditionViolation::NotDivided.into());
        }

        let domain = QuadratureDomain {
            working_space_dimension: self.shape.working_space_dimension(),
            local_space_dimension: self.shape.local_space_dimension(),
        };
        self.feed(self.subdivisions(side), domain, factory)
    }

    /// Feeds every interface piece of `side` to a quadrature point factory.
    ///
    /// Fails with [`PreconditionViolation::NotDivided`] before the division, and with
    /// [`PreconditionViolation::NotSkinned`] if the skin was not generated since the last
    /// division.
    pub fn create_interface_quadrature_points<F: QuadraturePointFactory>(
        &self,
        side: Side,
        factory: &mut F,
    ) -> Result<Vec<F::Output>, DivideError> {
        match self.state {
            DivisionState::Classified => return Err(PreconditionViolation::NotDivided.into()),
            DivisionState::Divided => return Err(PreconditionViolation::NotSkinned.into()),
            DivisionState::SkinGenerated => {}
        }

        let domain = QuadratureDomain {
            working_space_dimension: self.shape.working_space_dimension(),
            local_space_dimension: self.shape.local_space_dimension() - 1,
        };
        self.feed(self.interfaces(side), domain, factory)
    }

    fn feed<F: QuadraturePointFactory>(
        &self,
        geometries: &[SubGeometry],
        domain: QuadratureDomain,
        factory: &mut F,
    ) -> Result<Vec<F::Output>, DivideError> {
        geometries
            .iter()
            .map(|sub| {
                let points = self
                    .aux_points
                    .resolve(sub)
                    .ok_or_else(|| invalid_geometry(sub, "refers to a point that does not exist"))?;
                factory.create(domain, &points)
            })
            .collect()
    }
}

fn sub_face(sub: &SubGeometry, face: &[u8]) -> SubGeometry {
    SubGeometry::from_local(face.iter().map(|k| sub.ids()[*k as usize]))
}

fn has_repeated_ids(sub: &SubGeometry) -> bool {
    let ids = sub.ids();
    (0..ids.len()).any(|i| ids[i + 1..].contains(&ids[i]))
}

fn invalid_geometry(sub: &SubGeometry, reason: &'static str) -> DivideError {
    DivideError::InvalidSplitGeometry {
        ids: sub.ids().iter().copied().collect::<ArrayVec<u32, 4>>(),
        reason,
    }
}

impl fmt::Display for DivideGeometry<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} divide operations utility constructed with:", self.shape)?;
        writeln!(
            f,
            "   Geometry type: {} with {} nodes",
            self.shape,
            self.geometry.len()
        )?;
        write!(f, "   Distance values:")?;
        for dist in self.distances {
            write!(f, " {dist}")?;
        }
        Ok(())
    }
}
