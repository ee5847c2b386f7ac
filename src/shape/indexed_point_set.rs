use crate::math::{Point, Real};
use crate::shape::{IndexedPoint, SubGeometry, Tetrahedron, Triangle};
use arrayvec::ArrayVec;
use smallvec::SmallVec;

/// The arena owning every point used by the subdivisions of one element.
///
/// It holds the original vertices of the element followed by the points synthesized
/// on its split edges. Points are kept sorted by identity so they can be looked up with
/// a binary search. The inline capacity covers the ten points of a split tetrahedron.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct IndexedPointSet {
    points: SmallVec<[IndexedPoint; 10]>,
}

impl IndexedPointSet {
    /// Creates an empty point set.
    pub fn new() -> Self {
        Self::default()
    }

    /// The number of points in this set.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if this set contains no point.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Removes every point from this set.
    pub fn clear(&mut self) {
        self.points.clear()
    }

    /// Inserts a point, replacing the point with the same identity if there is one.
    ///
    /// Returns the replaced point.
    pub fn insert(&mut self, point: IndexedPoint) -> Option<IndexedPoint> {
        match self.points.last() {
            Some(last) if last.id() >= point.id() => {
                match self.points.binary_search_by_key(&point.id(), |p| p.id()) {
                    Ok(i) => Some(core::mem::replace(&mut self.points[i], point)),
                    Err(i) => {
                        self.points.insert(i, point);
                        None
                    }
                }
            }
            _ => {
                self.points.push(point);
                None
            }
        }
    }

    /// The point with the given identity, if any.
    pub fn get(&self, id: u32) -> Option<&IndexedPoint> {
        self.points
            .binary_search_by_key(&id, |p| p.id())
            .ok()
            .map(|i| &self.points[i])
    }

    /// Does this set contain a point with the given identity?
    pub fn contains(&self, id: u32) -> bool {
        self.get(id).is_some()
    }

    /// Iterates through the points of this set, by increasing identity.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &IndexedPoint> {
        self.points.iter()
    }

    /// The points of a sub-geometry, in the order of its identities.
    ///
    /// Returns `None` if one of the identities is not part of this set.
    pub fn resolve(&self, sub: &SubGeometry) -> Option<ArrayVec<IndexedPoint, 4>> {
        sub.ids().iter().map(|id| self.get(*id).copied()).collect()
    }

    /// The coordinates of the points of a sub-geometry.
    ///
    /// Returns `None` if one of the identities is not part of this set.
    pub fn coordinates(&self, sub: &SubGeometry) -> Option<ArrayVec<Point<Real>, 4>> {
        sub.ids()
            .iter()
            .map(|id| self.get(*id).map(|p| *p.coords()))
            .collect()
    }

    /// The length, area, or volume of a sub-geometry with 2, 3, or 4 points.
    ///
    /// Returns `None` if one of the identities is not part of this set.
    pub fn measure(&self, sub: &SubGeometry) -> Option<Real> {
        let pts = self.coordinates(sub)?;
        match pts.as_slice() {
            [_] => Some(0.0),
            [a, b] => Some(na::distance(a, b)),
            [a, b, c] => Some(Triangle::new(*a, *b, *c).area()),
            [a, b, c, d] => Some(Tetrahedron::new(*a, *b, *c, *d).volume()),
            _ => None,
        }
    }
}

impl<'a> IntoIterator for &'a IndexedPointSet {
    type Item = &'a IndexedPoint;
    type IntoIter = core::slice::Iter<'a, IndexedPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
