use core::cmp::PartialOrd;

/// A pair of elements sorted in increasing order.
///
/// Used as the orientation-independent key of an edge.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SortedPair<T: PartialOrd>([T; 2]);

impl<T: PartialOrd> SortedPair<T> {
    /// Sorts two elements in increasing order into a new pair.
    pub fn new(element1: T, element2: T) -> Self {
        if element1 > element2 {
            SortedPair([element2, element1])
        } else {
            SortedPair([element1, element2])
        }
    }
}

impl<T: PartialOrd + Copy> SortedPair<T> {
    /// The elements of this pair, smallest first.
    pub fn pair(&self) -> (T, T) {
        (self.0[0], self.0[1])
    }
}
