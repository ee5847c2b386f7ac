use crate::math::Real;

/// Sorts a set of three values in increasing order.
#[inline]
pub fn sort3<'a>(a: &'a Real, b: &'a Real, c: &'a Real) -> (&'a Real, &'a Real, &'a Real) {
    let mut sorted = [a, b, c];

    if sorted[0] > sorted[1] {
        sorted.swap(0, 1);
    }
    if sorted[1] > sorted[2] {
        sorted.swap(1, 2);
    }
    if sorted[0] > sorted[1] {
        sorted.swap(0, 1);
    }

    (sorted[0], sorted[1], sorted[2])
}
