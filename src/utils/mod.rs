//! Various unsorted geometrical and logical operators.

pub use self::center::center;
pub(crate) use self::sort::sort3;
pub use self::sorted_pair::SortedPair;

mod center;
mod sort;
mod sorted_pair;
