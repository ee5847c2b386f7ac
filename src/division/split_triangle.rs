//! Split patterns of the 3-noded triangle.
//!
//! Edges are numbered `0: (0, 1)`, `1: (1, 2)`, `2: (2, 0)`, so the point synthesized on an
//! edge has the identity `3 + edge`, and edge `i` is also the parent face `i`.
//!
//! A triangle cut by the interface has either one split edge (the interface goes through
//! the opposite vertex) or two split edges. In the latter case, the vertex shared by both
//! edges is isolated in its own sub-triangle and the remaining quadrilateral is split along
//! the diagonal incident to its lowest local identity.

use super::split_tables::SplitTables;
use crate::utils::SortedPair;

const EDGES: [[u8; 2]; 3] = [[0, 1], [1, 2], [2, 0]];

const SUB_FACES: [&[u8]; 3] = [&[0, 1], &[1, 2], &[2, 0]];

#[rustfmt::skip]
const PATTERNS: [Option<&[u8]>; 8] = [
    // 0b000: not split.
    None,
    // 0b001: edge 0.
    Some(&[0, 3, 2,  3, 1, 2]),
    // 0b010: edge 1.
    Some(&[0, 1, 4,  0, 4, 2]),
    // 0b011: edges 0 and 1, vertex 1 isolated.
    Some(&[3, 1, 4,  0, 3, 4,  0, 4, 2]),
    // 0b100: edge 2.
    Some(&[0, 1, 5,  1, 2, 5]),
    // 0b101: edges 0 and 2, vertex 0 isolated.
    Some(&[0, 3, 5,  1, 2, 5,  1, 5, 3]),
    // 0b110: edges 1 and 2, vertex 2 isolated.
    Some(&[4, 2, 5,  0, 1, 4,  0, 4, 5]),
    // 0b111: three edges cannot have strictly opposite signs at once.
    None,
];

const PARENT_FACES: [&[u8]; 3] = [&[0, 1], &[1, 2], &[2, 0]];

const_assert_eq!(PATTERNS.len(), 1 << EDGES.len());

/// The parent edge a sub-triangle edge lies on.
///
/// The key is the pair of point identities sorted in increasing order.
fn subedge_parent(ids: &[u32]) -> Option<usize> {
    let [a, b] = ids else {
        return None;
    };

    match SortedPair::new(*a, *b).pair() {
        (0, 1) | (0, 3) | (1, 3) => Some(0),
        (1, 2) | (1, 4) | (2, 4) => Some(1),
        (0, 2) | (0, 5) | (2, 5) => Some(2),
        _ => None,
    }
}

pub(crate) static TRIANGLE_TABLES: SplitTables = SplitTables {
    n_nodes: 3,
    local_dimension: 2,
    edges: &EDGES,
    sub_faces: &SUB_FACES,
    patterns: &PATTERNS,
    parent_faces: &PARENT_FACES,
    exterior_face_parent: subedge_parent,
};
