//! Split patterns of the 4-noded tetrahedron.
//!
//! Edges are numbered `0: (0, 1)`, `1: (0, 2)`, `2: (0, 3)`, `3: (1, 2)`, `4: (1, 3)` and
//! `5: (2, 3)`; the point synthesized on an edge has the identity `4 + edge`. Parent face `i`
//! is the face opposite to vertex `i`.
//!
//! Only the 25 bitmasks reachable with strictly opposite signs have a pattern:
//! - one split edge: the plane goes through the two other vertices, 2 sub-tetrahedra;
//! - two split edges sharing a vertex: one sub-tetrahedron around the shared vertex and a
//!   pyramid split in 2;
//! - three split edges around a vertex: one sub-tetrahedron around that vertex and a prism
//!   split in 3;
//! - four split edges: two prisms split in 3 each.
//!
//! Every quadrilateral face (pyramid base, prism side) is split along the diagonal incident
//! to its lowest local identity. All sub-tetrahedra keep the orientation of the parent.

use super::split_tables::SplitTables;

const EDGES: [[u8; 2]; 6] = [[0, 1], [0, 2], [0, 3], [1, 2], [1, 3], [2, 3]];

const SUB_FACES: [&[u8]; 4] = [&[1, 2, 3], &[0, 3, 2], &[0, 1, 3], &[0, 2, 1]];

#[rustfmt::skip]
const PATTERNS: [Option<&[u8]>; 64] = [
    None,
    // 0b000001: edge 0.
    Some(&[0, 4, 2, 3,  4, 1, 2, 3]),
    // 0b000010: edge 1.
    Some(&[0, 1, 5, 3,  5, 1, 2, 3]),
    // 0b000011: edges 0 and 1.
    Some(&[0, 4, 5, 3,  1, 2, 5, 3,  1, 5, 4, 3]),
    // 0b000100: edge 2.
    Some(&[0, 6, 1, 2,  6, 3, 1, 2]),
    // 0b000101: edges 0 and 2.
    Some(&[0, 6, 4, 2,  1, 6, 3, 2,  1, 4, 6, 2]),
    // 0b000110: edges 1 and 2.
    Some(&[0, 5, 6, 1,  2, 3, 6, 1,  2, 6, 5, 1]),
    // 0b000111: edges 0, 1 and 2.
    Some(&[0, 4, 5, 6,  1, 3, 2, 6,  1, 6, 2, 5,  1, 6, 5, 4]),
    // 0b001000: edge 3.
    Some(&[1, 7, 0, 3,  7, 2, 0, 3]),
    // 0b001001: edges 0 and 3.
    Some(&[1, 7, 4, 3,  0, 7, 2, 3,  0, 4, 7, 3]),
    // 0b001010: edges 1 and 3.
    Some(&[2, 5, 7, 3,  0, 1, 7, 3,  0, 7, 5, 3]),
    None,
    None,
    None,
    None,
    None,
    // 0b010000: edge 4.
    Some(&[1, 0, 8, 2,  8, 0, 3, 2]),
    // 0b010001: edges 0 and 4.
    Some(&[1, 4, 8, 2,  0, 3, 8, 2,  0, 8, 4, 2]),
    None,
    None,
    // 0b010100: edges 2 and 4.
    Some(&[3, 8, 6, 2,  0, 8, 1, 2,  0, 6, 8, 2]),
    None,
    None,
    None,
    // 0b011000: edges 3 and 4.
    Some(&[1, 8, 7, 0,  2, 8, 3, 0,  2, 7, 8, 0]),
    // 0b011001: edges 0, 3 and 4.
    Some(&[1, 7, 4, 8,  0, 2, 3, 8,  0, 2, 8, 7,  0, 7, 8, 4]),
    None,
    None,
    None,
    None,
    // 0b011110: edges 1, 2, 3 and 4.
    Some(&[0, 5, 6, 8,  0, 5, 8, 7,  0, 7, 8, 1,  2, 5, 7, 8,  2, 5, 8, 6,  2, 6, 8, 3]),
    None,
    // 0b100000: edge 5.
    Some(&[2, 9, 0, 1,  9, 3, 0, 1]),
    None,
    // 0b100010: edges 1 and 5.
    Some(&[2, 9, 5, 1,  0, 9, 3, 1,  0, 5, 9, 1]),
    None,
    // 0b100100: edges 2 and 5.
    Some(&[3, 6, 9, 1,  0, 2, 9, 1,  0, 9, 6, 1]),
    None,
    None,
    None,
    // 0b101000: edges 3 and 5.
    Some(&[2, 7, 9, 0,  1, 3, 9, 0,  1, 9, 7, 0]),
    None,
    // 0b101010: edges 1, 3 and 5.
    Some(&[2, 5, 7, 9,  0, 3, 1, 9,  0, 9, 1, 7,  0, 9, 7, 5]),
    None,
    None,
    // 0b101101: edges 0, 2, 3 and 5.
    Some(&[0, 6, 4, 9,  0, 9, 4, 7,  0, 9, 7, 2,  1, 7, 4, 9,  1, 9, 4, 6,  1, 9, 6, 3]),
    None,
    None,
    // 0b110000: edges 4 and 5.
    Some(&[3, 9, 8, 0,  1, 9, 2, 0,  1, 8, 9, 0]),
    None,
    None,
    // 0b110011: edges 0, 1, 4 and 5.
    Some(&[0, 4, 5, 9,  0, 4, 9, 8,  0, 8, 9, 3,  1, 4, 8, 9,  1, 4, 9, 5,  1, 5, 9, 2]),
    // 0b110100: edges 2, 4 and 5.
    Some(&[3, 8, 6, 9,  0, 1, 2, 9,  0, 1, 9, 8,  0, 8, 9, 6]),
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
];

const PARENT_FACES: [&[u8]; 4] = [&[1, 2, 3], &[0, 3, 2], &[0, 1, 3], &[0, 2, 1]];

/// For each local point, the bitmask of the parent faces it lies on.
///
/// A vertex lies on the three faces that do not oppose it; the point of an edge lies on
/// the two faces containing both ends of the edge.
#[rustfmt::skip]
const POINT_PARENT_FACES: [u8; 10] = [
    0b1110, 0b1101, 0b1011, 0b0111,
    0b1100, 0b1010, 0b0110, 0b1001, 0b0101, 0b0011,
];

const_assert_eq!(PATTERNS.len(), 1 << EDGES.len());
const_assert_eq!(POINT_PARENT_FACES.len(), 4 + EDGES.len());

/// The parent face a sub-tetrahedron face lies on.
///
/// The face lies on a parent face iff its three points lie on it.
fn subface_parent(ids: &[u32]) -> Option<usize> {
    if ids.len() != 3 {
        return None;
    }

    let mut common = 0b1111u8;
    for id in ids {
        common &= *POINT_PARENT_FACES.get(*id as usize)?;
    }

    (common != 0).then(|| common.trailing_zeros() as usize)
}

pub(crate) static TETRAHEDRON_TABLES: SplitTables = SplitTables {
    n_nodes: 4,
    local_dimension: 3,
    edges: &EDGES,
    sub_faces: &SUB_FACES,
    patterns: &PATTERNS,
    parent_faces: &PARENT_FACES,
    exterior_face_parent: subface_parent,
};
