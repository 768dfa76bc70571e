/// Index of a vertex, always in `[0, vertex_count)`.
pub type VertexId = usize;

/// Edge weight. Negative values are allowed.
pub type Weight = i32;

/// Accumulated path length from the source.
pub type Distance = i64;

/// Distance of a vertex the source never reached.
///
/// Half of `i64::MAX`, so `UNREACHED + w` stays in range for any `Weight`,
/// and no real path sum (at most `vertex_count * |i32::MIN|` in magnitude)
/// can come close to it.
pub const UNREACHED: Distance = i64::MAX / 2;
