/// Polyline length, sampling and offset walks.
pub mod polyline;
/// Fixed-size vertex groups.
pub mod verts;
