use std::collections::HashMap;

use crate::{algo::float_hash::hash_vec3, geometry::traits::RealNumber, helpers::aliases::Vec3};

pub struct IndexedVertices<S: RealNumber> {
    /// Unique points
    pub points: Vec<Vec3<S>>,
    /// Vertex indices
    pub indices: Vec<usize>,
}

/// Merges exactly coincident points, bucketing by [`hash_vec3`] and falling back to
/// exact equality within a bucket.
pub fn merge_points<S: RealNumber>(points: impl Iterator<Item = Vec3<S>>) -> IndexedVertices<S> {
    let num_points = points.size_hint().1.unwrap_or(0);
    let num_unique_vertices = num_points / 3; // Just a guess
    let mut buckets: HashMap<i32, Vec<usize>> = HashMap::with_capacity(num_unique_vertices);

    let mut indices = Vec::with_capacity(num_points);
    let mut merged_vertices: Vec<Vec3<S>> = Vec::with_capacity(num_unique_vertices);

    for vertex in points {
        let hash = hash_vec3(&vertex);
        let bucket = buckets.entry(hash).or_default();

        let existing = bucket
            .iter()
            .find(|&&idx| merged_vertices[idx] == vertex)
            .copied();

        match existing {
            Some(idx) => indices.push(idx),
            None => {
                let idx = merged_vertices.len();
                merged_vertices.push(vertex);
                bucket.push(idx);
                indices.push(idx);
            }
        }
    }

    IndexedVertices {
        indices,
        points: merged_vertices,
    }
}

#[cfg(test)]
mod tests {
    use crate::helpers::aliases::Vec3;

    use super::merge_points;

    #[test]
    fn dedups_coincident_points() {
        let points = vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
        ];

        let merged = merge_points(points.into_iter());

        assert_eq!(merged.points.len(), 3);
        assert_eq!(merged.indices, vec![0, 1, 0, 2, 1]);
    }
}
