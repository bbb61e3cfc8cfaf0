use crate::geometry::{Boundary, Geometry};

/// Whether `cluster` spans the lattice along at least one axis.
///
/// Clusters smaller than `min(layers, size)` are rejected outright.
/// * [`Boundary::Open`]: some axis has both its lower face (coordinate 0) and
///   its upper face (coordinate `extent - 1`) touched, not necessarily by the
///   same member.
/// * [`Boundary::Periodic`]: the cluster occupies every coordinate value along
///   some axis. This is necessary for wrapping around but does not prove that
///   the two ends of the axis are joined through the cluster.
pub fn is_percolating(cluster: &[u32], geometry: &Geometry, boundary: Boundary) -> bool {
    if cluster.len() < geometry.layers.min(geometry.size) {
        return false;
    }
    match boundary {
        Boundary::Open => touches_opposite_faces(cluster, geometry),
        Boundary::Periodic => covers_some_axis(cluster, geometry),
    }
}

fn touches_opposite_faces(cluster: &[u32], geometry: &Geometry) -> bool {
    let mut lower = [false; 3];
    let mut upper = [false; 3];
    for &i in cluster {
        let coords = geometry.coordinates(i as usize);
        for axis in 0..3 {
            lower[axis] |= coords[axis] == 0;
            upper[axis] |= coords[axis] == geometry.extent(axis) - 1;
            if lower[axis] && upper[axis] {
                return true;
            }
        }
    }
    false
}

fn covers_some_axis(cluster: &[u32], geometry: &Geometry) -> bool {
    let mut seen: [Vec<bool>; 3] = std::array::from_fn(|axis| vec![false; geometry.extent(axis)]);
    let mut distinct = [0usize; 3];
    for &i in cluster {
        let coords = geometry.coordinates(i as usize);
        for axis in 0..3 {
            if !seen[axis][coords[axis]] {
                seen[axis][coords[axis]] = true;
                distinct[axis] += 1;
            }
            if distinct[axis] == geometry.extent(axis) {
                return true;
            }
        }
    }
    false
}
