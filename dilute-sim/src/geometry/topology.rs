use super::offsets::{Boundary, CrystalType};

/// Box extents and the flat-index <-> coordinate mapping.
///
/// Sites are indexed x-fastest: `index = x + y * size + z * size * size`,
/// with `x, y` in `[0, size)` and `z` in `[0, layers)`. `layers` may differ
/// from `size` for slab geometries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    /// Linear extent along x and y.
    pub size: usize,
    /// Extent along z.
    pub layers: usize,
    /// `size * size`.
    pub area: usize,
    /// `size * size * layers`.
    pub volume: usize,
}

impl Geometry {
    pub fn new(size: usize, layers: usize) -> Self {
        assert!(size > 0 && layers > 0, "lattice extents must be positive");
        let area = size * size;
        Self {
            size,
            layers,
            area,
            volume: area * layers,
        }
    }

    /// Decompose a flat index into `(x, y, z)`.
    #[inline]
    pub fn coordinates(&self, index: usize) -> [usize; 3] {
        let z = index / self.area;
        let rem = index - z * self.area;
        let y = rem / self.size;
        let x = rem - y * self.size;
        [x, y, z]
    }

    #[inline]
    pub fn index(&self, [x, y, z]: [usize; 3]) -> usize {
        x + y * self.size + z * self.area
    }

    /// Extent along axis `axis` (0 = x, 1 = y, 2 = z).
    #[inline]
    pub fn extent(&self, axis: usize) -> usize {
        if axis == 2 {
            self.layers
        } else {
            self.size
        }
    }
}

/// Immutable neighbor table for one crystal type and boundary mode.
///
/// Neighbor lists are stored flat: the neighbors of site `i` are
/// `neighbors[starts[i]..starts[i + 1]]`, in offset-table order. Under
/// [`Boundary::Open`] lists near the faces are shorter.
pub struct Topology {
    pub geometry: Geometry,
    pub crystal: CrystalType,
    pub boundary: Boundary,
    starts: Vec<u32>,
    neighbors: Vec<u32>,
}

impl Topology {
    pub fn new(crystal: CrystalType, boundary: Boundary, size: usize, layers: usize) -> Self {
        let geometry = Geometry::new(size, layers);
        let offsets = crystal.offsets();
        let extents = [size as i64, size as i64, layers as i64];

        let mut starts = Vec::with_capacity(geometry.volume + 1);
        let mut neighbors = Vec::with_capacity(geometry.volume * offsets.len());

        for i in 0..geometry.volume {
            starts.push(neighbors.len() as u32);
            let coords = geometry.coordinates(i);

            'offsets: for off in offsets {
                let mut target = [0usize; 3];
                for axis in 0..3 {
                    let c = coords[axis] as i64 + off[axis] as i64;
                    target[axis] = match boundary {
                        Boundary::Periodic => c.rem_euclid(extents[axis]) as usize,
                        Boundary::Open if (0..extents[axis]).contains(&c) => c as usize,
                        Boundary::Open => continue 'offsets,
                    };
                }
                neighbors.push(geometry.index(target) as u32);
            }
        }
        starts.push(neighbors.len() as u32);

        Self {
            geometry,
            crystal,
            boundary,
            starts,
            neighbors,
        }
    }

    /// Neighbors of site `i` in offset-table order.
    #[inline]
    pub fn neighbors(&self, i: usize) -> &[u32] {
        &self.neighbors[self.starts[i] as usize..self.starts[i + 1] as usize]
    }

    /// Total number of directed neighbor entries over all sites.
    pub fn n_links(&self) -> usize {
        self.neighbors.len()
    }
}
