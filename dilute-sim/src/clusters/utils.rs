use crate::geometry::Topology;

// --- Union-Find ---
//
// Slots are dense `0..n` indices, not site indices: callers map each active
// site to a slot through `SiteSlots`, so diluted sites never own an entry.

pub(crate) struct UnionFind {
    parent: Vec<u32>,
    rank: Vec<u8>,
}

impl UnionFind {
    pub(crate) fn new(n: usize) -> Self {
        Self {
            parent: (0..n as u32).collect(),
            rank: vec![1; n],
        }
    }

    /// Root of `x`, halving the path on the way up.
    #[inline]
    pub(crate) fn find(&mut self, mut x: u32) -> u32 {
        while self.parent[x as usize] != x {
            self.parent[x as usize] = self.parent[self.parent[x as usize] as usize];
            x = self.parent[x as usize];
        }
        x
    }

    /// Merge the sets of `a` and `b` by rank. On a tie `b`'s root goes under
    /// `a`'s root.
    #[inline]
    pub(crate) fn union(&mut self, a: u32, b: u32) {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra == rb {
            return;
        }
        if self.rank[ra as usize] < self.rank[rb as usize] {
            self.parent[ra as usize] = rb;
        } else {
            self.parent[rb as usize] = ra;
            if self.rank[ra as usize] == self.rank[rb as usize] {
                self.rank[ra as usize] += 1;
            }
        }
    }
}

/// Site index -> dense slot for a subset of lattice sites.
pub(crate) struct SiteSlots {
    slots: Vec<u32>,
}

impl SiteSlots {
    const VACANT: u32 = u32::MAX;

    /// Slot `k` is assigned to `sites[k]`.
    pub(crate) fn new(volume: usize, sites: &[u32]) -> Self {
        let mut slots = vec![Self::VACANT; volume];
        for (k, &site) in sites.iter().enumerate() {
            slots[site as usize] = k as u32;
        }
        Self { slots }
    }

    #[inline]
    pub(crate) fn get(&self, site: u32) -> Option<u32> {
        match self.slots[site as usize] {
            Self::VACANT => None,
            slot => Some(slot),
        }
    }
}

/// Grow a cluster breadth-first from `seed`. `should_add(site, neighbor)`
/// decides whether each not-yet-visited neighbor joins; it is called once per
/// candidate edge.
///
/// Caller owns buffers: `in_cluster` must be all-false, `cluster` must be
/// empty. On return `cluster` holds the members in discovery order and
/// `in_cluster` marks them.
#[inline]
pub(crate) fn grow_cluster(
    topology: &Topology,
    seed: usize,
    in_cluster: &mut [bool],
    cluster: &mut Vec<u32>,
    mut should_add: impl FnMut(usize, usize) -> bool,
) {
    in_cluster[seed] = true;
    cluster.push(seed as u32);

    let mut head = 0;
    while head < cluster.len() {
        let site = cluster[head] as usize;
        head += 1;
        for &nb in topology.neighbors(site) {
            let nb = nb as usize;
            if !in_cluster[nb] && should_add(site, nb) {
                in_cluster[nb] = true;
                cluster.push(nb as u32);
            }
        }
    }
}
