use super::percolation::is_percolating;
use super::utils::{SiteSlots, UnionFind};
use crate::geometry::Topology;
use crate::spins::SpinField;

/// Site indices of one same-sign connected cluster.
pub type Cluster = Vec<u32>;

/// Partition of the magnetic sites into same-sign clusters.
///
/// Every cluster is stored once in [`clusters`](Self::clusters); the up, down
/// and percolating collections are index views into it, so `up` and `down`
/// are disjoint and together cover every cluster.
#[derive(Debug, Clone, Default)]
pub struct ClusterCensus {
    all: Vec<Cluster>,
    up: Vec<usize>,
    down: Vec<usize>,
    percolating: Vec<usize>,
}

impl ClusterCensus {
    pub fn clusters(&self) -> &[Cluster] {
        &self.all
    }

    pub fn up(&self) -> impl Iterator<Item = &Cluster> + '_ {
        self.up.iter().map(|&k| &self.all[k])
    }

    pub fn down(&self) -> impl Iterator<Item = &Cluster> + '_ {
        self.down.iter().map(|&k| &self.all[k])
    }

    pub fn percolating(&self) -> impl Iterator<Item = &Cluster> + '_ {
        self.percolating.iter().map(|&k| &self.all[k])
    }

    pub fn n_clusters(&self) -> usize {
        self.all.len()
    }

    pub fn n_up(&self) -> usize {
        self.up.len()
    }

    pub fn n_down(&self) -> usize {
        self.down.len()
    }

    pub fn n_percolating(&self) -> usize {
        self.percolating.len()
    }

    /// Number of sites over all clusters, i.e. the number of magnetic sites.
    pub fn total_size(&self) -> usize {
        self.all.iter().map(Vec::len).sum()
    }

    pub fn largest(&self) -> Option<&Cluster> {
        self.all.iter().max_by_key(|c| c.len())
    }
}

/// Partition the magnetic sites of `field` into same-sign clusters.
///
/// Two magnetic sites are linked when one is in the other's neighbor list and
/// both carry the same spin. Union-find state is allocated over the magnetic
/// sites only and dropped on return.
pub fn find_clusters(topology: &Topology, field: &SpinField) -> ClusterCensus {
    let spins = field.spins();
    let magnetic = field.magnetic();
    let slots = SiteSlots::new(field.volume(), magnetic);
    let mut uf = UnionFind::new(magnetic.len());

    for (a, &i) in magnetic.iter().enumerate() {
        let si = spins[i as usize];
        for &j in topology.neighbors(i as usize) {
            if spins[j as usize] != si {
                continue;
            }
            if let Some(b) = slots.get(j) {
                uf.union(a as u32, b);
            }
        }
    }

    // clusters are numbered in order of their first member in `magnetic`
    let mut cluster_of_root = vec![usize::MAX; magnetic.len()];
    let mut all: Vec<Cluster> = Vec::new();
    for (a, &i) in magnetic.iter().enumerate() {
        let root = uf.find(a as u32) as usize;
        if cluster_of_root[root] == usize::MAX {
            cluster_of_root[root] = all.len();
            all.push(Vec::new());
        }
        all[cluster_of_root[root]].push(i);
    }

    let geometry = &topology.geometry;
    let mut census = ClusterCensus::default();
    for (k, cluster) in all.iter().enumerate() {
        let sign = spins[cluster[0] as usize];
        debug_assert!(
            cluster.iter().all(|&i| spins[i as usize] == sign),
            "cluster {k} mixes spin signs"
        );
        if sign == 1 {
            census.up.push(k);
        } else {
            census.down.push(k);
        }
        if is_percolating(cluster, geometry, topology.boundary) {
            census.percolating.push(k);
        }
    }
    census.all = all;
    census
}
