use super::results::ConcentrationSample;
use crate::clusters::ClusterCensus;

/// Running totals of cluster observables over the configurations of one
/// concentration point.
#[derive(Debug, Default)]
pub struct ClusterStatistics {
    pub configurations: usize,
    pub clusters: usize,
    pub members: usize,
    pub up: usize,
    pub down: usize,
    pub largest: usize,
    /// Configurations with at least one percolating cluster.
    pub percolating: usize,
}

impl ClusterStatistics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, census: &ClusterCensus) {
        self.configurations += 1;
        self.clusters += census.n_clusters();
        self.members += census.total_size();
        self.up += census.n_up();
        self.down += census.n_down();
        self.largest += census.largest().map_or(0, Vec::len);
        if census.n_percolating() > 0 {
            self.percolating += 1;
        }
    }

    /// Averages per configuration. Cluster size is averaged over clusters
    /// and is 0 when no cluster was seen.
    pub fn finish(&self, concentration: f64) -> ConcentrationSample {
        let per_config = |total: usize| {
            if self.configurations == 0 {
                0.0
            } else {
                total as f64 / self.configurations as f64
            }
        };
        ConcentrationSample {
            concentration,
            mean_cluster_count: per_config(self.clusters),
            mean_cluster_size: self.members as f64 / self.clusters.max(1) as f64,
            mean_up_clusters: per_config(self.up),
            mean_down_clusters: per_config(self.down),
            mean_largest_cluster: per_config(self.largest),
            percolation_probability: per_config(self.percolating),
        }
    }
}
