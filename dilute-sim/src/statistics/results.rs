/// Cluster observables averaged over the configurations of one magnetic-site
/// concentration.
#[derive(Debug, Clone, PartialEq)]
pub struct ConcentrationSample {
    /// Fraction of magnetic sites.
    pub concentration: f64,
    /// Clusters per configuration.
    pub mean_cluster_count: f64,
    /// Sites per cluster, pooled over all configurations.
    pub mean_cluster_size: f64,
    pub mean_up_clusters: f64,
    pub mean_down_clusters: f64,
    /// Size of the largest cluster per configuration.
    pub mean_largest_cluster: f64,
    /// Fraction of configurations holding a percolating cluster.
    pub percolation_probability: f64,
}
