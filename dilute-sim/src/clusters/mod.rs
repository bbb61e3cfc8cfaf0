pub mod census;
pub mod percolation;
mod utils;
pub mod wolff;

pub use census::{find_clusters, Cluster, ClusterCensus};
pub use percolation::is_percolating;
pub use wolff::{wolff_update, WolffScratch};
