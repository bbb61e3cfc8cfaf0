pub mod results;
mod stats;

pub use results::ConcentrationSample;
pub use stats::ClusterStatistics;
