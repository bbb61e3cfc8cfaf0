//! Cluster statistics and percolation of site-diluted ferromagnets on simple
//! cubic, body-centered cubic and face-centered cubic lattices.

pub mod clusters;
pub mod config;
pub mod error;
pub mod geometry;
pub mod lattice;
pub mod simulation;
pub mod spins;
pub mod statistics;

pub use clusters::{Cluster, ClusterCensus};
pub use config::{Config, LatticeConfig, SimulationConfig, WolffConfig};
pub use error::{Error, Result};
pub use geometry::{Boundary, CrystalType, Geometry, Topology};
pub use lattice::Lattice;
pub use simulation::{non_magnetic_count, run_concentration_sweep};
pub use spins::SpinField;
pub use statistics::{ClusterStatistics, ConcentrationSample};
