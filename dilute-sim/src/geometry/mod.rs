pub mod offsets;
pub mod topology;

pub use offsets::{Boundary, CrystalType, Offset};
pub use topology::{Geometry, Topology};
