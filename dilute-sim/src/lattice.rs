use std::sync::Arc;

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;
use tracing::debug;

use crate::clusters::{self, ClusterCensus, WolffScratch};
use crate::error::Result;
use crate::geometry::{Boundary, CrystalType, Geometry, Topology};
use crate::spins::SpinField;

/// One diluted ferromagnet: an immutable neighbor topology, the mutable spin
/// field and the random source driving it.
///
/// The topology is built once and reused by every configuration; several
/// lattices may share it through [`with_topology`](Self::with_topology).
/// Each lattice owns its RNG, so runs are reproducible from the seed alone.
pub struct Lattice<R: Rng = Xoshiro256StarStar> {
    topology: Arc<Topology>,
    field: SpinField,
    rng: R,
    scratch: WolffScratch,
}

impl Lattice<Xoshiro256StarStar> {
    /// Build a lattice from a crystal-type token (`"SC"`, `"bcc"`, ...) with
    /// a seeded xoshiro256** stream.
    pub fn from_name(
        crystal: &str,
        boundary: Boundary,
        size: usize,
        layers: usize,
        seed: u64,
    ) -> Result<Self> {
        let crystal = CrystalType::try_from(crystal)?;
        Ok(Self::new(
            crystal,
            boundary,
            size,
            layers,
            Xoshiro256StarStar::seed_from_u64(seed),
        ))
    }
}

impl<R: Rng> Lattice<R> {
    pub fn new(
        crystal: CrystalType,
        boundary: Boundary,
        size: usize,
        layers: usize,
        rng: R,
    ) -> Self {
        let topology = Topology::new(crystal, boundary, size, layers);
        debug!(
            crystal = %crystal,
            ?boundary,
            size,
            layers,
            links = topology.n_links(),
            "built neighbor topology"
        );
        Self::with_topology(Arc::new(topology), rng)
    }

    pub fn with_topology(topology: Arc<Topology>, rng: R) -> Self {
        let volume = topology.geometry.volume;
        Self {
            topology,
            field: SpinField::new(volume),
            rng,
            scratch: WolffScratch::new(volume),
        }
    }

    /// Fresh random +-1 configuration with every site magnetic.
    pub fn initialize(&mut self) {
        self.field.initialize(&mut self.rng);
    }

    /// Turn `count` random magnetic sites non-magnetic (fewer if the lattice
    /// runs out). Returns the number actually removed.
    pub fn replace_random_spins(&mut self, count: usize) -> usize {
        self.field.dilute(count, &mut self.rng)
    }

    /// Partition the current magnetic sites into same-sign clusters.
    pub fn find_clusters(&self) -> ClusterCensus {
        clusters::find_clusters(&self.topology, &self.field)
    }

    /// One Wolff cluster flip at `temperature`. Returns the flipped cluster size.
    pub fn wolff_step(&mut self, temperature: f64) -> usize {
        clusters::wolff_update(
            &self.topology,
            &mut self.field,
            temperature,
            &mut self.rng,
            &mut self.scratch,
        )
    }

    /// Overwrite the configuration with `spins` (values in {-1, 0, +1}).
    pub fn set_spins(&mut self, spins: &[i8]) {
        self.field.set_spins(spins);
    }

    /// Fully occupied configuration with every spin equal to `sign`.
    pub fn fill(&mut self, sign: i8) {
        self.field.fill(sign);
    }

    pub fn topology(&self) -> &Arc<Topology> {
        &self.topology
    }

    pub fn geometry(&self) -> &Geometry {
        &self.topology.geometry
    }

    pub fn crystal(&self) -> CrystalType {
        self.topology.crystal
    }

    pub fn boundary(&self) -> Boundary {
        self.topology.boundary
    }

    pub fn field(&self) -> &SpinField {
        &self.field
    }

    pub fn spins(&self) -> &[i8] {
        self.field.spins()
    }

    pub fn magnetic(&self) -> &[u32] {
        self.field.magnetic()
    }
}
