use rand::Rng;

use super::utils::grow_cluster;
use crate::geometry::Topology;
use crate::spins::SpinField;

/// Reusable buffers for [`wolff_update`], sized to the lattice volume.
pub struct WolffScratch {
    in_cluster: Vec<bool>,
    cluster: Vec<u32>,
}

impl WolffScratch {
    pub fn new(volume: usize) -> Self {
        Self {
            in_cluster: vec![false; volume],
            cluster: Vec::with_capacity(volume),
        }
    }
}

/// Single-cluster Wolff update at `temperature` with unit ferromagnetic
/// coupling.
///
/// Picks a random magnetic seed, grows a same-sign cluster with bond
/// probability `1 - exp(-2 / T)` and flips it. Diluted sites never join, so
/// occupancy is unchanged. Returns the size of the flipped cluster (0 when
/// the field has no magnetic site).
///
/// # Panics
/// If `temperature` is not strictly positive.
pub fn wolff_update<R: Rng + ?Sized>(
    topology: &Topology,
    field: &mut SpinField,
    temperature: f64,
    rng: &mut R,
    scratch: &mut WolffScratch,
) -> usize {
    assert!(
        temperature > 0.0,
        "Wolff temperature must be positive, got {temperature}"
    );
    let magnetic = field.magnetic();
    if magnetic.is_empty() {
        return 0;
    }
    let seed = magnetic[rng.gen_range(0..magnetic.len())] as usize;

    let spins = field.spins();
    let sign = spins[seed];
    let p_add = 1.0 - (-2.0 / temperature).exp();

    grow_cluster(
        topology,
        seed,
        &mut scratch.in_cluster,
        &mut scratch.cluster,
        |_, nb| spins[nb] == sign && rng.gen::<f64>() < p_add,
    );

    field.flip(&scratch.cluster);

    for &i in &scratch.cluster {
        scratch.in_cluster[i as usize] = false;
    }
    let size = scratch.cluster.len();
    scratch.cluster.clear();
    size
}
