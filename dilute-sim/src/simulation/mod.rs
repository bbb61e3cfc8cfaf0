use rand::Rng;
use tracing::{debug, info};
use validator::Validate;

use crate::config::SimulationConfig;
use crate::error::Result;
use crate::lattice::Lattice;
use crate::statistics::{ClusterStatistics, ConcentrationSample};

/// Number of sites to dilute so that a fraction `concentration` stays magnetic.
pub fn non_magnetic_count(concentration: f64, volume: usize) -> usize {
    // the epsilon keeps e.g. (1 - 0.95) * 8000 from rounding up to 401
    let count = ((1.0 - concentration) * volume as f64 - 1e-9).ceil();
    (count.max(0.0) as usize).min(volume)
}

/// Run the concentration sweep for one lattice.
///
/// For every concentration point, each configuration is:
/// 1. a fresh random +-1 fill,
/// 2. dilution down to the target concentration,
/// 3. optional Wolff relaxation (`config.wolff`),
/// 4. a cluster census, accumulated into the point's statistics.
///
/// `on_configuration` is called once per configuration (useful for progress
/// bars).
pub fn run_concentration_sweep<R: Rng>(
    lattice: &mut Lattice<R>,
    config: &SimulationConfig,
    on_configuration: &dyn Fn(),
) -> Result<Vec<ConcentrationSample>> {
    config.validate()?;

    let volume = lattice.geometry().volume;
    let concentrations = config.concentrations();
    info!(
        crystal = %lattice.crystal(),
        points = concentrations.len(),
        configurations = config.num_configurations,
        volume,
        "starting concentration sweep"
    );

    let mut samples = Vec::with_capacity(concentrations.len());
    for &concentration in &concentrations {
        let to_dilute = non_magnetic_count(concentration, volume);
        let mut stats = ClusterStatistics::new();

        for _ in 0..config.num_configurations {
            on_configuration();
            lattice.initialize();
            lattice.replace_random_spins(to_dilute);
            if let Some(wolff) = config.wolff {
                for _ in 0..wolff.steps {
                    lattice.wolff_step(wolff.temperature);
                }
            }
            stats.update(&lattice.find_clusters());
        }

        let sample = stats.finish(concentration);
        debug!(
            concentration,
            clusters = sample.mean_cluster_count,
            size = sample.mean_cluster_size,
            percolation = sample.percolation_probability,
            "concentration point done"
        );
        samples.push(sample);
    }
    Ok(samples)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Boundary;
    use std::cell::Cell;

    fn sim_config(initial: f64, last: f64, step: f64, n: usize) -> SimulationConfig {
        SimulationConfig {
            initial_concentration: initial,
            final_concentration: last,
            concentration_step: step,
            num_configurations: n,
            seed: 0,
            wolff: None,
        }
    }

    #[test]
    fn test_non_magnetic_count() {
        assert_eq!(non_magnetic_count(1.0, 1000), 0);
        assert_eq!(non_magnetic_count(0.0, 1000), 1000);
        assert_eq!(non_magnetic_count(0.95, 8000), 400);
        assert_eq!(non_magnetic_count(0.5, 27), 14);
    }

    #[test]
    fn test_sweep_shape_and_callbacks() {
        let mut lattice = Lattice::from_name("SC", Boundary::Periodic, 4, 4, 5).unwrap();
        let calls = Cell::new(0usize);
        let config = sim_config(0.2, 1.0, 0.2, 3);
        let samples =
            run_concentration_sweep(&mut lattice, &config, &|| calls.set(calls.get() + 1))
                .unwrap();

        assert_eq!(samples.len(), 5);
        assert_eq!(calls.get(), 15);

        // full occupancy: the clusters of each configuration tile all 64 sites
        let full = samples.last().unwrap();
        assert!((full.concentration - 1.0).abs() < 1e-9);
        assert!(
            (full.mean_cluster_count * full.mean_cluster_size - 64.0).abs() < 1e-9
        );
    }

    #[test]
    fn test_empty_lattice_point() {
        let mut lattice = Lattice::from_name("FCC", Boundary::Open, 3, 3, 1).unwrap();
        let samples = run_concentration_sweep(&mut lattice, &sim_config(0.0, 0.0, 0.1, 2), &|| {})
            .unwrap();
        assert_eq!(samples.len(), 1);
        assert_eq!(samples[0].mean_cluster_count, 0.0);
        assert_eq!(samples[0].mean_cluster_size, 0.0);
        assert_eq!(samples[0].percolation_probability, 0.0);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let mut lattice = Lattice::from_name("SC", Boundary::Open, 3, 3, 1).unwrap();
        let config = sim_config(0.8, 0.2, 0.1, 1);
        assert!(run_concentration_sweep(&mut lattice, &config, &|| {}).is_err());
    }
}
