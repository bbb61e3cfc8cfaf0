//! Concentration sweep front-end: reads a JSON configuration, runs the
//! cluster census for each requested crystal type and writes one table per
//! type.

mod cli;
mod report;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use dilute_sim::{run_concentration_sweep, Config, CrystalType, Lattice};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256StarStar;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use cli::Args;

fn main() -> Result<()> {
    color_eyre::install()?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    info!("Reading configuration from: {}", args.config.display());
    let config = Config::load(&args.config)
        .wrap_err_with(|| format!("Unable to load configuration: {}", args.config.display()))?;
    let seed = args.seed.unwrap_or(config.simulation.seed);

    for (ordinal, crystal) in args.lattice.crystals().into_iter().enumerate() {
        simulate_lattice(&config, crystal, seed.wrapping_add(ordinal as u64), &args)?;
    }
    Ok(())
}

fn simulate_lattice(config: &Config, crystal: CrystalType, seed: u64, args: &Args) -> Result<()> {
    info!(%crystal, seed, "Lattice type is {crystal}");
    let mut lattice = Lattice::new(
        crystal,
        config.lattice.boundary,
        config.lattice.size,
        config.lattice.layers(),
        Xoshiro256StarStar::seed_from_u64(seed),
    );

    let sim = &config.simulation;
    let total = sim.concentrations().len() * sim.num_configurations;
    let pb = ProgressBar::new(total as u64);
    pb.set_style(
        ProgressStyle::with_template(
            "{msg} [{bar:40}] {pos}/{len} [{elapsed_precise} < {eta_precise}, {per_sec}]",
        )?
        .progress_chars("=> "),
    );
    pb.set_message(format!("{crystal} configurations"));

    let samples = run_concentration_sweep(&mut lattice, sim, &|| pb.inc(1))
        .wrap_err_with(|| format!("Sweep failed for {crystal}"))?;
    pb.finish();

    for s in &samples {
        info!(
            concentration = s.concentration,
            clusters = s.mean_cluster_count,
            size = s.mean_cluster_size,
            largest = s.mean_largest_cluster,
            percolation = s.percolation_probability,
            "{crystal}"
        );
    }

    match report::write_cluster_table(&args.output, crystal, &samples) {
        Ok(path) => info!("Data saved to {}", path.display()),
        Err(e) => warn!("Failed to write {crystal} table to {}: {e}", args.output.display()),
    }
    Ok(())
}
