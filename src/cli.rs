use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use dilute_sim::CrystalType;

/// Cluster statistics of site-diluted SC/BCC/FCC ferromagnets
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the JSON configuration file
    #[arg(short, long, default_value = "data/configs/default.json")]
    pub config: PathBuf,

    /// Crystal type to simulate
    #[arg(short, long, value_enum, ignore_case = true, default_value_t = LatticeChoice::All)]
    pub lattice: LatticeChoice,

    /// Directory receiving clusters_<TYPE>.txt
    #[arg(short, long, default_value = "data/output_txt")]
    pub output: PathBuf,

    /// Override the configured RNG seed
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "UPPER")]
pub enum LatticeChoice {
    Sc,
    Bcc,
    Fcc,
    All,
}

impl LatticeChoice {
    pub fn crystals(&self) -> Vec<CrystalType> {
        match self {
            Self::Sc => vec![CrystalType::Sc],
            Self::Bcc => vec![CrystalType::Bcc],
            Self::Fcc => vec![CrystalType::Fcc],
            Self::All => CrystalType::ALL.to_vec(),
        }
    }
}
