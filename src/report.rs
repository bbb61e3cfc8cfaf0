use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use dilute_sim::{ConcentrationSample, CrystalType};

/// Write one `concentration \t mean cluster count \t mean cluster size` row
/// per sample to `<dir>/clusters_<TYPE>.txt`. Returns the written path.
pub fn write_cluster_table(
    dir: &Path,
    crystal: CrystalType,
    samples: &[ConcentrationSample],
) -> std::io::Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(format!("clusters_{crystal}.txt"));
    let mut w = BufWriter::new(File::create(&path)?);
    write_rows(&mut w, samples)?;
    w.flush()?;
    Ok(path)
}

fn write_rows<W: Write>(w: &mut W, samples: &[ConcentrationSample]) -> std::io::Result<()> {
    for s in samples {
        writeln!(
            w,
            "{}\t{}\t{}",
            s.concentration, s.mean_cluster_count, s.mean_cluster_size
        )?;
    }
    Ok(())
}
