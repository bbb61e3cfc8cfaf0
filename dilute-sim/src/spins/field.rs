use rand::Rng;

/// Occupancy-tracked spin field.
///
/// `spins[i]` is `+1`/`-1` on a magnetic site and `0` on a diluted one.
/// `magnetic` lists exactly the indices with non-zero spin; every mutator
/// below keeps the two in sync, so callers never touch either directly.
#[derive(Debug, Clone)]
pub struct SpinField {
    spins: Vec<i8>,
    magnetic: Vec<u32>,
}

impl SpinField {
    /// An all-diluted field of `volume` sites. Call [`initialize`](Self::initialize)
    /// before use.
    pub fn new(volume: usize) -> Self {
        Self {
            spins: vec![0; volume],
            magnetic: Vec::with_capacity(volume),
        }
    }

    /// Fresh random +-1 fill with full occupancy.
    pub fn initialize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.magnetic.clear();
        for (i, s) in self.spins.iter_mut().enumerate() {
            *s = if rng.gen::<bool>() { 1 } else { -1 };
            self.magnetic.push(i as u32);
        }
    }

    /// Full occupancy with every spin set to `sign`.
    pub fn fill(&mut self, sign: i8) {
        assert!(sign == 1 || sign == -1, "spin sign must be +1 or -1, got {sign}");
        self.spins.fill(sign);
        self.magnetic.clear();
        self.magnetic.extend(0..self.spins.len() as u32);
    }

    /// Zero out up to `count` magnetic sites, drawn uniformly without
    /// replacement. Stops early once no magnetic site is left. Returns the
    /// number of sites actually removed.
    pub fn dilute<R: Rng + ?Sized>(&mut self, count: usize, rng: &mut R) -> usize {
        if count == 0 {
            return 0;
        }
        self.resync();

        let mut removed = 0;
        while removed < count && !self.magnetic.is_empty() {
            let pos = rng.gen_range(0..self.magnetic.len());
            let site = self.magnetic.swap_remove(pos);
            self.spins[site as usize] = 0;
            removed += 1;
        }
        removed
    }

    /// Reverse the sign of every listed site. Diluted sites are left alone,
    /// so occupancy never changes.
    pub fn flip(&mut self, sites: &[u32]) {
        for &i in sites {
            self.spins[i as usize] = -self.spins[i as usize];
        }
    }

    /// Replace the whole configuration, rebuilding the occupancy list.
    pub fn set_spins(&mut self, spins: &[i8]) {
        assert_eq!(spins.len(), self.spins.len(), "spin array length mismatch");
        assert!(
            spins.iter().all(|s| (-1..=1).contains(s)),
            "spins must be -1, 0 or +1"
        );
        self.spins.copy_from_slice(spins);
        self.resync();
    }

    fn resync(&mut self) {
        self.magnetic.clear();
        self.magnetic.extend(
            self.spins
                .iter()
                .enumerate()
                .filter(|&(_, &s)| s != 0)
                .map(|(i, _)| i as u32),
        );
    }

    #[inline]
    pub fn spins(&self) -> &[i8] {
        &self.spins
    }

    #[inline]
    pub fn spin(&self, i: usize) -> i8 {
        self.spins[i]
    }

    /// Magnetic site indices, in no particular order.
    #[inline]
    pub fn magnetic(&self) -> &[u32] {
        &self.magnetic
    }

    pub fn volume(&self) -> usize {
        self.spins.len()
    }

    /// Fraction of magnetic sites.
    pub fn concentration(&self) -> f64 {
        if self.spins.is_empty() {
            return 0.0;
        }
        self.magnetic.len() as f64 / self.spins.len() as f64
    }

    /// Sum of all spins.
    pub fn magnetization(&self) -> i64 {
        self.spins.iter().map(|&s| s as i64).sum()
    }
}
