use std::collections::HashSet;

use dilute_sim::clusters::is_percolating;
use dilute_sim::{Boundary, CrystalType, Lattice, Topology};
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256StarStar;

fn lattice(crystal: CrystalType, boundary: Boundary, size: usize, seed: u64) -> Lattice {
    Lattice::new(
        crystal,
        boundary,
        size,
        size,
        Xoshiro256StarStar::seed_from_u64(seed),
    )
}

#[test]
fn periodic_coordination_matches_crystal() {
    for (crystal, z) in [
        (CrystalType::Sc, 6),
        (CrystalType::Bcc, 8),
        (CrystalType::Fcc, 12),
    ] {
        for size in [3, 4, 7] {
            let topo = Topology::new(crystal, Boundary::Periodic, size, size);
            assert!((0..topo.geometry.volume).all(|i| topo.neighbors(i).len() == z));
            assert_eq!(topo.n_links(), z * topo.geometry.volume);
        }
    }
}

#[test]
fn open_boundary_truncates_edges() {
    for crystal in CrystalType::ALL {
        let open = Topology::new(crystal, Boundary::Open, 5, 5);
        let periodic = Topology::new(crystal, Boundary::Periodic, 5, 5);
        let interior = open.geometry.index([2, 2, 2]);
        let corner = open.geometry.index([4, 4, 4]);
        assert_eq!(open.neighbors(interior).len(), crystal.coordination());
        assert!(open.neighbors(corner).len() < open.neighbors(interior).len());
        assert!(open.n_links() < periodic.n_links());
    }
}

#[test]
fn clusters_partition_magnetic_sites() {
    for crystal in CrystalType::ALL {
        for boundary in [Boundary::Open, Boundary::Periodic] {
            let mut lat = lattice(crystal, boundary, 6, 17);
            lat.initialize();
            lat.replace_random_spins(80);
            let census = lat.find_clusters();

            let mut seen = HashSet::new();
            for cluster in census.clusters() {
                let sign = lat.spins()[cluster[0] as usize];
                for &i in cluster {
                    assert!(seen.insert(i), "site {i} appears in two clusters");
                    assert_eq!(lat.spins()[i as usize], sign);
                }
            }
            let magnetic: HashSet<u32> = lat.magnetic().iter().copied().collect();
            assert_eq!(seen, magnetic);
            assert_eq!(census.n_clusters(), census.n_up() + census.n_down());
            assert_eq!(census.total_size(), 216 - 80);

            // percolating clusters are a subset of all clusters
            for cluster in census.percolating() {
                assert!(census.clusters().contains(cluster));
                assert!(is_percolating(cluster, lat.geometry(), boundary));
            }
        }
    }
}

#[test]
fn clusters_are_maximal() {
    // no two same-sign neighbors may end up in different clusters
    let mut lat = lattice(CrystalType::Fcc, Boundary::Periodic, 5, 23);
    lat.initialize();
    lat.replace_random_spins(40);
    let census = lat.find_clusters();

    let mut cluster_of = vec![usize::MAX; lat.geometry().volume];
    for (k, cluster) in census.clusters().iter().enumerate() {
        for &i in cluster {
            cluster_of[i as usize] = k;
        }
    }
    let spins = lat.spins();
    for &i in lat.magnetic() {
        for &j in lat.topology().neighbors(i as usize) {
            if spins[j as usize] == spins[i as usize] {
                assert_eq!(cluster_of[i as usize], cluster_of[j as usize]);
            }
        }
    }
}

#[test]
fn uniform_cube_is_one_spanning_cluster() {
    for boundary in [Boundary::Periodic, Boundary::Open] {
        let mut lat = lattice(CrystalType::Sc, boundary, 3, 0);
        lat.fill(1);
        let census = lat.find_clusters();
        assert_eq!(census.n_clusters(), 1);
        assert_eq!(census.clusters()[0].len(), 27);
        assert_eq!(census.n_up(), 1);
        assert_eq!(census.n_percolating(), 1);
    }
}

#[test]
fn dilution_samples_without_replacement() {
    let mut lat = lattice(CrystalType::Bcc, Boundary::Periodic, 5, 3);
    lat.initialize();
    assert_eq!(lat.magnetic().len(), 125);

    assert_eq!(lat.replace_random_spins(0), 0);
    assert_eq!(lat.magnetic().len(), 125);

    assert_eq!(lat.replace_random_spins(25), 25);
    let zeroed: HashSet<usize> = (0..125).filter(|&i| lat.spins()[i] == 0).collect();
    assert_eq!(zeroed.len(), 25);

    assert_eq!(lat.replace_random_spins(50), 50);
    assert_eq!(lat.magnetic().len(), 50);
    // earlier vacancies stay vacant
    assert!(zeroed.iter().all(|&i| lat.spins()[i] == 0));
}

#[test]
fn wolff_preserves_occupancy_and_flips_a_connected_cluster() {
    let mut lat = lattice(CrystalType::Sc, Boundary::Periodic, 6, 31);
    lat.initialize();
    lat.replace_random_spins(60);
    let occupied: Vec<u32> = {
        let mut m = lat.magnetic().to_vec();
        m.sort_unstable();
        m
    };

    for _ in 0..20 {
        let before = lat.spins().to_vec();
        let size = lat.wolff_step(2.0);
        let after = lat.spins();

        let flipped: Vec<usize> = (0..before.len()).filter(|&i| before[i] != after[i]).collect();
        assert_eq!(flipped.len(), size);
        assert!(size >= 1);

        let sign = before[flipped[0]];
        assert!(flipped.iter().all(|&i| before[i] == sign && after[i] == -sign));

        // flipped set is connected through same-sign links
        let members: HashSet<usize> = flipped.iter().copied().collect();
        let mut reached = HashSet::from([flipped[0]]);
        let mut queue = vec![flipped[0]];
        while let Some(i) = queue.pop() {
            for &j in lat.topology().neighbors(i) {
                let j = j as usize;
                if members.contains(&j) && reached.insert(j) {
                    queue.push(j);
                }
            }
        }
        assert_eq!(reached, members);

        let mut now = lat.magnetic().to_vec();
        now.sort_unstable();
        assert_eq!(now, occupied);
        assert!(lat.spins().iter().all(|&s| s.abs() <= 1));
    }
}

#[test]
fn seeded_runs_are_reproducible() {
    let run = || {
        let mut lat = lattice(CrystalType::Fcc, Boundary::Open, 5, 2024);
        let mut history = Vec::new();
        for _ in 0..3 {
            lat.initialize();
            lat.replace_random_spins(30);
            lat.wolff_step(3.0);
            history.push((lat.spins().to_vec(), lat.find_clusters().clusters().to_vec()));
        }
        history
    };
    assert_eq!(run(), run());
}
