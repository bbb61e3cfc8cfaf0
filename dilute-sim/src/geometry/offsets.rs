use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Neighbor displacement in lattice coordinates `(dx, dy, dz)`.
pub type Offset = [i32; 3];

const SC: [Offset; 6] = [
    [1, 0, 0],
    [-1, 0, 0],
    [0, 1, 0],
    [0, -1, 0],
    [0, 0, 1],
    [0, 0, -1],
];

const BCC: [Offset; 8] = [
    [1, 0, 0],
    [-1, 0, 0],
    [0, 1, 0],
    [0, -1, 0],
    [0, 0, 1],
    [0, 0, -1],
    [1, 1, 1],
    [-1, -1, -1],
];

const FCC: [Offset; 12] = [
    [1, 0, 0],
    [-1, 0, 0],
    [0, 1, 0],
    [0, -1, 0],
    [1, 1, 0],
    [-1, -1, 0],
    [1, 0, 1],
    [-1, 0, -1],
    [0, 1, 1],
    [0, -1, -1],
    [0, 0, 1],
    [0, 0, -1],
];

/// Crystal structure selecting the neighbor shell of every site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CrystalType {
    Sc,
    Bcc,
    Fcc,
}

impl CrystalType {
    pub const ALL: [CrystalType; 3] = [Self::Sc, Self::Bcc, Self::Fcc];

    /// Offset table in the order neighbor lists are built.
    pub fn offsets(&self) -> &'static [Offset] {
        match self {
            Self::Sc => &SC,
            Self::Bcc => &BCC,
            Self::Fcc => &FCC,
        }
    }

    /// Number of neighbors of a site with no boundary truncation.
    pub fn coordination(&self) -> usize {
        self.offsets().len()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sc => "SC",
            Self::Bcc => "BCC",
            Self::Fcc => "FCC",
        }
    }
}

impl TryFrom<&str> for CrystalType {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.to_ascii_lowercase().as_str() {
            "sc" => Ok(Self::Sc),
            "bcc" => Ok(Self::Bcc),
            "fcc" => Ok(Self::Fcc),
            _ => Err(Error::UnknownCrystalType(s.to_string())),
        }
    }
}

impl FromStr for CrystalType {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}

impl fmt::Display for CrystalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How neighbor candidates outside the box are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Boundary {
    /// Out-of-range candidates are dropped; edge sites have fewer neighbors.
    Open,
    /// Coordinates wrap modulo the extent along each axis.
    #[default]
    Periodic,
}

impl Boundary {
    pub fn is_periodic(&self) -> bool {
        matches!(self, Self::Periodic)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(CrystalType::try_from("sc").unwrap(), CrystalType::Sc);
        assert_eq!(CrystalType::try_from("BCC").unwrap(), CrystalType::Bcc);
        assert_eq!("Fcc".parse::<CrystalType>().unwrap(), CrystalType::Fcc);
    }

    #[test]
    fn test_unknown_crystal_type() {
        let err = CrystalType::try_from("hcp").unwrap_err();
        assert!(matches!(err, Error::UnknownCrystalType(ref s) if s == "hcp"));
    }

    #[test]
    fn test_offsets_are_distinct_unit_steps() {
        for crystal in CrystalType::ALL {
            let offs = crystal.offsets();
            for (a, off) in offs.iter().enumerate() {
                assert!(off.iter().all(|c| (-1..=1).contains(c)));
                assert_ne!(*off, [0, 0, 0]);
                for other in &offs[a + 1..] {
                    assert_ne!(off, other, "{crystal}: duplicate offset {off:?}");
                }
            }
        }
        assert_eq!(CrystalType::Sc.coordination(), 6);
        assert_eq!(CrystalType::Bcc.coordination(), 8);
        assert_eq!(CrystalType::Fcc.coordination(), 12);
    }
}
