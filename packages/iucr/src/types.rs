//! Core data types for the IUCR crosswalk.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A criminal offense in the Illinois Uniform Crime Reporting (IUCR) scheme.
///
/// One `Offense` corresponds to one row of the ILCS-to-IUCR crosswalk.
///
/// # Identity
///
/// The IUCR code is the primary key: equality, ordering, and hashing are
/// defined solely on [`code`](Offense::code). Two records with the same code
/// are interchangeable, and ordering is lexicographic on the code string.
/// The remaining fields are descriptive payload and never participate in
/// comparisons.
#[derive(Debug, Clone)]
pub struct Offense {
    /// 4-character IUCR code (e.g. "0110").
    pub code: String,

    /// Human-readable description of the offense.
    pub description: String,

    /// Category the offense is grouped under (e.g. "HOMICIDE").
    pub category: String,

    /// Whether the offense is an index offense.
    pub is_index_offense: bool,

    /// Whether the offense is a Criminal Sexual Assault (CSA) or Motor
    /// Vehicle Theft (MVT) without the hierarchy rule applied.
    pub is_csa_mvt_without_hierarchy: bool,
}

impl PartialEq for Offense {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Eq for Offense {}

impl PartialOrd for Offense {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Offense {
    fn cmp(&self, other: &Self) -> Ordering {
        self.code.cmp(&other.code)
    }
}

// Consistent with the code-only equality above.
impl Hash for Offense {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code.hash(state);
    }
}

impl fmt::Display for Offense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}
