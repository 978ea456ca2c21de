//! Crosswalk loading and the in-memory offense registry.
//!
//! The registry is built exactly once from a delimited crosswalk source and
//! is read-only afterwards. It holds three views of the same data:
//!
//! - the offense list, in first-seen order, deduplicated by IUCR code;
//! - an index from IUCR code to offense;
//! - an index from lowercased ILCS citation to the offenses filed under it.
//!
//! Because no mutation API exists post-construction, a `Registry` can be
//! shared across threads without locking. Callers wanting a process-wide
//! instance can wrap [`Registry::bundled`] in a `std::sync::OnceLock`; the
//! library itself keeps no global state, so test fixtures and the bundled
//! data can coexist as separate registries.

use crate::error::{IucrError, Result};
use crate::types::Offense;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

/// The crosswalk shipped with the library, derived from the Illinois State
/// Police ILCS-to-IUCR reference tables.
const BUNDLED_CROSSWALK: &str = include_str!("../data/ilcs2iucr.csv");

/// One row of the crosswalk source, as named in its header.
///
/// The boolean columns arrive as literal tokens; `TRUE` in any letter case is
/// true and anything else is false.
#[derive(Debug, Deserialize)]
struct CrosswalkRow {
    code: String,
    offense: String,
    offense_category: String,
    ilcs_reference: String,
    index_offense: String,
    csa_mvt_without_hierarchy: String,
}

fn parse_flag(token: &str) -> bool {
    token.eq_ignore_ascii_case("TRUE")
}

impl CrosswalkRow {
    fn into_offense(self) -> (Offense, String) {
        let offense = Offense {
            code: self.code,
            description: self.offense,
            category: self.offense_category,
            is_index_offense: parse_flag(&self.index_offense),
            is_csa_mvt_without_hierarchy: parse_flag(&self.csa_mvt_without_hierarchy),
        };
        (offense, self.ilcs_reference)
    }
}

/// In-memory registry of IUCR offenses and their ILCS citations.
#[derive(Debug, Clone)]
pub struct Registry {
    /// Unique offenses, in the order first seen in the source.
    offenses: Vec<Offense>,
    /// IUCR code -> offense. Last-seen wins on duplicate codes.
    offenses_by_code: HashMap<String, Offense>,
    /// Lowercased ILCS citation -> offenses filed under that exact citation,
    /// in first-seen order. Never contains an empty list.
    citation_index: HashMap<String, Vec<Offense>>,
}

impl Registry {
    /// Build a registry from any reader yielding crosswalk CSV data.
    ///
    /// The source must carry a header row naming the columns `code, offense,
    /// offense_category, ilcs_reference, index_offense,
    /// csa_mvt_without_hierarchy` in any order. It is read once, sequentially,
    /// and not retained.
    ///
    /// Rows with an empty `ilcs_reference` are valid; they contribute an
    /// offense but no citation index entry. Re-processing an identical row is
    /// idempotent.
    ///
    /// # Errors
    ///
    /// Returns [`IucrError::Csv`] if a row is malformed or a required column
    /// is missing.
    pub fn from_reader<R: io::Read>(reader: R) -> Result<Self> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut registry = Self {
            offenses: Vec::new(),
            offenses_by_code: HashMap::new(),
            citation_index: HashMap::new(),
        };

        for row in csv_reader.deserialize::<CrosswalkRow>() {
            registry.insert_row(row?);
        }

        tracing::debug!(
            offenses = registry.offenses.len(),
            citations = registry.citation_index.len(),
            "crosswalk loaded"
        );
        Ok(registry)
    }

    /// Build a registry from a crosswalk CSV file on disk.
    ///
    /// # Errors
    ///
    /// Returns [`IucrError::Load`] if the file cannot be opened, or
    /// [`IucrError::Csv`] if its contents are malformed.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| IucrError::Load {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_reader(BufReader::new(file))
    }

    /// Build a registry from the crosswalk bundled with the library.
    ///
    /// # Errors
    ///
    /// Returns [`IucrError::Csv`] if the bundled data is malformed; this
    /// indicates a packaging defect, not a caller error.
    pub fn bundled() -> Result<Self> {
        Self::from_reader(BUNDLED_CROSSWALK.as_bytes())
    }

    fn insert_row(&mut self, row: CrosswalkRow) {
        let (offense, ilcs_reference) = row.into_offense();

        let citation = ilcs_reference.to_lowercase();
        if !citation.is_empty() {
            let entries = self.citation_index.entry(citation).or_default();
            if !entries.iter().any(|entry| entry.code == offense.code) {
                entries.push(offense.clone());
            }
        }

        match self.offenses_by_code.get(&offense.code) {
            None => {
                self.offenses.push(offense.clone());
            }
            Some(existing) => {
                if existing.description != offense.description
                    || existing.category != offense.category
                    || existing.is_index_offense != offense.is_index_offense
                    || existing.is_csa_mvt_without_hierarchy
                        != offense.is_csa_mvt_without_hierarchy
                {
                    tracing::warn!(
                        code = %offense.code,
                        "duplicate IUCR code with differing attributes, last row wins"
                    );
                }
            }
        }
        self.offenses_by_code.insert(offense.code.clone(), offense);
    }

    /// All unique offenses, in the order first seen in the source.
    pub fn offenses(&self) -> &[Offense] {
        &self.offenses
    }

    /// Look up an offense by its IUCR code.
    pub fn offense_by_code(&self, code: &str) -> Option<&Offense> {
        self.offenses_by_code.get(code)
    }

    /// Look up the offenses filed under an exact ILCS citation.
    ///
    /// The citation is lowercased before the lookup, matching the
    /// normalization applied to index keys at construction.
    pub fn offenses_for_citation(&self, citation: &str) -> Option<&[Offense]> {
        self.citation_index
            .get(&citation.to_lowercase())
            .map(Vec::as_slice)
    }

    /// Number of unique offenses in the registry.
    pub fn len(&self) -> usize {
        self.offenses.len()
    }

    /// Whether the registry holds no offenses.
    pub fn is_empty(&self) -> bool {
        self.offenses.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    const HEADER: &str =
        "code,offense,offense_category,ilcs_reference,index_offense,csa_mvt_without_hierarchy\n";

    fn registry_from(rows: &str) -> Registry {
        let data = format!("{HEADER}{rows}");
        Registry::from_reader(data.as_bytes()).expect("fixture crosswalk should load")
    }

    #[test]
    fn test_loads_rows_in_first_seen_order() {
        let registry = registry_from(
            "0110,FIRST DEGREE MURDER,HOMICIDE,720-5/9-1,TRUE,FALSE\n\
             0610,BURGLARY,BURGLARY,720-5/19-1,TRUE,FALSE\n\
             0130,SECOND DEGREE MURDER,HOMICIDE,720-5/9-2,TRUE,FALSE\n",
        );
        let codes: Vec<&str> = registry.offenses().iter().map(|o| o.code.as_str()).collect();
        assert_eq!(codes, vec!["0110", "0610", "0130"]);
    }

    #[test]
    fn test_boolean_tokens_any_case_other_tokens_false() {
        let registry = registry_from(
            "0110,FIRST DEGREE MURDER,HOMICIDE,720-5/9-1,true,False\n\
             0610,BURGLARY,BURGLARY,720-5/19-1,YES,1\n",
        );
        let murder = registry.offense_by_code("0110").expect("0110 loaded");
        assert!(murder.is_index_offense);
        assert!(!murder.is_csa_mvt_without_hierarchy);

        let burglary = registry.offense_by_code("0610").expect("0610 loaded");
        assert!(!burglary.is_index_offense);
        assert!(!burglary.is_csa_mvt_without_hierarchy);
    }

    #[test]
    fn test_duplicate_code_kept_once_in_offense_list() {
        let registry = registry_from(
            "0110,FIRST DEGREE MURDER,HOMICIDE,720-5/9-1,TRUE,FALSE\n\
             0110,FIRST DEGREE MURDER,HOMICIDE,720-5/9-1(a),TRUE,FALSE\n",
        );
        assert_eq!(registry.len(), 1);
        assert!(registry.offenses_for_citation("720-5/9-1").is_some());
        assert!(registry.offenses_for_citation("720-5/9-1(a)").is_some());
    }

    #[test]
    fn test_identical_rows_are_idempotent() {
        let registry = registry_from(
            "0910,MOTOR VEHICLE THEFT,MOTOR VEHICLE THEFT,625-5/4-103(a)(1),TRUE,TRUE\n\
             0910,MOTOR VEHICLE THEFT,MOTOR VEHICLE THEFT,625-5/4-103(a)(1),TRUE,TRUE\n",
        );
        let offenses = registry
            .offenses_for_citation("625-5/4-103(a)(1)")
            .expect("citation indexed");
        assert_eq!(offenses.len(), 1);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_citation_may_map_to_multiple_offenses_in_first_seen_order() {
        let registry = registry_from(
            "0141,INVOLUNTARY MANSLAUGHTER,HOMICIDE,720-5/9-3,TRUE,FALSE\n\
             0142,RECKLESS HOMICIDE,HOMICIDE,720-5/9-3,TRUE,FALSE\n",
        );
        let offenses = registry
            .offenses_for_citation("720-5/9-3")
            .expect("citation indexed");
        let codes: Vec<&str> = offenses.iter().map(|o| o.code.as_str()).collect();
        assert_eq!(codes, vec!["0141", "0142"]);
    }

    #[test]
    fn test_citation_keys_lowercased_at_load_and_lookup() {
        let registry = registry_from(
            "2011,MANU/DEL HEROIN,NARCOTICS,720-570/401(A)(1)(A),FALSE,FALSE\n",
        );
        assert!(registry.offenses_for_citation("720-570/401(a)(1)(a)").is_some());
        assert!(registry.offenses_for_citation("720-570/401(A)(1)(A)").is_some());
    }

    #[test]
    fn test_empty_citation_loads_offense_but_not_index() {
        let registry = registry_from("5000,OTHER OFFENSE,OTHER OFFENSE,,FALSE,FALSE\n");
        assert!(registry.offense_by_code("5000").is_some());
        assert!(registry.offenses_for_citation("").is_none());
    }

    #[test]
    fn test_missing_required_column_fails() {
        let data = "code,offense,offense_category,ilcs_reference,index_offense\n\
                    0110,FIRST DEGREE MURDER,HOMICIDE,720-5/9-1,TRUE\n";
        let err = Registry::from_reader(data.as_bytes()).unwrap_err();
        assert!(matches!(err, IucrError::Csv(_)));
    }

    #[test]
    fn test_from_path_missing_file_fails_with_load_error() {
        let err = Registry::from_path("/nonexistent/ilcs2iucr.csv").unwrap_err();
        assert!(matches!(err, IucrError::Load { .. }));
        assert!(err.to_string().contains("/nonexistent/ilcs2iucr.csv"));
    }

    #[test]
    fn test_from_path_reads_alternate_source() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(
            file,
            "{HEADER}0110,FIRST DEGREE MURDER,HOMICIDE,720-5/9-1,TRUE,FALSE\n"
        )
        .expect("write fixture");

        let registry = Registry::from_path(file.path()).expect("fixture loads");
        assert_eq!(registry.len(), 1);
        assert!(registry.offenses_for_citation("720-5/9-1").is_some());
    }

    #[test]
    fn test_bundled_crosswalk_loads() {
        let registry = Registry::bundled().expect("bundled crosswalk loads");
        assert!(!registry.is_empty());
        // Every indexed offense also appears in the offense views.
        for offenses in registry.citation_index.values() {
            assert!(!offenses.is_empty());
            for offense in offenses {
                assert!(registry.offense_by_code(&offense.code).is_some());
                assert!(registry.offenses().contains(offense));
            }
        }
    }
}
