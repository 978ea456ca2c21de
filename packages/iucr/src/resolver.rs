//! Citation and code lookups over a loaded [`Registry`].
//!
//! The resolver answers three questions:
//!
//! - which offenses are filed under an exact ILCS citation string;
//! - which offenses govern a structured chapter/act/section citation, backing
//!   off subsection-by-subsection when the most specific form is not in the
//!   crosswalk;
//! - which offense carries a given IUCR code.
//!
//! # Subsection Backoff
//!
//! Legal citations are hierarchical: a crosswalk entry at a coarser
//! subsection level (e.g. `401(a)`) governs all of its nested paragraphs
//! (e.g. `401(a)(1)(A)`) when no finer-grained entry exists. On a miss, the
//! resolver drops the rightmost subsection bit and retries, down to the bare
//! `chapter-act/section` citation. The chapter, act prefix, and section are
//! never trimmed. Backoff widens the match; it never retries a failed
//! lookup, and it terminates because the bit list strictly shrinks.
//!
//! # Example
//!
//! ```
//! use iucr_crosswalk::{IlcsResolver, Registry};
//!
//! let registry = Registry::bundled().unwrap();
//! let resolver = IlcsResolver::new(&registry);
//!
//! // 720-570/401(a)(2)(A) has no entry of its own; the crosswalk files the
//! // offense at 720-570/401(a), so backoff lands there.
//! let offenses = resolver
//!     .resolve_by_parts("720", "570", "401", &["a", "2", "A"])
//!     .unwrap();
//! assert!(offenses.iter().any(|o| o.code == "2010"));
//! ```

use crate::citation::IlcsReference;
use crate::error::{IucrError, Result};
use crate::registry::Registry;
use crate::types::Offense;

/// Resolves ILCS citations and IUCR codes against a borrowed [`Registry`].
///
/// The resolver holds no state of its own, so multiple resolvers over
/// different registries (e.g. a test fixture next to the bundled data) can
/// coexist freely.
#[derive(Debug, Clone, Copy)]
pub struct IlcsResolver<'a> {
    registry: &'a Registry,
}

impl<'a> IlcsResolver<'a> {
    /// Create a resolver over a loaded registry.
    pub fn new(registry: &'a Registry) -> Self {
        Self { registry }
    }

    /// Look up the offenses filed under a pre-composed citation string.
    ///
    /// The citation is lowercased and matched exactly; a literal citation is
    /// taken as exact, so no backoff applies.
    ///
    /// # Errors
    ///
    /// Returns [`IucrError::NotFound`] if no offense is filed under the
    /// citation.
    pub fn resolve_by_citation(&self, citation: &str) -> Result<&'a [Offense]> {
        self.registry
            .offenses_for_citation(citation)
            .ok_or_else(|| IucrError::NotFound {
                reference: citation.to_string(),
            })
    }

    /// Look up the offenses governing a structured citation, with subsection
    /// backoff.
    ///
    /// Composes `"{chapter}-{act_prefix}/{section}"` followed by each
    /// subsection bit wrapped in parentheses, then looks it up. On a miss the
    /// rightmost bit is dropped and the lookup retried; the bare
    /// `chapter-act/section` citation is the terminal case tried before
    /// giving up.
    ///
    /// # Errors
    ///
    /// - [`IucrError::InvalidArgument`] if chapter, act prefix, or section is
    ///   empty; a citation cannot be composed from a partial component set.
    /// - [`IucrError::NotFound`] if no backoff level matches. The error
    ///   carries the citation as originally requested.
    pub fn resolve_by_parts(
        &self,
        chapter: &str,
        act_prefix: &str,
        section: &str,
        subsection_bits: &[&str],
    ) -> Result<&'a [Offense]> {
        if chapter.is_empty() || act_prefix.is_empty() || section.is_empty() {
            return Err(IucrError::InvalidArgument(
                "chapter, act prefix, and section are all required".to_string(),
            ));
        }

        let mut reference = IlcsReference::new(chapter, act_prefix, section);
        for bit in subsection_bits {
            reference = reference.with_bit(*bit);
        }
        let requested = reference.to_string();

        loop {
            if let Some(offenses) = self.registry.offenses_for_citation(&reference.normalized()) {
                return Ok(offenses);
            }
            match reference.pop_bit() {
                Some(bit) => {
                    tracing::debug!(
                        requested = %requested,
                        dropped = %bit,
                        retrying = %reference,
                        "citation miss, backing off by subsection"
                    );
                }
                None => {
                    return Err(IucrError::NotFound {
                        reference: requested,
                    })
                }
            }
        }
    }

    /// Look up an offense by its IUCR code.
    ///
    /// Codes are atomic identifiers, not hierarchical, so no backoff applies.
    ///
    /// # Errors
    ///
    /// Returns [`IucrError::CodeNotFound`] if no offense has the code.
    pub fn resolve_by_code(&self, code: &str) -> Result<&'a Offense> {
        self.registry
            .offense_by_code(code)
            .ok_or_else(|| IucrError::CodeNotFound {
                code: code.to_string(),
            })
    }

    /// Dispatching lookup matching the historical crosswalk API.
    ///
    /// With only the first argument supplied, it is treated as a pre-composed
    /// citation string and matched exactly. With `act_prefix` and `section`
    /// both supplied, the first argument is the chapter and the structured
    /// form with subsection backoff applies.
    ///
    /// # Errors
    ///
    /// Returns [`IucrError::InvalidArgument`] for a partial component set:
    /// only one of `act_prefix`/`section` supplied, or subsection bits given
    /// alongside a pre-composed citation string.
    pub fn lookup_by_ilcs(
        &self,
        chapter_or_reference: &str,
        act_prefix: Option<&str>,
        section: Option<&str>,
        subsection_bits: &[&str],
    ) -> Result<&'a [Offense]> {
        match (act_prefix, section) {
            (Some(act_prefix), Some(section)) => {
                self.resolve_by_parts(chapter_or_reference, act_prefix, section, subsection_bits)
            }
            (None, None) => {
                if !subsection_bits.is_empty() {
                    return Err(IucrError::InvalidArgument(
                        "subsection bits require an act prefix and section".to_string(),
                    ));
                }
                self.resolve_by_citation(chapter_or_reference)
            }
            _ => Err(IucrError::InvalidArgument(
                "specify an ILCS reference, or a chapter, act prefix, and section".to_string(),
            )),
        }
    }

    /// Alias for [`resolve_by_code`](Self::resolve_by_code), matching the
    /// historical crosswalk API.
    ///
    /// # Errors
    ///
    /// Returns [`IucrError::CodeNotFound`] if no offense has the code.
    pub fn lookup_by_code(&self, code: &str) -> Result<&'a Offense> {
        self.resolve_by_code(code)
    }
}
