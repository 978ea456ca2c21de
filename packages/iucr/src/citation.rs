//! ILCS citation composition and parsing.
//!
//! An Illinois Compiled Statutes (ILCS) citation identifies a statute section,
//! optionally narrowed down to nested subsections and paragraphs:
//!
//! ```text
//! {chapter}-{act_prefix}/{section}[(bit)(bit)...]
//! ```
//!
//! For example `720-570/401(a)(1)(A)` is chapter 720, act prefix 570,
//! section 401, subsection bits `a`, `1`, `A`. The chapter, act prefix, and
//! section identify the statute itself; the parenthesized bits are
//! subdivisions of it, ordered from coarsest to finest.
//!
//! # Examples
//!
//! ```
//! use iucr_crosswalk::IlcsReference;
//!
//! // Build a reference from components
//! let reference = IlcsReference::new("720", "570", "401")
//!     .with_bit("a")
//!     .with_bit("1");
//! assert_eq!(reference.to_string(), "720-570/401(a)(1)");
//!
//! // Parse one back from a string
//! let parsed = IlcsReference::parse("720-570/401(a)(1)").unwrap();
//! assert_eq!(parsed, reference);
//! assert_eq!(parsed.subsection_bits(), ["a", "1"]);
//! ```

use crate::error::{IucrError, Result};
use std::fmt;

/// A structured ILCS citation: chapter, act prefix, section, and zero or more
/// subsection/paragraph bits in coarsest-to-finest order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IlcsReference {
    chapter: String,
    act_prefix: String,
    section: String,
    subsection_bits: Vec<String>,
}

impl IlcsReference {
    /// Create a reference to a bare statute section, with no subsection bits.
    pub fn new(
        chapter: impl Into<String>,
        act_prefix: impl Into<String>,
        section: impl Into<String>,
    ) -> Self {
        Self {
            chapter: chapter.into(),
            act_prefix: act_prefix.into(),
            section: section.into(),
            subsection_bits: Vec::new(),
        }
    }

    /// Append a subsection or paragraph bit, one nesting level finer than the
    /// bits already present.
    #[must_use]
    pub fn with_bit(mut self, bit: impl Into<String>) -> Self {
        self.subsection_bits.push(bit.into());
        self
    }

    /// Parse a citation string into components.
    ///
    /// This is the inverse of [`Display`](fmt::Display): the `chapter-act`
    /// pair before the first `/`, the section up to the first `(`, then each
    /// parenthesized bit in order.
    ///
    /// # Errors
    ///
    /// Returns [`IucrError::InvalidCitation`] if the string does not have the
    /// `chapter-act/section` shape or the subsection bits are not a sequence
    /// of balanced `(bit)` groups.
    ///
    /// # Examples
    ///
    /// ```
    /// use iucr_crosswalk::IlcsReference;
    ///
    /// let reference = IlcsReference::parse("625-5/4-103(a)(1)").unwrap();
    /// assert_eq!(reference.chapter(), "625");
    /// assert_eq!(reference.act_prefix(), "5");
    /// assert_eq!(reference.section(), "4-103");
    /// assert_eq!(reference.subsection_bits(), ["a", "1"]);
    ///
    /// assert!(IlcsReference::parse("not a citation").is_err());
    /// ```
    pub fn parse(citation: &str) -> Result<Self> {
        let invalid = || IucrError::InvalidCitation(citation.to_string());

        let (statute, rest) = citation.split_once('/').ok_or_else(invalid)?;
        let (chapter, act_prefix) = statute.split_once('-').ok_or_else(invalid)?;

        let (section, mut bits_part) = match rest.find('(') {
            Some(pos) => rest.split_at(pos),
            None => (rest, ""),
        };

        if chapter.is_empty() || act_prefix.is_empty() || section.is_empty() {
            return Err(invalid());
        }

        let mut subsection_bits = Vec::new();
        while !bits_part.is_empty() {
            let inner = bits_part.strip_prefix('(').ok_or_else(invalid)?;
            let (bit, rest) = inner.split_once(')').ok_or_else(invalid)?;
            if bit.is_empty() {
                return Err(invalid());
            }
            subsection_bits.push(bit.to_string());
            bits_part = rest;
        }

        Ok(Self {
            chapter: chapter.to_string(),
            act_prefix: act_prefix.to_string(),
            section: section.to_string(),
            subsection_bits,
        })
    }

    /// Get the chapter number (e.g. "720").
    pub fn chapter(&self) -> &str {
        &self.chapter
    }

    /// Get the act prefix number (e.g. "570").
    pub fn act_prefix(&self) -> &str {
        &self.act_prefix
    }

    /// Get the section number within the chapter and act (e.g. "9-1").
    pub fn section(&self) -> &str {
        &self.section
    }

    /// Get the subsection bits, coarsest first.
    pub fn subsection_bits(&self) -> &[String] {
        &self.subsection_bits
    }

    /// Remove and return the finest (rightmost) subsection bit.
    ///
    /// This is the backoff step: the chapter, act prefix, and section are
    /// never trimmed because they identify the statute itself rather than a
    /// subdivision of it. Returns `None` once no bits remain.
    pub fn pop_bit(&mut self) -> Option<String> {
        self.subsection_bits.pop()
    }

    /// Render the citation in the lowercase form used as a crosswalk index key.
    pub fn normalized(&self) -> String {
        self.to_string().to_lowercase()
    }
}

impl fmt::Display for IlcsReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}/{}", self.chapter, self.act_prefix, self.section)?;
        for bit in &self.subsection_bits {
            write!(f, "({})", bit)?;
        }
        Ok(())
    }
}
