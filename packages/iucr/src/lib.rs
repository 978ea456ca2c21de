//! IUCR Crosswalk
//!
//! Reference data mapping between Illinois Uniform Crime Reporting (IUCR)
//! offense codes and Illinois Compiled Statutes (ILCS) citations. This
//! library provides:
//!
//! - Loading the ILCS-to-IUCR crosswalk (bundled or caller-supplied CSV)
//! - Lookup of offenses by ILCS citation, specified as a literal string or as
//!   chapter/act/section components with subsection backoff
//! - Lookup of offenses by IUCR code
//!
//! # Example
//!
//! ```
//! use iucr_crosswalk::{IlcsResolver, Registry};
//!
//! let registry = Registry::bundled().unwrap();
//! let resolver = IlcsResolver::new(&registry);
//!
//! // First degree murder, 720 ILCS 5/9-1
//! let offenses = resolver.resolve_by_parts("720", "5", "9-1", &[]).unwrap();
//! assert_eq!(offenses[0].code, "0110");
//!
//! let murder = resolver.resolve_by_code("0110").unwrap();
//! assert_eq!(murder.description, "FIRST DEGREE MURDER");
//! ```

pub mod citation;
pub mod error;
pub mod registry;
pub mod resolver;
pub mod types;

// Re-export commonly used items
pub use citation::IlcsReference;
pub use error::{IucrError, Result};
pub use registry::Registry;
pub use resolver::IlcsResolver;
pub use types::Offense;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
