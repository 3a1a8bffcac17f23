//! Shape and link checks for vellum site descriptors.
//!
//! The descriptor itself never validates anything; this crate is the opt-in
//! pass authors run before handing the config to the site generator.

pub mod index;
pub mod report;
pub mod rules;

pub use index::{CheckError, DocumentIndex};
pub use report::{Diagnostic, Report, Severity};
pub use rules::{check, check_links, check_shape};
