//! Metadata document checks.
//!
//! A shallow well-formedness scan over the raw markup of the package
//! metadata document: presence, a single root element, balanced and
//! terminated tags. Field-level validation of the document's contents
//! belongs to the serialization collaborator, not here.

mod scanner;

pub use scanner::{scan, DocumentDefect};
