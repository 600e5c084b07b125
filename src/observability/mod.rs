//! Observability for the validator CLI.
//!
//! Structured logs (JSON), deterministic key ordering, one line per event,
//! synchronous with no buffering. The validator core performs no I/O and
//! stays silent; only the CLI layer emits events, to stderr, so stdout
//! remains the report channel.

mod events;
mod logger;

pub use events::{DOCUMENT_CHECKED, VALIDATION_COMPLETED, VALIDATION_STARTED};
pub use logger::{Logger, Severity};
