//! Deterministic grouping keys for error events.
//!
//! `grouping-key` fingerprints errors reported by an observability pipeline so
//! that independent occurrences of the same defect cluster together. The key
//! is derived from a fixed, order-sensitive walk of the error: stack frames of
//! the exception chain first, then exception types, then messages, with log
//! data used only when no exception was captured. Identical inputs always
//! produce identical keys, byte-for-byte.

pub mod checksum;
pub mod config;
pub mod grouping;
pub mod model;
pub mod processor;

pub use checksum::{Checksum, ChecksumFactory, HashAlgorithm, IdentityChecksum};
pub use config::{ConfigError, GroupingConfig};
pub use grouping::{select_terms, GroupingKeyComputer, GroupingTerms, TermSource};
pub use model::{Batch, ErrorEvent, ErrorLog, Event, Exception, StackFrame};
pub use processor::{BatchProcessor, SetGroupingKey};
