pub mod terms;

use crate::checksum::{Checksum, ChecksumFactory, HashAlgorithm};
use crate::config::GroupingConfig;
use crate::model::ErrorEvent;
pub use terms::{select_terms, GroupingTerms, TermSource};

/// Derives grouping keys by hashing an error's grouping terms.
///
/// Every call draws a fresh checksum from the factory, so one computer can be
/// shared across threads and events without any coordination.
#[derive(Debug, Clone)]
pub struct GroupingKeyComputer<F> {
	factory: F,
}

impl Default for GroupingKeyComputer<HashAlgorithm> {
	fn default() -> Self {
		Self {
			factory: HashAlgorithm::default(),
		}
	}
}

impl GroupingKeyComputer<HashAlgorithm> {
	pub fn from_config(config: &GroupingConfig) -> Self {
		Self {
			factory: config.hash_algorithm,
		}
	}
}

impl<F> GroupingKeyComputer<F>
where
	F: ChecksumFactory,
{
	pub fn new(factory: F) -> Self {
		Self { factory }
	}

	/// Compute the grouping key of `error` without touching it.
	///
	/// Terms are written with no separator; the digest is lower-case hex.
	/// An error with nothing to group on still gets the digest of zero bytes.
	pub fn compute(&self, error: &ErrorEvent) -> String {
		self.compute_terms(&select_terms(error))
	}

	/// Hash an already selected term list.
	pub fn compute_terms(&self, terms: &GroupingTerms<'_>) -> String {
		let mut checksum = self.factory.new_checksum();
		for term in &terms.terms {
			checksum.write(term.as_bytes());
		}
		hex::encode(checksum.finalize())
	}

	/// Compute the key and store it on `error`, replacing any previous key.
	pub fn apply<'e>(&self, error: &'e mut ErrorEvent) -> &'e str {
		let key = self.compute(error);
		error.grouping_key = key;
		&error.grouping_key
	}
}
