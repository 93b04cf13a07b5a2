//! Batch-level entry point: key every error-bearing event of a batch.

use std::convert::Infallible;

use tracing::{debug, debug_span, trace};

use crate::checksum::{ChecksumFactory, HashAlgorithm};
use crate::grouping::{select_terms, GroupingKeyComputer};
use crate::model::Batch;

/// A pipeline stage that mutates a batch of events in place.
pub trait BatchProcessor {
    type Error: std::error::Error;

    fn process_batch(&self, batch: &mut Batch) -> Result<(), Self::Error>;
}

/// Sets `grouping_key` on every event that carries an error.
///
/// Events without an error are left untouched. Keys are recomputed from
/// scratch on every pass.
#[derive(Debug, Clone)]
pub struct SetGroupingKey<F = HashAlgorithm> {
    computer: GroupingKeyComputer<F>,
}

impl Default for SetGroupingKey<HashAlgorithm> {
    fn default() -> Self {
        Self::new(GroupingKeyComputer::default())
    }
}

impl<F> SetGroupingKey<F>
where
    F: ChecksumFactory,
{
    pub fn new(computer: GroupingKeyComputer<F>) -> Self {
        Self { computer }
    }

    pub fn computer(&self) -> &GroupingKeyComputer<F> {
        &self.computer
    }
}

impl<F> BatchProcessor for SetGroupingKey<F>
where
    F: ChecksumFactory,
{
    type Error = Infallible;

    fn process_batch(&self, batch: &mut Batch) -> Result<(), Infallible> {
        let _span = debug_span!("set_grouping_key", events = batch.len()).entered();

        let mut keyed = 0usize;
        for (index, event) in batch.iter_mut().enumerate() {
            let Some(error) = event.error.as_mut() else {
                continue;
            };

            let terms = select_terms(error);
            let key = self.computer.compute_terms(&terms);
            trace!(index, source = ?terms.source, terms = terms.len(), "grouping key computed");
            error.grouping_key = key;
            keyed += 1;
        }

        debug!(keyed, skipped = batch.len() - keyed, "grouping keys set");
        Ok(())
    }
}
