mod common;

use std::convert::Infallible;

use common::*;
use grouping_key::{
    Batch, BatchProcessor, ErrorEvent, ErrorLog, Event, GroupingKeyComputer, HashAlgorithm,
    IdentityChecksum, SetGroupingKey,
};
use pretty_assertions::assert_eq;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn log_error(message: &str) -> ErrorEvent {
    error(
        None,
        Some(ErrorLog {
            message: message.into(),
            ..Default::default()
        }),
    )
}

#[test]
fn every_error_in_the_batch_is_keyed_in_place() {
    init_tracing();

    let processor = SetGroupingKey::new(identity_computer());
    let mut batch: Batch = vec![
        Event::from_error(log_error("first")),
        Event::default(),
        Event::from_error(log_error("second")),
        Event::from_error(error(None, None)),
    ];

    let result: Result<(), Infallible> = processor.process_batch(&mut batch);
    assert!(result.is_ok());

    let keys: Vec<Option<&str>> = batch
        .iter()
        .map(|event| event.error.as_ref().map(|e| e.grouping_key.as_str()))
        .collect();
    assert_eq!(
        keys,
        vec![
            Some(hexify(&["first"]).as_str()),
            None,
            Some(hexify(&["second"]).as_str()),
            Some(""),
        ]
    );
}

#[test]
fn each_event_gets_a_fresh_checksum() {
    init_tracing();

    // An identity checksum shared between events would leak "first" into the second key.
    let processor = SetGroupingKey::new(GroupingKeyComputer::new(IdentityChecksum::default));
    let mut batch: Batch = vec![
        Event::from_error(log_error("first")),
        Event::from_error(log_error("second")),
    ];

    processor.process_batch(&mut batch).unwrap();

    let second = batch[1].error.as_ref().unwrap();
    assert_eq!(second.grouping_key, hexify(&["second"]));
}

#[test]
fn batch_keys_match_single_event_keys() {
    init_tracing();

    let processor: SetGroupingKey = SetGroupingKey::default();
    let events = vec![log_error("timeout"), log_error("refused"), error(None, None)];
    let mut batch: Batch = events.iter().cloned().map(Event::from_error).collect();

    processor.process_batch(&mut batch).unwrap();

    let computer = GroupingKeyComputer::new(HashAlgorithm::Md5);
    for (event, processed) in events.iter().zip(&batch) {
        let processed = processed.error.as_ref().unwrap();
        assert_eq!(processed.grouping_key, computer.compute(event));
        assert_eq!(processed.grouping_key.len(), 32);
    }
    assert_eq!(processor.computer().compute(&events[0]), batch[0].error.as_ref().unwrap().grouping_key);
}

#[test]
fn empty_batch_is_a_no_op() {
    let processor: SetGroupingKey = SetGroupingKey::default();
    let mut batch: Batch = Vec::new();
    processor.process_batch(&mut batch).unwrap();
    assert!(batch.is_empty());
}
