use std::io;

use exception_or::{Failure, FailureKind, MultiException};

#[test]
fn empty_aggregator_signals_nothing() {
    let errors = MultiException::new();

    assert!(errors.is_empty());
    assert_eq!(errors.len(), 0);
    assert_eq!(errors.clone().finish(), None);
    assert_eq!(errors.signal_if_failed(), Ok(()));
}

#[test]
fn single_item_signals_one_combined_failure() {
    let mut errors = MultiException::new();
    errors.add(Failure::argument("Too young"));

    let combined = errors.signal_if_failed().unwrap_err();

    assert_eq!(combined.kind(), FailureKind::Aggregate);
    assert!(combined.is_aggregate());
    assert_eq!(combined.message(), "Too young");
    assert_eq!(combined.inner(), [Failure::argument("Too young")]);
}

#[test]
fn combined_message_keeps_insertion_order() {
    let mut errors = MultiException::new();
    errors.add(Failure::argument("first"));
    errors.add(Failure::not_supported("second"));
    errors.add(Failure::generic("third"));

    let combined = errors.finish().unwrap();

    assert_eq!(combined.message(), "first; second; third");
    let kinds: Vec<_> = combined.inner().iter().map(Failure::kind).collect();
    assert_eq!(kinds, [FailureKind::Argument, FailureKind::NotSupported, FailureKind::Generic]);
}

#[test]
fn duplicates_are_kept() {
    let mut errors = MultiException::new();
    errors.add(Failure::argument("Too young"));
    errors.add(Failure::argument("Too young"));

    assert_eq!(errors.len(), 2);
    assert_eq!(errors.finish().unwrap().message(), "Too young; Too young");
}

#[test]
fn add_accepts_anything_convertible() {
    let mut errors = MultiException::new();
    errors.add("plain message");
    errors.add(String::from("owned message"));
    errors.add(io::Error::new(io::ErrorKind::InvalidInput, "io message"));
    errors.add("x".parse::<u8>().unwrap_err());

    let kinds: Vec<_> = errors.iter().map(Failure::kind).collect();
    assert_eq!(
        kinds,
        [FailureKind::Generic, FailureKind::Generic, FailureKind::Argument, FailureKind::Format]
    );
}

#[test]
fn combined_failure_keeps_original_causes() {
    let mut errors = MultiException::new();
    errors.add(io::Error::other("disk full"));

    let combined = errors.finish().unwrap();

    assert!(combined.inner()[0].downcast_ref::<io::Error>().is_some());
    assert!(combined.downcast_ref::<io::Error>().is_none());
}

#[test]
fn collects_and_iterates() {
    let errors: MultiException =
        [Failure::argument("a"), Failure::argument("b")].into_iter().collect();
    assert_eq!(errors.len(), 2);

    let messages: Vec<_> = (&errors).into_iter().map(|f| f.message().to_owned()).collect();
    assert_eq!(messages, ["a", "b"]);

    let mut more = errors.clone();
    more.extend(["c", "d"]);
    let owned: Vec<Failure> = more.into_iter().collect();
    assert_eq!(owned.len(), 4);
    assert_eq!(owned[3].message(), "d");
}

#[test]
fn separator_is_public() {
    assert_eq!(MultiException::SEPARATOR, "; ");
}
