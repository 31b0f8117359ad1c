//! Events emitted with the `tracing` feature enabled.

use std::fmt;
use std::sync::{Arc, Mutex};

use exception_or::{capture, Failure, MethodTable, MultiException, Safe};
use tracing::field::{Field, Visit};
use tracing::span::{Attributes, Id, Record};
use tracing::{Event, Level, Metadata, Subscriber};

#[derive(Debug, Clone, PartialEq)]
struct Recorded {
    level: Level,
    message: String,
    fields: Vec<(&'static str, String)>,
}

impl Recorded {
    fn field(&self, name: &str) -> Option<&str> {
        self.fields.iter().find(|(field, _)| *field == name).map(|(_, value)| value.as_str())
    }
}

#[derive(Clone, Default)]
struct Recorder {
    events: Arc<Mutex<Vec<Recorded>>>,
}

impl Recorder {
    fn record<R>(&self, f: impl FnOnce() -> R) -> (R, Vec<Recorded>) {
        let output = tracing::subscriber::with_default(self.clone(), f);
        let events = self.events.lock().unwrap().clone();
        (output, events)
    }
}

#[derive(Default)]
struct FieldVisitor {
    message: String,
    fields: Vec<(&'static str, String)>,
}

impl Visit for FieldVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.fields.push((field.name(), value.to_owned()));
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{value:?}");
        } else {
            self.fields.push((field.name(), format!("{value:?}")));
        }
    }
}

impl Subscriber for Recorder {
    fn enabled(&self, _: &Metadata<'_>) -> bool {
        true
    }

    fn new_span(&self, _: &Attributes<'_>) -> Id {
        Id::from_u64(1)
    }

    fn record(&self, _: &Id, _: &Record<'_>) {}

    fn record_follows_from(&self, _: &Id, _: &Id) {}

    fn event(&self, event: &Event<'_>) {
        let mut visitor = FieldVisitor::default();
        event.record(&mut visitor);
        self.events.lock().unwrap().push(Recorded {
            level: *event.metadata().level(),
            message: visitor.message,
            fields: visitor.fields,
        });
    }

    fn enter(&self, _: &Id) {}

    fn exit(&self, _: &Id) {}
}

#[test]
fn successful_capture_emits_a_trace_event() {
    let (result, events) = Recorder::default().record(|| capture(|| "12".parse::<i32>()));

    assert!(result.has_succeeded());
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].level, Level::TRACE);
    assert_eq!(events[0].message, "wrapped call succeeded");
}

#[test]
fn captured_failure_emits_a_debug_event_with_its_kind() {
    let (result, events) =
        Recorder::default().record(|| capture(|| Err::<(), _>(Failure::argument("too young"))));

    assert!(result.has_failed());
    let event = events.iter().find(|e| e.message == "captured failure").unwrap();
    assert_eq!(event.level, Level::DEBUG);
    assert_eq!(event.field("kind"), Some("ArgumentError"));
    assert_eq!(event.field("error"), Some("too young"));
}

#[test]
fn captured_panic_is_reported_before_the_failure() {
    let (result, events) =
        Recorder::default().record(|| capture(|| -> Result<(), Failure> { panic!("boom") }));

    assert!(result.has_failed());
    let messages: Vec<_> = events.iter().map(|e| e.message.as_str()).collect();
    assert_eq!(messages, ["captured panic", "captured failure"]);
}

#[test]
fn dispatch_miss_emits_a_debug_event_naming_the_method() {
    let table: MethodTable<Vec<i32>, (), usize> =
        MethodTable::new().register("len", |v: &Vec<i32>, ()| Ok::<_, Failure>(v.len()));
    let numbers = vec![1, 2, 3];

    let (result, events) =
        Recorder::default().record(|| Safe::wrapper(&numbers).dispatch(&table, "sum", ()));

    assert!(result.is_err());
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].level, Level::DEBUG);
    assert_eq!(events[0].message, "dispatch to undeclared method");
    assert_eq!(events[0].field("method"), Some("sum"));
}

#[test]
fn finish_emits_the_combined_message() {
    let (combined, events) = Recorder::default().record(|| {
        let mut errors = MultiException::new();
        errors.add(Failure::argument("Too young"));
        errors.add(Failure::argument("0 or negative age not supported"));
        errors.finish()
    });

    assert!(combined.is_some());
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].message, "signalling aggregated failure");
    assert_eq!(events[0].field("count"), Some("2"));
    assert_eq!(
        events[0].field("combined"),
        Some("Too young; 0 or negative age not supported")
    );
}

#[test]
fn empty_aggregator_stays_silent() {
    let (combined, events) = Recorder::default().record(|| MultiException::new().finish());

    assert!(combined.is_none());
    assert!(events.is_empty());
}
