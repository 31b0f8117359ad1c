use std::cell::RefCell;
use std::fmt;

use exception_or::traits::IntoFailure;
use exception_or::{fail, impl_failure_class, safe_interface, ExceptionOr, Failure, FailureKind, Safe};

trait Registry {
    fn register(&self, name: &str, age: u8) -> Result<usize, Failure>;
    fn lookup(&self, name: &str) -> Result<u8, LookupError>;
    fn clear(&self) -> Result<(), Failure>;
}

safe_interface! {
    /// Registry calls with captured failures.
    trait SafeRegistry: Registry {
        /// Adds an entry, returning the new size.
        fn register(&self, name: &str, age: u8) -> usize;
        fn lookup(&self, name: &str) -> u8;
        fn clear(&self);
    }
}

#[derive(Debug)]
struct LookupError(String);

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no entry for {}", self.0)
    }
}

impl std::error::Error for LookupError {}

impl_failure_class!(LookupError => ArgumentOutOfRange);

#[derive(Default)]
struct People {
    entries: RefCell<Vec<(String, u8)>>,
}

impl Registry for People {
    fn register(&self, name: &str, age: u8) -> Result<usize, Failure> {
        if name.is_empty() {
            return Err(fail!(ArgumentNull, "name is required"));
        }
        let mut entries = self.entries.borrow_mut();
        entries.push((name.to_owned(), age));
        Ok(entries.len())
    }

    fn lookup(&self, name: &str) -> Result<u8, LookupError> {
        self.entries
            .borrow()
            .iter()
            .find(|(entry, _)| entry == name)
            .map(|(_, age)| *age)
            .ok_or_else(|| LookupError(name.to_owned()))
    }

    fn clear(&self) -> Result<(), Failure> {
        if self.entries.borrow().is_empty() {
            return Err(fail!(InvalidOperation, "nothing to clear"));
        }
        self.entries.borrow_mut().clear();
        Ok(())
    }
}

#[test]
fn generated_methods_return_exception_or() {
    let people = People::default();
    let safe = Safe::wrapper(&people);

    let size: ExceptionOr<usize> = safe.register("ada", 36);
    assert_eq!(size.into_value(), Ok(1));
    assert_eq!(safe.lookup("ada").into_value(), Ok(36));
}

#[test]
fn generated_methods_capture_each_error_type() {
    let people = People::default();
    let safe = Safe::wrapper(&people);

    let missing = safe.register("", 1);
    assert!(missing.has_failed_with(&[FailureKind::Argument]));

    let unknown = safe.lookup("grace");
    assert!(unknown.has_failed_with(&[FailureKind::ArgumentOutOfRange]));
    assert_eq!(unknown.get_failure().unwrap().message(), "no entry for grace");
}

#[test]
fn unit_methods_return_unit_results() {
    let people = People::default();
    let safe = Safe::wrapper(&people);

    let empty: ExceptionOr<()> = safe.clear();
    assert!(empty.has_failed_with(&[FailureKind::InvalidOperation]));

    let _ = safe.register("ada", 36);
    assert_eq!(safe.clear(), ExceptionOr::success(()));
}

#[test]
fn trait_objects_can_be_wrapped() {
    let people = People::default();
    let registry: &dyn Registry = &people;
    let safe = Safe::wrapper(registry);

    assert_eq!(safe.register("linus", 54).into_value(), Ok(1));
    assert_eq!(people.entries.borrow().len(), 1);
}

#[test]
fn fail_formats_messages_for_the_named_kind() {
    let age = -10;
    let failure = fail!(Argument, "age {} is negative", age);

    assert_eq!(failure.kind(), FailureKind::Argument);
    assert_eq!(failure.message(), "age -10 is negative");
}

#[test]
fn impl_failure_class_sets_a_fixed_kind() {
    let failure = LookupError("x".into()).into_failure();

    assert_eq!(failure.kind(), FailureKind::ArgumentOutOfRange);
    assert!(failure.is(FailureKind::Argument));
}

trait Greeter {
    fn greeting(&self, name: &str) -> String;
    fn shout(&self, name: &str) -> String;
    fn wave(&self);
}

safe_interface! {
    trait SafeGreeter: Greeter {
        fn greeting(&self, name: &str) -> String = value;
        fn shout(&self, name: &str) -> String = value;
        fn wave(&self) = value;
    }
}

struct Polite;

impl Greeter for Polite {
    fn greeting(&self, name: &str) -> String {
        format!("hello, {name}")
    }

    fn shout(&self, name: &str) -> String {
        if name.is_empty() {
            panic!("nobody to shout at");
        }
        name.to_uppercase()
    }

    fn wave(&self) {}
}

#[test]
fn plain_methods_return_their_value() {
    let safe = Safe::wrapper(&Polite);

    assert_eq!(safe.greeting("ada").into_value(), Ok("hello, ada".to_owned()));
    assert_eq!(safe.shout("ada").into_value(), Ok("ADA".to_owned()));
    assert_eq!(safe.wave(), ExceptionOr::success(()));
}

#[cfg(feature = "std")]
#[test]
fn plain_methods_capture_panics() {
    let safe = Safe::wrapper(&Polite);

    let result = safe.shout("");
    assert!(result.has_failed_with(&[FailureKind::Panic]));
    assert_eq!(result.get_failure().unwrap().message(), "nobody to shout at");
}
