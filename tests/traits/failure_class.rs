use std::io::{Error, ErrorKind};

use exception_or::{FailureClass, FailureKind};

#[derive(Debug)]
struct Unclassified;

impl FailureClass for Unclassified {}

#[test]
fn default_class_is_generic() {
    assert_eq!(Unclassified.failure_kind(), FailureKind::Generic);
}

#[test]
fn parse_int_overflow_is_overflow() {
    let err = "300".parse::<u8>().unwrap_err();
    assert_eq!(err.failure_kind(), FailureKind::Overflow);

    let err = "-300".parse::<i8>().unwrap_err();
    assert_eq!(err.failure_kind(), FailureKind::Overflow);
}

#[test]
fn parse_int_garbage_is_format() {
    assert_eq!("abc".parse::<u8>().unwrap_err().failure_kind(), FailureKind::Format);
    assert_eq!("".parse::<u8>().unwrap_err().failure_kind(), FailureKind::Format);
}

#[test]
fn parse_float_and_utf8_are_format() {
    assert_eq!("1.2.3".parse::<f64>().unwrap_err().failure_kind(), FailureKind::Format);

    let bytes = vec![0xff_u8, 0xfe];
    let err = core::str::from_utf8(&bytes).unwrap_err();
    assert_eq!(err.failure_kind(), FailureKind::Format);

    assert_eq!(core::fmt::Error.failure_kind(), FailureKind::Format);
}

#[test]
fn try_from_int_is_overflow() {
    let err = u8::try_from(-1_i32).unwrap_err();
    assert_eq!(err.failure_kind(), FailureKind::Overflow);
}

#[test]
fn io_invalid_input_is_argument() {
    let err = Error::new(ErrorKind::InvalidInput, "invalid input");
    assert_eq!(err.failure_kind(), FailureKind::Argument);
}

#[test]
fn io_unsupported_is_not_supported() {
    let err = Error::new(ErrorKind::Unsupported, "unsupported");
    assert_eq!(err.failure_kind(), FailureKind::NotSupported);
}

#[test]
fn other_io_errors_are_io() {
    for kind in [ErrorKind::NotFound, ErrorKind::PermissionDenied, ErrorKind::TimedOut] {
        let err = Error::new(kind, "io");
        assert_eq!(err.failure_kind(), FailureKind::Io);
    }
    assert_eq!(Error::other("other").failure_kind(), FailureKind::Io);
}
