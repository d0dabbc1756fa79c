//! Error Extension Tests

use std::io;

use clp_domain::error::{Error, Result};
use clp_infrastructure::error_ext::ErrorContext;

fn not_found() -> std::result::Result<(), io::Error> {
    Err(io::Error::new(io::ErrorKind::NotFound, "file not found"))
}

#[test]
fn test_io_context() {
    let result: Result<()> = not_found().io_context("failed to read file");

    if let Err(Error::Io { source, message }) = result {
        assert!(message.contains("failed to read file"));
        assert!(message.contains("file not found"));
        assert!(source.is_some());
    } else {
        panic!("Expected Io error");
    }
}

#[test]
fn test_config_context() {
    let result: Result<()> = not_found().config_context("bad config");
    assert!(matches!(
        result,
        Err(Error::Configuration {
            source: Some(_),
            ..
        })
    ));
}

#[test]
fn test_network_context() {
    let result: Result<()> = not_found().network_context("unreachable");
    assert!(matches!(result, Err(Error::Network { .. })));
}

#[test]
fn test_context_and_lazy_context() {
    let eager: Result<()> = not_found().context("eager");
    let lazy: Result<()> = not_found().with_context(|| format!("lazy {}", 1));

    match (eager, lazy) {
        (
            Err(Error::Infrastructure { message: a, .. }),
            Err(Error::Infrastructure { message: b, .. }),
        ) => {
            assert!(a.starts_with("eager: "));
            assert!(b.starts_with("lazy 1: "));
        }
        other => panic!("Expected Infrastructure errors, got {other:?}"),
    }
}

#[test]
fn test_ok_passes_through() {
    let value: Result<u8> = Ok::<u8, io::Error>(7).io_context("unused");
    assert_eq!(value.unwrap(), 7);
}
