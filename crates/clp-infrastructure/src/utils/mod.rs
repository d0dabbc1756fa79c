//! Infrastructure utilities
//!
//! Note: `JsonExt` and `HttpResponseUtils` live in `clp_providers::utils`.

mod timing;

pub use timing::TimedOperation;
