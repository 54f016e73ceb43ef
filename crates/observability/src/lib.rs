//! Tracing/logging setup shared by binaries and tests.

pub mod tracing;

pub use self::tracing::init;
