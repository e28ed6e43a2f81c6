//! BFHL client CLI - library surface.
//!
//! Exposes the logging setup for the binary and for tests.

pub mod logging;
