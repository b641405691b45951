//! Integration tests for Debugkit core
//!
//! Exercises the registry, bindings and config together the way a host
//! wires them up at startup and shutdown.

#[cfg(test)]
mod lifecycle_tests;
