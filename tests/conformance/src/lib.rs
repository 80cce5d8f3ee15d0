//! Shared fixtures for the conformance suite.
//!
//! The integration tests under `tests/` and the cross-process fixture
//! binary all build their worlds through [`fixtures`], so every lock
//! exercises the same layouts.

#![forbid(unsafe_code)]

pub mod fixtures;
