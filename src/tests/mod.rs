//! Test modules for the backdrop crate.
//!
//! - **sanitize_tests**: string-transform unit tests
//! - **scanner_tests**: image-file collection tests
//! - **catalog_tests**: catalog build, finalization and resolution tests
//! - **api_tests**: HTTP surface tests against the in-process router
//! - **config_tests**: configuration loading and validation tests

pub mod sanitize_tests;
