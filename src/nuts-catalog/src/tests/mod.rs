//! Comprehensive tests for the nuts-catalog modules.

mod catalog_tests;
mod monitoring_tests;
