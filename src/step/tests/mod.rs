//! Unit tests for step sequencing.
//!
//! - [`helpers`] - Test object, fixtures and builders shared by the tests
//! - [`order_tests`] - "Follows previous" resolution
//! - [`title_tests`] - Template formatting, prefixes and deferred titles
//! - [`action_tests`] - Descriptors, calls and action invocation
//! - [`builder_tests`] - Step accumulation through `StepBuilder`
