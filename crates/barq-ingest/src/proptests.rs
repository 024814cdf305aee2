//! Property-based tests for the validation pipeline.
