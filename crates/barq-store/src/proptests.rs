//! Property-based tests for collections.
