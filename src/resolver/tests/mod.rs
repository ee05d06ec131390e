//! Unit tests for entity resolution.
