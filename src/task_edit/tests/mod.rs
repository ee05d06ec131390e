//! Unit tests for task patch validation, execution, and recording.

mod executor_tests;
mod helpers;
mod patch_tests;
