//! Application services for validated task mutation.

mod executor;
mod recorder;

pub use executor::{ApplyPatchError, ApplyPatchResult, PatchExecutor};
pub use recorder::ChangeRecorder;
