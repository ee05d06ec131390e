//! In-memory adapters for resolver ports.

mod candidate_store;

pub use candidate_store::InMemoryCandidateStore;
