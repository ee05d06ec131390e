//! Port contracts for entity resolution.

pub mod candidate_store;

pub use candidate_store::{
    CandidateRow, CandidateStore, CandidateStoreError, CandidateStoreResult, LabelPredicate,
};
