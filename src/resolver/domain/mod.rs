//! Domain model for entity resolution.

mod error;
mod query;
mod result;
mod similarity;

pub use error::{ParseEntityKindError, ResolverDomainError};
pub use query::{EntityKind, ResolutionQuery};
pub use result::{Candidate, ResolutionResult};
pub use similarity::similarity;
