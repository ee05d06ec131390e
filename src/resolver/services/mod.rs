//! Application services for entity resolution.

mod resolution;

pub use resolution::{ResolutionService, ResolveError, ResolveResult};
