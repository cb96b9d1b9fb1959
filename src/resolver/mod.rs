//! Filter request resolver (verb module)
//!
//! Schema + FilterRequest → ordered criteria, ready for the composer.

mod error;
mod operator;
mod resolve;

pub use error::ResolveError;
pub use operator::FilterOperator;
pub use resolve::{resolve_filters, resolve_predicate};
