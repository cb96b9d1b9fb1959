//! Search criteria types (noun module)
//!
//! A criterion is one optional filter input; a filter request is the
//! deserialisable form of a whole dynamic search.

mod criterion;
mod request;

pub use criterion::Criterion;
pub use request::{FieldFilter, FilterRequest};
