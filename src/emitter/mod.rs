//! SQL emitter (verb module)
//!
//! Transforms a Predicate into SQL text for an external query engine.

mod error;
mod sql;

pub use error::EmitError;
pub use sql::{emit_parameterized, emit_predicate, emit_select, BoundSql};
