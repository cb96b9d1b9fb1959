//! Predicate expression types (noun module)
//!
//! The expression language handed to an external query engine: column
//! references, literals, boolean predicates, and typed column paths that
//! build them.

mod path;
mod predicate;

pub use path::Path;
pub(crate) use path::escape_like;
pub use predicate::{Column, CompareOp, Literal, Operand, Predicate, LIKE_ESCAPE};
