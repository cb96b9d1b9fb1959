//! Predicate composer (verb module)
//!
//! Combines optional criteria into one predicate, dropping absent criteria
//! before anything is combined.

mod builder;
mod compose;
mod error;

pub use builder::PredicateBuilder;
pub use compose::{compose, compose_options, strict_and};
pub use error::{ComposeError, OperandSide};
