//! dynwhere - Compose dynamic query predicates from optional criteria
//!
//! This library provides:
//! - A predicate expression language with typed column paths
//! - Composition of optional search criteria into one predicate
//! - Incremental predicate building
//! - Entity schemas and filter requests parsed from YAML/JSON
//! - SQL emission for an external query engine
//!
//! # Architecture
//!
//! **Noun modules** (data structures):
//! - `expr/` - predicate language (Predicate, Column, Literal, Path)
//! - `criteria/` - search inputs (Criterion, FilterRequest)
//! - `entity/` - entity schema (Schema, Entity, Field, DataType)
//!
//! **Verb modules** (transformations):
//! - `parser/` - YAML/JSON → Schema, FilterRequest
//! - `resolver/` - Schema + FilterRequest → Criteria
//! - `composer/` - Criteria → Predicate
//! - `emitter/` - Predicate → SQL
//!
//! # Example
//!
//! ```
//! use dynwhere::{compose, emit_predicate, Criterion, Path};
//!
//! let username: Path<String> = Path::new("m", "username");
//! let age: Path<i32> = Path::new("m", "age");
//!
//! let username_cond = Some("member1");
//! let age_cond: Option<i32> = None;
//!
//! let predicate = compose([
//!     Criterion::new("username", username_cond, |v| username.eq(v)),
//!     Criterion::new("age", age_cond, |v| age.eq(v)),
//! ]);
//!
//! assert_eq!(emit_predicate(&predicate).unwrap(), "m.username = 'member1'");
//! ```

pub mod composer;
pub mod criteria;
pub mod emitter;
pub mod entity;
pub mod error;
pub mod expr;
pub mod parser;
pub mod resolver;

// Re-export commonly used types
pub use composer::{compose, compose_options, strict_and, ComposeError, OperandSide, PredicateBuilder};
pub use criteria::{Criterion, FieldFilter, FilterRequest};
pub use emitter::{emit_parameterized, emit_predicate, emit_select, BoundSql, EmitError};
pub use entity::{DataType, Entity, Field, Schema};
pub use error::ParseError;
pub use expr::{Column, CompareOp, Literal, Operand, Path, Predicate, LIKE_ESCAPE};
pub use resolver::{resolve_filters, resolve_predicate, FilterOperator, ResolveError};
