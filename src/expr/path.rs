//! Typed column paths
//!
//! A `Path<T>` names one column whose values have Rust type `T`, and builds
//! single-field predicates against it. Callers declare paths for their
//! entities once and reuse them across queries:
//!
//! ```
//! use dynwhere::Path;
//!
//! let username: Path<String> = Path::new("m", "username");
//! let age: Path<i32> = Path::new("m", "age");
//!
//! let predicate = username.eq("member1").and(age.goe(10));
//! assert!(!predicate.is_match_all());
//! ```

use std::fmt;
use std::marker::PhantomData;

use super::predicate::{Column, CompareOp, Literal, Predicate, LIKE_ESCAPE};

pub struct Path<T> {
    column: Column,
    _value: PhantomData<fn() -> T>,
}

impl<T> Path<T> {
    pub fn new(table: impl Into<String>, name: impl Into<String>) -> Self {
        Self::from_column(Column::new(table, name))
    }

    pub fn from_column(column: Column) -> Self {
        Self {
            column,
            _value: PhantomData,
        }
    }

    pub fn column(&self) -> &Column {
        &self.column
    }

    pub fn is_null(&self) -> Predicate {
        Predicate::is_null(self.column.clone())
    }

    pub fn is_not_null(&self) -> Predicate {
        Predicate::is_not_null(self.column.clone())
    }

    /// Column-to-column equality (e.g. a theta join condition)
    pub fn eq_path(&self, other: &Path<T>) -> Predicate {
        Predicate::compare(self.column.clone(), CompareOp::Eq, other.column.clone())
    }
}

impl<T: Into<Literal>> Path<T> {
    fn compare(&self, op: CompareOp, value: T) -> Predicate {
        let literal: Literal = value.into();
        Predicate::compare(self.column.clone(), op, literal)
    }

    pub fn eq(&self, value: impl Into<T>) -> Predicate {
        self.compare(CompareOp::Eq, value.into())
    }

    pub fn ne(&self, value: impl Into<T>) -> Predicate {
        self.compare(CompareOp::NotEq, value.into())
    }

    pub fn in_list<I>(&self, values: I) -> Predicate
    where
        I: IntoIterator,
        I::Item: Into<T>,
    {
        let values = values
            .into_iter()
            .map(|v| {
                let v: T = v.into();
                v.into()
            })
            .collect();
        Predicate::in_list(self.column.clone(), values)
    }

    pub fn not_in<I>(&self, values: I) -> Predicate
    where
        I: IntoIterator,
        I::Item: Into<T>,
    {
        !self.in_list(values)
    }
}

impl<T: Into<Literal> + PartialOrd> Path<T> {
    pub fn lt(&self, value: impl Into<T>) -> Predicate {
        self.compare(CompareOp::Lt, value.into())
    }

    /// Less than or equal
    pub fn loe(&self, value: impl Into<T>) -> Predicate {
        self.compare(CompareOp::LtEq, value.into())
    }

    pub fn gt(&self, value: impl Into<T>) -> Predicate {
        self.compare(CompareOp::Gt, value.into())
    }

    /// Greater than or equal
    pub fn goe(&self, value: impl Into<T>) -> Predicate {
        self.compare(CompareOp::GtEq, value.into())
    }

    /// Inclusive range
    pub fn between(&self, low: impl Into<T>, high: impl Into<T>) -> Predicate {
        let low: T = low.into();
        let high: T = high.into();
        Predicate::between(self.column.clone(), low, high)
    }
}

impl Path<String> {
    /// SQL LIKE with a caller-supplied pattern and no escape character
    pub fn like(&self, pattern: impl Into<String>) -> Predicate {
        Predicate::like(self.column.clone(), pattern)
    }

    pub fn contains(&self, needle: &str) -> Predicate {
        Predicate::like_escaped(self.column.clone(), format!("%{}%", escape_like(needle)))
    }

    pub fn starts_with(&self, prefix: &str) -> Predicate {
        Predicate::like_escaped(self.column.clone(), format!("{}%", escape_like(prefix)))
    }

    pub fn ends_with(&self, suffix: &str) -> Predicate {
        Predicate::like_escaped(self.column.clone(), format!("%{}", escape_like(suffix)))
    }
}

/// Escape LIKE wildcards with [`LIKE_ESCAPE`] so the text matches literally
pub(crate) fn escape_like(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        if matches!(ch, '%' | '_') || ch == LIKE_ESCAPE {
            escaped.push(LIKE_ESCAPE);
        }
        escaped.push(ch);
    }
    escaped
}

impl<T> Clone for Path<T> {
    fn clone(&self) -> Self {
        Self::from_column(self.column.clone())
    }
}

impl<T> fmt::Debug for Path<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Path").field(&self.column.qualified_name()).finish()
    }
}
