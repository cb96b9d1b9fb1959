//! Predicate and operand types

use std::ops::Not;

/// A column reference
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Column {
    /// Table name or alias
    pub table: String,
    /// Column name
    pub name: String,
}

impl Column {
    pub fn new(table: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            name: name.into(),
        }
    }

    /// Create an unqualified column reference (no table prefix)
    pub fn unqualified(name: impl Into<String>) -> Self {
        Self {
            table: String::new(),
            name: name.into(),
        }
    }

    /// Fully qualified name: table.column
    pub fn qualified_name(&self) -> String {
        if self.table.is_empty() {
            self.name.clone()
        } else {
            format!("{}.{}", self.table, self.name)
        }
    }
}

/// Escape character declared by [`Predicate::like_escaped`]
pub const LIKE_ESCAPE: char = '\\';

/// Literal values
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
}

impl From<bool> for Literal {
    fn from(value: bool) -> Self {
        Literal::Bool(value)
    }
}

impl From<i32> for Literal {
    fn from(value: i32) -> Self {
        Literal::Int(i64::from(value))
    }
}

impl From<i64> for Literal {
    fn from(value: i64) -> Self {
        Literal::Int(value)
    }
}

impl From<u32> for Literal {
    fn from(value: u32) -> Self {
        Literal::Int(i64::from(value))
    }
}

impl From<f64> for Literal {
    fn from(value: f64) -> Self {
        Literal::Float(value)
    }
}

impl From<String> for Literal {
    fn from(value: String) -> Self {
        Literal::String(value)
    }
}

impl From<&str> for Literal {
    fn from(value: &str) -> Self {
        Literal::String(value.to_string())
    }
}

/// Right-hand side of a comparison
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    Column(Column),
    Literal(Literal),
}

impl From<Column> for Operand {
    fn from(column: Column) -> Self {
        Operand::Column(column)
    }
}

impl From<Literal> for Operand {
    fn from(literal: Literal) -> Self {
        Operand::Literal(literal)
    }
}

macro_rules! operand_from_literal {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Operand {
                fn from(value: $ty) -> Self {
                    Operand::Literal(Literal::from(value))
                }
            }
        )*
    };
}

operand_from_literal!(bool, i32, i64, u32, f64, String, &str);

/// Comparison operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompareOp {
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
}

impl CompareOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            CompareOp::Eq => "=",
            CompareOp::NotEq => "<>",
            CompareOp::Lt => "<",
            CompareOp::LtEq => "<=",
            CompareOp::Gt => ">",
            CompareOp::GtEq => ">=",
        }
    }

    /// The operator selecting exactly the rows this one rejects
    pub fn negate(&self) -> CompareOp {
        match self {
            CompareOp::Eq => CompareOp::NotEq,
            CompareOp::NotEq => CompareOp::Eq,
            CompareOp::Lt => CompareOp::GtEq,
            CompareOp::LtEq => CompareOp::Gt,
            CompareOp::Gt => CompareOp::LtEq,
            CompareOp::GtEq => CompareOp::Lt,
        }
    }
}

/// A boolean condition usable in a WHERE clause.
///
/// `True` is the match-all predicate: combining anything with it via
/// [`Predicate::and`] yields the other operand unchanged.
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    True,
    False,
    Compare {
        left: Column,
        op: CompareOp,
        right: Operand,
    },
    In {
        column: Column,
        values: Vec<Literal>,
    },
    Between {
        column: Column,
        low: Literal,
        high: Literal,
    },
    /// `escape` is the pattern's declared escape character, if any
    Like {
        column: Column,
        pattern: String,
        escape: Option<char>,
    },
    IsNull(Column),
    IsNotNull(Column),
    // Prefer Predicate::and(), which flattens and simplifies
    And(Vec<Predicate>),
    // Prefer Predicate::or(), which flattens and simplifies
    Or(Vec<Predicate>),
    // Prefer the `!` operator, which simplifies
    Not(Box<Predicate>),
}

impl Predicate {
    pub fn compare(left: Column, op: CompareOp, right: impl Into<Operand>) -> Predicate {
        Predicate::Compare {
            left,
            op,
            right: right.into(),
        }
    }

    /// Membership test. An empty value list can never match.
    pub fn in_list(column: Column, values: Vec<Literal>) -> Predicate {
        if values.is_empty() {
            Predicate::False
        } else {
            Predicate::In { column, values }
        }
    }

    pub fn between(column: Column, low: impl Into<Literal>, high: impl Into<Literal>) -> Predicate {
        Predicate::Between {
            column,
            low: low.into(),
            high: high.into(),
        }
    }

    /// LIKE with a raw pattern; no escape character is declared
    pub fn like(column: Column, pattern: impl Into<String>) -> Predicate {
        Predicate::Like {
            column,
            pattern: pattern.into(),
            escape: None,
        }
    }

    /// LIKE with a pattern whose wildcards are escaped with [`LIKE_ESCAPE`]
    pub fn like_escaped(column: Column, pattern: impl Into<String>) -> Predicate {
        Predicate::Like {
            column,
            pattern: pattern.into(),
            escape: Some(LIKE_ESCAPE),
        }
    }

    pub fn is_null(column: Column) -> Predicate {
        Predicate::IsNull(column)
    }

    pub fn is_not_null(column: Column) -> Predicate {
        Predicate::IsNotNull(column)
    }

    /// True when this predicate places no restriction on rows
    pub fn is_match_all(&self) -> bool {
        matches!(self, Predicate::True)
    }

    /// Logical AND, reducing to a simpler predicate when possible.
    ///
    /// Nested conjunctions are flattened; operand order is preserved.
    pub fn and(self, other: Predicate) -> Predicate {
        match (self, other) {
            (Predicate::False, _) | (_, Predicate::False) => Predicate::False,
            (Predicate::True, rhs) => rhs,
            (lhs, Predicate::True) => lhs,
            (lhs, rhs) if lhs == rhs => lhs,
            (Predicate::And(mut left), Predicate::And(right)) => {
                left.extend(right);
                Predicate::And(left)
            }
            (Predicate::And(mut left), rhs) => {
                left.push(rhs);
                Predicate::And(left)
            }
            (lhs, Predicate::And(right)) => {
                let mut conjuncts = Vec::with_capacity(right.len() + 1);
                conjuncts.push(lhs);
                conjuncts.extend(right);
                Predicate::And(conjuncts)
            }
            (lhs, rhs) => Predicate::And(vec![lhs, rhs]),
        }
    }

    /// Logical OR, reducing to a simpler predicate when possible.
    pub fn or(self, other: Predicate) -> Predicate {
        match (self, other) {
            (Predicate::True, _) | (_, Predicate::True) => Predicate::True,
            (Predicate::False, rhs) => rhs,
            (lhs, Predicate::False) => lhs,
            (lhs, rhs) if lhs == rhs => lhs,
            (Predicate::Or(mut left), Predicate::Or(right)) => {
                left.extend(right);
                Predicate::Or(left)
            }
            (Predicate::Or(mut left), rhs) => {
                left.push(rhs);
                Predicate::Or(left)
            }
            (lhs, Predicate::Or(right)) => {
                let mut disjuncts = Vec::with_capacity(right.len() + 1);
                disjuncts.push(lhs);
                disjuncts.extend(right);
                Predicate::Or(disjuncts)
            }
            (lhs, rhs) => Predicate::Or(vec![lhs, rhs]),
        }
    }

    /// Conjunction of every predicate; `True` for an empty iterator
    pub fn all<I: IntoIterator<Item = Predicate>>(predicates: I) -> Predicate {
        predicates.into_iter().fold(Predicate::True, Predicate::and)
    }

    /// Disjunction of every predicate; `False` for an empty iterator
    pub fn any<I: IntoIterator<Item = Predicate>>(predicates: I) -> Predicate {
        predicates.into_iter().fold(Predicate::False, Predicate::or)
    }
}

impl From<bool> for Predicate {
    fn from(b: bool) -> Predicate {
        if b {
            Predicate::True
        } else {
            Predicate::False
        }
    }
}

impl Not for Predicate {
    type Output = Predicate;

    fn not(self) -> Self::Output {
        match self {
            Predicate::True => Predicate::False,
            Predicate::False => Predicate::True,
            Predicate::Compare { left, op, right } => Predicate::Compare {
                left,
                op: op.negate(),
                right,
            },
            Predicate::IsNull(column) => Predicate::IsNotNull(column),
            Predicate::IsNotNull(column) => Predicate::IsNull(column),
            Predicate::Not(inner) => *inner,
            predicate => Predicate::Not(Box::new(predicate)),
        }
    }
}
