//! Shared test utilities for integration tests
//!
//! Predicates are never executed by the library itself. These helpers stand
//! in for the external engine: a fixed set of member rows and a small
//! evaluator using SQL three-valued logic.

#![allow(dead_code)]

use std::cmp::Ordering;
use std::collections::HashMap;

use dynwhere::{parser, Column, CompareOp, Literal, Operand, Path, Predicate, Schema};

/// Load a test fixture from the tests/test_data directory
pub fn load_fixture(name: &str) -> Schema {
    let path = format!("tests/test_data/{}", name);
    parser::parse_schema_file(&path)
        .unwrap_or_else(|e| panic!("Failed to load test data {}: {}", name, e))
}

// =============================================================================
// Member paths
// =============================================================================

pub fn username() -> Path<String> {
    Path::new("m", "username")
}

pub fn age() -> Path<i32> {
    Path::new("m", "age")
}

pub fn team_id() -> Path<i64> {
    Path::new("m", "team_id")
}

// =============================================================================
// Fixture rows
// =============================================================================

pub type Row = HashMap<Column, Literal>;

pub fn member_row(id: i64, name: &str, age: i32, team: Option<i64>) -> Row {
    let mut row = Row::new();
    row.insert(Column::new("m", "member_id"), Literal::Int(id));
    row.insert(Column::new("m", "username"), Literal::from(name));
    row.insert(Column::new("m", "age"), Literal::from(age));
    row.insert(
        Column::new("m", "team_id"),
        team.map(Literal::Int).unwrap_or(Literal::Null),
    );
    row
}

/// member1..member4 aged 10..40; teamA (1) holds 1-2, teamB (2) holds 3-4
pub fn members() -> Vec<Row> {
    vec![
        member_row(1, "member1", 10, Some(1)),
        member_row(2, "member2", 20, Some(1)),
        member_row(3, "member3", 30, Some(2)),
        member_row(4, "member4", 40, Some(2)),
    ]
}

/// Usernames of the rows a predicate selects, in row order
pub fn fetch_usernames(rows: &[Row], predicate: &Predicate) -> Vec<String> {
    rows.iter()
        .filter(|row| evaluate(predicate, row) == Some(true))
        .filter_map(|row| match row.get(&Column::new("m", "username")) {
            Some(Literal::String(name)) => Some(name.clone()),
            _ => None,
        })
        .collect()
}

// =============================================================================
// Evaluator
// =============================================================================

/// Evaluate a predicate against one row; `None` is SQL UNKNOWN
pub fn evaluate(predicate: &Predicate, row: &Row) -> Option<bool> {
    match predicate {
        Predicate::True => Some(true),
        Predicate::False => Some(false),
        // Rendered as IS NULL / IS NOT NULL by the emitter
        Predicate::Compare {
            left,
            op,
            right: Operand::Literal(Literal::Null),
        } => match op {
            CompareOp::Eq => Some(value(row, left) == Literal::Null),
            CompareOp::NotEq => Some(value(row, left) != Literal::Null),
            _ => None,
        },
        Predicate::Compare { left, op, right } => {
            let lhs = value(row, left);
            let rhs = match right {
                Operand::Column(column) => value(row, column),
                Operand::Literal(lit) => lit.clone(),
            };
            let ordering = compare(&lhs, &rhs)?;
            Some(match op {
                CompareOp::Eq => ordering == Ordering::Equal,
                CompareOp::NotEq => ordering != Ordering::Equal,
                CompareOp::Lt => ordering == Ordering::Less,
                CompareOp::LtEq => ordering != Ordering::Greater,
                CompareOp::Gt => ordering == Ordering::Greater,
                CompareOp::GtEq => ordering != Ordering::Less,
            })
        }
        Predicate::In { column, values } => {
            let needle = value(row, column);
            let mut unknown = false;
            for candidate in values {
                match compare(&needle, candidate) {
                    Some(Ordering::Equal) => return Some(true),
                    Some(_) => {}
                    None => unknown = true,
                }
            }
            if unknown {
                None
            } else {
                Some(false)
            }
        }
        Predicate::Between { column, low, high } => {
            let v = value(row, column);
            let above = compare(&v, low)? != Ordering::Less;
            let below = compare(&v, high)? != Ordering::Greater;
            Some(above && below)
        }
        Predicate::Like {
            column,
            pattern,
            escape,
        } => match value(row, column) {
            Literal::String(s) => {
                let text: Vec<char> = s.chars().collect();
                let pattern: Vec<char> = pattern.chars().collect();
                Some(like_matches(&text, &pattern, *escape))
            }
            _ => None,
        },
        Predicate::IsNull(column) => Some(value(row, column) == Literal::Null),
        Predicate::IsNotNull(column) => Some(value(row, column) != Literal::Null),
        Predicate::And(parts) => {
            let mut result = Some(true);
            for part in parts {
                match evaluate(part, row) {
                    Some(false) => return Some(false),
                    None => result = None,
                    Some(true) => {}
                }
            }
            result
        }
        Predicate::Or(parts) => {
            let mut result = Some(false);
            for part in parts {
                match evaluate(part, row) {
                    Some(true) => return Some(true),
                    None => result = None,
                    Some(false) => {}
                }
            }
            result
        }
        Predicate::Not(inner) => evaluate(inner, row).map(|b| !b),
    }
}

fn value(row: &Row, column: &Column) -> Literal {
    row.get(column).cloned().unwrap_or(Literal::Null)
}

fn compare(lhs: &Literal, rhs: &Literal) -> Option<Ordering> {
    match (lhs, rhs) {
        (Literal::Int(a), Literal::Int(b)) => Some(a.cmp(b)),
        (Literal::Int(a), Literal::Float(b)) => (*a as f64).partial_cmp(b),
        (Literal::Float(a), Literal::Int(b)) => a.partial_cmp(&(*b as f64)),
        (Literal::Float(a), Literal::Float(b)) => a.partial_cmp(b),
        (Literal::String(a), Literal::String(b)) => Some(a.cmp(b)),
        (Literal::Bool(a), Literal::Bool(b)) => Some(a.cmp(b)),
        _ => None,
    }
}

/// LIKE matching with `%` and `_`; only a declared escape character escapes
fn like_matches(text: &[char], pattern: &[char], escape: Option<char>) -> bool {
    match pattern.split_first() {
        None => text.is_empty(),
        Some((ch, rest)) if Some(*ch) == escape && !rest.is_empty() => {
            text.first() == Some(&rest[0]) && like_matches(&text[1..], &rest[1..], escape)
        }
        Some(('%', rest)) => {
            (0..=text.len()).any(|skip| like_matches(&text[skip..], rest, escape))
        }
        Some(('_', rest)) => !text.is_empty() && like_matches(&text[1..], rest, escape),
        Some((ch, rest)) => text.first() == Some(ch) && like_matches(&text[1..], rest, escape),
    }
}
