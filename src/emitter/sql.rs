//! SQL emitter
//!
//! Renders predicates as ANSI-style SQL, either with literals inlined or with
//! positional `$n` placeholders and a parameter list.

use super::error::EmitError;
use crate::entity::Entity;
use crate::expr::{Column, CompareOp, Literal, Operand, Predicate};

/// SQL text with its positional parameters
#[derive(Debug, Clone, PartialEq)]
pub struct BoundSql {
    pub sql: String,
    /// Values for `$1`, `$2`, ... in order
    pub params: Vec<Literal>,
}

/// Emit a predicate with literals inlined
pub fn emit_predicate(predicate: &Predicate) -> Result<String, EmitError> {
    let mut writer = SqlWriter::inline();
    emit_expr(predicate, &mut writer)
}

/// Emit a predicate with `$n` placeholders in place of literals
pub fn emit_parameterized(predicate: &Predicate) -> Result<BoundSql, EmitError> {
    let mut writer = SqlWriter::bound();
    let sql = emit_expr(predicate, &mut writer)?;
    Ok(BoundSql {
        sql,
        params: writer.params.unwrap_or_default(),
    })
}

/// Emit a full SELECT over an entity's table.
///
/// A match-all predicate produces no WHERE clause at all.
pub fn emit_select(entity: &Entity, predicate: &Predicate) -> Result<String, EmitError> {
    let table = emit_identifier(&entity.table);
    let from = if entity.table_alias() != entity.table {
        let alias = emit_identifier(entity.table_alias());
        format!("SELECT {alias}.*\nFROM {table} AS {alias}")
    } else {
        format!("SELECT *\nFROM {table}")
    };

    if predicate.is_match_all() {
        return Ok(from);
    }

    let condition = emit_predicate(predicate)?;
    Ok(format!("{from}\nWHERE {condition}"))
}

// ---------------------------------------------------------------------------
// Writer
// ---------------------------------------------------------------------------

struct SqlWriter {
    /// `None` inlines literals, `Some` collects them as parameters
    params: Option<Vec<Literal>>,
}

impl SqlWriter {
    fn inline() -> Self {
        Self { params: None }
    }

    fn bound() -> Self {
        Self {
            params: Some(Vec::new()),
        }
    }

    fn literal(&mut self, lit: &Literal) -> Result<String, EmitError> {
        if let Literal::Float(f) = lit {
            if !f.is_finite() {
                return Err(EmitError::InvalidLiteral(f.to_string()));
            }
        }

        match &mut self.params {
            Some(params) => {
                params.push(lit.clone());
                Ok(format!("${}", params.len()))
            }
            None => Ok(emit_literal(lit)),
        }
    }
}

// ---------------------------------------------------------------------------
// Predicates
// ---------------------------------------------------------------------------

fn emit_expr(predicate: &Predicate, w: &mut SqlWriter) -> Result<String, EmitError> {
    match predicate {
        Predicate::True => Ok("TRUE".to_string()),
        Predicate::False => Ok("FALSE".to_string()),
        Predicate::Compare { left, op, right } => emit_compare(left, *op, right, w),
        Predicate::In { column, values } => {
            if values.is_empty() {
                return Ok("FALSE".to_string());
            }
            let vals: Vec<String> = values
                .iter()
                .map(|v| w.literal(v))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(format!("{} IN ({})", emit_column(column), vals.join(", ")))
        }
        Predicate::Between { column, low, high } => {
            let low = w.literal(low)?;
            let high = w.literal(high)?;
            Ok(format!("{} BETWEEN {} AND {}", emit_column(column), low, high))
        }
        Predicate::Like {
            column,
            pattern,
            escape,
        } => {
            let pattern = w.literal(&Literal::String(pattern.clone()))?;
            let mut sql = format!("{} LIKE {}", emit_column(column), pattern);
            // The escape character is syntax, never a bound parameter
            if let Some(ch) = escape {
                sql.push_str(" ESCAPE ");
                sql.push_str(&emit_literal(&Literal::String(ch.to_string())));
            }
            Ok(sql)
        }
        Predicate::IsNull(column) => Ok(format!("{} IS NULL", emit_column(column))),
        Predicate::IsNotNull(column) => Ok(format!("{} IS NOT NULL", emit_column(column))),
        Predicate::And(parts) => emit_junction(parts, "AND", "TRUE", w),
        Predicate::Or(parts) => emit_junction(parts, "OR", "FALSE", w),
        Predicate::Not(inner) => Ok(format!("NOT ({})", emit_expr(inner, w)?)),
    }
}

fn emit_compare(
    left: &Column,
    op: CompareOp,
    right: &Operand,
    w: &mut SqlWriter,
) -> Result<String, EmitError> {
    let column = emit_column(left);
    match right {
        Operand::Literal(Literal::Null) => match op {
            CompareOp::Eq => Ok(format!("{} IS NULL", column)),
            CompareOp::NotEq => Ok(format!("{} IS NOT NULL", column)),
            _ => Err(EmitError::InvalidPredicate(format!(
                "cannot compare {} {} NULL",
                column,
                op.as_str()
            ))),
        },
        Operand::Literal(lit) => Ok(format!("{} {} {}", column, op.as_str(), w.literal(lit)?)),
        Operand::Column(other) => Ok(format!("{} {} {}", column, op.as_str(), emit_column(other))),
    }
}

fn emit_junction(
    parts: &[Predicate],
    keyword: &str,
    empty: &str,
    w: &mut SqlWriter,
) -> Result<String, EmitError> {
    if parts.is_empty() {
        return Ok(empty.to_string());
    }
    let parts: Vec<String> = parts
        .iter()
        .map(|p| emit_expr(p, w))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(format!("({})", parts.join(&format!(" {} ", keyword))))
}

fn emit_column(col: &Column) -> String {
    if col.table.is_empty() {
        emit_identifier(&col.name)
    } else {
        format!("{}.{}", emit_identifier(&col.table), emit_identifier(&col.name))
    }
}

/// Reserved words that cannot appear as bare identifiers
const RESERVED: &[&str] = &[
    "all", "and", "any", "as", "asc", "between", "by", "case", "check", "column", "constraint",
    "create", "cross", "current_date", "current_user", "default", "delete", "desc", "distinct",
    "drop", "else", "end", "except", "exists", "false", "fetch", "for", "foreign", "from", "full",
    "grant", "group", "having", "in", "inner", "insert", "intersect", "into", "is", "join", "left",
    "like", "limit", "natural", "not", "null", "offset", "on", "or", "order", "outer", "primary",
    "references", "right", "select", "session_user", "table", "then", "to", "true", "union",
    "unique", "update", "user", "using", "values", "when", "where", "with",
];

/// Bare when a plain lowercase non-reserved name, double-quoted otherwise.
///
/// Identifiers may be schema-qualified (`sales.order`); each part is handled
/// separately.
fn emit_identifier(name: &str) -> String {
    name.split('.')
        .map(|part| {
            let plain = part
                .chars()
                .next()
                .is_some_and(|c| c.is_ascii_lowercase() || c == '_')
                && part
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_');
            if plain && !RESERVED.contains(&part) {
                part.to_string()
            } else {
                format!("\"{}\"", part.replace('"', "\"\""))
            }
        })
        .collect::<Vec<_>>()
        .join(".")
}

fn emit_literal(lit: &Literal) -> String {
    match lit {
        Literal::Null => "NULL".to_string(),
        Literal::Bool(b) => if *b { "TRUE".to_string() } else { "FALSE".to_string() },
        Literal::Int(i) => i.to_string(),
        Literal::Float(f) => format!("{}", f),
        Literal::String(s) => format!("'{}'", s.replace('\'', "''")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::Path;
    use crate::parser::parse_schema_str;

    fn username() -> Path<String> {
        Path::new("m", "username")
    }

    fn age() -> Path<i32> {
        Path::new("m", "age")
    }

    // -- unit: leaves ---------------------------------------------------------

    #[test]
    fn test_sql_comparison() {
        assert_eq!(emit_predicate(&username().eq("member1")).unwrap(), "m.username = 'member1'");
        assert_eq!(emit_predicate(&age().ne(10)).unwrap(), "m.age <> 10");
        assert_eq!(emit_predicate(&age().loe(30)).unwrap(), "m.age <= 30");
    }

    #[test]
    fn test_sql_escapes_quotes() {
        assert_eq!(
            emit_predicate(&username().eq("o'brien")).unwrap(),
            "m.username = 'o''brien'"
        );
    }

    #[test]
    fn test_sql_in_between_like() {
        assert_eq!(emit_predicate(&age().in_list([10, 20])).unwrap(), "m.age IN (10, 20)");
        assert_eq!(
            emit_predicate(&age().between(10, 30)).unwrap(),
            "m.age BETWEEN 10 AND 30"
        );
        assert_eq!(
            emit_predicate(&username().starts_with("member")).unwrap(),
            "m.username LIKE 'member%' ESCAPE '\\'"
        );
    }

    #[test]
    fn test_sql_like_declares_escape_when_wildcards_are_escaped() {
        assert_eq!(
            emit_predicate(&username().contains("50%")).unwrap(),
            "m.username LIKE '%50\\%%' ESCAPE '\\'"
        );
        assert_eq!(
            emit_predicate(&username().like("mem_er%")).unwrap(),
            "m.username LIKE 'mem_er%'"
        );

        let bound = emit_parameterized(&username().starts_with("a_b")).unwrap();
        assert_eq!(bound.sql, "m.username LIKE $1 ESCAPE '\\'");
        assert_eq!(bound.params, vec![Literal::String("a\\_b%".into())]);
    }

    #[test]
    fn test_sql_quotes_reserved_and_mixed_case_identifiers() {
        let schema = parse_schema_str(
            "entities:\n  - name: order\n    table: order\n    fields:\n      - name: userName\n        type: string\n",
        )
        .unwrap();
        let order = schema.get_entity("order").unwrap();
        let user_name: Path<String> = order.path("userName").unwrap();

        assert_eq!(
            emit_select(order, &user_name.eq("member1")).unwrap(),
            "SELECT *\nFROM \"order\"\nWHERE \"order\".\"userName\" = 'member1'"
        );
        assert_eq!(
            emit_predicate(&Path::<i64>::new("sales.user", "id").eq(1)).unwrap(),
            "sales.\"user\".id = 1"
        );
    }

    #[test]
    fn test_sql_null_handling() {
        let team_id = Path::<i64>::new("m", "team_id");
        assert_eq!(emit_predicate(&team_id.is_null()).unwrap(), "m.team_id IS NULL");
        assert_eq!(
            emit_predicate(&Predicate::compare(
                Column::new("m", "team_id"),
                CompareOp::NotEq,
                Literal::Null
            ))
            .unwrap(),
            "m.team_id IS NOT NULL"
        );
        assert!(matches!(
            emit_predicate(&Predicate::compare(
                Column::new("m", "team_id"),
                CompareOp::Lt,
                Literal::Null
            )),
            Err(EmitError::InvalidPredicate(_))
        ));
    }

    #[test]
    fn test_sql_rejects_non_finite_float() {
        let score = Path::<f64>::new("m", "score");
        assert!(matches!(
            emit_predicate(&score.gt(f64::NAN)),
            Err(EmitError::InvalidLiteral(_))
        ));
    }

    // -- unit: junctions ------------------------------------------------------

    #[test]
    fn test_sql_and_or_not() {
        let predicate = username().eq("member1").and(age().eq(10));
        assert_eq!(
            emit_predicate(&predicate).unwrap(),
            "(m.username = 'member1' AND m.age = 10)"
        );

        let predicate = age().lt(20).or(age().gt(30));
        assert_eq!(emit_predicate(&predicate).unwrap(), "(m.age < 20 OR m.age > 30)");

        let predicate = !username().eq("member1").and(age().eq(10));
        assert_eq!(
            emit_predicate(&predicate).unwrap(),
            "NOT ((m.username = 'member1' AND m.age = 10))"
        );
    }

    #[test]
    fn test_sql_constants() {
        assert_eq!(emit_predicate(&Predicate::True).unwrap(), "TRUE");
        assert_eq!(emit_predicate(&Predicate::False).unwrap(), "FALSE");
        assert_eq!(emit_predicate(&Predicate::And(vec![])).unwrap(), "TRUE");
        assert_eq!(emit_predicate(&Predicate::Or(vec![])).unwrap(), "FALSE");
    }

    // -- unit: parameters -----------------------------------------------------

    #[test]
    fn test_sql_parameterized_numbers_placeholders_in_order() {
        let predicate = username()
            .eq("member1")
            .and(age().between(10, 30))
            .and(username().eq_path(&Path::new("t", "name")));

        let bound = emit_parameterized(&predicate).unwrap();
        assert_eq!(
            bound.sql,
            "(m.username = $1 AND m.age BETWEEN $2 AND $3 AND m.username = t.name)"
        );
        assert_eq!(
            bound.params,
            vec![
                Literal::String("member1".into()),
                Literal::Int(10),
                Literal::Int(30)
            ]
        );
    }

    // -- unit: select ---------------------------------------------------------

    #[test]
    fn test_sql_select_omits_where_for_match_all() {
        let schema = parse_schema_str(
            "entities:\n  - name: member\n    table: member\n    alias: m\n    fields: []\n",
        )
        .unwrap();
        let member = schema.get_entity("member").unwrap();

        assert_eq!(
            emit_select(member, &Predicate::True).unwrap(),
            "SELECT m.*\nFROM member AS m"
        );
        assert_eq!(
            emit_select(member, &age().eq(10)).unwrap(),
            "SELECT m.*\nFROM member AS m\nWHERE m.age = 10"
        );
    }
}
