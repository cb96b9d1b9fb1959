use tracing::{debug, trace};

use super::error::{ComposeError, OperandSide};
use crate::criteria::Criterion;
use crate::expr::Predicate;

/// Compose criteria into a single predicate.
///
/// Absent criteria are skipped; present ones are combined with AND in input
/// order. With nothing present the result is [`Predicate::True`], which is
/// safe to use wherever a filter is expected.
pub fn compose<I>(criteria: I) -> Predicate
where
    I: IntoIterator<Item = Criterion>,
{
    let mut present = 0usize;
    let mut skipped = 0usize;

    let predicate = criteria
        .into_iter()
        .filter_map(|criterion| {
            if criterion.is_present() {
                present += 1;
            } else {
                trace!(criterion = criterion.name(), "skipping absent criterion");
                skipped += 1;
            }
            criterion.into_predicate()
        })
        .fold(Predicate::True, Predicate::and);

    debug!(present, skipped, "composed predicate");
    predicate
}

/// Compose already-built optional predicates, ignoring `None` entries.
///
/// This is the "one argument per condition" style, where each caller helper
/// returns `None` for an unset input.
pub fn compose_options<I>(predicates: I) -> Predicate
where
    I: IntoIterator<Item = Option<Predicate>>,
{
    Predicate::all(predicates.into_iter().flatten())
}

/// AND two predicates that must both exist.
///
/// Chaining helpers that each return `Option<Predicate>` works only when
/// every link is present. A missing operand fails here with
/// [`ComposeError::InvalidOperand`]; use [`compose`] or [`compose_options`]
/// when inputs may be absent.
pub fn strict_and(
    lhs: Option<Predicate>,
    rhs: Option<Predicate>,
) -> Result<Predicate, ComposeError> {
    match (lhs, rhs) {
        (Some(lhs), Some(rhs)) => Ok(lhs.and(rhs)),
        (None, Some(_)) => Err(ComposeError::InvalidOperand {
            side: OperandSide::Left,
        }),
        (Some(_), None) => Err(ComposeError::InvalidOperand {
            side: OperandSide::Right,
        }),
        (None, None) => Err(ComposeError::InvalidOperand {
            side: OperandSide::Both,
        }),
    }
}
