use crate::expr::Predicate;

/// Incrementally builds a predicate from conditions added one at a time.
///
/// An empty builder is distinct from any condition: [`build`](Self::build)
/// turns it into the match-all predicate rather than a missing one.
///
/// ```
/// use dynwhere::{Path, PredicateBuilder};
///
/// let username: Path<String> = Path::new("m", "username");
/// let age: Path<i32> = Path::new("m", "age");
///
/// let username_cond = Some("member1");
/// let age_cond: Option<i32> = None;
///
/// let mut builder = PredicateBuilder::new();
/// if let Some(name) = username_cond {
///     builder.and(username.eq(name));
/// }
/// if let Some(value) = age_cond {
///     builder.and(age.eq(value));
/// }
///
/// assert_eq!(builder.build(), username.eq("member1"));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PredicateBuilder {
    predicate: Option<Predicate>,
}

impl PredicateBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an initial condition
    pub fn with(predicate: Predicate) -> Self {
        Self {
            predicate: Some(predicate),
        }
    }

    pub fn and(&mut self, predicate: Predicate) -> &mut Self {
        self.predicate = Some(match self.predicate.take() {
            Some(current) => current.and(predicate),
            None => predicate,
        });
        self
    }

    /// AND the condition only if it is present
    pub fn and_opt(&mut self, predicate: Option<Predicate>) -> &mut Self {
        if let Some(predicate) = predicate {
            self.and(predicate);
        }
        self
    }

    pub fn and_not(&mut self, predicate: Predicate) -> &mut Self {
        self.and(!predicate)
    }

    pub fn or(&mut self, predicate: Predicate) -> &mut Self {
        self.predicate = Some(match self.predicate.take() {
            Some(current) => current.or(predicate),
            None => predicate,
        });
        self
    }

    /// OR the condition only if it is present
    pub fn or_opt(&mut self, predicate: Option<Predicate>) -> &mut Self {
        if let Some(predicate) = predicate {
            self.or(predicate);
        }
        self
    }

    /// True once any condition has been added
    pub fn has_value(&self) -> bool {
        self.predicate.is_some()
    }

    pub fn value(&self) -> Option<&Predicate> {
        self.predicate.as_ref()
    }

    pub fn build(self) -> Predicate {
        self.predicate.unwrap_or(Predicate::True)
    }
}
