use crate::expr::Predicate;

/// One named, optional filter input.
///
/// An absent criterion carries no predicate at all, which is distinct from a
/// present criterion whose value happens to be `0` or `""`.
#[derive(Debug, Clone, PartialEq)]
pub struct Criterion {
    name: String,
    predicate: Option<Predicate>,
}

impl Criterion {
    /// Build a criterion from an optional value and the function that turns a
    /// present value into its single-field predicate.
    ///
    /// `build` only runs when `value` is `Some`.
    pub fn new<T, F>(name: impl Into<String>, value: Option<T>, build: F) -> Self
    where
        F: FnOnce(T) -> Predicate,
    {
        Self {
            name: name.into(),
            predicate: value.map(build),
        }
    }

    pub fn present(name: impl Into<String>, predicate: Predicate) -> Self {
        Self {
            name: name.into(),
            predicate: Some(predicate),
        }
    }

    pub fn absent(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            predicate: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_present(&self) -> bool {
        self.predicate.is_some()
    }

    pub fn predicate(&self) -> Option<&Predicate> {
        self.predicate.as_ref()
    }

    pub fn into_predicate(self) -> Option<Predicate> {
        self.predicate
    }
}
