//! The first-match evaluator.
//!
//! A `Matcher` owns an ordered list of cases and a default outcome.
//! `eval` walks the cases in insertion order and resolves the outcome of
//! the first one whose condition accepts the input; if none does, the
//! default is resolved instead.
//!
//! Cases are addressed by `PatternId`, never by position: positions shift
//! when a case is removed, identities do not.

mod builders;

use casematch_value::{EvalResult, Value};

use crate::case::{Case, Condition, Outcome};
use crate::identity::PatternId;

pub use builders::DEFAULT_KEY;

#[derive(Debug)]
struct Entry {
    id: PatternId,
    case: Case,
}

/// Ordered, mutable first-match evaluator.
///
/// Not `Clone`: every identity belongs to exactly one entry.
#[derive(Debug, Default)]
pub struct Matcher {
    entries: Vec<Entry>,
    default: Outcome,
}

impl Matcher {
    /// Create a matcher from ordered `(condition, outcome)` pairs and a default.
    ///
    /// Nothing is evaluated here; every pair gets a fresh identity and is
    /// stored in order.
    pub fn new<I, C, O>(cases: I, default: impl Into<Outcome>) -> Self
    where
        I: IntoIterator<Item = (C, O)>,
        C: Into<Condition>,
        O: Into<Outcome>,
    {
        let mut matcher = Matcher {
            entries: Vec::new(),
            default: default.into(),
        };
        matcher.extend(cases);
        matcher
    }

    /// Create a matcher from ordered pairs with the default left unset.
    pub fn with_cases<I, C, O>(cases: I) -> Self
    where
        I: IntoIterator<Item = (C, O)>,
        C: Into<Condition>,
        O: Into<Outcome>,
    {
        Self::new(cases, Outcome::default())
    }

    // Mutation

    /// Append a case and return its identity.
    pub fn push_case(
        &mut self,
        condition: impl Into<Condition>,
        outcome: impl Into<Outcome>,
    ) -> PatternId {
        let id = PatternId::fresh();
        self.entries.push(Entry {
            id,
            case: Case::new(condition, outcome),
        });
        id
    }

    /// Append a case at the end. Chainable.
    pub fn case(
        &mut self,
        condition: impl Into<Condition>,
        outcome: impl Into<Outcome>,
    ) -> &mut Self {
        self.push_case(condition, outcome);
        self
    }

    /// Replace the default outcome. Chainable.
    pub fn set_default(&mut self, outcome: impl Into<Outcome>) -> &mut Self {
        self.default = outcome.into();
        self
    }

    /// By-value form of `case`.
    #[must_use]
    pub fn with_case(mut self, condition: impl Into<Condition>, outcome: impl Into<Outcome>) -> Self {
        self.push_case(condition, outcome);
        self
    }

    /// By-value form of `set_default`.
    #[must_use]
    pub fn with_default(mut self, outcome: impl Into<Outcome>) -> Self {
        self.default = outcome.into();
        self
    }

    /// Remove the case with this identity. Unknown identities are ignored.
    /// The remaining cases keep their relative order. Chainable.
    pub fn remove(&mut self, id: PatternId) -> &mut Self {
        match self.position(id) {
            Some(index) => {
                self.entries.remove(index);
            }
            None => tracing::debug!(?id, "remove: no such pattern"),
        }
        self
    }

    // Introspection

    /// Identities of all current cases, in evaluation order.
    pub fn ids(&self) -> impl ExactSizeIterator<Item = PatternId> + DoubleEndedIterator + '_ {
        self.entries.iter().map(|entry| entry.id)
    }

    /// Look up a case by identity.
    pub fn get_pattern(&self, id: PatternId) -> Option<&Case> {
        self.entries
            .iter()
            .find(|entry| entry.id == id)
            .map(|entry| &entry.case)
    }

    /// All cases with their identities, in evaluation order.
    pub fn cases(&self) -> impl ExactSizeIterator<Item = (PatternId, &Case)> + '_ {
        self.entries.iter().map(|entry| (entry.id, &entry.case))
    }

    pub fn contains(&self, id: PatternId) -> bool {
        self.position(id).is_some()
    }

    pub fn default_outcome(&self) -> &Outcome {
        &self.default
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position(&self, id: PatternId) -> Option<usize> {
        self.entries.iter().position(|entry| entry.id == id)
    }

    // Evaluation

    /// Resolve `input` against the cases in order, falling back to the default.
    ///
    /// Stops at the first accepting case; later conditions are not
    /// evaluated. Errors raised by a condition or outcome are returned
    /// unchanged.
    #[tracing::instrument(level = "trace", skip_all, fields(cases = self.entries.len()))]
    pub fn eval(&self, input: &Value) -> EvalResult {
        for entry in &self.entries {
            if entry.case.condition.accepts(input)? {
                tracing::trace!(id = ?entry.id, "case accepted");
                return entry.case.outcome.resolve(input);
            }
        }
        tracing::trace!("no case accepted, resolving default");
        self.default.resolve(input)
    }
}

impl<C, O> Extend<(C, O)> for Matcher
where
    C: Into<Condition>,
    O: Into<Outcome>,
{
    fn extend<I: IntoIterator<Item = (C, O)>>(&mut self, cases: I) {
        for (condition, outcome) in cases {
            self.push_case(condition, outcome);
        }
    }
}

impl<C, O> FromIterator<(C, O)> for Matcher
where
    C: Into<Condition>,
    O: Into<Outcome>,
{
    fn from_iter<I: IntoIterator<Item = (C, O)>>(cases: I) -> Self {
        Self::with_cases(cases)
    }
}
