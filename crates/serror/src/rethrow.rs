//! Re-throw filter.
//!
//! A [`Criteria`] is a declarative predicate over an error's code, kind,
//! locality and status. Clauses within one criteria are OR'd; `and` chains
//! another criteria by conjunction:
//!
//! ```text
//!   matches = (any own clause) && (and.matches, if present)
//! ```
//!
//! [`rethrow_if`] turns a match into `Err(error)` so the caller can
//! propagate it with `?` and keep handling everything else.
//!
//! ```
//! use serror::{rethrow_if, Criteria, Kind, SError};
//!
//! fn recover(err: SError) -> Result<&'static str, SError> {
//!     let err = rethrow_if(err, &Criteria::new().status_gte(500))?;
//!     Ok(if err.is_a(Kind::NotFound) { "default" } else { "retry" })
//! }
//!
//! assert_eq!(recover(SError::from(Kind::NotFound)).unwrap(), "default");
//! assert!(recover(SError::from(Kind::Unavailable)).is_err());
//! ```

use crate::inspect::Inspect;
use crate::kind::Kind;

/// Declarative match on an error.
#[derive(Debug, Clone, Default)]
pub struct Criteria {
    code_is: Vec<String>,
    code_is_not: Vec<String>,
    instance_of: Vec<Kind>,
    instance_of_not: Vec<Kind>,
    is_local: Option<bool>,
    status_gt: Option<u16>,
    status_gte: Option<u16>,
    status_lt: Option<u16>,
    status_lte: Option<u16>,
    status_is: Vec<u16>,
    status_is_not: Vec<u16>,
    and: Option<Box<Criteria>>,
}

impl Criteria {
    pub fn new() -> Self {
        Self::default()
    }

    /// Matches when the error's code is `code`. Repeat to match any of
    /// several codes.
    pub fn code_is(mut self, code: impl Into<String>) -> Self {
        self.code_is.push(code.into());
        self
    }

    /// Matches when the error has no code or a code other than all the
    /// listed ones.
    pub fn code_is_not(mut self, code: impl Into<String>) -> Self {
        self.code_is_not.push(code.into());
        self
    }

    /// Matches errors of `kind` or any of its descendants.
    pub fn instance_of(mut self, kind: Kind) -> Self {
        self.instance_of.push(kind);
        self
    }

    pub fn instance_of_not(mut self, kind: Kind) -> Self {
        self.instance_of_not.push(kind);
        self
    }

    /// `true` matches errors not known to be remote; `false` matches
    /// remote ones.
    pub fn is_local(mut self, local: bool) -> Self {
        self.is_local = Some(local);
        self
    }

    pub fn status_gt(mut self, status: u16) -> Self {
        self.status_gt = Some(status);
        self
    }

    pub fn status_gte(mut self, status: u16) -> Self {
        self.status_gte = Some(status);
        self
    }

    pub fn status_lt(mut self, status: u16) -> Self {
        self.status_lt = Some(status);
        self
    }

    pub fn status_lte(mut self, status: u16) -> Self {
        self.status_lte = Some(status);
        self
    }

    pub fn status_is(mut self, status: u16) -> Self {
        self.status_is.push(status);
        self
    }

    /// Matches when the error has no status or one other than all the
    /// listed ones.
    pub fn status_is_not(mut self, status: u16) -> Self {
        self.status_is_not.push(status);
        self
    }

    /// Also require `other` to match.
    pub fn and(mut self, other: Criteria) -> Self {
        self.and = Some(Box::new(other));
        self
    }

    fn has_own_clauses(&self) -> bool {
        !self.code_is.is_empty()
            || !self.code_is_not.is_empty()
            || !self.instance_of.is_empty()
            || !self.instance_of_not.is_empty()
            || self.is_local.is_some()
            || self.status_gt.is_some()
            || self.status_gte.is_some()
            || self.status_lt.is_some()
            || self.status_lte.is_some()
            || !self.status_is.is_empty()
            || !self.status_is_not.is_empty()
    }

    fn any_own_clause<E: Inspect + ?Sized>(&self, error: &E) -> bool {
        let code = error.code();
        let status = error.status();
        let kind = error.kind();

        let code_is = code.is_some_and(|c| self.code_is.iter().any(|x| x == c));
        let code_is_not = !self.code_is_not.is_empty()
            && code.map_or(true, |c| !self.code_is_not.iter().any(|x| x == c));

        let instance_of = kind.is_some_and(|k| self.instance_of.iter().any(|&x| k.is_a(x)));
        let instance_of_not = !self.instance_of_not.is_empty()
            && kind.map_or(true, |k| !self.instance_of_not.iter().any(|&x| k.is_a(x)));

        let locality = self.is_local.is_some_and(|want| want != is_remote(error));

        let compare = |bound: Option<u16>, cmp: fn(u16, u16) -> bool| {
            matches!((bound, status), (Some(b), Some(s)) if cmp(s, b))
        };
        let status_range = compare(self.status_gt, |s, b| s > b)
            || compare(self.status_gte, |s, b| s >= b)
            || compare(self.status_lt, |s, b| s < b)
            || compare(self.status_lte, |s, b| s <= b);
        let status_is = status.is_some_and(|s| self.status_is.contains(&s));
        let status_is_not = !self.status_is_not.is_empty()
            && status.map_or(true, |s| !self.status_is_not.contains(&s));

        code_is
            || code_is_not
            || instance_of
            || instance_of_not
            || locality
            || status_range
            || status_is
            || status_is_not
    }

    /// Evaluate against `error`. An empty criteria never matches.
    pub fn matches<E: Inspect + ?Sized>(&self, error: &E) -> bool {
        let and = self.and.as_deref();
        if !self.has_own_clauses() {
            return and.is_some_and(|c| c.matches(error));
        }
        self.any_own_clause(error) && and.map_or(true, |c| c.matches(error))
    }
}

/// Remote: an `ExternalService` kind, or anything declaring itself
/// non-local.
fn is_remote<E: Inspect + ?Sized>(error: &E) -> bool {
    error.kind().is_some_and(Kind::is_remote) || error.is_local() == Some(false)
}

/// `Err(error)` when `criteria` matches, `Ok(error)` otherwise.
pub fn rethrow_if<E: Inspect>(error: E, criteria: &Criteria) -> Result<E, E> {
    if criteria.matches(&error) {
        tracing::trace!(code = error.code().unwrap_or(""), status = ?error.status(), "re-raising");
        Err(error)
    } else {
        Ok(error)
    }
}

/// [`rethrow_if`] for an optional error; `None` is never re-raised.
pub fn rethrow_if_some<E: Inspect>(error: Option<E>, criteria: &Criteria) -> Result<Option<E>, E> {
    match error {
        Some(error) => rethrow_if(error, criteria).map(Some),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inspect::Failure;
    use crate::{Options, Scope, SError};

    fn err(kind: Kind) -> SError {
        Scope::new().error(kind, Options::new())
    }

    #[test]
    fn status_is() {
        let criteria = Criteria::new().status_is(500);
        assert!(rethrow_if(Failure::new("x").with_status(500), &criteria).is_err());
        assert!(rethrow_if(Failure::new("x").with_status(404), &criteria).is_ok());
    }

    #[test]
    fn status_gte_boundary() {
        let criteria = Criteria::new().status_gte(500);
        assert!(criteria.matches(&Failure::new("x").with_status(500)));
        assert!(criteria.matches(&Failure::new("x").with_status(503)));
        assert!(!criteria.matches(&Failure::new("x").with_status(499)));
        assert!(!criteria.matches(&Failure::new("x")));
    }

    #[test]
    fn comparisons() {
        let e = Failure::new("x").with_status(404);
        assert!(Criteria::new().status_gt(403).matches(&e));
        assert!(!Criteria::new().status_gt(404).matches(&e));
        assert!(Criteria::new().status_lt(405).matches(&e));
        assert!(Criteria::new().status_lte(404).matches(&e));
        assert!(!Criteria::new().status_lt(404).matches(&e));
        assert!(Criteria::new().status_is_not(500).matches(&e));
        assert!(!Criteria::new().status_is_not(404).matches(&e));
    }

    #[test]
    fn none_is_never_raised() {
        let criteria = Criteria::new().status_gte(0);
        assert!(rethrow_if_some::<SError>(None, &criteria).unwrap().is_none());
        assert!(rethrow_if_some(Some(err(Kind::Common)), &criteria).is_err());
    }

    #[test]
    fn empty_never_matches() {
        assert!(!Criteria::new().matches(&err(Kind::Common)));
        assert!(!Criteria::new().and(Criteria::new()).matches(&err(Kind::Common)));
    }

    #[test]
    fn codes() {
        let e = Failure::new("x").with_code("ECONNRESET");
        assert!(Criteria::new().code_is("ETIMEDOUT").code_is("ECONNRESET").matches(&e));
        assert!(!Criteria::new().code_is("ETIMEDOUT").matches(&e));
        assert!(!Criteria::new().code_is_not("ECONNRESET").matches(&e));
        assert!(Criteria::new().code_is_not("ENOENT").matches(&e));
        assert!(Criteria::new().code_is_not("ENOENT").matches(&Failure::new("no code")));
    }

    #[test]
    fn kinds() {
        let e = err(Kind::ArgumentOutOfRange);
        assert!(Criteria::new().instance_of(Kind::ArgumentInvalid).matches(&e));
        assert!(!Criteria::new().instance_of(Kind::NotFound).matches(&e));
        assert!(Criteria::new().instance_of_not(Kind::NotFound).matches(&e));
        assert!(!Criteria::new().instance_of_not(Kind::Common).matches(&e));
        assert!(!Criteria::new().instance_of(Kind::Common).matches(&Failure::new("x")));
    }

    #[test]
    fn locality() {
        let local = Criteria::new().is_local(true);
        let remote = Criteria::new().is_local(false);

        assert!(local.matches(&err(Kind::Database)));
        assert!(!local.matches(&err(Kind::Timeout)));
        assert!(remote.matches(&err(Kind::Connection)));

        let flagged = Scope::new().error(Kind::Transaction, Options::new().field("is_local", false));
        assert!(!local.matches(&flagged));
        assert!(remote.matches(&flagged));

        assert!(local.matches(&Failure::new("x")));
        assert!(remote.matches(&Failure::new("x").with_locality(false)));
    }

    #[test]
    fn or_within_and_across() {
        let criteria = Criteria::new()
            .status_is(404)
            .code_is("ENOENT")
            .and(Criteria::new().instance_of(Kind::FileNotFound));

        assert!(criteria.matches(&err(Kind::FileNotFound)));
        // Own clauses match, nested one does not.
        assert!(!criteria.matches(&err(Kind::DirectoryNotFound)));
        // Nested matches, own clauses do not.
        let gone = Scope::new().error(Kind::FileNotFound, Options::new().status(410).code("EGONE"));
        assert!(!criteria.matches(&gone));
    }

    #[test]
    fn and_only_delegates() {
        let criteria = Criteria::new().and(Criteria::new().status_gte(500));
        assert!(criteria.matches(&err(Kind::Common)));
        assert!(!criteria.matches(&err(Kind::NotFound)));
    }

    #[test]
    fn rethrow_returns_same_instance() {
        let e = err(Kind::Unavailable);
        let message = e.message().to_string();
        let raised = rethrow_if(e, &Criteria::new().status_is(503)).unwrap_err();
        assert_eq!(raised.kind(), Kind::Unavailable);
        assert_eq!(raised.message(), message);
    }
}
