//! Predicate expressions over filesystem entries
//!
//! Every predicate follows the same lifecycle: raw argument tokens are
//! appended with [`Expression::add_argument`], compiled exactly once by
//! [`Expression::initialize`], and the compiled predicate is then applied to
//! any number of entries. All fallibility is front-loaded into `initialize`;
//! `apply` never fails.
//!
//! Composition (AND/OR/NOT trees, hierarchy walking) is the caller's
//! business and depends only on this contract.

use crate::entry::Entry;
use crate::options::FindOptions;
use anyhow::{Result, bail};
use std::fmt;

pub mod kind;
pub mod mtime;
pub mod name;
pub mod number;
pub mod perm;


pub use kind::Kind;
pub use mtime::Mtime;
pub use name::Name;
pub use number::{Comparator, NumberExpression};
pub use perm::Perm;

/// Outcome of applying a predicate to a single entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The entry satisfies the predicate
    Pass,
    /// The entry does not satisfy the predicate
    Fail,
}

impl Verdict {
    /// Map a boolean comparison onto a verdict.
    pub fn from_bool(matched: bool) -> Self {
        if matched { Verdict::Pass } else { Verdict::Fail }
    }

    /// True for [`Verdict::Pass`].
    pub fn passed(self) -> bool {
        matches!(self, Verdict::Pass)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Pass => write!(f, "PASS"),
            Verdict::Fail => write!(f, "FAIL"),
        }
    }
}

/// Common lifecycle all predicates obey.
///
/// `initialize` must be called exactly once before `apply`. Once it has
/// succeeded, the compiled predicate is immutable: `apply` is a pure function
/// of the compiled spec and the entry's attributes, so repeated calls on the
/// same entry yield the same verdict. Applying a predicate that was never
/// initialized returns [`Verdict::Fail`] rather than panicking.
pub trait Expression {
    /// Append a raw argument token. No validation happens here.
    fn add_argument(&mut self, token: &str);

    /// Compile the accumulated arguments into this predicate's internal spec.
    ///
    /// Fails if no argument was supplied, more arguments were supplied than
    /// this predicate consumes, or the argument is malformed for this
    /// predicate's grammar.
    fn initialize(&mut self, options: &FindOptions) -> Result<()>;

    /// Evaluate the compiled predicate against one entry.
    fn apply(&self, entry: &dyn Entry) -> Verdict;
}

/// Consume exactly one pending argument token for `predicate`.
///
/// Every predicate in this crate takes a single argument, so the
/// zero-argument and surplus-argument errors are produced in one place and
/// read the same everywhere.
pub(crate) fn take_single_argument(args: &mut Vec<String>, predicate: &str) -> Result<String> {
    match args.len() {
        0 => bail!("{predicate} expects an argument, none was supplied"),
        1 => Ok(args.remove(0)),
        n => bail!("{predicate} expects exactly one argument, {n} were supplied"),
    }
}
