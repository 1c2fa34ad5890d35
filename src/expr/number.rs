//! Numeric comparator predicates
//!
//! Parses find-style numeric arguments: `n` matches an attribute equal to n,
//! `+n` matches attributes strictly greater, `-n` strictly less. One
//! [`NumberExpression`] struct covers every numeric attribute an entry
//! exposes; which attribute is compared is fixed at construction.

use super::{Expression, Verdict, take_single_argument};
use crate::entry::Entry;
use crate::options::FindOptions;
use anyhow::{Result, bail};
use tracing::debug;

/// How a comparator relates attribute values to its magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CompareMode {
    Equal,
    GreaterThan,
    LessThan,
}

/// Parsed form of a numeric argument: compare mode plus magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Comparator {
    mode: CompareMode,
    magnitude: u64,
}

impl Comparator {
    /// Parse `[+|-]<digits>`. An optional leading sign selects the compare
    /// mode; the remainder must be a plain non-negative integer literal.
    pub fn parse(token: &str) -> Result<Self> {
        let (mode, digits) = match token.strip_prefix('+') {
            Some(rest) => (CompareMode::GreaterThan, rest),
            None => match token.strip_prefix('-') {
                Some(rest) => (CompareMode::LessThan, rest),
                None => (CompareMode::Equal, token),
            },
        };
        // u64::from_str accepts a leading '+' of its own, so the digits are
        // checked explicitly to keep forms like "++5" out.
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            bail!("invalid numeric argument {token:?}");
        }
        let magnitude = match digits.parse::<u64>() {
            Ok(magnitude) => magnitude,
            Err(_) => bail!("numeric argument {token:?} is out of range"),
        };
        Ok(Comparator { mode, magnitude })
    }

    /// True if `value` satisfies the comparison.
    pub fn matches(&self, value: u64) -> bool {
        match self.mode {
            CompareMode::Equal => value == self.magnitude,
            CompareMode::GreaterThan => value > self.magnitude,
            CompareMode::LessThan => value < self.magnitude,
        }
    }
}

/// A predicate comparing one numeric attribute of an entry.
///
/// The attribute accessor is fixed by the constructor; the comparator is
/// compiled from the argument token by `initialize`. [`Self::apply_number`]
/// is the pure comparison hook `apply` routes through.
pub struct NumberExpression {
    description: &'static str,
    attribute: fn(&dyn Entry) -> u64,
    args: Vec<String>,
    comparator: Option<Comparator>,
}

impl NumberExpression {
    fn new(description: &'static str, attribute: fn(&dyn Entry) -> u64) -> Self {
        NumberExpression {
            description,
            attribute,
            args: Vec::new(),
            comparator: None,
        }
    }

    /// Predicate over the entry's backing block count.
    pub fn blocks() -> Self {
        Self::new("blocks", |entry| entry.block_count())
    }

    /// Predicate over the entry's replication factor.
    pub fn replicas() -> Self {
        Self::new("replicas", |entry| entry.replication())
    }

    /// Predicate over the entry's length in bytes.
    pub fn size() -> Self {
        Self::new("size", |entry| entry.size())
    }

    /// Compare one raw attribute value against the compiled comparator.
    pub fn apply_number(&self, value: u64) -> Verdict {
        match &self.comparator {
            Some(comparator) => Verdict::from_bool(comparator.matches(value)),
            None => Verdict::Fail,
        }
    }
}

impl Expression for NumberExpression {
    fn add_argument(&mut self, token: &str) {
        self.args.push(token.to_string());
    }

    fn initialize(&mut self, _options: &FindOptions) -> Result<()> {
        let token = take_single_argument(&mut self.args, self.description)?;
        let comparator = Comparator::parse(&token)?;
        debug!(predicate = self.description, ?comparator, "compiled numeric comparator");
        self.comparator = Some(comparator);
        Ok(())
    }

    fn apply(&self, entry: &dyn Entry) -> Verdict {
        self.apply_number((self.attribute)(entry))
    }
}
