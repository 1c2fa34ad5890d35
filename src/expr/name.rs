//! Name predicate
//!
//! Matches the entry's base name against a filesystem glob (`*.log`,
//! `part-?????`). The glob is compiled once at initialize; evaluation is a
//! single matcher lookup.

use super::{Expression, Verdict, take_single_argument};
use crate::entry::Entry;
use crate::options::FindOptions;
use anyhow::{Context, Result};
use globset::{Glob, GlobMatcher};
use tracing::debug;

/// Predicate matching entry base names against a glob pattern.
#[derive(Debug, Default)]
pub struct Name {
    args: Vec<String>,
    matcher: Option<GlobMatcher>,
}

impl Name {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Expression for Name {
    fn add_argument(&mut self, token: &str) {
        self.args.push(token.to_string());
    }

    fn initialize(&mut self, _options: &FindOptions) -> Result<()> {
        let token = take_single_argument(&mut self.args, "name")?;
        let glob = Glob::new(&token).with_context(|| format!("invalid name pattern {token:?}"))?;
        debug!(pattern = %token, "compiled name glob");
        self.matcher = Some(glob.compile_matcher());
        Ok(())
    }

    fn apply(&self, entry: &dyn Entry) -> Verdict {
        match &self.matcher {
            Some(matcher) => Verdict::from_bool(matcher.is_match(entry.name())),
            None => Verdict::Fail,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::Metadata;

    fn name_expr(pattern: &str) -> Name {
        let mut expr = Name::new();
        expr.add_argument(pattern);
        expr.initialize(&FindOptions::default()).unwrap();
        expr
    }

    #[test]
    fn test_glob_matching() {
        let expr = name_expr("*.log");
        assert_eq!(expr.apply(&Metadata::file("server.log")), Verdict::Pass);
        assert_eq!(expr.apply(&Metadata::file("server.txt")), Verdict::Fail);

        let expr = name_expr("part-?????");
        assert_eq!(expr.apply(&Metadata::file("part-00000")), Verdict::Pass);
        assert_eq!(expr.apply(&Metadata::file("part-0")), Verdict::Fail);
    }

    #[test]
    fn test_literal_name() {
        let expr = name_expr("README.md");
        assert_eq!(expr.apply(&Metadata::file("README.md")), Verdict::Pass);
        assert_eq!(expr.apply(&Metadata::file("README")), Verdict::Fail);
    }

    #[test]
    fn test_invalid_pattern_fails_initialize() {
        let mut expr = Name::new();
        expr.add_argument("a[");
        assert!(expr.initialize(&FindOptions::default()).is_err());
    }
}
