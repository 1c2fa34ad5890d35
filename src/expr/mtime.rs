//! Modification-age predicate
//!
//! Compares an entry's age, in whole days relative to the run's start time,
//! against a find-style numeric argument: `7` means exactly seven days old,
//! `+7` older, `-7` younger. The start time is snapshotted from the options
//! at initialize so one walk evaluates every entry against the same instant.

use super::number::Comparator;
use super::{Expression, Verdict, take_single_argument};
use crate::entry::Entry;
use crate::options::FindOptions;
use anyhow::Result;

const MS_PER_DAY: u64 = 24 * 60 * 60 * 1000;

/// Predicate over the entry's modification age in whole days.
#[derive(Debug, Default)]
pub struct Mtime {
    args: Vec<String>,
    spec: Option<(Comparator, u64)>,
}

impl Mtime {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Expression for Mtime {
    fn add_argument(&mut self, token: &str) {
        self.args.push(token.to_string());
    }

    fn initialize(&mut self, options: &FindOptions) -> Result<()> {
        let token = take_single_argument(&mut self.args, "mtime")?;
        let comparator = Comparator::parse(&token)?;
        self.spec = Some((comparator, options.start_time_ms));
        Ok(())
    }

    fn apply(&self, entry: &dyn Entry) -> Verdict {
        let Some((comparator, start_time_ms)) = self.spec else {
            return Verdict::Fail;
        };
        // Entries modified after the start of the run count as zero days old.
        let age_days = start_time_ms.saturating_sub(entry.mtime_ms()) / MS_PER_DAY;
        Verdict::from_bool(comparator.matches(age_days))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::Metadata;

    const START_MS: u64 = 100 * MS_PER_DAY;

    fn mtime_expr(arg: &str) -> Mtime {
        let mut expr = Mtime::new();
        expr.add_argument(arg);
        let options = FindOptions::default().with_start_time_ms(START_MS);
        expr.initialize(&options).unwrap();
        expr
    }

    fn entry_aged_days(days: u64) -> Metadata {
        Metadata::file("aged").with_mtime_ms(START_MS - days * MS_PER_DAY)
    }

    #[test]
    fn test_age_exactly() {
        let expr = mtime_expr("7");
        assert_eq!(expr.apply(&entry_aged_days(7)), Verdict::Pass);
        assert_eq!(expr.apply(&entry_aged_days(6)), Verdict::Fail);
        assert_eq!(expr.apply(&entry_aged_days(8)), Verdict::Fail);
    }

    #[test]
    fn test_age_older_and_younger() {
        let older = mtime_expr("+7");
        assert_eq!(older.apply(&entry_aged_days(8)), Verdict::Pass);
        assert_eq!(older.apply(&entry_aged_days(7)), Verdict::Fail);

        let younger = mtime_expr("-7");
        assert_eq!(younger.apply(&entry_aged_days(6)), Verdict::Pass);
        assert_eq!(younger.apply(&entry_aged_days(7)), Verdict::Fail);
    }

    #[test]
    fn test_age_truncates_to_whole_days() {
        let expr = mtime_expr("0");
        // Half a day old truncates to zero days
        let entry = Metadata::file("fresh").with_mtime_ms(START_MS - MS_PER_DAY / 2);
        assert_eq!(expr.apply(&entry), Verdict::Pass);
    }

    #[test]
    fn test_future_mtime_counts_as_zero_days() {
        let expr = mtime_expr("0");
        let entry = Metadata::file("future").with_mtime_ms(START_MS + MS_PER_DAY);
        assert_eq!(expr.apply(&entry), Verdict::Pass);
    }
}
