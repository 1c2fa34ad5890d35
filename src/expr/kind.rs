//! Entry-kind predicate
//!
//! Selects entries of a single classification via the `find -type` codes:
//! `d` for directories, `l` for symlinks, `f` for regular files.

use super::{Expression, Verdict, take_single_argument};
use crate::entry::{Entry, EntryKind};
use crate::options::FindOptions;
use anyhow::{Result, bail};

/// Predicate passing entries whose classification matches a type code.
#[derive(Debug, Default)]
pub struct Kind {
    args: Vec<String>,
    want: Option<EntryKind>,
}

impl Kind {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Expression for Kind {
    fn add_argument(&mut self, token: &str) {
        self.args.push(token.to_string());
    }

    fn initialize(&mut self, _options: &FindOptions) -> Result<()> {
        let token = take_single_argument(&mut self.args, "type")?;
        let want = match token.as_str() {
            "d" => EntryKind::Directory,
            "l" => EntryKind::Symlink,
            "f" => EntryKind::File,
            other => bail!("invalid entry type {other:?}, expected one of d, l, f"),
        };
        self.want = Some(want);
        Ok(())
    }

    fn apply(&self, entry: &dyn Entry) -> Verdict {
        match self.want {
            Some(want) => Verdict::from_bool(entry.kind() == want),
            None => Verdict::Fail,
        }
    }
}
