//! Permission predicate
//!
//! Accepts both `find -perm` surface grammars: a three-digit octal spec
//! (`644`) or a chmod-style symbolic spec (`u=rw,go=r`). Either one may be
//! prefixed with `-` to ask for "at least these bits" instead of an exact
//! match.

use super::{Expression, Verdict, take_single_argument};
use crate::entry::{Entry, FileMode};
use crate::options::FindOptions;
use anyhow::{Result, bail};
use tracing::debug;

const OWNER_SHIFT: u16 = 6;
const GROUP_SHIFT: u16 = 3;
const OTHER_SHIFT: u16 = 0;

/// Whether the target bits must match exactly or merely be present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MatchMode {
    /// Entry bits must equal the target bit-for-bit
    Exact,
    /// Every target bit must be set; extra entry bits are fine
    AtLeast,
}

/// Permission predicate over an entry's mode bits.
#[derive(Debug, Default)]
pub struct Perm {
    args: Vec<String>,
    spec: Option<(MatchMode, FileMode)>,
}

impl Perm {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Expression for Perm {
    fn add_argument(&mut self, token: &str) {
        self.args.push(token.to_string());
    }

    fn initialize(&mut self, _options: &FindOptions) -> Result<()> {
        let token = take_single_argument(&mut self.args, "perm")?;
        let (mode, target) = parse_spec(&token)?;
        debug!(bits = %target, "compiled permission spec");
        self.spec = Some((mode, target));
        Ok(())
    }

    fn apply(&self, entry: &dyn Entry) -> Verdict {
        let Some((mode, target)) = self.spec else {
            return Verdict::Fail;
        };
        let actual = entry.mode();
        Verdict::from_bool(match mode {
            MatchMode::Exact => actual == target,
            MatchMode::AtLeast => actual.contains(target),
        })
    }
}

/// Parse a full permission argument: optional `-` prefix, then octal or
/// symbolic body.
fn parse_spec(token: &str) -> Result<(MatchMode, FileMode)> {
    let (mode, body) = match token.strip_prefix('-') {
        Some(rest) => (MatchMode::AtLeast, rest),
        None => (MatchMode::Exact, token),
    };
    // An all-digit body is an octal spec; anything else goes through the
    // symbolic grammar.
    let target = if !body.is_empty() && body.bytes().all(|b| b.is_ascii_digit()) {
        parse_octal(body)?
    } else {
        parse_symbolic(body)?
    };
    Ok((mode, target))
}

/// Parse exactly three octal digits into owner/group/other rwx bits.
fn parse_octal(body: &str) -> Result<FileMode> {
    if body.len() != 3 {
        bail!("octal permission spec must be exactly three digits, got {body:?}");
    }
    let mut bits = 0u16;
    for b in body.bytes() {
        let digit = (b - b'0') as u16;
        if digit > 7 {
            bail!("invalid octal digit {:?} in permission spec {body:?}", b as char);
        }
        bits = bits << 3 | digit;
    }
    Ok(FileMode::from_bits(bits))
}

/// Reduce a comma-separated symbolic spec to a permission triple.
///
/// Clauses fold left-to-right over an all-zero triple: `=` overwrites the
/// named class's bits, `+` adds to them, `-` clears from them.
fn parse_symbolic(body: &str) -> Result<FileMode> {
    let mut bits = 0u16;
    for clause in body.split(',') {
        bits = apply_clause(bits, clause)?;
    }
    Ok(FileMode::from_bits(bits))
}

/// Fold one `<who><op><perm>*` clause into the accumulated triple.
fn apply_clause(bits: u16, clause: &str) -> Result<u16> {
    if clause.is_empty() {
        bail!("empty clause in symbolic permission spec");
    }
    let bytes = clause.as_bytes();
    let (who, rest) = match bytes[0] {
        b'u' | b'g' | b'o' | b'a' => (bytes[0], &clause[1..]),
        // Absent who means all three classes
        _ => (b'a', clause),
    };
    let Some(op) = rest.bytes().next() else {
        bail!("clause {clause:?} is missing an operator");
    };
    if !matches!(op, b'=' | b'+' | b'-') {
        bail!("unknown operator {:?} in clause {clause:?}", op as char);
    }
    let mut perm = 0u16;
    for b in rest[1..].bytes() {
        perm |= match b {
            b'r' => 0b100,
            b'w' => 0b010,
            b'x' => 0b001,
            other => bail!(
                "unknown permission character {:?} in clause {clause:?}",
                other as char
            ),
        };
    }

    let classes: &[u16] = match who {
        b'u' => &[OWNER_SHIFT],
        b'g' => &[GROUP_SHIFT],
        b'o' => &[OTHER_SHIFT],
        _ => &[OWNER_SHIFT, GROUP_SHIFT, OTHER_SHIFT],
    };
    let mut bits = bits;
    for &shift in classes {
        let class_mask = 0b111 << shift;
        let value = perm << shift;
        bits = match op {
            b'=' => (bits & !class_mask) | value,
            b'+' => bits | value,
            _ => bits & !value,
        };
    }
    Ok(bits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_octal() {
        assert_eq!(parse_octal("123").unwrap().bits(), 0o123);
        assert_eq!(parse_octal("000").unwrap().bits(), 0);
        assert_eq!(parse_octal("777").unwrap().bits(), 0o777);
        assert!(parse_octal("12").is_err());
        assert!(parse_octal("1234").is_err());
        assert!(parse_octal("128").is_err());
    }

    #[test]
    fn test_symbolic_single_clauses() {
        assert_eq!(parse_symbolic("u=rwx").unwrap().bits(), 0o700);
        assert_eq!(parse_symbolic("g=rw").unwrap().bits(), 0o060);
        assert_eq!(parse_symbolic("o=x").unwrap().bits(), 0o001);
        assert_eq!(parse_symbolic("a=r").unwrap().bits(), 0o444);
        // Absent who defaults to all classes
        assert_eq!(parse_symbolic("=rx").unwrap().bits(), 0o555);
        // Zero perm characters is legal and clears nothing
        assert_eq!(parse_symbolic("u=").unwrap().bits(), 0);
    }

    #[test]
    fn test_symbolic_clause_sequencing() {
        // owner: rwx then -rw leaves x; group: x, +w, -x leaves w; other: wx
        assert_eq!(
            parse_symbolic("u=xrw,g=x,o=wx,u-rw,g+w,g-x").unwrap().bits(),
            0o123
        );
        // Later = overwrites earlier bits for the same class
        assert_eq!(parse_symbolic("u=rwx,u=r").unwrap().bits(), 0o400);
    }

    #[test]
    fn test_symbolic_rejects_bad_clauses() {
        assert!(parse_symbolic("").is_err());
        assert!(parse_symbolic("u=rwx,,o=x").is_err());
        assert!(parse_symbolic("q=rwx").is_err());
        assert!(parse_symbolic("u~rwx").is_err());
        assert!(parse_symbolic("u=rwq").is_err());
        assert!(parse_symbolic("u").is_err());
        // Multi-class runs are not part of the grammar
        assert!(parse_symbolic("ug+w").is_err());
    }
}
