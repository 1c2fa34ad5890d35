//! # vfind - find-style predicate expressions for virtual filesystems
//!
//! A predicate-expression engine that decides, for a single filesystem entry,
//! whether the entry matches a user-specified condition expressed in the Unix
//! `find` expression language.
//!
//! ## Features
//!
//! - **Backend-agnostic**: predicates evaluate against a narrow read-only
//!   [`Entry`] view, so the same expressions run against local, networked,
//!   or fully virtual filesystems
//! - **Fail-fast parsing**: every argument grammar (octal and symbolic
//!   permission specs, signed numeric comparators, type codes, name globs)
//!   is compiled and validated up front; evaluation never fails
//! - **Pure evaluation**: a compiled predicate is immutable and side-effect
//!   free, so applying it is idempotent and safe to repeat
//!
//! ## Quick start
//!
//! ```
//! use vfind::{Expression, FindOptions, Metadata, Verdict};
//! use vfind::expr::Perm;
//!
//! let mut perm = Perm::new();
//! perm.add_argument("-123");
//! perm.initialize(&FindOptions::default())?;
//!
//! let entry = Metadata::file("report.txt").with_mode("rwxrwxrwx".parse()?);
//! assert_eq!(perm.apply(&entry), Verdict::Pass);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod entry;
pub mod expr;
pub mod options;

pub use entry::{Entry, EntryKind, FileMode, Metadata};
pub use expr::{Expression, Verdict};
pub use options::FindOptions;

/// Result type alias for vfind operations
pub type Result<T> = anyhow::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
