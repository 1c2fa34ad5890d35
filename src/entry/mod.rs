//! Entry metadata abstraction
//!
//! Predicates evaluate against this narrow, read-only view of a filesystem
//! entry. Nothing in this module touches the local OS filesystem: a backend
//! (local, networked, or fully virtual) implements [`Entry`] and the engine
//! behaves identically against all of them.

use anyhow::bail;
use std::fmt;
use std::str::FromStr;


/// Classification of a filesystem entry.
///
/// The metadata provider reports exactly one of these per entry; an entry is
/// never more than one kind from the engine's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// A directory
    Directory,
    /// A symbolic link
    Symlink,
    /// A regular file
    File,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryKind::Directory => write!(f, "directory"),
            EntryKind::Symlink => write!(f, "symlink"),
            EntryKind::File => write!(f, "file"),
        }
    }
}

/// A 9-bit owner/group/other read/write/execute permission triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FileMode(u16);

impl FileMode {
    /// The nine permission bits; anything above them is never stored.
    pub const MASK: u16 = 0o777;

    /// Build a mode from raw bits. Bits above the low nine are discarded.
    pub const fn from_bits(bits: u16) -> Self {
        FileMode(bits & Self::MASK)
    }

    /// The raw permission bits.
    pub const fn bits(self) -> u16 {
        self.0
    }

    /// True if every bit set in `other` is also set in `self`.
    pub const fn contains(self, other: FileMode) -> bool {
        self.0 & other.0 == other.0
    }
}

impl fmt::Display for FileMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for shift in [6u16, 3, 0] {
            let class = self.0 >> shift;
            f.write_str(if class & 0b100 != 0 { "r" } else { "-" })?;
            f.write_str(if class & 0b010 != 0 { "w" } else { "-" })?;
            f.write_str(if class & 0b001 != 0 { "x" } else { "-" })?;
        }
        Ok(())
    }
}

impl FromStr for FileMode {
    type Err = anyhow::Error;

    /// Parse a `rwxr-x---` style permission string. A leading file-type
    /// character (`-rwxr-x---`, as printed by `ls`) is tolerated and ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        let body = if bytes.len() == 10 { &bytes[1..] } else { bytes };
        if body.len() != 9 {
            bail!("permission string must be nine characters, got {s:?}");
        }
        let mut bits = 0u16;
        for (i, &b) in body.iter().enumerate() {
            let expected = [b'r', b'w', b'x'][i % 3];
            bits <<= 1;
            match b {
                b'-' => {}
                c if c == expected => bits |= 1,
                other => bail!(
                    "unexpected character {:?} at position {i} in permission string {s:?}",
                    other as char
                ),
            }
        }
        Ok(FileMode(bits))
    }
}

/// Read-only metadata queries the predicate engine consumes.
///
/// The engine never mutates an entry and performs no I/O of its own; every
/// method here is expected to be a cheap attribute read.
pub trait Entry {
    /// Base name of the entry (the final path component).
    fn name(&self) -> &str;

    /// The entry's classification.
    fn kind(&self) -> EntryKind;

    /// The entry's permission triple.
    fn mode(&self) -> FileMode;

    /// Length of the entry in bytes.
    fn size(&self) -> u64;

    /// Number of storage blocks backing the entry.
    fn block_count(&self) -> u64;

    /// Replication factor reported by the backing store.
    fn replication(&self) -> u64;

    /// Modification time, in milliseconds since the Unix epoch.
    fn mtime_ms(&self) -> u64;
}

/// Owned entry metadata.
///
/// A plain in-memory [`Entry`] implementation for virtual backends, fixtures,
/// and callers that stat once and evaluate many predicates.
#[derive(Debug, Clone)]
pub struct Metadata {
    name: String,
    kind: EntryKind,
    mode: FileMode,
    size: u64,
    block_count: u64,
    replication: u64,
    mtime_ms: u64,
}

impl Metadata {
    fn new(name: &str, kind: EntryKind) -> Self {
        Metadata {
            name: name.to_string(),
            kind,
            mode: FileMode::default(),
            size: 0,
            block_count: 0,
            replication: 0,
            mtime_ms: 0,
        }
    }

    /// Metadata for a regular file with the given base name.
    pub fn file(name: &str) -> Self {
        Self::new(name, EntryKind::File)
    }

    /// Metadata for a directory with the given base name.
    pub fn directory(name: &str) -> Self {
        Self::new(name, EntryKind::Directory)
    }

    /// Metadata for a symbolic link with the given base name.
    pub fn symlink(name: &str) -> Self {
        Self::new(name, EntryKind::Symlink)
    }

    /// Set the permission triple.
    pub fn with_mode(mut self, mode: FileMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the length in bytes.
    pub fn with_size(mut self, size: u64) -> Self {
        self.size = size;
        self
    }

    /// Set the backing block count.
    pub fn with_block_count(mut self, blocks: u64) -> Self {
        self.block_count = blocks;
        self
    }

    /// Set the replication factor.
    pub fn with_replication(mut self, replication: u64) -> Self {
        self.replication = replication;
        self
    }

    /// Set the modification time in milliseconds since the Unix epoch.
    pub fn with_mtime_ms(mut self, mtime_ms: u64) -> Self {
        self.mtime_ms = mtime_ms;
        self
    }
}

impl Entry for Metadata {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> EntryKind {
        self.kind
    }

    fn mode(&self) -> FileMode {
        self.mode
    }

    fn size(&self) -> u64 {
        self.size
    }

    fn block_count(&self) -> u64 {
        self.block_count
    }

    fn replication(&self) -> u64 {
        self.replication
    }

    fn mtime_ms(&self) -> u64 {
        self.mtime_ms
    }
}
