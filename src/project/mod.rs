//! Record Model
//!
//! In-memory representation of a disassembler project: a snapshot of an
//! address space plus per-byte metadata and auxiliary tables. The codec in
//! [`crate::codec`] is a pure transcoder between this model and the byte
//! stream; nothing here is mutated after a load completes.

mod entry;
mod table;

use serde::{Deserialize, Serialize};

use crate::codec::version::MAX_VERSION;

pub use entry::{MemoryEntry, TYPE_NONE};
pub use table::{
    Band, Cell, SparseTable, BAND_BASE, BAND_FULL, BAND_UPPER_COLS, BAND_UPPER_ROWS, BASE_COLS,
    BASE_ROWS, TABLE_COLS, TABLE_ROWS,
};

/// Default target platform tag, used for files too old to carry one.
pub const DEFAULT_TARGET: &str = "C64";

/// Default file type tag.
pub const DEFAULT_FILE_TYPE: &str = "UND";

/// The root container: one annotated address-space snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    /// Format version this project was loaded from. Saving always writes
    /// the newest version regardless of this value.
    pub version: u8,

    /// Project name.
    pub name: String,

    /// Path of the source binary.
    pub file: String,

    /// Free-text description.
    pub description: String,

    /// File type tag.
    pub file_type: String,

    /// Target platform tag.
    pub target_type: String,

    /// Raw binary image.
    pub image: Vec<u8>,

    /// One flag byte per image byte.
    pub memory_flags: Vec<u8>,

    /// Per-address annotations, in stream order.
    pub memory: Vec<MemoryEntry>,

    /// Chip identifier.
    pub chip: i32,

    /// Constant/symbol names keyed by (column, row).
    pub constants: SparseTable,

    /// Comments on those constants, same key space.
    pub constant_comments: SparseTable,

    /// Relocated ranges.
    pub relocates: Vec<Relocate>,

    /// Single-location binary patches.
    pub patches: Vec<Patch>,

    /// Named freeform text blobs.
    pub freezes: Vec<Freeze>,

    /// Load address of the binary.
    pub bin_address: i32,
}

impl Project {
    /// Create an empty project at the current format version.
    pub fn new() -> Self {
        Self::default()
    }
}

/// A contiguous source range mapped to a destination range.
///
/// The codec treats this as an opaque 4-tuple; no ordering or overlap
/// rules are enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relocate {
    pub from_start: i32,
    pub from_end: i32,
    pub to_start: i32,
    pub to_end: i32,
}

/// A single-location binary patch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patch {
    pub address: i32,
    pub value: i32,
}

/// A named, arbitrary-length text blob.
///
/// Text longer than 65535 UTF-8 bytes uses an escape encoding in the
/// stream; the model holds it as an ordinary string either way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Freeze {
    pub name: String,
    pub text: String,
}

impl Default for Project {
    fn default() -> Self {
        Project {
            version: MAX_VERSION,
            name: String::new(),
            file: String::new(),
            description: String::new(),
            file_type: DEFAULT_FILE_TYPE.to_string(),
            target_type: DEFAULT_TARGET.to_string(),
            image: Vec::new(),
            memory_flags: Vec::new(),
            memory: Vec::new(),
            chip: 0,
            constants: SparseTable::new(),
            constant_comments: SparseTable::new(),
            relocates: Vec::new(),
            patches: Vec::new(),
            freezes: Vec::new(),
            bin_address: 0,
        }
    }
}
