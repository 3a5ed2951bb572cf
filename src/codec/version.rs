//! Format version gate
//!
//! The format evolved through twelve revisions (0 through 11) by appending
//! fields and sections, never redefining existing ones. A single version
//! byte at the top of the stream therefore decides, for every later field,
//! whether it exists. Every historical comparison lives here; the read path
//! asks these predicates instead of scattering `version > n` checks.
//!
//! The write path never consults the gate: it always emits
//! [`MAX_VERSION`] with every section present.

use crate::error::{ProjectError, Result};

/// Highest format revision this codec understands.
pub const MAX_VERSION: u8 = 11;

/// A validated format version read from a stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FormatVersion(u8);

impl FormatVersion {
    /// The newest revision, used unconditionally by the write path.
    pub const CURRENT: FormatVersion = FormatVersion(MAX_VERSION);

    /// Validate a raw version byte.
    ///
    /// Newer versions are rejected rather than best-effort parsed: later
    /// revisions may append sections this codec cannot locate, so a partial
    /// read would silently drop data.
    pub fn new(raw: u8) -> Result<Self> {
        if raw > MAX_VERSION {
            return Err(ProjectError::UnsupportedVersion {
                found: raw,
                max: MAX_VERSION,
            });
        }
        Ok(FormatVersion(raw))
    }

    /// The raw version byte.
    pub fn raw(self) -> u8 {
        self.0
    }

    // -------------------------------------------------------------------------
    // One predicate per historical addition, in stream order
    // -------------------------------------------------------------------------

    /// v1: `target_type` string (older files default to the C64 tag).
    pub fn has_target_type(self) -> bool {
        self.0 > 0
    }

    /// v1: per-entry `is_garbage` flag and `data_type` tag.
    pub fn has_garbage_classification(self) -> bool {
        self.0 > 0
    }

    /// v2: `chip` identifier.
    pub fn has_chip(self) -> bool {
        self.0 > 1
    }

    /// v3: per-entry `index` byte.
    pub fn has_entry_index(self) -> bool {
        self.0 > 2
    }

    /// v3: base constant-table band (cols [0,10), rows [0,256)).
    pub fn has_base_band(self) -> bool {
        self.0 > 2
    }

    /// v4: relocation ranges.
    pub fn has_relocates(self) -> bool {
        self.0 > 3
    }

    /// v5: binary patches.
    pub fn has_patches(self) -> bool {
        self.0 > 4
    }

    /// v6: upper-row constant-table band (cols [0,10), rows [256,65536)).
    pub fn has_upper_rows_band(self) -> bool {
        self.0 > 5
    }

    /// v7: freeze text blobs.
    pub fn has_freezes(self) -> bool {
        self.0 > 6
    }

    /// v8: upper-column constant-table band (cols [10,20), rows [0,65536)).
    pub fn has_upper_cols_band(self) -> bool {
        self.0 > 7
    }

    /// v9: per-entry base/destination related addresses.
    pub fn has_related_addresses(self) -> bool {
        self.0 > 8
    }

    /// v10: per-entry `basic_type` tag.
    pub fn has_basic_type(self) -> bool {
        self.0 > 9
    }

    /// v10: the comment table over the full key range.
    pub fn has_comment_table(self) -> bool {
        self.0 > 9
    }

    /// v11: trailing `bin_address`.
    pub fn has_bin_address(self) -> bool {
        self.0 > 10
    }
}
