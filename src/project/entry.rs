//! Per-address memory annotations

use serde::{Deserialize, Serialize};

/// Tag meaning "no data type assigned".
pub const TYPE_NONE: &str = "NONE";

/// One record per annotated address in the snapshot.
///
/// The five comment/label strings are genuinely optional: the stream stores
/// a presence flag before each. The remaining fields always exist in the
/// in-memory model; in files written by older revisions some of them were
/// absent and load as their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryEntry {
    /// Address this entry annotates.
    pub address: i32,

    /// Comment produced by the disassembler.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dasm_comment: Option<String>,

    /// Comment written by the user.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_comment: Option<String>,

    /// Multi-line block comment written by the user.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_block_comment: Option<String>,

    /// Location label assigned by the disassembler.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dasm_location: Option<String>,

    /// Location label assigned by the user.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_location: Option<String>,

    /// Whether the address lies inside the disassembled range.
    pub is_inside: bool,

    /// Classified as code.
    pub is_code: bool,

    /// Classified as data.
    pub is_data: bool,

    /// Classified as garbage (since format v1).
    pub is_garbage: bool,

    /// Data type tag (since format v1).
    pub data_type: String,

    /// Copy counter.
    pub copy: u8,

    /// Related address.
    pub related: i32,

    /// Single display character for this entry.
    pub type_char: char,

    /// Index byte (since format v3).
    pub index: u8,

    /// Base of the related address (since format v9).
    pub related_address_base: i32,

    /// Destination of the related address (since format v9).
    pub related_address_dest: i32,

    /// BASIC type tag (since format v10).
    pub basic_type: String,
}

impl MemoryEntry {
    /// Create an entry for `address` with every annotation at its default.
    pub fn new(address: i32) -> Self {
        MemoryEntry {
            address,
            ..Default::default()
        }
    }
}

impl Default for MemoryEntry {
    fn default() -> Self {
        MemoryEntry {
            address: 0,
            dasm_comment: None,
            user_comment: None,
            user_block_comment: None,
            dasm_location: None,
            user_location: None,
            is_inside: false,
            is_code: false,
            is_data: false,
            is_garbage: false,
            data_type: TYPE_NONE.to_string(),
            copy: 0,
            related: 0,
            type_char: ' ',
            index: 0,
            related_address_base: 0,
            related_address_dest: 0,
            basic_type: TYPE_NONE.to_string(),
        }
    }
}
