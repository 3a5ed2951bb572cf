//! Project stream decoder
//!
//! Reads one project from a byte stream. The field order is fixed and
//! identical across all twelve format revisions; only field *presence*
//! varies, and every presence decision is delegated to
//! [`FormatVersion`]. Fields a given revision never wrote load as their
//! model defaults.

use std::io::Read;

use crate::codec::cursor::ByteReader;
use crate::codec::table::read_band;
use crate::codec::version::FormatVersion;
use crate::error::Result;
use crate::project::{
    Freeze, MemoryEntry, Patch, Project, Relocate, BAND_BASE, BAND_FULL, BAND_UPPER_COLS,
    BAND_UPPER_ROWS,
};

/// Decode a project from `inner`.
///
/// On any error the stream position is unspecified and no partial project
/// is returned.
pub fn read_project<R: Read>(inner: R) -> Result<Project> {
    let mut r = ByteReader::new(inner);
    let version = FormatVersion::new(r.read_u8("format version")?)?;

    let mut p = Project {
        version: version.raw(),
        ..Project::default()
    };

    p.name = r.read_utf("name")?;
    p.file = r.read_utf("file")?;
    p.description = r.read_utf("description")?;
    p.file_type = r.read_utf("file type")?;
    if version.has_target_type() {
        p.target_type = r.read_utf("target type")?;
    }

    let len = r.read_len("image length")?;
    p.image = r.read_blob(len, "image")?;

    let len = r.read_len("memory flags length")?;
    p.memory_flags = r.read_blob(len, "memory flags")?;

    let count = r.read_len("memory entry count")?;
    p.memory.reserve(count.min(1 << 20));
    for _ in 0..count {
        p.memory.push(read_entry(&mut r, version)?);
    }

    if version.has_chip() {
        p.chip = r.read_i32("chip")?;
    }

    if version.has_base_band() {
        read_band(&mut r, &BAND_BASE, &mut p.constants, "constant table")?;
    }

    if version.has_relocates() {
        let count = r.read_len("relocate count")?;
        for _ in 0..count {
            p.relocates.push(Relocate {
                from_start: r.read_i32("relocate from start")?,
                from_end: r.read_i32("relocate from end")?,
                to_start: r.read_i32("relocate to start")?,
                to_end: r.read_i32("relocate to end")?,
            });
        }
    }

    if version.has_patches() {
        let count = r.read_len("patch count")?;
        for _ in 0..count {
            p.patches.push(Patch {
                address: r.read_i32("patch address")?,
                value: r.read_i32("patch value")?,
            });
        }
    }

    if version.has_upper_rows_band() {
        read_band(&mut r, &BAND_UPPER_ROWS, &mut p.constants, "constant table")?;
    }

    if version.has_freezes() {
        let count = r.read_len("freeze count")?;
        for _ in 0..count {
            p.freezes.push(read_freeze(&mut r)?);
        }
    }

    if version.has_upper_cols_band() {
        read_band(&mut r, &BAND_UPPER_COLS, &mut p.constants, "constant table")?;
    }

    if version.has_comment_table() {
        read_band(&mut r, &BAND_FULL, &mut p.constant_comments, "comment table")?;
    }

    if version.has_bin_address() {
        p.bin_address = r.read_i32("bin address")?;
    }

    Ok(p)
}

/// Decode one memory entry at the given format version.
fn read_entry<R: Read>(r: &mut ByteReader<R>, version: FormatVersion) -> Result<MemoryEntry> {
    let mut mem = MemoryEntry::new(r.read_i32("entry address")?);

    if r.read_bool("dasm comment flag")? {
        mem.dasm_comment = Some(r.read_utf("dasm comment")?);
    }
    if r.read_bool("user comment flag")? {
        mem.user_comment = Some(r.read_utf("user comment")?);
    }
    if r.read_bool("user block comment flag")? {
        mem.user_block_comment = Some(r.read_utf("user block comment")?);
    }
    if r.read_bool("dasm location flag")? {
        mem.dasm_location = Some(r.read_utf("dasm location")?);
    }
    if r.read_bool("user location flag")? {
        mem.user_location = Some(r.read_utf("user location")?);
    }

    mem.is_inside = r.read_bool("is inside")?;
    mem.is_code = r.read_bool("is code")?;
    mem.is_data = r.read_bool("is data")?;
    if version.has_garbage_classification() {
        mem.is_garbage = r.read_bool("is garbage")?;
        mem.data_type = r.read_utf("data type")?;
    }

    mem.copy = r.read_u8("copy")?;
    mem.related = r.read_i32("related")?;
    mem.type_char = r.read_char("type char")?;
    if version.has_entry_index() {
        mem.index = r.read_u8("index")?;
    }
    if version.has_related_addresses() {
        mem.related_address_base = r.read_i32("related address base")?;
        mem.related_address_dest = r.read_i32("related address dest")?;
    }
    if version.has_basic_type() {
        mem.basic_type = r.read_utf("basic type")?;
    }

    Ok(mem)
}

/// Decode one freeze, honoring the long-text escape.
///
/// A leading `true` boolean means the text was too long for the 2-byte
/// string prefix and is stored as a 4-byte byte count plus raw UTF-8.
fn read_freeze<R: Read>(r: &mut ByteReader<R>) -> Result<Freeze> {
    let name = r.read_utf("freeze name")?;
    let text = if r.read_bool("freeze long text flag")? {
        let len = r.read_len("freeze text length")?;
        let bytes = r.read_blob(len, "freeze text")?;
        String::from_utf8(bytes).map_err(|e| {
            crate::error::ProjectError::Decode(format!("invalid UTF-8 in freeze text: {}", e))
        })?
    } else {
        r.read_utf("freeze text")?
    };
    Ok(Freeze { name, text })
}
