//! Project stream encoder
//!
//! Writes the newest format revision unconditionally: every section exists,
//! so unlike the read path there is not a single version branch here. A
//! project loaded from an older file is upgraded on save, with fields that
//! file never carried written out from their defaults.

use std::io::Write;

use crate::codec::cursor::{ByteWriter, MAX_UTF_LEN};
use crate::codec::table::write_band;
use crate::codec::version::FormatVersion;
use crate::error::Result;
use crate::project::{
    Freeze, MemoryEntry, Project, BAND_BASE, BAND_FULL, BAND_UPPER_COLS, BAND_UPPER_ROWS,
};

/// Encode `p` to `inner` at the current format version.
pub fn write_project<W: Write>(inner: W, p: &Project) -> Result<()> {
    let mut w = ByteWriter::new(inner);

    w.write_u8(FormatVersion::CURRENT.raw())?;
    w.write_utf(&p.name)?;
    w.write_utf(&p.file)?;
    w.write_utf(&p.description)?;
    w.write_utf(&p.file_type)?;
    w.write_utf(&p.target_type)?;

    w.write_i32(p.image.len() as i32)?;
    w.write_blob(&p.image)?;

    w.write_i32(p.memory_flags.len() as i32)?;
    w.write_blob(&p.memory_flags)?;

    w.write_i32(p.memory.len() as i32)?;
    for mem in &p.memory {
        write_entry(&mut w, mem)?;
    }

    w.write_i32(p.chip)?;

    write_band(&mut w, &BAND_BASE, &p.constants)?;

    w.write_i32(p.relocates.len() as i32)?;
    for reloc in &p.relocates {
        w.write_i32(reloc.from_start)?;
        w.write_i32(reloc.from_end)?;
        w.write_i32(reloc.to_start)?;
        w.write_i32(reloc.to_end)?;
    }

    w.write_i32(p.patches.len() as i32)?;
    for patch in &p.patches {
        w.write_i32(patch.address)?;
        w.write_i32(patch.value)?;
    }

    write_band(&mut w, &BAND_UPPER_ROWS, &p.constants)?;

    w.write_i32(p.freezes.len() as i32)?;
    for freeze in &p.freezes {
        write_freeze(&mut w, freeze)?;
    }

    write_band(&mut w, &BAND_UPPER_COLS, &p.constants)?;
    write_band(&mut w, &BAND_FULL, &p.constant_comments)?;

    w.write_i32(p.bin_address)?;
    w.flush()
}

/// Encode one memory entry with every field present.
fn write_entry<W: Write>(w: &mut ByteWriter<W>, mem: &MemoryEntry) -> Result<()> {
    w.write_i32(mem.address)?;

    for opt in [
        &mem.dasm_comment,
        &mem.user_comment,
        &mem.user_block_comment,
        &mem.dasm_location,
        &mem.user_location,
    ] {
        match opt {
            Some(s) => {
                w.write_bool(true)?;
                w.write_utf(s)?;
            }
            None => w.write_bool(false)?,
        }
    }

    w.write_bool(mem.is_inside)?;
    w.write_bool(mem.is_code)?;
    w.write_bool(mem.is_data)?;
    w.write_bool(mem.is_garbage)?;
    w.write_utf(&mem.data_type)?;
    w.write_u8(mem.copy)?;
    w.write_i32(mem.related)?;
    w.write_char(mem.type_char)?;
    w.write_u8(mem.index)?;
    w.write_i32(mem.related_address_base)?;
    w.write_i32(mem.related_address_dest)?;
    w.write_utf(&mem.basic_type)?;
    Ok(())
}

/// Encode one freeze, escaping text the 2-byte prefix cannot hold.
fn write_freeze<W: Write>(w: &mut ByteWriter<W>, freeze: &Freeze) -> Result<()> {
    w.write_utf(&freeze.name)?;
    let bytes = freeze.text.as_bytes();
    if bytes.len() > MAX_UTF_LEN {
        w.write_bool(true)?;
        w.write_i32(bytes.len() as i32)?;
        w.write_blob(bytes)?;
    } else {
        w.write_bool(false)?;
        w.write_utf(&freeze.text)?;
    }
    Ok(())
}
