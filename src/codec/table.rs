//! Sparse table band codec
//!
//! Each band is stored as a dense scan: one presence boolean per cell in
//! column-major order, followed by the string value when present. No
//! indices are stored — position alone identifies the cell — so the read
//! and write loops here must mirror each other byte-for-byte, and both
//! iterate through [`Band::cells`]. An empty band still costs one boolean
//! per cell; the format accepts that over a sparse encoding.

use std::io::{Read, Write};

use crate::codec::cursor::{ByteReader, ByteWriter};
use crate::error::Result;
use crate::project::{Band, SparseTable};

/// Read one band's dense scan into `table`.
pub(crate) fn read_band<R: Read>(
    r: &mut ByteReader<R>,
    band: &Band,
    table: &mut SparseTable,
    what: &str,
) -> Result<()> {
    for cell in band.cells() {
        if r.read_bool(what)? {
            let value = r.read_utf(what)?;
            table.set(cell.col, cell.row, value);
        }
    }
    Ok(())
}

/// Write one band's dense scan from `table`.
pub(crate) fn write_band<W: Write>(
    w: &mut ByteWriter<W>,
    band: &Band,
    table: &SparseTable,
) -> Result<()> {
    for cell in band.cells() {
        match table.get(cell.col, cell.row) {
            Some(value) => {
                w.write_bool(true)?;
                w.write_utf(value)?;
            }
            None => w.write_bool(false)?,
        }
    }
    Ok(())
}
