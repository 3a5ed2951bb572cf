//! JSON interchange
//!
//! A plain structured mirror of a fully decoded project, for tooling that
//! cannot speak the binary format. Binary blobs become base64 strings and
//! sparse-table keys become `"column,row"` strings. The document is not
//! version-gated: it always reflects the complete latest in-memory shape,
//! whatever revision the binary file was loaded from.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde::{Deserialize, Serialize};

use crate::error::{ProjectError, Result};
use crate::project::{
    Freeze, MemoryEntry, Patch, Project, Relocate, SparseTable, TABLE_COLS, TABLE_ROWS,
};

/// JSON mirror of a [`Project`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectDoc {
    pub version: u8,
    pub name: String,
    pub file: String,
    pub description: String,
    pub file_type: String,
    pub target_type: String,

    /// Base64-encoded raw binary image.
    pub image: String,

    /// Base64-encoded per-byte flags.
    pub memory_flags: String,

    pub memory: Vec<MemoryEntry>,
    pub chip: i32,

    /// Constant names keyed by `"column,row"`.
    pub constants: BTreeMap<String, String>,

    /// Constant comments keyed by `"column,row"`.
    pub constant_comments: BTreeMap<String, String>,

    pub relocates: Vec<Relocate>,
    pub patches: Vec<Patch>,
    pub freezes: Vec<Freeze>,
    pub bin_address: i32,
}

/// Build the JSON mirror of `p`.
pub fn to_document(p: &Project) -> ProjectDoc {
    ProjectDoc {
        version: p.version,
        name: p.name.clone(),
        file: p.file.clone(),
        description: p.description.clone(),
        file_type: p.file_type.clone(),
        target_type: p.target_type.clone(),
        image: BASE64.encode(&p.image),
        memory_flags: BASE64.encode(&p.memory_flags),
        memory: p.memory.clone(),
        chip: p.chip,
        constants: table_to_map(&p.constants),
        constant_comments: table_to_map(&p.constant_comments),
        relocates: p.relocates.clone(),
        patches: p.patches.clone(),
        freezes: p.freezes.clone(),
        bin_address: p.bin_address,
    }
}

/// Rebuild a project from its JSON mirror.
pub fn from_document(doc: ProjectDoc) -> Result<Project> {
    Ok(Project {
        version: doc.version,
        name: doc.name,
        file: doc.file,
        description: doc.description,
        file_type: doc.file_type,
        target_type: doc.target_type,
        image: decode_blob(&doc.image, "image")?,
        memory_flags: decode_blob(&doc.memory_flags, "memory_flags")?,
        memory: doc.memory,
        chip: doc.chip,
        constants: map_to_table(doc.constants, "constants")?,
        constant_comments: map_to_table(doc.constant_comments, "constant_comments")?,
        relocates: doc.relocates,
        patches: doc.patches,
        freezes: doc.freezes,
        bin_address: doc.bin_address,
    })
}

/// Write `p` as pretty-printed JSON to `path`.
pub fn export(path: &Path, p: &Project) -> Result<()> {
    let file = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(file, &to_document(p))
        .map_err(|e| ProjectError::Encode(format!("JSON serialization failed: {}", e)))?;
    tracing::debug!(path = %path.display(), "exported project to JSON");
    Ok(())
}

/// Load a project from a JSON document at `path`.
pub fn import(path: &Path) -> Result<Project> {
    let file = BufReader::new(File::open(path)?);
    let doc: ProjectDoc = serde_json::from_reader(file)
        .map_err(|e| ProjectError::Decode(format!("bad JSON document: {}", e)))?;
    let project = from_document(doc)?;
    tracing::debug!(path = %path.display(), "imported project from JSON");
    Ok(project)
}

fn table_to_map(table: &SparseTable) -> BTreeMap<String, String> {
    table
        .iter()
        .map(|(cell, value)| (format!("{},{}", cell.col, cell.row), value.to_string()))
        .collect()
}

fn map_to_table(map: BTreeMap<String, String>, what: &str) -> Result<SparseTable> {
    let mut table = SparseTable::new();
    for (key, value) in map {
        let (col, row) = parse_cell_key(&key, what)?;
        table.set(col, row, value);
    }
    Ok(table)
}

fn parse_cell_key(key: &str, what: &str) -> Result<(u32, u32)> {
    let bad = || ProjectError::Decode(format!("bad {} cell key {:?}", what, key));
    let (col, row) = key.split_once(',').ok_or_else(|| bad())?;
    let col: u32 = col.trim().parse().map_err(|_| bad())?;
    let row: u32 = row.trim().parse().map_err(|_| bad())?;
    if col >= TABLE_COLS || row >= TABLE_ROWS {
        return Err(ProjectError::Decode(format!(
            "{} cell key {:?} outside the {}x{} table",
            what, key, TABLE_COLS, TABLE_ROWS
        )));
    }
    Ok((col, row))
}

fn decode_blob(encoded: &str, what: &str) -> Result<Vec<u8>> {
    BASE64
        .decode(encoded)
        .map_err(|e| ProjectError::Decode(format!("bad base64 in {}: {}", what, e)))
}
