//! Container I/O
//!
//! Opens project files on disk. A file may be stored plain or wrapped in
//! gzip; loading sniffs the two gzip magic bytes in a separate pre-pass
//! open and picks the matching transparent stream. Saving never sniffs —
//! the caller chooses compression through [`SaveOptions`]. File handles
//! are scoped to the single call and closed on every exit path.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;

use crate::codec::{read_project, write_project};
use crate::error::Result;
use crate::project::Project;

/// Leading magic bytes of a gzip stream.
const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Options for saving a project.
#[derive(Debug, Clone, Copy)]
pub struct SaveOptions {
    /// Wrap the stream in gzip. On by default, matching the files the
    /// original tooling produces.
    pub compress: bool,
}

impl SaveOptions {
    /// Save gzip-compressed (the default).
    pub fn compressed() -> Self {
        SaveOptions { compress: true }
    }

    /// Save as a plain byte stream.
    pub fn plain() -> Self {
        SaveOptions { compress: false }
    }
}

impl Default for SaveOptions {
    fn default() -> Self {
        Self::compressed()
    }
}

/// Whether the file at `path` starts with the gzip magic bytes.
///
/// A file shorter than the magic is simply not gzipped; the decode pass
/// will report what is actually wrong with it.
pub fn is_gzipped(path: &Path) -> Result<bool> {
    let mut file = File::open(path)?;
    let mut magic = [0u8; 2];
    match file.read_exact(&mut magic) {
        Ok(()) => Ok(magic == GZIP_MAGIC),
        Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => Ok(false),
        Err(e) => Err(e.into()),
    }
}

/// Load a project from `path`, transparently decompressing if needed.
pub fn load(path: &Path) -> Result<Project> {
    let compressed = is_gzipped(path)?;
    let file = BufReader::new(File::open(path)?);

    let project = if compressed {
        read_project(GzDecoder::new(file))?
    } else {
        read_project(file)?
    };

    tracing::debug!(
        path = %path.display(),
        compressed,
        version = project.version,
        image_bytes = project.image.len(),
        entries = project.memory.len(),
        "loaded project"
    );
    Ok(project)
}

/// Save `project` to `path` at the current format version.
pub fn save(path: &Path, project: &Project, options: SaveOptions) -> Result<()> {
    let file = BufWriter::new(File::create(path)?);

    if options.compress {
        let mut encoder = GzEncoder::new(file, Compression::default());
        write_project(&mut encoder, project)?;
        encoder.finish()?.flush()?;
    } else {
        let mut file = file;
        write_project(&mut file, project)?;
        file.flush()?;
    }

    tracing::debug!(
        path = %path.display(),
        compressed = options.compress,
        image_bytes = project.image.len(),
        entries = project.memory.len(),
        "saved project"
    );
    Ok(())
}
