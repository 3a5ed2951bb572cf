//! # dasmproj
//!
//! Reader/writer for disassembler project files: a snapshot of an address
//! space annotated with per-byte metadata (code/data classification,
//! comments, labels) plus auxiliary tables (relocations, patches,
//! constant/comment tables, freeform text blobs).
//!
//! The on-disk format is a flat big-endian byte stream, optionally
//! gzip-wrapped, that evolved through twelve additive revisions. A single
//! version byte at the top of the stream decides which fields exist; see
//! [`codec`] for the layout and [`codec::version`] for the gate.
//!
//! ## Quick start
//!
//! ```no_run
//! use std::path::Path;
//! use dasmproj::{load, save, Project, SaveOptions};
//!
//! # fn main() -> dasmproj::Result<()> {
//! let project = load(Path::new("game.dis"))?;
//! println!("{} ({} bytes)", project.name, project.image.len());
//! save(Path::new("game-copy.dis"), &project, SaveOptions::default())?;
//! # Ok(())
//! # }
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod codec;
pub mod container;
pub mod error;
pub mod json;
pub mod project;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use codec::version::{FormatVersion, MAX_VERSION};
pub use codec::{read_project, write_project};
pub use container::{is_gzipped, load, save, SaveOptions};
pub use error::{ProjectError, Result};
pub use project::{Cell, Freeze, MemoryEntry, Patch, Project, Relocate, SparseTable};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of dasmproj
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
