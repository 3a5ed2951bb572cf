//! Codec round-trip tests
//!
//! Tests verify:
//! - Field-for-field round-trip at the latest version
//! - Sparse-table band boundary handling
//! - Version-gated reads of old streams
//! - The freeze long-text escape
//! - Error taxonomy on malformed streams

mod common;

use std::io::Cursor;

use dasmproj::codec::cursor::ByteWriter;
use dasmproj::{
    read_project, write_project, Freeze, MemoryEntry, Project, ProjectError, MAX_VERSION,
};

use common::sample_project;

fn encode(p: &Project) -> Vec<u8> {
    let mut buf = Vec::new();
    write_project(&mut buf, p).unwrap();
    buf
}

fn decode(bytes: &[u8]) -> dasmproj::Result<Project> {
    read_project(Cursor::new(bytes))
}

// =============================================================================
// Round-trip Tests
// =============================================================================

#[test]
fn full_project_round_trips() {
    let p = sample_project();
    let got = decode(&encode(&p)).unwrap();
    assert_eq!(got, p);
}

#[test]
fn empty_project_round_trips() {
    let p = Project::new();
    let got = decode(&encode(&p)).unwrap();
    assert_eq!(got, p);
}

#[test]
fn stream_starts_with_current_version() {
    let bytes = encode(&Project::new());
    assert_eq!(bytes[0], MAX_VERSION);
}

#[test]
fn boundary_cells_round_trip_exactly() {
    let p = sample_project();
    let got = decode(&encode(&p)).unwrap();

    assert_eq!(got.constants.len(), 6);
    for (col, row, value) in [
        (0, 0, "VIC_BASE"),
        (9, 255, "BASE_END"),
        (9, 256, "ROWS_START"),
        (9, 65535, "ROWS_END"),
        (10, 0, "COLS_START"),
        (19, 65535, "COLS_END"),
    ] {
        assert_eq!(got.constants.get(col, row), Some(value));
    }
}

#[test]
fn loading_an_old_stream_and_saving_upgrades_it() {
    // A version-1 stream re-saved comes back as the current version with
    // the gated fields defaulted, not an error.
    let old = decode(&version_1_stream()).unwrap();
    assert_eq!(old.version, 1);

    let upgraded = decode(&encode(&old)).unwrap();
    assert_eq!(upgraded.version, MAX_VERSION);
    assert_eq!(upgraded.name, old.name);
    assert_eq!(upgraded.memory, old.memory);
}

// =============================================================================
// Version Gating Tests
// =============================================================================

/// Hand-built version-1 stream: target_type and the per-entry garbage
/// classification exist; chip, index, tables, relocates, patches,
/// freezes, comments, and bin_address do not.
fn version_1_stream() -> Vec<u8> {
    let mut buf = Vec::new();
    let mut w = ByteWriter::new(&mut buf);
    w.write_u8(1).unwrap();
    w.write_utf("old").unwrap(); // name
    w.write_utf("old.prg").unwrap(); // file
    w.write_utf("").unwrap(); // description
    w.write_utf("PRG").unwrap(); // file type
    w.write_utf("C64").unwrap(); // target type (v1+)

    w.write_i32(2).unwrap(); // image
    w.write_blob(&[0xa9, 0x00]).unwrap();
    w.write_i32(2).unwrap(); // memory flags
    w.write_blob(&[0x01, 0x01]).unwrap();

    w.write_i32(1).unwrap(); // one entry
    w.write_i32(0x0801).unwrap(); // address
    for _ in 0..5 {
        w.write_bool(false).unwrap(); // no optional strings
    }
    w.write_bool(true).unwrap(); // is_inside
    w.write_bool(true).unwrap(); // is_code
    w.write_bool(false).unwrap(); // is_data
    w.write_bool(false).unwrap(); // is_garbage (v1+)
    w.write_utf("NONE").unwrap(); // data_type (v1+)
    w.write_u8(0).unwrap(); // copy
    w.write_i32(0).unwrap(); // related
    w.write_char('M').unwrap(); // type char

    // A version-1 entry stops here: no index, no related base/dest, no
    // basic_type, and the stream itself ends before chip and the tables.
    buf
}

#[test]
fn version_1_stream_loads_with_defaults_for_gated_fields() {
    let p = decode(&version_1_stream()).unwrap();

    assert_eq!(p.version, 1);
    assert_eq!(p.name, "old");
    assert_eq!(p.target_type, "C64");
    assert_eq!(p.image, vec![0xa9, 0x00]);

    assert_eq!(p.memory.len(), 1);
    let mem = &p.memory[0];
    assert_eq!(mem.address, 0x0801);
    assert!(mem.is_code);
    assert_eq!(mem.index, 0);
    assert_eq!(mem.related_address_base, 0);
    assert_eq!(mem.basic_type, "NONE");

    assert_eq!(p.chip, 0);
    assert!(p.constants.is_empty());
    assert!(p.constant_comments.is_empty());
    assert!(p.relocates.is_empty());
    assert!(p.patches.is_empty());
    assert!(p.freezes.is_empty());
    assert_eq!(p.bin_address, 0);
}

#[test]
fn version_2_stream_reads_chip_and_nothing_later() {
    // Same layout as version 1 plus the trailing chip field.
    let mut bytes = version_1_stream();
    bytes[0] = 2;
    let mut w = ByteWriter::new(&mut bytes);
    w.write_i32(6).unwrap(); // chip (v2+)

    let p = decode(&bytes).unwrap();
    assert_eq!(p.version, 2);
    assert_eq!(p.chip, 6);
    assert!(p.constants.is_empty());
    assert!(p.relocates.is_empty());
    assert_eq!(p.bin_address, 0);
}

#[test]
fn version_0_stream_defaults_the_target_type() {
    let mut buf = Vec::new();
    let mut w = ByteWriter::new(&mut buf);
    w.write_u8(0).unwrap();
    for s in ["v0", "v0.bin", "", "UND"] {
        w.write_utf(s).unwrap();
    }
    // No target_type at version 0.
    w.write_i32(0).unwrap(); // image
    w.write_i32(0).unwrap(); // memory flags
    w.write_i32(0).unwrap(); // no entries

    let p = decode(&buf).unwrap();
    assert_eq!(p.version, 0);
    assert_eq!(p.target_type, "C64");
}

// =============================================================================
// Freeze Escape Tests
// =============================================================================

fn freeze_round_trip(len: usize) -> Freeze {
    let mut p = Project::new();
    p.freezes.push(Freeze {
        name: "big".to_string(),
        text: "x".repeat(len),
    });
    let got = decode(&encode(&p)).unwrap();
    assert_eq!(got.freezes.len(), 1);
    got.freezes.into_iter().next().unwrap()
}

#[test]
fn freeze_text_at_prefix_limit_round_trips() {
    let freeze = freeze_round_trip(65535);
    assert_eq!(freeze.text.len(), 65535);
}

#[test]
fn freeze_text_past_prefix_limit_uses_the_escape() {
    let freeze = freeze_round_trip(65536);
    assert_eq!(freeze.text.len(), 65536);
}

#[test]
fn freeze_escape_and_short_path_agree_on_content() {
    let short = freeze_round_trip(65535);
    let long = freeze_round_trip(65536);
    assert_eq!(&long.text[..65535], short.text.as_str());
}

// =============================================================================
// Malformed Input Tests
// =============================================================================

#[test]
fn empty_stream_is_truncated() {
    let err = decode(&[]).unwrap_err();
    assert!(matches!(err, ProjectError::TruncatedStream(_)));
}

#[test]
fn stream_cut_after_version_byte_is_truncated() {
    let err = decode(&[MAX_VERSION]).unwrap_err();
    assert!(matches!(err, ProjectError::TruncatedStream(_)));
}

#[test]
fn newer_version_byte_is_rejected() {
    let err = decode(&[MAX_VERSION + 1]).unwrap_err();
    assert!(matches!(
        err,
        ProjectError::UnsupportedVersion { found: 12, max: 11 }
    ));
}

#[test]
fn truncated_blob_is_truncated_stream() {
    let mut buf = Vec::new();
    let mut w = ByteWriter::new(&mut buf);
    w.write_u8(MAX_VERSION).unwrap();
    for s in ["t", "t.bin", "", "UND", "C64"] {
        w.write_utf(s).unwrap();
    }
    w.write_i32(100).unwrap(); // declares 100 image bytes
    w.write_blob(&[1, 2, 3]).unwrap(); // supplies 3

    let err = decode(&buf).unwrap_err();
    assert!(matches!(err, ProjectError::TruncatedStream(_)));
}

#[test]
fn negative_count_is_decode_error() {
    let mut buf = Vec::new();
    let mut w = ByteWriter::new(&mut buf);
    w.write_u8(MAX_VERSION).unwrap();
    for s in ["t", "t.bin", "", "UND", "C64"] {
        w.write_utf(s).unwrap();
    }
    w.write_i32(-1).unwrap(); // negative image length

    let err = decode(&buf).unwrap_err();
    assert!(matches!(err, ProjectError::Decode(_)));
}

#[test]
fn oversized_entry_string_fails_encode() {
    let mut p = Project::new();
    let mut mem = MemoryEntry::new(0);
    mem.user_comment = Some("y".repeat(70000));
    p.memory.push(mem);

    let mut buf = Vec::new();
    let err = write_project(&mut buf, &p).unwrap_err();
    assert!(matches!(err, ProjectError::Encode(_)));
}
