//! Versioned binary codec
//!
//! Translates between the [`Project`](crate::project::Project) model and
//! its byte-stream form. The stream layout (all multi-byte values
//! big-endian):
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │ version: u8                                                  │
//! ├──────────────────────────────────────────────────────────────┤
//! │ name, file, description, file_type  (len:u16 + UTF-8 each)   │
//! │ target_type                          — v1+                   │
//! ├──────────────────────────────────────────────────────────────┤
//! │ image:        len:i32 + raw bytes                            │
//! │ memory_flags: len:i32 + raw bytes                            │
//! ├──────────────────────────────────────────────────────────────┤
//! │ memory entries: count:i32, then per entry                    │
//! │   address:i32 │ 5 × (flag:bool [+ string]) │ 3 × bool        │
//! │   is_garbage:bool + data_type     — v1+                      │
//! │   copy:u8 │ related:i32 │ type:u16 char                      │
//! │   index:u8                        — v3+                      │
//! │   related base/dest: 2 × i32      — v9+                      │
//! │   basic_type                      — v10+                     │
//! ├──────────────────────────────────────────────────────────────┤
//! │ chip: i32                         — v2+                      │
//! │ constant band cols 0-9 rows 0-255          — v3+             │
//! │ relocates: count:i32 + 4 × i32 each        — v4+             │
//! │ patches:   count:i32 + 2 × i32 each        — v5+             │
//! │ constant band cols 0-9 rows 256-65535      — v6+             │
//! │ freezes:   count:i32 + name + escaped text — v7+             │
//! │ constant band cols 10-19 rows 0-65535      — v8+             │
//! │ comment band cols 0-19 rows 0-65535        — v10+            │
//! │ bin_address: i32                           — v11+            │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Sections marked with a version are read only when the stream's version
//! byte is at least that revision; the write path always emits all of
//! them. Field order never changed across revisions, only presence.

pub mod cursor;
pub mod version;

mod reader;
mod table;
mod writer;

pub use reader::read_project;
pub use writer::write_project;
