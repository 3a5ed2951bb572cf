//! Shared fixtures for integration tests

use dasmproj::{Freeze, MemoryEntry, Patch, Project, Relocate};

/// A project exercising every section of the format, including cells at
/// each sparse-table band boundary.
pub fn sample_project() -> Project {
    let mut p = Project::new();
    p.name = "demo".to_string();
    p.file = "demo.prg".to_string();
    p.description = "sample project used by the tests".to_string();
    p.file_type = "PRG".to_string();
    p.target_type = "C64".to_string();
    p.image = (0..=255).collect();
    p.memory_flags = vec![0x01; 256];
    p.chip = 2;
    p.bin_address = 0x0801;

    let mut code = MemoryEntry::new(0x0801);
    code.is_inside = true;
    code.is_code = true;
    code.dasm_location = Some("start".to_string());
    code.user_comment = Some("entry point".to_string());
    code.type_char = 'M';
    code.index = 3;
    code.related = 0x0803;
    code.related_address_base = 0x0800;
    code.related_address_dest = 0x0900;
    p.memory.push(code);

    let mut data = MemoryEntry::new(0x0900);
    data.is_inside = true;
    data.is_data = true;
    data.data_type = "BYTE".to_string();
    data.basic_type = "V2".to_string();
    data.user_block_comment = Some("sprite data\nsecond line".to_string());
    data.copy = 1;
    p.memory.push(data);

    // One cell at each corner of each historical band.
    for (col, row, value) in [
        (0, 0, "VIC_BASE"),
        (9, 255, "BASE_END"),
        (9, 256, "ROWS_START"),
        (9, 65535, "ROWS_END"),
        (10, 0, "COLS_START"),
        (19, 65535, "COLS_END"),
    ] {
        p.constants.set(col, row, value);
    }
    p.constant_comments.set(0, 0, "video chip base register");
    p.constant_comments.set(19, 65535, "last possible cell");

    p.relocates.push(Relocate {
        from_start: 0x0801,
        from_end: 0x0900,
        to_start: 0xc000,
        to_end: 0xc0ff,
    });
    p.patches.push(Patch {
        address: 0x0810,
        value: 0xea,
    });
    p.freezes.push(Freeze {
        name: "notes".to_string(),
        text: "frozen disassembly text".to_string(),
    });

    p
}
