#![allow(dead_code)]

use std::path::Path;

use excel2graph::{FontChoice, fonts};

/// Registers the default font; `false` means the machine has no usable font
/// file and rendering tests should be skipped.
pub fn fonts_available() -> bool {
    match fonts::ensure_registered(FontChoice::default(), &[]) {
        Ok(_) => true,
        Err(e) => {
            eprintln!("skipping rendering test: {e}");
            false
        }
    }
}

/// Width and height from a PNG's IHDR chunk.
pub fn png_size(path: &Path) -> (u32, u32) {
    let bytes = std::fs::read(path).expect("png readable");
    assert_eq!(&bytes[1..4], b"PNG", "not a png: {}", path.display());
    let be = |i: usize| u32::from_be_bytes([bytes[i], bytes[i + 1], bytes[i + 2], bytes[i + 3]]);
    (be(16), be(20))
}

/// Workbook with one worksheet named `sheet`; `cols` are header + values.
pub fn write_workbook(path: &Path, sheet: &str, cols: &[(&str, Vec<f64>)]) {
    let mut book = umya_spreadsheet::new_file();
    let ws = book.get_active_sheet_mut();
    ws.set_name(sheet);
    for (c, (name, values)) in cols.iter().enumerate() {
        let col = c as u32 + 1;
        ws.get_cell_mut((col, 1)).set_value(*name);
        for (r, v) in values.iter().enumerate() {
            ws.get_cell_mut((col, r as u32 + 2)).set_value_number(*v);
        }
    }
    umya_spreadsheet::writer::xlsx::write(&book, path).expect("write workbook");
}
