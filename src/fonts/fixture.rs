//! Minimal TrueType font assembled in memory for tests
//!
//! 1000 units per em, ascender 800, descender -200. Printable ASCII other
//! than space maps to a single box glyph covering x 50..550 and y 0..700
//! with a 600 unit advance. Space is blank with a 300 unit advance.

pub const UNITS_PER_EM: u16 = 1000;
pub const ASCENDER: i16 = 800;
pub const DESCENDER: i16 = -200;
pub const BOX_ADVANCE: u16 = 600;
pub const SPACE_ADVANCE: u16 = 300;
pub const BOX_X: (i16, i16) = (50, 550);
pub const BOX_Y: (i16, i16) = (0, 700);

fn push_u16(out: &mut Vec<u8>, v: u16) {
    out.extend_from_slice(&v.to_be_bytes());
}

fn push_i16(out: &mut Vec<u8>, v: i16) {
    out.extend_from_slice(&v.to_be_bytes());
}

fn push_u32(out: &mut Vec<u8>, v: u32) {
    out.extend_from_slice(&v.to_be_bytes());
}

fn box_glyph() -> Vec<u8> {
    let (x0, x1) = BOX_X;
    let (y0, y1) = BOX_Y;
    let mut g = Vec::new();
    push_i16(&mut g, 1); // contours
    for v in [x0, y0, x1, y1] {
        push_i16(&mut g, v);
    }
    push_u16(&mut g, 3); // last point index
    push_u16(&mut g, 0); // no instructions
    g.extend_from_slice(&[0x01; 4]); // on-curve, full-width deltas
    for dx in [x0, 0, x1 - x0, 0] {
        push_i16(&mut g, dx);
    }
    for dy in [y0, y1 - y0, 0, y0 - y1] {
        push_i16(&mut g, dy);
    }
    g
}

fn head() -> Vec<u8> {
    let mut t = Vec::new();
    push_u32(&mut t, 0x0001_0000); // version
    push_u32(&mut t, 0x0001_0000); // revision
    push_u32(&mut t, 0); // checksum adjustment
    push_u32(&mut t, 0x5F0F_3CF5); // magic
    push_u16(&mut t, 0); // flags
    push_u16(&mut t, UNITS_PER_EM);
    t.extend_from_slice(&[0; 16]); // created, modified
    for v in [BOX_X.0, BOX_Y.0, BOX_X.1, BOX_Y.1] {
        push_i16(&mut t, v);
    }
    push_u16(&mut t, 0); // mac style
    push_u16(&mut t, 8); // lowest rec ppem
    push_i16(&mut t, 2); // direction hint
    push_i16(&mut t, 1); // long loca offsets
    push_i16(&mut t, 0); // glyph data format
    t
}

fn hhea(metrics: u16) -> Vec<u8> {
    let mut t = Vec::new();
    push_u32(&mut t, 0x0001_0000);
    push_i16(&mut t, ASCENDER);
    push_i16(&mut t, DESCENDER);
    push_i16(&mut t, 0); // line gap
    push_u16(&mut t, BOX_ADVANCE);
    push_i16(&mut t, 0); // min left bearing
    push_i16(&mut t, 0); // min right bearing
    push_i16(&mut t, BOX_X.1);
    push_i16(&mut t, 1); // caret rise
    push_i16(&mut t, 0); // caret run
    push_i16(&mut t, 0); // caret offset
    t.extend_from_slice(&[0; 8]); // reserved
    push_i16(&mut t, 0); // metric data format
    push_u16(&mut t, metrics);
    t
}

fn cmap() -> Vec<u8> {
    // (first char, last char, glyph)
    let groups: [(u32, u32, u32); 2] = [(0x20, 0x20, 2), (0x21, 0x7E, 1)];
    let mut t = Vec::new();
    push_u16(&mut t, 0); // version
    push_u16(&mut t, 1); // one encoding record
    push_u16(&mut t, 3); // Windows
    push_u16(&mut t, 10); // Unicode full repertoire
    push_u32(&mut t, 12);
    push_u16(&mut t, 13); // format 13
    push_u16(&mut t, 0);
    push_u32(&mut t, 16 + 12 * groups.len() as u32);
    push_u32(&mut t, 0); // language
    push_u32(&mut t, groups.len() as u32);
    for (first, last, glyph) in groups {
        push_u32(&mut t, first);
        push_u32(&mut t, last);
        push_u32(&mut t, glyph);
    }
    t
}

/// Bytes of a complete font: `.notdef` (blank), the box glyph and space
pub fn box_font() -> Vec<u8> {
    let glyf = box_glyph();
    let glyf_len = glyf.len() as u32;

    let mut loca = Vec::new();
    for offset in [0, 0, glyf_len, glyf_len] {
        push_u32(&mut loca, offset);
    }

    let mut hmtx = Vec::new();
    for (advance, bearing) in [(500, 0), (BOX_ADVANCE, BOX_X.0), (SPACE_ADVANCE, 0)] {
        push_u16(&mut hmtx, advance);
        push_i16(&mut hmtx, bearing);
    }

    let mut maxp = Vec::new();
    push_u32(&mut maxp, 0x0000_5000);
    push_u16(&mut maxp, 3);

    // Table records must be sorted by tag
    let tables: [(&[u8; 4], Vec<u8>); 7] = [
        (b"cmap", cmap()),
        (b"glyf", glyf),
        (b"head", head()),
        (b"hhea", hhea(3)),
        (b"hmtx", hmtx),
        (b"loca", loca),
        (b"maxp", maxp),
    ];

    let mut font = Vec::new();
    push_u32(&mut font, 0x0001_0000);
    push_u16(&mut font, tables.len() as u16);
    push_u16(&mut font, 64); // search range
    push_u16(&mut font, 2); // entry selector
    push_u16(&mut font, tables.len() as u16 * 16 - 64); // range shift

    let mut offset = 12 + 16 * tables.len() as u32;
    let mut body = Vec::new();
    for (tag, data) in &tables {
        font.extend_from_slice(*tag);
        push_u32(&mut font, 0); // checksum
        push_u32(&mut font, offset);
        push_u32(&mut font, data.len() as u32);

        body.extend_from_slice(data);
        while body.len() % 4 != 0 {
            body.push(0);
        }
        offset = 12 + 16 * tables.len() as u32 + body.len() as u32;
    }
    font.extend_from_slice(&body);
    font
}
