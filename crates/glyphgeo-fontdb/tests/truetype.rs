//! Outline extraction from real TrueType data
//!
//! The fonts are assembled table by table below, so every test knows
//! exactly which contours skrifa will hand back.

use glyphgeo_core::{
    convert,
    outline::{self, Winding},
    types::{PathCommand, Point},
    ConvertParams, GlyphGeoError, OutlineSource,
};
use glyphgeo_fontdb::Font;
use skrifa::GlyphId;

const UNITS_PER_EM: u16 = 1000;

fn put16(buf: &mut Vec<u8>, value: i32) {
    buf.extend_from_slice(&(value as u16).to_be_bytes());
}

fn put32(buf: &mut Vec<u8>, value: u32) {
    buf.extend_from_slice(&value.to_be_bytes());
}

/// Wraps tables in an sfnt directory, sorted by tag
fn sfnt(mut tables: Vec<(&[u8; 4], Vec<u8>)>) -> Vec<u8> {
    tables.sort_by(|a, b| a.0.cmp(b.0));
    let count = tables.len();
    let mut selector = 0;
    while (2usize << selector) <= count {
        selector += 1;
    }
    let search_range = 16usize << selector;

    let mut font = Vec::new();
    put32(&mut font, 0x0001_0000);
    put16(&mut font, count as i32);
    put16(&mut font, search_range as i32);
    put16(&mut font, selector as i32);
    put16(&mut font, (count * 16 - search_range) as i32);

    let header_len = 12 + 16 * count;
    let mut body = Vec::new();
    for (tag, data) in &tables {
        font.extend_from_slice(*tag);
        put32(&mut font, 0);
        put32(&mut font, (header_len + body.len()) as u32);
        put32(&mut font, data.len() as u32);
        body.extend_from_slice(data);
        while body.len() % 4 != 0 {
            body.push(0);
        }
    }
    font.extend(body);
    font
}

fn head(bounds: [i32; 4]) -> Vec<u8> {
    let mut buf = Vec::new();
    put16(&mut buf, 1);
    put16(&mut buf, 0);
    put32(&mut buf, 0x0001_0000);
    put32(&mut buf, 0);
    put32(&mut buf, 0x5F0F_3CF5);
    put16(&mut buf, 0);
    put16(&mut buf, i32::from(UNITS_PER_EM));
    buf.extend_from_slice(&[0; 16]);
    for value in bounds {
        put16(&mut buf, value);
    }
    put16(&mut buf, 0);
    put16(&mut buf, 8);
    put16(&mut buf, 2);
    // Long loca offsets
    put16(&mut buf, 1);
    put16(&mut buf, 0);
    buf
}

/// Simple glyph with on-curve points only, written as full deltas
fn simple_glyph(contours: &[&[(i32, i32)]]) -> Vec<u8> {
    let points: Vec<(i32, i32)> = contours.iter().flat_map(|c| c.iter().copied()).collect();
    let mut buf = Vec::new();
    if points.is_empty() {
        return buf;
    }

    put16(&mut buf, contours.len() as i32);
    put16(&mut buf, points.iter().map(|p| p.0).min().unwrap_or(0));
    put16(&mut buf, points.iter().map(|p| p.1).min().unwrap_or(0));
    put16(&mut buf, points.iter().map(|p| p.0).max().unwrap_or(0));
    put16(&mut buf, points.iter().map(|p| p.1).max().unwrap_or(0));
    let mut end = -1;
    for contour in contours {
        end += contour.len() as i32;
        put16(&mut buf, end);
    }
    put16(&mut buf, 0);
    buf.extend(std::iter::repeat(0x01).take(points.len()));
    let mut last = 0;
    for &(x, _) in &points {
        put16(&mut buf, x - last);
        last = x;
    }
    last = 0;
    for &(_, y) in &points {
        put16(&mut buf, y - last);
        last = y;
    }
    while buf.len() % 4 != 0 {
        buf.push(0);
    }
    buf
}

/// Three glyphs: `.notdef` box, `O` with a square counter, empty space
///
/// Outer contours wind clockwise in font units, counters the other way,
/// as TrueType expects. Side bearings equal each glyph's xMin.
fn square_o_font() -> Vec<u8> {
    let notdef: &[(i32, i32)] = &[(50, 0), (50, 700), (450, 700), (450, 0)];
    let outer: &[(i32, i32)] = &[(0, 0), (0, 700), (600, 700), (600, 0)];
    let counter: &[(i32, i32)] = &[(100, 100), (500, 100), (500, 600), (100, 600)];
    let glyphs = [
        simple_glyph(&[notdef]),
        simple_glyph(&[outer, counter]),
        simple_glyph(&[]),
    ];
    let metrics = [(500, 50), (700, 0), (300, 0)];

    let mut glyf = Vec::new();
    let mut loca = Vec::new();
    for glyph in &glyphs {
        put32(&mut loca, glyf.len() as u32);
        glyf.extend_from_slice(glyph);
    }
    put32(&mut loca, glyf.len() as u32);

    let mut hmtx = Vec::new();
    for (advance, lsb) in metrics {
        put16(&mut hmtx, advance);
        put16(&mut hmtx, lsb);
    }

    let mut hhea = Vec::new();
    for value in [1, 0, 800, -200, 0, 700, 0, 0, 600, 1, 0, 0, 0, 0, 0, 0, 0] {
        put16(&mut hhea, value);
    }
    put16(&mut hhea, metrics.len() as i32);

    let mut maxp = Vec::new();
    put32(&mut maxp, 0x0001_0000);
    put16(&mut maxp, glyphs.len() as i32);
    for value in [8, 2, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0] {
        put16(&mut maxp, value);
    }

    // Format 4: ' ' -> 2, 'O' -> 1, then the closing 0xFFFF segment
    let segments = [(0x20, 0x20, 2 - 0x20), (0x4F, 0x4F, 1 - 0x4F), (0xFFFF, 0xFFFF, 1)];
    let mut cmap = Vec::new();
    put16(&mut cmap, 0);
    put16(&mut cmap, 1);
    put16(&mut cmap, 3);
    put16(&mut cmap, 1);
    put32(&mut cmap, 12);
    put16(&mut cmap, 4);
    put16(&mut cmap, 16 + 8 * segments.len() as i32);
    put16(&mut cmap, 0);
    put16(&mut cmap, 2 * segments.len() as i32);
    put16(&mut cmap, 4);
    put16(&mut cmap, 1);
    put16(&mut cmap, 2);
    for (_, end, _) in segments {
        put16(&mut cmap, end);
    }
    put16(&mut cmap, 0);
    for (start, _, _) in segments {
        put16(&mut cmap, start);
    }
    for (_, _, delta) in segments {
        put16(&mut cmap, delta);
    }
    for _ in segments {
        put16(&mut cmap, 0);
    }

    sfnt(vec![
        (b"cmap", cmap),
        (b"glyf", glyf),
        (b"head", head([0, 0, 600, 700])),
        (b"hhea", hhea),
        (b"hmtx", hmtx),
        (b"loca", loca),
        (b"maxp", maxp),
    ])
}

fn font() -> Font {
    Font::from_data(square_o_font()).unwrap()
}

fn end_points(commands: &[PathCommand]) -> Vec<Point> {
    commands.iter().filter_map(PathCommand::end_point).collect()
}

#[test]
fn loads_and_validates_truetype() {
    let _ = env_logger::builder().is_test(true).try_init();
    let font = font();

    assert!(font.validate().is_ok());
    assert_eq!(font.units_per_em(), UNITS_PER_EM);
    assert_eq!(font.glyph_count(), Some(3));
    assert_eq!(font.face_index(), 0);
}

#[test]
fn loads_from_disk() {
    let path = std::env::temp_dir().join(format!("glyphgeo-square-o-{}.ttf", std::process::id()));
    std::fs::write(&path, square_o_font()).unwrap();

    let loaded = Font::from_file(&path);
    let _ = std::fs::remove_file(&path);
    let font = loaded.unwrap();
    assert_eq!(font.data(), square_o_font().as_slice());
    assert!(font.validate().is_ok());
}

#[test]
fn charmap_falls_back_to_notdef() {
    let font = font();
    assert_eq!(font.glyph_id('O').unwrap(), GlyphId::new(1));
    assert_eq!(font.glyph_id(' ').unwrap(), GlyphId::new(2));
    assert_eq!(font.glyph_id('Z').unwrap(), GlyphId::NOTDEF);
    assert_eq!(font.glyph_id('欧').unwrap(), GlyphId::NOTDEF);

    let missing = font.glyph_outline('Z', 0.0, 1.0).unwrap();
    assert_eq!(missing.advance_width, 500.0);
    assert_eq!(
        end_points(&missing.commands),
        vec![
            Point::new(50.0, 0.0),
            Point::new(50.0, -700.0),
            Point::new(450.0, -700.0),
            Point::new(450.0, 0.0),
        ]
    );
}

#[test]
fn outline_is_positioned_scaled_and_flipped() {
    let glyph = font().glyph_outline('O', 100.0, 0.5).unwrap();

    // Advance stays in font units
    assert_eq!(glyph.advance_width, 700.0);
    let moves = glyph
        .commands
        .iter()
        .filter(|cmd| matches!(cmd, PathCommand::MoveTo(_)))
        .count();
    assert_eq!(moves, 2);
    assert_eq!(
        end_points(&glyph.commands),
        vec![
            Point::new(100.0, 0.0),
            Point::new(100.0, -350.0),
            Point::new(400.0, -350.0),
            Point::new(400.0, 0.0),
            Point::new(150.0, -50.0),
            Point::new(350.0, -50.0),
            Point::new(350.0, -300.0),
            Point::new(150.0, -300.0),
        ]
    );
}

#[test]
fn space_has_advance_but_no_outline() {
    let glyph = font().glyph_outline(' ', 0.0, 1.0).unwrap();
    assert!(glyph.is_empty());
    assert_eq!(glyph.advance_width, 300.0);
}

#[test]
fn letter_o_keeps_its_counter() {
    let font = font();
    let params = ConvertParams::default().with_anchor(114.364_212_4, 30.512_943);
    let collection = convert(&font, "O", &params).unwrap();

    assert_eq!(collection.len(), 1);
    let polygon = &collection.features[0].geometry;
    assert_eq!(polygon.outer.len(), 4);
    assert_eq!(polygon.holes.len(), 1);
    assert_eq!(polygon.holes[0].len(), 4);
    assert_eq!(outline::winding(&polygon.outer), Winding::Clockwise);
    assert_eq!(outline::winding(&polygon.holes[0]), Winding::CounterClockwise);

    let center = collection.bounding_box().center().unwrap();
    assert!((center.x - 114.364_212_4).abs() < 1e-9);
    assert!((center.y - 30.512_943).abs() < 1e-9);
}

#[test]
fn advance_includes_spaces() {
    let font = font();
    let params = ConvertParams::default().with_text_height(1000.0);
    let collection = convert(&font, "O O", &params).unwrap();

    assert_eq!(collection.len(), 2);
    let left = collection.features[0].geometry.outer[0];
    let right = collection.features[1].geometry.outer[0];
    assert!((right.x - left.x - 1000.0).abs() < 1e-9);
    assert!((right.y - left.y).abs() < 1e-9);
}

#[test]
fn space_only_text_is_empty_geometry() {
    assert!(matches!(
        convert(&font(), "  ", &ConvertParams::default()),
        Err(GlyphGeoError::EmptyGeometry)
    ));
}

#[test]
fn face_without_outlines_is_rejected() {
    // A head table alone parses, but there is nothing to draw
    let font = Font::from_data(sfnt(vec![(b"head", head([0, 0, 0, 0]))])).unwrap();
    assert_eq!(font.units_per_em(), UNITS_PER_EM);

    assert!(matches!(
        font.validate(),
        Err(GlyphGeoError::InvalidFontHandle(_))
    ));
    assert!(matches!(
        convert(&font, "O", &ConvertParams::default()),
        Err(GlyphGeoError::InvalidFontHandle(_))
    ));
}
