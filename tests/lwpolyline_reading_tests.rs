//! Integration tests for reading LWPOLYLINE entities

mod common;

use common::{dxf_text, entities_section, reader_for};
use lwpoly_dxf::notification::NotificationType;
use lwpoly_dxf::{DxfError, DxfReader, DxfReaderConfiguration, Handle, LwPolyline, Vector2, Vector3};
use std::io::Write;

fn read_all(reader: DxfReader) -> Vec<LwPolyline> {
    reader.collect::<Result<Vec<_>, _>>().expect("read should succeed")
}

#[test]
fn test_dxf_reader_from_nonexistent_file() {
    let result = DxfReader::from_file("nonexistent.dxf");
    assert!(matches!(result, Err(DxfError::Io(_))));
}

#[test]
fn test_closed_polyline_with_one_arc() {
    let text = entities_section(&[
        (0, "LWPOLYLINE"),
        (5, "2F"),
        (100, "AcDbEntity"),
        (8, "Outline"),
        (100, "AcDbPolyline"),
        (90, "        3"),
        (70, "     1"),
        (43, "0.0"),
        (10, "0.0"),
        (20, "0.0"),
        (10, "1.0"),
        (20, "1.0"),
        (42, "0.5"),
        (10, "2.0"),
        (20, "0.0"),
    ]);

    let mut reader = reader_for(&text);
    let lw = reader.next_lwpolyline().unwrap().expect("one polyline");

    assert_eq!(lw.common.handle, Handle::new(0x2F));
    assert_eq!(lw.common.layer, "Outline");
    assert!(lw.is_closed);
    assert_eq!(
        lw.vertices.iter().map(|v| v.location).collect::<Vec<_>>(),
        vec![Vector2::new(0.0, 0.0), Vector2::new(1.0, 1.0), Vector2::new(2.0, 0.0)]
    );
    assert_eq!(
        lw.vertices.iter().map(|v| v.bulge).collect::<Vec<_>>(),
        vec![0.0, 0.5, 0.0]
    );
    assert!(reader.next_lwpolyline().unwrap().is_none());

    // Subclass markers are not LWPOLYLINE fields and are surfaced, not dropped.
    let warnings = reader.notifications().of_type(NotificationType::Warning);
    assert_eq!(warnings.len(), 2);
    assert!(warnings.iter().all(|n| n.message.contains("'100'")));
}

#[test]
fn test_elevation_thickness_and_extrusion() {
    let text = entities_section(&[
        (0, "LWPOLYLINE"),
        (90, "2"),
        (70, "0"),
        (38, "5.5"),
        (39, "2.0"),
        (10, "0"),
        (20, "0"),
        (40, "0.25"),
        (41, "0.75"),
        (10, "10"),
        (20, "0"),
        (210, "0.0"),
        (220, "0.0"),
        (230, "-1.0"),
    ]);

    let lws = read_all(reader_for(&text));
    assert_eq!(lws.len(), 1);
    let lw = &lws[0];
    assert!(!lw.is_closed);
    assert_eq!(lw.elevation, 5.5);
    assert_eq!(lw.thickness, 2.0);
    assert_eq!(lw.normal, Vector3::new(0.0, 0.0, -1.0));
    assert_eq!(lw.vertices[0].start_width, 0.25);
    assert_eq!(lw.vertices[0].end_width, 0.75);
    assert_eq!(lw.vertices[1].start_width, 0.0);
    assert_eq!(lw.segment_count(), 1);
}

#[test]
fn test_polylines_in_blocks_are_read() {
    let text = dxf_text(&[
        (0, "SECTION"),
        (2, "BLOCKS"),
        (0, "BLOCK"),
        (2, "DOOR"),
        (0, "LWPOLYLINE"),
        (8, "Doors"),
        (10, "0"),
        (20, "0"),
        (10, "0"),
        (20, "1"),
        (0, "ENDBLK"),
        (0, "ENDSEC"),
        (0, "EOF"),
    ]);

    let mut reader = reader_for(&text);
    let lws: Vec<_> = reader.by_ref().collect::<Result<_, _>>().unwrap();
    assert_eq!(lws.len(), 1);
    assert_eq!(lws[0].common.layer, "Doors");
    // Only skipped kinds inside ENTITIES are reported.
    assert!(reader.notifications().is_empty());
}

#[test]
fn test_invalid_flag_strict_and_failsafe() {
    let text = entities_section(&[
        (0, "LWPOLYLINE"),
        (70, "2"),
        (10, "0"),
        (20, "0"),
        (0, "LWPOLYLINE"),
        (70, "1"),
        (10, "3"),
        (20, "4"),
    ]);

    let mut strict = reader_for(&text);
    match strict.next_lwpolyline() {
        Err(DxfError::InvalidFlag { code, value }) => {
            assert_eq!(code, " 70");
            assert_eq!(value, "2");
        }
        other => panic!("expected flag error, got {other:?}"),
    }

    let mut failsafe = reader_for(&text).with_configuration(DxfReaderConfiguration {
        failsafe: true,
        ..Default::default()
    });
    let lws: Vec<_> = failsafe.by_ref().collect::<Result<_, _>>().unwrap();
    assert_eq!(lws.len(), 1);
    assert!(lws[0].is_closed);
    assert_eq!(lws[0].vertices[0].location, Vector2::new(3.0, 4.0));
    assert_eq!(failsafe.notifications().of_type(NotificationType::Error).len(), 1);
}

#[test]
fn test_dangling_x_at_entity_end() {
    let text = entities_section(&[(0, "LWPOLYLINE"), (10, "0"), (20, "0"), (10, "1")]);
    let mut reader = reader_for(&text);
    assert!(matches!(
        reader.next_lwpolyline(),
        Err(DxfError::IncompleteVertex { x_count: 2, y_count: 1 })
    ));
}

#[test]
fn test_tokenizer_error_is_not_skipped_in_failsafe_mode() {
    let text = "  0\nSECTION\n  2\nENTITIES\n  0\nLWPOLYLINE\nnot-a-code\n1\n";
    let mut reader = reader_for(text).with_configuration(DxfReaderConfiguration {
        failsafe: true,
        ..Default::default()
    });
    assert!(matches!(reader.next_lwpolyline(), Err(DxfError::Parse(_))));
}

#[test]
fn test_read_from_file_with_code_page() {
    let text = entities_section(&[(0, "LWPOLYLINE"), (8, "@"), (10, "0"), (20, "0")]);
    // Layer name "Слой" in windows-1251.
    let bytes: Vec<u8> = text
        .bytes()
        .flat_map(|b| if b == b'@' { vec![0xD1, 0xEB, 0xEE, 0xE9] } else { vec![b] })
        .collect();

    let path = std::env::temp_dir().join(format!("lwpoly_dxf_cp1251_{}.dxf", std::process::id()));
    std::fs::File::create(&path).unwrap().write_all(&bytes).unwrap();

    let reader = DxfReader::from_file(&path).unwrap().with_configuration(DxfReaderConfiguration {
        failsafe: false,
        encoding: Some(encoding_rs::WINDOWS_1251),
    });
    let lws = read_all(reader);
    std::fs::remove_file(&path).ok();

    assert_eq!(lws[0].common.layer, "Слой");
}
