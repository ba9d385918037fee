//! Round-trip tests for the quad file format.
//!
//! To run: cargo test -p quad-io --test quad_format_roundtrip

#![allow(clippy::unwrap_used, clippy::expect_used)]

use quad_io::{load_quads, save_quads, IoError};
use quad_normals::vertex_normals;
use quad_types::unit_cube;
use tempfile::tempdir;

#[test]
fn cube_survives_a_round_trip_exactly() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("cube.quads");

    let faces = unit_cube();
    let normals = vertex_normals(&faces);
    save_quads(&faces, &normals, &path).unwrap();

    // f64 Display output round-trips bit-for-bit through parsing
    let reloaded = load_quads(&path).unwrap();
    assert_eq!(reloaded, faces);
}

#[test]
fn reader_ignores_the_written_normals_section() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("cube.quads");

    let faces = unit_cube();
    save_quads(&faces, &vertex_normals(&faces), &path).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("NORMALS"));
    // 6 face lines + marker + 6 normal lines
    assert_eq!(content.lines().count(), 13);

    let reloaded = load_quads(&path).unwrap();
    assert_eq!(reloaded.len(), 6);
}

#[test]
fn writer_refuses_to_overwrite() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("cube.quads");

    let faces = unit_cube();
    let normals = vertex_normals(&faces);
    save_quads(&faces, &normals, &path).unwrap();

    let err = save_quads(&faces, &normals, &path).unwrap_err();
    assert!(matches!(err, IoError::AlreadyExists { .. }));
}

#[test]
fn missing_input_file_is_reported_as_not_found() {
    let dir = tempdir().unwrap();
    let err = load_quads(dir.path().join("nope.quads")).unwrap_err();
    assert!(matches!(err, IoError::FileNotFound { .. }));
}
