//! The line-oriented quad format.
//!
//! Each line holds twelve whitespace-separated floats: four vertices times
//! x y z, in winding order. A line containing `NORMALS` ends the face
//! section; the lines after it carry previously written per-face vertex
//! normals in the same twelve-float layout. The reader stops at the marker
//! and never consumes the normals — they are always recomputed.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use quad_types::{Point, QuadFace};

use crate::error::{IoError, IoResult};
use crate::NormalMap;

/// Marker line separating faces from normals.
const NORMALS_MARKER: &str = "NORMALS";

/// Load quad faces from a file.
///
/// # Errors
///
/// Returns an error if the file cannot be read, or if a face line does not
/// hold exactly twelve parsable floats.
///
/// # Example
///
/// ```no_run
/// use quad_io::load_quads;
///
/// let faces = load_quads("model.quads")?;
/// println!("loaded {} faces", faces.len());
/// # Ok::<(), quad_io::IoError>(())
/// ```
pub fn load_quads<P: AsRef<Path>>(path: P) -> IoResult<Vec<QuadFace>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IoError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IoError::Io(e)
        }
    })?;

    read_quads(BufReader::new(file))
}

/// Read quad faces from any buffered reader.
///
/// # Errors
///
/// Returns an error on I/O failure or on a malformed face line.
pub fn read_quads<R: BufRead>(reader: R) -> IoResult<Vec<QuadFace>> {
    let mut faces = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.to_uppercase().contains(NORMALS_MARKER) {
            break;
        }
        if line.trim().is_empty() {
            continue;
        }
        faces.push(parse_face_line(&line, index + 1)?);
    }

    Ok(faces)
}

/// Parse one face line: twelve floats, four vertices.
fn parse_face_line(line: &str, number: usize) -> IoResult<QuadFace> {
    let values = line
        .split_whitespace()
        .map(str::parse::<f64>)
        .collect::<Result<Vec<f64>, _>>()
        .map_err(|e| IoError::invalid_content(format!("line {number}: {e}")))?;

    if values.len() != 12 {
        return Err(IoError::invalid_content(format!(
            "line {number}: expected 12 values for a quad face, got {}",
            values.len()
        )));
    }

    let vertex = |i: usize| Point::new(values[3 * i], values[3 * i + 1], values[3 * i + 2]);
    Ok(QuadFace::new([vertex(0), vertex(1), vertex(2), vertex(3)]))
}

/// Save quad faces and their vertex normals to a file.
///
/// Refuses to overwrite: an existing file at `path` is an error. Writes the
/// face lines, the `NORMALS` marker, then one line of four normals per
/// face, looked up by exact vertex value.
///
/// # Errors
///
/// Returns an error if `path` already exists, on I/O failure, or when a
/// face vertex has no entry in `normals`.
pub fn save_quads<P: AsRef<Path>>(
    faces: &[QuadFace],
    normals: &NormalMap,
    path: P,
) -> IoResult<()> {
    let path = path.as_ref();
    if path.exists() {
        return Err(IoError::AlreadyExists {
            path: path.to_path_buf(),
        });
    }

    let mut writer = BufWriter::new(File::create(path)?);
    write_quads(faces, normals, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Write quad faces and normals to any writer.
///
/// # Errors
///
/// Returns an error on I/O failure or a missing vertex normal.
pub fn write_quads<W: Write>(
    faces: &[QuadFace],
    normals: &NormalMap,
    writer: &mut W,
) -> IoResult<()> {
    for face in faces {
        let v = face.vertices();
        writeln!(
            writer,
            "{} {} {} {} {} {} {} {} {} {} {} {}",
            v[0].x, v[0].y, v[0].z, v[1].x, v[1].y, v[1].z, v[2].x, v[2].y, v[2].z, v[3].x,
            v[3].y, v[3].z
        )?;
    }

    writeln!(writer, "{NORMALS_MARKER}")?;
    for face in faces {
        let mut parts = Vec::with_capacity(12);
        for vertex in face.vertices() {
            let normal = normals
                .get(vertex)
                .ok_or(IoError::MissingNormal { vertex: *vertex })?;
            parts.push(normal.x.to_string());
            parts.push(normal.y.to_string());
            parts.push(normal.z.to_string());
        }
        writeln!(writer, "{}", parts.join(" "))?;
    }

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn reads_one_face_per_line() {
        let input = "0 0 0 1 0 0 1 1 0 0 1 0\n0 0 1 1 0 1 1 1 1 0 1 1\n";
        let faces = read_quads(Cursor::new(input)).unwrap();

        assert_eq!(faces.len(), 2);
        assert_eq!(faces[0].vertices()[1], Point::new(1.0, 0.0, 0.0));
        assert_eq!(faces[1].vertices()[3], Point::new(0.0, 1.0, 1.0));
    }

    #[test]
    fn stops_at_normals_marker() {
        let input = "0 0 0 1 0 0 1 1 0 0 1 0\nNORMALS\n0 0 1 0 0 1 0 0 1 0 0 1\n";
        let faces = read_quads(Cursor::new(input)).unwrap();
        assert_eq!(faces.len(), 1);
    }

    #[test]
    fn marker_match_is_case_insensitive() {
        let input = "0 0 0 1 0 0 1 1 0 0 1 0\nnormals\n";
        let faces = read_quads(Cursor::new(input)).unwrap();
        assert_eq!(faces.len(), 1);
    }

    #[test]
    fn skips_blank_lines() {
        let input = "0 0 0 1 0 0 1 1 0 0 1 0\n\n  \n";
        let faces = read_quads(Cursor::new(input)).unwrap();
        assert_eq!(faces.len(), 1);
    }

    #[test]
    fn wrong_value_count_is_rejected_with_line_number() {
        let input = "0 0 0 1 0 0 1 1 0 0 1\n";
        let err = read_quads(Cursor::new(input)).unwrap_err();
        let message = format!("{err}");
        assert!(message.contains("line 1"));
        assert!(message.contains("got 11"));
    }

    #[test]
    fn unparsable_float_is_rejected_with_line_number() {
        let input = "0 0 0 1 0 0 1 1 0 0 1 x\n";
        let err = read_quads(Cursor::new(input)).unwrap_err();
        assert!(format!("{err}").contains("line 1"));
    }

    #[test]
    fn negative_and_fractional_values_survive() {
        let input = "-0.5 0.25 -1 0.5 0.25 -1 0.5 0.75 -1 -0.5 0.75 -1\n";
        let faces = read_quads(Cursor::new(input)).unwrap();
        assert_eq!(faces[0].vertices()[0], Point::new(-0.5, 0.25, -1.0));
    }

    #[test]
    fn missing_normal_is_a_defined_error() {
        let face = QuadFace::new([
            Point::new(0.0, 0.0, 0.0),
            Point::new(1.0, 0.0, 0.0),
            Point::new(1.0, 1.0, 0.0),
            Point::new(0.0, 1.0, 0.0),
        ]);
        let normals = NormalMap::default();

        let mut out = Vec::new();
        let err = write_quads(std::slice::from_ref(&face), &normals, &mut out).unwrap_err();
        assert!(matches!(err, IoError::MissingNormal { .. }));
    }
}
