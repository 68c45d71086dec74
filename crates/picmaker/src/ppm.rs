//! Plain (`P3`) portable pixel map output.
//!
//! ```text
//! P3
//! <width> <height>
//! 255
//! <r> <g> <b> <r> <g> <b> ...   one line per row
//! ```

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use crate::{
    buffer::ImageBuffer,
    error::{Error, Result},
    pixel::MAX_CHANNEL,
};

pub const MAGIC: &str = "P3";

pub fn write_header<W: Write>(out: &mut W, width: usize, height: usize) -> std::io::Result<()> {
    writeln!(out, "{MAGIC}")?;
    writeln!(out, "{width} {height}")?;
    writeln!(out, "{MAX_CHANNEL}")
}

/// Write `buf` as a plain pixel map.
///
/// Triples inside a row are separated by one space, the last one is followed
/// by a newline instead.
pub fn write<W: Write>(out: &mut W, buf: &ImageBuffer) -> std::io::Result<()> {
    write_header(out, buf.width(), buf.height())?;
    for row in buf.rows() {
        let mut pixels = row.iter();
        if let Some(first) = pixels.next() {
            write!(out, "{first}")?;
        }
        for pixel in pixels {
            write!(out, " {pixel}")?;
        }
        writeln!(out)?;
    }
    Ok(())
}

pub fn to_vec(buf: &ImageBuffer) -> Vec<u8> {
    let mut out = Vec::with_capacity(buf.pixels().len() * 12 + 16);
    // Writing into a `Vec` cannot fail.
    let _ = write(&mut out, buf);
    out
}

/// Create (or truncate) `path` and write `buf` into it.
#[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn save<P: AsRef<Path>>(path: P, buf: &ImageBuffer) -> Result<()> {
    let path = path.as_ref();
    let to_error = |source| Error::OutputWrite {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(to_error)?;
    let mut out = BufWriter::new(file);
    write(&mut out, buf).map_err(to_error)?;
    out.flush().map_err(to_error)?;
    out.get_ref().sync_all().map_err(to_error)?;

    tracing::info!(width = buf.width(), height = buf.height(), "image written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;
    use crate::pixel::Pixel;

    #[test]
    fn exact_layout() {
        let mut buf = ImageBuffer::new(2, 2);
        buf[(0, 0)] = Pixel::RED;
        buf[(0, 1)] = Pixel::new(0, 255, 0);
        buf[(1, 1)] = Pixel::new(1, 2, 3);

        let text = String::from_utf8(to_vec(&buf)).unwrap();
        assert_eq!(text, "P3\n2 2\n255\n255 0 0 0 255 0\n0 0 0 1 2 3\n");
    }

    #[test]
    fn header_is_width_then_height() {
        let buf = ImageBuffer::new(3, 1);
        let text = String::from_utf8(to_vec(&buf)).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("P3"));
        assert_eq!(lines.next(), Some("3 1"));
        assert_eq!(lines.next(), Some("255"));
        assert_eq!(lines.next(), Some("0 0 0 0 0 0 0 0 0"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn no_trailing_space() {
        let mut buf = ImageBuffer::new(5, 4);
        buf.fill(Pixel::WHITE);
        let text = String::from_utf8(to_vec(&buf)).unwrap();
        assert!(text.lines().all(|l| !l.ends_with(' ')));
        assert!(text.ends_with("255\n"));
    }

    #[test]
    fn save_matches_to_vec() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.ppm");

        let mut buf = ImageBuffer::new(4, 3);
        buf.fill(Pixel::new(9, 8, 7));
        save(&path, &buf).unwrap();

        assert_eq!(std::fs::read(&path).unwrap(), to_vec(&buf));
    }

    #[test]
    fn save_truncates() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.ppm");
        std::fs::write(&path, vec![b'x'; 4096]).unwrap();

        let buf = ImageBuffer::new(1, 1);
        save(&path, &buf).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "P3\n1 1\n255\n0 0 0\n");
    }

    #[test]
    fn unwritable_path_is_an_output_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("out.ppm");

        let err = save(&path, &ImageBuffer::new(1, 1)).unwrap_err();
        let message = err.to_string();
        assert_eq!(message.matches(path.to_str().unwrap()).count(), 1, "{message}");
        match err {
            Error::OutputWrite { path: p, .. } => assert_eq!(p, path),
            other => panic!("unexpected error: {other}"),
        }
    }
}
