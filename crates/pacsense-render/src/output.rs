//! Plain-text and PGM output to any writer.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::RenderError;
use crate::image::{to_gray, ImageView};

/// Characters from darkest to brightest.
pub const RAMP: &[u8; 10] = b" .:-=+*#%@";

/// Character drawn for a grey level.
pub fn ramp_char(gray: u8) -> char {
    let i = usize::from(gray) * RAMP.len() / 256;
    char::from(RAMP[i])
}

/// Write `image` as text, one character per pixel and one line per row.
pub fn render_ascii<W: Write>(image: &ImageView<'_>, out: &mut W) -> Result<(), RenderError> {
    let mut line = String::with_capacity(image.width() + 1);
    for row in image.rows() {
        line.clear();
        line.extend(row.iter().map(|&v| ramp_char(to_gray(v))));
        line.push('\n');
        out.write_all(line.as_bytes())?;
    }
    Ok(())
}

/// Write `image` as a binary 8-bit PGM (`P5`).
pub fn write_pgm<W: Write>(image: &ImageView<'_>, out: &mut W) -> Result<(), RenderError> {
    write!(out, "P5\n{} {}\n255\n", image.width(), image.height())?;
    out.write_all(&image.to_gray())?;
    Ok(())
}

/// Save `image` as a PGM file at `path`, replacing any existing file.
pub fn save_pgm(image: &ImageView<'_>, path: impl AsRef<Path>) -> Result<(), RenderError> {
    let path = path.as_ref();
    let with_path = |source| RenderError::Io {
        path: Some(path.to_path_buf()),
        source,
    };
    let file = File::create(path).map_err(with_path)?;
    let mut out = BufWriter::new(file);
    match write_pgm(image, &mut out) {
        Ok(()) => {}
        Err(RenderError::Io { source, .. }) => return Err(with_path(source)),
        Err(e) => return Err(e),
    }
    out.flush().map_err(with_path)?;
    tracing::debug!(
        path = %path.display(),
        height = image.height(),
        width = image.width(),
        "saved image"
    );
    Ok(())
}
