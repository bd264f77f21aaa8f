//! Raster encoding
//!
//! Labels are fully opaque, so encoding drops the alpha channel and
//! writes plain RGB. PNG is the default interchange format; JPEG exists
//! for preview pipelines that want smaller files.

use std::io::Cursor;
use std::path::Path;

use image::{ImageFormat, RgbImage};
use tiny_skia::Pixmap;

use crate::error::{RenderError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
  Png,
  Jpeg(u8), // quality 0-100
}

impl Default for OutputFormat {
  fn default() -> Self {
    OutputFormat::Png
  }
}

impl OutputFormat {
  /// Picks a format from the file extension; anything unrecognized
  /// encodes as PNG
  pub fn from_extension(path: &Path) -> Self {
    match path.extension().and_then(|ext| ext.to_str()) {
      Some(ext) if ext.eq_ignore_ascii_case("jpg") || ext.eq_ignore_ascii_case("jpeg") => {
        OutputFormat::Jpeg(90)
      }
      _ => OutputFormat::Png,
    }
  }
}

fn to_rgb(pixmap: &Pixmap) -> Result<RgbImage> {
  let mut data = Vec::with_capacity((pixmap.width() * pixmap.height() * 3) as usize);
  for pixel in pixmap.pixels() {
    let c = pixel.demultiply();
    data.push(c.red());
    data.push(c.green());
    data.push(c.blue());
  }
  RgbImage::from_raw(pixmap.width(), pixmap.height(), data).ok_or_else(|| {
    RenderError::EncodeFailed {
      format: "RGB".to_string(),
      reason: "pixel buffer does not match dimensions".to_string(),
    }
    .into()
  })
}

/// Encodes a pixmap into the requested image format
pub fn encode_pixmap(pixmap: &Pixmap, format: OutputFormat) -> Result<Vec<u8>> {
  let rgb = to_rgb(pixmap)?;
  let mut buffer = Vec::new();
  let mut cursor = Cursor::new(&mut buffer);
  match format {
    OutputFormat::Png => {
      rgb
        .write_to(&mut cursor, ImageFormat::Png)
        .map_err(|e| RenderError::EncodeFailed {
          format: "PNG".to_string(),
          reason: e.to_string(),
        })?;
    }
    OutputFormat::Jpeg(quality) => {
      let encoder = image::codecs::jpeg::JpegEncoder::new_with_quality(&mut cursor, quality);
      rgb
        .write_with_encoder(encoder)
        .map_err(|e| RenderError::EncodeFailed {
          format: "JPEG".to_string(),
          reason: e.to_string(),
        })?;
    }
  }
  Ok(buffer)
}

/// Encodes and writes a pixmap, choosing the format from the extension
pub fn write_pixmap(pixmap: &Pixmap, path: &Path) -> Result<()> {
  let bytes = encode_pixmap(pixmap, OutputFormat::from_extension(path))?;
  std::fs::write(path, bytes)?;
  Ok(())
}

// =============================================================================
// Tests
// =============================================================================
