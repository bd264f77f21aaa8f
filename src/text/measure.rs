//! Text measurement via HarfBuzz shaping
//!
//! Widths come from real shaping, not per-char advances, so kerning and
//! mark placement are accounted for. Everything is left-to-right; the
//! engine targets a single fixed language.

use rustybuzz::{Direction, UnicodeBuffer};

use crate::text::fonts::LabelFont;

/// One shaped glyph in font units
///
/// Callers scale by `metrics.scale(font_size)` to get pixels.
#[derive(Debug, Clone, Copy)]
pub struct ShapedGlyph {
  pub glyph_id: u16,
  pub x_advance: f32,
  pub x_offset: f32,
  pub y_offset: f32,
}

/// Shapes a string into positioned glyphs
///
/// Returns an empty vec if the face cannot be parsed for shaping; callers
/// treat that as "nothing to draw" rather than an error.
pub fn shape(text: &str, font: &LabelFont) -> Vec<ShapedGlyph> {
  let face = match font.as_shaper_face() {
    Some(face) => face,
    None => return Vec::new(),
  };
  let mut buffer = UnicodeBuffer::new();
  buffer.push_str(text);
  buffer.set_direction(Direction::LeftToRight);
  let output = rustybuzz::shape(&face, &[], buffer);
  output
    .glyph_infos()
    .iter()
    .zip(output.glyph_positions().iter())
    .map(|(info, pos)| ShapedGlyph {
      glyph_id: info.glyph_id as u16,
      x_advance: pos.x_advance as f32,
      x_offset: pos.x_offset as f32,
      y_offset: pos.y_offset as f32,
    })
    .collect()
}

/// Measures the advance width of a string in pixels at the given size
///
/// Falls back to a crude per-char estimate when shaping is unavailable,
/// so measurement never fails outright.
pub fn measure_width(text: &str, font: &LabelFont, font_size: f32) -> f32 {
  if text.is_empty() {
    return 0.0;
  }
  let glyphs = shape(text, font);
  if glyphs.is_empty() {
    return estimate_width(text, font_size);
  }
  let scale = font.metrics.scale(font_size);
  glyphs.iter().map(|g| g.x_advance).sum::<f32>() * scale
}

fn estimate_width(text: &str, font_size: f32) -> f32 {
  text.chars().count() as f32 * font_size * 0.5
}

// =============================================================================
// Tests
// =============================================================================
