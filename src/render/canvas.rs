//! The label drawing surface
//!
//! Wraps a `tiny_skia::Pixmap` with the handful of primitives the label
//! renderer needs: rectangles, circles, and shaped text. Text goes through
//! the full outline pipeline (shape with rustybuzz, extract outlines with
//! ttf-parser, fill with tiny-skia), with glyph space flipped to the
//! canvas's y-down coordinates by the per-glyph transform.
//!
//! Shapes are painted without antialiasing so the output stays pixel-exact
//! for print and for tests; glyphs are antialiased.

use tiny_skia::{
  Color, FillRule, Paint, PathBuilder, Pixmap, Rect, Stroke, Transform,
};

use crate::error::RenderError;
use crate::geometry::Rgb;
use crate::text::fonts::LabelFont;
use crate::text::measure;

/// Collects a glyph outline into a tiny-skia path, in font units
struct GlyphOutline {
  builder: PathBuilder,
}

impl GlyphOutline {
  fn new() -> Self {
    Self {
      builder: PathBuilder::new(),
    }
  }

  fn finish(self) -> Option<tiny_skia::Path> {
    self.builder.finish()
  }
}

impl ttf_parser::OutlineBuilder for GlyphOutline {
  fn move_to(&mut self, x: f32, y: f32) {
    self.builder.move_to(x, y);
  }

  fn line_to(&mut self, x: f32, y: f32) {
    self.builder.line_to(x, y);
  }

  fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
    self.builder.quad_to(x1, y1, x, y);
  }

  fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
    self.builder.cubic_to(x1, y1, x2, y2, x, y);
  }

  fn close(&mut self) {
    self.builder.close();
  }
}

/// Maps font-unit space to pixel space: scale, flip y, translate to pen
fn glyph_transform(scale: f32, x: f32, y: f32) -> Transform {
  Transform::from_row(scale, 0.0, 0.0, -scale, x, y)
}

/// A white-backed RGB canvas
pub struct Canvas {
  pixmap: Pixmap,
}

impl Canvas {
  /// Creates a white canvas of the given pixel size
  ///
  /// # Errors
  ///
  /// Returns [`RenderError::CanvasCreationFailed`] for non-positive or
  /// absurd dimensions. This is the error that routes generation to the
  /// fallback renderer.
  pub fn new(width: i32, height: i32) -> Result<Self, RenderError> {
    if width <= 0 || height <= 0 {
      return Err(RenderError::CanvasCreationFailed { width, height });
    }
    let mut pixmap = Pixmap::new(width as u32, height as u32)
      .ok_or(RenderError::CanvasCreationFailed { width, height })?;
    pixmap.fill(Color::WHITE);
    Ok(Self { pixmap })
  }

  pub fn width(&self) -> i32 {
    self.pixmap.width() as i32
  }

  pub fn height(&self) -> i32 {
    self.pixmap.height() as i32
  }

  pub fn pixmap(&self) -> &Pixmap {
    &self.pixmap
  }

  pub fn into_pixmap(self) -> Pixmap {
    self.pixmap
  }

  /// Color at a pixel, demultiplied to straight RGB
  pub fn pixel(&self, x: i32, y: i32) -> Option<Rgb> {
    if x < 0 || y < 0 {
      return None;
    }
    let c = self.pixmap.pixel(x as u32, y as u32)?.demultiply();
    Some(Rgb::new(c.red(), c.green(), c.blue()))
  }

  /// Fills an axis-aligned rectangle
  pub fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Rgb) {
    let rect = match Rect::from_xywh(x, y, width, height) {
      Some(rect) => rect,
      None => return,
    };
    let paint = shape_paint(color);
    self
      .pixmap
      .fill_rect(rect, &paint, Transform::identity(), None);
  }

  /// Strokes an axis-aligned rectangle outline
  pub fn stroke_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Rgb, line: f32) {
    let rect = match Rect::from_xywh(x, y, width, height) {
      Some(rect) => rect,
      None => return,
    };
    let path = PathBuilder::from_rect(rect);
    let paint = shape_paint(color);
    let stroke = Stroke {
      width: line,
      ..Stroke::default()
    };
    self
      .pixmap
      .stroke_path(&path, &paint, &stroke, Transform::identity(), None);
  }

  /// Strokes a circle outline
  pub fn stroke_circle(&mut self, cx: f32, cy: f32, radius: f32, color: Rgb, line: f32) {
    let mut builder = PathBuilder::new();
    builder.push_circle(cx, cy, radius);
    let path = match builder.finish() {
      Some(path) => path,
      None => return,
    };
    let paint = shape_paint(color);
    let stroke = Stroke {
      width: line,
      ..Stroke::default()
    };
    self
      .pixmap
      .stroke_path(&path, &paint, &stroke, Transform::identity(), None);
  }

  /// Draws a line of text with its top-left corner at `(x, top_y)`
  ///
  /// The baseline sits at `top_y + ascent`. Glyphs without outlines
  /// (spaces, unsupported symbols) still advance the pen. Returns the
  /// total advance in pixels; a font that cannot be shaped draws nothing
  /// and returns 0.
  pub fn draw_text(
    &mut self,
    text: &str,
    x: f32,
    top_y: f32,
    font: &LabelFont,
    font_size: f32,
    color: Rgb,
  ) -> f32 {
    let glyphs = measure::shape(text, font);
    if glyphs.is_empty() {
      return 0.0;
    }
    let face = match font.as_ttf_face() {
      Ok(face) => face,
      Err(_) => return 0.0,
    };
    let scale = font.metrics.scale(font_size);
    let baseline = top_y + font.metrics.ascent_px(font_size);

    let mut paint = Paint::default();
    paint.set_color_rgba8(color.r, color.g, color.b, 255);
    paint.anti_alias = true;

    let mut pen_x = x;
    for glyph in &glyphs {
      let glyph_x = pen_x + glyph.x_offset * scale;
      let glyph_y = baseline - glyph.y_offset * scale;
      let mut outline = GlyphOutline::new();
      if face
        .outline_glyph(ttf_parser::GlyphId(glyph.glyph_id), &mut outline)
        .is_some()
      {
        if let Some(path) = outline.finish() {
          self.pixmap.fill_path(
            &path,
            &paint,
            FillRule::Winding,
            glyph_transform(scale, glyph_x, glyph_y),
            None,
          );
        }
      }
      pen_x += glyph.x_advance * scale;
    }
    pen_x - x
  }
}

fn shape_paint(color: Rgb) -> Paint<'static> {
  let mut paint = Paint::default();
  paint.set_color_rgba8(color.r, color.g, color.b, 255);
  paint.anti_alias = false;
  paint
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
  use super::*;
  use crate::text::fonts::FontLibrary;

  #[test]
  fn test_new_canvas_is_white() {
    let canvas = Canvas::new(40, 30).unwrap();
    assert_eq!(canvas.width(), 40);
    assert_eq!(canvas.height(), 30);
    assert_eq!(canvas.pixel(0, 0), Some(Rgb::WHITE));
    assert_eq!(canvas.pixel(39, 29), Some(Rgb::WHITE));
    assert_eq!(canvas.pixel(40, 29), None);
  }

  #[test]
  fn test_zero_and_negative_sizes_rejected() {
    assert!(Canvas::new(0, 10).is_err());
    assert!(Canvas::new(10, 0).is_err());
    assert!(Canvas::new(-5, 10).is_err());
  }

  #[test]
  fn test_fill_rect() {
    let mut canvas = Canvas::new(20, 20).unwrap();
    canvas.fill_rect(5.0, 5.0, 10.0, 10.0, Rgb::BLACK);
    assert_eq!(canvas.pixel(10, 10), Some(Rgb::BLACK));
    assert_eq!(canvas.pixel(4, 4), Some(Rgb::WHITE));
    assert_eq!(canvas.pixel(15, 10), Some(Rgb::WHITE));
  }

  #[test]
  fn test_fill_rect_ignores_degenerate() {
    let mut canvas = Canvas::new(20, 20).unwrap();
    canvas.fill_rect(5.0, 5.0, 0.0, 10.0, Rgb::BLACK);
    canvas.fill_rect(5.0, 5.0, -3.0, 10.0, Rgb::BLACK);
    assert_eq!(canvas.pixel(5, 5), Some(Rgb::WHITE));
  }

  #[test]
  fn test_stroke_rect_leaves_interior() {
    let mut canvas = Canvas::new(30, 30).unwrap();
    canvas.stroke_rect(5.5, 5.5, 19.0, 19.0, Rgb::BLACK, 1.0);
    assert_eq!(canvas.pixel(15, 15), Some(Rgb::WHITE));
    assert_ne!(canvas.pixel(15, 5), Some(Rgb::WHITE));
  }

  #[test]
  fn test_stroke_circle_marks_perimeter() {
    let mut canvas = Canvas::new(40, 40).unwrap();
    canvas.stroke_circle(20.0, 20.0, 10.0, Rgb::BLACK, 2.0);
    // Center stays white, a point on the circle does not.
    assert_eq!(canvas.pixel(20, 20), Some(Rgb::WHITE));
    assert_ne!(canvas.pixel(30, 20), Some(Rgb::WHITE));
  }

  #[test]
  fn test_draw_text_leaves_ink_and_advances() {
    let library = FontLibrary::bundled().unwrap();
    let mut canvas = Canvas::new(200, 50).unwrap();
    let advance = canvas.draw_text("ГОСТ", 5.0, 5.0, &library.regular, 20.0, Rgb::BLACK);
    assert!(advance > 0.0);

    let mut ink = 0;
    for y in 0..50 {
      for x in 0..200 {
        if canvas.pixel(x, y) != Some(Rgb::WHITE) {
          ink += 1;
        }
      }
    }
    assert!(ink > 20, "expected glyph coverage, got {} dark pixels", ink);
  }

  #[test]
  fn test_draw_text_advance_matches_measure() {
    let library = FontLibrary::bundled().unwrap();
    let mut canvas = Canvas::new(300, 50).unwrap();
    let advance = canvas.draw_text("Этикетка", 0.0, 0.0, &library.regular, 16.0, Rgb::BLACK);
    let measured = measure::measure_width("Этикетка", &library.regular, 16.0);
    assert!((advance - measured).abs() < 0.01);
  }
}
