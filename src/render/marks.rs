//! Corner mark painting
//!
//! Marks are deliberately schematic: an amber square with "ГОСТ" for the
//! conformance mark, a green circle with the recycling symbol, and a
//! checkerboard placeholder where a real scan code would go. The
//! checkerboard is not a scannable code; it reserves the area and proves
//! the zone math in output images.

use crate::geometry::Rgb;
use crate::render::canvas::Canvas;
use crate::render::size_class::{FontTier, SizeClass};
use crate::render::zones::{MarkKind, ReservedZone};
use crate::text::fonts::FontLibrary;

const MARK_AMBER: Rgb = Rgb::new(0xf5, 0x9e, 0x0b);
const MARK_GREEN: Rgb = Rgb::new(0x10, 0xb9, 0x81);

/// Paints every reserved zone's mark onto the canvas
pub fn draw_marks(
  canvas: &mut Canvas,
  zones: &[ReservedZone],
  fonts: &FontLibrary,
  class: &SizeClass,
) {
  for zone in zones {
    match zone.kind {
      MarkKind::Gost => draw_gost(canvas, zone, fonts, class),
      MarkKind::Recycle => draw_recycle(canvas, zone, fonts, class),
      MarkKind::ScanCode => draw_scan_code(canvas, zone),
    }
  }
}

fn draw_gost(canvas: &mut Canvas, zone: &ReservedZone, fonts: &FontLibrary, class: &SizeClass) {
  let (x, y, size) = (zone.x as f32, zone.y as f32, zone.size as f32);
  canvas.stroke_rect(x, y, size, size, MARK_AMBER, 2.0);
  canvas.draw_text(
    "ГОСТ",
    x + size / 4.0,
    y + size / 4.0,
    &fonts.regular,
    class.font_px(FontTier::Small),
    MARK_AMBER,
  );
}

fn draw_recycle(canvas: &mut Canvas, zone: &ReservedZone, fonts: &FontLibrary, class: &SizeClass) {
  let (x, y, size) = (zone.x as f32, zone.y as f32, zone.size as f32);
  canvas.stroke_circle(x + size / 2.0, y + size / 2.0, size / 2.0, MARK_GREEN, 2.0);
  canvas.draw_text(
    "♻",
    x + size / 3.0,
    y + size / 3.0,
    &fonts.bold,
    class.font_px(FontTier::Medium),
    MARK_GREEN,
  );
}

/// Checkerboard placeholder: 6x6 cells inset by 4px inside a 2px border
fn draw_scan_code(canvas: &mut Canvas, zone: &ReservedZone) {
  let (x, y, size) = (zone.x as f32, zone.y as f32, zone.size as f32);
  canvas.stroke_rect(x, y, size, size, Rgb::BLACK, 2.0);

  let cell = ((zone.size - 8) / 6).max(2);
  for i in 0..6 {
    for j in 0..6 {
      if (i + j) % 2 == 1 {
        canvas.fill_rect(
          x + 4.0 + (i * cell) as f32,
          y + 4.0 + (j * cell) as f32,
          cell as f32,
          cell as f32,
          Rgb::BLACK,
        );
      }
    }
  }
}

// =============================================================================
// Tests
// =============================================================================
